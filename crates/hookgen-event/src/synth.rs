use crate::catalog::{
    object_id_prefix, resource_of, CURRENCIES, EVENT_TYPES, OBJECT_STATUSES, PRODUCT_ADJECTIVES,
    PRODUCT_MATERIALS, PRODUCT_NAMES,
};
use crate::error::Result;
use crate::model::{EventData, EventObject, EventPayload, RequestHeaders, WebhookRecord};
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// 时间采样窗口（天）
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// webhook 请求路径
pub const WEBHOOK_PATH: &str = "/webhooks/stripe";

/// Host 请求头
pub const WEBHOOK_HOST: &str = "localhost:3333";

/// Stripe 回调的 User-Agent
pub const STRIPE_USER_AGENT: &str = "Stripe/1.0 (+https://stripe.com/docs/webhooks)";

/// 事件负载声明的 API 版本
pub const STRIPE_API_VERSION: &str = "2024-06-20";

/// Webhook 事件合成器
///
/// 随机源通过类型参数注入，测试可传入固定种子的 [`StdRng`] 获得可复现输出。
pub struct EventSynthesizer<R: Rng> {
    rng: R,
    window_days: i64,
}

impl EventSynthesizer<StdRng> {
    /// 使用系统熵源创建合成器
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> EventSynthesizer<R> {
    /// 使用给定随机源创建合成器
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    /// 合成一条完整的 webhook 请求记录
    ///
    /// 除 resource↔前缀、id↔类型的派生关系外，各随机字段相互独立；
    /// `created_at` 与负载内 `created` 来自两次独立的窗口采样。
    pub fn synthesize(&mut self) -> Result<WebhookRecord> {
        let event_type = self.pick(EVENT_TYPES);
        let resource = resource_of(event_type);
        let prefix = object_id_prefix(resource);

        let event_id = format!("evt_{}", self.alphanumeric(24));
        let object_id = format!("{}_{}", prefix, self.alphanumeric(24));

        let payload = EventPayload {
            id: event_id,
            object: "event".to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
            created: self.recent_date().timestamp(),
            event_type: event_type.to_string(),
            livemode: false,
            pending_webhooks: self.rng.gen_range(1..=3),
            data: EventData {
                object: EventObject {
                    id: object_id,
                    object: resource.to_string(),
                    amount: self.rng.gen_range(500..=500_000),
                    currency: self.pick(CURRENCIES).to_string(),
                    status: self.pick(OBJECT_STATUSES).to_string(),
                    customer: format!("cus_{}", self.alphanumeric(14)),
                    description: self.product_name(),
                    metadata: HashMap::new(),
                },
            },
        };

        let body = payload.to_pretty_json()?;
        let content_length = body.len() as i32;

        Ok(WebhookRecord {
            method: "POST".to_string(),
            pathname: WEBHOOK_PATH.to_string(),
            ip: self.ipv4(),
            status_code: 200,
            content_type: "application/json".to_string(),
            content_length,
            query_params: HashMap::new(),
            headers: RequestHeaders {
                content_type: "application/json".to_string(),
                stripe_signature: self.stripe_signature(),
                user_agent: STRIPE_USER_AGENT.to_string(),
                accept: "*/*".to_string(),
                host: WEBHOOK_HOST.to_string(),
                connection: "keep-alive".to_string(),
            },
            body,
            created_at: self.recent_date(),
        })
    }

    /// 窗口内的随机时间点
    fn recent_date(&mut self) -> DateTime<Utc> {
        let span_ms = self.window_days * 24 * 60 * 60 * 1000;
        Utc::now() - Duration::milliseconds(self.rng.gen_range(0..span_ms))
    }

    /// `t=<当前毫秒>,v1=<64 位小写十六进制>` 形式的签名头
    fn stripe_signature(&mut self) -> String {
        let mut digest = [0u8; 32];
        self.rng.fill(&mut digest);
        format!("t={},v1={}", Utc::now().timestamp_millis(), hex::encode(digest))
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn ipv4(&mut self) -> String {
        Ipv4Addr::from(self.rng.gen::<[u8; 4]>()).to_string()
    }

    fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NAMES)
        )
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }
}
