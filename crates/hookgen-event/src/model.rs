use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 一条模拟的入站 webhook 请求记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRecord {
    pub method: String,
    pub pathname: String,
    pub ip: String,
    pub status_code: i32,
    pub content_type: String,
    /// body 的 UTF-8 字节长度
    pub content_length: i32,
    pub query_params: HashMap<String, String>,
    pub headers: RequestHeaders,
    /// 事件负载的 JSON 文本（两空格缩进）
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// 请求头集合，键名与线上格式一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestHeaders {
    #[serde(rename = "content-type")]
    pub content_type: String,
    #[serde(rename = "stripe-signature")]
    pub stripe_signature: String,
    #[serde(rename = "user-agent")]
    pub user_agent: String,
    pub accept: String,
    pub host: String,
    pub connection: String,
}

/// Stripe 事件负载
///
/// 字段声明顺序即序列化顺序，与 Stripe 事件对象一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub id: String,
    pub object: String,
    pub api_version: String,
    /// Unix 秒
    pub created: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub livemode: bool,
    pub pending_webhooks: i64,
    pub data: EventData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub object: EventObject,
}

/// 事件涉及的资源对象
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventObject {
    pub id: String,
    pub object: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub customer: String,
    pub description: String,
    pub metadata: HashMap<String, String>,
}

impl EventPayload {
    /// 序列化为两空格缩进的 JSON 文本
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
