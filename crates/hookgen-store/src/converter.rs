use crate::entity;
use hookgen_event::{RequestHeaders, WebhookRecord};
use sea_orm::ActiveValue::{NotSet, Set};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// WebhookRecord 与数据库实体的转换
impl From<WebhookRecord> for entity::ActiveModel {
    fn from(record: WebhookRecord) -> Self {
        Self {
            id: NotSet,
            method: Set(record.method),
            pathname: Set(record.pathname),
            ip: Set(record.ip),
            status_code: Set(record.status_code),
            content_type: Set(record.content_type),
            content_length: Set(record.content_length),
            query_params: Set(params_to_json(&record.query_params)),
            headers: Set(headers_to_json(&record.headers)),
            body: Set(record.body),
            created_at: Set(record.created_at),
        }
    }
}

/// 将查询参数映射转换为 JSON 列值
fn params_to_json(params: &HashMap<String, String>) -> JsonValue {
    serde_json::to_value(params).unwrap_or_default()
}

/// 将请求头转换为 JSON 列值
fn headers_to_json(headers: &RequestHeaders) -> JsonValue {
    serde_json::to_value(headers).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookgen_event::EventSynthesizer;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_record_to_active_model() {
        let mut synth = EventSynthesizer::with_rng(StdRng::seed_from_u64(100));
        let record = synth.synthesize().unwrap();
        let body = record.body.clone();
        let created_at = record.created_at;

        let model: entity::ActiveModel = record.into();
        assert_eq!(model.method.unwrap(), "POST");
        assert_eq!(model.pathname.unwrap(), "/webhooks/stripe");
        assert_eq!(model.status_code.unwrap(), 200);
        assert_eq!(model.body.unwrap(), body);
        assert_eq!(model.created_at.unwrap(), created_at);
    }

    #[test]
    fn test_header_json_keys() {
        let mut synth = EventSynthesizer::with_rng(StdRng::seed_from_u64(101));
        let record = synth.synthesize().unwrap();

        let headers = headers_to_json(&record.headers);
        let map = headers.as_object().unwrap();
        assert_eq!(map.len(), 6);
        for key in [
            "content-type",
            "stripe-signature",
            "user-agent",
            "accept",
            "host",
            "connection",
        ] {
            assert!(map.contains_key(key), "missing header key: {}", key);
        }
    }

    #[test]
    fn test_empty_query_params_json() {
        let params = HashMap::new();
        assert_eq!(params_to_json(&params), serde_json::json!({}));
    }
}
