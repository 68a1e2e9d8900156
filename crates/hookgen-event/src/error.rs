use thiserror::Error;

/// 事件合成错误类型
#[derive(Error, Debug)]
pub enum EventError {
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 事件合成结果类型
pub type Result<T> = std::result::Result<T, EventError>;
