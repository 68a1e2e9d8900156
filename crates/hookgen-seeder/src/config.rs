use serde::{Deserialize, Serialize};

/// 种子批次配置
///
/// 各字段都有固定默认值，行为与常量写死时一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// 单批写入的记录条数
    pub record_count: usize,
    /// 时间采样窗口（天）
    pub window_days: i64,
    /// 目标数据库连接串
    pub database_url: String,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            record_count: 60,
            window_days: 30,
            database_url: "postgres://localhost:5432/hookgen".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeederConfig::default();
        assert_eq!(config.record_count, 60);
        assert_eq!(config.window_days, 30);
        assert!(config.database_url.starts_with("postgres://"));
    }
}
