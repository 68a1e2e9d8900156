use crate::entity;
use crate::error::Result;
use hookgen_event::WebhookRecord;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tracing::{debug, info};

/// Webhook 记录仓库
///
/// 只承担批量写入，记录写入后不再读取、更新或删除。
pub struct WebhookRepository {
    db: Arc<DatabaseConnection>,
}

impl WebhookRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 单次批量写入 webhook 记录，返回提交的条数
    ///
    /// 写入失败直接向上传播，不重试也不做部分写入处理。
    pub async fn insert_many(&self, records: Vec<WebhookRecord>) -> Result<u64> {
        // sea-orm 的 insert_many 不接受空集合
        if records.is_empty() {
            return Ok(0);
        }

        let count = records.len() as u64;
        let models: Vec<entity::ActiveModel> = records.into_iter().map(Into::into).collect();

        debug!(count = count, "Submitting webhook batch insert");

        entity::Entity::insert_many(models).exec(&*self.db).await?;

        info!(count = count, "Webhook records inserted");
        Ok(count)
    }
}
