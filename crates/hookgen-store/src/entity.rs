use chrono::{DateTime as ChronoDateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Webhook 请求记录实体
///
/// 持久化身份（自增主键）由数据库在写入时分配。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "webhooks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub method: String,
    pub pathname: String,
    pub ip: String,
    pub status_code: i32,
    pub content_type: String,
    pub content_length: i32,
    pub query_params: Json,
    pub headers: Json,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub created_at: ChronoDateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
