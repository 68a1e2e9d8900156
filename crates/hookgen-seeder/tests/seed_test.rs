use hookgen_event::{EventPayload, EventSynthesizer};
use hookgen_seeder::{BatchWriter, SeederConfig};
use hookgen_store::{entity, WebhookRepository};
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Statement};
use std::collections::HashSet;
use std::sync::Arc;

/// 创建测试用的 SQLite 数据库连接
async fn create_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS webhooks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            method TEXT NOT NULL,
            pathname TEXT NOT NULL,
            ip TEXT NOT NULL,
            status_code INTEGER NOT NULL,
            content_type TEXT NOT NULL,
            content_length INTEGER NOT NULL,
            query_params TEXT NOT NULL,
            headers TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#
        .to_string(),
    ))
    .await?;

    Ok(db)
}

/// 端到端：一次 run 写入 60 条记录，报告数与落库数一致
#[tokio::test]
async fn test_seed_run_writes_sixty_records() {
    let db = Arc::new(create_test_db().await.unwrap());
    let repository = WebhookRepository::new(db.clone());
    let config = SeederConfig {
        database_url: "sqlite::memory:".to_string(),
        ..SeederConfig::default()
    };
    let writer = BatchWriter::new(repository, config);

    let mut synth = EventSynthesizer::with_rng(StdRng::seed_from_u64(2024));
    let written = writer.run(&mut synth).await.unwrap();
    assert_eq!(written, 60);

    let rows = entity::Entity::find().all(db.as_ref()).await.unwrap();
    assert_eq!(rows.len(), 60);

    // 事件 ID 与对象 ID 均不重复
    let mut ids = HashSet::new();
    for row in &rows {
        let payload: EventPayload = serde_json::from_str(&row.body).unwrap();
        assert!(ids.insert(payload.id.clone()));
        assert!(ids.insert(payload.data.object.id.clone()));
    }
}

/// 存储失败时 run 直接报错，不做部分写入
#[tokio::test]
async fn test_seed_run_propagates_insert_failure() {
    // 不建表，插入必然失败
    let db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
    let repository = WebhookRepository::new(db.clone());
    let writer = BatchWriter::new(repository, SeederConfig::default());

    let mut synth = EventSynthesizer::with_rng(StdRng::seed_from_u64(9));
    let result = writer.run(&mut synth).await;
    assert!(result.is_err());
}
