use crate::config::SeederConfig;
use hookgen_event::EventSynthesizer;
use hookgen_store::WebhookRepository;
use rand::Rng;
use tracing::info;

/// 批量写入器
///
/// 合成固定条数的记录后一次性提交给仓库，顺序执行，不可重入。
pub struct BatchWriter {
    repository: WebhookRepository,
    config: SeederConfig,
}

impl BatchWriter {
    pub fn new(repository: WebhookRepository, config: SeederConfig) -> Self {
        Self { repository, config }
    }

    /// 合成并写入一批 webhook 记录，返回写入条数
    ///
    /// 存储失败不捕获、不重试，错误直接传播给调用方。
    pub async fn run<R: Rng>(&self, synth: &mut EventSynthesizer<R>) -> anyhow::Result<u64> {
        let mut records = Vec::with_capacity(self.config.record_count);
        for _ in 0..self.config.record_count {
            records.push(synth.synthesize()?);
        }

        let written = self.repository.insert_many(records).await?;

        info!(count = written, "Seed batch written");
        Ok(written)
    }
}
