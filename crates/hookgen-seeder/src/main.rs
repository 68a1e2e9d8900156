use clap::Parser;
use hookgen_event::EventSynthesizer;
use hookgen_seeder::{BatchWriter, SeederConfig};
use hookgen_store::WebhookRepository;
use sea_orm::Database;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Database connection string
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let args = Args::parse();

    let mut config = SeederConfig::default();
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    tracing::info!(database_url = %config.database_url, "Connecting to database");
    let db = Database::connect(&config.database_url).await?;

    let repository = WebhookRepository::new(Arc::new(db));
    let writer = BatchWriter::new(repository, config.clone());
    let mut synth = EventSynthesizer::from_entropy().with_window_days(config.window_days);

    let written = writer.run(&mut synth).await?;

    println!("Seeded {} Stripe webhook events.", written);
    Ok(())
}
