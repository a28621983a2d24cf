use std::path::PathBuf;

use clap::Parser;
use nursery_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    transfer::import_all,
};

#[derive(Parser)]
#[command(name = "import", about = "Load tables from JSON files written by export", version)]
struct Cli {
    #[arg(long, default_value = "backup", help = "Directory holding <table>.json files")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("warn").init();
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url, 1).await?;
    run_migrations(&orm).await?;

    for report in import_all(&orm, &cli.dir).await? {
        if report.missing {
            println!("{}: no file, skipped", report.table);
        } else {
            println!(
                "{}: {} inserted, {} failed",
                report.table, report.inserted, report.failed
            );
        }
    }
    Ok(())
}
