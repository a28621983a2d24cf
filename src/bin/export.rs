use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nursery_storefront_api::{
    config::AppConfig,
    db::create_orm_conn,
    transfer::{export_all, export_products_csv},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Every table as `<table>.json`
    Json,
    /// The catalog as `products.csv`
    Csv,
}

#[derive(Parser)]
#[command(name = "export", about = "Dump tables to JSON or the catalog to CSV", version)]
struct Cli {
    #[arg(long, default_value = "backup", help = "Directory to write the export into")]
    dir: PathBuf,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url, 1).await?;

    match cli.format {
        Format::Json => {
            for (table, rows) in export_all(&orm, &cli.dir).await? {
                println!("{table}: {rows} rows");
            }
        }
        Format::Csv => {
            let rows = export_products_csv(&orm, &cli.dir).await?;
            println!("products.csv: {rows} rows");
        }
    }
    println!("Export written to {}", cli.dir.display());
    Ok(())
}
