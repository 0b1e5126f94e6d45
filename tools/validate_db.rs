use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use lightbnb_store::infrastructure::persistence::IntegrityReport;
use lightbnb_store::Config;

/// Report rows that break assumptions the data-access layer relies on.
/// Read-only: nothing is modified.
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Maximum offending rows to print per check
    #[arg(long, default_value_t = 20)]
    show: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .unwrap_or_else(|| Config::from_env().database_url);

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db_url)
        .await?;

    let report = IntegrityReport::collect(&pool, cli.show).await;
    pool.close().await;
    let report = report?;

    for check in report.checks.iter() {
        println!("{}: {}", check.label, check.total);
        for sample in check.samples.iter() {
            println!("  {}: {}", sample.id, sample.detail);
        }
        let hidden = check.total - check.samples.len() as i64;
        if hidden > 0 {
            println!("  ... and {} more", hidden);
        }
    }

    println!(
        "Properties with no reviews (hidden from search): {}",
        report.unreviewed_properties
    );

    let problems = report.problems();
    if problems > 0 {
        anyhow::bail!("{} invalid rows found", problems);
    }
    Ok(())
}
