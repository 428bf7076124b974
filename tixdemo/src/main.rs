use jwt_simple::prelude::HS256Key;
use tix_axum::start_server;
use tix_core::models::DateTime;
use tix_sqlite::Db;
use tixdemo::{AppConfig, Cli, impls::DemoApp, seed::Catalog};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Everything in the workspace reports through `tracing`; RUST_LOG picks
    // what reaches stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args and extract the JWT key
    let cli = Cli::import()?;
    let key = HS256Key::from_bytes(cli.secret.as_bytes());

    let AppConfig {
        server,
        database,
        seed,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;

    if let Some(path) = seed {
        Catalog::load(&path)?.apply(&db, DateTime::now()).await?;
    }

    start_server(server, DemoApp { db, key }).await?;
    Ok(())
}
