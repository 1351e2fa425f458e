use axum::serve;
use poke_review_api::api::handlers::AppState;
use poke_review_api::api::routes::create_router;
use poke_review_api::config::AppConfig;
use poke_review_api::media::MediaClient;
use poke_review_api::seed;
use poke_review_api::store::PostgresStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn)
        .init();

    println!("Pokemon Review Catalog Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    println!("Connecting to PostgreSQL...");
    let database_url = config.database_url()?;
    let postgres_store = PostgresStore::new(&database_url).await?;

    println!("Running database migrations...");
    postgres_store.migrate().await?;
    println!("Database ready");

    let media = MediaClient::new(config.media_upload_url()?);
    let store = Arc::new(postgres_store);

    // Optional one-shot data seeding: `poke-review-api seeddata`
    if std::env::args().nth(1).map(|arg| arg.to_lowercase()) == Some("seeddata".to_string()) {
        println!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
        println!("Seed data loaded successfully");
    }

    let state = AppState {
        store,
        media: Arc::new(media),
    };

    run_server(create_router().with_state(state), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!(
        "Pokemon review API running on http://{}",
        bind_address
    );

    serve(listener, app).await?;

    Ok(())
}
