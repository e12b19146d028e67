use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use userbase_rs::{AppState, Config, build_router, graceful_shutdown, stores::JsonFileUserStore};

#[tokio::main]
async fn main() {
    setup_logging();

    let config = Config::parse();
    let addr = config.socket_addr();

    let user_store = JsonFileUserStore::load(&config.data_path, config.hash_cost);
    let router = build_router(AppState::new(user_store));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("Server is listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
