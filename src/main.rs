mod app;
mod config;
mod routes;
mod types;

use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting google-places-mock...");

    let config = config::AppConfig::from_env().unwrap_or_else(|err| panic!("{}", err));
    let addr = config.addr();

    info!(
        "Serving variant {:?} with place status {:?} on {}",
        config.variant, config.place_status, addr
    );

    let app = app::gen_app(config);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
