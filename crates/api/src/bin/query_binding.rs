//! Binds and validates a person from the query string.

use bindkit_api::config::ServerConfig;
use bindkit_api::{routes, server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    server::init_tracing();

    let config = ServerConfig::from_env(routes::person::defaults());
    tracing::info!(
        service = config.service,
        addr = %config.socket_addr(),
        cors = ?config.cors,
        "Loaded server configuration"
    );

    let addr = config.socket_addr();
    let app = server::build_app(routes::person::router(), config);

    server::serve(app, addr).await.expect("Server error");
}
