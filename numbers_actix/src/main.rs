#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use actix_web::{App, HttpServer};
use anyhow::Result;
use helper::env::{port_or, var_or};
use helper::env_var;
use helper::telemetry::{get_subscriber, init_subscriber};
use tracing::debug;

env_var!(HOST);
env_var!(PORT);

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    debug!("Tracing initialized.");

    let host = var_or(HOST, "0.0.0.0");
    let port = port_or(PORT, 3001)?;

    let server =
        HttpServer::new(|| App::new().configure(numbers_actix::routes));

    debug!("Starting server on {}:{}", host, port);
    server.bind((host.as_str(), port))?.run().await?;

    Ok(())
}
