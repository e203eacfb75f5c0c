#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::net::IpAddr;

use anyhow::{Context, Result};
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

    let host: IpAddr = var_or(HOST, "0.0.0.0")
        .parse()
        .context("HOST is not a valid IP address")?;
    let port = port_or(PORT, 3002)?;

    debug!("Starting server on {}:{}", host, port);
    warp::serve(numbers_warp::routes()).run((host, port)).await;

    Ok(())
}
