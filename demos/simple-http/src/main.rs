//! Simple HTTP agent - serves a status page and logs each request.

use std::net::SocketAddr;

use aegis_sdk::log;
use anyhow::Context;
use clap::Parser;
use simple_http::{AppState, router};
use tracing::debug;

#[derive(Parser)]
#[command(name = "simple-http")]
#[command(about = "Minimal HTTP agent demonstrating secrets, workspace and logging")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "80")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aegis_sdk::logging::init();

    let args = Args::parse();
    log::info("starting server", &[("port", args.port.into())])?;

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("parse bind address {}:{}", args.bind, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    debug!(addr = %addr, "listening");

    axum::serve(listener, router(AppState::from_env())).await?;
    Ok(())
}
