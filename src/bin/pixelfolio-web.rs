//! Pixelfolio mail relay binary.
//!
//! Starts the small HTTP service the contact form posts to. The
//! provider API key is read from the `RESEND_API_KEY` environment
//! variable; without it the relay answers every submission with the
//! "service not configured" error the TUI knows how to classify.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001)
//! RESEND_API_KEY=re_... pixelfolio-web
//!
//! # Specify port and host
//! pixelfolio-web --port 8080 --host 0.0.0.0
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelfolio::web;

/// Pixelfolio mail relay - forwards contact messages to the provider
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    web::run_server(api_key, addr).await
}
