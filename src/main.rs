//! CLI entry point for blogd

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogd")]
#[command(version)]
#[command(about = "A small blog server that lazily renders markdown posts", long_about = None)]
struct Cli {
    /// Directory containing the post documents
    #[arg(long, default_value = "posts")]
    posts_dir: PathBuf,

    /// IP address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    ip: String,

    /// Port to listen on
    #[arg(short, long, default_value = "42069")]
    port: u16,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blogd=debug,info"
    } else {
        "blogd=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let blog = blogd::Blog::new(&cli.posts_dir);

    // Startup is all-or-nothing: every post's metadata must parse
    // before the listener opens.
    let state = blog.load()?;

    blogd::server::start(state, &cli.ip, cli.port).await
}
