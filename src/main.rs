use std::path::PathBuf;

use clap::Parser;

use quay::config::Config;
use quay::files::FsRoute;
use quay::routing::Router;
use quay::server::Server;

#[derive(Parser)]
#[command(name = "quay", version, about = "Serve a directory over HTTP/1.1")]
struct Cli {
    /// Port to listen on
    #[arg(short = 'p', long)]
    port: u16,

    /// Directory to serve
    #[arg(short = 'd', long = "dir")]
    content_root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = Config::new(cli.port, cli.content_root)?;

    let mut router = Router::new();
    router.register(Box::new(FsRoute::new(cfg.content_root.clone())));

    let mut server = Server::new(cfg.listen_addr.clone(), router);
    server.start().await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    server.shutdown();

    Ok(())
}
