use clap::Parser;
use doh_proxy_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "doh-proxy")]
#[command(version)]
#[command(about = "HTTP front-end for DNS-over-HTTPS JSON lookups")]
struct Cli {
    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream DoH JSON endpoint
    #[arg(short = 'u', long, value_name = "URL")]
    upstream: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(short = 't', long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        upstream_url: cli.upstream,
        upstream_timeout_secs: cli.timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting doh-proxy v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    let bind_addr = config.bind_addr()?;
    server::start_web_server(bind_addr, services.app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
