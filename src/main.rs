//! Orcho MCP server binary.
//!
//! Reads configuration from the environment, then serves the `assess_risk`
//! tool over stdio until the client disconnects.

use clap::Parser;
use tracing::error;

use orcho_mcp::config::OrchoConfig;
use orcho_mcp::mcp::server::run_server;
use orcho_mcp::observability::init_logging;

#[derive(Parser)]
#[command(
    name = "orcho-mcp",
    version,
    about = "Prompt risk assessment MCP server (stdio)"
)]
struct Cli {
    /// Log full outbound requests and inbound responses (same as ORCHO_DEBUG=1).
    #[arg(long)]
    debug: bool,

    /// Print the Cursor install config and deeplink, then exit.
    #[arg(long)]
    print_install_config: bool,
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if cli.print_install_config {
        let command = std::env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "orcho-mcp".to_string());
        let api_key = std::env::var("ORCHO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| "YOUR_ORCHO_API_KEY".to_string());
        println!("{}", orcho_mcp::install::render_install_config(&command, &api_key));
        return;
    }

    let mut config = match OrchoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    if cli.debug {
        config.debug = true;
    }

    if let Err(e) = run_server(config).await {
        error!("{e}");
        std::process::exit(1);
    }
}
