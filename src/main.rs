use clap::Parser;

use tower_lsp::{LspService, Server};
use tracing::info;

use fcs_language_server::config::AnalysisConfig;
use fcs_language_server::logging::init_logger;
use fcs_language_server::lsp::FcsBackend;

/// Language server for FCS engineering report files.
#[derive(Parser, Debug)]
#[command(name = "fcs-language-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter for stderr output, e.g. "debug" or "fcs_language_server=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in stderr output
    #[arg(long)]
    no_color: bool,

    /// Do not write a session log to the cache directory
    #[arg(long)]
    no_file_logging: bool,

    /// Communicate over stdin/stdout. This is the only transport and the default.
    #[arg(long)]
    stdio: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logger(args.no_color, args.log_level.as_deref(), !args.no_file_logging)?;

    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if !args.stdio {
        info!("No transport selected, serving over stdio");
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| {
        FcsBackend::new(client, AnalysisConfig::from_env_or_default(None))
    });

    Server::new(stdin, stdout, socket)
        .serve(service)
        .await;

    info!("Language server stopped");
    Ok(())
}
