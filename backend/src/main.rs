use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use reframe_api::config::Config;
use reframe_api::services::generation::ReframeService;
use reframe_api::build_router;

#[derive(Parser, Debug)]
#[command(name = "reframe-api", version, about = "Topic reframing service")]
struct Args {
    /// Path to the configuration file (default: conf/config.toml lookup)
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let _guard = init_logging(&config)?;

    let service = Arc::new(ReframeService::from_config(&config.llm));
    let app = build_router(service);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing output. The returned guard must stay alive for
/// the life of the process when file logging is enabled.
fn init_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match &config.logging.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or_else(|| "reframe-api.log".as_ref());
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        },
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            Ok(None)
        },
    }
}
