use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wisata_api::RestApi;
use wisata_core::PlaceCatalog;
use wisata_pipeline::{Artifacts, RecommendEngine};

/// Tourism-place recommendations over precomputed embeddings
#[derive(Parser, Debug)]
#[command(name = "wisata")]
#[command(about = "A tourism-place recommendation service", long_about = None)]
struct Args {
    /// Path to the tourism dataset CSV
    #[arg(short, long, default_value = "./data/tourism.csv")]
    dataset: PathBuf,

    /// Directory containing the pretrained artifacts
    /// (tfidf_vectorizer.json, scaler.json, encoder.json)
    #[arg(short, long, default_value = "./artifacts")]
    artifacts_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting wisata v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);
    info!("Artifacts directory: {:?}", args.artifacts_dir);
    info!("HTTP API port: {}", args.http_port);

    // Startup is a hard precondition for serving: the catalog, artifacts
    // and full embedding matrix are built before the listener binds, and
    // any failure here aborts the process.
    let catalog = PlaceCatalog::from_csv_path(&args.dataset)?;
    info!("Loaded {} places", catalog.len());

    let artifacts = Artifacts::load_dir(&args.artifacts_dir)?;
    info!(
        "Artifacts loaded: vocabulary {}, embedding width {}",
        artifacts.tfidf.vocabulary_size(),
        artifacts.encoder.output_dim()
    );

    let engine = Arc::new(RecommendEngine::build(catalog, &artifacts)?);
    info!(
        "Embedding matrix ready: {} places x {} dimensions",
        engine.place_count(),
        engine.embedding_dim()
    );

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("wisata started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
