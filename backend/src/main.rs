use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, clap::Parser)]
struct Args {
    /// Server log parsed once at startup
    #[arg(long, default_value = "games.log")]
    log_file: std::path::PathBuf,

    /// Address the query API listens on
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Print the console reports instead of serving
    #[arg(long)]
    report: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    let args = Args::parse();

    tracing::info!("Starting...");

    let state = backend::AppState::load(&args.log_file)
        .unwrap_or_else(|e| panic!("Reading server log {:?} - {:?}", args.log_file, e));
    tracing::info!("Parsed {} games from {:?}", state.games.len(), args.log_file);

    if args.report {
        backend::report::print_reports(&state);
        return;
    }

    let state = std::sync::Arc::new(state);

    let router = axum::Router::new().nest("/api/", backend::api::router(state));

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .unwrap_or_else(|e| panic!("Binding to {} - {:?}", args.listen, e));
    tracing::info!("Serving on {}", args.listen);

    axum::serve(listener, router).await.unwrap();
}
