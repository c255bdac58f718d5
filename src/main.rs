use clap::Parser;
use tracing_subscriber::EnvFilter;

use iconserve::cli::Args;
use iconserve::resolve::CatalogRoots;
use iconserve::server;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let roots = CatalogRoots::locate(&args.docs_dir, args.ui_dir.as_deref())?;
    server::serve(roots, args.port).await
}

/// Diagnostics go to stderr and stay off unless `RUST_LOG` asks for them;
/// stdout belongs to the single startup line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
