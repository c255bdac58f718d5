use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port to bind on 127.0.0.1
    #[arg(short, long, default_value_t = 8169)]
    pub port: u16,

    /// Directory containing the catalog page and the rest of the docs
    #[arg(long, default_value = ".")]
    pub docs_dir: PathBuf,

    /// UI directory holding the Assets tree (defaults to <docs-dir>/../UI)
    #[arg(long)]
    pub ui_dir: Option<PathBuf>,
}
