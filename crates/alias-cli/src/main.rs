use alias::services::store::NameStore;
use clap::Parser;
use directories::ProjectDirs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Declare the modules we created.
mod clipboard;
mod core;
mod prompt;

/// Generates disposable crosseven.com alias addresses and copies them to
/// the clipboard.
#[derive(Parser, Debug)]
#[command(name = "alias-cli", version, about)]
struct Args {
    /// Name to derive the alias from; omit it to get the interactive prompt.
    name: Option<String>,

    /// Print the address without copying it to the clipboard.
    #[arg(long)]
    no_copy: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // JSON logs go to stderr so the prompt and results own stdout. Quiet by
    // default; RUST_LOG=usage=info surfaces the usage events.
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Last-name persistence is best-effort: without a home directory it is
    // silently disabled and everything else still works.
    let store = match ProjectDirs::from("com", "crosseven", "alias-cli") {
        Some(dirs) => Some(NameStore::new(dirs.data_dir())),
        None => {
            debug!("no home directory; last-name persistence disabled");
            None
        }
    };

    let args = Args::parse();
    match args.name {
        Some(name) => {
            // One-shot failures show the same user-facing text the prompt
            // loop prints, not a debug dump.
            if let Err(e) = core::run_once(&name, !args.no_copy, store.as_ref()).await {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        None => prompt::run(store.as_ref()).await?,
    }

    Ok(())
}
