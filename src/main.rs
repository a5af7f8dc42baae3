//! research-wrapped - shareable researcher summary cards
//!
//! ## Usage
//!
//! ### CLI Mode
//! ```bash
//! research-wrapped wrap 0000-0002-1825-0097 --backend http://127.0.0.1:5000 --download
//! ```
//!
//! ### HTTP Server Mode
//! ```bash
//! research-wrapped serve --port 3000
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use research_wrapped::{
    card::{RasterCanvas, CARD_HEIGHT, CARD_WIDTH},
    client::AnalysisClient,
    controller::{Controller, Phase},
    font::FontBook,
    identifier::parse_identifier,
    list::ListView,
    server::{self, AppState},
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Research Wrapped - shareable researcher summary cards
#[derive(Parser)]
#[command(name = "research-wrapped")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an analysis and render the wrapped card
    Wrap {
        /// ORCID (e.g. 0000-0002-1825-0097) or OpenAlex author ID (e.g. A5023888391)
        identifier: String,

        /// Analysis backend base URL
        #[arg(long)]
        backend: String,

        /// Save the card as research-wrapped.png
        #[arg(long)]
        download: bool,

        /// Directory for the saved card (default: your downloads folder)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Extra font file preferred over system fonts
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Show which query parameter an identifier maps to
    Classify {
        identifier: String,
    },

    /// Run as HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Extra font file preferred over system fonts
        #[arg(long)]
        font: Option<PathBuf>,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    if cli.json_logs {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .init();
    }

    match cli.command {
        Commands::Wrap {
            identifier,
            backend,
            download,
            out,
            font,
        } => run_wrap(identifier, backend, download, out, font).await,
        Commands::Classify { identifier } => {
            let params = parse_identifier(&identifier);
            if params.is_empty() {
                anyhow::bail!("Identifier is empty");
            }
            println!("{}", params);
            Ok(())
        }
        Commands::Serve { port, host, font } => run_server(host, port, font).await,
    }
}

/// Card text needs fonts; without them the card still renders its shapes.
fn load_fonts(font: Option<&Path>) -> Result<Option<FontBook>> {
    match FontBook::load(font) {
        Ok(fonts) => Ok(Some(fonts)),
        Err(e) if font.is_some() => Err(anyhow::Error::new(e).context("Failed to load --font")),
        Err(e) => {
            warn!(error = %e, "Card text will not be rendered");
            Ok(None)
        }
    }
}

// ============================================================================
// Wrap
// ============================================================================

async fn run_wrap(
    identifier: String,
    backend: String,
    download: bool,
    out: Option<PathBuf>,
    font: Option<PathBuf>,
) -> Result<()> {
    let fonts = load_fonts(font.as_deref())?;
    let canvas = RasterCanvas::new(CARD_WIDTH, CARD_HEIGHT, fonts)?;
    let mut controller = Controller::new(AnalysisClient::new()?, canvas);
    controller.form.identifier = identifier;
    controller.form.backend_url = backend;

    let phase = match controller.submit().await {
        Ok(phase) => phase,
        Err(e) => {
            let alert = controller
                .alert()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string());
            anyhow::bail!("{}", alert);
        }
    };

    if phase != Phase::Success {
        let message = controller.error_message().unwrap_or("Analysis failed");
        anyhow::bail!("{}", message);
    }

    if let Some(result) = controller.result() {
        println!("\n{}", result.display_name());
        println!("{}", result.caption());
        if let (Some(total), Some(unique)) = (result.total_words, result.unique_words) {
            println!("{} words, {} unique", total, unique);
        }
        if let Some(score) = result.diversity_score {
            println!("Vocabulary diversity: {:.2}", score);
        }
    }

    let view = controller.view();
    print_list("Top words", &view.words);
    print_list("Top verbs", &view.verbs);
    print_list("Topics", &view.topics);

    if let Some(link) = &view.share_link {
        println!("\nShare: {}", link);
    }

    if download {
        let dir = out.unwrap_or_else(default_download_dir);
        let path = controller
            .download(&dir)
            .with_context(|| format!("Failed to save card to {}", dir.display()))?;
        println!("\n✓ Card saved: {}", path.display());
    }

    Ok(())
}

fn print_list(title: &str, list: &ListView) {
    println!("\n--- {} ---", title);
    for entry in list.entries() {
        println!("  {}", entry);
    }
}

/// The user's download folder, or the working directory when there is none.
fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

// ============================================================================
// HTTP Server
// ============================================================================

async fn run_server(host: String, port: u16, font: Option<PathBuf>) -> Result<()> {
    info!(host = %host, port = port, "Starting HTTP server");

    let fonts = load_fonts(font.as_deref())?;
    let state = Arc::new(AppState::new(AnalysisClient::new()?, fonts));
    let app = server::router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid host:port")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
