//! # research-wrapped
//!
//! Shareable "wrapped" summary cards for researchers, built from the word and
//! topic frequencies an analysis backend reports for an ORCID or OpenAlex author.
//!
//! ## Modules
//!
//! - [`identifier`] - ORCID / OpenAlex author ID classification
//! - [`client`] - Analysis backend HTTP client
//! - [`model`] - Analysis result types
//! - [`list`] - Ranked list rendering
//! - [`card`] - Fixed-layout card compositor and canvases
//! - [`font`] - Font discovery and glyph outlines
//! - [`share`] - Share link construction
//! - [`controller`] - Form / submit / result state machine
//! - [`server`] - Server-rendered HTML front-end
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use research_wrapped::card::{RasterCanvas, CARD_HEIGHT, CARD_WIDTH};
//! use research_wrapped::client::AnalysisClient;
//! use research_wrapped::controller::Controller;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let canvas = RasterCanvas::new(CARD_WIDTH, CARD_HEIGHT, None)?;
//!     let mut controller = Controller::new(AnalysisClient::new()?, canvas);
//!     controller.form.identifier = "0000-0002-1825-0097".into();
//!     controller.form.backend_url = "http://127.0.0.1:5000".into();
//!     controller.submit().await?;
//!     controller.download(std::path::Path::new("."))?;
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod client;
pub mod controller;
pub mod error;
pub mod font;
pub mod identifier;
pub mod list;
pub mod model;
pub mod server;
pub mod share;

pub use error::{Result, WrappedError};
