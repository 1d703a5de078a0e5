//! Steamcard - Steam profiles rendered as shareable business cards.
//!
//! This crate provides a small HTTP server that looks up a Steam user
//! through a profile backend, renders the result as a dark "gamer business
//! card" (avatar, stats strip, top played games, QR code to the profile),
//! and exports that card as a PNG image or a single-page PDF.
//!
//! # Architecture
//!
//! - **Client**: Fetches `GET {backend}/api/steam-user/{id}` and decodes the
//!   profile payload
//! - **Container**: Holds the single displayed profile behind a request
//!   lifecycle (`Idle`/`Loading`/`Loaded`/`NotFound`) with a token guard so
//!   rapid re-submissions never interleave
//! - **Render**: Generates the card page with maud (compile-time templates)
//!   and the export layout as an SVG document
//! - **Capture**: Settles all referenced images, rasterizes the SVG via
//!   resvg, and wraps the bitmap as PNG or PDF downloads
//!
//! # URL Pattern
//!
//! ```text
//! GET /                     - form + current card state
//! GET /lookup?steam_id=...  - submit a lookup, then redirect to /
//! GET /card.png             - download the loaded card as PNG
//! GET /card.pdf             - download the loaded card as PDF
//! GET /health               - JSON health probe
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud; SVG text is escaped by hand
//! - Remote URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Content-Security-Policy: no external scripts, no frames, images over
//!   HTTPS/HTTP/data only
//! - X-Frame-Options: DENY prevents clickjacking

pub mod capture;
pub mod client;
pub mod config;
pub mod container;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
