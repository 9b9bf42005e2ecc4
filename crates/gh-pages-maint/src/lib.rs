//! Shared setup for the gh-pages maintenance commands
//!
//! - `cleanup-old-prs`: remove previews of closed pull requests from `prs/`
//! - `generate-index`: write the landing page `index.html`
//! - `svg2pdf`: convert SVG diagrams to PDF for LaTeX builds

pub mod context;
pub mod logger;

pub use context::RunContext;
