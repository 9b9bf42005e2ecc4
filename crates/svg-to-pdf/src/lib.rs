//! SVG to PDF conversion
//!
//! LaTeX builds of the documentation cannot embed SVG diagrams, so they are
//! converted to PDF first. Rendering is delegated to an [`SvgRenderer`];
//! [`ExternalRenderer`] runs an `rsvg-convert` compatible program.
//!
//! # Example
//!
//! ```no_run
//! use svg_to_pdf::{convert_directory, ExternalRenderer};
//! use std::path::Path;
//!
//! let renderer = ExternalRenderer::new("rsvg-convert");
//! let converted = convert_directory(&renderer, Path::new("images"), Some(Path::new("pdfs")))?;
//! println!("Successfully converted {converted} SVG files");
//! # Ok::<(), svg_to_pdf::ConvertError>(())
//! ```

mod convert;
mod error;
mod renderer;

pub use convert::{convert_directory, convert_svg_to_pdf, is_svg, pdf_output_path};
pub use error::ConvertError;
pub use renderer::{ExternalRenderer, SvgRenderer};
