//! Renderers turning one SVG file into one PDF file

use crate::ConvertError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Renders a single SVG file to a PDF file
pub trait SvgRenderer {
    /// Render `input` to `output`; the parent of `output` already exists
    fn render(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}

/// Runs an external converter as `<program> -f pdf -o <output> <input>`
///
/// The argument convention is the one of `rsvg-convert` (librsvg).
#[derive(Debug, Clone)]
pub struct ExternalRenderer {
    program: String,
    leading_args: Vec<String>,
}

impl ExternalRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Pass extra arguments before the conversion arguments
    pub fn with_leading_args(
        mut self,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SvgRenderer for ExternalRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        log::debug!(
            "Running {} -f pdf -o {} {}",
            self.program,
            output.display(),
            input.display()
        );

        let result = Command::new(&self.program)
            .args(&self.leading_args)
            .args(["-f", "pdf", "-o"])
            .arg(output)
            .arg(input)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ConvertError::RendererFailed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
