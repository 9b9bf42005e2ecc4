use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while converting SVG files
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not an SVG file: {}", .0.display())]
    NotSvg(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Renderer reported success but wrote no file at {}", .0.display())]
    MissingOutput(PathBuf),
}
