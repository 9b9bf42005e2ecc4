//! Single file and directory conversion

use crate::{ConvertError, SvgRenderer};
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether `path` has an `.svg` extension (any case)
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// `<stem>.pdf`, next to `input` or inside `output_dir`
pub fn pdf_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let pdf = input.with_extension("pdf");
    match (output_dir, pdf.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => pdf,
    }
}

/// Convert one SVG file to PDF
///
/// The output directory is created if needed. Returns the path of the
/// written PDF.
pub fn convert_svg_to_pdf(
    renderer: &dyn SvgRenderer,
    input: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::NotFound(input.to_path_buf()));
    }
    if !is_svg(input) {
        return Err(ConvertError::NotSvg(input.to_path_buf()));
    }

    let output = pdf_output_path(input, output_dir);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    renderer.render(input, &output)?;

    if !output.is_file() {
        return Err(ConvertError::MissingOutput(output));
    }

    info!(
        "Conversion completed: {} → {}",
        input.display(),
        output.display()
    );
    Ok(output)
}

/// Convert every `*.svg` file directly inside `input_dir`
///
/// Subdirectories are not visited. A file that fails to convert is logged
/// and not counted. Returns the number of files converted.
pub fn convert_directory(
    renderer: &dyn SvgRenderer,
    input_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<usize, ConvertError> {
    if !input_dir.is_dir() {
        return Err(ConvertError::NotADirectory(input_dir.to_path_buf()));
    }

    let io_err = |source: std::io::Error| ConvertError::Io {
        path: input_dir.to_path_buf(),
        source,
    };
    let mut svg_files = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_svg(&path) {
            svg_files.push(path);
        }
    }
    svg_files.sort();

    if svg_files.is_empty() {
        warn!("No SVG files found in {}", input_dir.display());
        return Ok(0);
    }

    let mut successful = 0;
    for svg_file in &svg_files {
        match convert_svg_to_pdf(renderer, svg_file, output_dir) {
            Ok(_) => successful += 1,
            Err(e) => error!("Error during conversion of {}: {}", svg_file.display(), e),
        }
    }

    Ok(successful)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Writes a stub PDF and remembers what it was asked to render
    #[derive(Default)]
    struct StubRenderer {
        rendered: RefCell<Vec<(PathBuf, PathBuf)>>,
    }

    impl SvgRenderer for StubRenderer {
        fn render(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
            fs::write(output, "%PDF-1.4\n").map_err(|source| ConvertError::Io {
                path: output.to_path_buf(),
                source,
            })?;
            self.rendered
                .borrow_mut()
                .push((input.to_path_buf(), output.to_path_buf()));
            Ok(())
        }
    }

    /// Fails on files whose name contains "broken"
    struct PickyRenderer;

    impl SvgRenderer for PickyRenderer {
        fn render(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
            if input.to_string_lossy().contains("broken") {
                return Err(ConvertError::NotSvg(input.to_path_buf()));
            }
            fs::write(output, "%PDF-1.4\n").map_err(|source| ConvertError::Io {
                path: output.to_path_buf(),
                source,
            })
        }
    }

    /// Claims success without writing anything
    struct SilentRenderer;

    impl SvgRenderer for SilentRenderer {
        fn render(&self, _input: &Path, _output: &Path) -> Result<(), ConvertError> {
            Ok(())
        }
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("diagram.svg")));
        assert!(is_svg(Path::new("DIAGRAM.SVG")));
        assert!(!is_svg(Path::new("diagram.png")));
        assert!(!is_svg(Path::new("svg")));
    }

    #[test]
    fn test_pdf_output_path() {
        assert_eq!(
            pdf_output_path(Path::new("img/flow.svg"), None),
            PathBuf::from("img/flow.pdf")
        );
        assert_eq!(
            pdf_output_path(Path::new("img/flow.svg"), Some(Path::new("pdfs"))),
            PathBuf::from("pdfs/flow.pdf")
        );
    }

    #[test]
    fn test_convert_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flow.svg");
        fs::write(&input, "<svg/>").unwrap();
        let renderer = StubRenderer::default();

        let output = convert_svg_to_pdf(&renderer, &input, None).unwrap();

        assert_eq!(output, dir.path().join("flow.pdf"));
        assert!(output.is_file());
    }

    #[test]
    fn test_convert_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flow.svg");
        fs::write(&input, "<svg/>").unwrap();
        let out_dir = dir.path().join("build/pdfs");

        let output = convert_svg_to_pdf(&StubRenderer::default(), &input, Some(&out_dir)).unwrap();

        assert_eq!(output, out_dir.join("flow.pdf"));
        assert!(output.is_file());
    }

    #[test]
    fn test_convert_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            convert_svg_to_pdf(&StubRenderer::default(), &dir.path().join("nope.svg"), None)
                .unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
    }

    #[test]
    fn test_convert_rejects_non_svg() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        fs::write(&input, "png").unwrap();
        let renderer = StubRenderer::default();

        let err = convert_svg_to_pdf(&renderer, &input, None).unwrap_err();

        assert!(matches!(err, ConvertError::NotSvg(_)));
        assert!(renderer.rendered.borrow().is_empty());
    }

    #[test]
    fn test_convert_detects_missing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flow.svg");
        fs::write(&input, "<svg/>").unwrap();

        let err = convert_svg_to_pdf(&SilentRenderer, &input, None).unwrap_err();

        assert!(matches!(err, ConvertError::MissingOutput(_)));
    }

    #[test]
    fn test_convert_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.svg", "b.SVG", "notes.txt"] {
            fs::write(dir.path().join(name), "<svg/>").unwrap();
        }
        fs::create_dir(dir.path().join("nested.svg")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.svg"), "<svg/>").unwrap();
        let renderer = StubRenderer::default();

        let converted = convert_directory(&renderer, dir.path(), None).unwrap();

        assert_eq!(converted, 2);
        let inputs: Vec<PathBuf> = renderer
            .rendered
            .borrow()
            .iter()
            .map(|(input, _)| input.clone())
            .collect();
        assert_eq!(inputs, vec![dir.path().join("a.svg"), dir.path().join("b.SVG")]);
        assert!(!dir.path().join("sub/c.pdf").exists());
    }

    #[test]
    fn test_convert_directory_counts_only_successes() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["ok.svg", "broken.svg", "fine.svg"] {
            fs::write(dir.path().join(name), "<svg/>").unwrap();
        }

        assert_eq!(convert_directory(&PickyRenderer, dir.path(), None).unwrap(), 2);
        assert!(!dir.path().join("broken.pdf").exists());
    }

    #[test]
    fn test_convert_directory_without_svgs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();

        assert_eq!(
            convert_directory(&StubRenderer::default(), dir.path(), None).unwrap(),
            0
        );
    }

    #[test]
    fn test_convert_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_directory(&StubRenderer::default(), &dir.path().join("svgs"), None)
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory(_)));
    }
}
