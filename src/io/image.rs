//! PNG export of the finished canvas

use crate::io::error::{GeneratorError, Result};
use crate::render::canvas::Canvas;
use std::path::Path;

/// Save the rendered canvas as a PNG file
///
/// Creates missing parent directories. The canvas is only read; a failed
/// export leaves it intact for a retry.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas buffer has been torn down
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the given path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    let image = canvas.image()?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| GeneratorError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
