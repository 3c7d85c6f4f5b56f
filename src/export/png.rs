//! Raster sheet output: the SVG rendition of the sheet is parsed with
//! usvg, rasterised with resvg into a tiny-skia pixmap and encoded as
//! PNG. Text runs through whatever system fonts usvg can find; on a
//! machine without fonts the geometry still rasterises.

use crate::errors::{AppError, AppResult};
use crate::render::sheet::Sheet;
use crate::render::svg::render_svg;
use std::fs;
use std::path::Path;

/// Encode a rendered sheet as PNG bytes.
pub fn sheet_to_png(sheet: &Sheet) -> AppResult<Vec<u8>> {
    let markup = render_svg(sheet);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&markup, &options)
        .map_err(|e| AppError::Render(format!("SVG parse error: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| AppError::Render("Could not allocate pixmap".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| AppError::Export(format!("PNG encode error: {e}")))
}

pub(crate) fn export_png(sheet: &Sheet, path: &Path) -> AppResult<()> {
    let bytes = sheet_to_png(sheet)?;
    fs::write(path, bytes)?;
    Ok(())
}
