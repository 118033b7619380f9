//! PNG export of a composited surface.

use std::{io::Cursor, path::Path};

use crate::{
    foundation::error::{WavyframeError, WavyframeResult},
    render::{composite::flatten_onto, surface::Surface},
};

/// Composite the surface onto opaque white. Returns straight RGBA8 with alpha 255 everywhere.
pub fn flatten_on_white(surface: &Surface) -> Vec<u8> {
    flatten_onto([255, 255, 255], surface.data())
}

/// Encode the flattened surface as PNG bytes.
#[tracing::instrument(skip_all, fields(side = surface.side()))]
pub fn encode_png(surface: &Surface) -> WavyframeResult<Vec<u8>> {
    let side = u32::from(surface.side());
    let img = image::RgbaImage::from_raw(side, side, flatten_on_white(surface))
        .ok_or_else(|| WavyframeError::export("surface buffer does not match its size"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| WavyframeError::export(format!("encode png: {e}")))?;
    if buf.is_empty() {
        return Err(WavyframeError::export("png encoder produced no data"));
    }
    tracing::debug!(bytes = buf.len(), "encoded png");
    Ok(buf)
}

/// Encode and write to `path`, creating parent directories as needed.
pub fn write_png(surface: &Surface, path: &Path) -> WavyframeResult<()> {
    let bytes = encode_png(surface)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WavyframeError::export(format!(
                "create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    std::fs::write(path, &bytes)
        .map_err(|e| WavyframeError::export(format!("write png '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}
