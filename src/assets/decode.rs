use std::path::Path;

use image::{RgbaImage, imageops};

use crate::{
    foundation::error::{WavyframeError, WavyframeResult},
    render::surface::Snapshot,
};

/// Decoded source image as straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Decoded pixels.
    pub rgba: RgbaImage,
}

impl PreparedImage {
    /// Source width in pixels.
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Source height in pixels.
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }
}

/// Decode any raster format the `image` crate understands.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> WavyframeResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| WavyframeError::image_decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(WavyframeError::image_decode("image has zero width or height"));
    }
    tracing::debug!(width = rgba.width(), height = rgba.height(), "decoded image");
    Ok(PreparedImage { rgba })
}

/// Read and decode an image file.
pub fn decode_image_file(path: &Path) -> WavyframeResult<PreparedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        WavyframeError::image_decode(format!("failed to read image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes)
}

/// Scale `img` uniformly so its longer side is `side - margin`, center it on opaque white,
/// and capture the result.
#[tracing::instrument(skip(img), fields(src_w = img.width(), src_h = img.height()))]
pub fn fit_to_canvas(img: &PreparedImage, side: u16, margin: u32) -> WavyframeResult<Snapshot> {
    let side_px = u32::from(side);
    let target = side_px.saturating_sub(margin);
    if target == 0 {
        return Err(WavyframeError::render(format!(
            "import margin {margin} leaves no room on a {side}px canvas"
        )));
    }

    let longer = img.width().max(img.height());
    let scale = f64::from(target) / f64::from(longer);
    let w = scaled_dim(img.width(), scale, target);
    let h = scaled_dim(img.height(), scale, target);

    let resized = if (w, h) == (img.width(), img.height()) {
        img.rgba.clone()
    } else {
        imageops::resize(&img.rgba, w, h, imageops::FilterType::Triangle)
    };

    let mut canvas = RgbaImage::from_pixel(side_px, side_px, image::Rgba([255, 255, 255, 255]));
    let x = i64::from((side_px - w) / 2);
    let y = i64::from((side_px - h) / 2);
    imageops::overlay(&mut canvas, &resized, x, y);
    tracing::debug!(w, h, x, y, scale, "centered image on canvas");

    let mut bytes = canvas.into_raw();
    premultiply_rgba8_in_place(&mut bytes);
    Snapshot::from_premul(side, bytes)
}

/// [`decode_image`] followed by [`fit_to_canvas`].
pub fn import_snapshot(bytes: &[u8], side: u16, margin: u32) -> WavyframeResult<Snapshot> {
    let img = decode_image(bytes)?;
    fit_to_canvas(&img, side, margin)
}

fn scaled_dim(src: u32, scale: f64, target: u32) -> u32 {
    ((f64::from(src) * scale).round() as u32).clamp(1, target)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
