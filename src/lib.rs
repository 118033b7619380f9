//! Wavyframe draws decorative borders around an image and exports the result as PNG.
//!
//! A border is either a plain inset square or a sinusoidal wave traced around that square,
//! optionally filled inside or outside its contour. Borders stack: later entries draw on top.
//!
//! - Import a base image into a [`Snapshot`] ([`import_snapshot`])
//! - Edit an ordered [`BorderStack`] inside an [`EditorSession`]
//! - Export the composited [`Surface`] ([`encode_png`], [`write_png`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod border;
/// PNG export.
pub mod export;
mod foundation;
/// Border geometry and rasterization.
pub mod render;
mod session;

pub use crate::assets::{
    PreparedImage, decode_image, decode_image_file, fit_to_canvas, import_snapshot,
};
pub use crate::border::{BorderId, BorderSpec, BorderStack, FillMode, limits};
pub use crate::export::{encode_png, flatten_on_white, write_png};
pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{
    BezPath, DEFAULT_CANVAS_SIDE, DEFAULT_EXPORT_FILE_NAME, IMPORT_MARGIN, PathEl, Point, Rect,
};
pub use crate::foundation::error::{WavyframeError, WavyframeResult};
pub use crate::render::cpu::{CpuRenderer, RenderStats, render_borders};
pub use crate::render::path::{
    BorderSample, FillGeometry, FillRule, SAMPLE_STEP_PX, border_path, border_samples,
    border_square, fill_geometry,
};
pub use crate::render::surface::{Snapshot, Surface};
pub use crate::session::{BorderDocument, EditorOpts, EditorSession};
