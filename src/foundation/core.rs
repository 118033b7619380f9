pub use kurbo::{BezPath, PathEl, Point, Rect};

/// Side length of the square editing canvas, in pixels.
pub const DEFAULT_CANVAS_SIDE: u16 = 720;

/// Margin subtracted from the canvas side when fitting an imported image.
pub const IMPORT_MARGIN: u32 = 40;

/// File name used for exports when the caller does not pick one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "wavy-bordered-image.png";
