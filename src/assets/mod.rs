pub(crate) mod decode;

pub use decode::{PreparedImage, decode_image, decode_image_file, fit_to_canvas, import_snapshot};
