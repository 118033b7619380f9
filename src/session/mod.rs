pub(crate) mod document;
pub(crate) mod editor;

pub use document::BorderDocument;
pub use editor::{EditorOpts, EditorSession};
