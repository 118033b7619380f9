pub(crate) mod spec;
pub(crate) mod stack;

pub use spec::{BorderId, BorderSpec, FillMode, limits};
pub use stack::BorderStack;
