//! Border geometry, the `vello_cpu` rasterizer and the surfaces it draws on.

/// Premultiplied RGBA8 compositing.
pub mod composite;
/// `vello_cpu` border rasterizer.
pub mod cpu;
/// Border contour and fill geometry.
pub mod path;
/// Live surface and base snapshot.
pub mod surface;
