use std::path::Path;

use crate::{
    assets::decode::{decode_image, fit_to_canvas},
    border::{BorderId, BorderSpec, BorderStack},
    export,
    foundation::{
        core::{DEFAULT_CANVAS_SIDE, IMPORT_MARGIN},
        error::{WavyframeError, WavyframeResult},
    },
    render::{
        cpu::{CpuRenderer, RenderStats},
        surface::{Snapshot, Surface},
    },
};

/// Options for [`EditorSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOpts {
    /// Canvas side in pixels.
    pub canvas_side: u16,
    /// Pixels subtracted from `canvas_side` when fitting an imported image.
    pub import_margin: u32,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            canvas_side: DEFAULT_CANVAS_SIDE,
            import_margin: IMPORT_MARGIN,
        }
    }
}

/// One editing session: the exclusive owner of the live surface, its base snapshot and the
/// border stack.
///
/// Every edit restores the snapshot and redraws the whole stack, so the surface always equals a
/// fresh render of the current borders over the current base image.
pub struct EditorSession {
    opts: EditorOpts,
    snapshot: Snapshot,
    surface: Surface,
    borders: BorderStack,
    renderer: CpuRenderer,
    last_stats: RenderStats,
}

impl EditorSession {
    /// Session over a blank white canvas with no borders.
    pub fn new(opts: EditorOpts) -> Self {
        let snapshot = Snapshot::blank(opts.canvas_side);
        Self {
            opts,
            surface: Surface::from_snapshot(&snapshot),
            snapshot,
            borders: BorderStack::new(),
            renderer: CpuRenderer::new(),
            last_stats: RenderStats::default(),
        }
    }

    /// Session whose base snapshot is `image_bytes`, decoded, fitted and centered.
    pub fn with_image(image_bytes: &[u8], opts: EditorOpts) -> WavyframeResult<Self> {
        let mut session = Self::new(opts);
        session.load_image(image_bytes)?;
        Ok(session)
    }

    /// Replace the base image. On failure the session is left as it was.
    pub fn load_image(&mut self, image_bytes: &[u8]) -> WavyframeResult<()> {
        let img = decode_image(image_bytes)?;
        let snapshot = fit_to_canvas(&img, self.opts.canvas_side, self.opts.import_margin)?;
        self.set_snapshot(snapshot)
    }

    /// Replace the base snapshot directly.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) -> WavyframeResult<()> {
        if snapshot.side() != self.opts.canvas_side {
            return Err(WavyframeError::render(format!(
                "snapshot side {} does not match canvas side {}",
                snapshot.side(),
                self.opts.canvas_side
            )));
        }
        self.snapshot = snapshot;
        self.rerender()
    }

    /// Replace every border at once.
    pub fn set_borders(&mut self, borders: BorderStack) -> WavyframeResult<()> {
        self.borders = borders;
        self.rerender()
    }

    /// Append a default border.
    pub fn add_border(&mut self) -> WavyframeResult<BorderId> {
        let id = self.borders.add();
        self.rerender()?;
        Ok(id)
    }

    /// Append a caller-built border.
    pub fn push_border(&mut self, spec: BorderSpec) -> WavyframeResult<BorderId> {
        let id = self.borders.push(spec)?;
        self.rerender()?;
        Ok(id)
    }

    /// Replace border `id` in place.
    pub fn update_border(&mut self, id: BorderId, spec: BorderSpec) -> WavyframeResult<()> {
        self.borders.update(id, spec)?;
        self.rerender()
    }

    /// Remove border `id`. Returns `false` (and skips the redraw) when it did not exist.
    pub fn remove_border(&mut self, id: BorderId) -> WavyframeResult<bool> {
        if !self.borders.remove(id) {
            return Ok(false);
        }
        self.rerender()?;
        Ok(true)
    }

    /// Move border `id` to `index` in draw order.
    pub fn move_border(&mut self, id: BorderId, index: usize) -> WavyframeResult<()> {
        self.borders.move_to(id, index)?;
        self.rerender()
    }

    /// Restore the base snapshot and draw every border from scratch.
    #[tracing::instrument(skip(self), fields(borders = self.borders.len()))]
    pub fn rerender(&mut self) -> WavyframeResult<()> {
        self.surface.restore(&self.snapshot)?;
        self.last_stats = self
            .renderer
            .render_borders(&mut self.surface, self.borders.as_slice())?;
        Ok(())
    }

    /// Current composited surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Base snapshot every render starts from.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Current border stack.
    pub fn borders(&self) -> &BorderStack {
        &self.borders
    }

    /// Options the session was created with.
    pub fn opts(&self) -> EditorOpts {
        self.opts
    }

    /// Counters from the most recent render.
    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Encode the current surface as PNG.
    pub fn export_png(&self) -> WavyframeResult<Vec<u8>> {
        export::encode_png(&self.surface)
    }

    /// Encode the current surface and write it to `path`.
    pub fn write_png(&self, path: &Path) -> WavyframeResult<()> {
        export::write_png(&self.surface, path)
    }
}
