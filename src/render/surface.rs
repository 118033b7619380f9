use std::sync::Arc;

use crate::foundation::error::{WavyframeError, WavyframeResult};

/// Immutable `side x side` premultiplied RGBA8 buffer: the restore point for every re-render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    side: u16,
    rgba8_premul: Arc<[u8]>,
}

impl Snapshot {
    /// Wrap an existing buffer. Fails unless it holds exactly `side * side` pixels.
    pub fn from_premul(side: u16, rgba8_premul: Vec<u8>) -> WavyframeResult<Self> {
        if rgba8_premul.len() != byte_len(side) {
            return Err(WavyframeError::render(format!(
                "snapshot byte len {} does not match {side}x{side} canvas",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            side,
            rgba8_premul: rgba8_premul.into(),
        })
    }

    /// Opaque white canvas.
    pub fn blank(side: u16) -> Self {
        Self {
            side,
            rgba8_premul: vec![255u8; byte_len(side)].into(),
        }
    }

    /// Canvas side in pixels.
    pub fn side(&self) -> u16 {
        self.side
    }

    /// Raw premultiplied bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

/// The live drawing surface of one editing session.
pub struct Surface {
    side: u16,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    /// Opaque white surface.
    pub fn new(side: u16) -> Self {
        let mut surface = Self {
            side,
            pixmap: vello_cpu::Pixmap::new(side, side),
        };
        surface.clear([255, 255, 255, 255]);
        surface
    }

    /// Surface initialized from `snapshot`.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut surface = Self {
            side: snapshot.side,
            pixmap: vello_cpu::Pixmap::new(snapshot.side, snapshot.side),
        };
        surface
            .pixmap
            .data_as_u8_slice_mut()
            .copy_from_slice(snapshot.data());
        surface
    }

    /// Canvas side in pixels.
    pub fn side(&self) -> u16 {
        self.side
    }

    /// Blit `snapshot` back over the whole surface.
    pub fn restore(&mut self, snapshot: &Snapshot) -> WavyframeResult<()> {
        if snapshot.side != self.side {
            return Err(WavyframeError::render(format!(
                "snapshot side {} does not match surface side {}",
                snapshot.side, self.side
            )));
        }
        self.pixmap
            .data_as_u8_slice_mut()
            .copy_from_slice(snapshot.data());
        Ok(())
    }

    /// Fill every pixel with one premultiplied color.
    pub fn clear(&mut self, rgba8_premul: [u8; 4]) {
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&rgba8_premul);
        }
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let side = u32::from(self.side);
        if x >= side || y >= side {
            return None;
        }
        let i = ((y * side + x) * 4) as usize;
        let d = self.pixmap.data_as_u8_slice();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Raw premultiplied bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    /// Copy the current pixels into a new [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            side: self.side,
            rgba8_premul: self.data().into(),
        }
    }
}

fn byte_len(side: u16) -> usize {
    usize::from(side) * usize::from(side) * 4
}
