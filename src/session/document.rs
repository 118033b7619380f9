use std::{io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    border::{BorderSpec, BorderStack},
    foundation::{
        core::{DEFAULT_CANVAS_SIDE, IMPORT_MARGIN},
        error::{WavyframeError, WavyframeResult},
    },
    session::editor::EditorOpts,
};

/// JSON description of a border stack and the canvas it is drawn on.
///
/// ```json
/// { "canvas_side": 720, "import_margin": 40, "borders": [ { "padding": 20 } ] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderDocument {
    /// Canvas side in pixels.
    pub canvas_side: u16,
    /// Import margin in pixels.
    pub import_margin: u32,
    /// Layers, bottom-most first.
    pub borders: Vec<BorderSpec>,
}

impl Default for BorderDocument {
    fn default() -> Self {
        Self {
            canvas_side: DEFAULT_CANVAS_SIDE,
            import_margin: IMPORT_MARGIN,
            borders: Vec::new(),
        }
    }
}

impl BorderDocument {
    /// Document with `count` default borders.
    pub fn with_default_borders(count: usize) -> Self {
        Self {
            borders: (0..count).map(|_| BorderSpec::default()).collect(),
            ..Self::default()
        }
    }

    /// Parse from JSON text.
    pub fn from_json_str(s: &str) -> WavyframeResult<Self> {
        serde_json::from_str(s).map_err(|e| WavyframeError::serde(e.to_string()))
    }

    /// Parse from a JSON stream.
    pub fn from_reader(r: impl Read) -> WavyframeResult<Self> {
        serde_json::from_reader(r).map_err(|e| WavyframeError::serde(e.to_string()))
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> WavyframeResult<Self> {
        let f = std::fs::File::open(path).map_err(|e| {
            WavyframeError::serde(format!("open border document '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> WavyframeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WavyframeError::serde(e.to_string()))
    }

    /// Session options described by this document.
    pub fn editor_opts(&self) -> EditorOpts {
        EditorOpts {
            canvas_side: self.canvas_side,
            import_margin: self.import_margin,
        }
    }

    /// Validated stack; rejects the first out-of-range border or repeated id.
    pub fn border_stack(&self) -> WavyframeResult<BorderStack> {
        if self.canvas_side == 0 {
            return Err(WavyframeError::invalid_parameter(
                "canvas_side",
                0.0,
                1.0,
                f64::from(u16::MAX),
            ));
        }
        BorderStack::from_specs(self.borders.iter().copied())
    }
}
