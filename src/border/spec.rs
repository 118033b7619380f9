use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Rgb8,
    error::{WavyframeError, WavyframeResult},
};

/// Stable identity of a border layer, independent of its position in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorderId(pub uuid::Uuid);

impl BorderId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for BorderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which side of the border contour receives `fill_color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// The region enclosed by the contour (nonzero winding).
    Inside,
    /// Everything between the contour and the canvas edge (even-odd with a canvas sub-path).
    #[default]
    Outside,
}

/// Inclusive ranges accepted by [`BorderSpec::validate`].
pub mod limits {
    use std::ops::RangeInclusive;

    /// `wave_size`, px.
    pub const WAVE_SIZE: RangeInclusive<f64> = 1.0..=50.0;
    /// `frequency`, sine argument multiplier per side.
    pub const FREQUENCY: RangeInclusive<f64> = 1.0..=20.0;
    /// `phase`, radians.
    pub const PHASE: RangeInclusive<f64> = 0.0..=std::f64::consts::TAU;
    /// `stroke_width`, px.
    pub const STROKE_WIDTH: RangeInclusive<f64> = 1.0..=10.0;
    /// `padding`, px.
    pub const PADDING: RangeInclusive<f64> = 1.0..=100.0;
}

/// Full parameter set of one border layer.
///
/// Missing fields deserialize to the values of [`BorderSpec::default`]; a missing `id` gets a
/// freshly generated one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderSpec {
    /// Stable identity.
    pub id: BorderId,
    /// Amplitude of the sine perturbation, px.
    pub wave_size: f64,
    /// Sine argument multiplier along one side (`t * frequency * PI + phase`).
    pub frequency: f64,
    /// Phase offset, radians.
    pub phase: f64,
    /// Stroke thickness, px.
    pub stroke_width: f64,
    /// Inset from the canvas edge, px.
    pub padding: f64,
    /// Stroke color.
    pub stroke_color: Rgb8,
    /// `false` renders a plain inset square and ignores the wave parameters.
    pub is_wavy: bool,
    /// Paint `fill_color` on the side selected by `fill_mode`.
    pub is_filled: bool,
    /// Fill color.
    pub fill_color: Rgb8,
    /// Fill side.
    pub fill_mode: FillMode,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            id: BorderId::new(),
            wave_size: 10.0,
            frequency: 10.0,
            phase: 0.0,
            stroke_width: 3.0,
            padding: 40.0,
            stroke_color: Rgb8::BLACK,
            is_wavy: true,
            is_filled: false,
            fill_color: Rgb8::WHITE,
            fill_mode: FillMode::Outside,
        }
    }
}

impl BorderSpec {
    /// Distance from the canvas edge to the un-perturbed square path.
    ///
    /// `wave_size` only contributes when the border is wavy.
    pub fn offset(&self) -> f64 {
        let wave = if self.is_wavy { self.wave_size } else { 0.0 };
        wave + self.stroke_width + self.padding
    }

    /// Reject values outside [`limits`] and non-finite values.
    ///
    /// Wave parameters are checked even when `is_wavy` is false so toggling the flag never
    /// produces an invalid spec.
    pub fn validate(&self) -> WavyframeResult<()> {
        check("wave_size", self.wave_size, limits::WAVE_SIZE)?;
        check("frequency", self.frequency, limits::FREQUENCY)?;
        check("phase", self.phase, limits::PHASE)?;
        check("stroke_width", self.stroke_width, limits::STROKE_WIDTH)?;
        check("padding", self.padding, limits::PADDING)?;
        Ok(())
    }

    /// Same parameters under a different id.
    pub fn with_id(mut self, id: BorderId) -> Self {
        self.id = id;
        self
    }
}

fn check(
    name: &'static str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
) -> WavyframeResult<()> {
    if value.is_finite() && range.contains(&value) {
        return Ok(());
    }
    Err(WavyframeError::invalid_parameter(
        name,
        value,
        *range.start(),
        *range.end(),
    ))
}
