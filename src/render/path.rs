//! Border contour geometry.
//!
//! Wavy contours are polylines: each side of the inset square is sampled at a fixed
//! [`SAMPLE_STEP_PX`] step and consecutive samples are joined by straight segments.

use std::f64::consts::PI;

use crate::{
    border::{BorderSpec, FillMode},
    foundation::core::{BezPath, Point, Rect},
};

/// Linear distance between consecutive samples along one side, px.
pub const SAMPLE_STEP_PX: f64 = 5.0;

// Closing samples nearer than this to the first sample are dropped.
const CLOSE_EPS_PX: f64 = 1e-6;

/// Polygon fill rule used for a border's fill path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    /// Nonzero winding.
    NonZero,
    /// Even-odd (alternating) rule.
    EvenOdd,
}

/// One point of a traced border, next to the square point it was perturbed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSample {
    /// Point on the (possibly wavy) contour.
    pub point: Point,
    /// Corresponding point on the un-perturbed inset square.
    pub on_square: Point,
}

/// Geometry needed to paint one border's fill.
#[derive(Clone, Debug, PartialEq)]
pub struct FillGeometry {
    /// Closed sub-paths to fill.
    pub path: BezPath,
    /// Rule that selects the filled region.
    pub rule: FillRule,
}

/// The centered inset square for `spec`, or `None` when it has no positive side.
pub fn border_square(spec: &BorderSpec, canvas_side: f64) -> Option<Rect> {
    let offset = spec.offset();
    let inner = canvas_side - 2.0 * offset;
    if inner.is_nan() || inner <= 0.0 {
        return None;
    }
    Some(Rect::new(
        offset,
        offset,
        canvas_side - offset,
        canvas_side - offset,
    ))
}

/// Trace the contour starting at the top-left corner: top, right, bottom, left.
///
/// Square borders yield the four corners. Wavy borders yield, per side, samples at
/// `t = k * SAMPLE_STEP_PX / side_len` plus the exact side end at `t = 1`, with the
/// perpendicular coordinate shifted by `wave_size * sin(t * frequency * PI + phase)`.
/// The final sample of the left side is omitted when it lands on the first sample.
pub fn border_samples(spec: &BorderSpec, canvas_side: f64) -> Vec<BorderSample> {
    let Some(sq) = border_square(spec, canvas_side) else {
        return Vec::new();
    };
    let (x0, y0, x1, y1) = (sq.x0, sq.y0, sq.x1, sq.y1);

    if !spec.is_wavy {
        return [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
            .into_iter()
            .map(|(x, y)| {
                let p = Point::new(x, y);
                BorderSample {
                    point: p,
                    on_square: p,
                }
            })
            .collect();
    }

    let len = sq.width();
    let steps = (len / SAMPLE_STEP_PX).ceil().max(1.0) as usize;
    let wave = |t: f64| spec.wave_size * (t * spec.frequency * PI + spec.phase).sin();

    // (start, end, perturb x instead of y)
    let sides = [
        (Point::new(x0, y0), Point::new(x1, y0), false),
        (Point::new(x1, y0), Point::new(x1, y1), true),
        (Point::new(x1, y1), Point::new(x0, y1), false),
        (Point::new(x0, y1), Point::new(x0, y0), true),
    ];

    let mut out: Vec<BorderSample> = Vec::with_capacity(4 * (steps + 1));
    for (start, end, perturb_x) in sides {
        for k in 0..=steps {
            let t = ((k as f64) * SAMPLE_STEP_PX / len).min(1.0);
            let on_square = start.lerp(end, t);
            let w = wave(t);
            let point = if perturb_x {
                Point::new(on_square.x + w, on_square.y)
            } else {
                Point::new(on_square.x, on_square.y + w)
            };
            out.push(BorderSample { point, on_square });
        }
    }

    let closes_on_start = match (out.first(), out.last()) {
        (Some(first), Some(last)) => {
            out.len() > 1 && first.point.distance(last.point) < CLOSE_EPS_PX
        }
        _ => false,
    };
    if closes_on_start {
        out.pop();
    }
    out
}

/// Closed contour of `spec`. Empty when the inset square is degenerate.
pub fn border_path(spec: &BorderSpec, canvas_side: f64) -> BezPath {
    let mut path = BezPath::new();
    let mut samples = border_samples(spec, canvas_side).into_iter();
    let Some(first) = samples.next() else {
        return path;
    };
    path.move_to(first.point);
    for s in samples {
        path.line_to(s.point);
    }
    path.close_path();
    path
}

/// Fill path and rule for `spec`, or `None` when the border is unfilled or degenerate.
///
/// `Outside` prepends a full-canvas rectangle sub-path and fills even-odd, so only the area
/// between the contour and the canvas edge is covered.
pub fn fill_geometry(spec: &BorderSpec, canvas_side: f64) -> Option<FillGeometry> {
    if !spec.is_filled {
        return None;
    }
    let contour = border_path(spec, canvas_side);
    if contour.is_empty() {
        return None;
    }

    match spec.fill_mode {
        FillMode::Inside => Some(FillGeometry {
            path: contour,
            rule: FillRule::NonZero,
        }),
        FillMode::Outside => {
            let mut path = BezPath::new();
            path.move_to((0.0, 0.0));
            path.line_to((canvas_side, 0.0));
            path.line_to((canvas_side, canvas_side));
            path.line_to((0.0, canvas_side));
            path.close_path();
            for el in contour.elements() {
                path.push(*el);
            }
            Some(FillGeometry {
                path,
                rule: FillRule::EvenOdd,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::PathEl;

    const S: f64 = 720.0;

    #[test]
    fn square_border_is_exact_inset_rectangle() {
        let spec = BorderSpec {
            is_wavy: false,
            wave_size: 50.0,
            ..BorderSpec::default()
        };
        let path = border_path(&spec, S);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(43.0, 43.0)),
                PathEl::LineTo(Point::new(677.0, 43.0)),
                PathEl::LineTo(Point::new(677.0, 677.0)),
                PathEl::LineTo(Point::new(43.0, 677.0)),
                PathEl::ClosePath,
            ]
        );
        let sq = border_square(&spec, S).unwrap();
        assert_eq!(sq.width(), S - 2.0 * (spec.stroke_width + spec.padding));
    }

    #[test]
    fn wavy_samples_stay_within_amplitude_of_square() {
        let spec = BorderSpec {
            wave_size: 17.0,
            frequency: 7.0,
            phase: 1.3,
            ..BorderSpec::default()
        };
        let samples = border_samples(&spec, S);
        assert!(!samples.is_empty());
        for s in &samples {
            let dx = (s.point.x - s.on_square.x).abs();
            let dy = (s.point.y - s.on_square.y).abs();
            // Perturbation is purely perpendicular: one axis moves, the other does not.
            assert!(dx == 0.0 || dy == 0.0);
            assert!(dx.max(dy) <= spec.wave_size + 1e-9);
        }
    }

    #[test]
    fn wavy_sampling_uses_fixed_step_and_hits_side_ends() {
        let spec = BorderSpec::default();
        let sq = border_square(&spec, S).unwrap();
        let samples = border_samples(&spec, S);

        let steps = (sq.width() / SAMPLE_STEP_PX).ceil() as usize;
        let per_side = steps + 1;
        // sin(10 * PI) == 0: the left side ends on the start point, which is not repeated.
        assert_eq!(samples.len(), 4 * per_side - 1);

        let top = &samples[..per_side];
        for pair in top[..per_side - 1].windows(2) {
            let step = pair[1].on_square.x - pair[0].on_square.x;
            assert!((step - SAMPLE_STEP_PX).abs() < 1e-9);
        }
        assert_eq!(top[0].on_square, Point::new(sq.x0, sq.y0));
        assert_eq!(top[per_side - 1].on_square, Point::new(sq.x1, sq.y0));

        let last = samples.last().unwrap().on_square;
        assert_eq!(last.x, sq.x0);
        let expected_y = sq.y1 - ((steps - 1) as f64) * SAMPLE_STEP_PX;
        assert!((last.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn open_ended_wave_keeps_left_side_end() {
        // sin(7 * PI + 1.3) != sin(1.3), so the left end is a distinct point.
        let spec = BorderSpec {
            frequency: 7.0,
            phase: 1.3,
            ..BorderSpec::default()
        };
        let sq = border_square(&spec, S).unwrap();
        let samples = border_samples(&spec, S);
        let per_side = (sq.width() / SAMPLE_STEP_PX).ceil() as usize + 1;
        assert_eq!(samples.len(), 4 * per_side);
        assert_eq!(
            samples.last().unwrap().on_square,
            Point::new(sq.x0, sq.y0)
        );
    }

    #[test]
    fn default_border_starts_on_offset_corner() {
        let spec = BorderSpec::default();
        let sq = border_square(&spec, S).unwrap();
        let samples = border_samples(&spec, S);
        assert_eq!(samples[0].point, Point::new(53.0, 53.0));

        let per_side = (sq.width() / SAMPLE_STEP_PX).ceil() as usize + 1;
        let top_end = samples[per_side - 1].point;
        assert!((top_end.x - 667.0).abs() < 1e-9);
        assert!((top_end.y - 53.0).abs() < 1e-9);
    }

    #[test]
    fn wave_offsets_match_sine_at_mid_side() {
        // side = 614, 124 samples per side; t = k * 5 / 614.
        let spec = BorderSpec {
            phase: 1.3,
            ..BorderSpec::default()
        };
        let samples = border_samples(&spec, S);
        let per_side = 124;
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

        // Top, k = 3 and k = 7: y moves down by 10 * sin(t * 10 * PI + 1.3).
        let s = samples[3];
        assert_eq!(s.point.x, s.on_square.x);
        assert!(close(s.point.x, 68.0));
        assert!(close(s.point.y, 61.79162870212562));
        let s = samples[7];
        assert!(close(s.point.x, 88.0));
        assert!(close(s.point.y, 53.50760684992107));

        // Right, k = 20: x moves right, y stays on the side.
        let s = samples[per_side + 20];
        assert_eq!(s.point.y, s.on_square.y);
        assert!(close(s.point.y, 153.0));
        assert!(close(s.point.x, 668.3301966888707));

        // Bottom runs right to left, k = 7.
        let s = samples[2 * per_side + 7];
        assert!(close(s.point.x, 632.0));
        assert!(close(s.point.y, 667.5076068499211));

        // Left runs bottom to top, k = 3.
        let s = samples[3 * per_side + 3];
        assert!(close(s.point.y, 652.0));
        assert!(close(s.point.x, 61.79162870212562));
    }

    #[test]
    fn path_is_single_closed_contour() {
        let path = border_path(&BorderSpec::default(), S);
        let els = path.elements();
        assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
        let moves = els
            .iter()
            .filter(|e| matches!(e, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 1);

        let PathEl::MoveTo(start) = els[0] else {
            unreachable!()
        };
        let PathEl::LineTo(last) = els[els.len() - 2] else {
            panic!("expected a line before close");
        };
        assert!(start.distance(last) > 1.0);
    }

    #[test]
    fn degenerate_square_yields_empty_path() {
        let spec = BorderSpec {
            wave_size: 50.0,
            stroke_width: 10.0,
            padding: 100.0,
            ..BorderSpec::default()
        };
        // offset = 160, so a 320 canvas leaves zero width.
        assert!(border_square(&spec, 320.0).is_none());
        assert!(border_path(&spec, 320.0).is_empty());
        assert!(
            fill_geometry(
                &BorderSpec {
                    is_filled: true,
                    ..spec
                },
                320.0
            )
            .is_none()
        );
        assert!(border_square(&spec, 321.0).is_some());
    }

    #[test]
    fn fill_geometry_picks_rule_by_mode() {
        let unfilled = BorderSpec::default();
        assert!(fill_geometry(&unfilled, S).is_none());

        let inside = BorderSpec {
            is_filled: true,
            fill_mode: FillMode::Inside,
            ..BorderSpec::default()
        };
        let g = fill_geometry(&inside, S).unwrap();
        assert_eq!(g.rule, FillRule::NonZero);
        assert_eq!(g.path, border_path(&inside, S));

        let outside = BorderSpec {
            fill_mode: FillMode::Outside,
            ..inside
        };
        let g = fill_geometry(&outside, S).unwrap();
        assert_eq!(g.rule, FillRule::EvenOdd);
        let els = g.path.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(S, S)));
        assert_eq!(els[4], PathEl::ClosePath);
        assert_eq!(&els[5..], border_path(&outside, S).elements());
    }
}
