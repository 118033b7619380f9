use wavyframe::{BorderSpec, FillMode, Rgb8, Surface, render_borders};

const SIDE: u16 = 720;
const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn filled(mode: FillMode, color: Rgb8) -> BorderSpec {
    BorderSpec {
        is_filled: true,
        fill_mode: mode,
        fill_color: color,
        ..BorderSpec::default()
    }
}

fn px(s: &Surface, x: u32, y: u32) -> [u8; 4] {
    s.pixel(x, y).unwrap()
}

/// Darkest pixel (by red channel on a white canvas) within `r` px of `(cx, cy)`.
fn darkest_near(s: &Surface, cx: u32, cy: u32, r: u32) -> u8 {
    let mut min = u8::MAX;
    for y in cy.saturating_sub(r)..=(cy + r) {
        for x in cx.saturating_sub(r)..=(cx + r) {
            if let Some(p) = s.pixel(x, y) {
                min = min.min(p[0]);
            }
        }
    }
    min
}

#[test]
fn outside_fill_covers_corner_but_not_center() {
    let mut s = Surface::new(SIDE);
    render_borders(&mut s, &[filled(FillMode::Outside, Rgb8::new(255, 0, 0))]).unwrap();

    assert_eq!(px(&s, 0, 0), RED);
    assert_eq!(px(&s, 719, 719), RED);
    assert_eq!(px(&s, 5, 360), RED);
    assert_eq!(px(&s, 360, 360), WHITE);
}

#[test]
fn inside_fill_covers_center_but_not_corner() {
    let mut s = Surface::new(SIDE);
    render_borders(&mut s, &[filled(FillMode::Inside, Rgb8::new(255, 0, 0))]).unwrap();

    assert_eq!(px(&s, 360, 360), RED);
    assert_eq!(px(&s, 0, 0), WHITE);
    assert_eq!(px(&s, 719, 0), WHITE);
}

#[test]
fn default_border_stroke_passes_through_offset_corners() {
    let mut s = Surface::new(SIDE);
    let stats = render_borders(&mut s, &[BorderSpec::default()]).unwrap();
    assert_eq!(stats.drawn, 1);

    // offset = 10 + 3 + 40 = 53; the sine term is zero at both ends of the top side.
    assert!(darkest_near(&s, 53, 53, 3) < 64);
    assert!(darkest_near(&s, 667, 53, 3) < 64);

    // Unfilled: background far from the contour stays white.
    assert_eq!(px(&s, 0, 0), WHITE);
    assert_eq!(px(&s, 360, 360), WHITE);
}

#[test]
fn square_border_strokes_exact_inset_edges() {
    let spec = BorderSpec {
        is_wavy: false,
        stroke_width: 4.0,
        padding: 20.0,
        ..BorderSpec::default()
    };
    let mut s = Surface::new(SIDE);
    render_borders(&mut s, &[spec]).unwrap();

    // Path runs along x = 24; a 4px stroke covers columns 22..26 fully.
    for y in [100, 360, 600] {
        assert_eq!(px(&s, 23, y), [0, 0, 0, 255]);
        assert_eq!(px(&s, 24, y), [0, 0, 0, 255]);
        assert_eq!(px(&s, 20, y), WHITE);
        assert_eq!(px(&s, 28, y), WHITE);
    }
    assert_eq!(px(&s, 360, 695), [0, 0, 0, 255]);
}

#[test]
fn later_borders_draw_on_top() {
    let big_red = BorderSpec {
        padding: 10.0,
        ..filled(FillMode::Inside, Rgb8::new(255, 0, 0))
    };
    let small_blue = BorderSpec {
        padding: 100.0,
        ..filled(FillMode::Inside, Rgb8::new(0, 0, 255))
    };

    let mut a = Surface::new(SIDE);
    render_borders(&mut a, &[big_red, small_blue]).unwrap();
    assert_eq!(px(&a, 360, 360), BLUE);
    assert_eq!(px(&a, 80, 360), RED);

    let mut b = Surface::new(SIDE);
    render_borders(&mut b, &[small_blue, big_red]).unwrap();
    assert_eq!(px(&b, 360, 360), RED);
}

#[test]
fn borders_accumulate_without_clearing() {
    let spec = filled(FillMode::Outside, Rgb8::new(0, 0, 255));
    let mut s = Surface::new(SIDE);
    s.clear([0, 255, 0, 255]);
    render_borders(&mut s, &[spec]).unwrap();

    assert_eq!(px(&s, 0, 0), BLUE);
    // The base shows through where no border paints.
    assert_eq!(px(&s, 360, 360), [0, 255, 0, 255]);
}

#[test]
fn cpu_render_is_deterministic() {
    let borders = [
        BorderSpec {
            wave_size: 25.0,
            frequency: 3.0,
            phase: 1.0,
            ..filled(FillMode::Outside, Rgb8::new(30, 60, 90))
        },
        BorderSpec::default(),
    ];

    let mut a = Surface::new(SIDE);
    let mut b = Surface::new(SIDE);
    render_borders(&mut a, &borders).unwrap();
    render_borders(&mut b, &borders).unwrap();

    assert_eq!(digest_u64(a.data()), digest_u64(b.data()));
    assert_ne!(digest_u64(a.data()), digest_u64(Surface::new(SIDE).data()));
}

#[test]
fn split_calls_match_single_call_up_to_rounding() {
    let under = filled(FillMode::Outside, Rgb8::new(0, 0, 255));
    let over = BorderSpec {
        stroke_width: 6.0,
        stroke_color: Rgb8::new(200, 0, 0),
        ..BorderSpec::default()
    };

    let mut joined = Surface::new(SIDE);
    render_borders(&mut joined, &[under, over]).unwrap();
    let mut split = Surface::new(SIDE);
    render_borders(&mut split, &[under]).unwrap();
    render_borders(&mut split, &[over]).unwrap();

    let max_diff = joined
        .data()
        .iter()
        .zip(split.data())
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap();
    assert!(max_diff <= 3, "max channel diff {max_diff}");
    assert_eq!(px(&joined, 0, 0), px(&split, 0, 0));
    assert_eq!(px(&joined, 360, 360), px(&split, 360, 360));
}
