use glam::Vec2;
use tilt_core::params::*;
use tilt_core::{CardTheme, VisualParams};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

fn var<'a>(vars: &'a CssVars, name: &str) -> Option<&'a str> {
    vars.iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn derive_matches_reference_card() {
    // 200x100 surface, pointer at (130, 60)
    let p = VisualParams::derive(Vec2::new(130.0, 60.0), Vec2::new(200.0, 100.0));
    assert!(approx(p.pointer_x, 65.0));
    assert!(approx(p.pointer_y, 60.0));
    assert!(approx(p.rotate_x, -3.0));
    assert!(approx(p.rotate_y, 2.5));
    assert!(approx(p.background_x, 54.5));
    assert!(approx(p.background_y, 53.0));
    assert!(approx(p.pointer_from_left, 0.65));
    assert!(approx(p.pointer_from_top, 0.6));
}

#[test]
fn pointer_from_center_is_zero_at_center_and_one_at_corners() {
    let size = Vec2::new(200.0, 100.0);
    let center = VisualParams::derive(Vec2::new(100.0, 50.0), size);
    assert_eq!(center.pointer_from_center, 0.0);

    for corner in [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(200.0, 0.0),
        Vec2::new(200.0, 100.0),
    ] {
        let p = VisualParams::derive(corner, size);
        assert_eq!(p.pointer_from_center, 1.0, "corner {corner:?}");
    }
}

#[test]
fn background_shift_stays_in_band() {
    let size = Vec2::new(320.0, 480.0);
    for x in (-2_000..=2_000).step_by(125) {
        for y in (-2_000..=2_000).step_by(125) {
            let p = VisualParams::derive(Vec2::new(x as f32, y as f32), size);
            assert!((35.0..=65.0).contains(&p.background_x), "bg-x {}", p.background_x);
            assert!((35.0..=65.0).contains(&p.background_y), "bg-y {}", p.background_y);
            assert!((0.0..=100.0).contains(&p.pointer_x));
            assert!((0.0..=1.0).contains(&p.pointer_from_center));
        }
    }
}

#[test]
fn degenerate_size_is_treated_as_one_pixel() {
    let p = VisualParams::derive(Vec2::new(0.5, 2.0), Vec2::ZERO);
    assert!(approx(p.pointer_x, 50.0));
    assert_eq!(p.pointer_y, 100.0);
    assert!(p.rotate_x.is_finite() && p.rotate_y.is_finite());

    let p = VisualParams::derive(Vec2::new(10.0, 10.0), Vec2::new(f32::NAN, -5.0));
    assert_eq!(p.pointer_x, 100.0);
    assert_eq!(p.pointer_y, 100.0);
}

#[test]
fn css_vars_carry_units() {
    let p = VisualParams::derive(Vec2::new(130.0, 60.0), Vec2::new(200.0, 100.0));
    let vars = p.css_vars();
    let names: Vec<&str> = vars.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        names,
        [
            POINTER_X,
            POINTER_Y,
            BACKGROUND_X,
            BACKGROUND_Y,
            POINTER_FROM_CENTER,
            POINTER_FROM_TOP,
            POINTER_FROM_LEFT,
            ROTATE_X,
            ROTATE_Y,
        ]
    );
    assert!(!vars.spilled());

    assert_eq!(var(&vars, POINTER_X), Some("65%"));
    assert_eq!(var(&vars, POINTER_Y), Some("60%"));
    assert_eq!(var(&vars, BACKGROUND_X), Some("54.5%"));
    assert_eq!(var(&vars, ROTATE_X), Some("-3deg"));
    assert_eq!(var(&vars, ROTATE_Y), Some("2.5deg"));
}

#[test]
fn helpers() {
    assert_eq!(remap(0.0, 0.0, 100.0, 35.0, 65.0), 35.0);
    assert_eq!(remap(100.0, 0.0, 100.0, 35.0, 65.0), 65.0);
    assert_eq!(remap(50.0, 0.0, 100.0, 35.0, 65.0), 50.0);
    assert_eq!(round3(1.23456), 1.235);
    assert_eq!(clamp_percent(-3.0), 0.0);
    assert_eq!(clamp_percent(140.0), 100.0);
    assert_eq!(clamp_percent(f64::NAN), 0.0);
}

#[test]
fn theme_defaults_and_overrides() {
    let theme = CardTheme::default();
    let vars = theme.css_vars();
    assert_eq!(vars[0].0, "--inner-gradient");
    assert_eq!(
        vars[0].1,
        "linear-gradient(145deg,#60496e8c 0%,#71C4FF44 100%)"
    );
    assert_eq!(vars[1].1, "rgba(125, 190, 255, 0.67)");
    assert_eq!(vars[2].1, "50%");

    let theme = CardTheme::with_overrides(None, Some("red".into()), Some("30%".into()));
    assert_eq!(theme.inner_gradient, CardTheme::default().inner_gradient);
    assert_eq!(theme.behind_glow_color, "red");
    assert_eq!(theme.behind_glow_size, "30%");
}

#[test]
fn css_vars_keep_double_precision() {
    // A third of the way across: f32 would print 33.333332%.
    let p = VisualParams::derive(Vec2::new(100.0, 50.0), Vec2::new(300.0, 150.0));
    assert_eq!(p.pointer_x, 100.0 / 300.0 * 100.0);
    let vars = p.css_vars();
    let px = var(&vars, POINTER_X).unwrap();
    assert!(px.starts_with("33.33333333333333"), "{px}");
    assert!(px.ends_with('%') && px.len() > "33.333332%".len(), "{px}");
}
