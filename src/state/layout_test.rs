use super::*;
use crate::util::drag_style::active_guards;

const WIDE: f64 = 1600.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// clamp
// =============================================================

#[test]
fn clamp_ratio_bounds_values() {
    assert_eq!(clamp_ratio(0.1, 0.6, 5.0), 0.6);
    assert_eq!(clamp_ratio(9.0, 0.6, 5.0), 5.0);
    assert_eq!(clamp_ratio(2.5, 0.6, 5.0), 2.5);
    assert_eq!(clamp_ratio(f64::NAN, 0.6, 5.0), 0.6);
}

#[test]
fn clamp_ratio_is_idempotent() {
    for x in [-10.0, 0.0, 0.6, 1.3, 5.0, 7.5, f64::INFINITY, f64::NEG_INFINITY] {
        let once = clamp_ratio(x, 0.6, 5.0);
        assert_eq!(clamp_ratio(once, 0.6, 5.0), once);
    }
}

// =============================================================
// Defaults and rendering
// =============================================================

#[test]
fn default_layout_is_equal_thirds() {
    let r = LayoutResizer::default();
    assert_eq!(r.ratios(), LayoutRatios::default());
    assert!(!r.is_dragging());
    assert_eq!(r.grid_template_columns(), "1fr 10px 1fr 10px 1fr");
}

#[test]
fn with_ratios_clamps_initial_values() {
    let r = LayoutResizer::with_ratios(ResizeConfig::default(), LayoutRatios { w1: 0.1, w2: 2.0, w3: 9.0 });
    assert_eq!(r.ratios(), LayoutRatios { w1: 0.6, w2: 2.0, w3: 5.0 });
}

#[test]
fn divider_index_mapping() {
    assert_eq!(Divider::from_index(0), Some(Divider::First));
    assert_eq!(Divider::from_index(1), Some(Divider::Second));
    assert_eq!(Divider::from_index(2), None);
    assert_eq!(Divider::Second.index(), 1);
}

// =============================================================
// State machine
// =============================================================

#[test]
fn pointer_down_below_breakpoint_is_inert() {
    let mut r = LayoutResizer::default();
    assert!(!r.pointer_down(Divider::First, 100.0, 1200.0));
    assert!(!r.pointer_down(Divider::First, 100.0, 800.0));
    assert!(!r.is_dragging());
    assert!(!r.pointer_move(400.0, 1000.0));
    assert_eq!(r.ratios(), LayoutRatios::default());
}

#[test]
fn move_while_idle_has_no_effect() {
    let mut r = LayoutResizer::default();
    assert!(!r.pointer_move(500.0, 1000.0));
    assert_eq!(r.ratios(), LayoutRatios::default());
}

#[test]
fn second_pointer_down_during_drag_is_ignored() {
    let mut r = LayoutResizer::default();
    assert!(r.pointer_down(Divider::First, 100.0, WIDE));
    assert!(!r.pointer_down(Divider::Second, 300.0, WIDE));
    assert_eq!(r.active_divider(), Some(Divider::First));
    r.pointer_up();
}

#[test]
fn divider_zero_drag_preserves_pair_sum_when_unsaturated() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 100.0, WIDE);
    // 50px of 1000px * 6 = 0.3
    assert!(r.pointer_move(150.0, 1000.0));

    let ratios = r.ratios();
    assert!(approx(ratios.w1, 1.3));
    assert!(approx(ratios.w2, 0.7));
    assert_eq!(ratios.w3, 1.0);
    assert!(approx(ratios.w1 + ratios.w2, 2.0));
    r.pointer_up();
}

#[test]
fn divider_one_drag_adjusts_second_and_third() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::Second, 500.0, WIDE);
    r.pointer_move(450.0, 1000.0);

    let ratios = r.ratios();
    assert_eq!(ratios.w1, 1.0);
    assert!(approx(ratios.w2, 0.7));
    assert!(approx(ratios.w3, 1.3));
    r.pointer_up();
}

#[test]
fn deltas_are_measured_from_drag_start() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 0.0, WIDE);
    r.pointer_move(100.0, 1000.0);
    r.pointer_move(50.0, 1000.0);

    assert!(approx(r.ratios().w1, 1.3));
    assert!(approx(r.ratios().w2, 0.7));
    r.pointer_up();
}

#[test]
fn saturated_side_clamps_without_compensation() {
    let start = LayoutRatios { w1: 4.0, w2: 3.0, w3: 1.0 };
    let mut r = LayoutResizer::with_ratios(ResizeConfig::default(), start);
    r.pointer_down(Divider::First, 0.0, WIDE);
    // 250 / 1000 * 6 = 1.5 -> w1 would be 5.5
    r.pointer_move(250.0, 1000.0);

    let ratios = r.ratios();
    assert_eq!(ratios.w1, 5.0);
    assert!(approx(ratios.w2, 1.5));
    assert!(ratios.w1 + ratios.w2 < start.w1 + start.w2);
    r.pointer_up();
}

#[test]
fn both_sides_saturate_on_large_drag() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 0.0, WIDE);
    r.pointer_move(10_000.0, 1000.0);
    assert_eq!(r.ratios().w1, 5.0);
    assert_eq!(r.ratios().w2, 0.6);

    r.pointer_move(-10_000.0, 1000.0);
    assert_eq!(r.ratios().w1, 0.6);
    assert_eq!(r.ratios().w2, 5.0);
    r.pointer_up();
}

#[test]
fn ratios_stay_in_bounds_mid_drag() {
    let cfg = ResizeConfig::default();
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::Second, 600.0, WIDE);
    for x in (-2000..4000).step_by(137) {
        r.pointer_move(f64::from(x), 1000.0);
        let ratios = r.ratios();
        for w in [ratios.w1, ratios.w2, ratios.w3] {
            assert!(w >= cfg.min_ratio && w <= cfg.max_ratio);
        }
    }
    r.pointer_up();
}

#[test]
fn degenerate_container_width_is_ignored() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 0.0, WIDE);
    assert!(!r.pointer_move(100.0, 0.0));
    assert!(!r.pointer_move(100.0, f64::NAN));
    assert_eq!(r.ratios(), LayoutRatios::default());
    r.pointer_up();
}

#[test]
fn pointer_up_ends_drag_and_freezes_ratios() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 0.0, WIDE);
    r.pointer_move(100.0, 1000.0);
    assert!(r.pointer_up());
    let frozen = r.ratios();

    assert!(!r.pointer_move(900.0, 1000.0));
    assert_eq!(r.ratios(), frozen);
    assert!(!r.pointer_up());
}

#[test]
fn custom_sensitivity_scales_delta() {
    let cfg = ResizeConfig {
        sensitivity: 2.0,
        ..ResizeConfig::default()
    };
    let mut r = LayoutResizer::new(cfg);
    r.pointer_down(Divider::First, 0.0, WIDE);
    r.pointer_move(100.0, 1000.0);
    assert!(approx(r.ratios().w1, 1.2));
    r.pointer_up();
}

// =============================================================
// Scoped body style
// =============================================================

#[test]
fn drag_style_held_only_while_dragging() {
    let mut r = LayoutResizer::default();
    assert_eq!(active_guards(), 0);

    r.pointer_down(Divider::First, 0.0, WIDE);
    assert_eq!(active_guards(), 1);

    r.pointer_up();
    assert_eq!(active_guards(), 0);
}

#[test]
fn drag_style_released_on_cancel_and_drop() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::Second, 0.0, WIDE);
    assert!(r.cancel());
    assert_eq!(active_guards(), 0);

    r.pointer_down(Divider::Second, 0.0, WIDE);
    drop(r);
    assert_eq!(active_guards(), 0);
}

#[test]
fn rejected_pointer_down_acquires_no_style() {
    let mut r = LayoutResizer::default();
    r.pointer_down(Divider::First, 0.0, 600.0);
    assert_eq!(active_guards(), 0);
}
