mod common;

use common::approx_eq;
use dirttime_site::pattern::{evaluate, fbm, hash, noise, Rgb};
use glam::Vec2;

fn bits(c: Rgb) -> [u32; 3] {
    [c.r.to_bits(), c.g.to_bits(), c.b.to_bits()]
}

#[test]
fn evaluate_is_bit_identical_across_calls() {
    let samples = [
        (0.5, 0.5, 0.0, 1.0, Vec2::new(0.5, 0.5)),
        (0.1, 0.9, 12.34, 16.0 / 9.0, Vec2::new(192.5, 971.5)),
        (0.0, 0.0, 9999.5, 0.5, Vec2::new(0.5, 0.5)),
        (1.0, 1.0, 3.0, 2.0, Vec2::new(1919.5, 1079.5)),
    ];
    for (u, v, t, a, frag) in samples {
        assert_eq!(bits(evaluate(u, v, t, a, frag)), bits(evaluate(u, v, t, a, frag)));
    }
}

#[test]
fn hash_stays_in_unit_interval() {
    for x in -20..20 {
        for y in -20..20 {
            let h = hash(Vec2::new(x as f32 * 3.7, y as f32 * -1.3));
            assert!((0.0..1.0).contains(&h), "hash({x}, {y}) = {h}");
        }
    }
}

#[test]
fn noise_hits_hash_on_lattice_points() {
    for (x, y) in [(0.0, 0.0), (3.0, -2.0), (-7.0, 11.0)] {
        let p = Vec2::new(x, y);
        assert_eq!(noise(p), hash(p));
    }
}

#[test]
fn noise_and_fbm_are_bounded() {
    for i in 0..200 {
        let p = Vec2::new(i as f32 * 0.173 - 17.0, i as f32 * -0.091 + 4.0);
        let n = noise(p);
        assert!((0.0..=1.0).contains(&n), "noise {n}");
        let f = fbm(p);
        assert!((0.0..=0.9375).contains(&f), "fbm {f}");
    }
}

#[test]
fn field_is_spatially_continuous() {
    let frag = Vec2::new(100.5, 100.5);
    for i in 0..50 {
        let u = i as f32 / 50.0;
        let a = evaluate(u, 0.3, 4.2, 1.5, frag);
        let b = evaluate(u + 1e-4, 0.3, 4.2, 1.5, frag);
        assert!(approx_eq(a.r, b.r, 1e-3), "u={u}");
        assert!(approx_eq(a.g, b.g, 1e-3), "u={u}");
        assert!(approx_eq(a.b, b.b, 1e-3), "u={u}");
    }
}

#[test]
fn grain_is_small() {
    let a = evaluate(0.4, 0.6, 1.0, 1.0, Vec2::new(10.5, 20.5));
    let b = evaluate(0.4, 0.6, 1.0, 1.0, Vec2::new(811.5, 3.5));
    assert!((a.g - b.g).abs() <= 0.025);
}

#[test]
fn center_ignores_aspect() {
    let frag = Vec2::new(640.5, 360.5);
    let square = evaluate(0.5, 0.5, 7.0, 1.0, frag);
    let wide = evaluate(0.5, 0.5, 7.0, 21.0 / 9.0, frag);
    assert_eq!(bits(square), bits(wide));
}

#[test]
fn center_matches_hand_composition() {
    let time = 2.0;
    let frag = Vec2::new(0.5, 0.5);

    let n = fbm(Vec2::splat(time * 0.1));
    let pattern = (0.25 + n * 0.12).clamp(0.0, 1.0);
    let base = 0.039 + (0.065 - 0.039) * pattern;

    let d = Vec2::new(0.2, 0.1).length();
    let t = ((d - 0.6) / (0.0 - 0.6)).clamp(0.0, 1.0);
    let glow = t * t * (3.0 - 2.0 * t) * 0.02;
    let grain = hash(frag + time * 100.0) * 0.025 - 0.0125;

    let expected_r = base + (1.0 - base) * glow + grain;
    let expected_b = base + (0.0 - base) * glow + grain;

    let c = evaluate(0.5, 0.5, time, 1.0, frag);
    assert!(approx_eq(c.r, expected_r, 1e-6), "{} vs {}", c.r, expected_r);
    assert!(approx_eq(c.b, expected_b, 1e-6), "{} vs {}", c.b, expected_b);
}

#[test]
fn glow_warms_near_its_center_only() {
    let frag = Vec2::new(5.5, 5.5);
    // c = (0.2, 0.1) with aspect 1 sits on the glow centre.
    let warm = evaluate(0.7, 0.6, 0.0, 1.0, frag);
    assert!(warm.r > warm.g && warm.g > warm.b);

    // Far corner: no glow, so all channels agree.
    let grey = evaluate(0.0, 0.0, 0.0, 1.0, frag);
    assert_eq!(grey.r.to_bits(), grey.g.to_bits());
    assert_eq!(grey.g.to_bits(), grey.b.to_bits());
}

#[test]
fn vignette_darkens_corners() {
    // Same centred distance from the glow is not needed; compare worst cases.
    let frag = Vec2::new(0.5, 0.5);
    for t in [0.0, 5.0, 50.0] {
        let corner = evaluate(0.0, 1.0, t, 1.0, frag);
        assert!(corner.g < 0.065, "t={t} corner {}", corner.g);
    }
}

#[test]
fn presentation_clamps_out_of_range() {
    let c = Rgb {
        r: -0.2,
        g: 0.5,
        b: 1.7,
    };
    assert_eq!(c.to_rgba8(), [0, 128, 255, 255]);
}
