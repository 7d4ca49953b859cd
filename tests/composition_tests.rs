mod support;

use approx::assert_abs_diff_eq;
use gfxmath::{
    Axis, M3, M4, P3, T3, V3, V4,
    float_types::{FRAC_PI_4, PI, Real},
};
use support::EPS;

/// A handful of affine transforms, each built the same way in all three shapes.
fn paired_transforms() -> Vec<(M3, M4, T3)> {
    let mut out = Vec::new();
    for angle in support::sample_angles() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            out.push((M3::rotate(axis, angle), M4::rotate(axis, angle), T3::rotate(axis, angle)));
        }
    }
    out.push((M3::scale(2.0, 0.5, -1.0), M4::scale(2.0, 0.5, -1.0), T3::scale(2.0, 0.5, -1.0)));
    out.push((M3::identity(), M4::identity(), T3::identity()));
    out
}

#[test]
fn upper_left_blocks_agree_across_representations() {
    for (m3, m4, t3) in paired_transforms() {
        let a = m4.upper_left();
        let b = t3.upper_left();
        assert!(a.equivalent(&b, EPS), "M4 {a}vs T3 {b}");
        assert!(m3.equivalent(&b, EPS), "M3 {m3}vs T3 {b}");
        assert!(m3.equivalent(&a, EPS));
    }
}

#[test]
fn eighth_turns_compose_to_quarter_turn() {
    let p = P3::new(1.0, 0.0, 0.0);

    let t = T3::rotate_z(PI / 4.0);
    let p2 = t.transform(t.transform(p));
    assert!(p2.equivalent(P3::new(0.0, 1.0, 0.0), EPS), "{p2}");
    assert!(t.compose(&t).transform(p).equivalent(p2, EPS));

    let m = M3::rotate_z(PI / 4.0);
    let v = V3::from_point(p);
    let v2 = m.mul_v3(m.mul_v3(v));
    assert!(v2.equivalent(V3::new(0.0, 1.0, 0.0), EPS));
    assert!(m.compose(&m).mul_v3(v).equivalent(v2, EPS));

    let m4 = M4::rotate_z(PI / 4.0);
    let v4 = V4::from_point(p);
    let v42 = m4.mul_v4(m4.mul_v4(v4));
    assert!(v42.equivalent(V4::new(0.0, 1.0, 0.0, 1.0), EPS));
    assert!(m4.compose(&m4).mul_v4(v4).equivalent(v42, EPS));

    assert!(m4.upper_left().equivalent(&t.upper_left(), EPS));
    assert!(m.equivalent(&t.upper_left(), EPS));
}

#[test]
fn t3_compose_applies_left_operand_first() {
    let transforms = [
        T3::translate(1.0, 2.0, 3.0),
        T3::rotate_x(0.4),
        T3::scale(2.0, 1.0, 0.5),
        T3::rotate_z(-1.3).compose(&T3::translate(-4.0, 0.0, 1.0)),
        T3::rotate_y(2.2),
    ];
    for a in &transforms {
        for b in &transforms {
            let ab = a.compose(b);
            for p in support::sample_points() {
                let stepwise = b.transform(a.transform(p));
                assert!(
                    ab.transform(p).equivalent(stepwise, 1e-3),
                    "a={a}b={b}p={p}"
                );
            }
        }
    }
}

#[test]
fn m4_compose_applies_left_operand_first() {
    let a = M4::rotate_y(0.7).compose(&M4::translate(0.0, 3.0, 0.0));
    let b = M4::scale(1.0, 2.0, 1.0).compose(&M4::rotate_x(-0.2));
    for p in support::sample_points() {
        let v = V4::from_point(p);
        let stepwise = b.mul_v4(a.mul_v4(v));
        assert!(a.compose(&b).mul_v4(v).equivalent(stepwise, 1e-3));
        assert_abs_diff_eq!(a.compose(&b).transform_point(p), P3::from_homogeneous(stepwise), epsilon = 1e-3);
    }
}

#[test]
fn order_matters() {
    let r = T3::rotate_z(PI / 2.0);
    let t = T3::translate(1.0, 0.0, 0.0);
    let p = P3::ORIGIN;
    assert!(r.compose(&t).transform(p).equivalent(P3::new(1.0, 0.0, 0.0), EPS));
    assert!(t.compose(&r).transform(p).equivalent(P3::new(0.0, 1.0, 0.0), EPS));
}

#[test]
fn t3_and_m4_agree_on_composites() {
    let t = T3::rotate_x(0.3)
        .compose(&T3::translate(1.0, -1.0, 2.0))
        .compose(&T3::scale(1.5, 1.5, 1.5))
        .compose(&T3::rotate_z(FRAC_PI_4));
    let m = M4::rotate_x(0.3)
        .compose(&M4::translate(1.0, -1.0, 2.0))
        .compose(&M4::scale(1.5, 1.5, 1.5))
        .compose(&M4::rotate_z(FRAC_PI_4));

    assert_abs_diff_eq!(M4::from(t), m, epsilon = EPS);
    assert_abs_diff_eq!(t.translation(), m.translation(), epsilon = EPS);
    for p in support::sample_points() {
        let via_m4 = m.mul_v4(V4::from_point(p));
        assert!(support::approx_eq(via_m4.w, 1.0, EPS));
        assert!(t.transform(p).equivalent(P3::from_homogeneous(via_m4), 1e-3));
    }
}

#[test]
fn composition_is_associative() {
    let a = T3::rotate_y(1.0);
    let b = T3::translate(0.0, 2.0, 0.0);
    let c = T3::scale(0.5, 3.0, 1.0);
    assert_abs_diff_eq!(a.compose(&b).compose(&c), a.compose(&b.compose(&c)), epsilon = EPS);

    let (x, y, z) = (M3::rotate_x(0.2), M3::rotate_y(0.4), M3::rotate_z(0.6));
    assert_abs_diff_eq!((x * y) * z, x * (y * z), epsilon = EPS);
}

#[test]
fn identity_is_neutral() {
    let t = T3::rotate_x(0.5).compose(&T3::translate(1.0, 2.0, 3.0));
    assert_eq!(T3::identity().compose(&t), t);
    assert_eq!(t.compose(&T3::identity()), t);
    let m = M4::from(t);
    assert_eq!(M4::identity().compose(&m), m);
    assert_eq!(m.compose(&M4::identity()), m);
}

#[test]
fn operator_forms_match_methods() {
    let m = M3::rotate_x(0.75);
    let v = V3::new(1.0, 2.0, 3.0);
    assert_eq!(v * m, m.mul_v3(v));
    let m4 = M4::rotate_z(0.75);
    let h = V4::from_vector(v);
    assert_eq!(h * m4, m4.mul_v4(h));
    let t = T3::translate(1.0, 1.0, 1.0);
    let p = P3::new(0.0, 0.0, 0.0);
    assert_eq!(p * t, t.transform(p));
    assert_eq!(t * t, t.compose(&t));
}

// T3::mul_v3 treats the input as a column vector against the stored rows, so
// its w is the translation row dotted with the input. Pinned here as-is.
#[test]
fn t3_mul_v3_current_output() {
    let t = T3::rotate_y(PI / 2.0).compose(&T3::translate(2.0, 0.0, 0.0));
    let v = V3::new(1.0, 0.0, 0.0);
    let out = t.mul_v3(v);
    // rows of rotate_y(90°) are (0,0,1), (0,1,0), (-1,0,0); translation (2,0,0)
    assert!(out.equivalent(V4::new(0.0, 0.0, -1.0, 2.0), EPS), "{out}");

    // not the same as the row-vector transform of a direction
    let as_direction = V4::from_vector(v).transform(&t);
    assert!(as_direction.equivalent(V3::new(0.0, 0.0, 1.0), EPS));
    assert!(!out.xyz().equivalent(as_direction, EPS));

    let w_only: Real = t.translation().dot(v);
    assert_eq!(out.w, w_only);
}
