//! Walk a point through a few transforms and print each stage.

use gfxmath::{M4, P3, T3, V3, V4, float_types::FRAC_PI_4};

fn main() {
    let p = P3::new(1.0, 0.0, 0.0);

    let eighth = T3::rotate_z(FRAC_PI_4);
    let once = eighth.transform(p);
    let twice = eighth.transform(once);
    println!("eighth turn about Z:\n{eighth}");
    println!("{p} -> {once} -> {twice}");

    // rotate, then lift 2 units along Z
    let lift = eighth.compose(&eighth).compose(&T3::translate(0.0, 0.0, 2.0));
    println!("\nquarter turn then translate:\n{lift}");
    println!("{p} -> {}", lift.transform(p));

    // the same transform as a full 4x4, acting on a point and a direction
    let m = M4::from(lift);
    println!("\nas M4:\n{m}");
    println!("point     {} -> {}", V4::from_point(p), m.mul_v4(V4::from_point(p)));
    let dir = V4::from_vector(V3::new(1.0, 0.0, 0.0));
    println!("direction {dir} -> {}", m.mul_v4(dir));

    match T3::try_from(M4::from(lift).transpose()) {
        Ok(t) => println!("\ntransposed is still affine:\n{t}"),
        Err(e) => println!("\ntransposed: {e}"),
    }
}
