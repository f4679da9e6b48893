use colored::Colorize;
use gfx_math::{
    consts::PI,
    types::{Matrix3, Matrix4, Quat, RotationMatrix3, Vector3, Vector4},
};
use std::{error::Error, fmt::Display, result::Result};

const TOLERANCE: f32 = 1e-4;

#[derive(Default)]
struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn section(&self, name: &str) {
        println!("\n{}", name.bold());
    }

    fn value(&self, label: &str, value: impl Display) {
        println!("  {} = {}", label, value);
    }

    fn check(&mut self, label: &str, ok: bool) {
        let tag = if ok {
            self.passed += 1;
            "PASS".green()
        } else {
            self.failed += 1;
            "FAIL".red()
        };
        println!("  [{}] {}", tag, label);
    }
}

fn swizzles(report: &mut Report) {
    report.section("Swizzles");
    let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
    report.value("v", v);
    report.value("v.xyz", v.xyz());
    report.value("v.xy", v.xy());
    report.value("v.wzyx", v.wzyx());
    report.check("xyz", v.xyz() == Vector3::new(1.0, 2.0, 3.0));
    report.check("xy", v.xy().x == 1.0 && v.xy().y == 2.0);
    report.check("wzyx", v.wzyx() == Vector4::new(1.0, 3.0, 2.0, 1.0));
}

fn rotations(report: &mut Report) {
    report.section("Rotations");
    let q = Quat::axis_angle(Vector3::up(), PI);
    let expected = Vector3::new(-1.0, 0.0, 0.0);
    let by_quat = q.rotate(Vector3::x());
    let m: Matrix3 = q.into();
    let by_matrix = m * Vector3::x();
    report.value("q", q);
    report.value("q * x", by_quat);
    report.value("Matrix3(q) * x", by_matrix);
    report.check("half turn about Y via quaternion", by_quat.approx_equal_eps(expected, TOLERANCE));
    report.check("half turn about Y via Matrix3", by_matrix.approx_equal_eps(expected, TOLERANCE));

    let q = Quat::axis_angle(Vector3::new(1.0, 1.0, 1.0).normalize(), 0.123);
    let back = Quat::from(RotationMatrix3::from(q));
    report.value("axis-angle", q);
    report.value("round trip", back);
    report.check(
        "quaternion round trip up to sign",
        back.approx_equal_eps(q, TOLERANCE) || back.approx_equal_eps(-q, TOLERANCE),
    );

    let a = Quat::axis_angle(Vector3::z(), 0.0);
    let b = Quat::axis_angle(Vector3::z(), PI * 0.5);
    let mid = Quat::slerp(a, b, 0.5);
    report.value("slerp(0, 90, 0.5)", mid);
    report.check(
        "slerp halfway",
        mid.approx_equal_eps(Quat::axis_angle(Vector3::z(), PI * 0.25), TOLERANCE),
    );
}

fn transforms(report: &mut Report) {
    report.section("Transforms");
    let model = Matrix4::translate(Vector3::new(10.0, 20.0, 30.0))
        * Matrix4::rotate_y(PI * 0.5)
        * Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
    let local = Vector4::new(1.0, 0.0, 0.0, 1.0);
    let world = model * local;
    let back = model.affine_inv() * world;
    report.value("model", model);
    report.value("world", world);
    report.value("affine_inv * world", back);
    report.check(
        "translate * rotate_y * scale",
        world.approx_equal_eps(Vector4::new(10.0, 20.0, 28.0, 1.0), TOLERANCE),
    );
    report.check("affine inverse back-transform", back.approx_equal_eps(local, TOLERANCE));

    let stretched = Matrix4::scale(Vector3::new(0.5, 1.0, 1.0));
    let tangent = stretched.upper3() * Vector3::new(1.0, -1.0, 0.0);
    let normal = stretched.normal_matrix() * Vector3::new(1.0, 1.0, 0.0);
    report.value("normal matrix", stretched.normal_matrix());
    report.check("normal stays perpendicular", (tangent * normal).abs() < TOLERANCE);
}

fn inverses(report: &mut Report) {
    report.section("General inverse");
    let cases = [
        ("identity", Matrix4::identity()),
        (
            "scale + translate",
            Matrix4::translate(Vector3::new(2.0, 3.0, 4.0))
                * Matrix4::scale(Vector3::new(2.0, 1.0, 0.5)),
        ),
        (
            "rotation",
            Matrix4::rotate_axis_angle(Vector3::new(1.0, 1.0, 1.0).normalize(), 0.123),
        ),
        (
            "arbitrary",
            Matrix4::new(
                Vector4::new(1.0, 2.0, 3.0, 4.0),
                Vector4::new(0.0, 5.0, 1.0, 2.0),
                Vector4::new(7.0, 8.0, 9.0, 0.0),
                Vector4::new(2.0, 1.0, 4.0, 5.0),
            ),
        ),
    ];
    for (name, m) in cases {
        let product = m.inv() * m;
        report.check(
            &format!("inv({}) * m == identity", name),
            product.approx_equal_eps(Matrix4::identity(), TOLERANCE),
        );
    }

    let zero = Matrix4::new(
        Vector4::zero(),
        Vector4::zero(),
        Vector4::zero(),
        Vector4::zero(),
    );
    let inv = zero.inv();
    report.check("singular falls back to identity", inv.is_valid() && inv == Matrix4::identity());
    let n = Vector3::zero().normalize();
    report.value("normalize(0)", n);
    report.check("normalize(0) is zero", n == Vector3::zero());
}

fn projections(report: &mut Report) {
    report.section("Projections");
    let eye = Vector3::new(0.0, 2.0, -5.0);
    let view = Matrix4::look_at_lh(eye, Vector3::zero(), Vector3::up());
    let proj = Matrix4::perspective_lh(PI / 3.0, 16.0 / 9.0, 0.1, 100.0);
    report.value("view", view);
    report.value("proj", proj);
    let clip = proj * view * Vector4::point(Vector3::zero());
    let depth = clip.z / clip.w;
    report.value("target depth", depth);
    report.check("target inside depth range", (0.0..=1.0).contains(&depth));
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut report = Report::default();
    swizzles(&mut report);
    rotations(&mut report);
    transforms(&mut report);
    inverses(&mut report);
    projections(&mut report);

    let summary = format!("{} passed, {} failed", report.passed, report.failed);
    if report.failed > 0 {
        println!("\n{}", summary.red().bold());
        return Err(format!("{} checks failed", report.failed).into());
    }
    println!("\n{}", summary.green().bold());
    Ok(())
}
