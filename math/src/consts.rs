pub const PI: f32 = std::f32::consts::PI;
pub const PI_HALF: f32 = PI * 0.5;
pub const PI_2: f32 = PI * 2.0;
pub const DEG_TO_RAD: f32 = PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Near-zero tolerance for normalization and singular pivot detection.
pub const EPS: f32 = 1e-6;


#[inline]
pub fn almost_equal(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

/// Unlike `f32::clamp` this never panics on inverted bounds and lets NaN through.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
