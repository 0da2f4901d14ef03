/// Cubic Hermite easing between two edges, clamped to `[0, 1]`.
///
/// Returns 0 for `x <= lo` and 1 for `x >= hi`. When `lo == hi` the curve degenerates to a hard
/// step at the edge. Callers are expected to validate `lo <= hi`.
pub fn smoothstep(lo: f64, hi: f64, x: f64) -> f64 {
    if x <= lo {
        return 0.0;
    }
    if x >= hi {
        return 1.0;
    }
    let t = (x - lo) / (hi - lo);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation `a + (b - a) * t` without clamping `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fractional part with floor semantics (`x - floor(x)`), always in `[0, 1)` for finite input.
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
