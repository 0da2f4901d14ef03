use crate::foundation::core::Rgb;
use crate::foundation::math::{fract, lerp};

// Keeps hue/saturation finite for greys and black.
const HSV_EPS: f64 = 1.0e-10;

/// Hue/saturation/value triple. `h` is expressed in turns (`[0, 1)`), not degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    /// Hue in turns.
    pub h: f64,
    /// Saturation in `[0, 1]`.
    pub s: f64,
    /// Value in `[0, 1]`.
    pub v: f64,
}

/// Convert RGB to HSV.
///
/// Branch-light formulation: sort the channels with two selects, then derive hue from the
/// chroma. Greys come out with `h = 0, s = 0`.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    const K: [f64; 4] = [0.0, -1.0 / 3.0, 2.0 / 3.0, -1.0];

    let p = if c.g >= c.b {
        [c.g, c.b, K[0], K[1]]
    } else {
        [c.b, c.g, K[3], K[2]]
    };
    let q = if c.r >= p[0] {
        [c.r, p[1], p[2], p[0]]
    } else {
        [p[0], p[1], p[3], c.r]
    };

    let d = q[0] - q[3].min(q[1]);
    Hsv {
        h: (q[2] + (q[3] - q[1]) / (6.0 * d + HSV_EPS)).abs(),
        s: d / (q[0] + HSV_EPS),
        v: q[0],
    }
}

/// Convert HSV back to RGB. Hue wraps with floor semantics, so any real `h` is accepted.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    fn channel(h: f64, offset: f64, s: f64, v: f64) -> f64 {
        let p = (fract(h + offset) * 6.0 - 3.0).abs();
        v * lerp(1.0, (p - 1.0).clamp(0.0, 1.0), s)
    }

    Rgb {
        r: channel(c.h, 1.0, c.s, c.v),
        g: channel(c.h, 2.0 / 3.0, c.s, c.v),
        b: channel(c.h, 1.0 / 3.0, c.s, c.v),
    }
}

/// Interpolate each HSV channel independently.
///
/// Hue is blended as a plain scalar: there is no shortest-arc wraparound, so red (`h = 0`) to
/// blue (`h = 2/3`) travels through green.
pub fn mix_hsv(a: Hsv, b: Hsv, t: f64) -> Hsv {
    Hsv {
        h: lerp(a.h, b.h, t),
        s: lerp(a.s, b.s, t),
        v: lerp(a.v, b.v, t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsv.rs"]
mod tests;
