use crate::foundation::core::Vec3;
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::material::snapshot::KernelSnapshot;
use crate::render::pipeline::{ShadeThreading, shade_points};

/// A shaded image as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major. Alpha is always 255.
    pub data: Vec<u8>,
}

/// Axis-aligned plane used to frame a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Plane {
    /// Image x runs along +X, image y along -Y.
    #[default]
    Xy,
    /// Image x runs along +X, image y along -Z.
    Xz,
    /// Image x runs along +Y, image y along -Z.
    Yz,
}

impl Plane {
    fn axes(self) -> (Vec3, Vec3) {
        match self {
            Self::Xy => (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            Self::Xz => (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            Self::Yz => (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        }
    }
}

/// Regular grid of query positions spanning a parallelogram in model space.
///
/// Pixel `(x, y)` samples `origin + u * (x + 0.5) / width + v * (y + 0.5) / height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGrid {
    /// Corner of pixel `(0, 0)`.
    pub origin: Vec3,
    /// Full-width edge vector.
    pub u: Vec3,
    /// Full-height edge vector.
    pub v: Vec3,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlaneGrid {
    /// Create a validated grid with non-zero dimensions.
    pub fn new(origin: Vec3, u: Vec3, v: Vec3, width: u32, height: u32) -> GradFieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(GradFieldError::validation(
                "grid width and height must be > 0",
            ));
        }
        Ok(Self {
            origin,
            u,
            v,
            width,
            height,
        })
    }

    /// Frame the bounding box `(lo, hi)` in `plane`, padded by `margin` (a fraction of the extent
    /// on each side) and widened to keep square pixels. The grid lies at the box's centre depth.
    pub fn fit(
        bounds: (Vec3, Vec3),
        plane: Plane,
        width: u32,
        height: u32,
        margin: f64,
    ) -> GradFieldResult<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(GradFieldError::validation(
                "grid margin must be finite and >= 0",
            ));
        }
        if width == 0 || height == 0 {
            return Err(GradFieldError::validation(
                "grid width and height must be > 0",
            ));
        }

        let (lo, hi) = bounds;
        let (a, b) = plane.axes();
        let centre = (lo + hi) * 0.5;
        let extent = hi - lo;
        let along = |axis: Vec3, v: Vec3| axis.x * v.x + axis.y * v.y + axis.z * v.z;

        let pad = 1.0 + 2.0 * margin;
        let mut span_a = along(a, extent) * pad;
        let mut span_b = along(b, extent) * pad;
        if span_a <= 0.0 && span_b <= 0.0 {
            span_a = 1.0;
            span_b = 1.0;
        }

        let (w, h) = (f64::from(width), f64::from(height));
        if span_a / w > span_b / h {
            span_b = span_a * h / w;
        } else {
            span_a = span_b * w / h;
        }

        let origin = centre - a * (span_a * 0.5) + b * (span_b * 0.5);
        Self::new(origin, a * span_a, b * -span_b, width, height)
    }

    /// Query position for the centre of pixel `(x, y)`.
    pub fn point(&self, x: u32, y: u32) -> Vec3 {
        let fx = (f64::from(x) + 0.5) / f64::from(self.width);
        let fy = (f64::from(y) + 0.5) / f64::from(self.height);
        self.origin + self.u * fx + self.v * fy
    }

    /// All pixel-centre positions in row-major order.
    pub fn points(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.point(x, y));
            }
        }
        out
    }
}

/// Shade every pixel of `grid` into an opaque RGBA8 frame.
pub fn render_grid(
    snapshot: &KernelSnapshot,
    grid: &PlaneGrid,
    threading: &ShadeThreading,
) -> GradFieldResult<FrameRGBA> {
    let colors = shade_points(snapshot, &grid.points(), threading)?;
    let mut data = Vec::with_capacity(colors.len() * 4);
    for c in colors {
        let px = c.to_rgba8();
        data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }
    Ok(FrameRGBA {
        width: grid.width,
        height: grid.height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
