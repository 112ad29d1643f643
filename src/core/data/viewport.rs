use crate::core::data::complex::Complex;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::errors::{FractalError, FractalResult};

/// Ceiling for either half-extent after a zoom, well inside `f64` range.
pub const MAX_HALF_EXTENT: f64 = 1e12;

/// The visible rectangle of the complex plane, as a center and half-extents.
///
/// Both half-extents are always positive. Aspect ratio is independent of the
/// screen's; a mismatch simply stretches the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    center: Complex,
    half_width: f64,
    half_height: f64,
}

impl ViewBounds {
    pub fn new(center: Complex, half_width: f64, half_height: f64) -> FractalResult<Self> {
        if !(half_width > 0.0 && half_height > 0.0)
            || !half_width.is_finite()
            || !half_height.is_finite()
        {
            return Err(FractalError::DegenerateViewport {
                half_width,
                half_height,
            });
        }

        if !center.is_finite() {
            return Err(FractalError::invalid("center", "must be finite"));
        }

        Ok(Self {
            center,
            half_width,
            half_height,
        })
    }

    /// For compile-time presets whose extents are known to be positive.
    pub(crate) const fn preset(center: Complex, half_width: f64, half_height: f64) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Same extents, different center.
    #[must_use]
    pub fn recentered(&self, center: Complex) -> Self {
        Self { center, ..*self }
    }

    /// Scales both half-extents by `factor` about a new center, never letting
    /// either extent drop below `min_half_extent` or grow past
    /// [`MAX_HALF_EXTENT`].
    ///
    /// Both extents share one scale factor, so the aspect ratio is preserved.
    #[must_use]
    pub fn zoomed(&self, center: Complex, factor: f64, min_half_extent: f64) -> Self {
        let smallest = self.half_width.min(self.half_height);
        let largest = self.half_width.max(self.half_height);
        let floor = min_half_extent / smallest;
        let ceiling = MAX_HALF_EXTENT / largest;
        let scale = factor.max(floor).min(ceiling);

        Self {
            center,
            half_width: self.half_width * scale,
            half_height: self.half_height * scale,
        }
    }

    /// Linear interpolation towards `target`; `t` is expected in `[0, 1]`.
    ///
    /// Endpoints are returned verbatim so a finished animation lands exactly
    /// on its target.
    #[must_use]
    pub fn interpolate(&self, target: &ViewBounds, t: f64) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *target;
        }

        let lerp = |start: f64, end: f64| start + t * (end - start);

        Self {
            center: Complex {
                real: lerp(self.center.real, target.center.real),
                imag: lerp(self.center.imag, target.center.imag),
            },
            half_width: lerp(self.half_width, target.half_width),
            half_height: lerp(self.half_height, target.half_height),
        }
    }

    /// `(center_re, center_im, half_width, half_height)`
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.center.real,
            self.center.imag,
            self.half_width,
            self.half_height,
        )
    }
}

/// Maps between screen pixels and the complex plane.
///
/// Pixel origin is top-left with y growing downwards; the imaginary axis grows
/// upwards. The viewport never clamps its own extents, callers do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    bounds: ViewBounds,
    screen_width: u32,
    screen_height: u32,
}

impl Viewport {
    pub fn new(bounds: ViewBounds, screen_width: u32, screen_height: u32) -> FractalResult<Self> {
        validate_screen_size(screen_width, screen_height)?;

        Ok(Self {
            bounds,
            screen_width,
            screen_height,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: ViewBounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    #[must_use]
    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    pub fn resize(&mut self, screen_width: u32, screen_height: u32) -> FractalResult<()> {
        validate_screen_size(screen_width, screen_height)?;

        self.screen_width = screen_width;
        self.screen_height = screen_height;
        Ok(())
    }

    /// Complex-plane units covered by one pixel, horizontally and vertically.
    #[must_use]
    pub fn pixel_scale(&self) -> (f64, f64) {
        (
            2.0 * self.bounds.half_width / f64::from(self.screen_width),
            2.0 * self.bounds.half_height / f64::from(self.screen_height),
        )
    }

    #[must_use]
    pub fn to_complex(&self, pixel: PixelPoint) -> Complex {
        let ViewBounds {
            center,
            half_width,
            half_height,
        } = self.bounds;
        let x_frac = pixel.x / f64::from(self.screen_width);
        let y_frac = pixel.y / f64::from(self.screen_height);

        Complex {
            real: (center.real - half_width) + x_frac * (2.0 * half_width),
            imag: (center.imag + half_height) - y_frac * (2.0 * half_height),
        }
    }

    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> PixelPoint {
        let ViewBounds {
            center,
            half_width,
            half_height,
        } = self.bounds;
        let x_frac = (point.real - (center.real - half_width)) / (2.0 * half_width);
        let y_frac = ((center.imag + half_height) - point.imag) / (2.0 * half_height);

        PixelPoint {
            x: x_frac * f64::from(self.screen_width),
            y: y_frac * f64::from(self.screen_height),
        }
    }
}

fn validate_screen_size(screen_width: u32, screen_height: u32) -> FractalResult<()> {
    if screen_width == 0 || screen_height == 0 {
        return Err(FractalError::invalid(
            "screen_size",
            format!("must be positive: {}x{}", screen_width, screen_height),
        ));
    }

    Ok(())
}
