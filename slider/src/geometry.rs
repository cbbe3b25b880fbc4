//! Pointer-to-percentage conversion for the reveal boundary.
//!
//! All functions here are total: whatever the browser reports (zero-width
//! containers, coordinates on another monitor, NaN from a detached node),
//! the result is a finite percentage in `[MIN_POSITION, MAX_POSITION]`.

/// Left edge of the comparison, in percent.
pub const MIN_POSITION: f64 = 0.0;
/// Right edge of the comparison, in percent.
pub const MAX_POSITION: f64 = 100.0;

/// Horizontal extent of the slider container in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Distance of the left edge from the viewport's left edge, in CSS px
    pub left: f64,
    /// Rendered width, in CSS px
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Horizontal part of `getBoundingClientRect()`.
    pub fn from_rect(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.width())
    }
}

/// Clamp a percentage into `[0, 100]`. NaN collapses to the left edge.
pub fn clamp_position(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_POSITION;
    }
    value.clamp(MIN_POSITION, MAX_POSITION)
}

/// Convert a pointer's `clientX` into a reveal position.
///
/// Two clamps are applied: the offset from the container's left edge is
/// clamped to `[0, width]`, then the resulting percentage is clamped to
/// `[0, 100]`. The second clamp is what keeps a zero-width container from
/// producing `0 / 0`.
pub fn position_from_pointer(client_x: f64, bounds: Bounds) -> f64 {
    let width = if bounds.width.is_finite() && bounds.width > 0.0 {
        bounds.width
    } else {
        0.0
    };

    let offset = client_x - bounds.left;
    let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, width) };

    if width == 0.0 {
        return MIN_POSITION;
    }

    clamp_position(offset / width * 100.0)
}

/// Round to two decimals for use in inline styles.
pub fn round_percent(value: f64) -> f64 {
    (clamp_position(value) * 100.0).round() / 100.0
}
