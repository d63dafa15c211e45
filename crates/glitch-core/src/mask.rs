//! Circular bubble mask.

use crate::params::EffectParams;

/// Whether `(x, y)` is affected under `params`.
///
/// Always true when masking is disabled. Otherwise the boundary is inclusive:
///
/// ```text
/// (x − cx)² + (y − cy)² ≤ r²
/// ```
///
/// Compared in `i64` so large coordinates cannot overflow. A negative radius
/// contains nothing.
#[inline]
pub fn inside_bubble(x: i32, y: i32, params: &EffectParams) -> bool {
    if !params.use_circle_mask {
        return true;
    }
    if params.radius < 0 {
        return false;
    }
    let dx = i64::from(x) - i64::from(params.center_x);
    let dy = i64::from(y) - i64::from(params.center_y);
    let r = i64::from(params.radius);
    dx * dx + dy * dy <= r * r
}
