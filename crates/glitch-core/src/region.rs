//! Rectangular scan bounds.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open rectangle `[x, x + width) × [y, y + height)`.
///
/// Only bounds the scan; it never acts as a mask. Width or height may be zero
/// or negative, in which case the region is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Region {
    /// Build a region from its corner and extent.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering an entire `width × height` canvas.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_dim(width), clamp_dim(height))
    }

    /// Bounding box of a bubble of `radius` around `(cx, cy)`, clipped to the canvas:
    ///
    /// ```text
    /// x = max(0, cx − r)        width  = min(W, cx + r) − x
    /// y = max(0, cy − r)        height = min(H, cy + r) − y
    /// ```
    ///
    /// A cursor entirely off-canvas yields a non-positive extent.
    pub fn around(cx: i32, cy: i32, radius: i32, canvas_width: u32, canvas_height: u32) -> Self {
        let x = cx.saturating_sub(radius).max(0);
        let y = cy.saturating_sub(radius).max(0);
        let end_x = clamp_dim(canvas_width).min(cx.saturating_add(radius));
        let end_y = clamp_dim(canvas_height).min(cy.saturating_add(radius));
        Self::new(x, y, end_x.saturating_sub(x), end_y.saturating_sub(y))
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True when the region contains no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `(x, y)` lies inside the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection with a `width × height` canvas.
    ///
    /// The result always lies inside the canvas; an empty intersection is
    /// normalized to a zero-sized region.
    pub fn clipped(&self, canvas_width: u32, canvas_height: u32) -> Self {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(clamp_dim(canvas_width));
        let y1 = self.bottom().min(clamp_dim(canvas_height));
        if x1 <= x0 || y1 <= y0 {
            return Self::new(x0.min(x1.max(0)), y0.min(y1.max(0)), 0, 0);
        }
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Column range of the region (empty if the width is non-positive).
    pub fn cols(&self) -> Range<i32> {
        self.x..self.right().max(self.x)
    }

    /// Row range of the region (empty if the height is non-positive).
    pub fn rows(&self) -> Range<i32> {
        self.y..self.bottom().max(self.y)
    }

    /// Number of pixels covered; zero when empty.
    pub fn area(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width as usize * self.height as usize
    }
}

/// Canvas dimensions beyond `i32::MAX` are unreachable in practice; saturate.
fn clamp_dim(d: u32) -> i32 {
    i32::try_from(d).unwrap_or(i32::MAX)
}
