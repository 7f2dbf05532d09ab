use serde::{Deserialize, Serialize};

use crate::config::ResolvedOptions;

/// Caller fields carried from a dimension to its rectangle without interpretation.
pub type Extras = serde_json::Map<String, serde_json::Value>;

/// Raw size of an input item plus caller-owned extra fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dimension<E = Extras> {
    pub width: f64,
    pub height: f64,
    /// Extra fields (e.g. an ordering tag); flattened next to `width`/`height` when serialized.
    #[serde(flatten)]
    pub extra: E,
}

impl<E: Default> Dimension<E> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            extra: E::default(),
        }
    }
}

impl<E> Dimension<E> {
    pub fn with_extra(width: f64, height: f64, extra: E) -> Self {
        Self {
            width,
            height,
            extra,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A width/height pair after scaling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of a placed item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A positioned item. `x,y` is top-left; extra fields come from the matching [`Dimension`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rectangle<E = Extras> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub extra: E,
}

impl<E> Rectangle<E> {
    pub fn new(origin: Point, size: Size, extra: E) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
            extra,
        }
    }
    /// Exclusive right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    /// Exclusive bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
    /// True if the interiors of `self` and `other` overlap.
    pub fn overlaps<F>(&self, other: &Rectangle<F>) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
}

/// Statistics about how well a layout fills its container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutStats {
    pub num_items: usize,
    /// Rightmost edge over all rectangles.
    pub content_width: f64,
    /// Bottom edge of the tallest column.
    pub content_height: f64,
    /// Sum of rectangle areas.
    pub used_area: f64,
    /// used_area / (container width * content_height), 0.0 to 1.0 for non-overlapping layouts.
    pub occupancy: f64,
    /// Items scaled below the column width because of `max_height`.
    pub num_clamped: usize,
}

impl LayoutStats {
    /// Computes statistics for `rects` laid out with `options`.
    pub fn from_rectangles<E>(rects: &[Rectangle<E>], options: &ResolvedOptions) -> Self {
        let mut content_width = 0.0f64;
        let mut content_height = 0.0f64;
        let mut used_area = 0.0;
        let mut num_clamped = 0;
        // Scaling to the column width is exact up to rounding.
        let tolerance = options.column_width * 1e-9;

        for r in rects {
            content_width = content_width.max(r.right());
            content_height = content_height.max(r.bottom());
            used_area += r.width * r.height;
            if r.width < options.column_width - tolerance {
                num_clamped += 1;
            }
        }

        let container_area = options.width * content_height;
        let occupancy = if container_area > 0.0 {
            used_area / container_area
        } else {
            0.0
        };

        Self {
            num_items: rects.len(),
            content_width,
            content_height,
            used_area,
            occupancy,
            num_clamped,
        }
    }

    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Content: {:.1}x{:.1}, Occupancy: {:.2}%, Clamped: {}",
            self.num_items,
            self.content_width,
            self.content_height,
            self.occupancy * 100.0,
            self.num_clamped,
        )
    }

    /// Area of the occupied container band not covered by any item.
    pub fn wasted_area(&self, container_width: f64) -> f64 {
        (container_width * self.content_height - self.used_area).max(0.0)
    }
}
