use crate::config::{LayoutOptions, ResolvedOptions};
use crate::error::Result;
use crate::model::{Dimension, Size};

/// Scales a `width x height` item so it is exactly `column_width` wide, or shorter
/// if that would make it taller than `max_height`. Aspect ratio is always preserved.
///
/// Sides are derived from the ratio `height / width` rather than a scale factor, so
/// extremely small items do not overflow to infinity.
pub fn scale_dimension(width: f64, height: f64, column_width: f64, max_height: Option<f64>) -> Size {
    let scaled_height = column_width * (height / width);
    match max_height {
        Some(max_height) if scaled_height > max_height => {
            Size::new(max_height * (width / height), max_height)
        }
        _ => Size::new(column_width, scaled_height),
    }
}

/// Scales every dimension with the geometry of `options`, in input order.
pub fn scale_all<E>(dimensions: &[Dimension<E>], options: &ResolvedOptions) -> Vec<Size> {
    dimensions
        .iter()
        .map(|d| scale_dimension(d.width, d.height, options.column_width, options.max_height))
        .collect()
}

/// Returns a scaling function for callers that need sizes without placement.
///
/// The container geometry is validated the same way as for a full layout.
pub fn scaler<E>(
    columns: u32,
    total_width: f64,
    gutter_x: f64,
    max_height: Option<f64>,
) -> Result<impl Fn(&Dimension<E>) -> Size> {
    let mut options = LayoutOptions::builder(columns, total_width).gutter_x(gutter_x);
    if let Some(max_height) = max_height {
        options = options.max_height(max_height);
    }
    let resolved = options.build().resolve()?;
    let column_width = resolved.column_width;
    Ok(move |d: &Dimension<E>| scale_dimension(d.width, d.height, column_width, max_height))
}
