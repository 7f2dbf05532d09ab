use tracing::{debug, instrument, trace};

use crate::config::{MasonryConfig, ResolvedOptions};
use crate::customize::apply_customize;
use crate::error::Result;
use crate::model::{Point, Rectangle, Size};
use crate::placer::placer_for;
use crate::scale::scale_all;

#[instrument(skip_all, fields(items = config.dimensions.len()))]
/// Lays out `config.dimensions` and returns one rectangle per dimension, in input order.
///
/// Notes:
/// - Options and every dimension are validated before any placement work.
/// - Extra fields of each dimension are cloned onto its rectangle.
/// - The customize hook, if any, sees the fully positioned result and may replace entries.
pub fn generate_rectangles<E: Clone>(config: &MasonryConfig<E>) -> Result<Vec<Rectangle<E>>> {
    let resolved = config.resolve()?;
    let options = &resolved.options;
    debug!(
        columns = options.columns,
        column_width = options.column_width,
        gutter_x = options.gutter_x,
        gutter_y = options.gutter_y,
        mode = ?options.mode(),
        centering = options.centering,
        "resolved layout geometry"
    );

    let sizes = scale_all(resolved.dimensions, options);
    let positions = layout_sizes(&sizes, options)?;

    let rects: Vec<Rectangle<E>> = resolved
        .dimensions
        .iter()
        .zip(sizes)
        .zip(positions)
        .map(|((dim, size), origin)| Rectangle::new(origin, size, dim.extra.clone()))
        .collect();

    apply_customize(rects, &resolved)
}

/// Places already-scaled sizes and applies centering when enabled.
///
/// `options` is re-validated, so hand-built or deserialized options fail instead of panicking.
pub fn layout_sizes(sizes: &[Size], options: &ResolvedOptions) -> Result<Vec<Point>> {
    let mut placer = placer_for(options)?;
    let mut points: Vec<Point> = sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let p = placer.place(size);
            trace!(index, x = p.x, y = p.y, "placed item");
            p
        })
        .collect();

    if options.centering {
        if let Some(group) = placer.incomplete_group() {
            debug!(start = group.start, len = group.len(), "centering incomplete row");
            center_group(&mut points[group], options);
        }
    }
    debug!(content_height = placer.content_height(), "layout complete");
    Ok(points)
}

/// Shifts a group of fewer than `columns` items right by half the unused column width.
///
/// The offset counts column widths only; gutters are not included.
pub fn center_group(points: &mut [Point], options: &ResolvedOptions) {
    let columns = options.columns as usize;
    let k = points.len();
    if k == 0 || k >= columns {
        return;
    }
    let offset = (columns - k) as f64 * options.column_width / 2.0;
    for p in points {
        p.x += offset;
    }
}
