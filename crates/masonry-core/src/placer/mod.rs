use std::ops::Range;

use crate::config::{PlacementMode, ResolvedOptions};
use crate::error::Result;
use crate::model::{Point, Size};

pub mod columns;
pub mod grid;

/// A placer assigns positions to scaled items, one at a time, in input order.
///
/// Implementations keep all state per instance; a fresh placer is created for every layout call.
pub trait Placer {
    /// Places the next item and returns its top-left corner.
    fn place(&mut self, size: &Size) -> Point;
    /// Indices of the trailing group holding fewer items than there are columns, if any.
    fn incomplete_group(&self) -> Option<Range<usize>>;
    /// Bottom edge of the tallest column, without trailing gutter.
    fn content_height(&self) -> f64;
}

/// Creates the placer matching the resolved `collapsing` option.
pub fn placer_for(options: &ResolvedOptions) -> Result<Box<dyn Placer>> {
    Ok(match options.mode() {
        PlacementMode::Grid => Box::new(grid::GridPlacer::new(options.clone())?),
        PlacementMode::Packed => Box::new(columns::ColumnPacker::new(options.clone())?),
    })
}
