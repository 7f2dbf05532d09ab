use std::ops::Range;

use super::Placer;
use crate::config::ResolvedOptions;
use crate::error::Result;
use crate::model::{Point, Size};

/// Shortest-column (masonry) placement.
///
/// Each item goes to the column with the smallest accumulated height; ties go to the
/// lowest column index. Greedy per item, never backtracks.
pub struct ColumnPacker {
    options: ResolvedOptions,
    /// Accumulated height per used column, including the gutter after the last item.
    /// Columns are opened left to right as they are first chosen.
    heights: Vec<f64>,
    placed: usize,
}

impl ColumnPacker {
    pub fn new(options: ResolvedOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            heights: Vec::new(),
            placed: 0,
        })
    }

    fn columns(&self) -> usize {
        self.options.columns as usize
    }

    fn shortest_column(&self) -> usize {
        let mut best = None;
        for (col, &h) in self.heights.iter().enumerate() {
            // strict comparison keeps the lowest index on ties
            if best.is_none_or(|b: usize| h < self.heights[b]) {
                best = Some(col);
            }
        }
        match best {
            // an unopened column has height 0 and sits right of every opened one
            Some(b) if self.heights[b] > 0.0 && self.heights.len() < self.columns() => {
                self.heights.len()
            }
            Some(b) => b,
            None => 0,
        }
    }

    /// Accumulated height of each column that has received an item, left to right.
    pub fn column_heights(&self) -> &[f64] {
        &self.heights
    }
}

impl Placer for ColumnPacker {
    fn place(&mut self, size: &Size) -> Point {
        let col = self.shortest_column();
        if col == self.heights.len() {
            self.heights.push(0.0);
        }
        let origin = Point::new(self.options.column_x(col), self.heights[col]);
        self.heights[col] += size.height + self.options.gutter_y;
        self.placed += 1;
        origin
    }

    fn incomplete_group(&self) -> Option<Range<usize>> {
        (self.placed > 0 && self.placed < self.columns()).then(|| 0..self.placed)
    }

    fn content_height(&self) -> f64 {
        self.heights
            .iter()
            .map(|h| h - self.options.gutter_y)
            .fold(0.0, f64::max)
    }
}
