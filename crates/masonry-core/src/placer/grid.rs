use std::ops::Range;

use super::Placer;
use crate::config::ResolvedOptions;
use crate::error::Result;
use crate::model::{Point, Size};

/// Strict row-major placement. Item `i` lands in column `i % columns`, row `i / columns`;
/// each row is as tall as its tallest item.
pub struct GridPlacer {
    options: ResolvedOptions,
    placed: usize,
    row_top: f64,
    row_height: f64,
}

impl GridPlacer {
    pub fn new(options: ResolvedOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            placed: 0,
            row_top: 0.0,
            row_height: 0.0,
        })
    }

    fn columns(&self) -> usize {
        self.options.columns as usize
    }
}

impl Placer for GridPlacer {
    fn place(&mut self, size: &Size) -> Point {
        let col = self.placed % self.columns();
        if col == 0 && self.placed > 0 {
            // start a new row below the previous one
            self.row_top += self.row_height + self.options.gutter_y;
            self.row_height = 0.0;
        }
        self.row_height = self.row_height.max(size.height);
        self.placed += 1;
        Point::new(self.options.column_x(col), self.row_top)
    }

    fn incomplete_group(&self) -> Option<Range<usize>> {
        let rem = self.placed % self.columns();
        (rem != 0).then(|| self.placed - rem..self.placed)
    }

    fn content_height(&self) -> f64 {
        if self.placed == 0 {
            0.0
        } else {
            self.row_top + self.row_height
        }
    }
}
