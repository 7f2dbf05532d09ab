//! Core library for laying out tiles in a multi-column container.
//!
//! - Scaling: every item is scaled to the column width (or below, to honor `max_height`), keeping its aspect ratio
//! - Placement: strict row-major grid, or masonry packing into the shortest column
//! - Post-processing: optional centering of an incomplete trailing row, optional per-item customize hook
//! - Data model is serde-serializable; extra fields on input dimensions are carried to the output untouched.
//!
//! Quick example:
//! ```
//! use masonry_core::{Dimension, LayoutOptions, MasonryConfig, generate_rectangles};
//! # fn main() -> masonry_core::Result<()> {
//! let dims: Vec<Dimension> = vec![Dimension::new(800.0, 600.0), Dimension::new(400.0, 800.0)];
//! let opts = LayoutOptions::builder(2, 820.0).gutter(20.0).build();
//! let rects = generate_rectangles(&MasonryConfig::new(dims, opts))?;
//! assert_eq!(rects[1].x, 420.0);
//! assert_eq!(rects[1].height, 800.0);
//! # Ok(()) }
//! ```

pub mod config;
pub mod customize;
pub mod error;
pub mod layout;
pub mod model;
pub mod placer;
pub mod scale;

pub use config::*;
pub use customize::*;
pub use error::*;
pub use layout::*;
pub use model::*;
pub use placer::*;
pub use scale::*;

/// Convenience prelude for common types and functions.
/// Importing `masonry_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{
        LayoutOptions, LayoutOptionsBuilder, MasonryConfig, PlacementMode, ResolvedConfig,
        ResolvedOptions,
    };
    pub use crate::customize::{CustomizeFn, CustomizeResult};
    pub use crate::error::{BoxError, MasonryError};
    pub use crate::model::{Dimension, Extras, LayoutStats, Point, Rectangle, Size};
    pub use crate::placer::{Placer, columns::ColumnPacker, grid::GridPlacer};
    pub use crate::{generate_rectangles, layout_sizes, scaler};
}
