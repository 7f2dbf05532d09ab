use serde::{Deserialize, Serialize};
use std::fmt;

use crate::customize::{CustomizeFn, CustomizeResult};
use crate::error::{MasonryError, Result};
use crate::model::{Dimension, Extras, Rectangle};

/// Placement strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Strict row-major grid; each row is as tall as its tallest item.
    Grid,
    /// Masonry packing: each item drops into the currently shortest column.
    Packed,
}

/// Caller-facing layout options. Unset fields fall back to the defaults applied by [`LayoutOptions::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Number of columns (required, at least 1).
    pub columns: u32,
    /// Total container width.
    pub width: f64,
    /// Spacing used for both axes unless `gutter_x`/`gutter_y` override it. Defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_y: Option<f64>,
    /// Upper bound on scaled item height. Items are shrunk (aspect kept) to respect it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    /// Use masonry packing instead of a strict grid. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsing: Option<bool>,
    /// Center an incomplete trailing row. Defaults to false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centering: Option<bool>,
}

/// Options with every default applied and the column width derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub columns: u32,
    pub width: f64,
    pub gutter: f64,
    pub gutter_x: f64,
    pub gutter_y: f64,
    pub max_height: Option<f64>,
    pub collapsing: bool,
    pub centering: bool,
    /// `(width - gutter_x * (columns - 1)) / columns`
    pub column_width: f64,
}

impl ResolvedOptions {
    pub fn mode(&self) -> PlacementMode {
        if self.collapsing {
            PlacementMode::Packed
        } else {
            PlacementMode::Grid
        }
    }

    /// Re-checks the geometry invariants established by [`LayoutOptions::resolve`].
    ///
    /// Options built by hand or deserialized skip `resolve`, so placement checks them again.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(MasonryError::InvalidColumns {
                columns: self.columns,
            });
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MasonryError::InvalidWidth { width: self.width });
        }
        for (name, value) in [("gutter_x", self.gutter_x), ("gutter_y", self.gutter_y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MasonryError::InvalidConfig(format!(
                    "{name} ({value}) must be finite and non-negative"
                )));
            }
        }
        if !self.column_width.is_finite() || self.column_width <= 0.0 {
            return Err(MasonryError::NonPositiveColumnWidth {
                column_width: self.column_width,
            });
        }
        Ok(())
    }

    /// Horizontal position of the left edge of column `col`.
    pub fn column_x(&self, col: usize) -> f64 {
        col as f64 * (self.column_width + self.gutter_x)
    }
}

impl LayoutOptions {
    pub fn new(columns: u32, width: f64) -> Self {
        Self {
            columns,
            width,
            gutter: None,
            gutter_x: None,
            gutter_y: None,
            max_height: None,
            collapsing: None,
            centering: None,
        }
    }

    /// Create a fluent builder for `LayoutOptions`.
    pub fn builder(columns: u32, width: f64) -> LayoutOptionsBuilder {
        LayoutOptionsBuilder::new(columns, width)
    }

    /// Applies defaults, derives the column width and validates the result.
    ///
    /// Returns an error if:
    /// - `columns` is zero
    /// - `width` is not finite and positive
    /// - a gutter is negative or `max_height` is not positive
    /// - the gutters leave no positive width for a column
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        if self.columns == 0 {
            return Err(MasonryError::InvalidColumns {
                columns: self.columns,
            });
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MasonryError::InvalidWidth { width: self.width });
        }

        let gutter = self.gutter.unwrap_or(0.0);
        let gutter_x = self.gutter_x.unwrap_or(gutter);
        let gutter_y = self.gutter_y.unwrap_or(gutter);
        for (name, value) in [("gutter", gutter), ("gutter_x", gutter_x), ("gutter_y", gutter_y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MasonryError::InvalidConfig(format!(
                    "{name} ({value}) must be finite and non-negative"
                )));
            }
        }
        if let Some(max_height) = self.max_height {
            if !max_height.is_finite() || max_height <= 0.0 {
                return Err(MasonryError::InvalidConfig(format!(
                    "max_height ({max_height}) must be finite and positive"
                )));
            }
        }

        let columns = self.columns as f64;
        let column_width = (self.width - gutter_x * (columns - 1.0)) / columns;
        if column_width <= 0.0 {
            return Err(MasonryError::NonPositiveColumnWidth { column_width });
        }

        Ok(ResolvedOptions {
            columns: self.columns,
            width: self.width,
            gutter,
            gutter_x,
            gutter_y,
            max_height: self.max_height,
            collapsing: self.collapsing.unwrap_or(true),
            centering: self.centering.unwrap_or(false),
            column_width,
        })
    }
}

/// Builder for `LayoutOptions` for ergonomic construction.
#[derive(Debug, Clone)]
pub struct LayoutOptionsBuilder {
    opts: LayoutOptions,
}

impl LayoutOptionsBuilder {
    pub fn new(columns: u32, width: f64) -> Self {
        Self {
            opts: LayoutOptions::new(columns, width),
        }
    }
    pub fn gutter(mut self, v: f64) -> Self {
        self.opts.gutter = Some(v);
        self
    }
    pub fn gutter_x(mut self, v: f64) -> Self {
        self.opts.gutter_x = Some(v);
        self
    }
    pub fn gutter_y(mut self, v: f64) -> Self {
        self.opts.gutter_y = Some(v);
        self
    }
    pub fn max_height(mut self, v: f64) -> Self {
        self.opts.max_height = Some(v);
        self
    }
    pub fn collapsing(mut self, v: bool) -> Self {
        self.opts.collapsing = Some(v);
        self
    }
    pub fn centering(mut self, v: bool) -> Self {
        self.opts.centering = Some(v);
        self
    }
    pub fn build(self) -> LayoutOptions {
        self.opts
    }
}

/// Everything one layout call needs: the items, the options and an optional customize hook.
pub struct MasonryConfig<E = Extras> {
    pub dimensions: Vec<Dimension<E>>,
    pub options: LayoutOptions,
    pub customize: Option<Box<CustomizeFn<E>>>,
}

impl<E> MasonryConfig<E> {
    pub fn new(dimensions: Vec<Dimension<E>>, options: LayoutOptions) -> Self {
        Self {
            dimensions,
            options,
            customize: None,
        }
    }

    /// Installs a hook that may replace each rectangle before it is returned.
    pub fn with_customize<F>(mut self, f: F) -> Self
    where
        F: Fn(&Rectangle<E>, usize, &[Rectangle<E>], &ResolvedConfig<'_, E>) -> CustomizeResult<E>
            + 'static,
    {
        self.customize = Some(Box::new(f));
        self
    }

    /// Resolves the options and checks every dimension.
    ///
    /// Configuration errors are reported first; otherwise the first item with a
    /// non-positive (or non-finite) side fails the whole call.
    pub fn resolve(&self) -> Result<ResolvedConfig<'_, E>> {
        let options = self.options.resolve()?;
        validate_dimensions(&self.dimensions)?;
        Ok(ResolvedConfig {
            dimensions: &self.dimensions,
            options,
            customize: self.customize.as_deref(),
        })
    }
}

impl<E: fmt::Debug> fmt::Debug for MasonryConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasonryConfig")
            .field("dimensions", &self.dimensions)
            .field("options", &self.options)
            .field("customize", &self.customize.is_some())
            .finish()
    }
}

/// The effective configuration of a layout call, handed to the customize hook.
pub struct ResolvedConfig<'a, E = Extras> {
    pub dimensions: &'a [Dimension<E>],
    pub options: ResolvedOptions,
    pub customize: Option<&'a CustomizeFn<E>>,
}

impl<E> ResolvedConfig<'_, E> {
    pub fn has_customize(&self) -> bool {
        self.customize.is_some()
    }
}

impl<E: fmt::Debug> fmt::Debug for ResolvedConfig<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("dimensions", &self.dimensions)
            .field("options", &self.options)
            .field("customize", &self.customize.is_some())
            .finish()
    }
}

fn validate_dimensions<E>(dimensions: &[Dimension<E>]) -> Result<()> {
    match dimensions.iter().position(|d| !d.is_valid()) {
        Some(index) => {
            let d = &dimensions[index];
            Err(MasonryError::InvalidDimension {
                index,
                width: d.width,
                height: d.height,
            })
        }
        None => Ok(()),
    }
}
