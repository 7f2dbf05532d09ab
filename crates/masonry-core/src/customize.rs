use tracing::trace;

use crate::config::ResolvedConfig;
use crate::error::{BoxError, MasonryError, Result};
use crate::model::Rectangle;

/// What a customize hook returns: `Some` replaces the rectangle, `None` keeps it.
pub type CustomizeResult<E> = std::result::Result<Option<Rectangle<E>>, BoxError>;

/// Per-item customize hook.
///
/// Arguments are the positioned rectangle, its index, every positioned rectangle
/// (before any customization) and the effective configuration of the call.
pub type CustomizeFn<E> =
    dyn Fn(&Rectangle<E>, usize, &[Rectangle<E>], &ResolvedConfig<'_, E>) -> CustomizeResult<E>;

/// Runs the hook of `config` over `rects` in input order.
///
/// The first hook error aborts the call and is returned as [`MasonryError::Customize`].
pub fn apply_customize<E>(
    rects: Vec<Rectangle<E>>,
    config: &ResolvedConfig<'_, E>,
) -> Result<Vec<Rectangle<E>>> {
    let Some(customize) = config.customize else {
        return Ok(rects);
    };

    let mut replacements = Vec::with_capacity(rects.len());
    for (index, rect) in rects.iter().enumerate() {
        let replacement = customize(rect, index, &rects, config).map_err(MasonryError::Customize)?;
        if replacement.is_some() {
            trace!(index, "rectangle replaced by customize hook");
        }
        replacements.push(replacement);
    }

    Ok(rects
        .into_iter()
        .zip(replacements)
        .map(|(rect, replacement)| replacement.unwrap_or(rect))
        .collect())
}
