//! Seeded palette selection
//!
//! Each generation run draws one background color from the catalogue, then
//! samples the requested number of drawing colors without replacement from
//! the remainder, so the background never appears in the drawn shapes.

use crate::io::error::{Result, invalid_parameter};
use crate::render::canvas::Color;
use rand::Rng;
use rand::seq::{IndexedRandom, index};

/// Background and drawing colors computed once per generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePalette {
    /// Color the canvas is filled with before any shapes are drawn
    pub background: Color,
    /// Colors available to the placement engine, disjoint from the background
    pub draw_colors: Vec<Color>,
}

impl ActivePalette {
    /// Draw a uniform random color from the drawing set
    pub fn pick_draw_color<R: Rng>(&self, rng: &mut R) -> Color {
        self.draw_colors
            .choose(rng)
            .copied()
            .unwrap_or(self.background)
    }
}

/// Select a background and `count` disjoint drawing colors from the catalogue
///
/// Consumes exactly one background draw followed by one sample of `count`
/// indices from the shared random source, in that order.
///
/// # Errors
///
/// Returns `InvalidParameter` if `count` is zero, or if `count` is not
/// strictly smaller than the catalogue (the background must be removable
/// while leaving enough colors to sample).
pub fn select_palette<R: Rng>(
    catalogue: &[Color],
    count: usize,
    rng: &mut R,
) -> Result<ActivePalette> {
    if count < 1 {
        return Err(invalid_parameter(
            "color_count",
            &count,
            &"must be at least 1",
        ));
    }
    if count >= catalogue.len() {
        return Err(invalid_parameter(
            "color_count",
            &count,
            &format!(
                "must be less than the catalogue size ({})",
                catalogue.len()
            ),
        ));
    }

    let background = catalogue.choose(rng).copied().ok_or_else(|| {
        invalid_parameter("catalogue", &catalogue.len(), &"catalogue is empty")
    })?;

    let remainder: Vec<Color> = catalogue
        .iter()
        .copied()
        .filter(|color| *color != background)
        .collect();

    // A catalogue of repeated colors can shrink past the requested count
    if count > remainder.len() {
        return Err(invalid_parameter(
            "color_count",
            &count,
            &format!(
                "only {} distinct colors remain after removing the background",
                remainder.len()
            ),
        ));
    }

    let draw_colors: Vec<Color> = index::sample(rng, remainder.len(), count)
        .iter()
        .filter_map(|i| remainder.get(i).copied())
        .collect();

    Ok(ActivePalette {
        background,
        draw_colors,
    })
}
