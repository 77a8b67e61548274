//! Page space to grid space mapping
//!
//! Page space has its origin at the bottom-left corner, the output grid at
//! the top-left, so rows are flipped on the way.

use super::render::RenderConfig;
use super::PageLayout;
use tracing::warn;

// Placements far off the page are pinned one grid span beyond either edge
fn to_cell(scaled: f64, span: u32) -> i64 {
    let span = f64::from(span);
    scaled.clamp(-span, 2.0 * span).floor() as i64
}

/// Grid column for a page-space x.
pub fn grid_x(x0: f64, page_width: f64, grid_width: u32) -> i64 {
    to_cell(x0 / page_width * f64::from(grid_width), grid_width) + 1
}

/// Grid row for a page-space y.
pub fn grid_y(y0: f64, page_height: f64, grid_height: u32) -> i64 {
    to_cell(
        (page_height - y0) / page_height * f64::from(grid_height),
        grid_height,
    )
}

/// Maps a placement-driven page onto the grid and sorts it.
///
/// Byte-string pages already carry grid coordinates and are left alone.
pub fn transform_page(layout: &mut PageLayout, config: &RenderConfig) {
    if !layout.needs_transform() {
        return;
    }

    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(layout.page_width) || !usable(layout.page_height) {
        warn!(
            page = layout.number,
            "page size {}x{} cannot be mapped, keeping elements at origin",
            layout.page_width,
            layout.page_height
        );
    } else {
        let width = i64::from(config.width);
        for element in &mut layout.elements {
            let mut x = grid_x(element.x0, layout.page_width, config.width);
            if config.fit {
                x = x.min(width.saturating_sub(element.len()));
            }
            element.x = x;
            element.y = grid_y(element.y0, layout.page_height, config.height);
        }
    }

    layout.sort();
}

/// Maps every page; see [`transform_page`].
pub fn transform_pages(layouts: &mut [PageLayout], config: &RenderConfig) {
    for layout in layouts {
        transform_page(layout, config);
    }
}
