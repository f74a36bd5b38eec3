//! Grid geometry: where each item sits inside the content node and how big
//! the content node has to be.
//!
//! Positions are the top-left pivot of each cell in content-local
//! coordinates. Content grows toward negative y, so every `y` is `<= 0`
//! when `offset_y >= 0`.

use relist_core::{ListError, Size, Vec2};

use crate::config::{Direction, LayoutConfig};

/// Rejects negative counts with a logged error.
pub fn checked_item_count(item_count: i64) -> Result<usize, ListError> {
    if item_count < 0 {
        log::error!("item count must not be negative (got {item_count})");
        return Err(ListError::NegativeItemCount(item_count));
    }
    usize::try_from(item_count).map_err(|_| ListError::NegativeItemCount(item_count))
}

/// Local position of `index`.
pub fn item_position(index: usize, config: &LayoutConfig) -> Vec2 {
    let k = config.row_or_col;
    let (along, across) = ((index / k) as f32, (index % k) as f32);
    let LayoutConfig {
        cell,
        spacing,
        offset,
        ..
    } = *config;

    let (x, y) = match config.direction {
        Direction::Vertical => (
            across * (cell.width + spacing.x) + offset.x,
            along * (cell.height + spacing.y) + offset.y,
        ),
        Direction::Horizontal => (
            along * (cell.width + spacing.x) + offset.x,
            across * (cell.height + spacing.y) + offset.y,
        ),
    };

    Vec2 { x, y: -y }
}

/// Positions for `[0, item_count)`, in index order.
pub fn compute_positions(item_count: i64, config: &LayoutConfig) -> Result<Vec<Vec2>, ListError> {
    let n = checked_item_count(item_count)?;
    Ok(positions(n, config))
}

pub(crate) fn positions(n: usize, config: &LayoutConfig) -> Vec<Vec2> {
    (0..n).map(|i| item_position(i, config)).collect()
}

/// Size of the scrollable content for `item_count` items.
pub fn compute_content_extent(item_count: i64, config: &LayoutConfig) -> Result<Size, ListError> {
    let n = checked_item_count(item_count)?;
    Ok(content_extent(n, config))
}

pub(crate) fn content_extent(n: usize, config: &LayoutConfig) -> Size {
    let k = config.row_or_col;
    // items per column (Vertical) or per row (Horizontal)
    let lines = n.div_ceil(k) as f32;
    let k = k as f32;
    let LayoutConfig {
        cell,
        spacing,
        offset,
        ..
    } = *config;

    match config.direction {
        Direction::Vertical => Size {
            width: cell.width * k + (k - 1.0) * spacing.x + offset.x,
            height: (spacing.y + cell.height) * lines + offset.y,
        },
        Direction::Horizontal => Size {
            width: (spacing.x + cell.width) * lines,
            height: cell.height * k + (k - 1.0) * spacing.y,
        },
    }
}
