use relist_core::{Size, Vec2};

use crate::config::Direction;

/// Whether a cell at `position` overlaps the viewport after scrolling by
/// `scroll_offset`.
///
/// The near edge (top / left) allows one full cell of slack and the far edge
/// (bottom / right) the viewport extent, so the next row or column is already
/// placed before it scrolls in.
pub fn is_visible(
    position: Vec2,
    scroll_offset: Vec2,
    viewport: Size,
    cell: Size,
    direction: Direction,
) -> bool {
    match direction {
        Direction::Vertical => {
            let y = position.y + scroll_offset.y;
            // past top / past bottom
            !(y > cell.height || y < -viewport.height)
        }
        Direction::Horizontal => {
            let x = position.x + scroll_offset.x;
            // past left / past right
            !(x < -cell.width || x > viewport.width)
        }
    }
}
