//! Recycling list/grid layout: positions, visibility, cell pooling and the
//! controller that keeps the visible range populated while the host scrolls.

pub mod cell;
pub mod config;
pub mod layout;
pub mod list;
pub mod pool;
pub mod scroll;
pub mod visibility;


pub use cell::{Cell, Prototype};
pub use config::{Direction, LayoutConfig, ListSettings};
pub use layout::{compute_content_extent, compute_positions, item_position};
pub use list::{ListSnapshot, RecyclingList};
pub use pool::CellPool;
pub use scroll::{Content, ScrollContainer, Viewport};
pub use visibility::is_visible;
