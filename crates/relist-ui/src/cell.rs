use relist_core::{Size, Vec2};

use crate::scroll::Content;

/// A visual instance the host renders for one item. The list moves cells
/// between the visible mapping and the pool; it never inspects them.
pub trait Cell: Sized {
    fn set_active(&mut self, active: bool);
    /// Reparent under the content node.
    fn attach_to(&mut self, content: &Content);
    fn set_local_scale(&mut self, scale: Vec2);
    fn set_local_position(&mut self, position: Vec2);
    fn set_name(&mut self, name: &str);
    /// Final teardown. Destroyed cells are never pooled again.
    fn destroy(self) {}
}

/// The fixed-size template every cell is created from.
pub trait Prototype {
    type Cell: Cell;

    fn name(&self) -> &str;
    /// Fixed for the lifetime of the list.
    fn size(&self) -> Size;
    fn instantiate(&self) -> Self::Cell;
}
