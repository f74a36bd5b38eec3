use relist_core::Vec2;

use crate::cell::{Cell, Prototype};
use crate::scroll::Content;

/// LIFO store of released cells.
///
/// The most recently hidden cell is the first one handed back out, which is
/// the one most likely to scroll straight back in.
pub struct CellPool<C> {
    free: Vec<C>,
    created: usize,
}

impl<C> Default for CellPool<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CellPool<C> {
    pub fn new() -> Self {
        Self {
            free: Vec::new(),
            created: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Instances ever instantiated through this pool.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl<C: Cell> CellPool<C> {
    /// Pops the last released cell or instantiates a new one, then attaches it
    /// to `content`, resets its scale and activates it.
    pub fn acquire<P>(&mut self, prototype: &P, content: &Content) -> C
    where
        P: Prototype<Cell = C>,
    {
        let mut cell = match self.free.pop() {
            Some(cell) => cell,
            None => {
                self.created += 1;
                prototype.instantiate()
            }
        };
        cell.attach_to(content);
        cell.set_local_scale(Vec2::ONE);
        cell.set_active(true);
        cell
    }

    pub fn release(&mut self, mut cell: C) {
        cell.set_active(false);
        self.free.push(cell);
    }

    /// Destroys every pooled cell; returns how many were destroyed.
    pub fn destroy_all(&mut self) -> usize {
        let n = self.free.len();
        for cell in self.free.drain(..) {
            cell.destroy();
        }
        n
    }
}
