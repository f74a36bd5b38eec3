//! # Recycling list
//!
//! [`RecyclingList`] keeps exactly the visible range of a grid populated with
//! cells, reusing hidden cells through a [`CellPool`] instead of creating one
//! per item.
//!
//! Each index is in one of three states: absent, visible (mapped to a live
//! cell), or recycled (its old cell sits in the pool). A placement pass runs
//! on every `refresh` and every scroll-offset change:
//!
//! - in view and unmapped: acquire a cell, place it, fire `on_item_enabled`.
//! - in view and mapped: re-place it (layout may have changed), no callback.
//! - out of view and mapped: fire `on_item_disabled`, release the cell.
//!
//! ```rust,ignore
//! let container = ScrollContainer::with_viewport(Size::new(320.0, 480.0));
//! let list = RecyclingList::new(ListSettings::vertical(2)).with_prototype(proto);
//! list.register_on_item_enabled(|cell, i| cell.bind(format!("row {i}")));
//! list.register_on_item_disabled(|i| log::debug!("row {i} hidden"));
//! list.init(Some(container.clone()))?;
//! list.refresh(1_000)?;
//! container.scroll_immediate(Vec2::new(0.0, 240.0)); // re-places cells
//! ```
//!
//! All work happens synchronously on the caller's thread. Callbacks must not
//! call back into the list; doing so is reported as [`ListError::Reentrant`].

use relist_core::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::cell::{Cell, Prototype};
use crate::config::{LayoutConfig, ListSettings};
use crate::layout;
use crate::pool::CellPool;
use crate::scroll::{Content, ScrollContainer, Viewport};
use crate::visibility::is_visible;

type OnEnabled<C> = Box<dyn FnMut(&mut C, usize)>;
type OnDisabled = Box<dyn FnMut(usize)>;
type OnScroll = Rc<dyn Fn(Vec2)>;

/// Read-only view of the list state, for tooling and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSnapshot {
    /// Visible indices with their local positions, ascending.
    pub visible: Vec<(usize, Vec2)>,
    pub pooled: usize,
    pub created: usize,
    pub content_extent: Size,
    pub cached_item_count: Option<usize>,
    pub cell: Size,
}

impl ListSnapshot {
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible.iter().map(|(i, _)| *i).collect()
    }

    /// Cell bounds of each visible item in content coordinates (y down).
    pub fn cell_rects(&self) -> Vec<(usize, Rect)> {
        self.visible
            .iter()
            .map(|(i, p)| (*i, Rect::from_top_left(*p, self.cell)))
            .collect()
    }
}

pub struct RecyclingList<P: Prototype> {
    inner: Rc<RefCell<ListInner<P>>>,
}

struct Binding {
    container: Rc<ScrollContainer>,
    viewport: Viewport,
    content: Content,
    subscriptions: Vec<Dispose>,
}

impl Binding {
    fn unsubscribe(&mut self) {
        for d in self.subscriptions.drain(..) {
            d.run();
        }
    }
}

struct ListInner<P: Prototype> {
    settings: ListSettings,
    prototype: Option<P>,
    binding: Option<Binding>,
    layout: Option<LayoutConfig>,
    positions: Vec<Vec2>,
    visible: BTreeMap<usize, P::Cell>,
    pool: CellPool<P::Cell>,
    cached_item_count: Option<usize>,
    on_enabled: Option<OnEnabled<P::Cell>>,
    on_disabled: Option<OnDisabled>,
    scroll_listeners: Vec<OnScroll>,
    disposed: bool,
}

impl<P: Prototype + 'static> RecyclingList<P> {
    pub fn new(settings: ListSettings) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListInner {
                settings,
                prototype: None,
                binding: None,
                layout: None,
                positions: Vec::new(),
                visible: BTreeMap::new(),
                pool: CellPool::new(),
                cached_item_count: None,
                on_enabled: None,
                on_disabled: None,
                scroll_listeners: Vec::new(),
                disposed: false,
            })),
        }
    }

    pub fn with_prototype(self, prototype: P) -> Self {
        self.inner.borrow_mut().prototype = Some(prototype);
        self
    }

    /// Replaces the prototype. Existing cells keep their old template until
    /// they are destroyed; call `clear_items` first to rebuild from scratch.
    pub fn set_prototype(&self, prototype: P) -> Result<(), ListError> {
        self.live_mut()?.prototype = Some(prototype);
        Ok(())
    }

    pub fn settings(&self) -> Result<ListSettings, ListError> {
        Ok(self.live()?.settings.clone())
    }

    /// Stores new settings; they apply on the next `refresh` or
    /// `on_config_changed`.
    pub fn set_settings(&self, settings: ListSettings) -> Result<(), ListError> {
        self.live_mut()?.settings = settings;
        Ok(())
    }

    /// Binds to the host's scroll container and starts listening for offset
    /// changes.
    pub fn init(&self, container: Option<Rc<ScrollContainer>>) -> Result<(), ListError> {
        let mut inner = self.live_mut()?;

        let cell = match inner.prototype.as_ref() {
            Some(p) => p.size(),
            None => return Err(report(ListError::MissingPrototype)),
        };
        let Some(container) = container else {
            return Err(report(ListError::MissingScrollContainer));
        };
        let Some(viewport) = container.viewport().cloned() else {
            return Err(report(ListError::MissingViewport));
        };
        LayoutConfig::new(&inner.settings, cell).map_err(report)?;

        let (content, created) = container.ensure_content();
        if created {
            log::warn!("scroll container had no content node; created '{}'", content.name());
        }

        if let Some(mut old) = inner.binding.take() {
            log::warn!("list re-initialized; dropping previous scroll container");
            old.unsubscribe();
        }

        let mut subscriptions = vec![container.subscribe(placement_listener(&self.inner))];
        for listener in &inner.scroll_listeners {
            subscriptions.push(forward(&container, listener.clone()));
        }

        inner.binding = Some(Binding {
            container,
            viewport,
            content,
            subscriptions,
        });
        log::debug!("list initialized (cell {}x{})", cell.width, cell.height);
        Ok(())
    }

    /// Lays out `item_count` items and places the visible ones.
    ///
    /// Everything is validated before any state changes; on error the previous
    /// layout stays in place.
    pub fn refresh(&self, item_count: i64) -> Result<(), ListError> {
        self.live_mut()?.refresh(item_count)
    }

    /// Re-applies the current settings at the last refreshed item count.
    /// Does nothing before the first refresh.
    pub fn on_config_changed(&self) -> Result<(), ListError> {
        let mut inner = self.live_mut()?;
        match inner.cached_item_count {
            Some(n) => inner.refresh(n as i64),
            None => Ok(()),
        }
    }

    /// Destroys every cell (visible and pooled) and forgets the layout.
    /// Every visible index gets `on_item_disabled` before its cell is
    /// destroyed, so hosts that unbind there need no separate cleanup.
    pub fn clear_items(&self) -> Result<(), ListError> {
        let mut inner = self.live_mut()?;
        let destroyed = inner.destroy_cells();
        inner.positions.clear();
        inner.cached_item_count = None;
        log::debug!("cleared {destroyed} cells");
        Ok(())
    }

    /// Sets the enabled callback; returns true if one was replaced.
    pub fn register_on_item_enabled(
        &self,
        f: impl FnMut(&mut P::Cell, usize) + 'static,
    ) -> Result<bool, ListError> {
        Ok(self.live_mut()?.on_enabled.replace(Box::new(f)).is_some())
    }

    /// Sets the disabled callback; returns true if one was replaced.
    pub fn register_on_item_disabled(
        &self,
        f: impl FnMut(usize) + 'static,
    ) -> Result<bool, ListError> {
        Ok(self.live_mut()?.on_disabled.replace(Box::new(f)).is_some())
    }

    /// Adds a listener on the scroll-offset stream. Listeners registered
    /// before `init` are attached when the list binds.
    pub fn register_on_scroll_offset_changed(
        &self,
        f: impl Fn(Vec2) + 'static,
    ) -> Result<(), ListError> {
        let mut inner = self.live_mut()?;
        let listener: OnScroll = Rc::new(f);
        inner.scroll_listeners.push(listener.clone());
        if let Some(binding) = inner.binding.as_mut() {
            let d = forward(&binding.container, listener);
            binding.subscriptions.push(d);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Result<ListSnapshot, ListError> {
        let inner = self.inner.try_borrow().map_err(|_| report(ListError::Reentrant))?;
        if inner.disposed {
            return Err(ListError::Disposed);
        }
        Ok(ListSnapshot {
            visible: inner
                .visible
                .keys()
                .map(|&i| (i, inner.positions.get(i).copied().unwrap_or_default()))
                .collect(),
            pooled: inner.pool.len(),
            created: inner.pool.created(),
            content_extent: inner
                .binding
                .as_ref()
                .map(|b| b.content.size())
                .unwrap_or_default(),
            cached_item_count: inner.cached_item_count,
            cell: inner.layout.map(|l| l.cell).unwrap_or_default(),
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.try_borrow().map(|i| i.disposed).unwrap_or(false)
    }

    /// Unsubscribes from the scroll container, then destroys every cell and
    /// drops all callbacks. Calling it again is a logged no-op.
    pub fn dispose(&self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            report(ListError::Reentrant);
            return;
        };
        if inner.disposed {
            log::warn!("list already disposed");
            return;
        }
        if let Some(binding) = inner.binding.as_mut() {
            binding.unsubscribe();
        }
        inner.destroy_cells();
        inner.binding = None;
        inner.prototype = None;
        inner.on_enabled = None;
        inner.on_disabled = None;
        inner.scroll_listeners.clear();
        inner.positions = Vec::new();
        inner.layout = None;
        inner.cached_item_count = None;
        inner.disposed = true;
    }

    fn live(&self) -> Result<std::cell::Ref<'_, ListInner<P>>, ListError> {
        let inner = self.inner.try_borrow().map_err(|_| report(ListError::Reentrant))?;
        if inner.disposed {
            return Err(ListError::Disposed);
        }
        Ok(inner)
    }

    fn live_mut(&self) -> Result<std::cell::RefMut<'_, ListInner<P>>, ListError> {
        let inner = self
            .inner
            .try_borrow_mut()
            .map_err(|_| report(ListError::Reentrant))?;
        if inner.disposed {
            return Err(ListError::Disposed);
        }
        Ok(inner)
    }
}

impl<P: Prototype> ListInner<P> {
    fn refresh(&mut self, item_count: i64) -> Result<(), ListError> {
        let Some(binding) = self.binding.as_ref() else {
            return Err(report(ListError::NotInitialized));
        };
        let n = layout::checked_item_count(item_count)?;
        let cell = match self.prototype.as_ref() {
            Some(p) => p.size(),
            None => return Err(report(ListError::MissingPrototype)),
        };
        let config = LayoutConfig::new(&self.settings, cell).map_err(report)?;
        let scroll_offset = binding.container.offset();
        let content = binding.content.clone();

        // indices past the new end no longer exist
        if let Some(cached) = self.cached_item_count.filter(|&cached| n < cached) {
            for i in n..cached {
                recycle(&mut self.visible, &mut self.pool, &mut self.on_disabled, i);
            }
        }

        content.set_size(layout::content_extent(n, &config));
        self.layout = Some(config);
        self.positions = layout::positions(n, &config);
        self.place_items(scroll_offset);
        self.cached_item_count = Some(n);

        log::debug!(
            "refreshed {n} items: {} visible, {} pooled",
            self.visible.len(),
            self.pool.len()
        );
        Ok(())
    }

    fn place_items(&mut self, scroll_offset: Vec2) {
        let (Some(config), Some(binding), Some(prototype)) =
            (self.layout, self.binding.as_ref(), self.prototype.as_ref())
        else {
            return;
        };
        let viewport = binding.viewport.size();

        for (index, &position) in self.positions.iter().enumerate() {
            if !is_visible(
                position,
                scroll_offset,
                viewport,
                config.cell,
                config.direction,
            ) {
                recycle(&mut self.visible, &mut self.pool, &mut self.on_disabled, index);
                continue;
            }

            if let Some(cell) = self.visible.get_mut(&index) {
                cell.set_local_position(position);
                continue;
            }

            let mut cell = self.pool.acquire(prototype, &binding.content);
            cell.set_local_position(position);
            cell.set_name(&format!("{}{}", prototype.name(), index + 1));
            let cell = self.visible.entry(index).or_insert(cell);

            match self.on_enabled.as_mut() {
                Some(on_enabled) => on_enabled(cell, index),
                None => log::warn!("item {index} enabled with no on_item_enabled callback"),
            }
        }
    }

    /// Disables every visible item, then destroys all cells.
    fn destroy_cells(&mut self) -> usize {
        let mut destroyed = 0;
        for (index, cell) in std::mem::take(&mut self.visible) {
            if let Some(on_disabled) = self.on_disabled.as_mut() {
                on_disabled(index);
            }
            cell.destroy();
            destroyed += 1;
        }
        destroyed + self.pool.destroy_all()
    }
}

impl<P: Prototype> Drop for ListInner<P> {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.unsubscribe();
        }
        let destroyed = self.destroy_cells();
        if destroyed > 0 {
            log::debug!("list dropped; destroyed {destroyed} cells");
        }
    }
}

/// Moves a mapped cell back to the pool. No-op for unmapped indices.
fn recycle<C: Cell>(
    visible: &mut BTreeMap<usize, C>,
    pool: &mut CellPool<C>,
    on_disabled: &mut Option<OnDisabled>,
    index: usize,
) {
    let Some(cell) = visible.remove(&index) else {
        return;
    };
    if let Some(on_disabled) = on_disabled.as_mut() {
        on_disabled(index);
    }
    pool.release(cell);
}

fn placement_listener<P: Prototype + 'static>(
    inner: &Rc<RefCell<ListInner<P>>>,
) -> impl Fn(&Vec2) + 'static {
    let weak: Weak<RefCell<ListInner<P>>> = Rc::downgrade(inner);
    move |offset: &Vec2| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        match inner.try_borrow_mut() {
            Ok(mut inner) => inner.place_items(*offset),
            Err(_) => {
                report(ListError::Reentrant);
            }
        }
    }
}

fn forward(container: &ScrollContainer, listener: OnScroll) -> Dispose {
    container.subscribe(move |offset| listener(*offset))
}

fn report(err: ListError) -> ListError {
    if err.is_config() {
        log::error!("{err}");
    } else {
        log::warn!("{err}");
    }
    err
}
