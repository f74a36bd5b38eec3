//! # Scroll host
//!
//! The list does not own scrolling. The host keeps a [`ScrollContainer`]
//! with three pieces:
//!
//! - `offset: Signal<Vec2>`: the content displacement relative to the
//!   viewport. Scrolling down moves content up (`y` grows positive);
//!   scrolling right moves content left (`x` grows negative).
//! - a [`Viewport`]: the fixed window the content is seen through.
//! - a [`Content`] node: parent of every cell; the list writes the content
//!   extent into it on each refresh.
//!
//! Hosts drive the offset (`set_offset`, `scroll_immediate`) from whatever
//! input they handle; every change is pushed to subscribers, which is how
//! the list re-runs its placement pass.

use relist_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Viewport {
    size: Signal<Size>,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self { size: signal(size) }
    }
    pub fn size(&self) -> Size {
        self.size.get()
    }
    /// Takes effect on the next placement pass.
    pub fn set_size(&self, size: Size) {
        self.size.set(Size {
            width: size.width.max(0.0),
            height: size.height.max(0.0),
        });
    }
}

#[derive(Clone)]
pub struct Content {
    name: Rc<str>,
    size: Signal<Size>,
}

impl Content {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            size: signal(Size::ZERO),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn size(&self) -> Size {
        self.size.get()
    }
    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }
}

pub struct ScrollContainer {
    offset: Signal<Vec2>,
    viewport: Option<Viewport>,
    content: RefCell<Option<Content>>,
}

impl ScrollContainer {
    pub fn new(viewport: Option<Viewport>, content: Option<Content>) -> Self {
        Self {
            offset: signal(Vec2::ZERO),
            viewport,
            content: RefCell::new(content),
        }
    }

    /// Container with a viewport of `size` and an empty content node.
    pub fn with_viewport(size: Size) -> Rc<Self> {
        Rc::new(Self::new(
            Some(Viewport::new(size)),
            Some(Content::new("Content")),
        ))
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn content(&self) -> Option<Content> {
        self.content.borrow().clone()
    }

    /// Returns the content node, creating an empty one if the host never
    /// supplied it. The bool is true when the node was created.
    pub fn ensure_content(&self) -> (Content, bool) {
        let mut slot = self.content.borrow_mut();
        match slot.as_ref() {
            Some(content) => (content.clone(), false),
            None => {
                let content = Content::new("Content");
                *slot = Some(content.clone());
                (content, true)
            }
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.get()
    }

    /// Sets the offset as-is and notifies subscribers. Must not be called from
    /// inside a list callback.
    pub fn set_offset(&self, offset: Vec2) {
        self.offset.set(offset);
    }

    /// Consume `delta` (content displacement), clamped to the scrollable range.
    /// Returns the leftover that could not be applied.
    pub fn scroll_immediate(&self, delta: Vec2) -> Vec2 {
        let before = self.offset.get();
        let (max_x, max_y) = self.max_scroll();

        let after = Vec2 {
            x: (before.x + delta.x).clamp(-max_x, 0.0),
            y: (before.y + delta.y).clamp(0.0, max_y),
        };
        if after != before {
            self.offset.set(after);
        }

        Vec2 {
            x: delta.x - (after.x - before.x),
            y: delta.y - (after.y - before.y),
        }
    }

    pub fn subscribe(&self, f: impl Fn(&Vec2) + 'static) -> Dispose {
        subscription(&self.offset, f)
    }

    pub fn subscriber_count(&self) -> usize {
        self.offset.subscriber_count()
    }

    fn max_scroll(&self) -> (f32, f32) {
        let vp = self.viewport.as_ref().map(Viewport::size).unwrap_or_default();
        let ch = self.content().map(|c| c.size()).unwrap_or_default();
        (
            (ch.width - vp.width).max(0.0),
            (ch.height - vp.height).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_immediate_clamps_and_returns_leftover() {
        let c = ScrollContainer::with_viewport(Size::new(100.0, 200.0));
        c.content().unwrap().set_size(Size::new(100.0, 500.0));

        let left = c.scroll_immediate(Vec2::new(0.0, 250.0));
        assert_eq!(c.offset(), Vec2::new(0.0, 250.0));
        assert_eq!(left, Vec2::ZERO);

        let left = c.scroll_immediate(Vec2::new(0.0, 100.0));
        assert_eq!(c.offset(), Vec2::new(0.0, 300.0));
        assert_eq!(left, Vec2::new(0.0, 50.0));

        let left = c.scroll_immediate(Vec2::new(0.0, -400.0));
        assert_eq!(c.offset(), Vec2::ZERO);
        assert_eq!(left, Vec2::new(0.0, -100.0));
    }

    #[test]
    fn horizontal_scroll_moves_content_left() {
        let c = ScrollContainer::with_viewport(Size::new(200.0, 100.0));
        c.content().unwrap().set_size(Size::new(600.0, 100.0));

        c.scroll_immediate(Vec2::new(-250.0, 0.0));
        assert_eq!(c.offset(), Vec2::new(-250.0, 0.0));

        let left = c.scroll_immediate(Vec2::new(-300.0, 0.0));
        assert_eq!(c.offset(), Vec2::new(-400.0, 0.0));
        assert_eq!(left, Vec2::new(-150.0, 0.0));
    }

    #[test]
    fn content_shrink_leaves_offset_alone() {
        let c = ScrollContainer::with_viewport(Size::new(100.0, 100.0));
        let content = c.content().unwrap();
        content.set_size(Size::new(100.0, 1000.0));
        c.set_offset(Vec2::new(0.0, 800.0));

        content.set_size(Size::new(100.0, 150.0));
        assert_eq!(c.offset(), Vec2::new(0.0, 800.0));
    }

    #[test]
    fn ensure_content_creates_once() {
        let c = ScrollContainer::new(Some(Viewport::new(Size::new(1.0, 1.0))), None);
        assert!(c.content().is_none());
        let (_, created) = c.ensure_content();
        assert!(created);
        let (content, created) = c.ensure_content();
        assert!(!created);
        assert_eq!(content.name(), "Content");
    }

    #[test]
    fn offset_changes_notify_subscribers() {
        let c = ScrollContainer::with_viewport(Size::new(10.0, 10.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = seen.clone();
        let guard = c.subscribe(move |o| seen2.borrow_mut().push(*o));

        c.set_offset(Vec2::new(0.0, 5.0));
        guard.run();
        c.set_offset(Vec2::new(0.0, 6.0));

        assert_eq!(*seen.borrow(), vec![Vec2::new(0.0, 5.0)]);
        assert_eq!(c.subscriber_count(), 0);
    }
}
