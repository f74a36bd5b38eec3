use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use relist_core::{ListError, Size, Vec2};
use relist_ui::{Cell, Content, Prototype, RecyclingList};

/// A cell that shows one line of text.
#[derive(Debug, Default)]
pub struct TextCell {
    pub name: String,
    pub parent: Option<String>,
    pub active: bool,
    pub position: Vec2,
    pub scale: Vec2,
    pub text: String,
}

impl Cell for TextCell {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
    fn attach_to(&mut self, content: &Content) {
        self.parent = Some(content.name().to_string());
    }
    fn set_local_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }
    fn set_local_position(&mut self, position: Vec2) {
        self.position = position;
    }
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

pub struct TextPrototype {
    name: String,
    size: Size,
}

impl TextPrototype {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl Prototype for TextPrototype {
    type Cell = TextCell;

    fn name(&self) -> &str {
        &self.name
    }
    fn size(&self) -> Size {
        self.size
    }
    fn instantiate(&self) -> TextCell {
        TextCell::default()
    }
}

/// Per-index presenter: holds the data while its cell is on screen.
#[derive(Debug, Default)]
pub struct TextItem {
    data: Option<String>,
}

impl TextItem {
    pub fn on_enabled(&mut self, data: String) {
        self.data = Some(data);
    }

    pub fn on_disabled(&mut self) {
        self.data = None;
    }

    pub fn refresh(&self, cell: &mut TextCell) {
        cell.text = self.data.clone().unwrap_or_default();
    }
}

/// Wires list callbacks to sample data (`"test{index}"`).
#[derive(Clone, Default)]
pub struct TextView {
    items: Rc<RefCell<HashMap<usize, TextItem>>>,
}

impl TextView {
    pub fn attach(&self, list: &RecyclingList<TextPrototype>) -> Result<(), ListError> {
        let items = self.items.clone();
        list.register_on_item_enabled(move |cell, index| {
            let mut items = items.borrow_mut();
            let item = items.entry(index).or_default();
            item.on_enabled(format!("test{index}"));
            item.refresh(cell);
        })?;

        let items = self.items.clone();
        list.register_on_item_disabled(move |index| {
            if let Some(item) = items.borrow_mut().get_mut(&index) {
                item.on_disabled();
            }
        })?;
        Ok(())
    }

    /// Data currently on screen, ordered by index.
    pub fn bound(&self) -> Vec<String> {
        let items = self.items.borrow();
        let mut bound: Vec<(usize, &String)> = items
            .iter()
            .filter_map(|(i, item)| item.data.as_ref().map(|d| (*i, d)))
            .collect();
        bound.sort_by_key(|(i, _)| *i);
        bound.into_iter().map(|(_, d)| d.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relist_ui::{ListSettings, ScrollContainer};

    #[test]
    fn view_tracks_cells_on_screen() {
        let container = ScrollContainer::with_viewport(Size::new(100.0, 80.0));
        let list = RecyclingList::new(ListSettings::default())
            .with_prototype(TextPrototype::new("Row", Size::new(100.0, 40.0)));
        let view = TextView::default();
        view.attach(&list).unwrap();
        list.init(Some(container.clone())).unwrap();

        list.refresh(10).unwrap();
        assert_eq!(view.bound(), vec!["test0", "test1", "test2"]);

        container.set_offset(Vec2::new(0.0, 200.0));
        assert_eq!(view.bound(), vec!["test4", "test5", "test6", "test7"]);
    }
}
