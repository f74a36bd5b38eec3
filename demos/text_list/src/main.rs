mod item;

use anyhow::Context;
use relist_core::{Size, Vec2};
use relist_devtools::Inspector;
use relist_ui::{Direction, ListSettings, RecyclingList, ScrollContainer};

use crate::item::{TextPrototype, TextView};

fn load_settings(path: &str) -> anyhow::Result<ListSettings> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing list settings in {path}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting recycling list demo");

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings(&path)?,
        None => ListSettings::default().spacing(0.0, 4.0),
    };
    let step = match settings.direction {
        Direction::Vertical => Vec2::new(0.0, 120.0),
        Direction::Horizontal => Vec2::new(-120.0, 0.0),
    };

    let container = ScrollContainer::with_viewport(Size::new(320.0, 240.0));
    let list = RecyclingList::new(settings)
        .with_prototype(TextPrototype::new("Item", Size::new(300.0, 40.0)));
    let view = TextView::default();
    view.attach(&list)?;
    list.register_on_scroll_offset_changed(|o| log::debug!("offset -> {},{}", o.x, o.y))?;
    list.init(Some(container.clone()))?;

    list.refresh(50)?;
    log::info!("on screen: {:?}", view.bound());

    for _ in 0..6 {
        let leftover = container.scroll_immediate(step);
        log::info!("on screen: {:?}", view.bound());
        if leftover != Vec2::ZERO {
            log::info!("reached the end of the list");
            break;
        }
    }

    // shrink while scrolled: offset stays, removed rows are recycled
    list.refresh(10)?;
    log::info!("after shrink to 10: {:?}", view.bound());

    let mut inspector = Inspector::new();
    inspector.hud.toggle_inspector();
    inspector.try_draw_item_num = 50;
    container.set_offset(Vec2::ZERO);
    inspector.redraw(&list)?;
    for line in inspector.frame() {
        log::info!("{line}");
    }

    list.dispose();
    Ok(())
}
