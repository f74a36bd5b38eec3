use web_time::Instant;

use relist_core::{ListError, Rect, Vec2};
use relist_ui::{ListSnapshot, Prototype, RecyclingList};

/// Metrics HUD for a recycling list.
pub struct Hud {
    pub inspector_enabled: bool,
    pub hovered: Option<(usize, Rect)>,
    redraw_count: u64,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            hovered: None,
            redraw_count: 0,
            metrics: None,
        }
    }
    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }

    pub fn record(&mut self, metrics: Metrics) {
        self.redraw_count += 1;
        self.metrics = Some(metrics);
    }

    /// Remembers which visible cell contains `point` (content coordinates,
    /// y down).
    pub fn set_hovered(&mut self, point: Option<Vec2>) {
        self.hovered = match (point, &self.metrics) {
            (Some(p), Some(m)) => m
                .snapshot
                .cell_rects()
                .into_iter()
                .find(|(_, r)| r.contains(p)),
            _ => None,
        };
    }

    pub fn overlay_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("redraws: {}", self.redraw_count)];
        if let Some(m) = &self.metrics {
            let s = &m.snapshot;
            let items = s
                .cached_item_count
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            lines.push(format!("refresh: {:.2} ms", m.refresh_ms));
            lines.push(format!("items: {items}"));
            lines.push(format!(
                "visible: {} ({})",
                s.visible.len(),
                visible_range(s)
            ));
            lines.push(format!("pooled: {}  created: {}", s.pooled, s.created));
            lines.push(format!(
                "content: {}x{}",
                s.content_extent.width, s.content_extent.height
            ));
        }
        if let Some((i, r)) = self.hovered {
            lines.push(format!("hovered: #{i} at {},{}", r.x, r.y));
        }
        lines
    }
}

fn visible_range(s: &ListSnapshot) -> String {
    match (s.visible.first(), s.visible.last()) {
        (Some((a, _)), Some((b, _))) => format!("{a}..={b}"),
        _ => "none".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    pub refresh_ms: f32,
    pub snapshot: ListSnapshot,
}

/// Preview tooling: redraw a list with a trial item count or clear it, and
/// keep the HUD in sync.
pub struct Inspector {
    pub try_draw_item_num: i64,
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            try_draw_item_num: 0,
            hud: Hud::new(),
        }
    }

    /// Clears the list and lays it out again with `try_draw_item_num` items.
    pub fn redraw<P: Prototype + 'static>(
        &mut self,
        list: &RecyclingList<P>,
    ) -> Result<(), ListError> {
        let start = Instant::now();
        list.clear_items()?;
        list.refresh(self.try_draw_item_num)?;
        let refresh_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.hud.record(Metrics {
            refresh_ms,
            snapshot: list.snapshot()?,
        });
        log::debug!(
            "preview redraw: {} items in {refresh_ms:.2} ms",
            self.try_draw_item_num
        );
        Ok(())
    }

    pub fn clear<P: Prototype + 'static>(
        &mut self,
        list: &RecyclingList<P>,
    ) -> Result<(), ListError> {
        list.clear_items()?;
        self.try_draw_item_num = 0;
        self.hud.record(Metrics {
            refresh_ms: 0.0,
            snapshot: list.snapshot()?,
        });
        Ok(())
    }

    pub fn frame(&self) -> Vec<String> {
        if self.hud.inspector_enabled {
            self.hud.overlay_lines()
        } else {
            Vec::new()
        }
    }
}
