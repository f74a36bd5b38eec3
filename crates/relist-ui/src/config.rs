use relist_core::{ListError, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Fill order of the grid.
///
/// `Vertical` scrolls along y: `row_or_col` columns across, rows wrapping
/// downward. `Horizontal` scrolls along x: `row_or_col` rows down, columns
/// wrapping to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

/// Host-editable list configuration. Validated into a [`LayoutConfig`] at
/// init/refresh time, never mid-refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub direction: Direction,
    /// Columns for `Vertical`, rows for `Horizontal`.
    pub row_or_col: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            spacing_x: 0.0,
            spacing_y: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            direction: Direction::Vertical,
            row_or_col: 1,
        }
    }
}

impl ListSettings {
    pub fn vertical(columns: usize) -> Self {
        Self {
            direction: Direction::Vertical,
            row_or_col: columns,
            ..Self::default()
        }
    }

    pub fn horizontal(rows: usize) -> Self {
        Self {
            direction: Direction::Horizontal,
            row_or_col: rows,
            ..Self::default()
        }
    }

    pub fn spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing_x = x;
        self.spacing_y = y;
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }
}

/// Validated layout inputs for one refresh cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub direction: Direction,
    pub row_or_col: usize,
    pub cell: Size,
    pub spacing: Vec2,
    pub offset: Vec2,
}

impl LayoutConfig {
    /// `cell` is the prototype's size.
    pub fn new(settings: &ListSettings, cell: Size) -> Result<Self, ListError> {
        if settings.row_or_col == 0 {
            return Err(ListError::InvalidRowOrCol(settings.row_or_col));
        }
        if !cell.is_positive() {
            return Err(ListError::InvalidCellSize {
                width: cell.width,
                height: cell.height,
            });
        }
        Ok(Self {
            direction: settings.direction,
            row_or_col: settings.row_or_col,
            cell,
            spacing: Vec2::new(settings.spacing_x, settings.spacing_y),
            offset: Vec2::new(settings.offset_x, settings.offset_y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_single_column_vertical() {
        let s = ListSettings::default();
        assert_eq!(s.direction, Direction::Vertical);
        assert_eq!(s.row_or_col, 1);
    }

    #[test]
    fn zero_row_or_col_is_rejected() {
        let err = LayoutConfig::new(&ListSettings::vertical(0), Size::new(10.0, 10.0));
        assert_eq!(err, Err(ListError::InvalidRowOrCol(0)));
    }

    #[test]
    fn empty_cell_is_rejected() {
        let err = LayoutConfig::new(&ListSettings::default(), Size::new(10.0, 0.0));
        assert!(matches!(err, Err(ListError::InvalidCellSize { .. })));
    }

    #[test]
    fn settings_parse_from_partial_json() {
        let s: ListSettings =
            serde_json::from_str(r#"{ "direction": "horizontal", "row_or_col": 2, "spacing_x": 4 }"#)
                .unwrap();
        assert_eq!(s.direction, Direction::Horizontal);
        assert_eq!(s.row_or_col, 2);
        assert_eq!(s.spacing_x, 4.0);
        assert_eq!(s.offset_y, 0.0);
    }

    #[test]
    fn unknown_direction_fails_to_parse() {
        let s: Result<ListSettings, _> = serde_json::from_str(r#"{ "direction": "diagonal" }"#);
        assert!(s.is_err());
    }
}
