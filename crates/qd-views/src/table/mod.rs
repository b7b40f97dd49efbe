//! Record table with selection highlighting

mod view;

pub use view::TableView;

use egui::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use qd_core::{toggle_target, PointSelectionStore, RecordId};
use qd_data::FieldValue;

/// Configuration for the table view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Show alternating row colors
    pub striped_rows: bool,

    /// Allow column resizing
    pub resizable_columns: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            striped_rows: true,
            resizable_columns: true,
        }
    }
}

/// Columns rendered as fixed two-decimal numbers
pub const NUMERIC_DISPLAY_COLUMNS: [&str; 4] = ["mag", "latitude", "longitude", "depth"];

/// Header text for a column
pub fn header_label(column: &str) -> &str {
    match column {
        "id" => "ID",
        "time" => "Time (UTC)",
        "latitude" => "Lat.",
        "longitude" => "Lon.",
        "mag" => "Mag.",
        "depth" => "Depth (km)",
        "place" => "Location Details",
        other => other,
    }
}

/// Display text for one cell
pub fn format_cell(column: &str, value: Option<FieldValue<'_>>) -> String {
    match value {
        None | Some(FieldValue::Missing) => String::new(),
        Some(FieldValue::Text(text)) => text.to_string(),
        Some(FieldValue::Number(number)) => {
            if NUMERIC_DISPLAY_COLUMNS.contains(&column) {
                format!("{:.2}", number)
            } else {
                number.to_string()
            }
        }
    }
}

/// Pointer target of one cell: the cell grown by half the item spacing on
/// every side, so the cells of a row tile it without gaps
pub fn cell_hit_rect(cell: Rect, item_spacing: Vec2) -> Rect {
    cell.expand2(item_spacing * 0.5)
}

/// Visual style of a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Selected,
    Default,
}

impl RowStyle {
    pub fn for_row(id: RecordId, selected: Option<RecordId>) -> Self {
        if selected == Some(id) {
            RowStyle::Selected
        } else {
            RowStyle::Default
        }
    }
}

/// Translates per-frame pointer state over the rows into selection changes.
///
/// Entering a row selects it, leaving it clears the selection, and a click
/// toggles after the hover update. Since the hover already selected the row,
/// a click on a freshly entered row clears it again.
#[derive(Debug, Default)]
pub struct RowInteraction {
    hovered: Option<RecordId>,
}

impl RowInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row currently under the pointer, as of the last update
    pub fn hovered(&self) -> Option<RecordId> {
        self.hovered
    }

    /// Apply one frame of pointer state
    pub fn update(&mut self, hovered: Option<RecordId>, clicked: Option<RecordId>, selection: &PointSelectionStore) {
        if hovered != self.hovered {
            if self.hovered.is_some() {
                selection.set_selected(None);
            }
            if let Some(id) = hovered {
                selection.set_selected(Some(id));
            }
            self.hovered = hovered;
        }

        if let Some(id) = clicked {
            selection.set_selected(toggle_target(selection.selected(), id));
        }
    }
}
