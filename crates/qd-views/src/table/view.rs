use egui::{Id, Rect, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use qd_core::RecordId;
use uuid::Uuid;

use super::{cell_hit_rect, format_cell, header_label, RowInteraction, RowStyle, TableConfig};
use crate::{SpaceView, SpaceViewId, ViewerContext};

/// Table of all loaded records
pub struct TableView {
    id: SpaceViewId,
    pub config: TableConfig,
    interaction: RowInteraction,
    /// Pointer targets of the rows drawn last frame
    last_row_rects: Vec<(RecordId, Rect)>,
}

impl TableView {
    pub fn new(config: TableConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            interaction: RowInteraction::new(),
            last_row_rects: Vec::new(),
        }
    }

    fn render_table(&mut self, ui: &mut Ui, ctx: &ViewerContext) {
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
        let selection_bg_fill = ui.style().visuals.selection.bg_fill;
        let selection_stroke_color = ui.style().visuals.selection.stroke.color;

        let columns = ctx.dataset.columns();
        let records = ctx.dataset.records();
        let selected = ctx.selection.selected();
        let view_id = self.id;

        let mut row_rects: Vec<(RecordId, Rect)> = Vec::new();

        let mut builder = TableBuilder::new(ui)
            .striped(self.config.striped_rows)
            .resizable(self.config.resizable_columns)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(true);

        for column in columns {
            let initial = if column == "place" { 260.0 } else { 110.0 };
            builder = builder.column(
                Column::initial(initial)
                    .at_least(50.0)
                    .at_most(400.0)
                    .clip(true)
                    .resizable(self.config.resizable_columns),
            );
        }

        builder
            .header(20.0, |mut header| {
                for column in columns {
                    header.col(|ui| {
                        ui.strong(header_label(column));
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, records.len(), |row_index, mut row| {
                    let record = &records[row_index];
                    let style = RowStyle::for_row(record.id, selected);

                    let mut row_rect = Rect::NOTHING;

                    for column in columns {
                        row.col(|ui| {
                            let cell_rect = ui.max_rect();
                            if style == RowStyle::Selected {
                                ui.painter().rect_filled(cell_rect, 0.0, selection_bg_fill);
                            }

                            let text = format_cell(column, record.field(column));
                            if style == RowStyle::Selected {
                                ui.label(RichText::new(text).color(selection_stroke_color).strong());
                            } else {
                                ui.label(text);
                            }

                            // Cell clip rects hug the cell, so widen them by the same fringe
                            let spacing = ui.spacing().item_spacing;
                            let visible = cell_hit_rect(cell_rect, spacing).intersect(cell_hit_rect(ui.clip_rect(), spacing));
                            if visible.is_positive() {
                                row_rect = row_rect.union(visible);
                            }
                        });
                    }

                    if row_rect.is_positive() {
                        row_rects.push((record.id, row_rect));
                    }
                });
            });

        // Hit-test whole rows so the gaps between cells do not count as leaving
        let mut hovered = None;
        let mut clicked = None;
        for &(id, rect) in &row_rects {
            let response = ui.interact(rect, Id::new(("qd_table_row", view_id, id)), Sense::click());
            if response.hovered() {
                hovered = Some(id);
            }
            if response.clicked() {
                clicked = Some(id);
            }
        }
        self.last_row_rects = row_rects;

        if hovered != self.interaction.hovered() || clicked.is_some() {
            tracing::debug!("Table pointer: hovered {:?}, clicked {:?}", hovered, clicked);
        }
        self.interaction.update(hovered, clicked, &ctx.selection);
    }
}

impl SpaceView for TableView {
    fn id(&self) -> SpaceViewId {
        self.id
    }

    fn title(&self, ctx: &ViewerContext) -> String {
        format!("Data Table ({} Records)", ctx.dataset.len())
    }

    fn view_type(&self) -> &str {
        "TableView"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        if ctx.dataset.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No records");
            });
            return;
        }
        self.render_table(ui, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use egui::Pos2;
    use qd_core::AxisSelectionStore;
    use qd_data::Dataset;
    use crate::headless::Harness;

    fn context() -> ViewerContext {
        let dataset = qd_data::parse_dataset(
            "quakes.csv",
            "latitude,longitude,depth,mag,place\n1,2,3,4.5,north\n5,6,7,2.5,south\n8,9,10,3.5,east\n",
            &Default::default(),
        )
        .unwrap();
        ViewerContext::new(Arc::new(dataset), Arc::new(AxisSelectionStore::new()))
    }

    fn row_rect(view: &TableView, id: u32) -> Rect {
        view.last_row_rects
            .iter()
            .find(|(row, _)| *row == RecordId(id))
            .map(|(_, rect)| *rect)
            .unwrap()
    }

    #[test]
    fn test_title_counts_records() {
        let dataset = qd_data::parse_dataset(
            "quakes.csv",
            "latitude,longitude,depth,mag\n1,2,3,4\n5,6,7,8\n",
            &Default::default(),
        )
        .unwrap();
        let ctx = ViewerContext::new(Arc::new(dataset), Arc::new(AxisSelectionStore::new()));
        let view = TableView::new(TableConfig::default());
        assert_eq!(view.title(&ctx), "Data Table (2 Records)");
        assert_eq!(view.view_type(), "TableView");
    }

    #[test]
    fn test_empty_dataset_title() {
        let ctx = ViewerContext::new(
            Arc::new(Dataset::new("empty.csv", Vec::new(), Vec::new())),
            Arc::new(AxisSelectionStore::new()),
        );
        let view = TableView::new(TableConfig::default());
        assert_eq!(view.title(&ctx), "Data Table (0 Records)");
    }

    #[test]
    fn test_rows_cover_the_gaps_between_cells() {
        let ctx = context();
        let mut view = TableView::new(TableConfig::default());
        let mut harness = Harness::new();
        harness.frame(&mut view, &ctx, Vec::new());

        assert_eq!(view.last_row_rects.len(), 3);
        let first = row_rect(&view, 1);
        let second = row_rect(&view, 2);
        assert!(first.width() > 110.0 * 4.0);
        assert!(second.min.y - first.max.y < 0.5);
    }

    #[test]
    fn test_hover_then_click_clears_until_reentered() {
        let ctx = context();
        let mut view = TableView::new(TableConfig::default());
        let mut harness = Harness::new();
        harness.frame(&mut view, &ctx, Vec::new());
        let first = row_rect(&view, 1);
        let second = row_rect(&view, 2);
        let y = first.center().y;

        harness.hover(&mut view, &ctx, Pos2::new(first.left() + 5.0, y));
        assert_eq!(ctx.selection.selected(), Some(RecordId(1)));

        harness.click(&mut view, &ctx, Pos2::new(first.left() + 5.0, y));
        assert_eq!(ctx.selection.selected(), None);

        // Crossing the cell boundaries of the same row is not a re-enter
        let mut x = first.left() + 5.0;
        while x < first.right() - 1.0 {
            harness.hover(&mut view, &ctx, Pos2::new(x, y));
            assert_eq!(ctx.selection.selected(), None, "re-selected at x = {}", x);
            x += 3.0;
        }

        harness.hover(&mut view, &ctx, second.center());
        assert_eq!(ctx.selection.selected(), Some(RecordId(2)));

        harness.click(&mut view, &ctx, second.center());
        assert_eq!(ctx.selection.selected(), None);
        harness.click(&mut view, &ctx, second.center());
        assert_eq!(ctx.selection.selected(), Some(RecordId(2)));

        // Leaving the table clears the row selected by hovering
        harness.hover(&mut view, &ctx, Pos2::new(second.center().x, 880.0));
        assert_eq!(ctx.selection.selected(), None);
    }
}
