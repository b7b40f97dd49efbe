use egui::{RichText, Ui};
use egui_plot::{Legend, Plot, PlotPoints, PlotTransform, Points};
use qd_core::{toggle_target, AxisSelection};
use uuid::Uuid;

use super::{nearest_point, plot_sequence, tooltip_lines, ChartConfig, PlotPoint, PointTier};
use crate::controls::axis_controls;
use crate::{SpaceView, SpaceViewId, ViewerContext};

/// Plot sequence cached against the store revisions it was built from
struct CachedPlot {
    axes_revision: u64,
    selection_revision: u64,
    axes: AxisSelection,
    points: Vec<PlotPoint>,
}

/// Scatter chart with axis pickers
pub struct ChartView {
    id: SpaceViewId,
    pub config: ChartConfig,
    cached: Option<CachedPlot>,
    /// Plot-to-screen mapping of the last drawn frame
    last_transform: Option<PlotTransform>,
}

impl ChartView {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            cached: None,
            last_transform: None,
        }
    }

    fn refresh(&mut self, ctx: &ViewerContext) {
        let axes_revision = ctx.axes.revision();
        let selection_revision = ctx.selection.revision();

        let stale = match &self.cached {
            Some(cached) => {
                cached.axes_revision != axes_revision || cached.selection_revision != selection_revision
            }
            None => true,
        };

        if stale {
            let axes = ctx.axes.axes();
            let points = plot_sequence(ctx.dataset.records(), axes, ctx.selection.selected());
            tracing::debug!("Rebuilt plot sequence: {} of {} records", points.len(), ctx.dataset.len());
            self.cached = Some(CachedPlot {
                axes_revision,
                selection_revision,
                axes,
                points,
            });
        }
    }
}

impl SpaceView for ChartView {
    fn id(&self) -> SpaceViewId {
        self.id
    }

    fn title(&self, ctx: &ViewerContext) -> String {
        let axes = ctx.axes.axes();
        format!("Interactive Chart ({} vs {})", axes.x.label(), axes.y.label())
    }

    fn view_type(&self) -> &str {
        "ChartView"
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        axis_controls(ui, &ctx.axes);
        ui.separator();

        self.refresh(ctx);
        let Some(cached) = &self.cached else {
            return;
        };

        let threshold = self.config.high_magnitude_threshold;
        let pick_slop = self.config.pick_slop;
        let series_name = format!("Earthquakes ({} vs {})", cached.axes.x, cached.axes.y);

        // Group by tier so the selected point is drawn last
        let tiers = [PointTier::Default, PointTier::HighMagnitude, PointTier::Selected];
        let grouped: Vec<(PointTier, Vec<[f64; 2]>)> = tiers
            .iter()
            .map(|&tier| {
                let coords = cached
                    .points
                    .iter()
                    .filter(|point| PointTier::for_point(point, threshold) == tier)
                    .map(|point| [point.x, point.y])
                    .collect();
                (tier, coords)
            })
            .collect();

        let plot = Plot::new(("qd_chart", self.id))
            .legend(Legend::default())
            .show_grid(self.config.show_grid)
            .x_axis_label(cached.axes.x.label())
            .y_axis_label(cached.axes.y.label())
            .allow_boxed_zoom(false);

        let plot_response = plot.show(ui, |plot_ui| {
            for (tier, coords) in &grouped {
                if coords.is_empty() {
                    continue;
                }
                if let Some(outline) = tier.outline() {
                    plot_ui.points(
                        Points::new(PlotPoints::new(coords.clone()))
                            .color(outline.color)
                            .radius(tier.radius() + outline.width)
                            .name(&series_name),
                    );
                }
                plot_ui.points(
                    Points::new(PlotPoints::new(coords.clone()))
                        .color(tier.color())
                        .radius(tier.radius())
                        .name(&series_name),
                );
            }

            let hovered = plot_ui.response().hover_pos().and_then(|pointer| {
                nearest_point(
                    &cached.points,
                    pointer,
                    |x, y| plot_ui.screen_from_plot(egui_plot::PlotPoint::new(x, y)),
                    |point| PointTier::for_point(point, threshold).radius() + pick_slop,
                )
            });

            (hovered, plot_ui.response().clicked())
        });

        let (hovered, clicked) = plot_response.inner;
        self.last_transform = Some(plot_response.transform);
        let Some(index) = hovered else {
            return;
        };
        let point = cached.points[index];

        if clicked {
            let next = toggle_target(ctx.selection.selected(), point.id);
            tracing::debug!("Chart click on record {} -> {:?}", point.id, next);
            ctx.selection.set_selected(next);
        }

        if let Some(record) = ctx.dataset.get(point.id) {
            let axes = cached.axes;
            plot_response.response.on_hover_ui_at_pointer(|ui| {
                ui.label(RichText::new(&record.place).strong());
                for line in tooltip_lines(record, axes, &point) {
                    ui.label(line);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use qd_core::{AxisKey, AxisSelectionStore, RecordId};
    use qd_data::{Dataset, Record};
    use crate::headless::Harness;

    fn context() -> ViewerContext {
        let records = (1..=3)
            .map(|id| {
                let mut record = Record::empty(RecordId(id));
                record.latitude = id as f64;
                record.longitude = id as f64 * 2.0;
                record.mag = 3.0 + id as f64;
                record
            })
            .collect();
        let dataset = Dataset::new("test.csv", vec!["latitude".into(), "longitude".into()], records);
        ViewerContext::new(Arc::new(dataset), Arc::new(AxisSelectionStore::new()))
    }

    #[test]
    fn test_title_follows_axes() {
        let ctx = context();
        let view = ChartView::new(ChartConfig::default());
        assert_eq!(view.title(&ctx), "Interactive Chart (LONGITUDE vs LATITUDE)");

        ctx.axes.set_y_axis(AxisKey::Mag);
        assert_eq!(view.title(&ctx), "Interactive Chart (LONGITUDE vs MAG)");
    }

    #[test]
    fn test_cache_invalidated_by_store_changes() {
        let ctx = context();
        let mut view = ChartView::new(ChartConfig::default());

        view.refresh(&ctx);
        assert!(view.cached.as_ref().unwrap().points.iter().all(|p| !p.is_selected));

        ctx.selection.set_selected(Some(RecordId(2)));
        view.refresh(&ctx);
        let selected: Vec<u32> = view
            .cached
            .as_ref()
            .unwrap()
            .points
            .iter()
            .filter(|p| p.is_selected)
            .map(|p| p.id.0)
            .collect();
        assert_eq!(selected, vec![2]);

        ctx.axes.set_x_axis(AxisKey::Mag);
        view.refresh(&ctx);
        let cached = view.cached.as_ref().unwrap();
        assert_eq!(cached.axes.x, AxisKey::Mag);
        assert_eq!(cached.points[0].x, 4.0);
    }

    #[test]
    fn test_clicking_a_point_toggles_selection() {
        let ctx = context();
        let mut view = ChartView::new(ChartConfig::default());
        let mut harness = Harness::new();

        // Let the plot settle its bounds before aiming at a point
        harness.frame(&mut view, &ctx, Vec::new());
        harness.frame(&mut view, &ctx, Vec::new());
        let target = view
            .last_transform
            .as_ref()
            .unwrap()
            .position_from_point(&egui_plot::PlotPoint::new(4.0, 2.0));

        harness.hover(&mut view, &ctx, target);
        assert_eq!(ctx.selection.selected(), None);

        harness.click(&mut view, &ctx, target);
        assert_eq!(ctx.selection.selected(), Some(RecordId(2)));

        harness.click(&mut view, &ctx, target);
        assert_eq!(ctx.selection.selected(), None);
    }

    #[test]
    fn test_click_on_empty_plot_area_keeps_selection() {
        let ctx = context();
        let mut view = ChartView::new(ChartConfig::default());
        let mut harness = Harness::new();
        ctx.selection.set_selected(Some(RecordId(1)));

        harness.frame(&mut view, &ctx, Vec::new());
        harness.frame(&mut view, &ctx, Vec::new());
        let transform = view.last_transform.as_ref().unwrap();
        let first = transform.position_from_point(&egui_plot::PlotPoint::new(2.0, 1.0));
        let second = transform.position_from_point(&egui_plot::PlotPoint::new(4.0, 2.0));
        let between = first + (second - first) * 0.5;

        harness.click(&mut view, &ctx, between);
        assert_eq!(ctx.selection.selected(), Some(RecordId(1)));
    }
}
