//! Viewport - docks the chart and table side by side

use std::collections::HashMap;
use egui::Ui;
use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};

use crate::{SpaceView, SpaceViewId, ViewerContext};

/// Share of the width given to the left (chart) panel
pub const DEFAULT_SPLIT: f32 = 0.6;

/// The main viewport holding the two dashboard panels
pub struct Viewport {
    dock_state: DockState<SpaceViewId>,
    space_views: HashMap<SpaceViewId, Box<dyn SpaceView>>,
    order: [SpaceViewId; 2],
}

impl Viewport {
    /// Lay out two views left and right of a vertical split
    pub fn two_panel(left: Box<dyn SpaceView>, right: Box<dyn SpaceView>, fraction: f32) -> Self {
        let left_id = left.id();
        let right_id = right.id();

        let mut dock_state = DockState::new(vec![left_id]);
        dock_state
            .main_surface_mut()
            .split_right(NodeIndex::root(), fraction.clamp(0.1, 0.9), vec![right_id]);

        let mut space_views = HashMap::new();
        space_views.insert(left_id, left);
        space_views.insert(right_id, right);

        Self {
            dock_state,
            space_views,
            order: [left_id, right_id],
        }
    }

    /// Number of views managed by the viewport
    pub fn view_count(&self) -> usize {
        self.space_views.len()
    }

    /// Tab titles, left panel first
    pub fn titles(&self, viewer_context: &ViewerContext) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|id| self.space_views.get(id))
            .map(|view| view.title(viewer_context))
            .collect()
    }

    /// Draw the viewport
    pub fn ui(&mut self, ui: &mut Ui, viewer_context: &ViewerContext) {
        DockArea::new(&mut self.dock_state)
            .show_close_buttons(false)
            .draggable_tabs(true)
            .show_inside(ui, &mut ViewportTabViewer {
                space_views: &mut self.space_views,
                viewer_context,
            });
    }
}

/// Tab viewer for egui_dock
struct ViewportTabViewer<'a> {
    space_views: &'a mut HashMap<SpaceViewId, Box<dyn SpaceView>>,
    viewer_context: &'a ViewerContext,
}

impl<'a> TabViewer for ViewportTabViewer<'a> {
    type Tab = SpaceViewId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match self.space_views.get(tab) {
            Some(view) => view.title(self.viewer_context).into(),
            None => "Unknown".into(),
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        if let Some(view) = self.space_views.get_mut(tab) {
            view.ui(self.viewer_context, ui);
        }
    }

    // Both panels are permanent
    fn on_close(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}
