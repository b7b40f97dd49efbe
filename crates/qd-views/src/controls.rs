//! Axis pickers shown above the chart

use egui::Ui;
use qd_core::{AxisKey, AxisSelectionStore};

/// Keys offered by the X picker
pub fn x_options() -> Vec<AxisKey> {
    AxisKey::ALL.to_vec()
}

/// Keys offered by the Y picker: everything except the current X axis.
///
/// The X picker has no matching filter, so choosing the current Y as X
/// is allowed and leaves both axes equal.
pub fn y_options(x: AxisKey) -> Vec<AxisKey> {
    AxisKey::ALL.iter().copied().filter(|key| *key != x).collect()
}

/// Draw both pickers and write any choice back to the store
pub fn axis_controls(ui: &mut Ui, store: &AxisSelectionStore) {
    let current = store.axes();
    let mut x = current.x;
    let mut y = current.y;

    ui.horizontal(|ui| {
        ui.label("X-Axis:");
        egui::ComboBox::from_id_source("qd_x_axis")
            .selected_text(x.label())
            .show_ui(ui, |ui| {
                for key in x_options() {
                    ui.selectable_value(&mut x, key, key.label());
                }
            });

        ui.add_space(16.0);

        ui.label("Y-Axis:");
        egui::ComboBox::from_id_source("qd_y_axis")
            .selected_text(y.label())
            .show_ui(ui, |ui| {
                for key in y_options(current.x) {
                    ui.selectable_value(&mut y, key, key.label());
                }
            });
    });

    if x != current.x {
        store.set_x_axis(x);
    }
    if y != current.y {
        store.set_y_axis(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_options_in_declared_order() {
        assert_eq!(
            x_options(),
            vec![AxisKey::Latitude, AxisKey::Longitude, AxisKey::Depth, AxisKey::Mag]
        );
    }

    #[test]
    fn test_y_options_exclude_x() {
        let options = y_options(AxisKey::Depth);
        assert_eq!(options, vec![AxisKey::Latitude, AxisKey::Longitude, AxisKey::Mag]);
        assert!(!y_options(AxisKey::Mag).contains(&AxisKey::Mag));
    }

    #[test]
    fn test_x_may_equal_y() {
        let store = AxisSelectionStore::new();
        let y = store.axes().y;
        assert!(x_options().contains(&y));

        store.set_x_axis(y);
        assert_eq!(store.axes().x, store.axes().y);
    }
}
