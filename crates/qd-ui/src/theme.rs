use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    pub dark_mode: bool,
}

/// Palette for one mode
struct Palette {
    panel_bg: Color32,
    extreme_bg: Color32,
    widget_bg: Color32,
    hover: Color32,
    border: Color32,
    text: Color32,
}

const LIGHT: Palette = Palette {
    panel_bg: Color32::from_rgb(249, 250, 251),
    extreme_bg: Color32::WHITE,
    widget_bg: Color32::from_rgb(243, 244, 246),
    hover: Color32::from_rgb(229, 231, 235),
    border: Color32::from_rgb(209, 213, 219),
    text: Color32::from_rgb(31, 41, 55),
};

const DARK: Palette = Palette {
    panel_bg: Color32::from_rgb(31, 31, 31),
    extreme_bg: Color32::from_rgb(23, 23, 23),
    widget_bg: Color32::from_rgb(40, 40, 40),
    hover: Color32::from_rgb(50, 50, 50),
    border: Color32::from_rgb(70, 70, 70),
    text: Color32::from_rgb(220, 220, 220),
};

/// Table and chart highlight, shared with the selected point color
pub fn accent_color() -> Color32 {
    Color32::from_rgb(255, 99, 71)
}

/// Text color for load failures
pub fn error_color() -> Color32 {
    Color32::from_rgb(220, 38, 38)
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let (mut visuals, palette) = if theme.dark_mode {
        (Visuals::dark(), &DARK)
    } else {
        (Visuals::light(), &LIGHT)
    };

    visuals.window_fill = palette.panel_bg;
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.extreme_bg;
    visuals.faint_bg_color = palette.widget_bg;

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
    ] {
        widget.bg_stroke = Stroke::new(1.0, palette.border);
        widget.fg_stroke = Stroke::new(1.0, palette.text);
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.noninteractive.bg_fill = palette.widget_bg;
    visuals.widgets.inactive.bg_fill = palette.widget_bg;
    visuals.widgets.hovered.bg_fill = palette.hover;

    // Row highlight in the table
    visuals.selection.bg_fill = accent_color().linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, palette.text);

    let mut style = Style::default();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
    tracing::debug!("Applied {} theme", if theme.dark_mode { "dark" } else { "light" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_sets_mode() {
        let ctx = Context::default();

        apply_theme(&ctx, &Theme { dark_mode: true });
        assert!(ctx.style().visuals.dark_mode);

        apply_theme(&ctx, &Theme::default());
        assert!(!ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, LIGHT.panel_bg);
    }
}
