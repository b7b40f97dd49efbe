//! User interface chrome for the dashboard
//!
//! Theme setup plus the full-screen panels shown before the dashboard
//! itself is ready.

pub mod status;
pub mod theme;

pub use status::{dashboard_heading, error_panel, loading_panel, DASHBOARD_TITLE};
pub use theme::{apply_theme, error_color, Theme};
