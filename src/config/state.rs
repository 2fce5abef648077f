// src/config/state.rs
use super::options::{DashboardOptions, PageKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub current_page: PageKind,

    /// County multi-select, in click order
    pub selected_counties: Vec<String>,
    /// Anchor for shift-click ranges in the county list
    pub last_clicked: Option<usize>,

    /// Bridge Map slider
    pub top_n: usize,
    /// Map drag offset in screen points
    pub map_pan: (f32, f32),

    pub export_path_text: String,
}

impl GuiState {
    pub fn new(options: &DashboardOptions, default_counties: Vec<String>) -> Self {
        Self {
            current_page: PageKind::Home,
            selected_counties: default_counties,
            last_clicked: None,
            top_n: options.clamp_top_n(options.top_n_default),
            map_pan: (0.0, 0.0),
            export_path_text: s!("out/"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: DashboardOptions,
    pub gui: GuiState,
}
