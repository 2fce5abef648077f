// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    CountyInformation,
    BridgeMap,
}

impl PageKind {
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Home => "Home",
            PageKind::CountyInformation => "County Information",
            PageKind::BridgeMap => "Bridge Map",
        }
    }
}

/// Runtime-tunable knobs for the three pages.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardOptions {
    pub data_path: PathBuf,
    pub banner_path: Option<PathBuf>,

    pub other_threshold_pct: f64,
    pub reconstructed_years: RangeInclusive<i32>,
    pub bar_y_max: usize,

    pub built_from: i32,
    pub default_county_count: usize,

    pub top_n_bounds: RangeInclusive<usize>,
    pub top_n_default: usize,
    pub top_table_rows: usize,
    pub map_zoom: f64,
    pub point_radius_m: f64,

    /// Initial window inner size
    pub window_size: [f32; 2],
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            banner_path: None,
            other_threshold_pct: OTHER_THRESHOLD_PCT,
            reconstructed_years: RECONSTRUCTED_FROM..=RECONSTRUCTED_TO,
            bar_y_max: BAR_Y_MAX,
            built_from: BUILT_FROM,
            default_county_count: DEFAULT_COUNTY_COUNT,
            top_n_bounds: TOP_N_MIN..=TOP_N_MAX,
            top_n_default: TOP_N_DEFAULT,
            top_table_rows: TOP_TABLE_ROWS,
            map_zoom: MAP_ZOOM,
            point_radius_m: POINT_RADIUS_M,
            window_size: WINDOW_SIZE,
        }
    }
}

impl DashboardOptions {
    /// Options for a given data file; the banner is looked up beside it.
    pub fn for_data_path(path: impl Into<PathBuf>) -> Self {
        let data_path = path.into();
        let banner_path = Some(banner_beside(&data_path));
        Self { data_path, banner_path, ..Self::default() }
    }

    /// Explicit path, else `$GA_BRIDGES_DATA`, else the default file name.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var_os(DATA_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self::for_data_path(path)
    }

    pub fn clamp_top_n(&self, n: usize) -> usize {
        n.clamp(*self.top_n_bounds.start(), *self.top_n_bounds.end())
    }
}

fn banner_beside(data_path: &Path) -> PathBuf {
    match data_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(BANNER_FILE),
        _ => PathBuf::from(BANNER_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_comes_with_options() {
        let opts = DashboardOptions::for_data_path("data/bridges.csv");
        assert_eq!(opts.window_size, [1100.0, 800.0]);
        assert_eq!(opts.banner_path, Some(Path::new("data").join(BANNER_FILE)));
    }

    #[test]
    fn top_n_clamps_to_slider_bounds() {
        let opts = DashboardOptions::default();
        assert_eq!(opts.clamp_top_n(10), 50);
        assert_eq!(opts.clamp_top_n(5000), 1000);
        assert_eq!(opts.clamp_top_n(500), 500);
    }
}
