// src/config/consts.rs

// Data
pub const DEFAULT_DATA_FILE: &str = "bridges_georgia_dataset.csv";
pub const DATA_PATH_ENV: &str = "GA_BRIDGES_DATA";
pub const NO_DATA: &str = "No Data Present";

// Home banner, looked up next to the data file
pub const BANNER_FILE: &str = "Georgia_bridge.png";
pub const BANNER_CAPTION: &str = "Sidney Lanier Bridge";

// Material distribution
pub const OTHER_THRESHOLD_PCT: f64 = 6.0;
pub const OTHER_MATERIAL_LABEL: &str = "Other Span Material";

// Reconstructions bar chart
pub const RECONSTRUCTED_FROM: i32 = 1975;
pub const RECONSTRUCTED_TO: i32 = 2022;
pub const BAR_Y_MAX: usize = 130;

// County line chart
pub const BUILT_FROM: i32 = 1885;
pub const DEFAULT_COUNTY_COUNT: usize = 2;

// Bridge map
pub const TOP_N_MIN: usize = 50;
pub const TOP_N_MAX: usize = 1000;
pub const TOP_N_DEFAULT: usize = 500;
pub const TOP_TABLE_ROWS: usize = 10;
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 800.0];

pub const MAP_ZOOM: f64 = 6.0;
pub const POINT_RADIUS_M: f64 = 2500.0;
// Rough geographic centre of Georgia (lon, lat)
pub const FALLBACK_CENTER: (f64, f64) = (-83.44, 32.65);

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
