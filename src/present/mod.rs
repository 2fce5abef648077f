// src/present/mod.rs
//
// Presentation adapters: turn aggregation results into exactly what each
// chart/table draws. No egui types here, so the CLI report and the tests
// use the same shapes as the GUI.

pub mod table;

pub use table::TableData;

use crate::{
    analysis::{
        built_years_for_county, BridgeSummary, CountyAggregate, DistributionSummary,
        TopNSelection, YearlyCounts,
    },
    config::consts::{FALLBACK_CENTER, NO_DATA},
    data::Dataset,
};

pub const PIVOT_HEADERS: &[&str] = &["County Name", "Average Structure Length"];
pub const TOP_HEADERS: &[&str] = &["Location", "Length (ft)", "Age"];

/* ---------------- Home: pie + bar ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the total, 0..=100
    pub percent: f64,
}

impl PieSlice {
    /// `%1.1f%%`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

pub fn pie_slices(summary: &DistributionSummary, other_label: &str) -> Vec<PieSlice> {
    let total = summary.total();
    if total == 0 { return Vec::new(); }

    summary
        .labeled(other_label)
        .into_iter()
        .map(|(label, count)| PieSlice {
            label,
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub bars: Vec<(i32, usize)>,
    /// Y axis ceiling; at least the configured floor, stretched for taller bars
    pub y_max: usize,
}

pub fn bar_chart(counts: &YearlyCounts, y_ceiling: usize) -> BarChart {
    let bars: Vec<(i32, usize)> = counts.iter().map(|(&y, &n)| (y, n)).collect();
    let tallest = bars.iter().map(|&(_, n)| n).max().unwrap_or(0);
    BarChart { bars, y_max: y_ceiling.max(tallest) }
}

/* ---------------- County Information: lines + pivot ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<(i32, usize)>,
}

/// One built-year series per selected county, in selection order.
pub fn county_lines(dataset: &Dataset, counties: &[String], start: i32) -> Vec<LineSeries> {
    counties
        .iter()
        .map(|county| LineSeries {
            label: county.clone(),
            points: built_years_for_county(dataset, county, start)
                .into_iter()
                .collect(),
        })
        .collect()
}

pub fn pivot_table(agg: &CountyAggregate) -> TableData {
    let rows = agg
        .iter()
        .map(|(county, mean)| vec![county.clone(), format!("{mean:.2}")])
        .collect();
    TableData::with(PIVOT_HEADERS, rows)
}

/* ---------------- Bridge Map: points + view + Top-10 ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub lon: f64,
    pub lat: f64,
    pub tooltip: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub lon: f64,
    pub lat: f64,
    pub zoom: f64,
}

/// Always keeps the fraction: `100.0`, `120.5`.
pub fn fmt_length(v: f64) -> String {
    format!("{v:?}")
}

fn fmt_age(age: Option<u32>) -> String {
    age.map(|a| a.to_string()).unwrap_or_else(|| s!(NO_DATA))
}

/// `"<place name>\nLength: <length>\nAge: <age>"`
pub fn tooltip(s: &BridgeSummary) -> String {
    format!(
        "{}\nLength: {}\nAge: {}",
        s.place.as_deref().unwrap_or(NO_DATA),
        fmt_length(s.length),
        fmt_age(s.age)
    )
}

/// Selected bridges that have coordinates, longest first.
pub fn map_points(sel: &TopNSelection) -> Vec<MapPoint> {
    sel.positions()
        .into_iter()
        .zip(sel.summaries())
        .filter_map(|(pos, s)| {
            let (lon, lat) = pos?;
            Some(MapPoint { lon, lat, tooltip: tooltip(&s) })
        })
        .collect()
}

/// Initial viewpoint: centroid of the selection at `zoom`.
pub fn map_view(sel: &TopNSelection, zoom: f64) -> MapView {
    let (lon, lat) = sel.centroid().unwrap_or(FALLBACK_CENTER);
    MapView { lon, lat, zoom }
}

pub fn top_table(sel: &TopNSelection, k: usize) -> TableData {
    let rows = sel
        .top(k)
        .into_iter()
        .map(|s| {
            vec![
                s.place.unwrap_or_else(|| s!(NO_DATA)),
                fmt_length(s.length),
                fmt_age(s.age),
            ]
        })
        .collect();
    TableData::with(TOP_HEADERS, rows)
}
