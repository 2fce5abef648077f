// src/gui/components/mod.rs
pub mod charts;
pub mod county_panel;
pub mod data_table;
pub mod export_bar;
pub mod scatter_map;
pub mod tabs;
