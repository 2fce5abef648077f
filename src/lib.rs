// src/lib.rs

#[macro_use]
pub mod macros;

pub mod analysis;
pub mod config;
pub mod data;
pub mod file;
pub mod log;
pub mod present;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
