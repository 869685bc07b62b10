//! ScaleCalc-rs library — application logic for the scaling-law calculator.

pub mod app;
pub mod config;
pub mod errors;
