//! Puzzle solutions by year

pub mod year_2022;
pub mod year_2024;
