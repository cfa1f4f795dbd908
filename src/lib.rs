//! Censo - synthetic population generator with monitored aggregation queries
//!
//! Builds an in-memory collection of [`persona::Persona`] records and runs
//! single-pass reductions over it (oldest, wealthiest, per-city and
//! per-declaration-group winners, aggregate wealth by city). Each menu
//! operation is timed and its memory delta recorded by [`monitor::Monitor`].

pub mod cli;
pub mod csv_output;
pub mod error;
pub mod generator;
pub mod memory;
pub mod menu;
pub mod monitor;
pub mod persona;
pub mod queries;
pub mod report;
pub mod session;
