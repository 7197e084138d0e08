//! Attendance to pay calculation engine
//!
//! This crate turns clock-in/clock-out attendance for a pay period into
//! overtime hours and amounts, and composes a final salary from basic pay,
//! overtime, a payment structure of additions and deductions, and no-pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
