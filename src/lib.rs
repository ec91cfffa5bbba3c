//! Monthly payroll computation engine.
//!
//! This crate turns an employee's classification, compensation inputs and
//! elected benefits into a pay statement: gross pay by employee type,
//! progressive marginal tax, conditional deductions, and net pay, all in
//! exact decimal arithmetic.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
