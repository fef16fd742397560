//! Statutory Deduction Engine for Kenyan payroll
//!
//! This crate computes the statutory payroll deductions mandated by Kenyan
//! law - PAYE (progressive income tax), NSSF (tiered pension contributions),
//! SHIF (health insurance levy) and the Affordable Housing Levy - over
//! versioned, time-effective rate tables, and validates computed payslips
//! against employment-type compliance rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
