//! Core application modules for Pulsar Dash.
//!
//! # Module Organization
//!
//! - [`topology`] - The ordered hierarchy of topology levels
//! - [`filter_store`] - Active filters, view state, navigation reconciliation and the
//!   option catalog
//! - [`backend`] - Backend REST client, response schemas and request sequencing
//! - [`dashboard`] - State container tying the store to the backend
//! - [`config`] - Runtime configuration
//!
//! # Architecture
//!
//! - [`topology`] is pure and shared by every other module
//! - [`filter_store`] never performs I/O; all of its operations are total
//! - [`backend`] performs I/O and categorizes failures
//! - [`dashboard`] is the only place where fetch results meet the store

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod filter_store;
pub mod topology;
