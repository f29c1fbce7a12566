//! Client-side table controller
//!
//! Sorts and paginates a caller-owned list of records and produces view
//! snapshots (page slice, page-number window, entry range) for a renderer.
//! No I/O, no rendering, no record ownership.

pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod sample;
pub mod sort;
pub mod view;

mod controller;

pub use controller::*;
pub use view::View;
