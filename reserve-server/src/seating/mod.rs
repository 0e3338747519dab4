//! Table Suggestion Module
//!
//! This module handles seating suggestions for reservation requests:
//! which free tables (or declared joined pairs) can hold a party of a
//! given size for a date, shift and usage category.

pub mod availability;
mod cache;
pub mod ranking;
pub mod resolver;
mod service;

pub use availability::*;
pub use cache::*;
pub use ranking::*;
pub use resolver::*;
pub use service::*;
