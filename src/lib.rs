#![warn(clippy::pedantic)]
// Binary crate with an internal library; all callers are us.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod graph;
pub mod logger;
pub mod render;
pub mod report;
pub mod restrict;
pub mod stats;
pub mod traversal;
pub mod tree;
