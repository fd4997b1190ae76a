//! Core business logic modules.

pub mod filter;
pub mod pipeline;
pub mod ranker;
pub mod renamer;
pub mod report;
pub mod scanner;
pub mod selector;
