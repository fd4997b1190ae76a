//! Movie Renamer Library
//!
//! Renames movie directories to a canonical "Title (Year)" form using TMDB.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
