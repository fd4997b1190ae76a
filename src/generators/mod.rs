//! Name and document generators.

pub mod folder;
pub mod preview;
