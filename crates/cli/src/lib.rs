//! Seti icon theme updater CLI library.

pub mod cli;
