//! Core traits and types used throughout the library.

pub mod grid;
pub mod ode;
pub mod solution;
