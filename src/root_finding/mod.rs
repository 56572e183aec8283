// common helpers
pub mod algorithms;
pub mod callback;
pub mod config;
pub mod errors;
pub mod report;
pub mod tolerances;
pub(crate) mod common;
pub(crate) mod signs;

// solver skeletons
pub(crate) mod bracket;
pub(crate) mod open;

// algorithms
pub mod bisection;
pub mod ridder;
pub mod brent;
pub mod newton;
pub mod secant;
pub mod halley;
