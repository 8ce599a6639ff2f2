//! Errors thrown by ownres holders and results.

pub mod error;
