//! Owning result types with single-consumption semantics.
//!
//! This crate provides a result type whose payload has exactly one owner and
//! can be moved out exactly once, along with non-owning views of it.
//!
//! # Core Types
//!
//! * [`OwningResult`] - A success or error value that can be consumed once
//! * [`BorrowedResult`] - A read-only view that never owns its payload
//! * [`OwningOk`] / [`OwningErr`] - The single owner of one side's value
//! * [`BorrowedOk`] / [`BorrowedErr`] - Weak or borrowed references to one
//!   side's value
//! * [`Thunk`] - A lazily evaluated, cached computation
//!
//! # Validation
//!
//! * [`Check`] - Validate a result without consuming it
//! * [`Config`] - Configuration for validation behavior
//!
//! # Example
//!
//! ```rust
//! use ownres_result::{Check, Config, OwningResult};
//!
//! let result: OwningResult<Vec<f64>, String> = OwningResult::new_ok(vec![1.0; 10]);
//! assert!(result.run_checks(&[Check::ok(), Check::unconsumed()], &Config::default()));
//!
//! let sum = result.map(|values| values.iter().sum::<f64>());
//! assert_eq!(sum.map_or(0.0, |total| total), 10.0);
//! ```

pub mod borrowed;
pub mod check;
pub mod config;
pub mod holder;
pub mod owning;
pub mod thunk;

pub use {
    borrowed::BorrowedResult,
    check::Check,
    config::Config,
    holder::{BorrowedErr, BorrowedOk, OwningErr, OwningOk, Ref},
    owning::OwningResult,
    ownres_error::error::{ResultError, Variant},
    thunk::Thunk,
};

#[cfg(feature = "sync")]
pub use thunk::SyncThunk;
