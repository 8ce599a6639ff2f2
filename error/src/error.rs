//! Result errors

use {std::fmt, thiserror::Error};

/// Which side of a result a value lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Ok,
    Err,
}

impl Variant {
    /// The opposite side.
    pub const fn other(self) -> Self {
        match self {
            Variant::Ok => Variant::Err,
            Variant::Err => Variant::Ok,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Ok => f.write_str("Ok"),
            Variant::Err => f.write_str("Err"),
        }
    }
}

/// Errors raised by holders and results.
///
/// Only the accessors that cannot return an absent value (`unwrap`,
/// `expect` and resolving a borrowed holder) escalate these to a panic.
/// Everything else hands them back to the caller or degrades to `None`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResultError {
    /// The value was already moved out of its owning holder.
    #[error("value has already been consumed")]
    ConsumedValue,
    /// The accessor expected one side but the result holds the other.
    #[error("expected an {expected} value, but the result holds {found}")]
    WrongVariant { expected: Variant, found: Variant },
    /// Every strong owner of a shared value has been dropped.
    #[error("borrowed value has been released by all of its owners")]
    DanglingReference,
    /// `unwrap` or `expect` was called on an error.
    #[error("{message}: {error}")]
    UnwrapOnError { message: String, error: String },
    /// `unwrap_err` or `expect_err` was called on a success value.
    #[error("{message}: {value}")]
    UnwrapErrOnOk { message: String, value: String },
}

impl ResultError {
    /// Log and panic with this error.
    #[cold]
    #[track_caller]
    pub fn panic(&self) -> ! {
        log::error!("{}", self);
        panic!("{}", self)
    }
}

pub trait ResultPanic<T> {
    fn or_panic_with(self, error: ResultError) -> T;
}

impl<T, E> ResultPanic<T> for Result<T, E>
where
    E: fmt::Debug,
{
    #[track_caller]
    fn or_panic_with(self, error: ResultError) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                log::error!("{}: {:?}", error, err);
                panic!("{}: {:?}", error, err)
            }
        }
    }
}

impl<T> ResultPanic<T> for Option<T> {
    #[track_caller]
    fn or_panic_with(self, error: ResultError) -> T {
        match self {
            Some(value) => value,
            None => error.panic(),
        }
    }
}
