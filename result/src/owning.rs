//! The owning result type.

use {
    crate::{
        borrowed::BorrowedResult,
        holder::{OwningErr, OwningOk},
    },
    ownres_error::error::{ResultError, ResultPanic, Variant},
    std::fmt,
};

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Payload<T, E> {
    Ok(OwningOk<T>),
    Err(OwningErr<E>),
}

/// A success or error value with a single owner.
///
/// The result moves through three states:
///
/// * `Ok`, holding a success value,
/// * `Err`, holding an error value,
/// * consumed, after a terminal accessor (`ok`, `err`, `unwrap`, `expect`
///   and friends) moved the value out.
///
/// A consumed result remembers which side it was on, so `is_ok` and
/// `is_err` answer the same before and after consumption. Terminal
/// accessors take `&mut self` and hand out the value at most once: later
/// calls see `None`, or panic in the case of `unwrap` and `expect`.
///
/// Transforms (`map`, `map_err`, `map_or`, `inspect`, ...) take the result
/// by value and move its payload into the returned value.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OwningResult<T, E> {
    payload: Payload<T, E>,
}

impl<T, E> OwningResult<T, E> {
    pub fn new_ok(value: T) -> Self {
        OwningOk::new(value).into()
    }

    pub fn new_err(error: E) -> Self {
        OwningErr::new(error).into()
    }

    pub fn variant(&self) -> Variant {
        match self.payload {
            Payload::Ok(_) => Variant::Ok,
            Payload::Err(_) => Variant::Err,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.variant() == Variant::Ok
    }

    pub fn is_err(&self) -> bool {
        self.variant() == Variant::Err
    }

    /// Returns `true` once the payload has been moved out.
    pub fn is_consumed(&self) -> bool {
        match &self.payload {
            Payload::Ok(ok) => ok.is_void(),
            Payload::Err(err) => err.is_void(),
        }
    }

    /// Returns `true` if the result holds a success value matching `f`.
    pub fn is_ok_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
        match &self.payload {
            Payload::Ok(ok) => ok.peek().is_some_and(f),
            Payload::Err(_) => false,
        }
    }

    /// Returns `true` if the result holds an error value matching `f`.
    pub fn is_err_and(&self, f: impl FnOnce(&E) -> bool) -> bool {
        match &self.payload {
            Payload::Err(err) => err.peek().is_some_and(f),
            Payload::Ok(_) => false,
        }
    }

    /// A view of this result that leaves the payload in place.
    pub fn as_ref(&self) -> BorrowedResult<'_, T, E> {
        match &self.payload {
            Payload::Ok(ok) => ok.borrow().into(),
            Payload::Err(err) => err.borrow().into(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OwningResult<U, E> {
        match self.payload {
            Payload::Ok(ok) => match ok.into_inner() {
                Some(value) => OwningResult::new_ok(f(value)),
                None => OwningOk::<U>::void().into(),
            },
            Payload::Err(err) => err.into(),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> OwningResult<T, F> {
        match self.payload {
            Payload::Err(err) => match err.into_inner() {
                Some(error) => OwningResult::new_err(f(error)),
                None => OwningErr::<F>::void().into(),
            },
            Payload::Ok(ok) => ok.into(),
        }
    }

    /// Returns `f` applied to the success value, or `default` if the result
    /// holds an error or has been consumed.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self.payload {
            Payload::Ok(ok) => ok.into_inner().map_or(default, f),
            Payload::Err(_) => default,
        }
    }

    /// Maps the success value with `f` and the error value with `default`.
    ///
    /// Returns `None` for a consumed result, since neither function has
    /// anything to be applied to.
    pub fn map_or_else<U>(
        self,
        default: impl FnOnce(E) -> U,
        f: impl FnOnce(T) -> U,
    ) -> Option<U> {
        match self.payload {
            Payload::Ok(ok) => ok.into_inner().map(f),
            Payload::Err(err) => err.into_inner().map(default),
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Payload::Ok(ok) = &self.payload {
            if let Some(value) = ok.peek() {
                f(value);
            }
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Payload::Err(err) = &self.payload {
            if let Some(error) = err.peek() {
                f(error);
            }
        }
        self
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> OwningResult<U, E>) -> OwningResult<U, E> {
        match self.payload {
            Payload::Ok(ok) => match ok.into_inner() {
                Some(value) => f(value),
                None => OwningOk::<U>::void().into(),
            },
            Payload::Err(err) => err.into(),
        }
    }

    pub fn or_else<F>(self, f: impl FnOnce(E) -> OwningResult<T, F>) -> OwningResult<T, F> {
        match self.payload {
            Payload::Err(err) => match err.into_inner() {
                Some(error) => f(error),
                None => OwningErr::<F>::void().into(),
            },
            Payload::Ok(ok) => ok.into(),
        }
    }

    /// Convert into a standard library result. Returns `None` for a consumed
    /// result.
    pub fn into_std(self) -> Option<Result<T, E>> {
        match self.payload {
            Payload::Ok(ok) => ok.into_inner().map(Ok),
            Payload::Err(err) => err.into_inner().map(Err),
        }
    }

    /// Move the success value out, dropping an error if there is one.
    ///
    /// The result is consumed afterwards, whichever side it was on.
    pub fn ok(&mut self) -> Option<T> {
        match &mut self.payload {
            Payload::Ok(ok) => ok.get().ok(),
            Payload::Err(err) => {
                if err.release().is_some() {
                    log::trace!("Err value discarded by `ok`");
                }
                None
            }
        }
    }

    /// Move the error value out, dropping a success value if there is one.
    ///
    /// The result is consumed afterwards, whichever side it was on.
    pub fn err(&mut self) -> Option<E> {
        match &mut self.payload {
            Payload::Err(err) => err.get().ok(),
            Payload::Ok(ok) => {
                if ok.release().is_some() {
                    log::trace!("Ok value discarded by `err`");
                }
                None
            }
        }
    }

    /// Move the success value out, reporting why it is unavailable.
    ///
    /// Unlike [`Self::ok`], an error value is left in place.
    pub fn try_ok(&mut self) -> Result<T, ResultError> {
        match &mut self.payload {
            Payload::Ok(ok) => ok.get(),
            Payload::Err(err) if err.is_void() => Err(ResultError::ConsumedValue),
            Payload::Err(_) => Err(ResultError::WrongVariant {
                expected: Variant::Ok,
                found: Variant::Err,
            }),
        }
    }

    /// Move the error value out, reporting why it is unavailable.
    ///
    /// Unlike [`Self::err`], a success value is left in place.
    pub fn try_err(&mut self) -> Result<E, ResultError> {
        match &mut self.payload {
            Payload::Err(err) => err.get(),
            Payload::Ok(ok) if ok.is_void() => Err(ResultError::ConsumedValue),
            Payload::Ok(_) => Err(ResultError::WrongVariant {
                expected: Variant::Err,
                found: Variant::Ok,
            }),
        }
    }

    /// Move the success value out, or return `default`.
    pub fn unwrap_or(&mut self, default: T) -> T {
        self.ok().unwrap_or(default)
    }

    pub fn unwrap_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.ok().unwrap_or_default()
    }
}

impl<T, E: fmt::Debug> OwningResult<T, E> {
    /// Move the success value out.
    ///
    /// # Panics
    ///
    /// Panics if the result holds an error or has already been consumed.
    #[track_caller]
    pub fn unwrap(&mut self) -> T {
        self.expect("called `OwningResult::unwrap()` on an `Err` value")
    }

    /// Move the success value out.
    ///
    /// # Panics
    ///
    /// Panics with `message` and the error if the result holds an error, or
    /// if it has already been consumed.
    #[track_caller]
    pub fn expect(&mut self, message: &str) -> T {
        match &mut self.payload {
            Payload::Ok(ok) => *ok.release().or_panic_with(ResultError::ConsumedValue),
            Payload::Err(err) => {
                let error = err.peek().or_panic_with(ResultError::ConsumedValue);
                ResultError::UnwrapOnError {
                    message: message.to_string(),
                    error: format!("{error:?}"),
                }
                .panic()
            }
        }
    }
}

impl<T: fmt::Debug, E> OwningResult<T, E> {
    /// Move the error value out.
    ///
    /// # Panics
    ///
    /// Panics if the result holds a success value or has already been
    /// consumed.
    #[track_caller]
    pub fn unwrap_err(&mut self) -> E {
        self.expect_err("called `OwningResult::unwrap_err()` on an `Ok` value")
    }

    /// Move the error value out.
    ///
    /// # Panics
    ///
    /// Panics with `message` and the value if the result holds a success
    /// value, or if it has already been consumed.
    #[track_caller]
    pub fn expect_err(&mut self, message: &str) -> E {
        match &mut self.payload {
            Payload::Err(err) => *err.release().or_panic_with(ResultError::ConsumedValue),
            Payload::Ok(ok) => {
                let value = ok.peek().or_panic_with(ResultError::ConsumedValue);
                ResultError::UnwrapErrOnOk {
                    message: message.to_string(),
                    value: format!("{value:?}"),
                }
                .panic()
            }
        }
    }
}

impl<T, E> From<OwningOk<T>> for OwningResult<T, E> {
    fn from(ok: OwningOk<T>) -> Self {
        Self {
            payload: Payload::Ok(ok),
        }
    }
}

impl<T, E> From<OwningErr<E>> for OwningResult<T, E> {
    fn from(err: OwningErr<E>) -> Self {
        Self {
            payload: Payload::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for OwningResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new_ok(value),
            Err(error) => Self::new_err(error),
        }
    }
}
