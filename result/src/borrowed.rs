//! Read-only result views.

use {
    crate::holder::{BorrowedErr, BorrowedOk, Ref},
    ownres_error::error::{ResultError, Variant},
    std::fmt,
};

enum View<'a, T, E> {
    Ok(BorrowedOk<'a, T>),
    Err(BorrowedErr<'a, E>),
}

/// A result that never owns its payload.
///
/// Built either from a borrowed holder or through
/// [`OwningResult::as_ref`](crate::OwningResult::as_ref). Views of an owning
/// result are tied to its lifetime by the borrow checker, while views of a
/// shared value may dangle once the value is dropped. Every operation here
/// leaves the underlying value where it is.
pub struct BorrowedResult<'a, T, E> {
    view: View<'a, T, E>,
}

impl<'a, T, E> BorrowedResult<'a, T, E> {
    pub fn variant(&self) -> Variant {
        match self.view {
            View::Ok(_) => Variant::Ok,
            View::Err(_) => Variant::Err,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.variant() == Variant::Ok
    }

    pub fn is_err(&self) -> bool {
        self.variant() == Variant::Err
    }

    /// Returns `true` if this views an owning result whose payload was
    /// already moved out.
    pub fn is_consumed(&self) -> bool {
        match &self.view {
            View::Ok(ok) => ok.is_vacant(),
            View::Err(err) => err.is_vacant(),
        }
    }

    /// Returns `true` if the referenced shared value has been dropped.
    pub fn is_dangling(&self) -> bool {
        match &self.view {
            View::Ok(ok) => ok.is_dangling(),
            View::Err(err) => err.is_dangling(),
        }
    }

    pub fn is_ok_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
        self.ok().is_some_and(|value| f(&*value))
    }

    pub fn is_err_and(&self, f: impl FnOnce(&E) -> bool) -> bool {
        self.err().is_some_and(|error| f(&*error))
    }

    /// Resolve the success value, reporting why it is unavailable.
    pub fn try_ok(&self) -> Result<Ref<'a, T>, ResultError> {
        match &self.view {
            View::Ok(ok) => ok.try_get(),
            View::Err(_) => Err(ResultError::WrongVariant {
                expected: Variant::Ok,
                found: Variant::Err,
            }),
        }
    }

    /// Resolve the error value, reporting why it is unavailable.
    pub fn try_err(&self) -> Result<Ref<'a, E>, ResultError> {
        match &self.view {
            View::Err(err) => err.try_get(),
            View::Ok(_) => Err(ResultError::WrongVariant {
                expected: Variant::Err,
                found: Variant::Ok,
            }),
        }
    }

    pub fn ok(&self) -> Option<Ref<'a, T>> {
        self.try_ok().ok()
    }

    pub fn err(&self) -> Option<Ref<'a, E>> {
        self.try_err().ok()
    }

    /// Apply `f` to the success value, or return `default` if there is none
    /// to read.
    pub fn map_or<U>(&self, default: U, f: impl FnOnce(&T) -> U) -> U {
        match self.ok() {
            Some(value) => f(&*value),
            None => default,
        }
    }

    pub fn inspect(&self, f: impl FnOnce(&T)) -> &Self {
        if let Some(value) = self.ok() {
            f(&*value);
        }
        self
    }

    pub fn inspect_err(&self, f: impl FnOnce(&E)) -> &Self {
        if let Some(error) = self.err() {
            f(&*error);
        }
        self
    }
}

impl<'a, T, E> From<BorrowedOk<'a, T>> for BorrowedResult<'a, T, E> {
    fn from(ok: BorrowedOk<'a, T>) -> Self {
        Self { view: View::Ok(ok) }
    }
}

impl<'a, T, E> From<BorrowedErr<'a, E>> for BorrowedResult<'a, T, E> {
    fn from(err: BorrowedErr<'a, E>) -> Self {
        Self {
            view: View::Err(err),
        }
    }
}

impl<T, E> Clone for BorrowedResult<'_, T, E> {
    fn clone(&self) -> Self {
        let view = match &self.view {
            View::Ok(ok) => View::Ok(ok.clone()),
            View::Err(err) => View::Err(err.clone()),
        };
        Self { view }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for BorrowedResult<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.view {
            View::Ok(ok) => f.debug_tuple("BorrowedResult").field(ok).finish(),
            View::Err(err) => f.debug_tuple("BorrowedResult").field(err).finish(),
        }
    }
}
