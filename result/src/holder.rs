//! Payload holders for the two sides of a result.
//!
//! Each side comes in two flavors:
//!
//! * An owning holder ([`OwningOk`], [`OwningErr`]) is the single owner of a
//!   boxed value. The value leaves the holder exactly once, through `get` or
//!   `release`, after which the holder is void.
//! * A borrowed holder ([`BorrowedOk`], [`BorrowedErr`]) only points at a
//!   value. It either holds a weak reference to a shared value, which dangles
//!   once every `Rc` is dropped, or a plain borrow of a live owning holder.
//!
//! The `Ok` and `Err` holders are identical apart from the side they tag, so
//! both are stamped out by the same macro.

use {
    ownres_error::error::ResultError,
    std::{
        fmt,
        ops::Deref,
        rc::{Rc, Weak},
    },
};

/// A value resolved through a borrowed holder.
///
/// Resolving a weak reference yields an `Rc` that keeps the value alive for
/// as long as this guard exists. Resolving a borrow of an owning holder just
/// hands back the borrow.
pub enum Ref<'a, T> {
    Borrowed(&'a T),
    Shared(Rc<T>),
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Ref::Borrowed(value) => value,
            Ref::Shared(value) => value,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: PartialEq> PartialEq<T> for Ref<'_, T> {
    fn eq(&self, other: &T) -> bool {
        **self == *other
    }
}

enum Reference<'a, T> {
    Local(&'a T),
    Shared(Weak<T>),
    // The owning side was consumed before the view was taken.
    Vacant,
}

impl<T> Clone for Reference<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Reference::Local(value) => Reference::Local(*value),
            Reference::Shared(weak) => Reference::Shared(weak.clone()),
            Reference::Vacant => Reference::Vacant,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Reference<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Local(value) => f.debug_tuple("Local").field(value).finish(),
            Reference::Shared(weak) => match weak.upgrade() {
                Some(value) => f.debug_tuple("Shared").field(&value).finish(),
                None => f.write_str("Dangling"),
            },
            Reference::Vacant => f.write_str("Vacant"),
        }
    }
}

macro_rules! holders {
    (
        side: $side:literal,
        $(#[$owning_meta:meta])*
        owning: $owning:ident,
        $(#[$borrowed_meta:meta])*
        borrowed: $borrowed:ident,
    ) => {
        $(#[$owning_meta])*
        #[derive(Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $owning<T> {
            value: Option<Box<T>>,
        }

        impl<T> $owning<T> {
            /// A holder with no value. Does not allocate.
            pub const fn void() -> Self {
                Self { value: None }
            }

            /// Take exclusive ownership of `value`.
            pub fn new(value: T) -> Self {
                Self {
                    value: Some(Box::new(value)),
                }
            }

            /// Take over an already allocated value. The allocation is kept
            /// as-is and handed back by [`Self::release`].
            pub fn from_box(value: Box<T>) -> Self {
                Self { value: Some(value) }
            }

            /// Take over the value in the caller's `slot`, leaving `None` in
            /// its place. An empty slot produces a void holder.
            pub fn take_from(slot: &mut Option<Box<T>>) -> Self {
                Self { value: slot.take() }
            }

            /// Move the value out of a holder of a compatible type.
            pub fn from_holder<U: Into<T>>(other: $owning<U>) -> Self {
                Self {
                    value: other.value.map(|value| Box::new((*value).into())),
                }
            }

            /// Returns `true` if the holder has no value, either because it
            /// was built void or because the value was moved out.
            pub fn is_void(&self) -> bool {
                self.value.is_none()
            }

            /// Move the value out of the holder.
            ///
            /// The holder is void afterwards, and every later call returns
            /// [`ResultError::ConsumedValue`].
            pub fn get(&mut self) -> Result<T, ResultError> {
                self.release()
                    .map(|value| *value)
                    .ok_or(ResultError::ConsumedValue)
            }

            /// Move the owned allocation out of the holder. Returns `None`
            /// once the holder is void.
            pub fn release(&mut self) -> Option<Box<T>> {
                let released = self.value.take();
                if released.is_some() {
                    log::trace!("{} value released from its holder", $side);
                }
                released
            }

            /// Read the value without consuming it.
            pub fn peek(&self) -> Option<&T> {
                self.value.as_deref()
            }

            pub fn into_inner(self) -> Option<T> {
                self.value.map(|value| *value)
            }

            /// A borrowed view of this holder. The view is vacant if the
            /// holder is void.
            pub fn borrow(&self) -> $borrowed<'_, T> {
                match self.value.as_deref() {
                    Some(value) => $borrowed {
                        reference: Reference::Local(value),
                    },
                    None => $borrowed::vacant(),
                }
            }
        }

        impl<T> Default for $owning<T> {
            fn default() -> Self {
                Self::void()
            }
        }

        impl<T> From<Box<T>> for $owning<T> {
            fn from(value: Box<T>) -> Self {
                Self::from_box(value)
            }
        }

        $(#[$borrowed_meta])*
        pub struct $borrowed<'a, T> {
            reference: Reference<'a, T>,
        }

        impl<'a, T> $borrowed<'a, T> {
            /// Point at a shared value without extending its lifetime.
            pub fn new(shared: &Rc<T>) -> Self {
                Self {
                    reference: Reference::Shared(Rc::downgrade(shared)),
                }
            }

            pub(crate) const fn vacant() -> Self {
                Self {
                    reference: Reference::Vacant,
                }
            }

            /// Resolve the referenced value.
            ///
            /// Fails with [`ResultError::DanglingReference`] once every owner
            /// of a shared value is gone, and with
            /// [`ResultError::ConsumedValue`] if the view was taken of an
            /// already consumed holder.
            pub fn try_get(&self) -> Result<Ref<'a, T>, ResultError> {
                match &self.reference {
                    Reference::Local(value) => Ok(Ref::Borrowed(*value)),
                    Reference::Shared(weak) => weak
                        .upgrade()
                        .map(Ref::Shared)
                        .ok_or(ResultError::DanglingReference),
                    Reference::Vacant => Err(ResultError::ConsumedValue),
                }
            }

            /// Resolve the referenced value, panicking where
            /// [`Self::try_get`] would fail.
            #[track_caller]
            pub fn get(&self) -> Ref<'a, T> {
                match self.try_get() {
                    Ok(value) => value,
                    Err(err) => err.panic(),
                }
            }

            /// Returns `true` if this points at a shared value whose owners
            /// have all been dropped.
            pub fn is_dangling(&self) -> bool {
                match &self.reference {
                    Reference::Shared(weak) => weak.strong_count() == 0,
                    Reference::Local(_) | Reference::Vacant => false,
                }
            }

            /// Returns `true` if this is a view of a consumed holder.
            pub fn is_vacant(&self) -> bool {
                matches!(self.reference, Reference::Vacant)
            }
        }

        impl<T> Clone for $borrowed<'_, T> {
            fn clone(&self) -> Self {
                Self {
                    reference: self.reference.clone(),
                }
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $borrowed<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($borrowed))
                    .field(&self.reference)
                    .finish()
            }
        }

        impl<T> From<&Rc<T>> for $borrowed<'_, T> {
            fn from(shared: &Rc<T>) -> Self {
                Self::new(shared)
            }
        }
    };
}

holders! {
    side: "Ok",
    /// The single owner of a success value.
    owning: OwningOk,
    /// A non-owning reference to a success value.
    borrowed: BorrowedOk,
}

holders! {
    side: "Err",
    /// The single owner of an error value.
    owning: OwningErr,
    /// A non-owning reference to an error value.
    borrowed: BorrowedErr,
}
