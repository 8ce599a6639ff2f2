//! Lazily evaluated computations.
//!
//! A thunk holds a computation that takes no arguments. The computation runs
//! the first time the value is asked for, and every later request is served
//! from the cached result. Capture whatever the computation needs in the
//! closure.

use std::{
    cell::{Cell, OnceCell},
    fmt,
    ops::Deref,
};

/// A value computed on first use.
///
/// `Thunk` is not `Sync`. Use `SyncThunk` (behind the `sync` feature) when
/// the value has to be forced from several threads.
///
/// If the computation panics, the thunk is poisoned and every later
/// [`Thunk::force`] panics as well.
pub struct Thunk<R, F = fn() -> R> {
    value: OnceCell<R>,
    init: Cell<Option<F>>,
}

impl<R, F: FnOnce() -> R> Thunk<R, F> {
    pub const fn new(f: F) -> Self {
        Self {
            value: OnceCell::new(),
            init: Cell::new(Some(f)),
        }
    }

    /// Run the computation if it has not run yet, and return its result.
    pub fn force(&self) -> &R {
        self.value.get_or_init(|| match self.init.take() {
            Some(f) => {
                log::trace!("Evaluating thunk");
                f()
            }
            None => panic!("Thunk instance has previously been poisoned"),
        })
    }

    /// Return a copy of the result, evaluating it first if needed.
    pub fn call(&self) -> R
    where
        R: Clone,
    {
        self.force().clone()
    }
}

impl<R, F> Thunk<R, F> {
    /// The cached result, without running the computation.
    pub fn get(&self) -> Option<&R> {
        self.value.get()
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// The cached result, if the computation has run.
    pub fn into_value(self) -> Option<R> {
        self.value.into_inner()
    }
}

impl<R, F: FnOnce() -> R> Deref for Thunk<R, F> {
    type Target = R;

    fn deref(&self) -> &R {
        self.force()
    }
}

impl<R: fmt::Debug, F> fmt::Debug for Thunk<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_tuple("Thunk");
        match self.get() {
            Some(value) => d.field(value),
            None => d.field(&format_args!("<unevaluated>")),
        };
        d.finish()
    }
}

#[cfg(feature = "sync")]
pub use sync::SyncThunk;

#[cfg(feature = "sync")]
mod sync {
    use std::{
        fmt,
        ops::Deref,
        sync::{Mutex, OnceLock, PoisonError},
    };

    /// A value computed on first use, safe to force from several threads.
    ///
    /// The computation runs at most once. Threads racing on the first
    /// [`SyncThunk::force`] block until the winner has stored the result.
    pub struct SyncThunk<R, F = fn() -> R> {
        value: OnceLock<R>,
        init: Mutex<Option<F>>,
    }

    impl<R, F: FnOnce() -> R> SyncThunk<R, F> {
        pub const fn new(f: F) -> Self {
            Self {
                value: OnceLock::new(),
                init: Mutex::new(Some(f)),
            }
        }

        pub fn force(&self) -> &R {
            self.value.get_or_init(|| {
                let init = self
                    .init
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                match init {
                    Some(f) => {
                        log::trace!("Evaluating sync thunk");
                        f()
                    }
                    None => panic!("SyncThunk instance has previously been poisoned"),
                }
            })
        }
    }

    impl<R, F> SyncThunk<R, F> {
        pub fn get(&self) -> Option<&R> {
            self.value.get()
        }

        pub fn is_evaluated(&self) -> bool {
            self.value.get().is_some()
        }
    }

    impl<R, F: FnOnce() -> R> Deref for SyncThunk<R, F> {
        type Target = R;

        fn deref(&self) -> &R {
            self.force()
        }
    }

    impl<R: fmt::Debug, F> fmt::Debug for SyncThunk<R, F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut d = f.debug_tuple("SyncThunk");
            match self.get() {
                Some(value) => d.field(value),
                None => d.field(&format_args!("<unevaluated>")),
            };
            d.finish()
        }
    }
}
