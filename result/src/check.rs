//! Check system for validating results.

use {
    crate::{
        borrowed::BorrowedResult,
        config::{compare, throw, Config},
        owning::OwningResult,
    },
    ownres_error::error::Variant,
    std::fmt::Debug,
};

enum CheckType<'a, T, E> {
    /// Check which side the result is on.
    Variant(Variant),
    /// Check whether the payload has been moved out.
    Consumed(bool),
    /// Check the success value.
    OkValue(&'a T),
    /// Check the error value.
    ErrValue(&'a E),
}

pub struct Check<'a, T, E> {
    check: CheckType<'a, T, E>,
}

impl<'a, T, E> Check<'a, T, E> {
    fn new(check: CheckType<'a, T, E>) -> Self {
        Self { check }
    }

    /// Assert that the result is on the `Ok` side.
    pub fn ok() -> Self {
        Check::new(CheckType::Variant(Variant::Ok))
    }

    /// Assert that the result is on the `Err` side.
    pub fn err() -> Self {
        Check::new(CheckType::Variant(Variant::Err))
    }

    /// Assert that the payload has been moved out.
    pub fn consumed() -> Self {
        Check::new(CheckType::Consumed(true))
    }

    /// Assert that the payload is still in place.
    pub fn unconsumed() -> Self {
        Check::new(CheckType::Consumed(false))
    }

    /// Assert that the result holds this success value.
    pub fn ok_value(value: &'a T) -> Self {
        Check::new(CheckType::OkValue(value))
    }

    /// Assert that the result holds this error value.
    pub fn err_value(error: &'a E) -> Self {
        Check::new(CheckType::ErrValue(error))
    }
}

impl<T, E> BorrowedResult<'_, T, E>
where
    T: PartialEq + Debug,
    E: PartialEq + Debug,
{
    /// Perform checks on the viewed result. Returns `true` if every check
    /// passed.
    ///
    /// Failed checks are reported according to `config`: a panic on the
    /// first failure, an `error` log line per failure, or nothing at all.
    pub fn run_checks(&self, checks: &[Check<T, E>], config: &Config) -> bool {
        let c = config;
        let mut pass = true;
        for check in checks {
            match &check.check {
                CheckType::Variant(variant) => {
                    let check_variant = *variant;
                    let actual_variant = self.variant();
                    pass &= compare!(c, "variant", check_variant, actual_variant);
                }
                CheckType::Consumed(consumed) => {
                    let check_consumed = *consumed;
                    let actual_consumed = self.is_consumed();
                    pass &= compare!(c, "consumed", check_consumed, actual_consumed);
                }
                CheckType::OkValue(value) => match self.try_ok() {
                    Ok(actual_value) => {
                        pass &= compare!(c, "ok_value", *value, &*actual_value);
                    }
                    Err(err) => {
                        pass &= throw!(c, "CHECK FAILURE: ok_value: {}", err);
                    }
                },
                CheckType::ErrValue(error) => match self.try_err() {
                    Ok(actual_error) => {
                        pass &= compare!(c, "err_value", *error, &*actual_error);
                    }
                    Err(err) => {
                        pass &= throw!(c, "CHECK FAILURE: err_value: {}", err);
                    }
                },
            }
        }
        pass
    }
}

impl<T, E> OwningResult<T, E>
where
    T: PartialEq + Debug,
    E: PartialEq + Debug,
{
    /// Perform checks on the result without consuming it.
    /// See [`BorrowedResult::run_checks`].
    pub fn run_checks(&self, checks: &[Check<T, E>], config: &Config) -> bool {
        self.as_ref().run_checks(checks, config)
    }
}
