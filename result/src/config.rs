//! Configuration for result checks.

/// How a failed check is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panic on the first failed check.
    pub panic: bool,
    /// Log every failed check at `error` level. Ignored when `panic` is set.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panic: true,
            verbose: true,
        }
    }
}

/// Report a failed check according to the config. Evaluates to `false`.
macro_rules! throw {
    ($config:expr, $($arg:tt)+) => {{
        let message = format!($($arg)+);
        if $config.panic {
            panic!("{}", message);
        }
        if $config.verbose {
            log::error!("{}", message);
        }
        false
    }};
}

/// Compare an expected value against the actual one, reporting a mismatch
/// through `throw!`. Evaluates to whether the two matched.
macro_rules! compare {
    ($config:expr, $name:expr, $expected:expr, $actual:expr $(,)?) => {{
        let expected = $expected;
        let actual = $actual;
        if expected == actual {
            true
        } else {
            $crate::config::throw!(
                $config,
                "CHECK FAILURE: {}\n    Expected: {:?}\n    Actual:   {:?}",
                $name,
                expected,
                actual,
            )
        }
    }};
}

pub(crate) use {compare, throw};
