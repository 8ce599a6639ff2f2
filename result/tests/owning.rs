use {
    ownres_result::{OwningErr, OwningOk, OwningResult, ResultError, Variant},
    std::cell::Cell,
};

#[test]
fn test_ok_is_consumed_once() {
    let mut result: OwningResult<i32, String> = OwningOk::new(10).into();
    assert!(result.is_ok());
    assert!(!result.is_err());
    assert!(!result.is_consumed());

    assert_eq!(result.ok(), Some(10));
    assert!(result.is_consumed());
    assert_eq!(result.ok(), None);

    // The discriminant survives consumption.
    assert!(result.is_ok());
    assert_eq!(result.variant(), Variant::Ok);
}

#[test]
fn test_err_is_consumed_once() {
    let mut result: OwningResult<i32, String> = OwningErr::new(String::from("bad")).into();
    assert!(result.is_err());
    assert!(!result.is_ok());

    assert_eq!(result.err().as_deref(), Some("bad"));
    assert_eq!(result.err(), None);
    assert!(result.is_err());
    assert!(result.is_consumed());
}

#[test]
fn test_ok_on_err_discards_error() {
    let mut result = OwningResult::<i32, String>::new_err(String::from("bad"));

    assert_eq!(result.ok(), None);
    assert!(result.is_consumed());
    assert_eq!(result.err(), None);
}

#[test]
fn test_err_on_ok_discards_value() {
    let mut result = OwningResult::<i32, String>::new_ok(1);

    assert_eq!(result.err(), None);
    assert!(result.is_consumed());
    assert_eq!(result.ok(), None);
}

#[test]
fn test_try_ok_reports_reason() {
    let mut err = OwningResult::<i32, &str>::new_err("bad");
    assert_eq!(
        err.try_ok(),
        Err(ResultError::WrongVariant {
            expected: Variant::Ok,
            found: Variant::Err,
        })
    );
    // The error is still there.
    assert!(!err.is_consumed());
    assert_eq!(err.try_err(), Ok("bad"));
    assert_eq!(err.try_err(), Err(ResultError::ConsumedValue));
    assert_eq!(err.try_ok(), Err(ResultError::ConsumedValue));

    let mut ok = OwningResult::<i32, &str>::new_ok(3);
    assert_eq!(
        ok.try_err(),
        Err(ResultError::WrongVariant {
            expected: Variant::Err,
            found: Variant::Ok,
        })
    );
    assert_eq!(ok.try_ok(), Ok(3));
    assert_eq!(ok.try_ok(), Err(ResultError::ConsumedValue));
}

#[test]
fn test_unwrap_ok() {
    let mut result = OwningResult::<i32, String>::new_ok(10);
    assert_eq!(result.unwrap(), 10);
    assert!(result.is_consumed());
}

#[test]
#[should_panic(expected = "called `OwningResult::unwrap()` on an `Err` value: \"bad\"")]
fn test_unwrap_err_panics() {
    let mut result = OwningResult::<i32, String>::new_err(String::from("bad"));
    result.unwrap();
}

#[test]
#[should_panic(expected = "value has already been consumed")]
fn test_unwrap_consumed_panics() {
    let mut result = OwningResult::<i32, String>::new_ok(10);
    assert_eq!(result.ok(), Some(10));
    result.unwrap();
}

#[test]
#[should_panic(expected = "config file missing: NotFound")]
fn test_expect_attaches_message() {
    #[derive(Debug)]
    enum LoadError {
        NotFound,
    }

    let mut result = OwningResult::<u32, LoadError>::new_err(LoadError::NotFound);
    result.expect("config file missing");
}

#[test]
fn test_unwrap_err_and_expect_err() {
    let mut result = OwningResult::<i32, String>::new_err(String::from("bad"));
    assert_eq!(result.unwrap_err(), "bad");

    let mut result = OwningResult::<i32, String>::new_err(String::from("worse"));
    assert_eq!(result.expect_err("should have failed"), "worse");
}

#[test]
#[should_panic(expected = "should have failed: 7")]
fn test_expect_err_on_ok_panics() {
    let mut result = OwningResult::<i32, String>::new_ok(7);
    result.expect_err("should have failed");
}

#[test]
fn test_unwrap_or_defaults() {
    let err = OwningResult::<i32, String>::new_err(String::from("bad"));
    assert_eq!(err.map_or(0, |value| value), 0);

    let mut err = OwningResult::<i32, String>::new_err(String::from("bad"));
    assert_eq!(err.unwrap_or_default(), 0);
    assert!(err.is_consumed());

    let mut ok = OwningResult::<i32, String>::new_ok(4);
    assert_eq!(ok.unwrap_or(9), 4);
    assert_eq!(ok.unwrap_or(9), 9);
}

#[test]
fn test_map_sums_vector() {
    let result = OwningResult::<Vec<f64>, String>::new_ok(vec![1.0; 10]);

    let mut sum = result.map(|values| values.iter().sum::<f64>());
    assert!(sum.is_ok());
    assert_eq!(sum.ok(), Some(10.0));
}

#[test]
fn test_map_passes_error_through() {
    let result = OwningResult::<i32, String>::new_err(String::from("bad"));

    let mut mapped = result.map(|value| value * 2);
    assert!(mapped.is_err());
    assert_eq!(mapped.err().as_deref(), Some("bad"));
}

#[test]
fn test_map_err_leaves_ok_untouched() {
    let mut ok = OwningResult::<i32, String>::new_ok(5).map_err(|error| error.len());
    assert_eq!(ok.ok(), Some(5));

    let mut err = OwningResult::<i32, String>::new_err(String::from("bad")).map_err(|e| e.len());
    assert_eq!(err.err(), Some(3));
}

#[test]
fn test_map_keeps_consumed_state() {
    let mut result = OwningResult::<i32, String>::new_ok(1);
    result.ok();

    let mapped = result.map(|value| value + 1);
    assert!(mapped.is_ok());
    assert!(mapped.is_consumed());

    let mut result = OwningResult::<i32, String>::new_err(String::from("bad"));
    result.err();
    let mapped = result.map_err(|error| error.len());
    assert!(mapped.is_err());
    assert!(mapped.is_consumed());
}

#[test]
fn test_map_or() {
    let ok = OwningResult::<&str, i32>::new_ok("four");
    assert_eq!(ok.map_or(42, |value| value.len()), 4);

    let err = OwningResult::<&str, i32>::new_err(1);
    assert_eq!(err.map_or(42, |value| value.len()), 42);

    let mut consumed = OwningResult::<&str, i32>::new_ok("four");
    consumed.ok();
    assert_eq!(consumed.map_or(42, |value| value.len()), 42);
}

#[test]
fn test_map_or_else() {
    let ok = OwningResult::<i32, String>::new_ok(3);
    assert_eq!(ok.map_or_else(|error| error.len() as i32, |v| v * 2), Some(6));

    let err = OwningResult::<i32, String>::new_err(String::from("four"));
    assert_eq!(err.map_or_else(|error| error.len() as i32, |v| v * 2), Some(4));

    let mut consumed = OwningResult::<i32, String>::new_err(String::from("four"));
    consumed.err();
    assert_eq!(
        consumed.map_or_else(|error| error.len() as i32, |v| v * 2),
        None
    );
}

#[test]
fn test_is_ok_and_is_err_and() {
    let mut ok = OwningResult::<i32, String>::new_ok(2);
    assert!(ok.is_ok_and(|value| *value > 1));
    assert!(!ok.is_ok_and(|value| *value > 5));
    assert!(!ok.is_err_and(|_| true));
    // Reading through the predicate does not consume.
    assert!(!ok.is_consumed());

    ok.ok();
    assert!(!ok.is_ok_and(|_| true));

    let err = OwningResult::<i32, String>::new_err(String::from("bad"));
    assert!(err.is_err_and(|error| error == "bad"));
    assert!(!err.is_ok_and(|_| true));
}

#[test]
fn test_inspect_chains_without_consuming() {
    let seen = Cell::new(0);
    let seen_err = Cell::new(false);

    let mut result = OwningResult::<i32, String>::new_ok(4)
        .inspect(|value| seen.set(*value))
        .inspect_err(|_| seen_err.set(true));

    assert_eq!(seen.get(), 4);
    assert!(!seen_err.get());
    assert_eq!(result.ok(), Some(4));

    let mut result = OwningResult::<i32, String>::new_err(String::from("bad"))
        .inspect(|value| seen.set(*value * 10))
        .inspect_err(|_| seen_err.set(true));

    assert_eq!(seen.get(), 4);
    assert!(seen_err.get());
    assert!(result.err().is_some());
}

#[test]
fn test_and_then_or_else() {
    let parse = |text: &str| -> OwningResult<i32, String> {
        text.parse::<i32>().map_err(|e| e.to_string()).into()
    };

    let mut chained = OwningResult::<&str, String>::new_ok("12").and_then(parse);
    assert_eq!(chained.ok(), Some(12));

    let mut failed = OwningResult::<&str, String>::new_ok("twelve").and_then(parse);
    assert!(failed.is_err());
    assert!(failed.err().is_some());

    let mut recovered =
        OwningResult::<i32, String>::new_err(String::from("bad")).or_else(|error| {
            OwningResult::<i32, ()>::new_ok(error.len() as i32)
        });
    assert_eq!(recovered.ok(), Some(3));
}

#[test]
fn test_std_conversions() {
    let mut from_std: OwningResult<i32, String> = Ok::<i32, String>(1).into();
    assert_eq!(from_std.ok(), Some(1));

    let into_std = OwningResult::<i32, String>::new_err(String::from("bad")).into_std();
    assert_eq!(into_std, Some(Err(String::from("bad"))));

    let mut consumed = OwningResult::<i32, String>::new_ok(1);
    consumed.ok();
    assert_eq!(consumed.into_std(), None);
}

#[test]
fn test_result_drops_unconsumed_payload() {
    let shared = std::rc::Rc::new(());
    let result = OwningResult::<std::rc::Rc<()>, String>::new_ok(std::rc::Rc::clone(&shared));
    assert_eq!(std::rc::Rc::strong_count(&shared), 2);

    drop(result);
    assert_eq!(std::rc::Rc::strong_count(&shared), 1);
}

#[test]
fn test_release_from_inner_ok() {
    let mut ok = OwningOk::new(10);
    assert_eq!(ok.get(), Ok(10));
    assert!(ok.release().is_none());

    let mut result: OwningResult<i32, String> = OwningOk::new(10).into();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 10);
}
