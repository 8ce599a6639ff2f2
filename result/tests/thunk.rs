use {
    ownres_result::Thunk,
    std::{any::Any, cell::Cell, panic::AssertUnwindSafe},
};

#[test]
fn test_thunk_evaluates_once() {
    let calls = Cell::new(0);
    let thunk = Thunk::new(|| {
        calls.set(calls.get() + 1);
        vec![1.0f64; 10].iter().sum::<f64>()
    });

    assert!(!thunk.is_evaluated());
    assert_eq!(calls.get(), 0);

    assert_eq!(*thunk.force(), 10.0);
    assert_eq!(*thunk.force(), 10.0);
    assert_eq!(thunk.call(), 10.0);
    assert_eq!(*thunk, 10.0);

    assert!(thunk.is_evaluated());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_thunk_get_does_not_evaluate() {
    let thunk = Thunk::new(|| String::from("lazy"));
    assert!(thunk.get().is_none());

    thunk.force();
    assert_eq!(thunk.get().map(String::as_str), Some("lazy"));
    assert_eq!(thunk.into_value().as_deref(), Some("lazy"));
}

#[test]
fn test_thunk_into_value_unevaluated() {
    let thunk = Thunk::new(|| 1);
    assert_eq!(thunk.into_value(), None);
}

#[test]
fn test_thunk_debug() {
    let thunk = Thunk::new(|| 5);
    assert_eq!(format!("{thunk:?}"), "Thunk(<unevaluated>)");
    thunk.force();
    assert_eq!(format!("{thunk:?}"), "Thunk(5)");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default()
}

#[test]
fn test_thunk_poisoned_after_panic() {
    let thunk = Thunk::new(|| -> i32 { panic!("computation failed") });

    let first = std::panic::catch_unwind(AssertUnwindSafe(|| *thunk.force()));
    assert_eq!(panic_message(&*first.unwrap_err()), "computation failed");

    let second = std::panic::catch_unwind(AssertUnwindSafe(|| *thunk.force()));
    assert!(panic_message(&*second.unwrap_err()).contains("poisoned"));
    assert!(!thunk.is_evaluated());
}

#[cfg(feature = "sync")]
#[test]
fn test_sync_thunk_evaluates_once_across_threads() {
    use {
        ownres_result::SyncThunk,
        std::sync::atomic::{AtomicUsize, Ordering},
    };

    static CALLS: AtomicUsize = AtomicUsize::new(0);
    static THUNK: SyncThunk<usize> = SyncThunk::new(|| {
        CALLS.fetch_add(1, Ordering::SeqCst);
        42
    });

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| *THUNK.force()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 42);
    }

    assert!(THUNK.is_evaluated());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}
