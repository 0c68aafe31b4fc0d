/// Unwraps a `Some`.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None"),
        }
    };
}

/// Asserts the expression is `None`.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            Some(actual) => panic!("expected `None`; actual=Some({:?})", actual),
        }
    };
}
