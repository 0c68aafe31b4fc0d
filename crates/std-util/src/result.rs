/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual={:?}", actual);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; error={}", err);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}
