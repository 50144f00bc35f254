use soroban_sdk::{ log, panic_with_error, Env };

use crate::error::ErrorCode;

pub trait SafeUnwrap {
    type Item;

    /// Returns the value or aborts the invocation with a contract error, reverting all state
    fn safe_unwrap(self, env: &Env) -> Self::Item;
}

impl<T> SafeUnwrap for Option<T> {
    type Item = T;

    #[track_caller]
    #[inline(always)]
    fn safe_unwrap(self, env: &Env) -> T {
        match self {
            Some(v) => v,
            None => {
                log!(env, "Unwrap error thrown at line {}", line!());
                panic_with_error!(env, ErrorCode::FailedUnwrap);
            }
        }
    }
}

impl<T> SafeUnwrap for Result<T, ErrorCode> {
    type Item = T;

    #[track_caller]
    #[inline(always)]
    fn safe_unwrap(self, env: &Env) -> T {
        match self {
            Ok(v) => v,
            Err(error_code) => panic_with_error!(env, error_code),
        }
    }
}
