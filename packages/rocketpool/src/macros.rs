#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if $assert {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

// Validate fee rates to be between the range 0..=FEE_BASE
#[macro_export]
macro_rules! validate_fee {
    ($env:expr, $($value:expr),+) => {
        {
            let mut valid = true;
            $(
                valid = valid && (0..=$crate::constants::FEE_BASE).contains(&$value);
            )+
            $crate::validate!($env, valid, $crate::error::ErrorCode::InvalidFee, "fee rate out of range")
        }
    };
}
