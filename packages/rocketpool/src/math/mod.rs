pub mod fees;
pub mod safe_math;
pub mod safe_unwrap;
