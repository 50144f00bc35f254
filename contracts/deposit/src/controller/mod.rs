pub mod assign;
pub mod deposit;
