#![no_std]

pub mod constants;
pub mod error;
pub mod interfaces;
pub mod macros;
pub mod math;
