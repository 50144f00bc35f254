#![no_std]

mod contract;
mod controller;
mod deposit;
mod events;
mod msg;
mod queue;
mod storage;

pub use contract::{ RocketDeposit, RocketDepositClient };
pub use msg::{ ConfigResponse, QueueResponse };
pub use storage::{ Config, Deposit, DepositParams };
