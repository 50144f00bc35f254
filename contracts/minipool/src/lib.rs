#![no_std]

mod contract;
mod controller;
mod events;
mod minipool;
mod msg;
mod status;
mod storage;

pub use contract::{ RocketMinipool, RocketMinipoolClient };
pub use msg::ConfigResponse;
pub use storage::{ Config, MinipoolDeposit, MinipoolStatus, StakingSnapshot, StakingWithdrawal, StatusInfo };

#[cfg(test)]
mod tests;
