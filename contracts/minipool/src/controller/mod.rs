pub mod deposit;
pub mod staking;
pub mod withdraw;
