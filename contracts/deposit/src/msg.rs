use soroban_sdk::{ contracttype, Address };

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub admin: Address,
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueResponse {
    /// Sum of the queued amounts of every deposit in the queue
    pub balance: i128,
    pub length: u64,
}
