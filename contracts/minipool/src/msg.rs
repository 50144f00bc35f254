use soroban_sdk::{ contracttype, Address };

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub admin: Address,
    pub config: Config,
}
