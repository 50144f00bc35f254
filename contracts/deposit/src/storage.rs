use rocketpool::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, RocketResult },
    math::safe_math::SafeMath,
};
use soroban_sdk::{
    contracttype,
    log,
    panic_with_error,
    xdr::ToXdr,
    Address,
    BytesN,
    Env,
    Symbol,
    Vec,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Config,
    Deposit(BytesN<32>),
    DepositNonce(Address, Address),
    StakingPoolAmount(BytesN<32>, Address),
    Queue(Symbol),
    QueueItem(Symbol, u64),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositParams {
    /// Token standing in for ether
    pub ether_token: Address,
    /// Custody vault for queued ether
    pub vault: Address,
    /// Node availability and minipool selection
    pub node_set: Address,
    /// Ether matched to a single minipool in one assignment
    pub chunk_size: i128,
    /// Maximum chunks assigned per call
    pub chunk_assign_max: u32,
    pub min_deposit: i128,
    pub max_deposit: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub ether_token: Address,
    pub vault: Address,
    pub node_set: Address,
    pub chunk_size: i128,
    pub chunk_assign_max: u32,
    pub min_deposit: i128,
    pub max_deposit: i128,
    pub deposits_enabled: bool,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Deposit: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    config
}

// ################################################################
//                             Deposits
// ################################################################

/// A user deposit waiting in, or matched out of, a duration queue.
///
/// `total_amount == queued_amount + staking_amount` holds after every call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub user: Address,
    pub group: Address,
    pub duration_id: Symbol,
    pub total_amount: i128,
    /// Not yet matched to a minipool
    pub queued_amount: i128,
    /// Matched and forwarded to minipools
    pub staking_amount: i128,
    /// Minipools holding part of the staking amount, in first-match order
    pub staking_pools: Vec<Address>,
    pub created: u64,
}

pub fn has_deposit(env: &Env, deposit_id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Deposit(deposit_id.clone()))
}

pub fn get_deposit(env: &Env, deposit_id: &BytesN<32>) -> Option<Deposit> {
    let key = DataKey::Deposit(deposit_id.clone());
    let deposit = env.storage().persistent().get::<_, Deposit>(&key);

    if deposit.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    deposit
}

pub fn save_deposit(env: &Env, deposit_id: &BytesN<32>, deposit: &Deposit) {
    let key = DataKey::Deposit(deposit_id.clone());
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_staking_pool_amount(env: &Env, deposit_id: &BytesN<32>, minipool: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::StakingPoolAmount(deposit_id.clone(), minipool.clone()))
        .unwrap_or(0)
}

pub fn save_staking_pool_amount(
    env: &Env,
    deposit_id: &BytesN<32>,
    minipool: &Address,
    amount: i128
) {
    let key = DataKey::StakingPoolAmount(deposit_id.clone(), minipool.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_deposit_nonce(env: &Env, user: &Address, group: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::DepositNonce(user.clone(), group.clone()))
        .unwrap_or(0)
}

/// Returns the nonce for the next deposit of `user` in `group` and advances it.
pub fn next_deposit_nonce(env: &Env, user: &Address, group: &Address) -> RocketResult<u64> {
    let key = DataKey::DepositNonce(user.clone(), group.clone());
    let nonce = get_deposit_nonce(env, user, group);

    env.storage().persistent().set(&key, &nonce.safe_add(1, env)?);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(nonce)
}

pub fn generate_deposit_id(env: &Env, user: &Address, group: &Address, nonce: u64) -> BytesN<32> {
    let preimage = (user.clone(), group.clone(), nonce).to_xdr(env);
    env.crypto().sha256(&preimage).to_bytes()
}

// ################################################################

pub mod utils {
    use super::*;

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn get_admin(env: &Env) -> Address {
        let admin = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| {
                log!(env, "Deposit: Admin not set");
                panic_with_error!(env, ErrorCode::NotInitialized)
            });
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        admin
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
