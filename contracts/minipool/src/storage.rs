use rocketpool::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, RocketResult },
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, BytesN, Env, Symbol, Vec };

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Config,
    Status,
    NodeDeposit,
    UserDepositTotal,
    DepositIds,
    Deposit(BytesN<32>),
    Staking,
    StakingWithdrawal(BytesN<32>),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Node operator owning the minipool
    pub node: Address,
    /// Deposit queue, the only caller allowed to account user deposits
    pub deposit_contract: Address,
    pub ether_token: Address,
    /// Token paid out once the minipool has withdrawn from staking
    pub reward_token: Address,
    pub protocol_fee_address: Address,
    /// Receives the pooled ether when staking starts
    pub staking_address: Address,
    pub duration_id: Symbol,
    /// Ether needed before the minipool can launch, node deposit included
    pub launch_amount: i128,
    pub node_deposit_amount: i128,
    /// Node fee charged on user rewards, in basis points
    pub node_fee: i128,
    /// Seconds the minipool may wait for launch before depositors can refund
    pub launch_timeout: u64,
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
            log!(env, "Minipool: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    config
}

// ################################################################
//                             Status
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MinipoolStatus {
    /// Waiting for the node deposit and user deposits
    Initialised = 0,
    /// Fully funded, waiting for the node to stake
    PreLaunch = 1,
    Staking = 2,
    /// Staking, exit requested
    LoggedOut = 3,
    /// Staking result settled, users may withdraw
    Withdrawn = 4,
    Closed = 5,
    /// Launch timed out, users may refund
    TimedOut = 6,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusInfo {
    pub status: MinipoolStatus,
    /// Ledger time of the last status change
    pub time: u64,
}

pub fn get_status(env: &Env) -> StatusInfo {
    let status = env
        .storage()
        .persistent()
        .get(&DataKey::Status)
        .unwrap_or_else(|| {
            log!(env, "Minipool: Status not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Status, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    status
}

pub fn save_status(env: &Env, status: &StatusInfo) {
    env.storage().persistent().set(&DataKey::Status, status);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Status, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Balances
// ################################################################

pub fn get_node_deposit(env: &Env) -> i128 {
    env.storage().persistent().get(&DataKey::NodeDeposit).unwrap_or(0)
}

pub fn save_node_deposit(env: &Env, amount: i128) {
    env.storage().persistent().set(&DataKey::NodeDeposit, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::NodeDeposit, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_user_deposit_total(env: &Env) -> i128 {
    env.storage().persistent().get(&DataKey::UserDepositTotal).unwrap_or(0)
}

pub fn save_user_deposit_total(env: &Env, amount: i128) {
    env.storage().persistent().set(&DataKey::UserDepositTotal, &amount);
    env.storage()
        .persistent()
        .extend_ttl(
            &DataKey::UserDepositTotal,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT
        );
}

// ################################################################
//                             Deposits
// ################################################################

/// A user's share of the minipool, as accounted by the deposit queue.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinipoolDeposit {
    pub user: Address,
    pub group: Address,
    pub balance: i128,
    pub staking_tokens_withdrawn: i128,
    /// Protocol fee rate of the group when the deposit was first seen
    pub fee_rp: i128,
    /// Group fee rate when the deposit was first seen
    pub fee_group: i128,
    pub created: u64,
    /// Position in the deposit id list
    pub id_index: u32,
}

pub fn get_deposit_ids(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::DepositIds)
        .unwrap_or(Vec::new(env))
}

fn save_deposit_ids(env: &Env, deposit_ids: &Vec<BytesN<32>>) {
    env.storage().persistent().set(&DataKey::DepositIds, deposit_ids);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::DepositIds, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_deposit(env: &Env, deposit_id: &BytesN<32>) -> Option<MinipoolDeposit> {
    let key = DataKey::Deposit(deposit_id.clone());
    let deposit = env.storage().persistent().get::<_, MinipoolDeposit>(&key);

    if deposit.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    deposit
}

pub fn save_deposit(env: &Env, deposit_id: &BytesN<32>, deposit: &MinipoolDeposit) {
    let key = DataKey::Deposit(deposit_id.clone());
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Appends a new deposit record, pointing it at the end of the id list.
pub fn add_deposit(env: &Env, deposit_id: &BytesN<32>, deposit: &mut MinipoolDeposit) {
    let mut deposit_ids = get_deposit_ids(env);

    deposit.id_index = deposit_ids.len();
    deposit_ids.push_back(deposit_id.clone());

    save_deposit_ids(env, &deposit_ids);
    save_deposit(env, deposit_id, deposit);
}

/// Deletes a deposit record. The last id is swapped into the freed slot and its record
/// re-pointed, then the list is truncated.
pub fn remove_deposit(env: &Env, deposit_id: &BytesN<32>) -> RocketResult {
    let deposit = get_deposit(env, deposit_id).ok_or(ErrorCode::DepositNotFound)?;
    let mut deposit_ids = get_deposit_ids(env);

    let index = deposit.id_index;
    let last_index = deposit_ids.len().checked_sub(1).ok_or(ErrorCode::DepositNotFound)?;

    if index < last_index {
        let moved_id = deposit_ids.get(last_index).ok_or(ErrorCode::DepositNotFound)?;
        let mut moved = get_deposit(env, &moved_id).ok_or(ErrorCode::DepositNotFound)?;

        moved.id_index = index;
        deposit_ids.set(index, moved_id.clone());
        save_deposit(env, &moved_id, &moved);
    }

    deposit_ids.pop_back();
    save_deposit_ids(env, &deposit_ids);
    env.storage().persistent().remove(&DataKey::Deposit(deposit_id.clone()));

    Ok(())
}

// ################################################################
//                             Staking
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakingSnapshot {
    /// Pooled ether sent to staking, written when staking starts
    pub balance_start: i128,
    /// Settled staking result, written when the minipool is marked withdrawn
    pub balance_end: i128,
}

pub fn get_staking(env: &Env) -> StakingSnapshot {
    env.storage().persistent().get(&DataKey::Staking).unwrap_or_default()
}

pub fn save_staking(env: &Env, staking: &StakingSnapshot) {
    env.storage().persistent().set(&DataKey::Staking, staking);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Staking, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Running total of a deposit's early withdrawals while staking.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingWithdrawal {
    pub amount: i128,
    /// Fee rates of the deposit and fee address of the group at the first early withdrawal
    pub fee_rp: i128,
    pub fee_group: i128,
    pub group_fee_address: Address,
    pub created: u64,
}

pub fn get_staking_withdrawal(env: &Env, deposit_id: &BytesN<32>) -> Option<StakingWithdrawal> {
    env.storage().persistent().get(&DataKey::StakingWithdrawal(deposit_id.clone()))
}

pub fn save_staking_withdrawal(
    env: &Env,
    deposit_id: &BytesN<32>,
    withdrawal: &StakingWithdrawal
) {
    let key = DataKey::StakingWithdrawal(deposit_id.clone());
    env.storage().persistent().set(&key, withdrawal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

pub mod utils {
    use soroban_sdk::token;

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
                log!(env, "Minipool: Admin not set");
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

    /// Moves `amount` of `token`; zero amounts are skipped.
    pub fn transfer_tokens(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }

        token::Client::new(env, token).transfer(from, to, &amount);
    }
}
