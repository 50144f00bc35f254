//! Client interfaces of the contracts the deposit queue and the minipools talk to.

use soroban_sdk::{ contractclient, Address, BytesN, Env, Symbol };

/// Custody vault holding queued ether.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Credits `from` with `amount` of ether already transferred into the vault.
    fn deposit_ether(env: Env, from: Address, amount: i128) -> bool;

    /// Pays `amount` of the caller's ether out to `to`.
    fn withdraw_ether(env: Env, to: Address, amount: i128) -> bool;
}

/// Node availability tracking and minipool selection.
#[contractclient(name = "NodeSetClient")]
pub trait NodeSetInterface {
    fn get_available_node_count(env: Env, duration_id: Symbol) -> u32;

    /// Picks an available minipool for the duration; the selection policy belongs to the node set.
    fn get_random_available_minipool(env: Env, duration_id: Symbol, seed: u64) -> Address;
}

/// Fee settings of a deposit group.
#[contractclient(name = "GroupClient")]
pub trait GroupInterface {
    /// Group fee rate in basis points
    fn get_fee_perc(env: Env) -> i128;

    /// Protocol fee rate charged to this group's depositors, in basis points
    fn get_fee_perc_rocket_pool(env: Env) -> i128;

    fn get_fee_address(env: Env) -> Address;
}

/// Deposit entrypoint of a minipool, as called by the deposit queue.
#[contractclient(name = "MinipoolDepositClient")]
pub trait MinipoolDepositInterface {
    /// Accounts `amount` of ether, already transferred to the minipool, to `deposit_id`.
    fn deposit(env: Env, deposit_id: BytesN<32>, user: Address, group: Address, amount: i128);
}
