use soroban_sdk::{ Address, BytesN, Env, Symbol, Vec };

use crate::{ msg::{ ConfigResponse, QueueResponse }, storage::{ Deposit, DepositParams } };

pub trait DepositTrait {
    fn initialize(env: Env, admin: Address, params: DepositParams);

    // Allows the admin to change the queue settings
    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        chunk_size: Option<i128>,
        chunk_assign_max: Option<u32>,
        min_deposit: Option<i128>,
        max_deposit: Option<i128>,
        deposits_enabled: Option<bool>
    );

    fn update(env: Env, new_wasm_hash: BytesN<32>);

    // ################################################################
    //                             USER
    // ################################################################

    fn create(
        env: Env,
        user: Address,
        group: Address,
        duration_id: Symbol,
        amount: i128
    ) -> BytesN<32>;

    // Anyone may drive the queue forward, e.g. after new minipools became available
    fn assign_chunks(env: Env, duration_id: Symbol) -> u32;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_admin(env: Env) -> Address;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_deposit(env: Env, deposit_id: BytesN<32>) -> Deposit;

    fn query_staking_pool_amount(env: Env, deposit_id: BytesN<32>, minipool: Address) -> i128;

    fn query_queue(env: Env, duration_id: Symbol) -> QueueResponse;

    fn query_queued_deposits(env: Env, duration_id: Symbol) -> Vec<BytesN<32>>;

    fn query_nonce(env: Env, user: Address, group: Address) -> u64;
}
