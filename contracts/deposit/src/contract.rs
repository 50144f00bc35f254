use rocketpool::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
    math::safe_unwrap::SafeUnwrap,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    BytesN,
    Env,
    Symbol,
    Vec,
};

use crate::{
    controller,
    deposit::DepositTrait,
    events::DepositEvents,
    msg::{ ConfigResponse, QueueResponse },
    queue::{ get_queue, queued_deposits },
    storage::{
        get_config,
        get_deposit,
        get_deposit_nonce,
        get_staking_pool_amount,
        save_config,
        utils,
        Config,
        Deposit,
        DepositParams,
    },
};

contractmeta!(
    key = "Description",
    val = "Rocket Pool deposit queue assigning pooled ether to minipools in fixed chunks"
);

#[contract]
pub struct RocketDeposit;

#[contractimpl]
impl DepositTrait for RocketDeposit {
    fn initialize(env: Env, admin: Address, params: DepositParams) {
        if utils::is_initialized(&env) {
            log!(&env, "Deposit: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if params.chunk_size <= 0 {
            log!(&env, "Deposit: Initialize: chunk size must be positive");
            panic_with_error!(&env, ErrorCode::InvalidChunkSize);
        }

        if
            params.chunk_assign_max == 0 ||
            params.min_deposit <= 0 ||
            params.max_deposit < params.min_deposit
        {
            log!(&env, "Deposit: Initialize: invalid deposit limits");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        utils::set_initialized(&env);
        utils::save_admin(&env, &admin);

        save_config(
            &env,
            &(Config {
                ether_token: params.ether_token,
                vault: params.vault,
                node_set: params.node_set,
                chunk_size: params.chunk_size,
                chunk_assign_max: params.chunk_assign_max,
                min_deposit: params.min_deposit,
                max_deposit: params.max_deposit,
                deposits_enabled: true,
            })
        );

        DepositEvents::initialize(&env, admin, params.chunk_size, params.chunk_assign_max);
    }

    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        chunk_size: Option<i128>,
        chunk_assign_max: Option<u32>,
        min_deposit: Option<i128>,
        max_deposit: Option<i128>,
        deposits_enabled: Option<bool>
    ) {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if sender != utils::get_admin(&env) {
            log!(&env, "Deposit: Update config: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        let mut config = get_config(&env);

        if let Some(chunk_size) = chunk_size {
            if chunk_size <= 0 {
                log!(&env, "Deposit: Update config: chunk size must be positive");
                panic_with_error!(&env, ErrorCode::InvalidChunkSize);
            }
            config.chunk_size = chunk_size;
        }
        if let Some(chunk_assign_max) = chunk_assign_max {
            config.chunk_assign_max = chunk_assign_max;
        }
        if let Some(min_deposit) = min_deposit {
            config.min_deposit = min_deposit;
        }
        if let Some(max_deposit) = max_deposit {
            config.max_deposit = max_deposit;
        }
        if let Some(deposits_enabled) = deposits_enabled {
            config.deposits_enabled = deposits_enabled;
        }

        if
            config.chunk_assign_max == 0 ||
            config.min_deposit <= 0 ||
            config.max_deposit < config.min_deposit
        {
            log!(&env, "Deposit: Update config: invalid deposit limits");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        save_config(&env, &config);
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = utils::get_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn create(
        env: Env,
        user: Address,
        group: Address,
        duration_id: Symbol,
        amount: i128
    ) -> BytesN<32> {
        user.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        let deposit_id = controller::deposit::create_deposit(
            &env,
            &config,
            &user,
            &group,
            &duration_id,
            amount
        ).safe_unwrap(&env);

        controller::assign::assign_chunks(&env, &config, &duration_id).safe_unwrap(&env);

        deposit_id
    }

    fn assign_chunks(env: Env, duration_id: Symbol) -> u32 {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        controller::assign::assign_chunks(&env, &config, &duration_id).safe_unwrap(&env)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_admin(env: Env) -> Address {
        utils::get_admin(&env)
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            admin: utils::get_admin(&env),
            config: get_config(&env),
        }
    }

    fn query_deposit(env: Env, deposit_id: BytesN<32>) -> Deposit {
        get_deposit(&env, &deposit_id).unwrap_or_else(|| {
            log!(&env, "Deposit: Query deposit: no deposit with this id");
            panic_with_error!(&env, ErrorCode::DepositNotFound)
        })
    }

    fn query_staking_pool_amount(env: Env, deposit_id: BytesN<32>, minipool: Address) -> i128 {
        get_staking_pool_amount(&env, &deposit_id, &minipool)
    }

    fn query_queue(env: Env, duration_id: Symbol) -> QueueResponse {
        let queue = get_queue(&env, &duration_id);

        QueueResponse {
            balance: queue.balance,
            length: queue.len(),
        }
    }

    fn query_queued_deposits(env: Env, duration_id: Symbol) -> Vec<BytesN<32>> {
        queued_deposits(&env, &duration_id)
    }

    fn query_nonce(env: Env, user: Address, group: Address) -> u64 {
        get_deposit_nonce(&env, &user, &group)
    }
}
