use rocketpool::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
    math::{ fees::FeeBreakdown, safe_unwrap::SafeUnwrap },
    validate_fee,
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
    Vec,
};

use crate::{
    controller,
    events::MinipoolEvents,
    minipool::MinipoolTrait,
    msg::ConfigResponse,
    status,
    storage::{
        get_config,
        get_deposit,
        get_deposit_ids,
        get_node_deposit,
        get_staking,
        get_staking_withdrawal,
        get_status,
        get_user_deposit_total,
        save_config,
        save_status,
        utils,
        Config,
        MinipoolDeposit,
        MinipoolStatus,
        StakingSnapshot,
        StakingWithdrawal,
        StatusInfo,
    },
};

contractmeta!(
    key = "Description",
    val = "Rocket Pool minipool accounting user deposits through the staking lifecycle"
);

#[contract]
pub struct RocketMinipool;

#[contractimpl]
impl MinipoolTrait for RocketMinipool {
    fn initialize(env: Env, admin: Address, config: Config) {
        if utils::is_initialized(&env) {
            log!(&env, "Minipool: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if
            config.launch_amount <= 0 ||
            config.node_deposit_amount <= 0 ||
            config.node_deposit_amount > config.launch_amount
        {
            log!(&env, "Minipool: Initialize: invalid launch or node deposit amount");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        validate_fee!(&env, config.node_fee).safe_unwrap(&env);

        utils::set_initialized(&env);
        utils::save_admin(&env, &admin);

        save_config(&env, &config);
        save_status(&env, &(StatusInfo {
            status: MinipoolStatus::Initialised,
            time: env.ledger().timestamp(),
        }));

        MinipoolEvents::initialize(&env, config.node, config.duration_id, config.launch_amount);
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = utils::get_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ################################################################
    //                             NODE
    // ################################################################

    fn node_deposit(env: Env, node: Address) {
        node.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        status::update_status(&env, &config).safe_unwrap(&env);

        controller::deposit::node_deposit(&env, &config, &node).safe_unwrap(&env);

        status::update_status(&env, &config).safe_unwrap(&env);
    }

    fn stake(env: Env, node: Address) -> i128 {
        node.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        status::update_status(&env, &config).safe_unwrap(&env);

        controller::staking::stake(&env, &config, &node).safe_unwrap(&env)
    }

    fn close(env: Env, node: Address) {
        node.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        status::update_status(&env, &config).safe_unwrap(&env);

        controller::staking::close(&env, &config, &node).safe_unwrap(&env);
    }

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn logout(env: Env, admin: Address) {
        admin.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if admin != utils::get_admin(&env) {
            log!(&env, "Minipool: Logout: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        controller::staking::logout(&env).safe_unwrap(&env);
    }

    fn set_withdrawn(env: Env, admin: Address, balance_end: i128) {
        admin.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if admin != utils::get_admin(&env) {
            log!(&env, "Minipool: Set withdrawn: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        let config = get_config(&env);
        controller::staking::set_withdrawn(&env, &config, &admin, balance_end).safe_unwrap(&env);
    }

    // ################################################################
    //                             DEPOSITS
    // ################################################################

    fn deposit(env: Env, deposit_id: BytesN<32>, user: Address, group: Address, amount: i128) {
        let config = get_config(&env);
        config.deposit_contract.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        status::update_status(&env, &config).safe_unwrap(&env);

        controller::deposit::deposit(&env, &config, &deposit_id, &user, &group, amount).safe_unwrap(
            &env
        );

        status::update_status(&env, &config).safe_unwrap(&env);
    }

    fn refund(env: Env, user: Address, deposit_id: BytesN<32>, refund_address: Address) -> i128 {
        user.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        status::update_status(&env, &config).safe_unwrap(&env);

        let refunded = controller::deposit::refund(
            &env,
            &config,
            &user,
            &deposit_id,
            &refund_address
        ).safe_unwrap(&env);

        status::update_status(&env, &config).safe_unwrap(&env);

        refunded
    }

    fn withdraw_staking(
        env: Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawn_amount: i128,
        token_amount: i128,
        withdrawn_address: Address
    ) {
        user.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        controller::withdraw::withdraw_staking(
            &env,
            &user,
            &deposit_id,
            withdrawn_amount,
            token_amount,
            &withdrawn_address
        ).safe_unwrap(&env);

        status::update_status(&env, &config).safe_unwrap(&env);
    }

    fn withdraw(
        env: Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawal_address: Address
    ) -> FeeBreakdown {
        user.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);

        let fees = controller::withdraw::withdraw(
            &env,
            &config,
            &user,
            &deposit_id,
            &withdrawal_address
        ).safe_unwrap(&env);

        status::update_status(&env, &config).safe_unwrap(&env);

        fees
    }

    fn update_status(env: Env) -> MinipoolStatus {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        status::update_status(&env, &config).safe_unwrap(&env)
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

    fn query_status(env: Env) -> StatusInfo {
        get_status(&env)
    }

    fn query_deposit(env: Env, deposit_id: BytesN<32>) -> MinipoolDeposit {
        get_deposit(&env, &deposit_id).unwrap_or_else(|| {
            log!(&env, "Minipool: Query deposit: no deposit with this id");
            panic_with_error!(&env, ErrorCode::DepositNotFound)
        })
    }

    fn query_deposit_ids(env: Env) -> Vec<BytesN<32>> {
        get_deposit_ids(&env)
    }

    fn query_deposit_count(env: Env) -> u32 {
        get_deposit_ids(&env).len()
    }

    fn query_user_deposit_total(env: Env) -> i128 {
        get_user_deposit_total(&env)
    }

    fn query_node_deposit(env: Env) -> i128 {
        get_node_deposit(&env)
    }

    fn query_staking(env: Env) -> StakingSnapshot {
        get_staking(&env)
    }

    fn query_staking_withdrawal(env: Env, deposit_id: BytesN<32>) -> StakingWithdrawal {
        get_staking_withdrawal(&env, &deposit_id).unwrap_or_else(|| {
            log!(&env, "Minipool: Query staking withdrawal: no withdrawal for this deposit");
            panic_with_error!(&env, ErrorCode::DepositNotFound)
        })
    }
}
