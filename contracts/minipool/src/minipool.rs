use soroban_sdk::{ Address, BytesN, Env, Vec };

use rocketpool::math::fees::FeeBreakdown;

use crate::{
    msg::ConfigResponse,
    storage::{ Config, MinipoolDeposit, MinipoolStatus, StakingSnapshot, StakingWithdrawal, StatusInfo },
};

pub trait MinipoolTrait {
    fn initialize(env: Env, admin: Address, config: Config);

    fn update(env: Env, new_wasm_hash: BytesN<32>);

    // ################################################################
    //                             NODE
    // ################################################################

    fn node_deposit(env: Env, node: Address);

    fn stake(env: Env, node: Address) -> i128;

    fn close(env: Env, node: Address);

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn logout(env: Env, admin: Address);

    // Pulls `balance_end` reward tokens from the admin
    fn set_withdrawn(env: Env, admin: Address, balance_end: i128);

    // ################################################################
    //                             DEPOSITS
    // ################################################################

    // Only callable by the deposit queue, after it transferred the ether
    fn deposit(env: Env, deposit_id: BytesN<32>, user: Address, group: Address, amount: i128);

    fn refund(env: Env, user: Address, deposit_id: BytesN<32>, refund_address: Address) -> i128;

    fn withdraw_staking(
        env: Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawn_amount: i128,
        token_amount: i128,
        withdrawn_address: Address
    );

    fn withdraw(
        env: Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawal_address: Address
    ) -> FeeBreakdown;

    fn update_status(env: Env) -> MinipoolStatus;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_admin(env: Env) -> Address;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_status(env: Env) -> StatusInfo;

    fn query_deposit(env: Env, deposit_id: BytesN<32>) -> MinipoolDeposit;

    fn query_deposit_ids(env: Env) -> Vec<BytesN<32>>;

    fn query_deposit_count(env: Env) -> u32;

    fn query_user_deposit_total(env: Env) -> i128;

    fn query_node_deposit(env: Env) -> i128;

    fn query_staking(env: Env) -> StakingSnapshot;

    fn query_staking_withdrawal(env: Env, deposit_id: BytesN<32>) -> StakingWithdrawal;
}
