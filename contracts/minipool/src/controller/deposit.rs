use rocketpool::{
    constants::FEE_BASE,
    error::{ ErrorCode, RocketResult },
    interfaces::GroupClient,
    math::safe_math::SafeMath,
    validate,
    validate_fee,
};
use soroban_sdk::{ token, Address, BytesN, Env };

use crate::{
    events::MinipoolEvents,
    status::require_status,
    storage::{
        add_deposit,
        get_deposit,
        get_node_deposit,
        get_user_deposit_total,
        remove_deposit,
        save_deposit,
        save_node_deposit,
        save_user_deposit_total,
        utils,
        Config,
        MinipoolDeposit,
        MinipoolStatus,
    },
};

pub fn node_deposit(env: &Env, config: &Config, node: &Address) -> RocketResult {
    validate!(
        env,
        *node == config.node,
        ErrorCode::NotAuthorized,
        "Minipool: Node deposit: sender is not the minipool node"
    )?;
    require_status(env, &[MinipoolStatus::Initialised])?;
    validate!(
        env,
        get_node_deposit(env) == 0,
        ErrorCode::NodeDepositExists,
        "Minipool: Node deposit: node deposit already made"
    )?;

    save_node_deposit(env, config.node_deposit_amount);

    utils::transfer_tokens(
        env,
        &config.ether_token,
        node,
        &env.current_contract_address(),
        config.node_deposit_amount
    );

    MinipoolEvents::node_deposit(env, node.clone(), config.node_deposit_amount);

    Ok(())
}

/// Accounts ether already forwarded by the deposit queue to a user deposit.
///
/// The first slice of a deposit registers its record and snapshots the group's fee rates;
/// later slices only add to the balance.
pub fn deposit(
    env: &Env,
    config: &Config,
    deposit_id: &BytesN<32>,
    user: &Address,
    group: &Address,
    amount: i128
) -> RocketResult {
    require_status(env, &[MinipoolStatus::Initialised, MinipoolStatus::PreLaunch])?;
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "Minipool: Deposit: amount must be positive")?;

    let user_deposit_total = get_user_deposit_total(env).safe_add(amount, env)?;
    let capacity = config.launch_amount.safe_sub(config.node_deposit_amount, env)?;
    validate!(
        env,
        user_deposit_total <= capacity,
        ErrorCode::DepositExceedsCapacity,
        "Minipool: Deposit: user deposits would exceed the launch amount"
    )?;

    let accounted = get_node_deposit(env).safe_add(user_deposit_total, env)?;
    let held = token::Client::new(env, &config.ether_token).balance(&env.current_contract_address());
    validate!(
        env,
        held >= accounted,
        ErrorCode::UnfundedDeposit,
        "Minipool: Deposit: ether for the deposit has not been received"
    )?;

    let mut record = match get_deposit(env, deposit_id) {
        Some(record) => record,
        None => {
            let group_client = GroupClient::new(env, group);
            let fee_rp = group_client.get_fee_perc_rocket_pool();
            let fee_group = group_client.get_fee_perc();
            validate_fee!(env, fee_rp, fee_group)?;
            validate!(
                env,
                fee_rp.safe_add(config.node_fee, env)? <= FEE_BASE,
                ErrorCode::InvalidFee,
                "Minipool: Deposit: protocol and node fees exceed the fee base"
            )?;

            let mut record = MinipoolDeposit {
                user: user.clone(),
                group: group.clone(),
                balance: 0,
                staking_tokens_withdrawn: 0,
                fee_rp,
                fee_group,
                created: env.ledger().timestamp(),
                id_index: 0,
            };
            add_deposit(env, deposit_id, &mut record);
            record
        }
    };

    validate!(
        env,
        record.user == *user && record.group == *group,
        ErrorCode::DepositIdCollision,
        "Minipool: Deposit: deposit id belongs to another user or group"
    )?;

    record.balance = record.balance.safe_add(amount, env)?;
    save_deposit(env, deposit_id, &record);
    save_user_deposit_total(env, user_deposit_total);

    MinipoolEvents::deposit(
        env,
        user.clone(),
        group.clone(),
        deposit_id.clone(),
        amount,
        record.balance
    );

    Ok(())
}

/// Returns a user's full balance after the launch timed out.
pub fn refund(
    env: &Env,
    config: &Config,
    user: &Address,
    deposit_id: &BytesN<32>,
    refund_address: &Address
) -> RocketResult<i128> {
    require_status(env, &[MinipoolStatus::TimedOut])?;

    let record = get_deposit(env, deposit_id).ok_or(ErrorCode::DepositNotFound)?;
    validate!(
        env,
        record.user == *user,
        ErrorCode::NotAuthorized,
        "Minipool: Refund: deposit belongs to another user"
    )?;
    validate!(env, record.balance > 0, ErrorCode::InvalidAmount, "Minipool: Refund: nothing to refund")?;

    let amount = record.balance;
    save_user_deposit_total(env, get_user_deposit_total(env).safe_sub(amount, env)?);
    remove_deposit(env, deposit_id)?;

    utils::transfer_tokens(
        env,
        &config.ether_token,
        &env.current_contract_address(),
        refund_address,
        amount
    );

    MinipoolEvents::refund(env, user.clone(), deposit_id.clone(), refund_address.clone(), amount);

    Ok(amount)
}
