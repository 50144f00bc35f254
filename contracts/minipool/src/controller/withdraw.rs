use rocketpool::{
    error::{ ErrorCode, RocketResult },
    interfaces::GroupClient,
    math::{ fees::{ calculate_fees, calculate_rewards_earned, FeeBreakdown }, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ Address, BytesN, Env };

use crate::{
    events::MinipoolEvents,
    status::require_status,
    storage::{
        get_deposit,
        get_node_deposit,
        get_staking,
        get_staking_withdrawal,
        get_user_deposit_total,
        remove_deposit,
        save_deposit,
        save_staking_withdrawal,
        save_user_deposit_total,
        utils,
        Config,
        MinipoolStatus,
        StakingWithdrawal,
    },
};

/// Books an early withdrawal made while the minipool is staking.
///
/// The staking tokens themselves move outside of the minipool; only the ledger changes here.
pub fn withdraw_staking(
    env: &Env,
    user: &Address,
    deposit_id: &BytesN<32>,
    withdrawn_amount: i128,
    token_amount: i128,
    withdrawn_address: &Address
) -> RocketResult {
    require_status(env, &[MinipoolStatus::Staking, MinipoolStatus::LoggedOut])?;

    let mut record = get_deposit(env, deposit_id).ok_or(ErrorCode::DepositNotFound)?;
    validate!(
        env,
        record.user == *user,
        ErrorCode::NotAuthorized,
        "Minipool: Withdraw staking: deposit belongs to another user"
    )?;
    validate!(
        env,
        withdrawn_amount > 0 && token_amount >= 0,
        ErrorCode::InvalidAmount,
        "Minipool: Withdraw staking: invalid amounts"
    )?;
    validate!(
        env,
        withdrawn_amount <= record.balance,
        ErrorCode::InsufficientBalance,
        "Minipool: Withdraw staking: amount exceeds the deposit balance"
    )?;

    let mut withdrawal = match get_staking_withdrawal(env, deposit_id) {
        Some(withdrawal) => withdrawal,
        None =>
            StakingWithdrawal {
                amount: 0,
                fee_rp: record.fee_rp,
                fee_group: record.fee_group,
                group_fee_address: GroupClient::new(env, &record.group).get_fee_address(),
                created: env.ledger().timestamp(),
            },
    };
    withdrawal.amount = withdrawal.amount.safe_add(withdrawn_amount, env)?;
    save_staking_withdrawal(env, deposit_id, &withdrawal);

    record.balance = record.balance.safe_sub(withdrawn_amount, env)?;
    record.staking_tokens_withdrawn = record.staking_tokens_withdrawn.safe_add(token_amount, env)?;
    save_user_deposit_total(env, get_user_deposit_total(env).safe_sub(withdrawn_amount, env)?);

    if record.balance == 0 {
        remove_deposit(env, deposit_id)?;
    } else {
        save_deposit(env, deposit_id, &record);
    }

    MinipoolEvents::staking_withdrawal(
        env,
        user.clone(),
        deposit_id.clone(),
        withdrawn_address.clone(),
        withdrawn_amount,
        token_amount
    );

    Ok(())
}

/// Pays out a user's share of the settled staking result, fees routed to their recipients.
///
/// The record is removed whether the user gained or lost.
pub fn withdraw(
    env: &Env,
    config: &Config,
    user: &Address,
    deposit_id: &BytesN<32>,
    withdrawal_address: &Address
) -> RocketResult<FeeBreakdown> {
    require_status(env, &[MinipoolStatus::Withdrawn])?;

    let staking = get_staking(env);
    validate!(
        env,
        staking.balance_start > 0,
        ErrorCode::StakingNotStarted,
        "Minipool: Withdraw: staking start balance is zero"
    )?;

    let record = get_deposit(env, deposit_id).ok_or(ErrorCode::DepositNotFound)?;
    validate!(
        env,
        record.user == *user,
        ErrorCode::NotAuthorized,
        "Minipool: Withdraw: deposit belongs to another user"
    )?;
    validate!(env, record.balance > 0, ErrorCode::InvalidAmount, "Minipool: Withdraw: nothing to withdraw")?;

    let rewards_earned = calculate_rewards_earned(
        env,
        record.balance,
        staking.balance_start,
        staking.balance_end,
        get_node_deposit(env)
    )?;
    let fees = calculate_fees(
        env,
        record.balance,
        rewards_earned,
        record.fee_rp,
        config.node_fee,
        record.fee_group
    )?;

    save_user_deposit_total(env, get_user_deposit_total(env).safe_sub(record.balance, env)?);
    remove_deposit(env, deposit_id)?;

    let minipool = env.current_contract_address();
    utils::transfer_tokens(env, &config.reward_token, &minipool, withdrawal_address, fees.payout);
    utils::transfer_tokens(
        env,
        &config.reward_token,
        &minipool,
        &config.protocol_fee_address,
        fees.protocol_fee
    );
    utils::transfer_tokens(env, &config.reward_token, &minipool, &config.node, fees.node_fee);
    if fees.group_fee > 0 {
        let group_fee_address = GroupClient::new(env, &record.group).get_fee_address();
        utils::transfer_tokens(
            env,
            &config.reward_token,
            &minipool,
            &group_fee_address,
            fees.group_fee
        );
    }

    MinipoolEvents::withdrawal(
        env,
        user.clone(),
        deposit_id.clone(),
        withdrawal_address.clone(),
        fees.clone()
    );

    Ok(fees)
}
