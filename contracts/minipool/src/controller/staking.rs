use rocketpool::{ error::{ ErrorCode, RocketResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::{ token, Address, Env };

use crate::{
    events::MinipoolEvents,
    status::{ require_status, set_status },
    storage::{
        get_deposit_ids,
        get_node_deposit,
        get_staking,
        get_user_deposit_total,
        save_node_deposit,
        save_staking,
        utils,
        Config,
        MinipoolStatus,
        StakingSnapshot,
    },
};

/// Sends the pooled ether to the staking address and records the starting balance.
pub fn stake(env: &Env, config: &Config, node: &Address) -> RocketResult<i128> {
    validate!(
        env,
        *node == config.node,
        ErrorCode::NotAuthorized,
        "Minipool: Stake: sender is not the minipool node"
    )?;
    require_status(env, &[MinipoolStatus::PreLaunch])?;

    let balance_start = get_node_deposit(env).safe_add(get_user_deposit_total(env), env)?;
    save_staking(env, &(StakingSnapshot {
        balance_start,
        balance_end: 0,
    }));
    set_status(env, MinipoolStatus::Staking);

    utils::transfer_tokens(
        env,
        &config.ether_token,
        &env.current_contract_address(),
        &config.staking_address,
        balance_start
    );

    Ok(balance_start)
}

pub fn logout(env: &Env) -> RocketResult {
    require_status(env, &[MinipoolStatus::Staking])?;
    set_status(env, MinipoolStatus::LoggedOut);

    Ok(())
}

/// Settles staking: records the final balance and pulls it in as reward tokens from `from`.
pub fn set_withdrawn(env: &Env, config: &Config, from: &Address, balance_end: i128) -> RocketResult {
    require_status(env, &[MinipoolStatus::LoggedOut])?;
    validate!(
        env,
        balance_end >= 0,
        ErrorCode::InvalidAmount,
        "Minipool: Set withdrawn: end balance must not be negative"
    )?;

    let mut staking = get_staking(env);
    staking.balance_end = balance_end;
    save_staking(env, &staking);
    set_status(env, MinipoolStatus::Withdrawn);

    utils::transfer_tokens(
        env,
        &config.reward_token,
        from,
        &env.current_contract_address(),
        balance_end
    );

    Ok(())
}

/// Hands what is left to the node once every user deposit has been settled.
///
/// After a withdrawal the node receives the remaining reward tokens, after a timeout its
/// own ether deposit.
pub fn close(env: &Env, config: &Config, node: &Address) -> RocketResult {
    validate!(
        env,
        *node == config.node,
        ErrorCode::NotAuthorized,
        "Minipool: Close: sender is not the minipool node"
    )?;
    let status = require_status(env, &[MinipoolStatus::Withdrawn, MinipoolStatus::TimedOut])?;
    validate!(
        env,
        get_deposit_ids(env).is_empty(),
        ErrorCode::DepositsRemaining,
        "Minipool: Close: user deposits remain"
    )?;

    let minipool = env.current_contract_address();
    let mut ether = 0;
    let mut rewards = 0;

    if status == MinipoolStatus::Withdrawn {
        rewards = token::Client::new(env, &config.reward_token).balance(&minipool);
    } else {
        ether = get_node_deposit(env);
        save_node_deposit(env, 0);
    }

    set_status(env, MinipoolStatus::Closed);

    utils::transfer_tokens(env, &config.reward_token, &minipool, node, rewards);
    utils::transfer_tokens(env, &config.ether_token, &minipool, node, ether);

    MinipoolEvents::close(env, node.clone(), ether, rewards);

    Ok(())
}
