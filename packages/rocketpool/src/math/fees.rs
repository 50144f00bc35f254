use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ contracttype, log, Env };

use crate::{
    constants::FEE_BASE,
    error::{ ErrorCode, RocketResult },
    math::safe_math::SafeMath,
    validate,
    validate_fee,
};

/// Split of a depositor's staking result between the protocol, the node operator and the group.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
    pub protocol_fee: i128,
    pub node_fee: i128,
    pub group_fee: i128,
    /// Rewards left to the depositor after all fees, negative on a loss
    pub net_reward: i128,
    /// Amount owed to the depositor: balance + net_reward
    pub payout: i128,
}

/// The staking start balance depositors are measured against.
///
/// When the pool lost value the node operator absorbs the loss up to its own deposit,
/// so the depositors' basis shrinks by the absorbed amount.
pub fn effective_balance_start(
    env: &Env,
    balance_start: i128,
    balance_end: i128,
    node_deposit: i128
) -> RocketResult<i128> {
    if balance_end >= balance_start {
        return Ok(balance_start);
    }

    let loss = balance_start.safe_sub(balance_end, env)?;
    let absorbed = loss.min(node_deposit);

    balance_start.safe_sub(absorbed, env)
}

/// `balance * balance_end / effective_start - balance`, negative when depositors take a loss.
pub fn calculate_rewards_earned(
    env: &Env,
    balance: i128,
    balance_start: i128,
    balance_end: i128,
    node_deposit: i128
) -> RocketResult<i128> {
    validate!(
        env,
        balance >= 0 && balance_end >= 0 && node_deposit >= 0,
        ErrorCode::InvalidAmount,
        "Fees: rewards: negative balance"
    )?;

    let effective_start = effective_balance_start(env, balance_start, balance_end, node_deposit)?;
    validate!(
        env,
        effective_start > 0,
        ErrorCode::DivisionByZero,
        "Fees: rewards: staking start balance is zero"
    )?;

    let value_end = balance.fixed_mul_floor(balance_end, effective_start).ok_or_else(|| {
        log!(env, "Math error thrown at line {}", line!());
        ErrorCode::MathError
    })?;

    value_end.safe_sub(balance, env)
}

/// Applies the fee rates to a depositor's rewards.
///
/// Protocol and node fees are both taken from the gross rewards, the group fee only from
/// what remains after them. Losses carry no fees.
pub fn calculate_fees(
    env: &Env,
    balance: i128,
    rewards_earned: i128,
    fee_rp: i128,
    fee_node: i128,
    fee_group: i128
) -> RocketResult<FeeBreakdown> {
    validate_fee!(env, fee_rp, fee_node, fee_group)?;
    validate!(
        env,
        fee_rp + fee_node <= FEE_BASE,
        ErrorCode::InvalidFee,
        "Fees: protocol and node fees exceed the fee base"
    )?;

    if rewards_earned <= 0 {
        return Ok(FeeBreakdown {
            protocol_fee: 0,
            node_fee: 0,
            group_fee: 0,
            net_reward: rewards_earned,
            payout: balance.safe_add(rewards_earned, env)?,
        });
    }

    let protocol_fee = fee_share(env, rewards_earned, fee_rp)?;
    let node_fee = fee_share(env, rewards_earned, fee_node)?;
    let remaining = rewards_earned.safe_sub(protocol_fee, env)?.safe_sub(node_fee, env)?;
    let group_fee = fee_share(env, remaining, fee_group)?;
    let net_reward = remaining.safe_sub(group_fee, env)?;

    Ok(FeeBreakdown {
        protocol_fee,
        node_fee,
        group_fee,
        net_reward,
        payout: balance.safe_add(net_reward, env)?,
    })
}

fn fee_share(env: &Env, amount: i128, fee: i128) -> RocketResult<i128> {
    amount.fixed_mul_floor(fee, FEE_BASE).ok_or_else(|| {
        log!(env, "Math error thrown at line {}", line!());
        ErrorCode::MathError
    })
}
