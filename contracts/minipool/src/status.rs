use rocketpool::{ error::{ ErrorCode, RocketResult }, math::safe_math::SafeMath, validate };
use soroban_sdk::Env;

use crate::{
    events::MinipoolEvents,
    storage::{
        get_node_deposit,
        get_status,
        get_user_deposit_total,
        save_status,
        Config,
        MinipoolStatus,
        StatusInfo,
    },
};

/// Recomputes the status from the minipool's balances and the ledger time.
///
/// Only the pre-launch states move here; every later transition is an explicit call.
pub fn update_status(env: &Env, config: &Config) -> RocketResult<MinipoolStatus> {
    let info = get_status(env);
    let timed_out = env.ledger().timestamp() >= info.time.saturating_add(config.launch_timeout);
    let launch_ready = is_launch_ready(env, config)?;

    let next = match info.status {
        MinipoolStatus::Initialised | MinipoolStatus::PreLaunch if timed_out => {
            MinipoolStatus::TimedOut
        }
        MinipoolStatus::Initialised if launch_ready => MinipoolStatus::PreLaunch,
        MinipoolStatus::PreLaunch if !launch_ready => MinipoolStatus::Initialised,
        status => status,
    };

    if next != info.status {
        set_status(env, next);
    }

    Ok(next)
}

/// Records `status` as of now.
pub fn set_status(env: &Env, status: MinipoolStatus) {
    let previous = get_status(env).status;

    save_status(env, &(StatusInfo {
        status,
        time: env.ledger().timestamp(),
    }));

    MinipoolEvents::status_changed(env, previous as u32, status as u32);
}

/// Fails unless the minipool is in one of `allowed`.
pub fn require_status(env: &Env, allowed: &[MinipoolStatus]) -> RocketResult<MinipoolStatus> {
    let status = get_status(env).status;

    validate!(
        env,
        allowed.contains(&status),
        ErrorCode::InvalidStatus,
        "Minipool: operation not allowed in status {}",
        status as u32
    )?;

    Ok(status)
}

fn is_launch_ready(env: &Env, config: &Config) -> RocketResult<bool> {
    let node_deposit = get_node_deposit(env);
    if node_deposit == 0 {
        return Ok(false);
    }

    let total = node_deposit.safe_add(get_user_deposit_total(env), env)?;
    Ok(total >= config.launch_amount)
}
