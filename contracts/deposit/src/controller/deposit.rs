use rocketpool::{
    error::{ ErrorCode, RocketResult },
    interfaces::VaultClient,
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ token, Address, BytesN, Env, Symbol, Vec };

use crate::{
    events::DepositEvents,
    queue::{ enqueue, get_queue, save_queue },
    storage::{ generate_deposit_id, has_deposit, next_deposit_nonce, save_deposit, Config, Deposit },
};

/// Records a new deposit at the tail of its duration queue and moves the ether into the vault.
///
/// The ledger is written before any token moves; a failed transfer aborts the invocation.
pub fn create_deposit(
    env: &Env,
    config: &Config,
    user: &Address,
    group: &Address,
    duration_id: &Symbol,
    amount: i128
) -> RocketResult<BytesN<32>> {
    validate!(
        env,
        config.deposits_enabled,
        ErrorCode::DepositsDisabled,
        "Deposit: Create: deposits are currently disabled"
    )?;
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "Deposit: Create: amount must be positive")?;
    validate!(
        env,
        amount >= config.min_deposit && amount <= config.max_deposit,
        ErrorCode::InvalidAmount,
        "Deposit: Create: amount outside of the deposit limits"
    )?;

    let nonce = next_deposit_nonce(env, user, group)?;
    let deposit_id = generate_deposit_id(env, user, group, nonce);
    validate!(
        env,
        !has_deposit(env, &deposit_id),
        ErrorCode::DepositIdCollision,
        "Deposit: Create: deposit id already in use"
    )?;

    save_deposit(env, &deposit_id, &(Deposit {
        user: user.clone(),
        group: group.clone(),
        duration_id: duration_id.clone(),
        total_amount: amount,
        queued_amount: amount,
        staking_amount: 0,
        staking_pools: Vec::new(env),
        created: env.ledger().timestamp(),
    }));

    let mut queue = get_queue(env, duration_id);
    enqueue(env, duration_id, &mut queue, &deposit_id);
    queue.balance = queue.balance.safe_add(amount, env)?;
    save_queue(env, duration_id, &queue);

    token::Client::new(env, &config.ether_token).transfer(user, &config.vault, &amount);
    let credited = VaultClient::new(env, &config.vault).deposit_ether(
        &env.current_contract_address(),
        &amount
    );
    validate!(
        env,
        credited,
        ErrorCode::VaultTransferFailed,
        "Deposit: Create: vault rejected the deposit"
    )?;

    DepositEvents::deposit_created(
        env,
        user.clone(),
        group.clone(),
        deposit_id.clone(),
        duration_id.clone(),
        amount
    );

    Ok(deposit_id)
}
