use rocketpool::{
    error::{ ErrorCode, RocketResult },
    interfaces::{ MinipoolDepositClient, NodeSetClient, VaultClient },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ contracttype, token, Address, BytesN, Env, Symbol, Vec };

use crate::{
    events::DepositEvents,
    queue::{ dequeue, get_queue, peek, save_queue, DepositQueue },
    storage::{ get_deposit, get_staking_pool_amount, save_deposit, save_staking_pool_amount, Config },
};

/// One slice of a chunk: the part of a single deposit forwarded to the chunk's minipool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChunkMatch {
    pub deposit_id: BytesN<32>,
    pub user: Address,
    pub group: Address,
    pub amount: i128,
}

/// Assigns chunks from the duration queue to available minipools until the queue balance
/// drops below a chunk, no minipool is available or the per-call maximum is reached.
///
/// Returns the number of chunks assigned; repeated calls converge to zero.
pub fn assign_chunks(env: &Env, config: &Config, duration_id: &Symbol) -> RocketResult<u32> {
    let node_set = NodeSetClient::new(env, &config.node_set);
    let mut assigned = 0u32;

    while assigned < config.chunk_assign_max {
        if get_queue(env, duration_id).balance < config.chunk_size {
            break;
        }
        if node_set.get_available_node_count(duration_id) == 0 {
            break;
        }

        let seed = env.prng().gen::<u64>();
        let minipool = node_set.get_random_available_minipool(duration_id, &seed);
        assign_chunk(env, config, duration_id, &minipool)?;
        assigned += 1;
    }

    Ok(assigned)
}

/// Drains exactly one chunk from the front of the queue into `minipool`.
pub fn assign_chunk(
    env: &Env,
    config: &Config,
    duration_id: &Symbol,
    minipool: &Address
) -> RocketResult<Vec<ChunkMatch>> {
    let mut queue = get_queue(env, duration_id);
    let matches = drain_chunk(env, config.chunk_size, duration_id, &mut queue, minipool)?;

    queue.balance = queue.balance.safe_sub(config.chunk_size, env)?;
    validate!(
        env,
        queue.balance >= 0,
        ErrorCode::QueueBalanceMismatch,
        "Deposit: Assign chunk: queue balance below zero"
    )?;
    save_queue(env, duration_id, &queue);

    let engine = env.current_contract_address();
    let withdrawn = VaultClient::new(env, &config.vault).withdraw_ether(
        &engine,
        &config.chunk_size
    );
    validate!(
        env,
        withdrawn,
        ErrorCode::VaultTransferFailed,
        "Deposit: Assign chunk: vault refused to release the chunk"
    )?;

    let ether = token::Client::new(env, &config.ether_token);
    let minipool_client = MinipoolDepositClient::new(env, minipool);
    for chunk_match in matches.iter() {
        ether.transfer(&engine, minipool, &chunk_match.amount);
        minipool_client.deposit(
            &chunk_match.deposit_id,
            &chunk_match.user,
            &chunk_match.group,
            &chunk_match.amount
        );
    }

    DepositEvents::chunk_assigned(
        env,
        duration_id.clone(),
        minipool.clone(),
        config.chunk_size,
        queue.balance
    );

    Ok(matches)
}

/// Moves `chunk_size` from queued to staking amounts, oldest deposit first.
///
/// A deposit is always fully drained before the next one is touched; a queue that runs dry
/// before the chunk is covered means the queue balance was wrong.
fn drain_chunk(
    env: &Env,
    chunk_size: i128,
    duration_id: &Symbol,
    queue: &mut DepositQueue,
    minipool: &Address
) -> RocketResult<Vec<ChunkMatch>> {
    let mut matches = Vec::new(env);
    let mut remaining = chunk_size;

    while remaining > 0 {
        let Some(deposit_id) = peek(env, duration_id, queue) else {
            break;
        };
        let mut deposit = get_deposit(env, &deposit_id).ok_or(ErrorCode::QueueBalanceMismatch)?;

        let amount = deposit.queued_amount.min(remaining);
        validate!(
            env,
            amount > 0,
            ErrorCode::QueueBalanceMismatch,
            "Deposit: Assign chunk: empty deposit at the queue head"
        )?;

        deposit.queued_amount = deposit.queued_amount.safe_sub(amount, env)?;
        deposit.staking_amount = deposit.staking_amount.safe_add(amount, env)?;
        if !deposit.staking_pools.contains(minipool) {
            deposit.staking_pools.push_back(minipool.clone());
        }

        let pool_amount = get_staking_pool_amount(env, &deposit_id, minipool).safe_add(amount, env)?;
        save_staking_pool_amount(env, &deposit_id, minipool, pool_amount);

        remaining = remaining.safe_sub(amount, env)?;

        if deposit.queued_amount == 0 {
            dequeue(env, duration_id, queue);
            DepositEvents::deposit_dequeued(env, duration_id.clone(), deposit_id.clone());
        }

        save_deposit(env, &deposit_id, &deposit);
        DepositEvents::deposit_staked(
            env,
            deposit_id.clone(),
            minipool.clone(),
            amount,
            deposit.queued_amount
        );

        matches.push_back(ChunkMatch {
            deposit_id,
            user: deposit.user,
            group: deposit.group,
            amount,
        });
    }

    validate!(
        env,
        remaining == 0,
        ErrorCode::ChunkNotFullyMatched,
        "Deposit: Assign chunk: queue could not cover a full chunk"
    )?;

    Ok(matches)
}
