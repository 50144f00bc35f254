use rocketpool::constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD };
use soroban_sdk::{ contracttype, BytesN, Env, Symbol, Vec };

use crate::storage::DataKey;

/// FIFO queue of deposit ids for one staking duration.
///
/// Items live in their own slots keyed by a monotonically increasing index; `head` is the
/// oldest live slot and `tail` the next free one. `balance` is the sum of the queued amounts
/// of every deposit still in the queue.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositQueue {
    pub head: u64,
    pub tail: u64,
    pub balance: i128,
}

impl DepositQueue {
    pub fn len(&self) -> u64 {
        self.tail - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }
}

pub fn get_queue(env: &Env, duration_id: &Symbol) -> DepositQueue {
    let key = DataKey::Queue(duration_id.clone());
    match env.storage().persistent().get::<_, DepositQueue>(&key) {
        Some(queue) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            queue
        }
        None =>
            DepositQueue {
                head: 0,
                tail: 0,
                balance: 0,
            },
    }
}

pub fn save_queue(env: &Env, duration_id: &Symbol, queue: &DepositQueue) {
    let key = DataKey::Queue(duration_id.clone());
    env.storage().persistent().set(&key, queue);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn enqueue(env: &Env, duration_id: &Symbol, queue: &mut DepositQueue, deposit_id: &BytesN<32>) {
    let key = DataKey::QueueItem(duration_id.clone(), queue.tail);
    env.storage().persistent().set(&key, deposit_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    queue.tail += 1;
}

pub fn peek(env: &Env, duration_id: &Symbol, queue: &DepositQueue) -> Option<BytesN<32>> {
    if queue.is_empty() {
        return None;
    }

    let key = DataKey::QueueItem(duration_id.clone(), queue.head);
    let deposit_id = env.storage().persistent().get::<_, BytesN<32>>(&key);

    if deposit_id.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    deposit_id
}

pub fn dequeue(env: &Env, duration_id: &Symbol, queue: &mut DepositQueue) -> Option<BytesN<32>> {
    let deposit_id = peek(env, duration_id, queue)?;

    env.storage().persistent().remove(&DataKey::QueueItem(duration_id.clone(), queue.head));
    queue.head += 1;

    Some(deposit_id)
}

/// Deposit ids still waiting in the queue, oldest first.
pub fn queued_deposits(env: &Env, duration_id: &Symbol) -> Vec<BytesN<32>> {
    let queue = get_queue(env, duration_id);
    let mut deposit_ids = Vec::new(env);

    for index in queue.head..queue.tail {
        if
            let Some(deposit_id) = env
                .storage()
                .persistent()
                .get::<_, BytesN<32>>(&DataKey::QueueItem(duration_id.clone(), index))
        {
            deposit_ids.push_back(deposit_id);
        }
    }

    deposit_ids
}
