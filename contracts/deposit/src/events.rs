use soroban_sdk::{ Address, BytesN, Env, Symbol };

pub struct DepositEvents {}

impl DepositEvents {
    /// Emitted when the deposit queue is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[chunk_size: i128, chunk_assign_max: u32]`
    pub fn initialize(env: &Env, admin: Address, chunk_size: i128, chunk_assign_max: u32) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (chunk_size, chunk_assign_max));
    }

    /// Emitted when a user deposit is recorded and queued
    ///
    /// - topics - `["deposit_created", user: Address, group: Address]`
    /// - data - `[deposit_id: BytesN<32>, duration_id: Symbol, amount: i128, ts: u64]`
    pub fn deposit_created(
        env: &Env,
        user: Address,
        group: Address,
        deposit_id: BytesN<32>,
        duration_id: Symbol,
        amount: i128
    ) {
        let topics = (Symbol::new(env, "deposit_created"), user, group);
        env.events().publish(topics, (deposit_id, duration_id, amount, env.ledger().timestamp()));
    }

    /// Emitted for every slice of a chunk matched from a deposit into a minipool
    ///
    /// - topics - `["deposit_staked", deposit_id: BytesN<32>, minipool: Address]`
    /// - data - `[amount: i128, queued_amount: i128]`
    pub fn deposit_staked(
        env: &Env,
        deposit_id: BytesN<32>,
        minipool: Address,
        amount: i128,
        queued_amount: i128
    ) {
        let topics = (Symbol::new(env, "deposit_staked"), deposit_id, minipool);
        env.events().publish(topics, (amount, queued_amount));
    }

    /// Emitted when a fully matched deposit leaves its queue
    ///
    /// - topics - `["deposit_dequeued", duration_id: Symbol]`
    /// - data - `deposit_id: BytesN<32>`
    pub fn deposit_dequeued(env: &Env, duration_id: Symbol, deposit_id: BytesN<32>) {
        let topics = (Symbol::new(env, "deposit_dequeued"), duration_id);
        env.events().publish(topics, deposit_id);
    }

    /// Emitted when a whole chunk has been assigned to a minipool
    ///
    /// - topics - `["chunk_assigned", duration_id: Symbol, minipool: Address]`
    /// - data - `[chunk_size: i128, queue_balance: i128]`
    pub fn chunk_assigned(
        env: &Env,
        duration_id: Symbol,
        minipool: Address,
        chunk_size: i128,
        queue_balance: i128
    ) {
        let topics = (Symbol::new(env, "chunk_assigned"), duration_id, minipool);
        env.events().publish(topics, (chunk_size, queue_balance));
    }
}
