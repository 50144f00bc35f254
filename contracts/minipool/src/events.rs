use soroban_sdk::{ Address, BytesN, Env, Symbol };

use rocketpool::math::fees::FeeBreakdown;

pub struct MinipoolEvents {}

impl MinipoolEvents {
    /// Emitted when the minipool is initialized
    ///
    /// - topics - `["initialize", node: Address]`
    /// - data - `[duration_id: Symbol, launch_amount: i128]`
    pub fn initialize(env: &Env, node: Address, duration_id: Symbol, launch_amount: i128) {
        let topics = (Symbol::new(env, "initialize"), node);
        env.events().publish(topics, (duration_id, launch_amount));
    }

    /// Emitted when the status changes
    ///
    /// - topics - `["status_changed"]`
    /// - data - `[from: u32, to: u32, ts: u64]`
    pub fn status_changed(env: &Env, from: u32, to: u32) {
        let topics = (Symbol::new(env, "status_changed"),);
        env.events().publish(topics, (from, to, env.ledger().timestamp()));
    }

    /// - topics - `["node_deposit", node: Address]`
    /// - data - `amount: i128`
    pub fn node_deposit(env: &Env, node: Address, amount: i128) {
        let topics = (Symbol::new(env, "node_deposit"), node);
        env.events().publish(topics, amount);
    }

    /// Emitted when the deposit queue forwards part of a user deposit
    ///
    /// - topics - `["deposit", user: Address, group: Address]`
    /// - data - `[deposit_id: BytesN<32>, amount: i128, balance: i128]`
    pub fn deposit(
        env: &Env,
        user: Address,
        group: Address,
        deposit_id: BytesN<32>,
        amount: i128,
        balance: i128
    ) {
        let topics = (Symbol::new(env, "deposit"), user, group);
        env.events().publish(topics, (deposit_id, amount, balance));
    }

    /// - topics - `["refund", user: Address]`
    /// - data - `[deposit_id: BytesN<32>, refund_address: Address, amount: i128]`
    pub fn refund(
        env: &Env,
        user: Address,
        deposit_id: BytesN<32>,
        refund_address: Address,
        amount: i128
    ) {
        let topics = (Symbol::new(env, "refund"), user);
        env.events().publish(topics, (deposit_id, refund_address, amount));
    }

    /// Emitted for an early withdrawal while staking
    ///
    /// - topics - `["staking_withdrawal", user: Address]`
    /// - data - `[deposit_id: BytesN<32>, withdrawn_address: Address, withdrawn_amount: i128, token_amount: i128]`
    pub fn staking_withdrawal(
        env: &Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawn_address: Address,
        withdrawn_amount: i128,
        token_amount: i128
    ) {
        let topics = (Symbol::new(env, "staking_withdrawal"), user);
        env.events().publish(topics, (deposit_id, withdrawn_address, withdrawn_amount, token_amount));
    }

    /// Emitted when a user withdraws after staking settled
    ///
    /// - topics - `["withdrawal", user: Address]`
    /// - data - `[deposit_id: BytesN<32>, withdrawal_address: Address, fees: FeeBreakdown]`
    pub fn withdrawal(
        env: &Env,
        user: Address,
        deposit_id: BytesN<32>,
        withdrawal_address: Address,
        fees: FeeBreakdown
    ) {
        let topics = (Symbol::new(env, "withdrawal"), user);
        env.events().publish(topics, (deposit_id, withdrawal_address, fees));
    }

    /// - topics - `["close", node: Address]`
    /// - data - `[ether: i128, rewards: i128]`
    pub fn close(env: &Env, node: Address, ether: i128, rewards: i128) {
        let topics = (Symbol::new(env, "close"), node);
        env.events().publish(topics, (ether, rewards));
    }
}
