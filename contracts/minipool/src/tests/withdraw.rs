extern crate std;

use pretty_assertions::assert_eq;
use rocketpool::math::fees::FeeBreakdown;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use super::setup::{ MinipoolTest, ETH, FEE_GROUP, FEE_RP };
use crate::storage::{ MinipoolStatus, StakingWithdrawal };

#[test]
fn withdraw_with_rewards_pays_fees_in_order() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();
    test.settle(36 * ETH);

    let fees = test.minipool.withdraw(&user, &deposit_id, &user);

    // 1 ETH earned: 5% protocol, 10% node, 20% of the remaining 0.85 to the group
    assert_eq!(fees, FeeBreakdown {
        protocol_fee: 500_000,
        node_fee: 1_000_000,
        group_fee: 1_700_000,
        net_reward: 6_800_000,
        payout: 86_800_000,
    });
    assert_eq!(test.rewards.balance(&user), 86_800_000);
    assert_eq!(test.rewards.balance(&test.protocol_fee_address), 500_000);
    assert_eq!(test.rewards.balance(&test.node), 1_000_000);
    assert_eq!(test.rewards.balance(&test.group_fee_address), 1_700_000);

    assert_eq!(test.minipool.query_deposit_count(), 1);
    assert_eq!(test.minipool.query_user_deposit_total(), 8 * ETH);
    assert!(test.minipool.try_query_deposit(&deposit_id).is_err());
}

#[test]
fn node_collects_remaining_rewards_on_close() {
    let mut test = MinipoolTest::new();
    let [(first_user, first), (second_user, second)] = test.launch();
    test.settle(36 * ETH);

    test.minipool.withdraw(&first_user, &first, &first_user);
    test.minipool.withdraw(&second_user, &second, &second_user);
    test.minipool.close(&test.node);

    // 36 minus two payouts and the protocol and group fees; the node fees arrived on withdraw
    assert_eq!(test.rewards.balance(&test.node), 18 * ETH + 2_000_000);
    assert_eq!(test.rewards.balance(&test.minipool.address), 0);
}

#[test]
fn group_fee_goes_to_current_fee_address() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();
    test.settle(36 * ETH);

    let new_fee_address = Address::generate(&test.env);
    test.group.set_fees(&FEE_RP, &FEE_GROUP, &new_fee_address);
    test.minipool.withdraw(&user, &deposit_id, &user);

    assert_eq!(test.rewards.balance(&new_fee_address), 1_700_000);
    assert_eq!(test.rewards.balance(&test.group_fee_address), 0);
}

#[test]
fn node_deposit_absorbs_small_loss() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();
    test.settle(28 * ETH);

    let fees = test.minipool.withdraw(&user, &deposit_id, &user);

    assert_eq!(fees.payout, 8 * ETH);
    assert_eq!(fees.net_reward, 0);
    assert_eq!(test.rewards.balance(&test.protocol_fee_address), 0);
    assert_eq!(test.rewards.balance(&test.node), 0);
}

#[test]
fn user_loss_is_capped_by_node_deposit() {
    let mut test = MinipoolTest::new();
    let [(first_user, first), (second_user, second)] = test.launch();
    test.settle(12 * ETH);

    let fees = test.minipool.withdraw(&first_user, &first, &first_user);
    assert_eq!(fees.payout, 6 * ETH);
    assert_eq!(fees.net_reward, -2 * ETH);
    assert_eq!(fees.protocol_fee + fees.node_fee + fees.group_fee, 0);

    test.minipool.withdraw(&second_user, &second, &second_user);
    assert_eq!(test.rewards.balance(&test.minipool.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn withdraw_while_staking_should_fail() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();

    test.minipool.withdraw(&user, &deposit_id, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn withdraw_of_foreign_deposit_should_fail() {
    let mut test = MinipoolTest::new();
    let [(_, deposit_id), (second_user, _)] = test.launch();
    test.settle(32 * ETH);

    test.minipool.withdraw(&second_user, &deposit_id, &second_user);
}

#[test]
fn staking_withdrawal_snapshots_fees_once() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();
    let withdrawn_address = Address::generate(&test.env);

    test.minipool.withdraw_staking(&user, &deposit_id, &(3 * ETH), &(3 * ETH), &withdrawn_address);

    let record = test.minipool.query_deposit(&deposit_id);
    assert_eq!(record.balance, 5 * ETH);
    assert_eq!(record.staking_tokens_withdrawn, 3 * ETH);
    assert_eq!(test.minipool.query_user_deposit_total(), 13 * ETH);

    test.group.set_fees(&0, &0, &withdrawn_address);
    test.minipool.logout(&test.admin);
    test.minipool.withdraw_staking(&user, &deposit_id, &(5 * ETH), &(4 * ETH), &withdrawn_address);

    assert_eq!(test.minipool.query_staking_withdrawal(&deposit_id), StakingWithdrawal {
        amount: 8 * ETH,
        fee_rp: FEE_RP,
        fee_group: FEE_GROUP,
        group_fee_address: test.group_fee_address.clone(),
        created: super::setup::ONE_DAY,
    });
    assert!(test.minipool.try_query_deposit(&deposit_id).is_err());
    assert_eq!(test.minipool.query_deposit_count(), 1);
    assert_eq!(test.minipool.query_user_deposit_total(), 8 * ETH);
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::LoggedOut);
}

#[test]
fn staking_withdrawal_keeps_deposit_fee_rates() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();
    let new_fee_address = Address::generate(&test.env);

    test.group.set_fees(&0, &0, &new_fee_address);
    test.minipool.withdraw_staking(&user, &deposit_id, &ETH, &ETH, &user);

    let record = test.minipool.query_deposit(&deposit_id);
    let withdrawal = test.minipool.query_staking_withdrawal(&deposit_id);
    assert_eq!(withdrawal.fee_rp, record.fee_rp);
    assert_eq!(withdrawal.fee_group, record.fee_group);
    assert_eq!(withdrawal.fee_rp, FEE_RP);
    assert_eq!(withdrawal.fee_group, FEE_GROUP);
    assert_eq!(withdrawal.group_fee_address, new_fee_address);
}

#[test]
#[should_panic(expected = "Error(Contract, #10)")]
fn staking_withdrawal_above_balance_should_fail() {
    let mut test = MinipoolTest::new();
    let [(user, deposit_id), _] = test.launch();

    test.minipool.withdraw_staking(&user, &deposit_id, &(9 * ETH), &0, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn staking_withdrawal_before_staking_should_fail() {
    let mut test = MinipoolTest::new();
    let (user, deposit_id) = test.user_deposit(ETH);

    test.minipool.withdraw_staking(&user, &deposit_id, &ETH, &ETH, &user);
}
