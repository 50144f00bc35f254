extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address, BytesN };

use super::setup::{ MinipoolTest, ETH, FEE_GROUP, FEE_RP, NODE_DEPOSIT, ONE_DAY };
use crate::storage::{ MinipoolDeposit, MinipoolStatus };

#[test]
fn deposit_registers_record_once() {
    let mut test = MinipoolTest::new();

    let (user, deposit_id) = test.user_deposit(3 * ETH);
    test.forward(&deposit_id, &user, 2 * ETH);

    assert_eq!(test.minipool.query_deposit(&deposit_id), MinipoolDeposit {
        user: user.clone(),
        group: test.group.address.clone(),
        balance: 5 * ETH,
        staking_tokens_withdrawn: 0,
        fee_rp: FEE_RP,
        fee_group: FEE_GROUP,
        created: ONE_DAY,
        id_index: 0,
    });
    assert_eq!(test.minipool.query_deposit_count(), 1);
    assert_eq!(test.minipool.query_user_deposit_total(), 5 * ETH);
}

#[test]
fn fee_rates_are_snapshotted_at_registration() {
    let mut test = MinipoolTest::new();

    let (user, deposit_id) = test.user_deposit(ETH);
    test.group.set_fees(&0, &0, &test.group_fee_address);
    test.forward(&deposit_id, &user, ETH);

    let record = test.minipool.query_deposit(&deposit_id);
    assert_eq!(record.fee_rp, FEE_RP);
    assert_eq!(record.fee_group, FEE_GROUP);
}

#[test]
fn funded_minipool_moves_to_prelaunch() {
    let mut test = MinipoolTest::new();
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Initialised);

    test.user_deposit(16 * ETH);
    // users alone never launch a minipool
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Initialised);

    test.minipool.node_deposit(&test.node);
    assert_eq!(test.minipool.query_node_deposit(), NODE_DEPOSIT);
    assert_eq!(test.ether.balance(&test.node), 0);

    let status = test.minipool.query_status();
    assert_eq!(status.status, MinipoolStatus::PreLaunch);
    assert_eq!(status.time, ONE_DAY);
}

#[test]
#[should_panic(expected = "Error(Contract, #11)")]
fn deposit_beyond_capacity_should_fail() {
    let mut test = MinipoolTest::new();

    test.user_deposit(10 * ETH);
    test.user_deposit(7 * ETH);
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn deposit_without_ether_should_fail() {
    let test = MinipoolTest::new();
    let user = Address::generate(&test.env);
    let deposit_id = BytesN::from_array(&test.env, &[7; 32]);

    test.minipool.deposit(&deposit_id, &user, &test.group.address, &ETH);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn zero_deposit_should_fail() {
    let mut test = MinipoolTest::new();

    test.user_deposit(0);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn deposit_with_unpayable_fee_rates_should_fail() {
    let mut test = MinipoolTest::new();
    // 95% protocol fee next to the 10% node fee
    test.group.set_fees(&9_500, &0, &test.group_fee_address);

    test.user_deposit(ETH);
}

#[test]
fn deposit_accepts_fee_rates_up_to_the_base() {
    let mut test = MinipoolTest::new();
    test.group.set_fees(&9_000, &FEE_GROUP, &test.group_fee_address);

    let (_, deposit_id) = test.user_deposit(ETH);

    assert_eq!(test.minipool.query_deposit(&deposit_id).fee_rp, 9_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #14)")]
fn second_node_deposit_should_fail() {
    let test = MinipoolTest::new();
    super::setup::mint(&test.env, &test.ether, &test.node, NODE_DEPOSIT);

    test.minipool.node_deposit(&test.node);
    test.minipool.node_deposit(&test.node);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn node_deposit_by_stranger_should_fail() {
    let test = MinipoolTest::new();
    let stranger = Address::generate(&test.env);

    test.minipool.node_deposit(&stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn deposit_after_timeout_should_fail() {
    let mut test = MinipoolTest::new();

    test.user_deposit(ETH);
    test.time_travel(ONE_DAY);
    test.user_deposit(ETH);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn refund_before_timeout_should_fail() {
    let mut test = MinipoolTest::new();
    let (user, deposit_id) = test.user_deposit(ETH);

    test.minipool.refund(&user, &deposit_id, &user);
}

#[test]
fn refund_after_timeout() {
    let mut test = MinipoolTest::new();
    let (user, deposit_id) = test.user_deposit(3 * ETH);
    let refund_address = Address::generate(&test.env);

    test.time_travel(ONE_DAY);
    assert_eq!(test.minipool.refund(&user, &deposit_id, &refund_address), 3 * ETH);

    assert_eq!(test.minipool.query_status().status, MinipoolStatus::TimedOut);
    assert_eq!(test.ether.balance(&refund_address), 3 * ETH);
    assert_eq!(test.minipool.query_user_deposit_total(), 0);
    assert_eq!(test.minipool.query_deposit_count(), 0);
    assert!(test.minipool.try_query_deposit(&deposit_id).is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn refund_of_foreign_deposit_should_fail() {
    let mut test = MinipoolTest::new();
    let (_, deposit_id) = test.user_deposit(ETH);
    let thief = Address::generate(&test.env);

    test.time_travel(ONE_DAY);
    test.minipool.refund(&thief, &deposit_id, &thief);
}

#[test]
fn removing_middle_deposit_compacts_ids() {
    let mut test = MinipoolTest::new();
    let (_, first) = test.user_deposit(4 * ETH);
    let (second_user, second) = test.user_deposit(4 * ETH);
    let (_, third) = test.user_deposit(4 * ETH);
    assert_eq!(test.minipool.query_deposit_ids(), vec![
        &test.env,
        first.clone(),
        second.clone(),
        third.clone(),
    ]);

    test.time_travel(ONE_DAY);
    test.minipool.refund(&second_user, &second, &second_user);

    assert_eq!(test.minipool.query_deposit_ids(), vec![&test.env, first.clone(), third.clone()]);
    assert_eq!(test.minipool.query_deposit(&first).id_index, 0);
    assert_eq!(test.minipool.query_deposit(&third).id_index, 1);
    assert_eq!(test.minipool.query_user_deposit_total(), 8 * ETH);
}
