extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };

use super::setup::{ MinipoolTest, ETH, LAUNCH_AMOUNT, NODE_DEPOSIT, ONE_DAY };
use crate::storage::{ MinipoolStatus, StakingSnapshot };

#[test]
fn initialize_minipool_contract() {
    let test = MinipoolTest::new();

    let response = test.minipool.query_config();
    assert_eq!(response.admin, test.admin);
    assert_eq!(response.config.node, test.node);
    assert_eq!(response.config.launch_amount, LAUNCH_AMOUNT);
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Initialised);
    assert_eq!(test.minipool.query_staking(), StakingSnapshot::default());
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_should_fail() {
    let test = MinipoolTest::new();
    let config = test.minipool.query_config().config;

    test.minipool.initialize(&test.admin, &config);
}

#[test]
fn stake_forwards_pooled_ether() {
    let mut test = MinipoolTest::new();
    test.launch();

    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Staking);
    assert_eq!(test.minipool.query_staking(), StakingSnapshot {
        balance_start: LAUNCH_AMOUNT,
        balance_end: 0,
    });
    assert_eq!(test.ether.balance(&test.staking_address), LAUNCH_AMOUNT);
    assert_eq!(test.ether.balance(&test.minipool.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn stake_before_prelaunch_should_fail() {
    let mut test = MinipoolTest::new();
    test.minipool.node_deposit(&test.node);
    test.user_deposit(8 * ETH);

    test.minipool.stake(&test.node);
}

#[test]
fn prelaunch_times_out_without_stake() {
    let mut test = MinipoolTest::new();
    test.minipool.node_deposit(&test.node);
    test.user_deposit(16 * ETH);
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::PreLaunch);

    test.time_travel(ONE_DAY - 1);
    assert_eq!(test.minipool.update_status(), MinipoolStatus::PreLaunch);

    test.time_travel(1);
    assert_eq!(test.minipool.update_status(), MinipoolStatus::TimedOut);
    assert_eq!(test.minipool.query_status().time, 2 * ONE_DAY);
}

#[test]
fn staking_lifecycle_until_close() {
    let mut test = MinipoolTest::new();
    let [(first_user, first), (second_user, second)] = test.launch();

    test.minipool.logout(&test.admin);
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::LoggedOut);

    test.minipool.set_withdrawn(&test.admin, &0);
    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Withdrawn);

    test.minipool.withdraw(&first_user, &first, &first_user);
    test.minipool.withdraw(&second_user, &second, &second_user);
    test.minipool.close(&test.node);

    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Closed);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn logout_by_stranger_should_fail() {
    let mut test = MinipoolTest::new();
    test.launch();
    let stranger = Address::generate(&test.env);

    test.minipool.logout(&stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn set_withdrawn_while_staking_should_fail() {
    let mut test = MinipoolTest::new();
    test.launch();

    test.minipool.set_withdrawn(&test.admin, &(32 * ETH));
}

#[test]
#[should_panic(expected = "Error(Contract, #15)")]
fn close_with_open_deposits_should_fail() {
    let mut test = MinipoolTest::new();
    test.launch();
    test.settle(32 * ETH);

    test.minipool.close(&test.node);
}

#[test]
fn close_after_timeout_returns_node_ether() {
    let mut test = MinipoolTest::new();
    test.minipool.node_deposit(&test.node);
    let (user, deposit_id) = test.user_deposit(4 * ETH);

    test.time_travel(ONE_DAY);
    test.minipool.refund(&user, &deposit_id, &user);
    test.minipool.close(&test.node);

    assert_eq!(test.minipool.query_status().status, MinipoolStatus::Closed);
    assert_eq!(test.ether.balance(&test.node), NODE_DEPOSIT);
    assert_eq!(test.ether.balance(&user), 4 * ETH);
    assert_eq!(test.ether.balance(&test.minipool.address), 0);
    assert_eq!(test.minipool.query_node_deposit(), 0);
}
