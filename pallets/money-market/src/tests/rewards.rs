// Copyright 2021 Parallel Finance Developer.
// This file is part of Parallel Finance.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    mock::*,
    tests::{alice_borrows, tokens},
    AccountTokens, Error, ErrorKind, Event, FailureInfo, RewardAccrued, TotalSupply,
    REWARD_INITIAL_INDEX, REWARD_SCALE,
};
use frame_support::{assert_noop, assert_ok};

fn fund_reward_reserve(amount: u128) {
    assert_ok!(MoneyMarket::add_reward(RuntimeOrigin::signed(ALICE), amount));
    assert_eq!(balance(HKO, &MoneyMarket::reward_account_id()), amount);
}

#[test]
fn sole_supplier_earns_whole_supply_speed() {
    new_test_ext().execute_with(|| {
        fund_reward_reserve(unit(500));
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward(RuntimeOrigin::signed(ALICE)));
        assert_eq!(balance(HKO, &ALICE), unit(600));
        assert_eq!(MoneyMarket::reward_accrued(ALICE), 0);
        System::assert_last_event(RuntimeEvent::MoneyMarket(Event::RewardGranted {
            who: ALICE,
            amount: unit(100),
        }));

        let state = MoneyMarket::reward_supply_state(KSM);
        assert_eq!(state.block, 101);
        assert_eq!(MoneyMarket::reward_supplier_index(KSM, ALICE), state.index);
    })
}

#[test]
fn suppliers_share_by_claim_tokens() {
    new_test_ext().execute_with(|| {
        fund_reward_reserve(unit(500));
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), KSM, unit(300)));
        assert_eq!(MoneyMarket::total_supply(KSM), tokens(unit(400)));

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward_for(
            RuntimeOrigin::signed(CHARLIE),
            vec![ALICE, BOB],
            vec![KSM],
            false,
            true
        ));
        assert_eq!(balance(HKO, &ALICE), unit(500) + unit(25));
        assert_eq!(balance(HKO, &BOB), unit(75));
    })
}

#[test]
fn speed_change_applies_from_its_block() {
    new_test_ext().execute_with(|| {
        fund_reward_reserve(unit(500));
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));

        run_to_block(51);
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(3),
            0
        ));
        assert_eq!(MoneyMarket::reward_supply_state(KSM).block, 51);

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward(RuntimeOrigin::signed(ALICE)));
        assert_eq!(balance(HKO, &ALICE), unit(500) + unit(200));
    })
}

#[test]
fn transfer_checkpoints_both_parties() {
    new_test_ext().execute_with(|| {
        fund_reward_reserve(unit(500));
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));

        run_to_block(51);
        assert_ok!(MoneyMarket::transfer(
            RuntimeOrigin::signed(ALICE),
            BOB,
            KSM,
            tokens(unit(100))
        ));
        assert_eq!(MoneyMarket::reward_accrued(ALICE), unit(50));
        assert_eq!(MoneyMarket::reward_accrued(BOB), 0);

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward_for(
            RuntimeOrigin::signed(ALICE),
            vec![ALICE, BOB],
            vec![KSM],
            false,
            true
        ));
        assert_eq!(balance(HKO, &ALICE), unit(500) + unit(50));
        assert_eq!(balance(HKO, &BOB), unit(50));
    })
}

#[test]
fn borrower_earns_borrow_speed() {
    new_test_ext().execute_with(|| {
        fund_reward_reserve(unit(500));
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            DOT,
            0,
            unit(1)
        ));
        alice_borrows(DOT, unit(50));

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward_for(
            RuntimeOrigin::signed(BOB),
            vec![ALICE],
            vec![DOT],
            true,
            false
        ));
        assert_eq!(balance(HKO, &ALICE), unit(500) + unit(100));
        assert_eq!(
            MoneyMarket::reward_borrower_index(DOT, ALICE),
            MoneyMarket::reward_borrow_state(DOT).index
        );
    })
}

#[test]
fn claim_keeps_accrual_when_reserve_is_short() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));

        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward(RuntimeOrigin::signed(ALICE)));
        assert_eq!(balance(HKO, &ALICE), unit(1000));
        assert_eq!(RewardAccrued::<Test>::get(ALICE), unit(100));

        // paid out once the reserve is funded
        fund_reward_reserve(unit(100));
        assert_ok!(MoneyMarket::claim_reward(RuntimeOrigin::signed(ALICE)));
        assert_eq!(balance(HKO, &ALICE), unit(1000));
        assert_eq!(RewardAccrued::<Test>::get(ALICE), 0);
    })
}

#[test]
fn refresh_reward_speeds_splits_by_borrowed_value() {
    new_test_ext().execute_with(|| {
        alice_borrows(DOT, unit(25));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(CHARLIE), USDT, unit(500)));
        assert_ok!(MoneyMarket::enter_markets(
            RuntimeOrigin::signed(CHARLIE),
            vec![USDT]
        ));
        assert_ok!(MoneyMarket::borrow(RuntimeOrigin::signed(CHARLIE), KSM, unit(75)));

        assert_ok!(MoneyMarket::set_reward_rate(RuntimeOrigin::root(), unit(10)));
        // nothing is rewarded yet
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), 0);

        assert_ok!(MoneyMarket::set_market_rewarded(RuntimeOrigin::root(), DOT, true));
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), unit(5));
        assert_eq!(MoneyMarket::reward_borrow_speeds(DOT), unit(5));

        assert_ok!(MoneyMarket::set_market_rewarded(RuntimeOrigin::root(), KSM, true));
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), 1_250_000_000_000);
        assert_eq!(MoneyMarket::reward_borrow_speeds(DOT), 1_250_000_000_000);
        assert_eq!(MoneyMarket::reward_supply_speeds(KSM), 3_750_000_000_000);
        assert_eq!(MoneyMarket::reward_borrow_speeds(KSM), 3_750_000_000_000);
        assert_eq!(MoneyMarket::reward_supply_speeds(USDT), 0);
        assert_eq!(MoneyMarket::reward_borrow_speeds(USDT), 0);

        // anyone can refresh, speeds follow the borrowed value
        assert_ok!(MoneyMarket::repay_borrow_all(RuntimeOrigin::signed(CHARLIE), KSM));
        assert_ok!(MoneyMarket::refresh_reward_speeds(RuntimeOrigin::signed(DAVE)));
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), unit(5));
        assert_eq!(MoneyMarket::reward_supply_speeds(KSM), 0);
    })
}

#[test]
fn refresh_keeps_speeds_of_unrewarded_markets() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            unit(2)
        ));
        assert_ok!(MoneyMarket::refresh_reward_speeds(RuntimeOrigin::signed(DAVE)));
        assert_eq!(MoneyMarket::reward_supply_speeds(KSM), unit(1));
        assert_eq!(MoneyMarket::reward_borrow_speeds(KSM), unit(2));

        // rewarded markets are still recomputed around it
        alice_borrows(DOT, unit(25));
        assert_ok!(MoneyMarket::set_reward_rate(RuntimeOrigin::root(), unit(10)));
        assert_ok!(MoneyMarket::set_market_rewarded(RuntimeOrigin::root(), DOT, true));
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), unit(5));
        assert_eq!(MoneyMarket::reward_borrow_speeds(DOT), unit(5));
        assert_eq!(MoneyMarket::reward_supply_speeds(KSM), unit(1));
        assert_eq!(MoneyMarket::reward_borrow_speeds(KSM), unit(2));

        // a market dropped from distribution stops earning
        assert_ok!(MoneyMarket::set_market_rewarded(RuntimeOrigin::root(), DOT, false));
        assert_eq!(MoneyMarket::reward_supply_speeds(DOT), 0);
        assert_eq!(MoneyMarket::reward_borrow_speeds(DOT), 0);
        assert_eq!(MoneyMarket::reward_supply_speeds(KSM), unit(1));
    })
}

#[test]
fn supply_index_follows_speed_over_stake() {
    new_test_ext().execute_with(|| {
        let supply = 10 * 10_u128.pow(18);
        TotalSupply::<Test>::insert(KSM, supply);
        AccountTokens::<Test>::insert(KSM, ALICE, supply);
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            5 * 10_u128.pow(17),
            0
        ));

        // 0.5e18 * 100 blocks / 10e18 stake moves the index by 5
        run_to_block(101);
        assert_ok!(MoneyMarket::distribute_supplier_reward_current(KSM, &ALICE));
        assert_eq!(MoneyMarket::reward_supply_state(KSM).index, 6 * REWARD_SCALE);
        assert_eq!(MoneyMarket::reward_accrued(ALICE), 50 * 10_u128.pow(18));
    })
}

// ALICE holds a quarter of the supply and BOB the rest. `first` is distributed
// to halfway through, then both at the end.
fn supplier_rewards(first: AccountId, second: AccountId) -> (u128, u128) {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), KSM, unit(300)));

        run_to_block(51);
        assert_ok!(MoneyMarket::distribute_supplier_reward_current(KSM, &first));
        run_to_block(101);
        assert_ok!(MoneyMarket::distribute_supplier_reward_current(KSM, &second));
        assert_ok!(MoneyMarket::distribute_supplier_reward_current(KSM, &first));

        (MoneyMarket::reward_accrued(ALICE), MoneyMarket::reward_accrued(BOB))
    })
}

#[test]
fn distribution_order_does_not_change_rewards() {
    assert_eq!(supplier_rewards(ALICE, BOB), (unit(25), unit(75)));
    assert_eq!(supplier_rewards(BOB, ALICE), (unit(25), unit(75)));
}

#[test]
fn reward_accrued_current_persists_nothing() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::set_reward_speeds(
            RuntimeOrigin::root(),
            KSM,
            unit(1),
            0
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));

        run_to_block(101);
        assert_eq!(MoneyMarket::reward_accrued_current(&ALICE), Ok(unit(100)));
        assert_eq!(MoneyMarket::reward_accrued(ALICE), 0);
        assert_eq!(MoneyMarket::reward_supply_state(KSM).block, 1);
        assert_eq!(
            MoneyMarket::reward_supply_state(KSM).index,
            REWARD_INITIAL_INDEX
        );
    })
}

#[test]
fn zero_speed_leaves_index_untouched() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), KSM, unit(100)));
        run_to_block(101);
        assert_ok!(MoneyMarket::claim_reward(RuntimeOrigin::signed(ALICE)));

        let state = MoneyMarket::reward_supply_state(KSM);
        assert_eq!(state.index, REWARD_INITIAL_INDEX);
        assert_eq!(state.block, 1);
        assert_eq!(MoneyMarket::reward_accrued(ALICE), 0);
    })
}

#[test]
fn set_reward_speeds_checks_origin_and_market() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            MoneyMarket::set_reward_speeds(RuntimeOrigin::signed(ALICE), KSM, unit(1), unit(1)),
            Error::<Test>::Failure(ErrorKind::Unauthorized, FailureInfo::SetRewardSpeedsOwnerCheck)
        );
        assert_noop!(
            MoneyMarket::set_reward_speeds(RuntimeOrigin::root(), UNLISTED, unit(1), unit(1)),
            Error::<Test>::Failure(ErrorKind::MarketNotListed, FailureInfo::SetRewardSpeedsNoExists)
        );
        assert_noop!(
            MoneyMarket::set_reward_rate(RuntimeOrigin::signed(ALICE), unit(1)),
            Error::<Test>::Failure(ErrorKind::Unauthorized, FailureInfo::SetRewardRateOwnerCheck)
        );
        assert_noop!(
            MoneyMarket::add_reward(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::InvalidAmount
        );
    })
}

#[test]
fn claim_rejects_unlisted_market() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            MoneyMarket::claim_reward_for(
                RuntimeOrigin::signed(ALICE),
                vec![ALICE],
                vec![KSM, UNLISTED],
                true,
                true
            ),
            Error::<Test>::Failure(
                ErrorKind::MarketNotListed,
                FailureInfo::ClaimRewardMarketNotListed
            )
        );
    })
}
