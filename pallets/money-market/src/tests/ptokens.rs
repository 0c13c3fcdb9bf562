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
    Action, Error, ErrorKind, Event, FailureInfo,
};
use frame_support::{assert_err, assert_noop, assert_ok};

#[test]
fn transfer_ptoken_works() {
    new_test_ext().execute_with(|| {
        // DAVE has nothing, ALICE deposits 100 DOT
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(100)));
        assert_eq!(MoneyMarket::account_tokens(DOT, DAVE), 0);

        assert_ok!(MoneyMarket::transfer(
            RuntimeOrigin::signed(ALICE),
            DAVE,
            DOT,
            tokens(unit(50))
        ));
        assert_eq!(MoneyMarket::account_tokens(DOT, ALICE), tokens(unit(50)));
        assert_eq!(MoneyMarket::account_tokens(DOT, DAVE), tokens(unit(50)));
        assert_eq!(MoneyMarket::total_supply(DOT), tokens(unit(100)));
        System::assert_last_event(RuntimeEvent::MoneyMarket(Event::Transferred {
            asset_id: DOT,
            from: ALICE,
            to: DAVE,
            tokens: tokens(unit(50)),
        }));

        // the received tokens can be redeemed
        assert_ok!(MoneyMarket::redeem_all(RuntimeOrigin::signed(DAVE), DOT));
        assert_eq!(balance(DOT, &DAVE), unit(50));
    })
}

#[test]
fn transfer_to_self_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(100)));
        assert_noop!(
            MoneyMarket::transfer(RuntimeOrigin::signed(ALICE), ALICE, DOT, tokens(unit(10))),
            Error::<Test>::Failure(ErrorKind::BadInput, FailureInfo::TransferNotAllowed)
        );
    })
}

#[test]
fn transfer_more_than_balance_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(100)));
        assert_err!(
            MoneyMarket::transfer(RuntimeOrigin::signed(ALICE), BOB, DOT, tokens(unit(101))),
            Error::<Test>::Failure(ErrorKind::MathError, FailureInfo::TransferNotEnough)
        );
        assert_noop!(
            MoneyMarket::transfer(RuntimeOrigin::signed(ALICE), BOB, UNLISTED, 1),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::MarketNotListed,
                FailureInfo::TransferComptrollerRejection
            )
        );
    })
}

#[test]
fn transfer_locked_collateral_fails() {
    new_test_ext().execute_with(|| {
        // 200 DOT backs a borrow of 100 KSM, nothing is free
        alice_borrows(KSM, unit(100));
        assert_noop!(
            MoneyMarket::transfer(RuntimeOrigin::signed(ALICE), BOB, DOT, tokens(unit(1))),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::InsufficientLiquidity,
                FailureInfo::TransferComptrollerRejection
            )
        );
        assert_noop!(
            MoneyMarket::redeem(RuntimeOrigin::signed(ALICE), DOT, tokens(unit(1))),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::InsufficientLiquidity,
                FailureInfo::RedeemComptrollerRejection
            )
        );
    })
}

#[test]
fn paused_transfer_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(100)));
        assert_ok!(MoneyMarket::set_action_paused(
            RuntimeOrigin::root(),
            None,
            Action::Transfer,
            true
        ));
        assert_noop!(
            MoneyMarket::transfer(RuntimeOrigin::signed(ALICE), BOB, DOT, tokens(unit(10))),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::ActionPaused,
                FailureInfo::TransferComptrollerRejection
            )
        );
    })
}

#[test]
fn free_tokens_works() {
    new_test_ext().execute_with(|| {
        // borrowing power 100, half of it used
        alice_borrows(KSM, unit(50));
        assert_eq!(MoneyMarket::free_tokens(&ALICE, DOT), Ok(tokens(unit(100))));
        // BOB never entered a market, every token is free
        assert_eq!(MoneyMarket::free_tokens(&BOB, KSM), Ok(tokens(unit(500))));

        assert_ok!(MoneyMarket::transfer(
            RuntimeOrigin::signed(ALICE),
            CHARLIE,
            DOT,
            tokens(unit(100))
        ));
        assert_eq!(MoneyMarket::free_tokens(&ALICE, DOT), Ok(0));
    })
}
