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
    Error, ErrorKind, FailureInfo, Market,
};
use frame_support::{assert_err, assert_noop, assert_ok};
use primitives::{Price, Rate, Ratio};
use sp_runtime::{traits::Zero, FixedPointNumber};

#[test]
fn repay_all_after_interest_leaves_no_debt() {
    new_test_ext().execute_with(|| {
        alice_borrows(KSM, unit(50));
        run_to_block(1001);
        assert_ok!(MoneyMarket::accrue_interest_for(RuntimeOrigin::signed(BOB), KSM));
        assert!(MoneyMarket::total_borrows(KSM) > unit(50));

        assert_ok!(MoneyMarket::repay_borrow_all(RuntimeOrigin::signed(ALICE), KSM));
        assert_eq!(MoneyMarket::borrow_balance_stored(&ALICE, KSM), Ok(0));
        assert_eq!(MoneyMarket::total_borrows(KSM), 0);
        assert!(balance(KSM, &ALICE) < unit(1000));
    })
}

#[test]
fn mint_then_redeem_returns_the_amount() {
    new_test_ext().execute_with(|| {
        let amount = 123_456_789;
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), DOT, amount));
        let minted = MoneyMarket::account_tokens(DOT, BOB);
        assert_eq!(minted, tokens(amount));

        assert_ok!(MoneyMarket::redeem(RuntimeOrigin::signed(BOB), DOT, minted));
        assert_eq!(balance(DOT, &BOB), unit(1000));
        assert_eq!(MoneyMarket::account_tokens(DOT, BOB), 0);
        assert_eq!(MoneyMarket::get_cash(DOT), 0);
    })
}

#[test]
fn redeem_underlying_rounding_to_zero_tokens_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::add_market(
            RuntimeOrigin::root(),
            UNLISTED,
            Market {
                collateral_factor: Ratio::zero(),
                initial_exchange_rate: Rate::saturating_from_integer(2),
                ..MARKET_MOCK
            }
        ));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), UNLISTED, 10));
        assert_eq!(MoneyMarket::account_tokens(UNLISTED, ALICE), 5);

        assert_noop!(
            MoneyMarket::redeem_underlying(RuntimeOrigin::signed(ALICE), UNLISTED, 1),
            Error::<Test>::InvalidAmount
        );
        assert_ok!(MoneyMarket::redeem_underlying(
            RuntimeOrigin::signed(ALICE),
            UNLISTED,
            2
        ));
        assert_eq!(MoneyMarket::account_tokens(UNLISTED, ALICE), 4);
    })
}

#[test]
fn exit_market_with_borrow_fails() {
    new_test_ext().execute_with(|| {
        alice_borrows(KSM, unit(50));
        assert_noop!(
            MoneyMarket::exit_market(RuntimeOrigin::signed(ALICE), KSM),
            Error::<Test>::Failure(ErrorKind::NonzeroBorrowBalance, FailureInfo::ExitMarketBalanceOwed)
        );
    })
}

#[test]
fn exit_market_creating_shortfall_fails() {
    new_test_ext().execute_with(|| {
        alice_borrows(KSM, unit(50));
        assert_noop!(
            MoneyMarket::exit_market(RuntimeOrigin::signed(ALICE), DOT),
            Error::<Test>::Failure(ErrorKind::InsufficientLiquidity, FailureInfo::ExitMarketRejection)
        );
        assert!(MoneyMarket::check_membership(&ALICE, DOT));
    })
}

#[test]
fn borrow_more_than_cash_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), KSM, unit(10)));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(200)));
        assert_ok!(MoneyMarket::enter_markets(
            RuntimeOrigin::signed(ALICE),
            vec![DOT]
        ));

        assert_err!(
            MoneyMarket::borrow(RuntimeOrigin::signed(ALICE), KSM, unit(50)),
            Error::<Test>::Failure(ErrorKind::InsufficientCash, FailureInfo::BorrowCashNotAvailable)
        );
        assert_eq!(MoneyMarket::total_borrows(KSM), 0);
    })
}

#[test]
fn redeem_more_than_cash_fails() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(200)));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), KSM, unit(500)));
        assert_ok!(MoneyMarket::enter_markets(
            RuntimeOrigin::signed(BOB),
            vec![KSM]
        ));
        assert_ok!(MoneyMarket::borrow(RuntimeOrigin::signed(BOB), DOT, unit(150)));
        assert_eq!(MoneyMarket::get_cash(DOT), unit(50));

        assert_err!(
            MoneyMarket::redeem(RuntimeOrigin::signed(ALICE), DOT, tokens(unit(200))),
            Error::<Test>::Failure(
                ErrorKind::InsufficientCash,
                FailureInfo::RedeemTransferOutNotPossible
            )
        );
        assert_ok!(MoneyMarket::redeem(
            RuntimeOrigin::signed(ALICE),
            DOT,
            tokens(unit(50))
        ));
        assert_eq!(MoneyMarket::get_cash(DOT), 0);
    })
}

#[test]
fn zero_price_rejects_borrow() {
    new_test_ext().execute_with(|| {
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(BOB), KSM, unit(500)));
        assert_ok!(MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, unit(200)));
        assert_ok!(MoneyMarket::enter_markets(
            RuntimeOrigin::signed(ALICE),
            vec![DOT]
        ));

        MockPriceFeeder::set_price(KSM, Price::zero());
        assert_err!(
            MoneyMarket::borrow(RuntimeOrigin::signed(ALICE), KSM, unit(10)),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::PriceError,
                FailureInfo::BorrowComptrollerRejection
            )
        );

        // a collateral without price can't back anything either
        MockPriceFeeder::reset();
        MockPriceFeeder::remove_price(DOT);
        assert_err!(
            MoneyMarket::borrow(RuntimeOrigin::signed(ALICE), KSM, unit(10)),
            Error::<Test>::ComptrollerRejection(
                ErrorKind::PriceError,
                FailureInfo::BorrowComptrollerRejection
            )
        );
        MockPriceFeeder::reset();
        assert_ok!(MoneyMarket::borrow(RuntimeOrigin::signed(ALICE), KSM, unit(10)));
    })
}

#[test]
fn zero_amounts_are_rejected() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            MoneyMarket::mint(RuntimeOrigin::signed(ALICE), DOT, 0),
            Error::<Test>::InvalidAmount
        );
        assert_noop!(
            MoneyMarket::borrow(RuntimeOrigin::signed(ALICE), DOT, 0),
            Error::<Test>::InvalidAmount
        );
        assert_noop!(
            MoneyMarket::repay_borrow(RuntimeOrigin::signed(ALICE), DOT, 0),
            Error::<Test>::InvalidAmount
        );
        assert_noop!(
            MoneyMarket::redeem(RuntimeOrigin::signed(ALICE), DOT, 0),
            Error::<Test>::InvalidAmount
        );
    })
}
