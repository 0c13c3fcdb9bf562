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

//! Benchmarks for the money market pallet.
//!
//! The underlying assets must already exist in `T::Assets` and have a price.

#![cfg(feature = "runtime-benchmarks")]

use super::*;

use crate::Pallet as MoneyMarket;
use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite, whitelisted_caller};
use frame_support::assert_ok;
use frame_system::RawOrigin as SystemOrigin;
use primitives::tokens::{DOT, KSM, USDT};
use sp_std::vec;

const SEED: u32 = 0;
const INITIAL_AMOUNT: u128 = 1_000_000_000_000_000;
const MARKETS: [CurrencyId; 3] = [KSM, DOT, USDT];

fn unit(d: u128) -> u128 {
    d.saturating_mul(10_u128.pow(12))
}

fn market_mock() -> Market {
    Market {
        collateral_factor: Ratio::from_percent(50),
        reserve_factor: Ratio::from_percent(15),
        initial_exchange_rate: Rate::saturating_from_rational(2, 100),
        rate_model: InterestRateModel::default(),
        borrow_cap: Zero::zero(),
        reward_enabled: false,
    }
}

fn set_up_market<T: Config>(asset_id: CurrencyId) {
    if MoneyMarket::<T>::market(asset_id).is_err() {
        assert_ok!(MoneyMarket::<T>::add_market(
            SystemOrigin::Root.into(),
            asset_id,
            market_mock()
        ));
    }
}

fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
    let who: T::AccountId = account(name, index, SEED);
    fund::<T>(&who);
    who
}

fn fund<T: Config>(who: &T::AccountId) {
    for asset_id in MARKETS {
        set_up_market::<T>(asset_id);
        assert_ok!(T::Assets::mint_into(asset_id, who, INITIAL_AMOUNT));
    }
}

// `who` supplies 200 DOT and borrows 50 KSM lent out by another account.
fn supply_and_borrow<T: Config>(who: &T::AccountId) {
    let lender = funded_account::<T>("lender", 0);
    assert_ok!(MoneyMarket::<T>::mint(
        SystemOrigin::Signed(lender).into(),
        KSM,
        unit(500)
    ));
    assert_ok!(MoneyMarket::<T>::mint(
        SystemOrigin::Signed(who.clone()).into(),
        DOT,
        unit(200)
    ));
    assert_ok!(MoneyMarket::<T>::enter_markets(
        SystemOrigin::Signed(who.clone()).into(),
        vec![DOT]
    ));
    assert_ok!(MoneyMarket::<T>::borrow(
        SystemOrigin::Signed(who.clone()).into(),
        KSM,
        unit(50)
    ));
}

benchmarks! {
    mint {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        let amount = unit(100);
    }: _(SystemOrigin::Signed(caller.clone()), DOT, amount)
    verify {
        assert_eq!(
            <T::Assets as Inspect<T::AccountId>>::balance(DOT, &caller),
            INITIAL_AMOUNT - amount,
        );
    }

    redeem {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(caller.clone()).into(), DOT, unit(100)));
        let tokens = MoneyMarket::<T>::account_tokens(DOT, &caller) / 2;
    }: _(SystemOrigin::Signed(caller.clone()), DOT, tokens)
    verify {
        assert_eq!(MoneyMarket::<T>::account_tokens(DOT, &caller), tokens);
    }

    redeem_all {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(caller.clone()).into(), DOT, unit(100)));
    }: _(SystemOrigin::Signed(caller.clone()), DOT)
    verify {
        assert_eq!(MoneyMarket::<T>::account_tokens(DOT, &caller), 0);
    }

    borrow {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(caller.clone()).into(), DOT, unit(200)));
        assert_ok!(MoneyMarket::<T>::enter_markets(SystemOrigin::Signed(caller.clone()).into(), vec![DOT]));
        let amount = unit(50);
    }: _(SystemOrigin::Signed(caller.clone()), DOT, amount)
    verify {
        assert_eq!(MoneyMarket::<T>::account_borrows(DOT, &caller).principal, amount);
    }

    repay_borrow {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
        let amount = unit(20);
    }: _(SystemOrigin::Signed(caller.clone()), KSM, amount)
    verify {
        assert_eq!(MoneyMarket::<T>::account_borrows(KSM, &caller).principal, unit(30));
    }

    repay_borrow_all {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
    }: _(SystemOrigin::Signed(caller.clone()), KSM)
    verify {
        assert_eq!(MoneyMarket::<T>::account_borrows(KSM, &caller).principal, 0);
    }

    liquidate_borrow {
        let borrower = funded_account::<T>("borrower", 0);
        supply_and_borrow::<T>(&borrower);
        assert_ok!(MoneyMarket::<T>::set_collateral_factor(
            SystemOrigin::Root.into(),
            DOT,
            Ratio::from_percent(10)
        ));
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        let amount = unit(20);
    }: _(SystemOrigin::Signed(caller.clone()), borrower.clone(), KSM, amount, DOT)
    verify {
        assert_eq!(MoneyMarket::<T>::account_borrows(KSM, &borrower).principal, unit(30));
        assert!(!MoneyMarket::<T>::account_tokens(DOT, &caller).is_zero());
    }

    transfer {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(caller.clone()).into(), DOT, unit(100)));
        let dest: T::AccountId = account("dest", 0, SEED);
        let tokens = MoneyMarket::<T>::account_tokens(DOT, &caller) / 2;
    }: _(SystemOrigin::Signed(caller.clone()), T::Lookup::unlookup(dest.clone()), DOT, tokens)
    verify {
        assert_eq!(MoneyMarket::<T>::account_tokens(DOT, &dest), tokens);
    }

    accrue_interest {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
        let now = frame_system::Pallet::<T>::block_number();
        frame_system::Pallet::<T>::set_block_number(now + 10u32.into());
    }: accrue_interest_for(SystemOrigin::Signed(caller), KSM)
    verify {
        assert!(MoneyMarket::<T>::borrow_index(KSM) > Rate::one());
    }

    enter_markets {
        let n in 1 .. 3;
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        let assets = MARKETS[..n as usize].to_vec();
    }: _(SystemOrigin::Signed(caller.clone()), assets)
    verify {
        assert_eq!(MoneyMarket::<T>::account_assets(&caller).len(), n as usize);
    }

    exit_market {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(caller.clone()).into(), DOT, unit(100)));
        assert_ok!(MoneyMarket::<T>::enter_markets(SystemOrigin::Signed(caller.clone()).into(), vec![DOT]));
    }: _(SystemOrigin::Signed(caller.clone()), DOT)
    verify {
        assert!(!MoneyMarket::<T>::check_membership(&caller, DOT));
    }

    claim_reward {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::set_reward_speeds(SystemOrigin::Root.into(), DOT, unit(1), unit(1)));
        supply_and_borrow::<T>(&caller);
        assert_ok!(T::Assets::mint_into(T::RewardAssetId::get(), &MoneyMarket::<T>::reward_account_id(), INITIAL_AMOUNT));
        let now = frame_system::Pallet::<T>::block_number();
        frame_system::Pallet::<T>::set_block_number(now + 10u32.into());
    }: _(SystemOrigin::Signed(caller.clone()))
    verify {
        assert!(MoneyMarket::<T>::reward_accrued(&caller).is_zero());
    }

    claim_reward_for {
        let h in 1 .. 3;
        let m in 1 .. 3;
        let caller: T::AccountId = whitelisted_caller();
        let holders: Vec<T::AccountId> = (0..h).map(|i| funded_account::<T>("holder", i)).collect();
        for holder in holders.iter() {
            assert_ok!(MoneyMarket::<T>::mint(SystemOrigin::Signed(holder.clone()).into(), DOT, unit(100)));
        }
        assert_ok!(MoneyMarket::<T>::set_reward_speeds(SystemOrigin::Root.into(), DOT, unit(1), 0));
        let markets = MARKETS[..m as usize].to_vec();
        let now = frame_system::Pallet::<T>::block_number();
        frame_system::Pallet::<T>::set_block_number(now + 10u32.into());
    }: _(SystemOrigin::Signed(caller), holders, markets, true, true)

    add_market {
        let asset_id = USDT + 1;
    }: _(SystemOrigin::Root, asset_id, Market { collateral_factor: Ratio::zero(), ..market_mock() })
    verify {
        assert!(MoneyMarket::<T>::market(asset_id).is_ok());
    }

    set_collateral_factor {
        set_up_market::<T>(DOT);
    }: _(SystemOrigin::Root, DOT, Ratio::from_percent(60))
    verify {
        assert_eq!(MoneyMarket::<T>::market(DOT).map(|m| m.collateral_factor), Ok(Ratio::from_percent(60)));
    }

    set_close_factor {
    }: _(SystemOrigin::Root, T::MaxCloseFactor::get())
    verify {
        assert_eq!(MoneyMarket::<T>::close_factor(), T::MaxCloseFactor::get());
    }

    set_liquidation_incentive {
        let incentive = Rate::saturating_from_rational(105, 100);
    }: _(SystemOrigin::Root, incentive)
    verify {
        assert_eq!(MoneyMarket::<T>::liquidation_incentive(), incentive);
    }

    set_reserve_factor {
        set_up_market::<T>(DOT);
    }: _(SystemOrigin::Root, DOT, Ratio::from_percent(20))
    verify {
        assert_eq!(MoneyMarket::<T>::market(DOT).map(|m| m.reserve_factor), Ok(Ratio::from_percent(20)));
    }

    set_rate_model {
        set_up_market::<T>(DOT);
        let rate_model = InterestRateModel::new_linear_model(
            Rate::saturating_from_rational(2, 100),
            Rate::saturating_from_rational(20, 100),
        );
    }: _(SystemOrigin::Root, DOT, rate_model)
    verify {
        assert_eq!(MoneyMarket::<T>::market(DOT).map(|m| m.rate_model), Ok(rate_model));
    }

    set_pause_guardian {
        let guardian: T::AccountId = account("guardian", 0, SEED);
    }: _(SystemOrigin::Root, Some(guardian.clone()))
    verify {
        assert_eq!(MoneyMarket::<T>::pause_guardian(), Some(guardian));
    }

    set_action_paused {
        set_up_market::<T>(DOT);
    }: _(SystemOrigin::Root, Some(DOT), Action::Mint, true)
    verify {
        assert!(MoneyMarket::<T>::is_action_paused(DOT, Action::Mint));
    }

    set_borrow_cap_guardian {
        let guardian: T::AccountId = account("guardian", 0, SEED);
    }: _(SystemOrigin::Root, Some(guardian.clone()))
    verify {
        assert_eq!(MoneyMarket::<T>::borrow_cap_guardian(), Some(guardian));
    }

    set_borrow_caps {
        let n in 1 .. 3;
        for asset_id in MARKETS {
            set_up_market::<T>(asset_id);
        }
        let caps: Vec<(CurrencyId, Balance)> = MARKETS[..n as usize]
            .iter()
            .map(|&asset_id| (asset_id, unit(1000)))
            .collect();
    }: _(SystemOrigin::Root, caps)
    verify {
        assert_eq!(MoneyMarket::<T>::market(KSM).map(|m| m.borrow_cap), Ok(unit(1000)));
    }

    add_reserves {
        let payer: T::AccountId = whitelisted_caller();
        fund::<T>(&payer);
        let amount = unit(100);
    }: _(SystemOrigin::Root, T::Lookup::unlookup(payer), DOT, amount)
    verify {
        assert_eq!(MoneyMarket::<T>::total_reserves(DOT), amount);
    }

    reduce_reserves {
        let payer: T::AccountId = whitelisted_caller();
        fund::<T>(&payer);
        assert_ok!(MoneyMarket::<T>::add_reserves(
            SystemOrigin::Root.into(),
            T::Lookup::unlookup(payer.clone()),
            DOT,
            unit(100)
        ));
    }: _(SystemOrigin::Root, T::Lookup::unlookup(payer), DOT, unit(40))
    verify {
        assert_eq!(MoneyMarket::<T>::total_reserves(DOT), unit(60));
    }

    set_reward_speeds {
        set_up_market::<T>(DOT);
    }: _(SystemOrigin::Root, DOT, unit(1), unit(2))
    verify {
        assert_eq!(MoneyMarket::<T>::reward_supply_speeds(DOT), unit(1));
        assert_eq!(MoneyMarket::<T>::reward_borrow_speeds(DOT), unit(2));
    }

    set_reward_rate {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::set_market_rewarded(SystemOrigin::Root.into(), KSM, true));
    }: _(SystemOrigin::Root, unit(10))
    verify {
        assert_eq!(MoneyMarket::<T>::reward_rate(), unit(10));
    }

    set_market_rewarded {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::set_reward_rate(SystemOrigin::Root.into(), unit(10)));
    }: _(SystemOrigin::Root, KSM, true)
    verify {
        assert_eq!(MoneyMarket::<T>::market(KSM).map(|m| m.reward_enabled), Ok(true));
    }

    refresh_reward_speeds {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        supply_and_borrow::<T>(&caller);
        assert_ok!(MoneyMarket::<T>::set_market_rewarded(SystemOrigin::Root.into(), KSM, true));
        RewardRate::<T>::put(unit(10));
    }: _(SystemOrigin::Signed(caller))
    verify {
        assert_eq!(MoneyMarket::<T>::reward_supply_speeds(KSM), unit(5));
    }

    add_reward {
        let caller: T::AccountId = whitelisted_caller();
        assert_ok!(T::Assets::mint_into(T::RewardAssetId::get(), &caller, INITIAL_AMOUNT));
        let amount = unit(100);
    }: _(SystemOrigin::Signed(caller), amount)
    verify {
        assert_eq!(
            <T::Assets as Inspect<T::AccountId>>::balance(
                T::RewardAssetId::get(),
                &MoneyMarket::<T>::reward_account_id()
            ),
            amount,
        );
    }
}

impl_benchmark_test_suite!(
    MoneyMarket,
    crate::mock::new_test_ext(),
    crate::mock::Test,
);
