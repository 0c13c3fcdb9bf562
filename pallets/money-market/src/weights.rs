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

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(clippy::all)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_money_market
pub trait WeightInfo {
    fn mint() -> Weight;
    fn redeem() -> Weight;
    fn redeem_all() -> Weight;
    fn borrow() -> Weight;
    fn repay_borrow() -> Weight;
    fn repay_borrow_all() -> Weight;
    fn liquidate_borrow() -> Weight;
    fn transfer() -> Weight;
    fn accrue_interest() -> Weight;
    fn enter_markets(n: u32) -> Weight;
    fn exit_market() -> Weight;
    fn claim_reward() -> Weight;
    fn claim_reward_for(h: u32, m: u32) -> Weight;
    fn add_market() -> Weight;
    fn set_collateral_factor() -> Weight;
    fn set_close_factor() -> Weight;
    fn set_liquidation_incentive() -> Weight;
    fn set_reserve_factor() -> Weight;
    fn set_rate_model() -> Weight;
    fn set_pause_guardian() -> Weight;
    fn set_action_paused() -> Weight;
    fn set_borrow_cap_guardian() -> Weight;
    fn set_borrow_caps(n: u32) -> Weight;
    fn add_reserves() -> Weight;
    fn reduce_reserves() -> Weight;
    fn set_reward_speeds() -> Weight;
    fn set_reward_rate() -> Weight;
    fn set_market_rewarded() -> Weight;
    fn refresh_reward_speeds() -> Weight;
    fn add_reward() -> Weight;
}

/// Weights for pallet_money_market using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn mint() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(T::DbWeight::get().reads(9 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn redeem() -> Weight {
        Weight::from_ref_time(55_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn redeem_all() -> Weight {
        Weight::from_ref_time(55_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn borrow() -> Weight {
        Weight::from_ref_time(70_000 as u64)
            .saturating_add(T::DbWeight::get().reads(14 as u64))
            .saturating_add(T::DbWeight::get().writes(7 as u64))
    }
    fn repay_borrow() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn repay_borrow_all() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn liquidate_borrow() -> Weight {
        Weight::from_ref_time(110_000 as u64)
            .saturating_add(T::DbWeight::get().reads(24 as u64))
            .saturating_add(T::DbWeight::get().writes(12 as u64))
    }
    fn transfer() -> Weight {
        Weight::from_ref_time(45_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(3 as u64))
    }
    fn accrue_interest() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(T::DbWeight::get().reads(7 as u64))
            .saturating_add(T::DbWeight::get().writes(7 as u64))
    }
    fn enter_markets(n: u32) -> Weight {
        Weight::from_ref_time(12_000 as u64)
            // Standard Error: 1_000
            .saturating_add(Weight::from_ref_time(8_000 as u64).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().reads(2 as u64).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().reads(1 as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn exit_market() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(T::DbWeight::get().reads(8 as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn claim_reward() -> Weight {
        Weight::from_ref_time(60_000 as u64)
            .saturating_add(T::DbWeight::get().reads(12 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn claim_reward_for(h: u32, m: u32) -> Weight {
        Weight::from_ref_time(20_000 as u64)
            .saturating_add(Weight::from_ref_time(30_000 as u64).saturating_mul(h as u64))
            .saturating_add(Weight::from_ref_time(25_000 as u64).saturating_mul(m as u64))
            .saturating_add(T::DbWeight::get().reads(3 as u64).saturating_mul(h as u64).saturating_mul(m as u64))
            .saturating_add(T::DbWeight::get().writes(2 as u64).saturating_mul(h as u64).saturating_mul(m as u64))
            .saturating_add(T::DbWeight::get().reads(2 as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn add_market() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(T::DbWeight::get().reads(2 as u64))
            .saturating_add(T::DbWeight::get().writes(5 as u64))
    }
    fn set_collateral_factor() -> Weight {
        Weight::from_ref_time(18_000 as u64)
            .saturating_add(T::DbWeight::get().reads(1 as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_close_factor() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_liquidation_incentive() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_reserve_factor() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(T::DbWeight::get().reads(8 as u64))
            .saturating_add(T::DbWeight::get().writes(8 as u64))
    }
    fn set_rate_model() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(T::DbWeight::get().reads(8 as u64))
            .saturating_add(T::DbWeight::get().writes(8 as u64))
    }
    fn set_pause_guardian() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_action_paused() -> Weight {
        Weight::from_ref_time(12_000 as u64)
            .saturating_add(T::DbWeight::get().reads(1 as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_borrow_cap_guardian() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(T::DbWeight::get().writes(1 as u64))
    }
    fn set_borrow_caps(n: u32) -> Weight {
        Weight::from_ref_time(10_000 as u64)
            // Standard Error: 1_000
            .saturating_add(Weight::from_ref_time(8_000 as u64).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().reads(2 as u64).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().writes(1 as u64).saturating_mul(n as u64))
    }
    fn add_reserves() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(9 as u64))
    }
    fn reduce_reserves() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(9 as u64))
    }
    fn set_reward_speeds() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(T::DbWeight::get().reads(8 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn set_reward_rate() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn set_market_rewarded() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(6 as u64))
    }
    fn refresh_reward_speeds() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(T::DbWeight::get().reads(10 as u64))
            .saturating_add(T::DbWeight::get().writes(5 as u64))
    }
    fn add_reward() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(T::DbWeight::get().reads(2 as u64))
            .saturating_add(T::DbWeight::get().writes(2 as u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(9 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn redeem() -> Weight {
        Weight::from_ref_time(55_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn redeem_all() -> Weight {
        Weight::from_ref_time(55_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn borrow() -> Weight {
        Weight::from_ref_time(70_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(14 as u64))
            .saturating_add(RocksDbWeight::get().writes(7 as u64))
    }
    fn repay_borrow() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn repay_borrow_all() -> Weight {
        Weight::from_ref_time(50_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn liquidate_borrow() -> Weight {
        Weight::from_ref_time(110_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(24 as u64))
            .saturating_add(RocksDbWeight::get().writes(12 as u64))
    }
    fn transfer() -> Weight {
        Weight::from_ref_time(45_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(3 as u64))
    }
    fn accrue_interest() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(7 as u64))
            .saturating_add(RocksDbWeight::get().writes(7 as u64))
    }
    fn enter_markets(n: u32) -> Weight {
        Weight::from_ref_time(12_000 as u64)
            // Standard Error: 1_000
            .saturating_add(Weight::from_ref_time(8_000 as u64).saturating_mul(n as u64))
            .saturating_add(RocksDbWeight::get().reads(2 as u64).saturating_mul(n as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64).saturating_mul(n as u64))
            .saturating_add(RocksDbWeight::get().reads(1 as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn exit_market() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(8 as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn claim_reward() -> Weight {
        Weight::from_ref_time(60_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(12 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn claim_reward_for(h: u32, m: u32) -> Weight {
        Weight::from_ref_time(20_000 as u64)
            .saturating_add(Weight::from_ref_time(30_000 as u64).saturating_mul(h as u64))
            .saturating_add(Weight::from_ref_time(25_000 as u64).saturating_mul(m as u64))
            .saturating_add(RocksDbWeight::get().reads(3 as u64).saturating_mul(h as u64).saturating_mul(m as u64))
            .saturating_add(RocksDbWeight::get().writes(2 as u64).saturating_mul(h as u64).saturating_mul(m as u64))
            .saturating_add(RocksDbWeight::get().reads(2 as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn add_market() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(2 as u64))
            .saturating_add(RocksDbWeight::get().writes(5 as u64))
    }
    fn set_collateral_factor() -> Weight {
        Weight::from_ref_time(18_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(1 as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_close_factor() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_liquidation_incentive() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_reserve_factor() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(8 as u64))
            .saturating_add(RocksDbWeight::get().writes(8 as u64))
    }
    fn set_rate_model() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(8 as u64))
            .saturating_add(RocksDbWeight::get().writes(8 as u64))
    }
    fn set_pause_guardian() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_action_paused() -> Weight {
        Weight::from_ref_time(12_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(1 as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_borrow_cap_guardian() -> Weight {
        Weight::from_ref_time(10_000 as u64)
            .saturating_add(RocksDbWeight::get().writes(1 as u64))
    }
    fn set_borrow_caps(n: u32) -> Weight {
        Weight::from_ref_time(10_000 as u64)
            // Standard Error: 1_000
            .saturating_add(Weight::from_ref_time(8_000 as u64).saturating_mul(n as u64))
            .saturating_add(RocksDbWeight::get().reads(2 as u64).saturating_mul(n as u64))
            .saturating_add(RocksDbWeight::get().writes(1 as u64).saturating_mul(n as u64))
    }
    fn add_reserves() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(9 as u64))
    }
    fn reduce_reserves() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(9 as u64))
    }
    fn set_reward_speeds() -> Weight {
        Weight::from_ref_time(30_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(8 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn set_reward_rate() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn set_market_rewarded() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(6 as u64))
    }
    fn refresh_reward_speeds() -> Weight {
        Weight::from_ref_time(40_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(10 as u64))
            .saturating_add(RocksDbWeight::get().writes(5 as u64))
    }
    fn add_reward() -> Weight {
        Weight::from_ref_time(25_000 as u64)
            .saturating_add(RocksDbWeight::get().reads(2 as u64))
            .saturating_add(RocksDbWeight::get().writes(2 as u64))
    }
}
