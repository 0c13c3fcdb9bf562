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

#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, Encode};
use scale_info::TypeInfo;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use sp_runtime::{FixedU128, Permill, RuntimeDebug};

pub mod tokens;

/// Balance of an account.
pub type Balance = u128;

/// The fixed point number
pub type Rate = FixedU128;

/// The fixed point number, range from 0 to 1.
pub type Ratio = Permill;

pub type Liquidity = FixedU128;

pub type Shortfall = FixedU128;

pub type Price = FixedU128;

pub type Timestamp = u64;

pub type CurrencyId = u32;

pub type PriceDetail = (Price, Timestamp);

/// Six second blocks.
pub const BLOCKS_PER_YEAR: u128 = 365 * 24 * 60 * 10;

/// A feeder of asset prices denominated in a common unit.
///
/// The price is quoted for the smallest unit of the asset, so the value of an
/// amount is `price * amount` without further scaling.
pub trait PriceFeeder {
    fn get_price(asset_id: &CurrencyId) -> Option<PriceDetail>;
}

/// Market status exposed to runtime api consumers.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, Default, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct MarketStatus<Balance> {
    pub exchange_rate: Rate,
    pub borrow_rate: Rate,
    pub supply_rate: Rate,
    pub utilization: Ratio,
    pub total_supply: Balance,
    pub total_borrows: Balance,
    pub total_reserves: Balance,
    pub cash: Balance,
}
