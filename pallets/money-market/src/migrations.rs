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

use super::*;

pub mod v1 {
    use super::*;

    /// Market layout before borrow caps and reward enrolment.
    #[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
    pub struct Market {
        pub collateral_factor: Ratio,
        pub reserve_factor: Ratio,
        pub initial_exchange_rate: Rate,
        pub rate_model: InterestRateModel,
    }
}

pub mod v2 {
    use super::*;
    use crate::{Config, Version, Weight};
    use frame_support::{log, traits::Get};

    #[cfg(feature = "try-runtime")]
    pub fn pre_migrate<T: Config>() -> Result<Vec<u8>, &'static str> {
        frame_support::ensure!(
            Version::<T>::get() == crate::Versions::V1,
            "must upgrade linearly"
        );
        let markets = Markets::<T>::iter_keys().count() as u32;
        log::info!(
            target: "money_market::migrations",
            "money market v2 migration passes PRE migrate checks, {} markets",
            markets
        );
        Ok(markets.encode())
    }

    /// Appends `borrow_cap` and `reward_enabled` to every market and starts
    /// its reward indices.
    pub fn migrate<T: Config>() -> Weight {
        if Version::<T>::get() == crate::Versions::V1 {
            log::info!(
                target: "money_market::migrations",
                "migrating money market to Versions::V2"
            );

            let mut count: u64 = 0;
            Markets::<T>::translate::<v1::Market, _>(|_key, market| {
                count += 1;
                Some(Market {
                    collateral_factor: market.collateral_factor,
                    reserve_factor: market.reserve_factor,
                    initial_exchange_rate: market.initial_exchange_rate,
                    rate_model: market.rate_model,
                    borrow_cap: Zero::zero(),
                    reward_enabled: false,
                })
            });

            let now = <frame_system::Pallet<T>>::block_number();
            for asset_id in Markets::<T>::iter_keys() {
                if Pallet::<T>::reward_supply_state(asset_id).index.is_zero() {
                    Pallet::<T>::initialize_reward_state(asset_id, now);
                }
            }

            Version::<T>::put(crate::Versions::V2);
            log::info!(
                target: "money_market::migrations",
                "completed money market migration to Versions::V2, {} markets",
                count
            );

            T::DbWeight::get().reads_writes(count.saturating_mul(2) + 1, count.saturating_mul(3) + 1)
        } else {
            T::DbWeight::get().reads(1)
        }
    }

    #[cfg(feature = "try-runtime")]
    pub fn post_migrate<T: Config>(state: Vec<u8>) -> Result<(), &'static str> {
        frame_support::ensure!(
            Version::<T>::get() == crate::Versions::V2,
            "must upgrade to V2"
        );
        let markets: u32 = Decode::decode(&mut &state[..]).map_err(|_| "invalid pre state")?;
        frame_support::ensure!(
            Markets::<T>::iter_values().count() as u32 == markets,
            "markets lost in migration"
        );
        log::info!(
            target: "money_market::migrations",
            "money market v2 migration passes POST migrate checks"
        );
        Ok(())
    }
}
