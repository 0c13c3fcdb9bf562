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

//! Reward flywheel.
//!
//! Each market keeps a supply and a borrow index of reward per unit of stake.
//! Indices only move while the speed of their side is non-zero. Accounts keep
//! a checkpoint of each index and accrue `(index - checkpoint) * stake` when
//! distributed to. The borrow stake is the borrow balance divided by the
//! market `BorrowIndex`, so interest does not earn reward.

use sp_runtime::DispatchResult;

use crate::*;

/// Scale of the reward indices.
pub const REWARD_SCALE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

/// Index of a freshly listed market, and the checkpoint assumed for accounts
/// that never had one.
pub const REWARD_INITIAL_INDEX: u128 = REWARD_SCALE;

impl<T: Config> Pallet<T> {
    /// Account holding the reward reserve.
    pub fn reward_account_id() -> T::AccountId {
        T::PalletId::get().into_sub_account_truncating("reward")
    }

    pub(crate) fn initialize_reward_state(asset_id: CurrencyId, now: T::BlockNumber) {
        let state = RewardMarketState {
            index: REWARD_INITIAL_INDEX,
            block: now,
        };
        RewardSupplyState::<T>::insert(asset_id, state);
        RewardBorrowState::<T>::insert(asset_id, state);
    }

    pub(crate) fn update_reward_supply_index(asset_id: CurrencyId) -> DispatchResult {
        let speed = Self::reward_supply_speeds(asset_id);
        let total_stake = Self::total_supply(asset_id);
        RewardSupplyState::<T>::try_mutate(asset_id, |state| {
            Self::advance_reward_index(state, speed, total_stake)
        })
    }

    pub(crate) fn update_reward_borrow_index(asset_id: CurrencyId) -> DispatchResult {
        let speed = Self::reward_borrow_speeds(asset_id);
        let total_stake = Self::borrow_stake(Self::total_borrows(asset_id), asset_id)?;
        RewardBorrowState::<T>::try_mutate(asset_id, |state| {
            Self::advance_reward_index(state, speed, total_stake)
        })
    }

    // index = index + speed * deltaBlocks * REWARD_SCALE / totalStake
    fn advance_reward_index(
        state: &mut RewardMarketState<T::BlockNumber>,
        speed: Balance,
        total_stake: Balance,
    ) -> DispatchResult {
        let current_block = <frame_system::Pallet<T>>::block_number();
        let delta_blocks = current_block.saturating_sub(state.block);
        if speed.is_zero() || delta_blocks.is_zero() {
            return Ok(());
        }
        if total_stake.is_zero() {
            state.block = current_block;
            return Ok(());
        }

        let reward_accrued = speed
            .checked_mul(delta_blocks.saturated_into())
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RewardIndexCalculationFailed,
            ))?;
        let index_delta = Self::mul_div(reward_accrued, REWARD_SCALE, total_stake).map_err(|_| {
            Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RewardIndexCalculationFailed,
            )
        })?;
        state.index = state
            .index
            .checked_add(index_delta)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RewardIndexCalculationFailed,
            ))?;
        state.block = current_block;
        Ok(())
    }

    // Principal weighted stake of a borrow balance.
    fn borrow_stake(borrows: Balance, asset_id: CurrencyId) -> Result<Balance, DispatchError> {
        let borrow_index = Self::borrow_index(asset_id);
        if borrow_index.is_zero() {
            return Ok(Zero::zero());
        }
        Self::mul_div(borrows, Rate::DIV, borrow_index.into_inner())
    }

    /// Accrues the supply side reward of `supplier` up to the current supply index.
    pub(crate) fn distribute_supplier_reward(
        asset_id: CurrencyId,
        supplier: &T::AccountId,
    ) -> DispatchResult {
        let supply_index = Self::reward_supply_state(asset_id).index;
        let supplier_index = RewardSupplierIndex::<T>::mutate(asset_id, supplier, |index| {
            sp_std::mem::replace(index, supply_index)
        });
        let supplier_index = if supplier_index.is_zero() && supply_index >= REWARD_INITIAL_INDEX {
            REWARD_INITIAL_INDEX
        } else {
            supplier_index
        };

        let delta_index = supply_index.saturating_sub(supplier_index);
        let reward_delta = Self::mul_div(
            delta_index,
            Self::account_tokens(asset_id, supplier),
            REWARD_SCALE,
        )?;
        if reward_delta.is_zero() {
            return Ok(());
        }
        RewardAccrued::<T>::try_mutate(supplier, |accrued| -> DispatchResult {
            *accrued = accrued
                .checked_add(reward_delta)
                .ok_or(ArithmeticError::Overflow)?;
            Ok(())
        })?;

        Self::deposit_event(Event::<T>::DistributedSupplierReward {
            asset_id,
            supplier: supplier.clone(),
            delta: reward_delta,
            supply_index,
        });
        Ok(())
    }

    /// Accrues the borrow side reward of `borrower` up to the current borrow index.
    pub(crate) fn distribute_borrower_reward(
        asset_id: CurrencyId,
        borrower: &T::AccountId,
    ) -> DispatchResult {
        let borrow_index = Self::reward_borrow_state(asset_id).index;
        let borrower_index = RewardBorrowerIndex::<T>::mutate(asset_id, borrower, |index| {
            sp_std::mem::replace(index, borrow_index)
        });
        let borrower_index = if borrower_index.is_zero() && borrow_index >= REWARD_INITIAL_INDEX {
            REWARD_INITIAL_INDEX
        } else {
            borrower_index
        };

        let delta_index = borrow_index.saturating_sub(borrower_index);
        let borrower_stake = Self::borrow_stake(
            Self::borrow_balance_stored(borrower, asset_id)?,
            asset_id,
        )?;
        let reward_delta = Self::mul_div(delta_index, borrower_stake, REWARD_SCALE)?;
        if reward_delta.is_zero() {
            return Ok(());
        }
        RewardAccrued::<T>::try_mutate(borrower, |accrued| -> DispatchResult {
            *accrued = accrued
                .checked_add(reward_delta)
                .ok_or(ArithmeticError::Overflow)?;
            Ok(())
        })?;

        Self::deposit_event(Event::<T>::DistributedBorrowerReward {
            asset_id,
            borrower: borrower.clone(),
            delta: reward_delta,
            borrow_index,
        });
        Ok(())
    }

    pub(crate) fn distribute_supplier_reward_current(
        asset_id: CurrencyId,
        supplier: &T::AccountId,
    ) -> DispatchResult {
        Self::update_reward_supply_index(asset_id)?;
        Self::distribute_supplier_reward(asset_id, supplier)
    }

    pub(crate) fn distribute_borrower_reward_current(
        asset_id: CurrencyId,
        borrower: &T::AccountId,
    ) -> DispatchResult {
        Self::update_reward_borrow_index(asset_id)?;
        Self::distribute_borrower_reward(asset_id, borrower)
    }

    /// Installs a new supply speed, the index is first brought up to date with the old one.
    pub(crate) fn set_reward_supply_speed(asset_id: CurrencyId, speed: Balance) -> DispatchResult {
        let current_speed = Self::reward_supply_speeds(asset_id);
        if current_speed == speed {
            return Ok(());
        }
        Self::update_reward_supply_index(asset_id)?;
        if current_speed.is_zero() {
            // the index stood still while the speed was zero
            let now = <frame_system::Pallet<T>>::block_number();
            RewardSupplyState::<T>::mutate(asset_id, |state| {
                if state.index.is_zero() {
                    state.index = REWARD_INITIAL_INDEX;
                }
                state.block = now;
            });
        }
        RewardSupplySpeeds::<T>::insert(asset_id, speed);

        Self::deposit_event(Event::<T>::RewardSupplySpeedUpdated { asset_id, speed });
        Ok(())
    }

    /// Installs a new borrow speed, the index is first brought up to date with the old one.
    pub(crate) fn set_reward_borrow_speed(asset_id: CurrencyId, speed: Balance) -> DispatchResult {
        let current_speed = Self::reward_borrow_speeds(asset_id);
        if current_speed == speed {
            return Ok(());
        }
        Self::update_reward_borrow_index(asset_id)?;
        if current_speed.is_zero() {
            let now = <frame_system::Pallet<T>>::block_number();
            RewardBorrowState::<T>::mutate(asset_id, |state| {
                if state.index.is_zero() {
                    state.index = REWARD_INITIAL_INDEX;
                }
                state.block = now;
            });
        }
        RewardBorrowSpeeds::<T>::insert(asset_id, speed);

        Self::deposit_event(Event::<T>::RewardBorrowSpeedUpdated { asset_id, speed });
        Ok(())
    }

    /// Distributes the reward of `holders` in `markets` and pays out what they accrued.
    ///
    /// Every market must be listed, nothing is processed otherwise.
    pub(crate) fn claim_reward_internal(
        holders: &[T::AccountId],
        markets: &[CurrencyId],
        borrowers: bool,
        suppliers: bool,
    ) -> DispatchResult {
        for asset_id in markets.iter() {
            ensure!(
                Markets::<T>::contains_key(asset_id),
                Error::<T>::Failure(
                    ErrorKind::MarketNotListed,
                    FailureInfo::ClaimRewardMarketNotListed
                )
            );
        }

        for &asset_id in markets.iter() {
            if borrowers {
                Self::update_reward_borrow_index(asset_id)?;
                for holder in holders.iter() {
                    Self::distribute_borrower_reward(asset_id, holder)?;
                }
            }
            if suppliers {
                Self::update_reward_supply_index(asset_id)?;
                for holder in holders.iter() {
                    Self::distribute_supplier_reward(asset_id, holder)?;
                }
            }
        }

        for holder in holders.iter() {
            Self::grant_reward(holder)?;
        }
        Ok(())
    }

    // Pays out the accrued reward of `who` if the reserve can cover it.
    fn grant_reward(who: &T::AccountId) -> DispatchResult {
        let accrued = Self::reward_accrued(who);
        if accrued.is_zero() {
            return Ok(());
        }
        let reward_asset = T::RewardAssetId::get();
        let reward_account = Self::reward_account_id();
        let reserve = T::Assets::balance(reward_asset, &reward_account);
        if reserve < accrued {
            log::warn!(
                target: "money_market::grant_reward",
                "reward reserve {:?} can't cover {:?} accrued by {:?}",
                reserve,
                accrued,
                who,
            );
            return Ok(());
        }

        T::Assets::transfer(reward_asset, &reward_account, who, accrued, false)?;
        RewardAccrued::<T>::remove(who);

        Self::deposit_event(Event::<T>::RewardGranted {
            who: who.clone(),
            amount: accrued,
        });
        Ok(())
    }

    /// Splits `RewardRate` across rewarded markets by their share of borrowed value.
    ///
    /// Half of the speed of a market goes to suppliers, the rest to borrowers.
    /// Markets without `reward_enabled` keep the speeds they were given.
    pub(crate) fn refresh_reward_speeds_internal() -> DispatchResult {
        let markets: Vec<CurrencyId> = Markets::<T>::iter()
            .filter_map(|(asset_id, market)| market.reward_enabled.then_some(asset_id))
            .collect();
        for &asset_id in markets.iter() {
            Self::update_reward_supply_index(asset_id)?;
            Self::update_reward_borrow_index(asset_id)?;
        }

        let mut total_utility: Balance = Zero::zero();
        let mut utilities: Vec<(CurrencyId, Balance)> = Vec::with_capacity(markets.len());
        for asset_id in markets.into_iter() {
            let price = Self::get_price(asset_id)
                .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::RefreshRewardSpeedsPrice))?;
            let utility = price
                .checked_mul_int(Self::total_borrows(asset_id))
                .ok_or(Error::<T>::Failure(
                    ErrorKind::MathError,
                    FailureInfo::RefreshRewardSpeedsCalculationFailed,
                ))?;
            total_utility = total_utility.checked_add(utility).ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RefreshRewardSpeedsCalculationFailed,
            ))?;
            utilities.push((asset_id, utility));
        }

        let reward_rate = Self::reward_rate();
        for (asset_id, utility) in utilities.into_iter() {
            let speed = if total_utility.is_zero() {
                Zero::zero()
            } else {
                Self::mul_div(reward_rate, utility, total_utility).map_err(|_| {
                    Error::<T>::Failure(
                        ErrorKind::MathError,
                        FailureInfo::RefreshRewardSpeedsCalculationFailed,
                    )
                })?
            };
            let supply_speed = speed / 2;
            Self::set_reward_supply_speed(asset_id, supply_speed)?;
            Self::set_reward_borrow_speed(asset_id, speed.saturating_sub(supply_speed))?;
        }
        Ok(())
    }

    /// Reward `who` could claim from every market in the current block, nothing is persisted.
    pub fn reward_accrued_current(who: &T::AccountId) -> Result<Balance, DispatchError> {
        with_transaction(|| {
            let accrued = Markets::<T>::iter_keys()
                .try_for_each(|asset_id| -> DispatchResult {
                    Self::distribute_supplier_reward_current(asset_id, who)?;
                    Self::distribute_borrower_reward_current(asset_id, who)
                })
                .map(|_| Self::reward_accrued(who));
            TransactionOutcome::Rollback(accrued)
        })
    }
}
