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

use sp_core::U256;
use sp_runtime::DispatchResult;

use crate::*;

impl<T: Config> Pallet<T> {
    /// Accrue interest of a market from the last accrual block up to the current block.
    ///
    /// Running it twice in the same block is a no-op.
    ///
    /// simpleInterestFactor = borrowRate * blockDelta
    /// interestAccumulated = simpleInterestFactor * totalBorrows
    /// totalBorrows = interestAccumulated + totalBorrows
    /// totalReserves = interestAccumulated * reserveFactor + totalReserves
    /// borrowIndex = simpleInterestFactor * borrowIndex + borrowIndex
    pub fn accrue_interest(asset_id: CurrencyId) -> DispatchResult {
        let market = Self::market(asset_id)
            .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::AccrueInterest))?;
        let current_block = <frame_system::Pallet<T>>::block_number();
        let accrual_block_prior = Self::accrual_block_number(asset_id);
        if accrual_block_prior == current_block {
            return Ok(());
        }

        let cash_prior = Self::get_cash(asset_id);
        let borrows_prior = Self::total_borrows(asset_id);
        let reserves_prior = Self::total_reserves(asset_id);
        let borrow_index_prior = Self::borrow_index(asset_id);

        let util = Self::calc_utilization_ratio(cash_prior, borrows_prior, reserves_prior)?;
        let borrow_rate = market
            .rate_model
            .get_borrow_rate_per_block(util)
            .ok_or(Error::<T>::InterestRateModelError)?;
        ensure!(
            borrow_rate <= MAX_BORROW_RATE_PER_BLOCK,
            Error::<T>::BorrowRateTooHigh
        );
        let supply_rate =
            InterestRateModel::get_supply_rate(borrow_rate, util, market.reserve_factor);

        let block_delta: u128 = current_block
            .saturating_sub(accrual_block_prior)
            .saturated_into();
        let simple_interest_factor = borrow_rate
            .checked_mul(&Rate::saturating_from_integer(block_delta))
            .ok_or(Error::<T>::CalcSimpleInterestFactorFailed)?;
        let interest_accumulated = simple_interest_factor
            .checked_mul_int(borrows_prior)
            .ok_or(Error::<T>::CalcInterestAccumulatedFailed)?;
        let total_borrows_new = interest_accumulated
            .checked_add(borrows_prior)
            .ok_or(Error::<T>::CalcTotalBorrowsFailed)?;
        let total_reserves_new = market
            .reserve_factor
            .mul_floor(interest_accumulated)
            .checked_add(reserves_prior)
            .ok_or(Error::<T>::CalcTotalReservesFailed)?;
        let borrow_index_new = simple_interest_factor
            .checked_mul(&borrow_index_prior)
            .and_then(|r| r.checked_add(&borrow_index_prior))
            .ok_or(Error::<T>::CalcBorrowIndexFailed)?;

        log::trace!(
            target: "money_market::accrue_interest",
            "asset_id: {:?}, block_delta: {:?}, borrow_rate: {:?}, interest_accumulated: {:?}, \
            borrow_index: {:?}",
            asset_id,
            block_delta,
            borrow_rate,
            interest_accumulated,
            borrow_index_new,
        );

        AccrualBlockNumber::<T>::insert(asset_id, current_block);
        TotalBorrows::<T>::insert(asset_id, total_borrows_new);
        TotalReserves::<T>::insert(asset_id, total_reserves_new);
        BorrowIndex::<T>::insert(asset_id, borrow_index_new);
        UtilizationRatio::<T>::insert(asset_id, util);
        BorrowRate::<T>::insert(asset_id, borrow_rate);
        SupplyRate::<T>::insert(asset_id, supply_rate);

        Self::deposit_event(Event::<T>::InterestAccrued {
            asset_id,
            cash_prior,
            interest_accumulated,
            borrow_index: borrow_index_new,
            total_borrows: total_borrows_new,
        });

        Ok(())
    }

    /// Fails unless interest of the market was accrued in the current block.
    pub(crate) fn ensure_fresh(asset_id: CurrencyId) -> DispatchResult {
        ensure!(
            Self::accrual_block_number(asset_id) == <frame_system::Pallet<T>>::block_number(),
            Error::<T>::MarketNotFresh
        );
        Ok(())
    }

    /// Calculate the borrowing utilization ratio of the specified market
    ///
    /// utilizationRatio = totalBorrows / (totalCash + totalBorrows − totalReserves)
    pub(crate) fn calc_utilization_ratio(
        cash: Balance,
        borrows: Balance,
        reserves: Balance,
    ) -> Result<Ratio, DispatchError> {
        // utilization ratio is 0 when there are no borrows
        if borrows.is_zero() {
            return Ok(Ratio::zero());
        }
        let total = cash
            .checked_add(borrows)
            .and_then(|r| r.checked_sub(reserves))
            .ok_or(Error::<T>::CalcUtilizationFailed)?;

        Ok(Ratio::from_rational(borrows, total))
    }

    /// Exchange rate between claim tokens and the underlying, as of the last accrual.
    ///
    /// exchangeRate = (totalCash + totalBorrows - totalReserves) / totalSupply
    pub fn exchange_rate_stored(asset_id: CurrencyId) -> Result<Rate, DispatchError> {
        let total_supply = Self::total_supply(asset_id);
        if total_supply.is_zero() {
            return Ok(Self::market(asset_id)
                .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::AccrueInterest))?
                .initial_exchange_rate);
        }

        let cash_plus_borrows_minus_reserves = Self::get_cash(asset_id)
            .checked_add(Self::total_borrows(asset_id))
            .and_then(|r| r.checked_sub(Self::total_reserves(asset_id)))
            .ok_or(ArithmeticError::Underflow)?;

        Ok(
            Rate::checked_from_rational(cash_plus_borrows_minus_reserves, total_supply)
                .ok_or(ArithmeticError::Overflow)?,
        )
    }

    /// Accrues interest and returns the up to date exchange rate.
    pub fn exchange_rate_current(asset_id: CurrencyId) -> Result<Rate, DispatchError> {
        Self::accrue_interest(asset_id)?;
        Self::exchange_rate_stored(asset_id)
    }

    /// Borrow balance of `who` as of the last accrual of the market.
    ///
    /// recentBorrowBalance = principal * borrowIndex / interestIndex
    pub fn borrow_balance_stored(
        who: &T::AccountId,
        asset_id: CurrencyId,
    ) -> Result<Balance, DispatchError> {
        let snapshot = Self::account_borrows(asset_id, who);
        if snapshot.principal.is_zero() {
            return Ok(Zero::zero());
        }
        if snapshot.interest_index.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }

        Self::mul_div(
            snapshot.principal,
            Self::borrow_index(asset_id).into_inner(),
            snapshot.interest_index.into_inner(),
        )
    }

    pub fn borrow_balance_current(
        who: &T::AccountId,
        asset_id: CurrencyId,
    ) -> Result<Balance, DispatchError> {
        Self::accrue_interest(asset_id)?;
        Self::borrow_balance_stored(who, asset_id)
    }

    pub fn total_borrows_current(asset_id: CurrencyId) -> Result<Balance, DispatchError> {
        Self::accrue_interest(asset_id)?;
        Ok(Self::total_borrows(asset_id))
    }

    /// Underlying owned by `who` in the market, accruing interest first.
    pub fn balance_of_underlying(
        who: &T::AccountId,
        asset_id: CurrencyId,
    ) -> Result<Balance, DispatchError> {
        let exchange_rate = Self::exchange_rate_current(asset_id)?;
        Self::calc_underlying_amount(Self::account_tokens(asset_id, who), exchange_rate)
    }

    pub(crate) fn calc_underlying_amount(
        tokens: Balance,
        exchange_rate: Rate,
    ) -> Result<Balance, DispatchError> {
        Ok(exchange_rate
            .checked_mul_int(tokens)
            .ok_or(ArithmeticError::Overflow)?)
    }

    pub(crate) fn calc_tokens_amount(
        underlying: Balance,
        exchange_rate: Rate,
    ) -> Result<Balance, DispatchError> {
        Self::mul_div(underlying, Rate::DIV, exchange_rate.into_inner())
    }

    /// `a * b / c` without intermediate overflow.
    pub(crate) fn mul_div(a: u128, b: u128, c: u128) -> Result<u128, DispatchError> {
        if c.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let result = U256::from(a)
            .checked_mul(U256::from(b))
            .and_then(|r| r.checked_div(U256::from(c)))
            .ok_or(ArithmeticError::Overflow)?;

        u128::try_from(result).map_err(|_| ArithmeticError::Overflow.into())
    }
}
