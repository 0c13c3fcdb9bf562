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

//! Risk engine: admission hooks, account liquidity and market membership.
//!
//! The hooks return a bare `ErrorKind`, callers attach the `FailureInfo` of
//! the operation being admitted.

use sp_runtime::DispatchResult;

use crate::*;

impl<T: Config> Pallet<T> {
    /// Liquidity or shortfall of `account` across every market it entered.
    ///
    /// Stored balances are used, markets other than the ones touched by the
    /// current call may not have accrued interest yet.
    pub fn get_account_liquidity(
        account: &T::AccountId,
    ) -> Result<(Liquidity, Shortfall), ErrorKind> {
        Self::get_hypothetical_account_liquidity(account, None, Zero::zero(), Zero::zero())
    }

    /// Liquidity or shortfall of `account` if it redeemed `redeem_tokens` and
    /// borrowed `borrow_amount` in `asset_modify`. Exactly one of the two
    /// results is non-zero.
    pub fn get_hypothetical_account_liquidity(
        account: &T::AccountId,
        asset_modify: Option<CurrencyId>,
        redeem_tokens: Balance,
        borrow_amount: Balance,
    ) -> Result<(Liquidity, Shortfall), ErrorKind> {
        let mut sum_collateral = FixedU128::zero();
        let mut sum_borrow_plus_effects = FixedU128::zero();

        for asset_id in Self::account_assets(account).into_iter() {
            let market = Self::market(asset_id)?;
            let (tokens, borrow_balance, exchange_rate) =
                Self::get_account_snapshot(account, asset_id).map_err(|_| ErrorKind::MathError)?;
            let price = Self::get_price(asset_id)?;

            // tokensToDenom = collateralFactor * exchangeRate * price
            let tokens_to_denom = Rate::from(market.collateral_factor)
                .checked_mul(&exchange_rate)
                .and_then(|r| r.checked_mul(&price))
                .ok_or(ErrorKind::MathError)?;

            sum_collateral = tokens_to_denom
                .checked_mul(&FixedU128::from_inner(tokens))
                .and_then(|r| r.checked_add(&sum_collateral))
                .ok_or(ErrorKind::MathError)?;
            sum_borrow_plus_effects = price
                .checked_mul(&FixedU128::from_inner(borrow_balance))
                .and_then(|r| r.checked_add(&sum_borrow_plus_effects))
                .ok_or(ErrorKind::MathError)?;

            if asset_modify == Some(asset_id) {
                sum_borrow_plus_effects = tokens_to_denom
                    .checked_mul(&FixedU128::from_inner(redeem_tokens))
                    .and_then(|r| r.checked_add(&sum_borrow_plus_effects))
                    .ok_or(ErrorKind::MathError)?;
                sum_borrow_plus_effects = price
                    .checked_mul(&FixedU128::from_inner(borrow_amount))
                    .and_then(|r| r.checked_add(&sum_borrow_plus_effects))
                    .ok_or(ErrorKind::MathError)?;
            }
        }

        log::trace!(
            target: "money_market::get_hypothetical_account_liquidity",
            "account: {:?}, sum_collateral: {:?}, sum_borrow_plus_effects: {:?}",
            account,
            sum_collateral,
            sum_borrow_plus_effects,
        );

        if sum_collateral > sum_borrow_plus_effects {
            Ok((
                sum_collateral.saturating_sub(sum_borrow_plus_effects),
                FixedU128::zero(),
            ))
        } else {
            Ok((
                FixedU128::zero(),
                sum_borrow_plus_effects.saturating_sub(sum_collateral),
            ))
        }
    }

    pub fn check_membership(who: &T::AccountId, asset_id: CurrencyId) -> bool {
        Self::account_assets(who).contains(&asset_id)
    }

    /// Adds `asset_id` to the markets counted as collateral of `who`.
    pub(crate) fn add_to_market(asset_id: CurrencyId, who: &T::AccountId) -> Result<(), ErrorKind> {
        Self::market(asset_id)?;
        if Self::check_membership(who, asset_id) {
            return Ok(());
        }
        AccountAssets::<T>::try_mutate(who, |assets| {
            assets
                .try_push(asset_id)
                .map_err(|_| ErrorKind::TooManyAssets)
        })?;

        Self::deposit_event(Event::<T>::MarketEntered {
            asset_id,
            who: who.clone(),
        });
        Ok(())
    }

    pub(crate) fn exit_market_internal(who: &T::AccountId, asset_id: CurrencyId) -> DispatchResult {
        Self::market(asset_id)
            .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::ExitMarketRejection))?;
        let borrow_balance = Self::borrow_balance_stored(who, asset_id)?;
        ensure!(
            borrow_balance.is_zero(),
            Error::<T>::Failure(
                ErrorKind::NonzeroBorrowBalance,
                FailureInfo::ExitMarketBalanceOwed
            )
        );
        Self::redeem_allowed(asset_id, who, Self::account_tokens(asset_id, who))
            .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::ExitMarketRejection))?;

        if !Self::check_membership(who, asset_id) {
            return Ok(());
        }
        AccountAssets::<T>::mutate(who, |assets| assets.retain(|a| *a != asset_id));

        Self::deposit_event(Event::<T>::MarketExited {
            asset_id,
            who: who.clone(),
        });
        Ok(())
    }

    pub fn is_action_paused(asset_id: CurrencyId, action: Action) -> bool {
        GuardianPaused::<T>::get(action) || MarketGuardianPaused::<T>::get(asset_id, action)
    }

    fn ensure_not_paused(asset_id: CurrencyId, action: Action) -> Result<(), ErrorKind> {
        ensure!(
            !Self::is_action_paused(asset_id, action),
            ErrorKind::ActionPaused
        );
        Ok(())
    }

    /// A deprecated market has borrowing paused, no collateral factor and
    /// takes all interest as reserves. Its borrows can always be liquidated.
    pub fn is_deprecated(asset_id: CurrencyId) -> Result<bool, ErrorKind> {
        let market = Self::market(asset_id)?;
        Ok(market.collateral_factor.is_zero()
            && MarketGuardianPaused::<T>::get(asset_id, Action::Borrow)
            && market.reserve_factor == Ratio::one())
    }

    pub(crate) fn mint_allowed(asset_id: CurrencyId) -> Result<(), ErrorKind> {
        Self::market(asset_id)?;
        Self::ensure_not_paused(asset_id, Action::Mint)
    }

    pub(crate) fn redeem_allowed(
        asset_id: CurrencyId,
        redeemer: &T::AccountId,
        redeem_tokens: Balance,
    ) -> Result<(), ErrorKind> {
        Self::market(asset_id)?;
        if !Self::check_membership(redeemer, asset_id) {
            return Ok(());
        }

        let (_, shortfall) = Self::get_hypothetical_account_liquidity(
            redeemer,
            Some(asset_id),
            redeem_tokens,
            Zero::zero(),
        )?;
        ensure!(shortfall.is_zero(), ErrorKind::InsufficientLiquidity);
        Ok(())
    }

    /// Rejects redeems that would pay out underlying without burning tokens.
    pub(crate) fn redeem_verify(redeem_tokens: Balance, redeem_amount: Balance) -> DispatchResult {
        ensure!(
            !(redeem_tokens.is_zero() && !redeem_amount.is_zero()),
            Error::<T>::InvalidAmount
        );
        Ok(())
    }

    /// Enters the market on behalf of `borrower` if needed.
    pub(crate) fn borrow_allowed(
        asset_id: CurrencyId,
        borrower: &T::AccountId,
        borrow_amount: Balance,
    ) -> Result<(), ErrorKind> {
        let market = Self::market(asset_id)?;
        Self::ensure_not_paused(asset_id, Action::Borrow)?;
        Self::add_to_market(asset_id, borrower)?;
        Self::get_price(asset_id)?;

        if !market.borrow_cap.is_zero() {
            let next_total_borrows = Self::total_borrows(asset_id)
                .checked_add(borrow_amount)
                .ok_or(ErrorKind::MathError)?;
            ensure!(
                next_total_borrows <= market.borrow_cap,
                ErrorKind::BorrowCapReached
            );
        }

        let (_, shortfall) = Self::get_hypothetical_account_liquidity(
            borrower,
            Some(asset_id),
            Zero::zero(),
            borrow_amount,
        )?;
        ensure!(shortfall.is_zero(), ErrorKind::InsufficientLiquidity);
        Ok(())
    }

    pub(crate) fn repay_borrow_allowed(asset_id: CurrencyId) -> Result<(), ErrorKind> {
        Self::market(asset_id)?;
        Ok(())
    }

    pub(crate) fn liquidate_borrow_allowed(
        liquidation_asset_id: CurrencyId,
        collateral_asset_id: CurrencyId,
        borrower: &T::AccountId,
        repay_amount: Balance,
    ) -> Result<(), ErrorKind> {
        Self::market(liquidation_asset_id)?;
        Self::market(collateral_asset_id)?;

        let borrow_balance = Self::borrow_balance_stored(borrower, liquidation_asset_id)
            .map_err(|_| ErrorKind::MathError)?;
        if Self::is_deprecated(liquidation_asset_id)? {
            ensure!(repay_amount <= borrow_balance, ErrorKind::TooMuchRepay);
            return Ok(());
        }

        let (_, shortfall) = Self::get_account_liquidity(borrower)?;
        ensure!(!shortfall.is_zero(), ErrorKind::InsufficientShortfall);

        let max_close = Self::close_factor().mul_floor(borrow_balance);
        ensure!(repay_amount <= max_close, ErrorKind::TooMuchRepay);
        Ok(())
    }

    pub(crate) fn seize_allowed(
        collateral_asset_id: CurrencyId,
        borrowed_asset_id: CurrencyId,
    ) -> Result<(), ErrorKind> {
        Self::ensure_not_paused(collateral_asset_id, Action::Seize)?;
        Self::market(collateral_asset_id)?;
        Self::market(borrowed_asset_id)?;
        Ok(())
    }

    /// Moving claim tokens out of an account is checked the same way as redeeming them.
    pub(crate) fn transfer_allowed(
        asset_id: CurrencyId,
        src: &T::AccountId,
        tokens: Balance,
    ) -> Result<(), ErrorKind> {
        Self::market(asset_id)?;
        Self::ensure_not_paused(asset_id, Action::Transfer)?;
        Self::redeem_allowed(asset_id, src, tokens)
    }

    /// Collateral tokens to seize for `actual_repay_amount` of the borrowed asset.
    ///
    /// seizeTokens = actualRepayAmount * liquidationIncentive * priceBorrowed / (priceCollateral * exchangeRate)
    pub fn liquidate_calculate_seize_tokens(
        liquidation_asset_id: CurrencyId,
        collateral_asset_id: CurrencyId,
        actual_repay_amount: Balance,
    ) -> Result<Balance, ErrorKind> {
        let price_borrowed = Self::get_price(liquidation_asset_id)?;
        let price_collateral = Self::get_price(collateral_asset_id)?;
        let exchange_rate =
            Self::exchange_rate_stored(collateral_asset_id).map_err(|_| ErrorKind::MathError)?;

        let numerator = Self::liquidation_incentive()
            .checked_mul(&price_borrowed)
            .ok_or(ErrorKind::MathError)?;
        let denominator = price_collateral
            .checked_mul(&exchange_rate)
            .ok_or(ErrorKind::MathError)?;

        numerator
            .checked_div(&denominator)
            .and_then(|ratio| ratio.checked_mul_int(actual_repay_amount))
            .ok_or(ErrorKind::MathError)
    }
}
