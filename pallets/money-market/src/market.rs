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

//! Balance changing operations of a market.
//!
//! Every `*_fresh` function expects `accrue_interest` to have run for the
//! market in the current block and fails with `MarketNotFresh` otherwise.

use sp_runtime::DispatchResult;

use crate::*;

impl<T: Config> Pallet<T> {
    /// Supplies `mint_amount` of the underlying and mints claim tokens at the current exchange rate.
    pub(crate) fn mint_fresh(
        who: &T::AccountId,
        asset_id: CurrencyId,
        mint_amount: Balance,
    ) -> DispatchResult {
        ensure!(!mint_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::mint_allowed(asset_id).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::MintComptrollerRejection)
        })?;
        Self::ensure_fresh(asset_id)?;
        Self::distribute_supplier_reward_current(asset_id, who)?;

        let exchange_rate = Self::exchange_rate_stored(asset_id).map_err(|_| {
            Error::<T>::Failure(ErrorKind::MathError, FailureInfo::MintExchangeRateReadFailed)
        })?;
        let mint_tokens = Self::calc_tokens_amount(mint_amount, exchange_rate).map_err(|_| {
            Error::<T>::Failure(ErrorKind::MathError, FailureInfo::MintExchangeCalculationFailed)
        })?;
        ensure!(!mint_tokens.is_zero(), Error::<T>::InvalidAmount);

        let total_supply_new = Self::total_supply(asset_id)
            .checked_add(mint_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::MintNewTotalSupplyCalculationFailed,
            ))?;
        let account_tokens_new = Self::account_tokens(asset_id, who)
            .checked_add(mint_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::MintNewAccountBalanceCalculationFailed,
            ))?;

        T::Assets::transfer(asset_id, who, &Self::account_id(), mint_amount, false)?;
        TotalSupply::<T>::insert(asset_id, total_supply_new);
        AccountTokens::<T>::insert(asset_id, who, account_tokens_new);

        Self::deposit_event(Event::<T>::Minted {
            who: who.clone(),
            asset_id,
            amount: mint_amount,
            tokens: mint_tokens,
        });
        Ok(())
    }

    /// Burns claim tokens and pays out the underlying.
    ///
    /// Exactly one of `redeem_tokens_in` and `redeem_amount_in` must be non-zero,
    /// the other one is derived from the exchange rate.
    pub(crate) fn redeem_fresh(
        who: &T::AccountId,
        asset_id: CurrencyId,
        redeem_tokens_in: Balance,
        redeem_amount_in: Balance,
    ) -> DispatchResult {
        ensure!(
            redeem_tokens_in.is_zero() != redeem_amount_in.is_zero(),
            Error::<T>::InvalidAmount
        );
        Self::ensure_fresh(asset_id)?;

        let exchange_rate = Self::exchange_rate_stored(asset_id).map_err(|_| {
            Error::<T>::Failure(ErrorKind::MathError, FailureInfo::RedeemExchangeRateReadFailed)
        })?;
        let (redeem_tokens, redeem_amount) = if !redeem_tokens_in.is_zero() {
            let redeem_amount = Self::calc_underlying_amount(redeem_tokens_in, exchange_rate)
                .map_err(|_| {
                    Error::<T>::Failure(
                        ErrorKind::MathError,
                        FailureInfo::RedeemExchangeTokensCalculationFailed,
                    )
                })?;
            (redeem_tokens_in, redeem_amount)
        } else {
            let redeem_tokens = Self::calc_tokens_amount(redeem_amount_in, exchange_rate)
                .map_err(|_| {
                    Error::<T>::Failure(
                        ErrorKind::MathError,
                        FailureInfo::RedeemExchangeAmountCalculationFailed,
                    )
                })?;
            (redeem_tokens, redeem_amount_in)
        };
        Self::redeem_verify(redeem_tokens, redeem_amount)?;

        Self::redeem_allowed(asset_id, who, redeem_tokens).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::RedeemComptrollerRejection)
        })?;
        Self::distribute_supplier_reward_current(asset_id, who)?;

        let total_supply_new = Self::total_supply(asset_id)
            .checked_sub(redeem_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RedeemNewTotalSupplyCalculationFailed,
            ))?;
        let account_tokens_new = Self::account_tokens(asset_id, who)
            .checked_sub(redeem_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RedeemNewAccountBalanceCalculationFailed,
            ))?;
        ensure!(
            Self::get_cash(asset_id) >= redeem_amount,
            Error::<T>::Failure(
                ErrorKind::InsufficientCash,
                FailureInfo::RedeemTransferOutNotPossible
            )
        );

        TotalSupply::<T>::insert(asset_id, total_supply_new);
        AccountTokens::<T>::insert(asset_id, who, account_tokens_new);
        T::Assets::transfer(asset_id, &Self::account_id(), who, redeem_amount, false)?;

        Self::deposit_event(Event::<T>::Redeemed {
            who: who.clone(),
            asset_id,
            amount: redeem_amount,
            tokens: redeem_tokens,
        });
        Ok(())
    }

    pub(crate) fn borrow_fresh(
        who: &T::AccountId,
        asset_id: CurrencyId,
        borrow_amount: Balance,
    ) -> DispatchResult {
        ensure!(!borrow_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::borrow_allowed(asset_id, who, borrow_amount).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::BorrowComptrollerRejection)
        })?;
        Self::ensure_fresh(asset_id)?;
        ensure!(
            Self::get_cash(asset_id) >= borrow_amount,
            Error::<T>::Failure(ErrorKind::InsufficientCash, FailureInfo::BorrowCashNotAvailable)
        );
        Self::distribute_borrower_reward_current(asset_id, who)?;

        let account_borrows = Self::borrow_balance_stored(who, asset_id).map_err(|_| {
            Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::BorrowAccumulatedBalanceCalculationFailed,
            )
        })?;
        let account_borrows_new =
            account_borrows
                .checked_add(borrow_amount)
                .ok_or(Error::<T>::Failure(
                    ErrorKind::MathError,
                    FailureInfo::BorrowNewAccountBorrowBalanceCalculationFailed,
                ))?;
        let total_borrows_new = Self::total_borrows(asset_id)
            .checked_add(borrow_amount)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::BorrowNewTotalBalanceCalculationFailed,
            ))?;

        AccountBorrows::<T>::insert(
            asset_id,
            who,
            BorrowSnapshot {
                principal: account_borrows_new,
                interest_index: Self::borrow_index(asset_id),
            },
        );
        TotalBorrows::<T>::insert(asset_id, total_borrows_new);
        T::Assets::transfer(asset_id, &Self::account_id(), who, borrow_amount, false)?;

        Self::deposit_event(Event::<T>::Borrowed {
            who: who.clone(),
            asset_id,
            amount: borrow_amount,
            account_borrows: account_borrows_new,
            total_borrows: total_borrows_new,
        });
        Ok(())
    }

    /// Repays `repay_amount` of the borrow of `borrower`, paid by `payer`.
    ///
    /// `Balance::max_value()` repays the whole borrow balance. Returns the amount actually repaid.
    pub(crate) fn repay_borrow_fresh(
        payer: &T::AccountId,
        borrower: &T::AccountId,
        asset_id: CurrencyId,
        repay_amount: Balance,
    ) -> Result<Balance, DispatchError> {
        ensure!(!repay_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::repay_borrow_allowed(asset_id).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::RepayBorrowComptrollerRejection)
        })?;
        Self::ensure_fresh(asset_id)?;
        Self::distribute_borrower_reward_current(asset_id, borrower)?;

        let account_borrows = Self::borrow_balance_stored(borrower, asset_id).map_err(|_| {
            Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RepayBorrowAccumulatedBalanceCalculationFailed,
            )
        })?;
        let actual_repay_amount = if repay_amount == Balance::max_value() {
            account_borrows
        } else {
            repay_amount
        };
        let account_borrows_new = account_borrows
            .checked_sub(actual_repay_amount)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::RepayBorrowNewAccountBorrowBalanceCalculationFailed,
            ))?;
        // NOTE: total borrows is rounded down at each accrual while the account
        // balance is derived from the index, so the last repayment can exceed it.
        let total_borrows_new = Self::total_borrows(asset_id).saturating_sub(actual_repay_amount);

        if !actual_repay_amount.is_zero() {
            T::Assets::transfer(
                asset_id,
                payer,
                &Self::account_id(),
                actual_repay_amount,
                false,
            )?;
        }
        AccountBorrows::<T>::insert(
            asset_id,
            borrower,
            BorrowSnapshot {
                principal: account_borrows_new,
                interest_index: Self::borrow_index(asset_id),
            },
        );
        TotalBorrows::<T>::insert(asset_id, total_borrows_new);

        Self::deposit_event(Event::<T>::RepaidBorrow {
            payer: payer.clone(),
            borrower: borrower.clone(),
            asset_id,
            amount: actual_repay_amount,
            account_borrows: account_borrows_new,
            total_borrows: total_borrows_new,
        });
        Ok(actual_repay_amount)
    }

    /// Repays part of the debt of `borrower` and seizes collateral in exchange.
    ///
    /// Both markets must be fresh.
    pub(crate) fn liquidate_borrow_fresh(
        liquidator: &T::AccountId,
        borrower: &T::AccountId,
        liquidation_asset_id: CurrencyId,
        repay_amount: Balance,
        collateral_asset_id: CurrencyId,
    ) -> DispatchResult {
        ensure!(liquidator != borrower, Error::<T>::LiquidatorIsBorrower);
        ensure!(!repay_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::ensure_fresh(liquidation_asset_id)?;
        Self::ensure_fresh(collateral_asset_id)?;
        Self::liquidate_borrow_allowed(
            liquidation_asset_id,
            collateral_asset_id,
            borrower,
            repay_amount,
        )
        .map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::LiquidateComptrollerRejection)
        })?;

        let actual_repay_amount =
            Self::repay_borrow_fresh(liquidator, borrower, liquidation_asset_id, repay_amount)?;
        let seize_tokens = Self::liquidate_calculate_seize_tokens(
            liquidation_asset_id,
            collateral_asset_id,
            actual_repay_amount,
        )
        .map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::LiquidateCalculateAmountSeizeFailed)
        })?;
        ensure!(
            Self::account_tokens(collateral_asset_id, borrower) >= seize_tokens,
            Error::<T>::LiquidateSeizeTooMuch
        );

        log::trace!(
            target: "money_market::liquidate_borrow",
            "borrower: {:?}, liquidator: {:?}, repay: {:?}, seize_tokens: {:?}",
            borrower,
            liquidator,
            actual_repay_amount,
            seize_tokens,
        );

        Self::seize_internal(
            collateral_asset_id,
            liquidation_asset_id,
            liquidator,
            borrower,
            seize_tokens,
        )?;

        Self::deposit_event(Event::<T>::LiquidatedBorrow {
            liquidator: liquidator.clone(),
            borrower: borrower.clone(),
            asset_id: liquidation_asset_id,
            collateral_asset_id,
            repay_amount: actual_repay_amount,
            seize_tokens,
        });
        Ok(())
    }

    /// Moves `seize_tokens` claim tokens of the collateral market away from `borrower`.
    ///
    /// The protocol share is burnt and its underlying value is added to the
    /// reserves, the rest goes to `liquidator`.
    pub(crate) fn seize_internal(
        collateral_asset_id: CurrencyId,
        borrowed_asset_id: CurrencyId,
        liquidator: &T::AccountId,
        borrower: &T::AccountId,
        seize_tokens: Balance,
    ) -> DispatchResult {
        Self::seize_allowed(collateral_asset_id, borrowed_asset_id).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::LiquidateSeizeComptrollerRejection)
        })?;
        ensure!(liquidator != borrower, Error::<T>::LiquidatorIsBorrower);

        Self::update_reward_supply_index(collateral_asset_id)?;
        Self::distribute_supplier_reward(collateral_asset_id, borrower)?;
        Self::distribute_supplier_reward(collateral_asset_id, liquidator)?;

        let protocol_tokens = T::ProtocolSeizeShare::get().mul_floor(seize_tokens);
        let liquidator_tokens = seize_tokens.checked_sub(protocol_tokens).ok_or(
            Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeBalanceDecrementFailed,
            ),
        )?;
        let exchange_rate = Self::exchange_rate_stored(collateral_asset_id).map_err(|_| {
            Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeExchangeRateFailed,
            )
        })?;
        let reserves_added = Self::calc_underlying_amount(protocol_tokens, exchange_rate)
            .map_err(|_| {
                Error::<T>::Failure(
                    ErrorKind::MathError,
                    FailureInfo::LiquidateSeizeExchangeRateFailed,
                )
            })?;

        let total_reserves_new = Self::total_reserves(collateral_asset_id)
            .checked_add(reserves_added)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeBalanceIncrementFailed,
            ))?;
        let total_supply_new = Self::total_supply(collateral_asset_id)
            .checked_sub(protocol_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeBalanceDecrementFailed,
            ))?;
        let borrower_tokens_new = Self::account_tokens(collateral_asset_id, borrower)
            .checked_sub(seize_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeBalanceDecrementFailed,
            ))?;
        let liquidator_tokens_new = Self::account_tokens(collateral_asset_id, liquidator)
            .checked_add(liquidator_tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::LiquidateSeizeBalanceIncrementFailed,
            ))?;

        TotalReserves::<T>::insert(collateral_asset_id, total_reserves_new);
        TotalSupply::<T>::insert(collateral_asset_id, total_supply_new);
        AccountTokens::<T>::insert(collateral_asset_id, borrower, borrower_tokens_new);
        AccountTokens::<T>::insert(collateral_asset_id, liquidator, liquidator_tokens_new);

        Self::deposit_event(Event::<T>::Seized {
            asset_id: collateral_asset_id,
            liquidator: liquidator.clone(),
            borrower: borrower.clone(),
            seize_tokens,
            liquidator_tokens,
            protocol_tokens,
            reserves_added,
        });
        Ok(())
    }

    pub(crate) fn add_reserves_fresh(
        payer: &T::AccountId,
        asset_id: CurrencyId,
        add_amount: Balance,
    ) -> DispatchResult {
        ensure!(!add_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::ensure_fresh(asset_id)?;

        let total_reserves_new = Self::total_reserves(asset_id)
            .checked_add(add_amount)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::AddReservesCalculationFailed,
            ))?;

        T::Assets::transfer(asset_id, payer, &Self::account_id(), add_amount, false)?;
        TotalReserves::<T>::insert(asset_id, total_reserves_new);

        Self::deposit_event(Event::<T>::ReservesAdded {
            payer: payer.clone(),
            asset_id,
            amount: add_amount,
            total_reserves: total_reserves_new,
        });
        Ok(())
    }

    pub(crate) fn reduce_reserves_fresh(
        receiver: &T::AccountId,
        asset_id: CurrencyId,
        reduce_amount: Balance,
    ) -> DispatchResult {
        ensure!(!reduce_amount.is_zero(), Error::<T>::InvalidAmount);
        Self::ensure_fresh(asset_id)?;
        ensure!(
            Self::get_cash(asset_id) >= reduce_amount,
            Error::<T>::Failure(
                ErrorKind::InsufficientCash,
                FailureInfo::ReduceReservesCashNotAvailable
            )
        );
        let total_reserves_new = Self::total_reserves(asset_id)
            .checked_sub(reduce_amount)
            .ok_or(Error::<T>::Failure(
                ErrorKind::InsufficientReserves,
                FailureInfo::ReduceReservesValidation,
            ))?;

        TotalReserves::<T>::insert(asset_id, total_reserves_new);
        T::Assets::transfer(asset_id, &Self::account_id(), receiver, reduce_amount, false)?;

        Self::deposit_event(Event::<T>::ReservesReduced {
            receiver: receiver.clone(),
            asset_id,
            amount: reduce_amount,
            total_reserves: total_reserves_new,
        });
        Ok(())
    }
}
