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

use sp_runtime::DispatchResult;

use crate::*;

impl<T: Config> Pallet<T> {
    /// Moves `tokens` claim tokens of `asset_id` from `src` to `dst`.
    ///
    /// Collateral locked by the borrows of `src` can't be moved.
    pub(crate) fn transfer_tokens(
        src: &T::AccountId,
        dst: &T::AccountId,
        asset_id: CurrencyId,
        tokens: Balance,
    ) -> DispatchResult {
        Self::transfer_allowed(asset_id, src, tokens).map_err(|kind| {
            Error::<T>::ComptrollerRejection(kind, FailureInfo::TransferComptrollerRejection)
        })?;
        ensure!(
            src != dst,
            Error::<T>::Failure(ErrorKind::BadInput, FailureInfo::TransferNotAllowed)
        );

        Self::update_reward_supply_index(asset_id)?;
        Self::distribute_supplier_reward(asset_id, src)?;
        Self::distribute_supplier_reward(asset_id, dst)?;

        let src_tokens_new = Self::account_tokens(asset_id, src)
            .checked_sub(tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::TransferNotEnough,
            ))?;
        let dst_tokens_new = Self::account_tokens(asset_id, dst)
            .checked_add(tokens)
            .ok_or(Error::<T>::Failure(
                ErrorKind::MathError,
                FailureInfo::TransferTooMuch,
            ))?;

        AccountTokens::<T>::insert(asset_id, src, src_tokens_new);
        AccountTokens::<T>::insert(asset_id, dst, dst_tokens_new);

        Self::deposit_event(Event::<T>::Transferred {
            asset_id,
            from: src.clone(),
            to: dst.clone(),
            tokens,
        });
        Ok(())
    }

    /// Claim tokens of `who` that can be redeemed or moved without creating a shortfall.
    pub fn free_tokens(who: &T::AccountId, asset_id: CurrencyId) -> Result<Balance, DispatchError> {
        let tokens = Self::account_tokens(asset_id, who);
        if !Self::check_membership(who, asset_id) {
            return Ok(tokens);
        }

        let market = Self::market(asset_id)
            .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::AccountLiquidity))?;
        let (liquidity, _) = Self::account_liquidity(who)?;
        // lockedValue = tokens * exchangeRate * collateralFactor * price
        let tokens_to_denom = Rate::from(market.collateral_factor)
            .checked_mul(&Self::exchange_rate_stored(asset_id)?)
            .and_then(|r| r.checked_mul(&Self::get_price(asset_id).ok()?))
            .ok_or(Error::<T>::Failure(
                ErrorKind::PriceError,
                FailureInfo::AccountLiquidity,
            ))?;
        if tokens_to_denom.is_zero() {
            return Ok(tokens);
        }

        let free = Self::mul_div(liquidity.into_inner(), Rate::DIV, tokens_to_denom.into_inner())?;
        Ok(free.min(tokens))
    }
}
