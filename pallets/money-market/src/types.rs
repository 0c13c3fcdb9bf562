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

use crate::InterestRateModel;
use frame_support::{pallet_prelude::*, PalletError};
use primitives::{Balance, Rate, Ratio};

/// Container for borrow balance information
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, Default, TypeInfo)]
pub struct BorrowSnapshot<Balance> {
    /// Principal Total balance (with accrued interest), after applying the most recent balance-changing action
    pub principal: Balance,
    /// Market borrow index as of the most recent balance-changing action
    pub interest_index: Rate,
}

/// Market parameters, one per listed underlying asset.
///
/// Listing is recorded by the presence of the market in storage. New fields
/// are only ever appended, see `migrations`.
#[derive(Clone, PartialEq, Eq, Encode, Decode, RuntimeDebug, TypeInfo)]
pub struct Market {
    /// Fraction of the supplied value that counts towards borrowing power
    pub collateral_factor: Ratio,
    /// Fraction of interest currently set aside for reserves
    pub reserve_factor: Ratio,
    /// Exchange rate used while the claim token supply is zero
    pub initial_exchange_rate: Rate,
    /// Current interest rate model being used
    pub rate_model: InterestRateModel,
    /// Upper bound of total borrows, zero means unlimited
    pub borrow_cap: Balance,
    /// Whether the market takes part in `refresh_reward_speeds`
    pub reward_enabled: bool,
}

/// Reward index of one side (supply or borrow) of a market.
///
/// Distinct from the interest `BorrowIndex` of the market.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, Default, TypeInfo)]
pub struct RewardMarketState<BlockNumber> {
    /// Accumulated reward per unit of stake, scaled by `REWARD_SCALE`
    pub index: u128,
    /// The block number the index was last updated at
    pub block: BlockNumber,
}

/// Actions that can be paused by the pause guardian.
#[derive(
    Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum Action {
    Mint,
    Borrow,
    Transfer,
    Seize,
}

/// Why a soft failure happened.
///
/// The discriminants are part of the encoded dispatch error, append only.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, TypeInfo, PalletError)]
pub enum ErrorKind {
    Unauthorized,
    MarketNotListed,
    MarketAlreadyListed,
    MathError,
    PriceError,
    InsufficientCash,
    InsufficientLiquidity,
    InsufficientShortfall,
    InsufficientReserves,
    TooMuchRepay,
    NonzeroBorrowBalance,
    ActionPaused,
    BorrowCapReached,
    TooManyAssets,
    InvalidCloseFactor,
    InvalidCollateralFactor,
    InvalidLiquidationIncentive,
    InvalidRateModel,
    BadInput,
}

/// Where in an operation a soft failure happened.
///
/// The discriminants are part of the encoded dispatch error, append only.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, TypeInfo, PalletError)]
pub enum FailureInfo {
    AccrueInterest,
    AccountLiquidity,
    MintComptrollerRejection,
    MintExchangeRateReadFailed,
    MintExchangeCalculationFailed,
    MintNewTotalSupplyCalculationFailed,
    MintNewAccountBalanceCalculationFailed,
    RedeemComptrollerRejection,
    RedeemExchangeRateReadFailed,
    RedeemExchangeTokensCalculationFailed,
    RedeemExchangeAmountCalculationFailed,
    RedeemNewTotalSupplyCalculationFailed,
    RedeemNewAccountBalanceCalculationFailed,
    RedeemTransferOutNotPossible,
    BorrowComptrollerRejection,
    BorrowCashNotAvailable,
    BorrowAccumulatedBalanceCalculationFailed,
    BorrowNewAccountBorrowBalanceCalculationFailed,
    BorrowNewTotalBalanceCalculationFailed,
    RepayBorrowComptrollerRejection,
    RepayBorrowAccumulatedBalanceCalculationFailed,
    RepayBorrowNewAccountBorrowBalanceCalculationFailed,
    LiquidateComptrollerRejection,
    LiquidateCalculateAmountSeizeFailed,
    LiquidateSeizeComptrollerRejection,
    LiquidateSeizeBalanceDecrementFailed,
    LiquidateSeizeBalanceIncrementFailed,
    LiquidateSeizeExchangeRateFailed,
    TransferComptrollerRejection,
    TransferNotAllowed,
    TransferNotEnough,
    TransferTooMuch,
    EnterMarkets,
    ExitMarketBalanceOwed,
    ExitMarketRejection,
    SupportMarketOwnerCheck,
    SupportMarketExists,
    SupportMarketValidation,
    SetCollateralFactorOwnerCheck,
    SetCollateralFactorNoExists,
    SetCollateralFactorValidation,
    SetCollateralFactorWithoutPrice,
    SetCloseFactorOwnerCheck,
    SetCloseFactorValidation,
    SetLiquidationIncentiveOwnerCheck,
    SetLiquidationIncentiveValidation,
    SetReserveFactorOwnerCheck,
    SetReserveFactorNoExists,
    SetInterestRateModelOwnerCheck,
    SetInterestRateModelNoExists,
    SetInterestRateModelValidation,
    SetPauseGuardianOwnerCheck,
    SetPausedOwnerCheck,
    SetPausedNoExists,
    SetBorrowCapGuardianOwnerCheck,
    SetBorrowCapOwnerCheck,
    SetBorrowCapNoExists,
    AddReservesOwnerCheck,
    AddReservesNoExists,
    AddReservesCalculationFailed,
    ReduceReservesOwnerCheck,
    ReduceReservesNoExists,
    ReduceReservesValidation,
    ReduceReservesCashNotAvailable,
    SetRewardSpeedsOwnerCheck,
    SetRewardSpeedsNoExists,
    SetRewardRateOwnerCheck,
    SetMarketRewardedOwnerCheck,
    SetMarketRewardedNoExists,
    RefreshRewardSpeedsPrice,
    RefreshRewardSpeedsCalculationFailed,
    RewardIndexCalculationFailed,
    ClaimRewardMarketNotListed,
}
