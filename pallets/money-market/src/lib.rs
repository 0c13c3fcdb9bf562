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

//! # Money market pallet
//!
//! ## Overview
//!
//! The money market pallet implements a pool-based lending protocol. Every
//! listed asset is a market: suppliers receive interest-bearing claim tokens,
//! borrowers borrow against the aggregate value of the markets they entered,
//! and accounts in shortfall can be liquidated.
//!
//! Interest accrues lazily, every operation touching a market accrues it
//! first. The risk engine in `risk` gates every balance change, and the reward
//! flywheel in `reward` distributes `RewardAssetId` to suppliers and borrowers.
//!
//! Soft failures are reported as `Error::Failure(kind, info)` or
//! `Error::ComptrollerRejection(kind, info)`, so callers can branch on the
//! `ErrorKind` without matching strings.

#![cfg_attr(not(feature = "std"), no_std)]

pub use crate::rate_model::*;

use frame_support::{
    log,
    pallet_prelude::*,
    storage::{with_transaction, TransactionOutcome},
    traits::tokens::fungibles::{Inspect, Mutate, Transfer},
    PalletId,
};
use frame_system::pallet_prelude::*;
pub use pallet::*;
use primitives::{
    Balance, CurrencyId, Liquidity, MarketStatus, Price, PriceFeeder, Rate, Ratio, Shortfall,
};
use sp_runtime::{
    traits::{
        AccountIdConversion, CheckedAdd, CheckedDiv, CheckedMul, One, Saturating, StaticLookup,
        Zero,
    },
    ArithmeticError, FixedPointNumber, FixedU128, SaturatedConversion,
};
use sp_std::{result::Result, vec::Vec};

pub use types::{
    Action, BorrowSnapshot, ErrorKind, FailureInfo, Market, RewardMarketState,
};
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;

mod interest;
mod market;
pub mod migrations;
mod ptoken;
mod rate_model;
mod reward;
mod risk;
mod types;

pub mod weights;

pub use reward::{REWARD_INITIAL_INDEX, REWARD_SCALE};

/// Collateral factor can never be set above this.
pub const MAX_COLLATERAL_FACTOR: Ratio = Ratio::from_percent(90);

/// Storage layout versions of the pallet.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum Versions {
    V1,
    V2,
}

impl Default for Versions {
    fn default() -> Self {
        Versions::V1
    }
}

#[frame_support::pallet]
pub mod pallet {

    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The oracle price feeder
        type PriceFeeder: PriceFeeder;

        /// The money market's module id, keeps the cash of every market.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The origin which can add/reduce reserves.
        type ReserveOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The origin which can list markets and update risk parameters.
        type UpdateOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;

        /// Underlying assets of the markets and the reward asset
        type Assets: Transfer<Self::AccountId, AssetId = CurrencyId, Balance = Balance>
            + Inspect<Self::AccountId, AssetId = CurrencyId, Balance = Balance>
            + Mutate<Self::AccountId, AssetId = CurrencyId, Balance = Balance>;

        /// The asset distributed by the reward flywheel
        #[pallet::constant]
        type RewardAssetId: Get<CurrencyId>;

        /// Share of seized collateral added to the reserves of the collateral market
        #[pallet::constant]
        type ProtocolSeizeShare: Get<Ratio>;

        /// Max number of markets an account can enter
        #[pallet::constant]
        type MaxAssets: Get<u32>;

        #[pallet::constant]
        type MinCloseFactor: Get<Ratio>;

        #[pallet::constant]
        type MaxCloseFactor: Get<Ratio>;
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Market accrual has not run in the current block
        MarketNotFresh,
        /// Liquidator is same as borrower
        LiquidatorIsBorrower,
        /// Amount is zero, or both redeem inputs are set
        InvalidAmount,
        /// The interest rate model failed to produce a rate
        InterestRateModelError,
        /// Borrow rate is above the per-block ceiling
        BorrowRateTooHigh,
        /// Could not calculate the utilization ratio
        CalcUtilizationFailed,
        /// Could not calculate the simple interest factor
        CalcSimpleInterestFactorFailed,
        /// Could not calculate the accumulated interest
        CalcInterestAccumulatedFailed,
        /// Could not calculate the total borrows
        CalcTotalBorrowsFailed,
        /// Could not calculate the total reserves
        CalcTotalReservesFailed,
        /// Could not calculate the borrow index
        CalcBorrowIndexFailed,
        /// Borrower does not hold enough collateral tokens to be seized
        LiquidateSeizeTooMuch,
        /// A business failure, `(what, where)`
        Failure(ErrorKind, FailureInfo),
        /// The risk engine rejected the action, `(why, where)`
        ComptrollerRejection(ErrorKind, FailureInfo),
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Interest accrued on a market
        InterestAccrued {
            asset_id: CurrencyId,
            cash_prior: Balance,
            interest_accumulated: Balance,
            borrow_index: Rate,
            total_borrows: Balance,
        },
        /// Underlying supplied in exchange for claim tokens
        Minted {
            who: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            tokens: Balance,
        },
        /// Claim tokens redeemed for underlying
        Redeemed {
            who: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            tokens: Balance,
        },
        Borrowed {
            who: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            account_borrows: Balance,
            total_borrows: Balance,
        },
        RepaidBorrow {
            payer: T::AccountId,
            borrower: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            account_borrows: Balance,
            total_borrows: Balance,
        },
        LiquidatedBorrow {
            liquidator: T::AccountId,
            borrower: T::AccountId,
            asset_id: CurrencyId,
            collateral_asset_id: CurrencyId,
            repay_amount: Balance,
            seize_tokens: Balance,
        },
        /// Collateral tokens seized from a borrower
        Seized {
            asset_id: CurrencyId,
            liquidator: T::AccountId,
            borrower: T::AccountId,
            seize_tokens: Balance,
            liquidator_tokens: Balance,
            protocol_tokens: Balance,
            reserves_added: Balance,
        },
        /// Claim tokens moved between accounts
        Transferred {
            asset_id: CurrencyId,
            from: T::AccountId,
            to: T::AccountId,
            tokens: Balance,
        },
        MarketListed {
            asset_id: CurrencyId,
            market: Market,
        },
        MarketEntered {
            asset_id: CurrencyId,
            who: T::AccountId,
        },
        MarketExited {
            asset_id: CurrencyId,
            who: T::AccountId,
        },
        NewCollateralFactor {
            asset_id: CurrencyId,
            old: Ratio,
            new: Ratio,
        },
        NewCloseFactor {
            old: Ratio,
            new: Ratio,
        },
        NewLiquidationIncentive {
            old: Rate,
            new: Rate,
        },
        NewReserveFactor {
            asset_id: CurrencyId,
            old: Ratio,
            new: Ratio,
        },
        NewRateModel {
            asset_id: CurrencyId,
            rate_model: InterestRateModel,
        },
        NewPauseGuardian {
            guardian: Option<T::AccountId>,
        },
        /// An action was paused or unpaused, globally when `asset_id` is `None`
        ActionPaused {
            asset_id: Option<CurrencyId>,
            action: Action,
            paused: bool,
        },
        NewBorrowCap {
            asset_id: CurrencyId,
            borrow_cap: Balance,
        },
        NewBorrowCapGuardian {
            guardian: Option<T::AccountId>,
        },
        ReservesAdded {
            payer: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            total_reserves: Balance,
        },
        ReservesReduced {
            receiver: T::AccountId,
            asset_id: CurrencyId,
            amount: Balance,
            total_reserves: Balance,
        },
        RewardSupplySpeedUpdated {
            asset_id: CurrencyId,
            speed: Balance,
        },
        RewardBorrowSpeedUpdated {
            asset_id: CurrencyId,
            speed: Balance,
        },
        DistributedSupplierReward {
            asset_id: CurrencyId,
            supplier: T::AccountId,
            delta: Balance,
            supply_index: u128,
        },
        DistributedBorrowerReward {
            asset_id: CurrencyId,
            borrower: T::AccountId,
            delta: Balance,
            borrow_index: u128,
        },
        /// Accrued reward paid out of the reward reserve
        RewardGranted {
            who: T::AccountId,
            amount: Balance,
        },
        RewardRateUpdated {
            rate: Balance,
        },
        MarketRewardedUpdated {
            asset_id: CurrencyId,
            enabled: bool,
        },
        /// Reward reserve funded
        RewardAdded {
            payer: T::AccountId,
            amount: Balance,
        },
    }

    /// Mapping of asset id to its market, presence means listed
    #[pallet::storage]
    pub type Markets<T: Config> = StorageMap<_, Blake2_128Concat, CurrencyId, Market>;

    /// The block number of the last interest accrual
    /// CurrencyId -> BlockNumber
    #[pallet::storage]
    #[pallet::getter(fn accrual_block_number)]
    pub type AccrualBlockNumber<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, T::BlockNumber, ValueQuery>;

    /// Total number of claim tokens in circulation
    /// CurrencyId -> Balance
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Balance, ValueQuery>;

    /// Total amount of outstanding borrows of the underlying in this market
    /// CurrencyId -> Balance
    #[pallet::storage]
    #[pallet::getter(fn total_borrows)]
    pub type TotalBorrows<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Balance, ValueQuery>;

    /// Total amount of reserves of the underlying held in this market
    /// CurrencyId -> Balance
    #[pallet::storage]
    #[pallet::getter(fn total_reserves)]
    pub type TotalReserves<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Balance, ValueQuery>;

    /// Accumulator of the total earned interest rate since the opening of the market
    /// CurrencyId -> Rate
    #[pallet::storage]
    #[pallet::getter(fn borrow_index)]
    pub type BorrowIndex<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Rate, ValueQuery>;

    /// Per-block borrow rate as of the last accrual
    #[pallet::storage]
    #[pallet::getter(fn borrow_rate)]
    pub type BorrowRate<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Rate, ValueQuery>;

    /// Per-block supply rate as of the last accrual
    #[pallet::storage]
    #[pallet::getter(fn supply_rate)]
    pub type SupplyRate<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Rate, ValueQuery>;

    /// Borrow utilization ratio
    #[pallet::storage]
    #[pallet::getter(fn utilization_ratio)]
    pub type UtilizationRatio<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Ratio, ValueQuery>;

    /// Claim token balances
    /// CurrencyId -> Owner -> Balance
    #[pallet::storage]
    #[pallet::getter(fn account_tokens)]
    pub type AccountTokens<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Mapping of account addresses to outstanding borrow balances
    /// CurrencyId -> Owner -> BorrowSnapshot
    #[pallet::storage]
    #[pallet::getter(fn account_borrows)]
    pub type AccountBorrows<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        Blake2_128Concat,
        T::AccountId,
        BorrowSnapshot<Balance>,
        ValueQuery,
    >;

    /// Markets an account has entered, in order of entry
    #[pallet::storage]
    #[pallet::getter(fn account_assets)]
    pub type AccountAssets<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<CurrencyId, T::MaxAssets>,
        ValueQuery,
    >;

    /// Max fraction of a borrow that can be repaid in one liquidation
    #[pallet::storage]
    #[pallet::getter(fn close_factor)]
    pub type CloseFactor<T: Config> = StorageValue<_, Ratio, ValueQuery>;

    /// Multiplier applied to the value of seized collateral, never below one
    #[pallet::storage]
    #[pallet::getter(fn liquidation_incentive)]
    pub type LiquidationIncentive<T: Config> = StorageValue<_, Rate, ValueQuery>;

    /// Account allowed to pause actions but not to unpause them
    #[pallet::storage]
    #[pallet::getter(fn pause_guardian)]
    pub type PauseGuardian<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account allowed to set borrow caps
    #[pallet::storage]
    #[pallet::getter(fn borrow_cap_guardian)]
    pub type BorrowCapGuardian<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Actions paused for every market
    #[pallet::storage]
    pub type GuardianPaused<T: Config> = StorageMap<_, Twox64Concat, Action, bool, ValueQuery>;

    /// Actions paused for a single market
    #[pallet::storage]
    pub type MarketGuardianPaused<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, CurrencyId, Twox64Concat, Action, bool, ValueQuery>;

    /// Reward index of the supply side of each market
    #[pallet::storage]
    #[pallet::getter(fn reward_supply_state)]
    pub type RewardSupplyState<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        RewardMarketState<T::BlockNumber>,
        ValueQuery,
    >;

    /// Reward index of the borrow side of each market
    #[pallet::storage]
    #[pallet::getter(fn reward_borrow_state)]
    pub type RewardBorrowState<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        RewardMarketState<T::BlockNumber>,
        ValueQuery,
    >;

    /// Reward distributed to suppliers of a market per block
    #[pallet::storage]
    #[pallet::getter(fn reward_supply_speeds)]
    pub type RewardSupplySpeeds<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Balance, ValueQuery>;

    /// Reward distributed to borrowers of a market per block
    #[pallet::storage]
    #[pallet::getter(fn reward_borrow_speeds)]
    pub type RewardBorrowSpeeds<T: Config> =
        StorageMap<_, Blake2_128Concat, CurrencyId, Balance, ValueQuery>;

    /// Supply reward index of each supplier as of their last distribution
    #[pallet::storage]
    #[pallet::getter(fn reward_supplier_index)]
    pub type RewardSupplierIndex<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Borrow reward index of each borrower as of their last distribution
    #[pallet::storage]
    #[pallet::getter(fn reward_borrower_index)]
    pub type RewardBorrowerIndex<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        CurrencyId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Reward accrued but not yet transferred to each account
    #[pallet::storage]
    #[pallet::getter(fn reward_accrued)]
    pub type RewardAccrued<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Reward distributed across all rewarded markets per block
    #[pallet::storage]
    #[pallet::getter(fn reward_rate)]
    pub type RewardRate<T: Config> = StorageValue<_, Balance, ValueQuery>;

    /// Storage layout version
    #[pallet::storage]
    pub type Version<T: Config> = StorageValue<_, Versions, ValueQuery>;

    #[pallet::pallet]
    #[pallet::without_storage_info]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::genesis_config]
    pub struct GenesisConfig {
        pub close_factor: Ratio,
        pub liquidation_incentive: Rate,
        pub reward_rate: Balance,
    }

    #[cfg(feature = "std")]
    impl Default for GenesisConfig {
        fn default() -> Self {
            Self {
                close_factor: Ratio::from_percent(50),
                liquidation_incentive: Rate::saturating_from_rational(108, 100),
                reward_rate: Zero::zero(),
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> GenesisBuild<T> for GenesisConfig {
        fn build(&self) {
            CloseFactor::<T>::put(self.close_factor);
            LiquidationIncentive::<T>::put(self.liquidation_incentive);
            RewardRate::<T>::put(self.reward_rate);
            Version::<T>::put(Versions::V2);
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<T::BlockNumber> for Pallet<T> {
        fn on_runtime_upgrade() -> Weight {
            migrations::v2::migrate::<T>()
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<Vec<u8>, &'static str> {
            migrations::v2::pre_migrate::<T>()
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: Vec<u8>) -> Result<(), &'static str> {
            migrations::v2::post_migrate::<T>(state)
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Sender supplies assets into the market and receives claim tokens in exchange.
        ///
        /// - `asset_id`: the asset to be deposited.
        /// - `mint_amount`: the amount to be deposited.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            mint_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::mint_fresh(&who, asset_id, mint_amount)?;
            Ok(().into())
        }

        /// Sender redeems claim tokens in exchange for the underlying asset.
        ///
        /// - `asset_id`: the asset to be redeemed.
        /// - `redeem_tokens`: the number of claim tokens to redeem.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::redeem())]
        pub fn redeem(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            redeem_tokens: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::redeem_fresh(&who, asset_id, redeem_tokens, Zero::zero())?;
            Ok(().into())
        }

        /// Sender redeems claim tokens in exchange for a specified amount of underlying asset.
        ///
        /// - `asset_id`: the asset to be redeemed.
        /// - `redeem_amount`: the amount of underlying to receive.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::redeem())]
        pub fn redeem_underlying(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            redeem_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::redeem_fresh(&who, asset_id, Zero::zero(), redeem_amount)?;
            Ok(().into())
        }

        /// Sender redeems all of their claim tokens in exchange for the underlying asset.
        ///
        /// - `asset_id`: the asset to be redeemed.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::redeem_all())]
        pub fn redeem_all(origin: OriginFor<T>, asset_id: CurrencyId) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            let redeem_tokens = AccountTokens::<T>::get(asset_id, &who);
            Self::redeem_fresh(&who, asset_id, redeem_tokens, Zero::zero())?;
            Ok(().into())
        }

        /// Sender borrows assets from the protocol to their own address.
        ///
        /// - `asset_id`: the asset to be borrowed.
        /// - `borrow_amount`: the amount to be borrowed.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::borrow())]
        pub fn borrow(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            borrow_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::borrow_fresh(&who, asset_id, borrow_amount)?;
            Ok(().into())
        }

        /// Sender repays some of their debts.
        ///
        /// `Balance::max_value()` repays the whole borrow balance.
        ///
        /// - `asset_id`: the asset to be repaid.
        /// - `repay_amount`: the amount to be repaid.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::repay_borrow())]
        pub fn repay_borrow(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            repay_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::repay_borrow_fresh(&who, &who, asset_id, repay_amount)?;
            Ok(().into())
        }

        /// Sender repays a borrow belonging to `borrower`.
        ///
        /// - `borrower`: the account with the debt being paid off.
        /// - `asset_id`: the asset to be repaid.
        /// - `repay_amount`: the amount to be repaid, `Balance::max_value()` for all.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::repay_borrow())]
        pub fn repay_borrow_behalf(
            origin: OriginFor<T>,
            borrower: <T::Lookup as StaticLookup>::Source,
            asset_id: CurrencyId,
            repay_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            let payer = ensure_signed(origin)?;
            let borrower = T::Lookup::lookup(borrower)?;
            Self::accrue_interest(asset_id)?;
            Self::repay_borrow_fresh(&payer, &borrower, asset_id, repay_amount)?;
            Ok(().into())
        }

        /// Sender repays all of their debts.
        ///
        /// - `asset_id`: the asset to be repaid.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::repay_borrow_all())]
        pub fn repay_borrow_all(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Self::repay_borrow_fresh(&who, &who, asset_id, Balance::max_value())?;
            Ok(().into())
        }

        /// The sender liquidates the borrower's collateral.
        ///
        /// - `borrower`: the borrower to be liquidated.
        /// - `liquidation_asset_id`: the asset to be repaid on behalf of the borrower.
        /// - `repay_amount`: the amount to be repaid.
        /// - `collateral_asset_id`: the collateral to seize from the borrower.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::liquidate_borrow())]
        pub fn liquidate_borrow(
            origin: OriginFor<T>,
            borrower: T::AccountId,
            liquidation_asset_id: CurrencyId,
            repay_amount: Balance,
            collateral_asset_id: CurrencyId,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::accrue_interest(liquidation_asset_id)?;
            Self::accrue_interest(collateral_asset_id)?;
            Self::liquidate_borrow_fresh(
                &who,
                &borrower,
                liquidation_asset_id,
                repay_amount,
                collateral_asset_id,
            )?;
            Ok(().into())
        }

        /// Moves claim tokens of `asset_id` from the sender to `dest`.
        ///
        /// - `dest`: the receiver of the claim tokens.
        /// - `asset_id`: the market the claim tokens belong to.
        /// - `tokens`: the number of claim tokens.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            dest: <T::Lookup as StaticLookup>::Source,
            asset_id: CurrencyId,
            tokens: Balance,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let dest = T::Lookup::lookup(dest)?;
            Self::transfer_tokens(&who, &dest, asset_id, tokens)?;
            Ok(().into())
        }

        /// Accrues interest of a market up to the current block.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::accrue_interest())]
        pub fn accrue_interest_for(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
        ) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;
            Self::accrue_interest(asset_id)?;
            Ok(().into())
        }

        /// Counts the sender's supplies of `assets` as collateral.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::enter_markets(assets.len() as u32))]
        pub fn enter_markets(
            origin: OriginFor<T>,
            assets: Vec<CurrencyId>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            for asset_id in assets {
                Self::add_to_market(asset_id, &who)
                    .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::EnterMarkets))?;
            }
            Ok(().into())
        }

        /// Stops counting the sender's supply of `asset_id` as collateral.
        ///
        /// Fails if the sender still borrows the asset or the exit creates a shortfall.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::exit_market())]
        pub fn exit_market(origin: OriginFor<T>, asset_id: CurrencyId) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            Self::exit_market_internal(&who, asset_id)?;
            Ok(().into())
        }

        /// Claims the reward accrued by the sender in every market.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::claim_reward())]
        pub fn claim_reward(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let markets: Vec<CurrencyId> = Markets::<T>::iter_keys().collect();
            Self::claim_reward_internal(&[who], &markets, true, true)?;
            Ok(().into())
        }

        /// Claims the reward accrued by `holders` in `markets`.
        ///
        /// - `borrowers`: whether to distribute the borrow side.
        /// - `suppliers`: whether to distribute the supply side.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::claim_reward_for(holders.len() as u32, markets.len() as u32))]
        pub fn claim_reward_for(
            origin: OriginFor<T>,
            holders: Vec<T::AccountId>,
            markets: Vec<CurrencyId>,
            borrowers: bool,
            suppliers: bool,
        ) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;
            Self::claim_reward_internal(&holders, &markets, borrowers, suppliers)?;
            Ok(().into())
        }

        /// Lists a new market. Listing is final.
        ///
        /// - `asset_id`: market related currency
        /// - `market`: the market parameters
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::add_market())]
        pub fn add_market(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            market: Market,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SupportMarketOwnerCheck)?;
            ensure!(
                !Markets::<T>::contains_key(asset_id),
                Error::<T>::Failure(ErrorKind::MarketAlreadyListed, FailureInfo::SupportMarketExists)
            );
            ensure!(
                market.rate_model.check_model(),
                Error::<T>::Failure(ErrorKind::InvalidRateModel, FailureInfo::SupportMarketValidation)
            );
            ensure!(
                market.collateral_factor <= MAX_COLLATERAL_FACTOR,
                Error::<T>::Failure(
                    ErrorKind::InvalidCollateralFactor,
                    FailureInfo::SupportMarketValidation
                )
            );
            ensure!(
                !market.initial_exchange_rate.is_zero(),
                Error::<T>::Failure(ErrorKind::BadInput, FailureInfo::SupportMarketValidation)
            );
            if !market.collateral_factor.is_zero() {
                Self::get_price(asset_id).map_err(|kind| {
                    Error::<T>::Failure(kind, FailureInfo::SetCollateralFactorWithoutPrice)
                })?;
            }

            let now = <frame_system::Pallet<T>>::block_number();
            Markets::<T>::insert(asset_id, market.clone());
            AccrualBlockNumber::<T>::insert(asset_id, now);
            BorrowIndex::<T>::insert(asset_id, Rate::one());
            Self::initialize_reward_state(asset_id, now);

            Self::deposit_event(Event::<T>::MarketListed { asset_id, market });
            Ok(().into())
        }

        /// Sets the collateral factor of a market. A non-zero factor needs a price.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::set_collateral_factor())]
        pub fn set_collateral_factor(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            collateral_factor: Ratio,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetCollateralFactorOwnerCheck)?;
            let market = Self::market(asset_id).map_err(|kind| {
                Error::<T>::Failure(kind, FailureInfo::SetCollateralFactorNoExists)
            })?;
            ensure!(
                collateral_factor <= MAX_COLLATERAL_FACTOR,
                Error::<T>::Failure(
                    ErrorKind::InvalidCollateralFactor,
                    FailureInfo::SetCollateralFactorValidation
                )
            );
            if !collateral_factor.is_zero() {
                Self::get_price(asset_id).map_err(|kind| {
                    Error::<T>::Failure(kind, FailureInfo::SetCollateralFactorWithoutPrice)
                })?;
            }

            Markets::<T>::insert(
                asset_id,
                Market {
                    collateral_factor,
                    ..market.clone()
                },
            );
            Self::deposit_event(Event::<T>::NewCollateralFactor {
                asset_id,
                old: market.collateral_factor,
                new: collateral_factor,
            });
            Ok(().into())
        }

        /// Sets the close factor, bounded by `MinCloseFactor` and `MaxCloseFactor`.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::set_close_factor())]
        pub fn set_close_factor(
            origin: OriginFor<T>,
            close_factor: Ratio,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetCloseFactorOwnerCheck)?;
            ensure!(
                close_factor >= T::MinCloseFactor::get() && close_factor <= T::MaxCloseFactor::get(),
                Error::<T>::Failure(
                    ErrorKind::InvalidCloseFactor,
                    FailureInfo::SetCloseFactorValidation
                )
            );
            let old = CloseFactor::<T>::get();
            CloseFactor::<T>::put(close_factor);
            Self::deposit_event(Event::<T>::NewCloseFactor {
                old,
                new: close_factor,
            });
            Ok(().into())
        }

        /// Sets the liquidation incentive, which can't be less than one.
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::set_liquidation_incentive())]
        pub fn set_liquidation_incentive(
            origin: OriginFor<T>,
            liquidation_incentive: Rate,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetLiquidationIncentiveOwnerCheck)?;
            ensure!(
                liquidation_incentive >= Rate::one(),
                Error::<T>::Failure(
                    ErrorKind::InvalidLiquidationIncentive,
                    FailureInfo::SetLiquidationIncentiveValidation
                )
            );
            let old = LiquidationIncentive::<T>::get();
            LiquidationIncentive::<T>::put(liquidation_incentive);
            Self::deposit_event(Event::<T>::NewLiquidationIncentive {
                old,
                new: liquidation_incentive,
            });
            Ok(().into())
        }

        /// Sets the reserve factor of a market, interest is accrued with the old one first.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::set_reserve_factor())]
        pub fn set_reserve_factor(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            reserve_factor: Ratio,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetReserveFactorOwnerCheck)?;
            Self::market(asset_id).map_err(|kind| {
                Error::<T>::Failure(kind, FailureInfo::SetReserveFactorNoExists)
            })?;
            Self::accrue_interest(asset_id)?;

            let old = Self::mutate_market(asset_id, |market| {
                let old = market.reserve_factor;
                market.reserve_factor = reserve_factor;
                old
            })?;
            Self::deposit_event(Event::<T>::NewReserveFactor {
                asset_id,
                old,
                new: reserve_factor,
            });
            Ok(().into())
        }

        /// Swaps the interest rate model of a market.
        ///
        /// Interest up to the current block is accrued with the old model, then
        /// the new one is checked and installed.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::set_rate_model())]
        pub fn set_rate_model(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            rate_model: InterestRateModel,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetInterestRateModelOwnerCheck)?;
            Self::market(asset_id).map_err(|kind| {
                Error::<T>::Failure(kind, FailureInfo::SetInterestRateModelNoExists)
            })?;
            Self::accrue_interest(asset_id)?;
            ensure!(
                rate_model.check_model(),
                Error::<T>::Failure(
                    ErrorKind::InvalidRateModel,
                    FailureInfo::SetInterestRateModelValidation
                )
            );

            Self::mutate_market(asset_id, |market| market.rate_model = rate_model)?;
            Self::deposit_event(Event::<T>::NewRateModel {
                asset_id,
                rate_model,
            });
            Ok(().into())
        }

        /// Sets the account allowed to pause actions.
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::set_pause_guardian())]
        pub fn set_pause_guardian(
            origin: OriginFor<T>,
            guardian: Option<T::AccountId>,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetPauseGuardianOwnerCheck)?;
            PauseGuardian::<T>::set(guardian.clone());
            Self::deposit_event(Event::<T>::NewPauseGuardian { guardian });
            Ok(().into())
        }

        /// Pauses or unpauses an action, for every market when `asset_id` is `None`.
        ///
        /// The pause guardian may only pause.
        #[pallet::call_index(22)]
        #[pallet::weight(T::WeightInfo::set_action_paused())]
        pub fn set_action_paused(
            origin: OriginFor<T>,
            asset_id: Option<CurrencyId>,
            action: Action,
            paused: bool,
        ) -> DispatchResultWithPostInfo {
            if T::UpdateOrigin::try_origin(origin.clone()).is_err() {
                let who = ensure_signed(origin).map_err(|_| {
                    Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::SetPausedOwnerCheck)
                })?;
                ensure!(
                    paused && Self::pause_guardian().as_ref() == Some(&who),
                    Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::SetPausedOwnerCheck)
                );
            }

            match asset_id {
                Some(asset_id) => {
                    Self::market(asset_id).map_err(|kind| {
                        Error::<T>::Failure(kind, FailureInfo::SetPausedNoExists)
                    })?;
                    MarketGuardianPaused::<T>::insert(asset_id, action, paused);
                }
                None => GuardianPaused::<T>::insert(action, paused),
            }
            Self::deposit_event(Event::<T>::ActionPaused {
                asset_id,
                action,
                paused,
            });
            Ok(().into())
        }

        /// Sets the account allowed to set borrow caps.
        #[pallet::call_index(23)]
        #[pallet::weight(T::WeightInfo::set_borrow_cap_guardian())]
        pub fn set_borrow_cap_guardian(
            origin: OriginFor<T>,
            guardian: Option<T::AccountId>,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetBorrowCapGuardianOwnerCheck)?;
            BorrowCapGuardian::<T>::set(guardian.clone());
            Self::deposit_event(Event::<T>::NewBorrowCapGuardian { guardian });
            Ok(().into())
        }

        /// Sets borrow caps of markets, zero means unlimited.
        ///
        /// May be called by the admin or by the borrow cap guardian.
        #[pallet::call_index(24)]
        #[pallet::weight(T::WeightInfo::set_borrow_caps(borrow_caps.len() as u32))]
        pub fn set_borrow_caps(
            origin: OriginFor<T>,
            borrow_caps: Vec<(CurrencyId, Balance)>,
        ) -> DispatchResultWithPostInfo {
            if T::UpdateOrigin::try_origin(origin.clone()).is_err() {
                let who = ensure_signed(origin).map_err(|_| {
                    Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::SetBorrowCapOwnerCheck)
                })?;
                ensure!(
                    Self::borrow_cap_guardian().as_ref() == Some(&who),
                    Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::SetBorrowCapOwnerCheck)
                );
            }

            for (asset_id, borrow_cap) in borrow_caps {
                Self::mutate_market(asset_id, |market| market.borrow_cap = borrow_cap).map_err(
                    |_| {
                        Error::<T>::Failure(
                            ErrorKind::MarketNotListed,
                            FailureInfo::SetBorrowCapNoExists,
                        )
                    },
                )?;
                Self::deposit_event(Event::<T>::NewBorrowCap {
                    asset_id,
                    borrow_cap,
                });
            }
            Ok(().into())
        }

        /// Add reserves by transferring from payer.
        ///
        /// May only be called from `T::ReserveOrigin`.
        ///
        /// - `payer`: the payer account.
        /// - `asset_id`: the assets to be added.
        /// - `add_amount`: the amount to be added.
        #[pallet::call_index(25)]
        #[pallet::weight(T::WeightInfo::add_reserves())]
        pub fn add_reserves(
            origin: OriginFor<T>,
            payer: <T::Lookup as StaticLookup>::Source,
            asset_id: CurrencyId,
            add_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            T::ReserveOrigin::ensure_origin(origin).map_err(|_| {
                Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::AddReservesOwnerCheck)
            })?;
            let payer = T::Lookup::lookup(payer)?;
            Self::market(asset_id)
                .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::AddReservesNoExists))?;
            Self::accrue_interest(asset_id)?;
            Self::add_reserves_fresh(&payer, asset_id, add_amount)?;
            Ok(().into())
        }

        /// Reduces reserves by transferring to receiver.
        ///
        /// May only be called from `T::ReserveOrigin`.
        ///
        /// - `receiver`: the receiver account.
        /// - `asset_id`: the assets to be reduced.
        /// - `reduce_amount`: the amount to be reduced.
        #[pallet::call_index(26)]
        #[pallet::weight(T::WeightInfo::reduce_reserves())]
        pub fn reduce_reserves(
            origin: OriginFor<T>,
            receiver: <T::Lookup as StaticLookup>::Source,
            asset_id: CurrencyId,
            reduce_amount: Balance,
        ) -> DispatchResultWithPostInfo {
            T::ReserveOrigin::ensure_origin(origin).map_err(|_| {
                Error::<T>::Failure(ErrorKind::Unauthorized, FailureInfo::ReduceReservesOwnerCheck)
            })?;
            let receiver = T::Lookup::lookup(receiver)?;
            Self::market(asset_id)
                .map_err(|kind| Error::<T>::Failure(kind, FailureInfo::ReduceReservesNoExists))?;
            Self::accrue_interest(asset_id)?;
            Self::reduce_reserves_fresh(&receiver, asset_id, reduce_amount)?;
            Ok(().into())
        }

        /// Sets the reward speeds of both sides of a market.
        ///
        /// Indices are brought up to date with the old speeds before the new ones apply.
        #[pallet::call_index(27)]
        #[pallet::weight(T::WeightInfo::set_reward_speeds())]
        pub fn set_reward_speeds(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            supply_speed: Balance,
            borrow_speed: Balance,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetRewardSpeedsOwnerCheck)?;
            Self::market(asset_id).map_err(|kind| {
                Error::<T>::Failure(kind, FailureInfo::SetRewardSpeedsNoExists)
            })?;
            Self::set_reward_supply_speed(asset_id, supply_speed)?;
            Self::set_reward_borrow_speed(asset_id, borrow_speed)?;
            Ok(().into())
        }

        /// Sets the reward distributed per block across rewarded markets and refreshes speeds.
        #[pallet::call_index(28)]
        #[pallet::weight(T::WeightInfo::set_reward_rate())]
        pub fn set_reward_rate(origin: OriginFor<T>, rate: Balance) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetRewardRateOwnerCheck)?;
            RewardRate::<T>::put(rate);
            Self::deposit_event(Event::<T>::RewardRateUpdated { rate });
            Self::refresh_reward_speeds_internal()?;
            Ok(().into())
        }

        /// Adds or drops a market from reward distribution and refreshes speeds.
        #[pallet::call_index(29)]
        #[pallet::weight(T::WeightInfo::set_market_rewarded())]
        pub fn set_market_rewarded(
            origin: OriginFor<T>,
            asset_id: CurrencyId,
            enabled: bool,
        ) -> DispatchResultWithPostInfo {
            Self::ensure_admin(origin, FailureInfo::SetMarketRewardedOwnerCheck)?;
            Self::mutate_market(asset_id, |market| market.reward_enabled = enabled).map_err(
                |_| {
                    Error::<T>::Failure(
                        ErrorKind::MarketNotListed,
                        FailureInfo::SetMarketRewardedNoExists,
                    )
                },
            )?;
            Self::deposit_event(Event::<T>::MarketRewardedUpdated { asset_id, enabled });
            if !enabled {
                Self::set_reward_supply_speed(asset_id, Zero::zero())?;
                Self::set_reward_borrow_speed(asset_id, Zero::zero())?;
            }
            Self::refresh_reward_speeds_internal()?;
            Ok(().into())
        }

        /// Recomputes reward speeds of every market from its share of borrowed value.
        #[pallet::call_index(30)]
        #[pallet::weight(T::WeightInfo::refresh_reward_speeds())]
        pub fn refresh_reward_speeds(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;
            Self::refresh_reward_speeds_internal()?;
            Ok(().into())
        }

        /// Funds the reward reserve from the sender.
        #[pallet::call_index(31)]
        #[pallet::weight(T::WeightInfo::add_reward())]
        pub fn add_reward(origin: OriginFor<T>, amount: Balance) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
            T::Assets::transfer(
                T::RewardAssetId::get(),
                &who,
                &Self::reward_account_id(),
                amount,
                true,
            )?;
            Self::deposit_event(Event::<T>::RewardAdded { payer: who, amount });
            Ok(().into())
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Cash of a market, including its reserves.
    pub fn get_cash(asset_id: CurrencyId) -> Balance {
        T::Assets::balance(asset_id, &Self::account_id())
    }

    /// Claim tokens, stored borrow balance and stored exchange rate of `who`.
    pub fn get_account_snapshot(
        who: &T::AccountId,
        asset_id: CurrencyId,
    ) -> Result<(Balance, Balance, Rate), DispatchError> {
        Ok((
            AccountTokens::<T>::get(asset_id, who),
            Self::borrow_balance_stored(who, asset_id)?,
            Self::exchange_rate_stored(asset_id)?,
        ))
    }

    /// Account liquidity as a dispatch error, for runtime api consumers.
    pub fn account_liquidity(
        account: &T::AccountId,
    ) -> Result<(Liquidity, Shortfall), DispatchError> {
        Self::get_account_liquidity(account).map_err(|kind| {
            Error::<T>::Failure(kind, FailureInfo::AccountLiquidity).into()
        })
    }

    /// Status of a market as of the current block, nothing is persisted.
    pub fn market_status(asset_id: CurrencyId) -> Result<MarketStatus<Balance>, DispatchError> {
        with_transaction(|| {
            let status = Self::accrue_interest(asset_id).and_then(|_| {
                Ok(MarketStatus {
                    exchange_rate: Self::exchange_rate_stored(asset_id)?,
                    borrow_rate: BorrowRate::<T>::get(asset_id),
                    supply_rate: SupplyRate::<T>::get(asset_id),
                    utilization: UtilizationRatio::<T>::get(asset_id),
                    total_supply: TotalSupply::<T>::get(asset_id),
                    total_borrows: TotalBorrows::<T>::get(asset_id),
                    total_reserves: TotalReserves::<T>::get(asset_id),
                    cash: Self::get_cash(asset_id),
                })
            });
            TransactionOutcome::Rollback(status)
        })
    }

    /// Admin origin check, reported as an unauthorized failure in `info`.
    fn ensure_admin(origin: OriginFor<T>, info: FailureInfo) -> DispatchResult {
        T::UpdateOrigin::ensure_origin(origin)
            .map(|_| ())
            .map_err(|_| Error::<T>::Failure(ErrorKind::Unauthorized, info).into())
    }

    // Returns a stored Market.
    //
    // Returns `Err` if market does not exist.
    pub fn market(asset_id: CurrencyId) -> Result<Market, ErrorKind> {
        Markets::<T>::try_get(asset_id).map_err(|_err| ErrorKind::MarketNotListed)
    }

    // Mutates a stored Market.
    //
    // Returns `Err` if market does not exist.
    pub(crate) fn mutate_market<F, R>(asset_id: CurrencyId, cb: F) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut Market) -> R,
    {
        Markets::<T>::try_mutate(asset_id, |opt| {
            if let Some(market) = opt {
                return Ok(cb(market));
            }
            Err(Error::<T>::Failure(ErrorKind::MarketNotListed, FailureInfo::SupportMarketExists).into())
        })
    }

    pub fn get_price(asset_id: CurrencyId) -> Result<Price, ErrorKind> {
        let (price, _) = T::PriceFeeder::get_price(&asset_id).ok_or(ErrorKind::PriceError)?;
        if price.is_zero() {
            return Err(ErrorKind::PriceError);
        }

        Ok(price)
    }
}
