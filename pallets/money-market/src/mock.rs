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

use crate as pallet_money_market;
use frame_support::{
    construct_runtime, parameter_types,
    traits::{AsEnsureOriginWithArg, Everything, GenesisBuild},
    PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};

use primitives::{tokens, Balance, CurrencyId, Price, PriceDetail, PriceFeeder, Rate, Ratio};
use sp_core::H256;

use sp_runtime::{testing::Header, traits::IdentityLookup};
use std::{cell::RefCell, collections::HashMap};

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
    pub enum Test where
        Block = Block,
        NodeBlock = Block,
        UncheckedExtrinsic = UncheckedExtrinsic,
    {
        System: frame_system::{Pallet, Call, Storage, Config, Event<T>},
        Balances: pallet_balances::{Pallet, Call, Storage, Event<T>},
        Assets: pallet_assets::{Pallet, Call, Storage, Event<T>},
        MoneyMarket: pallet_money_market::{Pallet, Storage, Call, Config, Event<T>},
    }
);

pub type AccountId = u128;
pub type BlockNumber = u64;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;

pub const HKO: CurrencyId = tokens::HKO;
pub const KSM: CurrencyId = tokens::KSM;
pub const DOT: CurrencyId = tokens::DOT;
pub const USDT: CurrencyId = tokens::USDT;
/// Created in the assets pallet but never listed.
pub const UNLISTED: CurrencyId = 42;

parameter_types! {
    pub const BlockHashCount: u64 = 250;
    pub const SS58Prefix: u8 = 42;
}

impl frame_system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Index = u64;
    type BlockNumber = BlockNumber;
    type Hash = H256;
    type Hashing = ::sp_runtime::traits::BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Header = Header;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = BlockHashCount;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = SS58Prefix;
    type OnSetCode = ();
    type MaxConsumers = frame_support::traits::ConstU32<16>;
}

parameter_types! {
    pub const ExistentialDeposit: Balance = 1;
    pub const MaxLocks: u32 = 50;
}

impl pallet_balances::Config for Test {
    type Balance = Balance;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type AccountStore = System;
    type WeightInfo = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
}

pub struct MockPriceFeeder;

impl MockPriceFeeder {
    thread_local! {
        pub static PRICES: RefCell<HashMap<CurrencyId, Option<PriceDetail>>> = {
            RefCell::new(
                vec![HKO, KSM, DOT, USDT]
                    .iter()
                    .map(|&x| (x, Some((Price::saturating_from_integer(1), 1))))
                    .collect()
            )
        };
    }

    pub fn set_price(asset_id: CurrencyId, price: Price) {
        Self::PRICES.with(|prices| {
            prices.borrow_mut().insert(asset_id, Some((price, 1u64)));
        });
    }

    pub fn remove_price(asset_id: CurrencyId) {
        Self::PRICES.with(|prices| {
            prices.borrow_mut().insert(asset_id, None);
        });
    }

    pub fn reset() {
        Self::PRICES.with(|prices| {
            for (_, val) in prices.borrow_mut().iter_mut() {
                *val = Some((Price::saturating_from_integer(1), 1u64));
            }
        })
    }
}

impl PriceFeeder for MockPriceFeeder {
    fn get_price(asset_id: &CurrencyId) -> Option<PriceDetail> {
        Self::PRICES.with(|prices| prices.borrow().get(asset_id).copied().flatten())
    }
}

parameter_types! {
    pub const AssetDeposit: u64 = 1;
    pub const ApprovalDeposit: u64 = 1;
    pub const AssetAccountDeposit: u64 = 1;
    pub const AssetsStringLimit: u32 = 50;
    pub const MetadataDepositBase: u64 = 1;
    pub const MetadataDepositPerByte: u64 = 1;
}

impl pallet_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = Balance;
    type AssetId = CurrencyId;
    type AssetIdParameter = codec::Compact<CurrencyId>;
    type Currency = Balances;
    type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<AccountId>>;
    type ForceOrigin = EnsureRoot<AccountId>;
    type AssetDeposit = AssetDeposit;
    type MetadataDepositBase = MetadataDepositBase;
    type MetadataDepositPerByte = MetadataDepositPerByte;
    type AssetAccountDeposit = AssetAccountDeposit;
    type ApprovalDeposit = ApprovalDeposit;
    type StringLimit = AssetsStringLimit;
    type Freezer = ();
    type WeightInfo = ();
    type Extra = ();
    type RemoveItemsLimit = frame_support::traits::ConstU32<1000>;
    type CallbackHandle = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

parameter_types! {
    pub const MoneyMarketPalletId: PalletId = PalletId(*b"par/mmkt");
    pub const RewardAssetId: CurrencyId = HKO;
    pub const ProtocolSeizeShare: Ratio = Ratio::from_percent(10);
    pub const MaxAssets: u32 = 8;
    pub const MinCloseFactor: Ratio = Ratio::from_percent(5);
    pub const MaxCloseFactor: Ratio = Ratio::from_percent(90);
}

impl Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type PriceFeeder = MockPriceFeeder;
    type PalletId = MoneyMarketPalletId;
    type ReserveOrigin = EnsureRoot<AccountId>;
    type UpdateOrigin = EnsureRoot<AccountId>;
    type WeightInfo = ();
    type Assets = Assets;
    type RewardAssetId = RewardAssetId;
    type ProtocolSeizeShare = ProtocolSeizeShare;
    type MaxAssets = MaxAssets;
    type MinCloseFactor = MinCloseFactor;
    type MaxCloseFactor = MaxCloseFactor;
}

pub(crate) fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::default()
        .build_storage::<Test>()
        .unwrap();
    <pallet_money_market::GenesisConfig as GenesisBuild<Test>>::assimilate_storage(
        &pallet_money_market::GenesisConfig {
            close_factor: Ratio::from_percent(50),
            liquidation_incentive: Rate::saturating_from_rational(110, 100),
            reward_rate: Zero::zero(),
        },
        &mut t,
    )
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        MockPriceFeeder::reset();

        for asset_id in [HKO, KSM, DOT, USDT, UNLISTED] {
            Assets::force_create(RuntimeOrigin::root(), asset_id.into(), ALICE, true, 1).unwrap();
        }
        for asset_id in [KSM, DOT, USDT, UNLISTED] {
            for who in [ALICE, BOB, CHARLIE] {
                Assets::mint(RuntimeOrigin::signed(ALICE), asset_id.into(), who, unit(1000))
                    .unwrap();
            }
        }
        Assets::mint(RuntimeOrigin::signed(ALICE), HKO.into(), ALICE, unit(1000)).unwrap();

        MoneyMarket::add_market(RuntimeOrigin::root(), KSM, MARKET_MOCK).unwrap();
        MoneyMarket::add_market(RuntimeOrigin::root(), DOT, MARKET_MOCK).unwrap();
        MoneyMarket::add_market(RuntimeOrigin::root(), USDT, MARKET_MOCK).unwrap();
    });
    ext
}

/// Moves to block `n`, markets accrue lazily on their next operation.
pub(crate) fn run_to_block(n: BlockNumber) {
    System::set_block_number(n);
}

pub fn unit(d: u128) -> u128 {
    d.saturating_mul(10_u128.pow(12))
}

pub fn balance(asset_id: CurrencyId, who: &AccountId) -> Balance {
    <Assets as Inspect<AccountId>>::balance(asset_id, who)
}

pub const MARKET_MOCK: Market = Market {
    collateral_factor: Ratio::from_percent(50),
    reserve_factor: Ratio::from_percent(15),
    initial_exchange_rate: Rate::from_inner(20_000_000_000_000_000),
    rate_model: InterestRateModel::Jump(JumpModel {
        base_rate: Rate::from_inner(Rate::DIV / 100 * 2),
        multiplier: Rate::from_inner(Rate::DIV / 100 * 10),
        jump_multiplier: Rate::from_inner(Rate::DIV / 100 * 110),
        kink: Ratio::from_percent(80),
    }),
    borrow_cap: 0,
    reward_enabled: false,
};
