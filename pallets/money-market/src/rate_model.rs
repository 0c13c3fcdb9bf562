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

use frame_support::pallet_prelude::*;
use primitives::{Rate, Ratio, BLOCKS_PER_YEAR};
use sp_runtime::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, One, Saturating, Zero},
    FixedPointNumber,
};

/// Circuit breaker for the per-block borrow rate (0.0005% per block).
pub const MAX_BORROW_RATE_PER_BLOCK: Rate = Rate::from_inner(5_000_000_000_000);

pub trait InterestRateModelLike {
    /// Check the model for sanity
    fn check_model(&self) -> bool;

    /// Calculates the annualized borrow interest rate of the model
    fn get_borrow_rate(&self, utilization: Ratio) -> Option<Rate>;
}

/// Interest rate model, selected per market and swappable by the admin.
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, TypeInfo)]
pub enum InterestRateModel {
    Jump(JumpModel),
    Linear(LinearModel),
}

impl Default for InterestRateModel {
    fn default() -> Self {
        // 2% idle, 10% at the kink, 32% when fully borrowed
        Self::new_jump_model(
            Rate::saturating_from_rational(2, 100),
            Rate::saturating_from_rational(10, 100),
            Rate::saturating_from_rational(110, 100),
            Ratio::from_percent(80),
        )
    }
}

impl InterestRateModel {
    pub fn new_jump_model(
        base_rate: Rate,
        multiplier: Rate,
        jump_multiplier: Rate,
        kink: Ratio,
    ) -> Self {
        Self::Jump(JumpModel::new_model(
            base_rate,
            multiplier,
            jump_multiplier,
            kink,
        ))
    }

    pub fn new_linear_model(base_rate: Rate, multiplier: Rate) -> Self {
        Self::Linear(LinearModel::new_model(base_rate, multiplier))
    }

    /// Borrow rate applied to every block elapsed since the last accrual
    pub fn get_borrow_rate_per_block(&self, utilization: Ratio) -> Option<Rate> {
        self.get_borrow_rate(utilization)?
            .checked_div(&Rate::saturating_from_integer(BLOCKS_PER_YEAR))
    }

    /// Calculates the current supply interest rate
    pub fn get_supply_rate(borrow_rate: Rate, util: Ratio, reserve_factor: Ratio) -> Rate {
        // ((1 - reserve_factor) * borrow_rate) * utilization
        let one_minus_reserve_factor = Ratio::one().saturating_sub(reserve_factor);
        let rate_to_pool = borrow_rate.saturating_mul(one_minus_reserve_factor.into());

        rate_to_pool.saturating_mul(util.into())
    }
}

impl InterestRateModelLike for InterestRateModel {
    fn check_model(&self) -> bool {
        match self {
            Self::Jump(jump) => jump.check_model(),
            Self::Linear(linear) => linear.check_model(),
        }
    }

    fn get_borrow_rate(&self, utilization: Ratio) -> Option<Rate> {
        match self {
            Self::Jump(jump) => jump.get_borrow_rate(utilization),
            Self::Linear(linear) => linear.get_borrow_rate(utilization),
        }
    }
}

/// Kinked rate curve.
///
/// The annual borrow rate grows by `multiplier` per unit of utilization up to
/// `kink` and by `jump_multiplier` past it:
///
/// `base_rate + multiplier * min(util, kink) + jump_multiplier * max(util - kink, 0)`
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, Default, TypeInfo)]
pub struct JumpModel {
    pub base_rate: Rate,
    /// Slope below the kink
    pub multiplier: Rate,
    /// Slope above the kink
    pub jump_multiplier: Rate,
    pub kink: Ratio,
}

impl JumpModel {
    pub const MAX_BASE_RATE: Rate = Rate::from_inner(100_000_000_000_000_000); // 10%
    pub const MAX_KINK_RATE: Rate = Rate::from_inner(300_000_000_000_000_000); // 30%
    pub const MAX_FULL_RATE: Rate = Rate::from_inner(500_000_000_000_000_000); // 50%

    pub fn new_model(
        base_rate: Rate,
        multiplier: Rate,
        jump_multiplier: Rate,
        kink: Ratio,
    ) -> JumpModel {
        Self {
            base_rate,
            multiplier,
            jump_multiplier,
            kink,
        }
    }
}

impl InterestRateModelLike for JumpModel {
    fn check_model(&self) -> bool {
        if self.kink.is_zero() || self.kink == Ratio::one() || self.base_rate > Self::MAX_BASE_RATE
        {
            return false;
        }
        let kink_rate = self.get_borrow_rate(self.kink);
        let full_rate = self.get_borrow_rate(Ratio::one());
        matches!(
            (kink_rate, full_rate),
            (Some(kink_rate), Some(full_rate))
                if kink_rate <= Self::MAX_KINK_RATE && full_rate <= Self::MAX_FULL_RATE
        )
    }

    fn get_borrow_rate(&self, utilization: Ratio) -> Option<Rate> {
        let normal_util = utilization.min(self.kink);
        let excess_util = utilization.saturating_sub(self.kink);
        let normal_rate = self.multiplier.checked_mul(&normal_util.into())?;
        let jump_rate = self.jump_multiplier.checked_mul(&excess_util.into())?;

        self.base_rate
            .checked_add(&normal_rate)?
            .checked_add(&jump_rate)
    }
}

/// The linear interest rate model, `base_rate + utilization * multiplier`
#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, Default, TypeInfo)]
pub struct LinearModel {
    /// The base interest rate when utilization rate is 0
    pub base_rate: Rate,
    /// The slope of the rate against utilization
    pub multiplier: Rate,
}

impl LinearModel {
    pub const MAX_BASE_RATE: Rate = Rate::from_inner(100_000_000_000_000_000); // 10%
    pub const MAX_FULL_RATE: Rate = Rate::from_inner(500_000_000_000_000_000); // 50%

    pub fn new_model(base_rate: Rate, multiplier: Rate) -> LinearModel {
        Self {
            base_rate,
            multiplier,
        }
    }
}

impl InterestRateModelLike for LinearModel {
    fn check_model(&self) -> bool {
        if self.base_rate > Self::MAX_BASE_RATE {
            return false;
        }
        match self.base_rate.checked_add(&self.multiplier) {
            Some(full_rate) => full_rate <= Self::MAX_FULL_RATE,
            None => false,
        }
    }

    fn get_borrow_rate(&self, utilization: Ratio) -> Option<Rate> {
        self.multiplier
            .saturating_mul(utilization.into())
            .checked_add(&self.base_rate)
    }
}
