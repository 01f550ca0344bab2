// src/tokenomics/mod.rs
// ============================================================================
// TOKENOMICS DATA MODEL
// ============================================================================
// This module holds the allocation model the whole engine operates on:
// 1. Vesting terms (cliff, duration, linear or cliff unlock)
// 2. Allocations (category label, percentage of supply, vesting terms)
// 3. The tokenomics configuration (total supply, ordered allocations)
//
// A `TokenomicsConfig` is a value. Every edit produces a new config (see
// `ledger`), so snapshots handed to the schedule aggregator, persistence and
// export never change underneath them.
// ============================================================================

use crate::params::{
    DEFAULT_TOTAL_SUPPLY, NEW_ALLOCATION_CATEGORY, NEW_ALLOCATION_CLIFF_MONTHS,
    NEW_ALLOCATION_DURATION_MONTHS, PERCENTAGE_SCALE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use ledger::{Diagnostic, Mutation, Rejection, VestingField};
pub use schedule::{compute_distribution, compute_series, UnlockSeries};
pub use templates::Template;
pub use vesting::unlocked_fraction;

pub mod ledger;
pub mod schedule;
pub mod templates;
pub mod vesting;

// ============================================================================
// CORE TOKENOMICS TYPES
// ============================================================================

/// Token amount in base units
pub type TokenAmount = u128;

/// How an allocation unlocks once its cliff has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VestingKind {
    /// Nothing until the cliff, then a linear ramp reaching 100% at the end
    /// of the vesting duration
    Linear,

    /// Everything unlocks at once when the cliff is reached
    Cliff,
}

impl fmt::Display for VestingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Cliff => write!(f, "cliff"),
        }
    }
}

/// Vesting terms of one allocation, in months from TGE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingTerms {
    /// Months during which nothing is unlocked
    #[serde(rename = "cliff")]
    pub cliff_months: u32,

    /// Month at which a linear schedule reaches 100% (ignored for cliff unlocks)
    #[serde(rename = "duration")]
    pub duration_months: u32,

    /// Unlock shape
    #[serde(rename = "type")]
    pub kind: VestingKind,
}

impl VestingTerms {
    /// Linear vesting with a cliff
    pub fn linear(cliff_months: u32, duration_months: u32) -> Self {
        Self {
            cliff_months,
            duration_months,
            kind: VestingKind::Linear,
        }
    }

    /// Single unlock at `cliff_months`
    pub fn cliff(cliff_months: u32) -> Self {
        Self {
            cliff_months,
            duration_months: 0,
            kind: VestingKind::Cliff,
        }
    }

    /// A cliff past the end of vesting is meaningless for linear unlocks
    pub fn is_well_formed(&self) -> bool {
        self.kind == VestingKind::Cliff || self.cliff_months <= self.duration_months
    }
}

/// One category's share of the supply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Display label (duplicates are allowed)
    pub category: String,

    /// Share of total supply in [0, 100]
    pub percentage: f64,

    /// Vesting terms for this category
    pub vesting: VestingTerms,
}

impl Allocation {
    pub fn new(category: impl Into<String>, percentage: f64, vesting: VestingTerms) -> Self {
        Self {
            category: category.into(),
            percentage,
            vesting,
        }
    }
}

impl Default for Allocation {
    /// The row appended by `AddAllocation` when no template row is given
    fn default() -> Self {
        Self::new(
            NEW_ALLOCATION_CATEGORY,
            0.0,
            VestingTerms::linear(NEW_ALLOCATION_CLIFF_MONTHS, NEW_ALLOCATION_DURATION_MONTHS),
        )
    }
}

/// Advisory market tag; the unlock math never reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCondition {
    Bearish,
    Neutral,
    Bullish,
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearish => write!(f, "bearish"),
            Self::Neutral => write!(f, "neutral"),
            Self::Bullish => write!(f, "bullish"),
        }
    }
}

/// Complete tokenomics configuration
///
/// Serialized in the same flat camelCase shape the browser client stores, so
/// a snapshot written by either side reads back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenomicsConfig {
    /// Total supply in token base units
    pub total_supply: TokenAmount,

    /// Allocations in legend/display order
    pub allocations: Vec<Allocation>,

    /// Advisory market tag
    pub market_condition: MarketCondition,
}

impl Default for TokenomicsConfig {
    fn default() -> Self {
        Self {
            total_supply: DEFAULT_TOTAL_SUPPLY,
            allocations: vec![
                Allocation::new("Team", 15.0, VestingTerms::linear(12, 36)),
                Allocation::new("Advisors", 5.0, VestingTerms::linear(6, 24)),
                Allocation::new("Private Sale", 10.0, VestingTerms::linear(3, 12)),
                Allocation::new("Public Sale", 20.0, VestingTerms::cliff(0)),
                Allocation::new("Community", 20.0, VestingTerms::linear(0, 24)),
                Allocation::new("Ecosystem", 15.0, VestingTerms::linear(6, 36)),
                Allocation::new("Treasury", 15.0, VestingTerms::linear(6, 48)),
            ],
            market_condition: MarketCondition::Neutral,
        }
    }
}

impl TokenomicsConfig {
    pub fn new(total_supply: TokenAmount, allocations: Vec<Allocation>) -> Self {
        Self {
            total_supply,
            allocations,
            market_condition: MarketCondition::Neutral,
        }
    }

    /// Sum of all allocation percentages
    pub fn total_percentage(&self) -> f64 {
        self.allocations.iter().map(|a| a.percentage).sum()
    }

    /// Absolute token amount of the allocation at `index`, derived on read
    pub fn token_amount(&self, index: usize) -> Option<TokenAmount> {
        self.allocations
            .get(index)
            .map(|a| share_of_supply(self.total_supply, a.percentage, 1.0))
    }

    /// Token amounts for every allocation, in display order
    pub fn token_amounts(&self) -> Vec<TokenAmount> {
        self.allocations
            .iter()
            .map(|a| share_of_supply(self.total_supply, a.percentage, 1.0))
            .collect()
    }
}

/// `round(total_supply * percentage / 100 * fraction)`
///
/// Whole shares (`fraction >= 1`) are computed in integers, so a fully
/// unlocked 100% row is exactly `total_supply` at any magnitude. Partial
/// unlocks go through f64 and never exceed the whole share.
pub(crate) fn share_of_supply(total_supply: TokenAmount, percentage: f64, fraction: f64) -> TokenAmount {
    if !(fraction > 0.0) {
        return 0;
    }

    let whole = percentage_share(total_supply, percentage);
    if fraction >= 1.0 {
        return whole;
    }

    let partial = (total_supply as f64 * percentage / 100.0 * fraction).round();
    if partial.is_finite() && partial > 0.0 {
        (partial as TokenAmount).min(whole)
    } else {
        0
    }
}

/// `round(total_supply * percentage / 100)` in fixed point, half-up
fn percentage_share(total_supply: TokenAmount, percentage: f64) -> TokenAmount {
    if !(percentage > 0.0) {
        return 0;
    }

    // percentage in units of 1 / PERCENTAGE_SCALE percent
    let scaled = (percentage * PERCENTAGE_SCALE as f64).round() as u128;
    let denominator = 100 * PERCENTAGE_SCALE;

    // split so neither product can overflow for percentages up to 100
    let quotient = total_supply / denominator;
    let remainder = total_supply % denominator;
    let rounded_tail = remainder
        .saturating_mul(scaled)
        .saturating_add(denominator / 2)
        / denominator;
    quotient.saturating_mul(scaled).saturating_add(rounded_tail)
}
