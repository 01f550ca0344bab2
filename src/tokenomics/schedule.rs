//! Unlock schedule aggregation
//! Turns a config snapshot into the data the charts consume:
//! 1. An unlock time series (per-category and total unlocked tokens)
//! 2. A percentage breakdown rounded for display
//!
//! Both outputs are detached snapshots; they hold no reference to the config
//! they were built from.

use super::{share_of_supply, vesting::unlocked_fraction, TokenAmount, TokenomicsConfig, VestingTerms};
use crate::params::{DEFAULT_SAMPLE_STEP_MONTHS, MAX_SERIES_POINTS, MIN_HORIZON_MONTHS};
use crate::{Result, TokenomicsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// OUTPUT TYPES
// ============================================================================

/// Unlocked amount for one allocation row at one sample point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUnlock {
    pub category: String,
    pub amount: TokenAmount,
}

/// One sample of the unlock curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockPoint {
    /// Months since TGE
    #[serde(rename = "t")]
    pub month: f64,

    /// Index-aligned with the config's allocations (labels may repeat)
    pub per_category: Vec<CategoryUnlock>,

    /// Sum of `per_category` amounts
    pub total: TokenAmount,
}

/// Unlock curve ordered by increasing month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockSeries {
    pub total_supply: TokenAmount,
    pub horizon_months: u32,
    pub points: Vec<UnlockPoint>,
}

impl UnlockSeries {
    /// Tokens circulating at TGE (t = 0)
    pub fn tge_unlocked(&self) -> TokenAmount {
        self.points.first().map(|p| p.total).unwrap_or(0)
    }

    /// Share of total supply (0-100) circulating at TGE
    pub fn unlocked_share_at_tge(&self) -> f64 {
        if self.total_supply == 0 {
            return 0.0;
        }
        self.tge_unlocked() as f64 / self.total_supply as f64 * 100.0
    }

    /// First sample at or after `month`
    pub fn point_at(&self, month: f64) -> Option<&UnlockPoint> {
        self.points.iter().find(|p| p.month >= month)
    }
}

/// One slice of the distribution view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub category: String,

    /// Rounded to a whole number for display only
    pub percentage: u32,

    pub vesting: VestingTerms,
}

// ============================================================================
// AGGREGATOR
// ============================================================================

/// Series builder with a configured horizon and sampling step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnlockScheduleAggregator {
    /// `None` derives the horizon from the config
    pub horizon_months: Option<u32>,
    pub sample_step_months: f64,
}

impl Default for UnlockScheduleAggregator {
    fn default() -> Self {
        Self {
            horizon_months: None,
            sample_step_months: DEFAULT_SAMPLE_STEP_MONTHS,
        }
    }
}

impl UnlockScheduleAggregator {
    pub fn new(horizon_months: Option<u32>, sample_step_months: f64) -> Self {
        Self {
            horizon_months,
            sample_step_months,
        }
    }

    pub fn compute(&self, config: &TokenomicsConfig) -> Result<UnlockSeries> {
        compute_series(config, self.horizon_months, self.sample_step_months)
    }
}

/// Horizon that shows every allocation's unlock curve to completion, never
/// shorter than `MIN_HORIZON_MONTHS`
pub fn default_horizon(config: &TokenomicsConfig) -> u32 {
    config
        .allocations
        .iter()
        .map(|a| a.vesting.completion_month())
        .max()
        .unwrap_or(0)
        .max(MIN_HORIZON_MONTHS)
}

/// Sample the unlock curve at `0, step, 2*step, ...` up to and including the
/// horizon
pub fn compute_series(
    config: &TokenomicsConfig,
    horizon_months: Option<u32>,
    sample_step: f64,
) -> Result<UnlockSeries> {
    if !sample_step.is_finite() || sample_step <= 0.0 {
        return Err(TokenomicsError::Schedule(format!(
            "sample step must be a positive number of months, got {}",
            sample_step
        )));
    }

    let horizon_months = horizon_months.unwrap_or_else(|| default_horizon(config));
    let months = sample_months(f64::from(horizon_months), sample_step)?;

    let points = months
        .into_iter()
        .map(|month| unlock_point(config, month))
        .collect::<Vec<_>>();

    debug!(
        horizon_months,
        sample_step,
        points = points.len(),
        "computed unlock series"
    );

    Ok(UnlockSeries {
        total_supply: config.total_supply,
        horizon_months,
        points,
    })
}

/// Per-allocation percentages rounded independently for display.
/// The rounded values are not forced to sum to 100.
pub fn compute_distribution(config: &TokenomicsConfig) -> Vec<DistributionSlice> {
    config
        .allocations
        .iter()
        .map(|a| DistributionSlice {
            category: a.category.clone(),
            percentage: a.percentage.round().max(0.0) as u32,
            vesting: a.vesting,
        })
        .collect()
}

fn sample_months(horizon: f64, step: f64) -> Result<Vec<f64>> {
    // compare in f64 first; tiny steps overflow any integer count
    let steps = (horizon / step).ceil();
    if !(steps < MAX_SERIES_POINTS as f64) {
        return Err(TokenomicsError::Schedule(format!(
            "{} sample points requested, limit is {}",
            steps + 1.0,
            MAX_SERIES_POINTS
        )));
    }
    let expected = steps as usize + 1;

    let mut months = Vec::with_capacity(expected);
    let mut k = 0u32;
    loop {
        // multiply rather than accumulate to avoid drift
        let month = f64::from(k) * step;
        if month >= horizon - 1e-9 {
            break;
        }
        months.push(month);
        k += 1;
    }
    months.push(horizon);
    Ok(months)
}

fn unlock_point(config: &TokenomicsConfig, month: f64) -> UnlockPoint {
    let per_category: Vec<CategoryUnlock> = config
        .allocations
        .iter()
        .map(|a| CategoryUnlock {
            category: a.category.clone(),
            amount: share_of_supply(
                config.total_supply,
                a.percentage,
                unlocked_fraction(&a.vesting, month),
            ),
        })
        .collect();

    let total = per_category.iter().map(|c| c.amount).sum();

    UnlockPoint {
        month,
        per_category,
        total,
    }
}
