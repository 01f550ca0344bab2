//! Vesting unlock math
//! Maps vesting terms and an elapsed time (months since TGE) to the fraction
//! of an allocation that is unlocked.
//!
//! Vesting Types:
//! 1. Linear: 0% through the cliff, then a linear ramp reaching 100% at the
//!    end of the vesting duration
//! 2. Cliff: 0% before the cliff, 100% from the cliff onwards
//!
//! Both curves are non-decreasing in time and bounded to [0, 1].

use super::{share_of_supply, TokenAmount, VestingKind, VestingTerms};

/// Fraction of an allocation unlocked `elapsed_months` after TGE
///
/// Negative and NaN elapsed times are treated as "before TGE" and unlock
/// nothing.
pub fn unlocked_fraction(terms: &VestingTerms, elapsed_months: f64) -> f64 {
    let cliff = f64::from(terms.cliff_months);

    // `!(a >= b)` also catches NaN
    if !(elapsed_months >= cliff) {
        return 0.0;
    }

    match terms.kind {
        VestingKind::Cliff => 1.0,
        VestingKind::Linear => {
            let vesting_period = linear_period(terms);
            ((elapsed_months - cliff) / vesting_period).min(1.0)
        }
    }
}

/// Months after the cliff over which a linear schedule ramps up.
/// Never below one month, so `duration == cliff` unlocks right after the cliff.
fn linear_period(terms: &VestingTerms) -> f64 {
    f64::from(terms.duration_months.saturating_sub(terms.cliff_months).max(1))
}

impl VestingTerms {
    /// See [`unlocked_fraction`]
    pub fn unlocked_fraction(&self, elapsed_months: f64) -> f64 {
        unlocked_fraction(self, elapsed_months)
    }

    /// Tokens of `allocation_amount` unlocked at `elapsed_months`
    pub fn unlocked_amount(&self, allocation_amount: TokenAmount, elapsed_months: f64) -> TokenAmount {
        // allocation_amount is already absolute, so scale by 100%
        share_of_supply(allocation_amount, 100.0, self.unlocked_fraction(elapsed_months))
    }

    /// First month at which the allocation is fully unlocked
    pub fn completion_month(&self) -> u32 {
        match self.kind {
            VestingKind::Cliff => self.cliff_months,
            VestingKind::Linear => self
                .cliff_months
                .saturating_add(self.duration_months.saturating_sub(self.cliff_months).max(1)),
        }
    }
}
