//! Allocation ledger
//! Applies single-field edits to a `TokenomicsConfig` and reports how
//! consistent the allocation set is.
//!
//! Every operation reads the current config and returns a new one; the input
//! is never touched. Two validation tiers exist:
//! 1. Soft: percentage sum != 100, cliff past duration, empty or duplicated
//!    labels. Reported by `diagnostics()`, never blocks an edit.
//! 2. Hard: removing a row while the rest exceeds 100% (`OverAllocation`) and
//!    saving while the sum is not 100% (`UnbalancedTotal`). The operation is
//!    refused and the caller keeps its previous config.

use super::{Allocation, TokenAmount, TokenomicsConfig, VestingKind};
use crate::params::{BALANCE_EPSILON, MAX_PERCENTAGE, MIN_PERCENTAGE};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// One field of an allocation's vesting terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VestingField {
    CliffMonths(u32),
    DurationMonths(u32),
    Kind(VestingKind),
}

/// Closed set of edits the ledger accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Raw user input; non-digits are stripped
    SetTotalSupply(String),

    RenameCategory { index: usize, name: String },

    /// Value is clamped to [0, 100]
    SetPercentage { index: usize, value: f64 },

    SetVesting { index: usize, field: VestingField },

    /// Appends the given row, or the default "New Team" row
    AddAllocation(Option<Allocation>),

    /// Refused when the remaining rows exceed 100%
    RemoveAllocation { index: usize },
}

impl TokenomicsConfig {
    /// Apply one mutation, returning the new config or the reason it was refused
    pub fn apply(&self, mutation: Mutation) -> Result<TokenomicsConfig, Rejection> {
        debug!(?mutation, "applying allocation mutation");

        match mutation {
            Mutation::SetTotalSupply(raw) => Ok(self.set_total_supply(&raw)),
            Mutation::RenameCategory { index, name } => Ok(self.rename_category(index, name)),
            Mutation::SetPercentage { index, value } => Ok(self.set_percentage(index, value)),
            Mutation::SetVesting { index, field } => Ok(self.set_vesting_field(index, field)),
            Mutation::AddAllocation(template) => Ok(self.add_allocation(template)),
            Mutation::RemoveAllocation { index } => self.remove_allocation(index),
        }
    }

    /// Replace the total supply from raw text input
    pub fn set_total_supply(&self, raw: &str) -> Self {
        Self {
            total_supply: sanitize_supply(raw),
            ..self.clone()
        }
    }

    /// Replace the label at `index`; out-of-range indices leave the config as is
    pub fn rename_category(&self, index: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        self.with_allocation(index, |allocation| allocation.category = name)
    }

    /// Replace the percentage at `index` with `value` clamped to [0, 100].
    /// Other rows are not rebalanced.
    pub fn set_percentage(&self, index: usize, value: f64) -> Self {
        let value = clamp_percentage(value);
        self.with_allocation(index, |allocation| allocation.percentage = value)
    }

    /// Replace one vesting field at `index`. No cross-field checks here.
    pub fn set_vesting_field(&self, index: usize, field: VestingField) -> Self {
        self.with_allocation(index, |allocation| match field {
            VestingField::CliffMonths(months) => allocation.vesting.cliff_months = months,
            VestingField::DurationMonths(months) => allocation.vesting.duration_months = months,
            VestingField::Kind(kind) => allocation.vesting.kind = kind,
        })
    }

    /// Append a row at the end of the list
    pub fn add_allocation(&self, template: Option<Allocation>) -> Self {
        let mut next = self.clone();
        next.allocations.push(template.unwrap_or_default());
        next
    }

    /// Remove the row at `index`, preserving the order of the others
    pub fn remove_allocation(&self, index: usize) -> Result<Self, Rejection> {
        if index >= self.allocations.len() {
            return Ok(self.clone());
        }

        let remaining: f64 = self
            .allocations
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, a)| a.percentage)
            .sum();

        if remaining > MAX_PERCENTAGE + BALANCE_EPSILON {
            warn!(index, remaining, "removal refused: remaining allocations exceed 100%");
            return Err(Rejection::OverAllocation { remaining });
        }

        let mut next = self.clone();
        next.allocations.remove(index);
        Ok(next)
    }

    /// Whether the percentages sum to 100
    pub fn is_balanced(&self) -> bool {
        (self.total_percentage() - MAX_PERCENTAGE).abs() <= BALANCE_EPSILON
    }

    /// The hard gate applied at the save boundary
    pub fn ensure_balanced(&self) -> Result<(), Rejection> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(Rejection::UnbalancedTotal {
                total: self.total_percentage(),
            })
        }
    }

    /// Advisory findings about the current allocation set
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut findings = Vec::new();

        if !self.is_balanced() {
            findings.push(Diagnostic::PercentageSumMismatch {
                total: self.total_percentage(),
            });
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for (index, allocation) in self.allocations.iter().enumerate() {
            let vesting = &allocation.vesting;
            if !vesting.is_well_formed() {
                findings.push(Diagnostic::CliffExceedsDuration {
                    index,
                    cliff_months: vesting.cliff_months,
                    duration_months: vesting.duration_months,
                });
            }

            let label = allocation.category.trim();
            if label.is_empty() {
                findings.push(Diagnostic::EmptyCategory { index });
            } else if !seen.insert(label) && reported.insert(label) {
                findings.push(Diagnostic::DuplicateCategory {
                    category: label.to_string(),
                });
            }
        }

        findings
    }

    fn with_allocation(&self, index: usize, edit: impl FnOnce(&mut Allocation)) -> Self {
        let mut next = self.clone();
        match next.allocations.get_mut(index) {
            Some(allocation) => edit(allocation),
            None => debug!(index, len = self.allocations.len(), "edit ignored: index out of range"),
        }
        next
    }
}

/// Strip everything but ASCII digits and parse. Empty input yields 0;
/// values past `TokenAmount::MAX` saturate.
pub fn sanitize_supply(raw: &str) -> TokenAmount {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or_else(|_| {
        warn!(digits = digits.len(), "total supply too large, saturating");
        TokenAmount::MAX
    })
}

/// Clamp into [0, 100]; NaN becomes 0
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        MIN_PERCENTAGE
    } else {
        value.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
    }
}

/// Advisory finding; never blocks an edit
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    PercentageSumMismatch { total: f64 },
    CliffExceedsDuration { index: usize, cliff_months: u32, duration_months: u32 },
    EmptyCategory { index: usize },
    DuplicateCategory { category: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentageSumMismatch { total } => {
                write!(f, "allocations total {}%, expected 100%", total)
            }
            Self::CliffExceedsDuration { index, cliff_months, duration_months } => write!(
                f,
                "allocation #{} has a {}-month cliff past its {}-month vesting end",
                index, cliff_months, duration_months
            ),
            Self::EmptyCategory { index } => write!(f, "allocation #{} has no category name", index),
            Self::DuplicateCategory { category } => {
                write!(f, "category \"{}\" appears more than once", category)
            }
        }
    }
}

/// Hard validation failures
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("Total allocation cannot exceed 100% (remaining allocations total {remaining}%)")]
    OverAllocation { remaining: f64 },

    #[error("Total allocation must equal 100% (currently {total}%)")]
    UnbalancedTotal { total: f64 },
}
