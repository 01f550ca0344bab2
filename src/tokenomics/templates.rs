//! Preset allocation templates
//! Selecting a template replaces the whole configuration.

use super::{Allocation, TokenomicsConfig, VestingTerms};
use crate::params::DEFAULT_TOTAL_SUPPLY;
use crate::TokenomicsError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// The seed split the editor opens with
    Standard,
    /// Larger community and ecosystem share, longer team lockup
    CommunityFirst,
    /// Private round heavy split with a small public sale
    VentureBacked,
}

impl Template {
    pub const ALL: [Template; 3] = [Self::Standard, Self::CommunityFirst, Self::VentureBacked];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::CommunityFirst => "community-first",
            Self::VentureBacked => "venture-backed",
        }
    }

    /// A complete, balanced configuration for this template
    pub fn config(&self) -> TokenomicsConfig {
        match self {
            Self::Standard => TokenomicsConfig::default(),
            Self::CommunityFirst => TokenomicsConfig::new(
                DEFAULT_TOTAL_SUPPLY,
                vec![
                    Allocation::new("Community", 35.0, VestingTerms::linear(0, 36)),
                    Allocation::new("Public Sale", 15.0, VestingTerms::cliff(0)),
                    Allocation::new("Team", 12.0, VestingTerms::linear(12, 48)),
                    Allocation::new("Ecosystem", 18.0, VestingTerms::linear(6, 36)),
                    Allocation::new("Treasury", 15.0, VestingTerms::linear(6, 48)),
                    Allocation::new("Advisors", 5.0, VestingTerms::linear(6, 24)),
                ],
            ),
            Self::VentureBacked => TokenomicsConfig::new(
                DEFAULT_TOTAL_SUPPLY,
                vec![
                    Allocation::new("Team", 18.0, VestingTerms::linear(12, 48)),
                    Allocation::new("Private Sale", 20.0, VestingTerms::linear(6, 24)),
                    Allocation::new("Advisors", 4.0, VestingTerms::linear(6, 24)),
                    Allocation::new("Public Sale", 8.0, VestingTerms::cliff(0)),
                    Allocation::new("Liquidity", 10.0, VestingTerms::cliff(0)),
                    Allocation::new("Ecosystem", 20.0, VestingTerms::linear(3, 36)),
                    Allocation::new("Treasury", 20.0, VestingTerms::linear(6, 48)),
                ],
            ),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = TokenomicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenomicsError::Config(format!("unknown template: {}", s)))
    }
}
