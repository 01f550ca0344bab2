//! src/lib.rs
//! # UnlockFi - Token Allocation & Unlock Schedule Engine
//!
//! This crate models a token's supply split across categories (Team,
//! Treasury, Public Sale, ...) where every category carries its own vesting
//! terms, and derives how the supply unlocks over time.
//!
//! ## Core Components:
//! - **AllocationLedger** (`tokenomics::ledger`): typed mutations over an
//!   immutable `TokenomicsConfig`, soft diagnostics and the hard save gate
//! - **VestingScheduler** (`tokenomics::vesting`): unlocked fraction for a
//!   set of vesting terms at an elapsed month
//! - **UnlockScheduleAggregator** (`tokenomics::schedule`): unlock time
//!   series and the percentage breakdown consumed by charts
//! - **Collaborators**: key-value persistence (`utils::storage`) and report
//!   export (`export`)

#![deny(unsafe_code)]

use thiserror::Error;

pub use anyhow::Result as AnyResult;

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod export;
pub mod params;
pub mod tokenomics;
pub mod utils;

// ============================================================================
// RE-EXPORTS - Public API surface
// ============================================================================

pub use config::AppConfig;
pub use tokenomics::{
    Allocation, MarketCondition, TokenAmount, TokenomicsConfig, VestingKind, VestingTerms,
    ledger::{Diagnostic, Mutation, Rejection, VestingField},
    schedule::{compute_distribution, compute_series, DistributionSlice, UnlockPoint, UnlockSeries},
    templates::Template,
    vesting::unlocked_fraction,
};
pub use utils::storage::{load_snapshot, save_snapshot, FileStore, KeyValueStore, MemoryStore};

// ============================================================================
// GLOBAL ERROR TYPE
// ============================================================================

/// Unified error type for the engine and its collaborators
#[derive(Error, Debug)]
pub enum TokenomicsError {
    /// A hard validation gate refused the operation
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Unlock series could not be built from the requested parameters
    #[error("Schedule error: {0}")]
    Schedule(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report generation failure
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TokenomicsError>;
