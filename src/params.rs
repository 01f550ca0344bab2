// src/params.rs
// ============================================================================
// UNLOCKFI GLOBAL PARAMETERS
// ============================================================================
// Constants shared by the ledger, the unlock aggregator and the collaborators.
// ============================================================================

/// Total supply of the seed configuration (token base units)
pub const DEFAULT_TOTAL_SUPPLY: u128 = 1_000_000_000;

/// Well-known key the configuration snapshot is stored under
pub const STORAGE_KEY: &str = "tokenomics-config";

/// Smallest horizon an unlock series is ever built over (months)
pub const MIN_HORIZON_MONTHS: u32 = 1;

/// Default sampling step for unlock series (months)
pub const DEFAULT_SAMPLE_STEP_MONTHS: f64 = 1.0;

/// Upper bound on the number of sampled points in one series
pub const MAX_SERIES_POINTS: usize = 100_000;

/// Percentage bounds for a single allocation
pub const MIN_PERCENTAGE: f64 = 0.0;
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Fixed-point resolution of percentages in token amount math
/// (1e-9 of a percent)
pub const PERCENTAGE_SCALE: u128 = 1_000_000_000;

/// Tolerance used when comparing a percentage sum against 100
pub const BALANCE_EPSILON: f64 = 1e-9;

// ============================================================================
// NEW ALLOCATION TEMPLATE
// ============================================================================

pub const NEW_ALLOCATION_CATEGORY: &str = "New Team";
pub const NEW_ALLOCATION_CLIFF_MONTHS: u32 = 0;
pub const NEW_ALLOCATION_DURATION_MONTHS: u32 = 12;

// ============================================================================
// EXPORT
// ============================================================================

/// Header fill colour of exported allocation sheets (RGB hex)
pub const REPORT_HEADER_FILL_RGB: &str = "4F46E5";

/// Placeholder written for unanswered questionnaire entries
pub const NOT_ANSWERED: &str = "Not answered";

pub const REPORT_FILE_NAME: &str = "tokenomics-report.csv";
pub const QUESTIONNAIRE_FILE_NAME: &str = "tokenomics-questionnaire.csv";
