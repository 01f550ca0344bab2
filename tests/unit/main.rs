// tests/unit/main.rs
// ============================================================================
// UNIT TESTS - Individual module testing
// ============================================================================

mod test_export;
mod test_storage;
mod test_vesting;
