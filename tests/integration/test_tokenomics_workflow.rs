// tests/integration/test_tokenomics_workflow.rs
// ============================================================================
// TOKENOMICS WORKFLOW INTEGRATION TESTS
// ============================================================================
// Edit -> aggregate -> save -> load -> export, the way the editor drives it.
// ============================================================================

use unlockfi::export::allocation_report;
use unlockfi::{
    compute_distribution, compute_series, load_snapshot, save_snapshot, Allocation, AppConfig,
    FileStore, MemoryStore, Mutation, Rejection, TokenomicsConfig, TokenomicsError, VestingKind,
    VestingTerms,
};

fn scenario() -> TokenomicsConfig {
    TokenomicsConfig::new(
        1_000_000_000,
        vec![
            Allocation::new("Team", 20.0, VestingTerms::linear(12, 36)),
            Allocation::new("Public Sale", 30.0, VestingTerms::cliff(0)),
            Allocation::new("Treasury", 50.0, VestingTerms::linear(6, 36)),
        ],
    )
}

#[test]
fn test_scenario_unlock_schedule() {
    let series = compute_series(&scenario(), None, 1.0).unwrap();
    assert_eq!(series.horizon_months, 36);

    let amounts = |month: f64| -> Vec<u128> {
        series
            .point_at(month)
            .unwrap()
            .per_category
            .iter()
            .map(|c| c.amount)
            .collect()
    };

    // TGE: only the public sale
    assert_eq!(amounts(0.0), vec![0, 300_000_000, 0]);
    assert_eq!(series.tge_unlocked(), 300_000_000);

    // Treasury cliff boundary
    assert_eq!(amounts(6.0), vec![0, 300_000_000, 0]);

    assert_eq!(amounts(24.0), vec![100_000_000, 300_000_000, 300_000_000]);
    assert_eq!(series.point_at(24.0).unwrap().total, 700_000_000);

    assert_eq!(series.points.last().unwrap().total, 1_000_000_000);
}

#[test]
fn test_tge_total_matches_immediate_cliff_allocations() {
    for config in [scenario(), TokenomicsConfig::default()] {
        let series = compute_series(&config, None, 1.0).unwrap();
        let immediate: u128 = config
            .allocations
            .iter()
            .zip(config.token_amounts())
            .filter(|(a, _)| a.vesting.kind == VestingKind::Cliff && a.vesting.cliff_months == 0)
            .map(|(_, amount)| amount)
            .sum();

        assert_eq!(series.points[0].total, immediate);
    }
}

#[test]
fn test_save_gate_99_then_100() {
    let mut store = MemoryStore::new();
    let short = scenario().set_percentage(2, 49.0);

    let err = save_snapshot(&mut store, &short).unwrap_err();
    assert!(matches!(
        err,
        TokenomicsError::Rejected(Rejection::UnbalancedTotal { total }) if total == 99.0
    ));
    assert_eq!(load_snapshot(&store).unwrap(), None);

    let fixed = short.set_percentage(2, 50.0);
    save_snapshot(&mut store, &fixed).unwrap();
    assert_eq!(load_snapshot(&store).unwrap(), Some(fixed));
}

#[test]
fn test_rejected_removal_keeps_working_config() {
    let working = scenario()
        .apply(Mutation::AddAllocation(Some(Allocation::new(
            "Liquidity",
            10.0,
            VestingTerms::cliff(0),
        ))))
        .unwrap();
    let before = working.clone();

    // without Team the rest would total 110%
    let overfull = working.set_percentage(2, 70.0);
    assert_eq!(
        overfull.apply(Mutation::RemoveAllocation { index: 0 }),
        Err(Rejection::OverAllocation { remaining: 110.0 })
    );
    assert_eq!(working, before);

    let trimmed = working.remove_allocation(3).unwrap();
    assert_eq!(trimmed, scenario());
}

#[test]
fn test_editor_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let app = AppConfig {
        storage_dir: dir.path().join("store"),
        horizon_months: Some(48),
        ..AppConfig::default()
    };
    let mut store = FileStore::new(&app.storage_dir);

    let edited = [
        Mutation::SetTotalSupply("500,000,000".to_string()),
        Mutation::SetPercentage { index: 0, value: 15.0 },
        Mutation::AddAllocation(None),
        Mutation::SetPercentage { index: 3, value: 5.0 },
        Mutation::RenameCategory { index: 3, name: "Advisors".to_string() },
    ]
    .into_iter()
    .try_fold(scenario(), |config, m| config.apply(m))
    .unwrap();

    assert!(edited.is_balanced());
    assert!(edited.diagnostics().is_empty());

    let series = app.aggregator().compute(&edited).unwrap();
    assert_eq!(series.points.len(), 49);
    assert_eq!(series.tge_unlocked(), 150_000_000);

    let slices = compute_distribution(&edited);
    assert_eq!(
        slices.iter().map(|s| s.percentage).collect::<Vec<_>>(),
        vec![15, 30, 50, 5]
    );

    save_snapshot(&mut store, &edited).unwrap();
    let restored = load_snapshot(&store).unwrap().unwrap();
    assert_eq!(restored, edited);

    let report = allocation_report(&restored).to_csv();
    assert!(report.contains("Advisors,5,0,12,linear,25000000"));
    assert!(report.contains("Total Supply,500000000"));
}

#[test]
fn test_full_unlock_equals_supply_at_18_decimals() {
    let supply: u128 = 1_000_000_000_000_000_000_000_000_000;
    let single = TokenomicsConfig::new(supply, vec![Allocation::new("All", 100.0, VestingTerms::cliff(0))]);

    assert_eq!(single.token_amount(0), Some(supply));
    let series = compute_series(&single, None, 1.0).unwrap();
    assert_eq!(series.points.last().unwrap().total, supply);

    let seed = TokenomicsConfig::default().set_total_supply(&supply.to_string());
    let series = compute_series(&seed, None, 1.0).unwrap();
    assert_eq!(series.points.last().unwrap().total, supply);
    assert!(series.points.iter().all(|p| p.total <= supply));
}
