// tests/unit/test_export.rs
// ============================================================================
// EXPORT UNIT TESTS
// ============================================================================

use unlockfi::export::{allocation_report, Questionnaire, QUESTIONS};
use unlockfi::{MarketCondition, TokenomicsConfig};

#[test]
fn test_report_rows_follow_allocations() {
    let mut config = TokenomicsConfig::default();
    config.market_condition = MarketCondition::Bullish;
    let sheet = allocation_report(&config);

    // header + 7 allocations + blank + 3 detail rows
    assert_eq!(sheet.rows.len(), 12);
    assert_eq!(sheet.rows[1], vec!["Team", "15", "12", "36", "linear", "150000000"]);
    assert_eq!(sheet.rows[4][4], "cliff");
    assert_eq!(sheet.rows[11], vec!["Market Condition", "bullish"]);
}

#[test]
fn test_report_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    allocation_report(&TokenomicsConfig::default()).write_csv(&path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.starts_with("Category,Percentage,"));
    assert!(csv.contains("\nTotal Supply,1000000000\n"));
}

#[test]
fn test_questionnaire_complete_export() {
    let mut q = Questionnaire::new();
    for question in &QUESTIONS {
        q.answer(question.id, question.options[0]).unwrap();
    }
    assert!(q.is_complete());

    let csv = q.to_csv();
    assert!(!csv.contains("Not answered"));
    assert!(csv.contains("\"Do you need legal & compliance support?\",\"Yes\""));
    assert!(csv.contains("\"How much capital do you need to raise?\",\"<$100K\""));
}
