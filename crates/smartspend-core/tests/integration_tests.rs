//! Integration tests for smartspend-core
//!
//! These tests exercise the full resolve → load → aggregate → advise → report workflow.

use std::fs;

use smartspend_core::{
    advise, load_and_aggregate, Analysis, Category, CategoryTable, Error, InputResolver, Report,
};

/// Run every stage against a directory containing `expenses.csv`
fn run_pipeline(dir: &std::path::Path) -> Result<(Analysis, Report), Error> {
    let input = InputResolver::new(dir).resolve()?;
    let analysis = load_and_aggregate(&input, &CategoryTable::default())?;
    let advice = advise(analysis.highest_category, analysis.predicted_monthly);
    let report = Report::from_analysis(&analysis, advice);
    report.write(&dir.join("Expense_Report.txt"))?;
    Ok((analysis, report))
}

fn month_of_expenses() -> &'static str {
    r#"Date,Description,Amount,Payment Mode
2024-03-01,Swiggy dinner,450,UPI
2024-03-02,Uber to office,320,Card
2024-03-03,Electricity bill,1800,NetBanking
2024-03-04,Amazon order,2499,Card
2024-03-05,Netflix subscription,649,Card
2024-03-06,,150,Cash
2024-03-07,Pizza and movie,900,UPI
2024-03-08,"Flipkart, mall visit",1200,Card
2024-03-09,Petrol,2500,Card
2024-03-10,Friend's gift,500,Cash"#
}

#[test]
fn test_full_pipeline_workflow() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expenses.csv"), month_of_expenses()).unwrap();

    let (analysis, report) = run_pipeline(dir.path()).unwrap();

    assert_eq!(analysis.transactions.len(), 10);
    assert_eq!(analysis.total_expense, 10968.0);

    // Shopping: 2499 + 1200, Transport: 320 + 2500, Food: 450 + 900
    assert_eq!(analysis.total_for(Category::Shopping), Some(3699.0));
    assert_eq!(analysis.total_for(Category::Transport), Some(2820.0));
    assert_eq!(analysis.total_for(Category::Utilities), Some(1800.0));
    assert_eq!(analysis.total_for(Category::Food), Some(1350.0));
    assert_eq!(analysis.total_for(Category::Entertainment), Some(649.0));
    assert_eq!(analysis.total_for(Category::Other), Some(650.0));
    assert_eq!(analysis.highest_category, Category::Shopping);

    // 10968 / 10 * 30
    assert_eq!(analysis.predicted_monthly, 32904.0);
    assert_eq!(
        report.advice,
        vec![
            "Your shopping expenses are high. Try reducing impulse buys.".to_string(),
            "⚠ Warning: You may cross ₹10,000 this month!".to_string(),
        ]
    );

    let written = fs::read_to_string(dir.path().join("Expense_Report.txt")).unwrap();
    assert!(written.starts_with("******** SMART EXPENSE ANALYZER REPORT ********\n"));
    assert!(written.contains("Total Spent: ₹10968.00\n"));
    assert!(written.contains("Highest Spending Category: Shopping\n"));
    assert!(written.contains("Predicted Monthly Expense: ₹32904.00\n"));
    assert!(written.contains("- ⚠ Warning: You may cross ₹10,000 this month!\n"));
}

#[test]
fn test_breakdown_order_matches_totals() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expenses.csv"), month_of_expenses()).unwrap();

    let (analysis, report) = run_pipeline(dir.path()).unwrap();
    let rendered = report.render();

    let positions: Vec<usize> = analysis
        .category_totals
        .iter()
        .map(|t| rendered.find(&format!("{:15} :", t.category)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let amounts: Vec<f64> = analysis.category_totals.iter().map(|t| t.amount).collect();
    assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_spec_example_rows() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "Description,Amount\nZomato order,500\nUber ride,200\nUnknown shop,100\n",
    )
    .unwrap();

    let (analysis, report) = run_pipeline(dir.path()).unwrap();
    assert_eq!(analysis.total_expense, 800.0);
    assert_eq!(analysis.highest_category, Category::Food);
    assert_eq!(analysis.predicted_monthly, 8000.0);
    assert_eq!(report.advice[1], "✔ Spending is under control. Keep it up!");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expenses.csv"), month_of_expenses()).unwrap();
    let report_path = dir.path().join("Expense_Report.txt");

    run_pipeline(dir.path()).unwrap();
    let first = fs::read(&report_path).unwrap();
    run_pipeline(dir.path()).unwrap();
    let second = fs::read(&report_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_pipeline(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!dir.path().join("Expense_Report.txt").exists());
}

#[test]
fn test_missing_amount_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "Description,Price\nUber,10\n",
    )
    .unwrap();

    let err = run_pipeline(dir.path()).unwrap_err();
    assert_eq!(err.missing_columns(), vec!["Amount"]);
    assert!(err.to_string().contains("Found columns: Description, Price"));
    assert!(!dir.path().join("Expense_Report.txt").exists());
}

#[test]
fn test_headers_only_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expenses.csv"), "Description,Amount\n").unwrap();

    let err = run_pipeline(dir.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
    assert!(!dir.path().join("Expense_Report.txt").exists());
}

#[test]
fn test_failed_run_keeps_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("Expense_Report.txt");
    fs::write(dir.path().join("expenses.csv"), month_of_expenses()).unwrap();
    run_pipeline(dir.path()).unwrap();
    let before = fs::read(&report_path).unwrap();

    fs::write(dir.path().join("expenses.csv"), "Description,Amount\nUber,oops\n").unwrap();
    let err = run_pipeline(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Load { .. }));

    assert_eq!(fs::read(&report_path).unwrap(), before);
}

#[test]
fn test_analysis_serializes_categories_by_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "Description,Amount\nBus,10\n",
    )
    .unwrap();

    let (analysis, _) = run_pipeline(dir.path()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["highest_category"], "Transport");
    assert_eq!(json["category_totals"][0]["amount"], 10.0);
    assert_eq!(json["predicted_monthly"], 300.0);
}

#[cfg(unix)]
#[test]
fn test_rerun_keeps_report_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("Expense_Report.txt");
    fs::write(dir.path().join("expenses.csv"), month_of_expenses()).unwrap();
    fs::write(&report_path, "previous run").unwrap();
    fs::set_permissions(&report_path, fs::Permissions::from_mode(0o644)).unwrap();

    run_pipeline(dir.path()).unwrap();

    let mode = fs::metadata(&report_path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
