//! Plain-text rendering of evaluation reports.
//!
//! One row per metric, one column per model — the report record is shaped
//! for exactly this transposition.

use policyduel_core::EvaluationReport;

/// Metric labels, in display order.
const METRIC_LABELS: [&str; 7] = [
    "Response Time (s)",
    "JSON Valid",
    "Schema Completeness",
    "Policy Rule Quality",
    "Formatting Quality",
    "Bracket Integrity (%)",
    "Failure",
];

fn metric_values(report: &EvaluationReport) -> [String; 7] {
    [
        format!("{:.2}", report.response_time),
        report.json_valid.to_string(),
        report.schema_completeness.to_string(),
        report.policy_rule_quality.to_string(),
        report.formatting_quality.to_string(),
        format!("{:.2}", report.bracket_integrity_score),
        report.failure.to_string(),
    ]
}

/// Render a side-by-side comparison matrix.
pub fn comparison_table(reports: &[EvaluationReport]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(METRIC_LABELS.len() + 1);

    let mut header = vec!["Metric".to_string()];
    header.extend(reports.iter().map(|r| r.model.clone()));
    rows.push(header);

    let columns: Vec<[String; 7]> = reports.iter().map(metric_values).collect();
    for (i, label) in METRIC_LABELS.iter().enumerate() {
        let mut row = vec![label.to_string()];
        row.extend(columns.iter().map(|c| c[i].clone()));
        rows.push(row);
    }

    let width_count = rows[0].len();
    let mut widths = vec![0usize; width_count];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for (row_index, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');

        if row_index == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }
    out
}
