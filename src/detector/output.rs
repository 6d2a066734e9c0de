//! Terminal output rendering for change reports.
//!
//! Provides human-readable summaries of a detection cycle
//! with visual cues for additions, removals and changes.

use super::schema::{ChangeReport, MatchChange};
use crate::model::MatchRecord;
use colored::*;

/// Number of matches listed per section before truncating
const MAX_LISTED: usize = 10;

/// Render a human-readable summary of a change report for the terminal
pub fn render_terminal_report(report: &ChangeReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_records("New matches", "➕", &report.new_match_details));
    out.push_str(&render_records("Removed matches", "➖", &report.removed_match_details));
    out.push_str(&render_changes(&report.changed_match_details));
    out.push_str(&render_status(report));

    out
}

fn render_header(report: &ChangeReport) -> String {
    let mut out = String::new();
    out.push_str("\n📋 ");
    out.push_str(&"Match List Change Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("New:     {}\n", report.new_matches));
    out.push_str(&format!("Removed: {}\n", report.removed_matches));
    out.push_str(&format!("Changed: {}\n", report.changed_matches));
    if let Some(message) = &report.message {
        out.push_str(&format!("Note:    {}\n", message));
    }
    out.push_str("---------------------------------------------------\n");
    out
}

fn render_records(title: &str, symbol: &str, records: &[MatchRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        return out;
    }

    out.push_str(&format!("\n{}:\n", title));
    for record in records.iter().take(MAX_LISTED) {
        out.push_str(&format!(
            "  {} [{}] {} {} {}\n",
            symbol,
            record.id,
            record.date,
            record.kickoff_time,
            record.fixture_label()
        ));
    }
    out.push_str(&render_truncation(records.len()));
    out
}

fn render_changes(changes: &[MatchChange]) -> String {
    let mut out = String::new();
    if changes.is_empty() {
        return out;
    }

    out.push_str("\nChanged matches:\n");
    for change in changes.iter().take(MAX_LISTED) {
        out.push_str(&format!(
            "  ✏️  [{}] {} - {}\n",
            change.match_id, change.current.home_team.name, change.current.away_team.name
        ));
        for field in &change.field_changes {
            out.push_str(&format!(
                "      {}.{}: {} -> {}\n",
                field.category, field.field, field.previous, field.current
            ));
        }
    }
    out.push_str(&render_truncation(changes.len()));
    out
}

fn render_truncation(total: usize) -> String {
    if total > MAX_LISTED {
        format!("  ... and {} more\n", total - MAX_LISTED)
    } else {
        String::new()
    }
}

fn render_status(report: &ChangeReport) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");
    let status_msg = if report.is_cold_start() {
        "🆕 STATUS: INITIAL FETCH".cyan().bold()
    } else if report.has_changes() {
        "⚠️  STATUS: CHANGES DETECTED".yellow().bold()
    } else {
        "✅ STATUS: NO CHANGES".green().bold()
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}
