//! Text rendering of the match list.
//!
//! Pure formatting over controller state: nothing here mutates the flow or
//! talks to the network.

use crate::models::{MatchSummary, ScholarshipMatch, Session};
use chrono::NaiveDate;

/// Days from `today` until the deadline; None once the deadline has passed
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> Option<i64> {
    let days = (deadline - today).num_days();
    if days > 0 {
        Some(days)
    } else {
        None
    }
}

/// Format a dollar amount with thousands separators ("$15,000")
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Lines for one scholarship card
pub fn card_lines(scholarship: &ScholarshipMatch, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "[{}] {}  {}",
        scholarship.id,
        scholarship.name,
        format_amount(scholarship.amount)
    ));
    lines.push(format!("    AI match score: {}%", scholarship.confidence));

    if !scholarship.description.is_empty() {
        lines.push(format!("    {}", scholarship.description));
    }

    let deadline = scholarship.deadline.format("%B %-d, %Y");
    match days_remaining(scholarship.deadline, today) {
        Some(days) => lines.push(format!("    Apply by {} ({} days left)", deadline, days)),
        None => lines.push(format!("    Apply by {}", deadline)),
    }

    lines.push(format!("    Apply at: {}", scholarship.apply_url));

    lines
}

/// Render the full results view: welcome banner, summary stats, one card
/// per match
pub fn results_lines(
    session: Option<&Session>,
    matches: &[ScholarshipMatch],
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(session) = session {
        if !session.display_name.is_empty() {
            lines.push(format!("Welcome, {}!", session.display_name));
        }
    }

    let summary = MatchSummary::of(matches);
    lines.push(format!(
        "Found {} scholarships worth {} total",
        summary.count,
        format_amount(summary.total_value)
    ));

    if matches.is_empty() {
        lines.push("No scholarships matched your profile yet. Try updating your profile.".to_string());
        return lines;
    }

    for scholarship in matches {
        lines.push(String::new());
        lines.extend(card_lines(scholarship, today));
    }

    lines.push(String::new());
    lines.push("Rate a match with: feedback <id> up|down".to_string());

    lines
}
