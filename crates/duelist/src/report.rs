//! Text reports for saved decisions

use crate::store::SavedDecision;

/// Render the duel-by-duel journey of one decision.
///
/// Defeats are listed in the order they happened. Revives mean a candidate
/// can only appear once here even if it fell twice, since the record keeps
/// the final graveyard.
pub fn journey_report(decision: &SavedDecision) -> String {
    let record = &decision.record;
    let mut report = String::new();
    report.push_str(&format!("=== Decision: {} ===\n\n", decision.title));
    if !decision.category.is_empty() {
        report.push_str(&format!("Category: {}\n", decision.category));
    }
    report.push_str(&format!(
        "Created: {}\n",
        record.created_at.format("%Y-%m-%d %H:%M")
    ));
    report.push_str(&format!("Options: {}\n", join(&record.original_options)));
    if !decision.tags.is_empty() {
        report.push_str(&format!("Tags: {}\n", decision.tags.join(", ")));
    }
    report.push('\n');

    report.push_str("Journey:\n");
    for (i, fallen) in record.defeats_chronological().enumerate() {
        report.push_str(&format!("  {:>2}. {} falls\n", i + 1, fallen));
    }
    report.push('\n');
    match &record.winner {
        Some(winner) => {
            report.push_str(&format!("Winner: {} ({})\n", winner, record.status));
        }
        None => report.push_str(&format!(
            "Still in the running: {} ({})\n",
            join(&record.active_pool),
            record.status
        )),
    }

    if let Some(reflection) = &decision.reflection {
        report.push_str(&format!("\nReflection: {}\n", reflection));
    }
    report
}

/// Render a table of saved decisions, newest first.
pub fn history_report(decisions: &[SavedDecision]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:<38} {:<24} {:<20} {:>7}\n",
        "Id", "Title", "Winner", "Options"
    ));
    report.push_str(&"-".repeat(92));
    report.push('\n');

    for decision in decisions {
        let pin = if decision.pinned { "*" } else { " " };
        report.push_str(&format!(
            "{}{:<37} {:<24} {:<20} {:>7}\n",
            pin,
            decision.id(),
            truncate(&decision.title, 24),
            truncate(
                decision
                    .record
                    .winner
                    .as_ref()
                    .map_or("(pending)", |w| w.as_str()),
                20
            ),
            decision.record.original_options.len()
        ));
    }

    report
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('~');
    short
}
