//! Terminal rendering for search results

use crate::search::ModelRecord;
use crate::thermal::{ThermalCost, ThermalScore};
use colored::Colorize;

/// Marker shown next to a thermal tier
pub fn thermal_marker(cost: Option<ThermalCost>) -> &'static str {
    match cost {
        Some(ThermalCost::Low) => "🟢",
        Some(ThermalCost::Medium) => "🟡",
        Some(ThermalCost::High) => "🔴",
        None => "⚪",
    }
}

/// Thermal column text, e.g. `🟢 Low`
pub fn thermal_label(cost: Option<ThermalCost>) -> String {
    let name = cost.map(ThermalCost::as_str).unwrap_or("Unknown");
    format!("{} {}", thermal_marker(cost), name)
}

/// Format a count with thousands separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const HEADERS: [&str; 5] = ["Model ID", "Thermal", "Downloads", "Likes", "Type"];

/// Render results as a table
pub fn render_table(records: &[ModelRecord]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.model_id.clone(),
                thermal_label(r.thermal_cost),
                format_count(r.downloads),
                format_count(r.likes),
                r.pipeline_tag.clone().unwrap_or_else(|| "n/a".to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("┼");

    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("Found {} models", records.len()).bold()));

    let header = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!(" {:<w$} ", h, w = *w).bold().magenta().to_string())
        .collect::<Vec<_>>()
        .join("│");
    out.push_str(&header);
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = match col {
                    // numbers right-aligned
                    2 | 3 => format!(" {:>w$} ", cell, w = *w),
                    _ => format!(" {:<w$} ", cell, w = *w),
                };
                match col {
                    0 => padded.cyan().to_string(),
                    4 => padded.dimmed().to_string(),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("│");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Render one model's details
pub fn render_details(record: &ModelRecord, page_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", record.model_id.bold().cyan()));
    out.push_str(&format!("  Thermal:   {}\n", thermal_label(record.thermal_cost)));
    out.push_str(&format!("  Downloads: {}\n", format_count(record.downloads)));
    out.push_str(&format!("  Likes:     {}\n", format_count(record.likes)));
    out.push_str(&format!(
        "  Type:      {}\n",
        record.pipeline_tag.as_deref().unwrap_or("n/a")
    ));
    out.push_str(&format!(
        "  Library:   {}\n",
        record.library_name.as_deref().unwrap_or("n/a")
    ));
    if !record.tags.is_empty() {
        out.push_str(&format!("  Tags:      {}\n", record.tags.join(", ")));
    }
    out.push_str(&format!("  Page:      {}\n", page_url));
    out
}

/// Render the stage-by-stage score breakdown
pub fn render_explanation(score: &ThermalScore) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  size keyword:    {:<10} -> {}\n",
        score.size_keyword.unwrap_or("none"),
        score.keyword_score
    ));
    out.push_str(&format!(
        "  parameter count: {:<10} -> {}\n",
        score.parameter_rule.unwrap_or("none"),
        score.parameter_score
    ));
    out.push_str(&format!(
        "  tag adjustment:  {:<10} -> {}\n",
        score.tag_rule.unwrap_or("none"),
        score.score
    ));
    out.push_str(&format!("  tier:            {}\n", thermal_label(Some(score.cost))));
    out
}
