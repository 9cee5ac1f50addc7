//! Console and JSON presentation of segment profiles.

use serde::Serialize;

use cadence_core::{ClassifierOptions, RankedGranularity, SegmentProfile};
use cadence_domain::{Distribution, DistributionKey, Granularity, WeekStart};

use super::style::ReportStyle;

/// Renders every segment the way the console report lays it out.
pub fn render_report(profiles: &[SegmentProfile], style: &ReportStyle, diagnostics: bool) -> String {
    let mut out = String::new();
    for (index, profile) in profiles.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_segment(&mut out, profile, style, diagnostics);
    }
    out
}

fn render_segment(out: &mut String, profile: &SegmentProfile, style: &ReportStyle, diagnostics: bool) {
    let title = format!("--- Results [{}] ---", profile.label).to_uppercase();
    out.push_str(&format!("{}\n\n", style.apply_section_style(&title)));

    if diagnostics {
        for entry in profile.classification.entries() {
            render_diagnostics(out, entry);
        }
    }

    let winner = profile.classification.classification();
    let summary = format!(
        "Classification: {} [{:.6}]\nAverage: {:.2}",
        winner.granularity, winner.score, winner.average_per_window()
    )
    .to_uppercase();
    for line in summary.lines() {
        out.push_str(&format!("{}\n", style.apply_result_style(line)));
    }
    if diagnostics {
        out.push_str(&format!(
            "Average over occupied windows: {:.2} ({} of {} windows)\n",
            winner.overall_average(),
            winner.occupied_windows(),
            winner.window_count()
        ));
    }
    out.push('\n');

    render_distribution(out, "Day", &profile.days);

    if winner.granularity == Granularity::Weekly {
        out.push('\n');
        render_distribution(out, "Weekday", &profile.weekdays);
    }
}

fn render_diagnostics(out: &mut String, entry: &RankedGranularity) {
    out.push_str(&format!("Class: {} [{:.6}]\n", entry.granularity, entry.score));
    if let Some(stats) = entry.statistics {
        out.push_str(&format!("Statistics: {:.2} ± {:.2}\n", stats.mean, stats.std_dev));
    }
    out.push('\n');
}

/// Ranked table of non-zero probabilities as percentages.
pub fn render_distribution<K: DistributionKey>(
    out: &mut String,
    title: &str,
    distribution: &Distribution<K>,
) {
    out.push_str(&format!("Probability: {title}\n---\n"));
    for entry in distribution.ranked() {
        out.push_str(&format!(
            "{:<9}: {:>11.2} %\n",
            entry.key.label(),
            entry.probability * 100.0
        ));
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    week_start: WeekStart,
    diagnostics: bool,
    segments: &'a [SegmentProfile],
}

/// Full machine-readable profile, including windows and raw distributions.
pub fn render_json(
    profiles: &[SegmentProfile],
    options: &ClassifierOptions,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        week_start: options.week_start,
        diagnostics: options.diagnostics,
        segments: profiles,
    })
}
