use anyhow::Context;
use clap::Parser;
use scooper_core::{
    analyze_with_options, Analysis, AnalysisOptions, CardGroup, EffectivenessEntry,
    FrequencyEntry, ParseWarning,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SCOOPEES: &str = "1 (2), 2 (1), 3-5 (2)";
const DEFAULT_SCOOPERS: &str = "5-7 (2), 8 (3)";

/// Analyze Scoopee pair sums against Scooper target values.
#[derive(Debug, Parser)]
#[command(name = "scooper", version)]
struct Args {
    /// Scoopee card spec, e.g. "1 (2), 2-4 (3)".
    #[arg(long, default_value = DEFAULT_SCOOPEES)]
    scoopees: String,
    /// Scooper card spec, e.g. "5 (2), 6-8".
    #[arg(long, default_value = DEFAULT_SCOOPERS)]
    scoopers: String,
    /// Read both specs from a JSON preset file instead.
    #[arg(long)]
    preset: Option<PathBuf>,
    /// How many entries each insight list keeps.
    #[arg(long, default_value_t = 3)]
    top: usize,
    /// Emit the full analysis as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct Preset {
    scoopees: String,
    scoopers: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (scoopees, scoopers) = match &args.preset {
        Some(path) => {
            let preset = load_preset(path)?;
            (preset.scoopees, preset.scoopers)
        }
        None => (args.scoopees.clone(), args.scoopers.clone()),
    };
    let options = AnalysisOptions {
        insight_limit: args.top,
    };
    let analysis = analyze_with_options(&scoopees, &scoopers, &options);
    report_warnings("scoopee", &analysis.scoopee_warnings);
    report_warnings("scooper", &analysis.scooper_warnings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }
    print_report(&scoopees, &scoopers, &analysis);
    Ok(())
}

fn load_preset(path: &Path) -> anyhow::Result<Preset> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let preset = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(preset)
}

fn report_warnings(label: &str, warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("warning: {label} spec: {warning}");
    }
}

fn print_report(scoopee_spec: &str, scooper_spec: &str, analysis: &Analysis) {
    println!("Scoopee cards [{scoopee_spec}]");
    println!("  {}", format_groups(analysis.scoopees.groups()));
    println!("Scooper cards [{scooper_spec}]");
    println!("  {}", format_groups(analysis.scoopers.groups()));
    println!();
    println!("Sum distribution ({} pairs):", analysis.total_combinations());
    for entry in &analysis.sum_frequency {
        let marker = if entry.is_valid_scooper {
            "  <- scooper"
        } else {
            ""
        };
        println!(
            "  {:>4} | {} {}{}",
            entry.value,
            "#".repeat(entry.frequency as usize),
            entry.frequency,
            marker
        );
    }
    println!();
    println!("Scooper effectiveness:");
    for entry in &analysis.scooper_effectiveness {
        println!(
            "  {:>4} (x{})  {} combinations, {:.1}% of pairs",
            entry.value,
            entry.count,
            entry.combinations,
            entry.probability * 100.0
        );
    }
    println!();
    println!("Strategic insights:");
    println!(
        "  Most common sums: {}",
        format_top_sums(&analysis.insights.top_sums)
    );
    println!(
        "  Most versatile Scoopers: {}",
        format_top_scoopers(&analysis.insights.top_scoopers)
    );
    println!(
        "  Total possible combinations: {}",
        analysis.insights.total_combinations
    );
}

fn format_groups(groups: &[CardGroup]) -> String {
    if groups.is_empty() {
        return "(none)".to_string();
    }
    groups
        .iter()
        .map(|group| {
            if group.count > 1 {
                format!("{} (x{})", group.value, group.count)
            } else {
                group.value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_top_sums(entries: &[FrequencyEntry]) -> String {
    if entries.is_empty() {
        return "(none)".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{} ({} combinations)", entry.value, entry.frequency))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_top_scoopers(entries: &[EffectivenessEntry]) -> String {
    if entries.is_empty() {
        return "(none)".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} ({} combinations, x{})",
                entry.value, entry.combinations, entry.count
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scooper_core::analyze;

    #[test]
    fn group_echo_matches_dashboard_format() {
        let analysis = analyze("1 (2), 2", "");
        assert_eq!(format_groups(analysis.scoopees.groups()), "1 (x2), 2");
        assert_eq!(format_groups(analysis.scoopers.groups()), "(none)");
    }

    #[test]
    fn insight_lines_list_value_and_combinations() {
        let analysis = analyze("1 (2), 2 (1), 3-5 (2)", "5-7 (2), 8 (3)");
        let sums = format_top_sums(&analysis.insights.top_sums);
        assert_eq!(
            sums,
            "6 (7 combinations), 5 (6 combinations), 7 (6 combinations)"
        );
        let scoopers = format_top_scoopers(&analysis.insights.top_scoopers);
        assert_eq!(
            scoopers,
            "6 (7 combinations, x2), 5 (6 combinations, x2), 7 (6 combinations, x2)"
        );
    }
}
