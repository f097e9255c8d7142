use vital_core::model::Tier;
use vital_core::score::Report;

pub fn print(report: &Report, show_all: bool, verbose: bool) {
    println!(
        "=== Wellness report: {} / {} / {} ===\n",
        report.region_label, report.age, report.gender
    );

    println!(
        "  Score: {} / 100    (group average would score {})\n",
        report.outcome.score, report.group_outcome.score
    );

    // Breakdown table. By default only rows outside the good tier.
    let rows: Vec<_> = if show_all {
        report.breakdown.iter().collect()
    } else {
        report
            .breakdown
            .iter()
            .filter(|r| r.tier != Tier::Good)
            .collect()
    };

    if !rows.is_empty() {
        let max_name = rows.iter().map(|r| r.label.len()).max().unwrap_or(10);

        println!("  Markers:");
        for row in &rows {
            println!(
                "    {:<width$}  {} {} (avg {})  -> {}",
                row.label,
                row.value,
                row.unit,
                row.average,
                row.tier,
                width = max_name
            );
        }
        println!();
    }

    // Deductions behind the headline score.
    if !report.outcome.deductions.is_empty() {
        println!("  Deductions:");
        for d in &report.outcome.deductions {
            println!("    {} -> {}  (-{})", d.label, d.band, d.penalty);
            if verbose {
                if let Some(ref desc) = d.description {
                    println!("      {}", desc);
                }
            }
        }
        println!();
    }

    if !report.recommendations.is_empty() {
        println!("  Recommendations:");
        for (i, rec) in report.recommendations.iter().enumerate() {
            let citation = match (verbose, &rec.citation) {
                (true, Some(c)) => format!("  [{}]", c),
                _ => String::new(),
            };
            println!(
                "    {}. {} (+{} points){}",
                i + 1,
                rec.advice(),
                rec.potential_gain,
                citation
            );
        }
        println!();
    }
}
