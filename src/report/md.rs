use crate::types::report::{LegislatorReport, ThematicBuckets};

pub fn to_markdown(report: &LegislatorReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Legislator Report: {}\n\n",
        report.legislator.as_deref().unwrap_or("unknown")
    ));
    if let Some(year) = report.year {
        output.push_str(&format!("Year: {year}\n\n"));
    }

    output.push_str("## Assiduity\n\n");
    output.push_str(&format!(
        "- score: {}\n- label: {:?}\n- {}\n\n",
        report.assiduity.score, report.assiduity.label, report.assiduity.description
    ));

    output.push_str("## Complex Projects\n\n");
    if report.complex_projects.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for bill in &report.complex_projects {
            output.push_str(&format!("- {}: {}\n", bill.label(), bill.summary));
        }
        output.push('\n');
    }

    output.push_str("## Themes\n\n");
    output.push_str(&themes_markdown(&report.themes));
    output.push('\n');

    output.push_str("## Rapporteur\n\n");
    output.push_str(&format!(
        "- score: {}\n- {}\n\n",
        report.relator.score,
        report.relator.summary()
    ));

    output.push_str("## Strategic Committees\n\n");
    output.push_str(&format!("- score: {}\n", report.strategic_committees.score));
    for role in &report.strategic_committees.roles {
        output.push_str(&format!("- {role}\n"));
    }
    output.push('\n');

    output.push_str("## Expenses\n\n");
    output.push_str(&format!("- total: {:.2}\n", report.expenses.total));
    for category in &report.expenses.categories {
        output.push_str(&format!("- {}: {:.2}\n", category.category, category.total));
    }
    output.push('\n');

    output.push_str("## Efficiency\n\n");
    output.push_str(&format!(
        "- productivity: {:.1}\n- index: {} ({:?})\n",
        report.productivity_score, report.efficiency.index_label, report.efficiency.tier
    ));

    output
}

pub fn themes_markdown(themes: &ThematicBuckets) -> String {
    let mut output = String::new();
    for (theme, bills) in themes.iter() {
        output.push_str(&format!("- {theme}: {}\n", bills.len()));
        for bill in bills {
            output.push_str(&format!("  - {}\n", bill.label()));
        }
    }
    output
}
