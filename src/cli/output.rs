//! Output formatting utilities

use crate::application::TagReport;
use crate::domain::Reconciliation;

/// Format the selected repositories with the requested teams that matched
/// each, right-aligned on the longest name.
pub fn format_selected_repos(repos: &[(String, Vec<String>)]) -> String {
    let mut output = String::from("found repo [teams]:\n");
    let width = repos.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, teams) in repos {
        output.push_str(&format!("  {name:>width$} {teams:?}\n"));
    }

    output
}

/// Format the repositories that already carry every requested tag.
pub fn format_fully_tagged(names: &[String]) -> String {
    if names.is_empty() {
        return String::new();
    }

    let mut output = String::from("already tagged repos:\n");
    for name in names {
        output.push_str(&format!("  {name}\n"));
    }

    output
}

/// Format the per-repository missing-tag listing.
pub fn format_missing(reconciliation: &Reconciliation) -> String {
    let mut output = String::from("missing repo [tags]:\n");
    let width = reconciliation
        .entries
        .iter()
        .map(|e| e.repo.full_name.len())
        .max()
        .unwrap_or(0);

    for entry in &reconciliation.entries {
        output.push_str(&format!(
            "  {:>width$} {:?}\n",
            entry.repo.full_name, entry.tags
        ));
    }

    output
}

/// Format the final summary of created tags and failures.
pub fn format_summary(report: &TagReport) -> String {
    let mut output = String::new();

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} tag(s) would be created.\n",
            report.created.len()
        ));
    } else {
        output.push_str(&format!("Created {} tag(s).\n", report.created.len()));
    }

    for created in &report.created {
        output.push_str(&format!(
            "  {} {} @ {}\n",
            created.repo, created.tag, created.sha
        ));
    }

    if !report.failures.is_empty() {
        output.push_str(&format!("Failed {} operation(s):\n", report.failures.len()));
        for failure in &report.failures {
            match &failure.tag {
                Some(tag) => {
                    output.push_str(&format!("  {} {}: {}\n", failure.repo, tag, failure.reason))
                }
                None => output.push_str(&format!("  {}: {}\n", failure.repo, failure.reason)),
            }
        }
    }

    output
}
