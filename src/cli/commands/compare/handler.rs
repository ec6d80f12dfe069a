//! One-shot compare command

use std::fmt::Write as _;
use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use log::info;

use crate::api::{CompareClient, ComparisonResult};
use crate::config::Config;
use crate::render::{format_percent, group_digits, truncation_note, SimilarityTier};
use crate::workflow::{ComparisonWorkflow, SelectedFile, Slot};

use super::{CompareCommands, ReportStyle};

pub async fn handle_compare_command(args: CompareCommands) -> Result<()> {
    // File output gets the plain rendering
    if args.no_color || args.output.is_some() {
        colored::control::set_override(false);
    }

    let template = SelectedFile::from_path(&args.file1)?;
    let comparison = SelectedFile::from_path(&args.file2)?;

    // Validate before touching config so bad files fail without a
    // configured endpoint.
    let mut workflow = ComparisonWorkflow::new();
    workflow.select_file(Slot::Template, template);
    workflow.select_file(Slot::Comparison, comparison);
    let (template, comparison) = match workflow.submit() {
        Ok(files) => files,
        Err(err) => anyhow::bail!("{}", err),
    };

    let config = Config::load()?;
    let (endpoint, source) = config.resolve_endpoint(args.endpoint.clone())?;
    info!("Comparing against {} (from {})", endpoint, source.label());

    let client = CompareClient::new(&endpoint, Duration::from_secs(config.timeout_secs))?;

    eprintln!(
        "Comparing {} against {}...",
        template.name.cyan(),
        comparison.name.cyan()
    );

    let result = match client.compare(&template, &comparison).await {
        Ok(result) => result,
        Err(err) => anyhow::bail!("{}", err.user_message()),
    };

    let report = if args.json {
        let mut json =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        json.push('\n');
        json
    } else {
        render_report(&result, args.style)
    };

    print!("{}", report);

    if let Some(path) = &args.output {
        fs::write(path, &report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn tier_colored(text: String, tier: SimilarityTier) -> ColoredString {
    match tier {
        SimilarityTier::High => text.green(),
        SimilarityTier::Medium => text.yellow(),
        SimilarityTier::Low => text.red(),
    }
}

fn render_report(result: &ComparisonResult, style: ReportStyle) -> String {
    let tier = SimilarityTier::from_score(result.similarity_score);
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Comparison Results".bold());
    let _ = writeln!(
        out,
        "Similarity: {} ({})",
        tier_colored(format_percent(result.similarity_score), tier).bold(),
        tier.label()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.summary);

    if style == ReportStyle::Minimal {
        return out;
    }

    let _ = writeln!(out);
    for (label, doc) in [
        ("Template:  ", &result.document1),
        ("Comparison:", &result.document2),
    ] {
        let _ = writeln!(
            out,
            "{} {}  {} page(s), {} table(s), {} characters",
            label,
            doc.filename.cyan(),
            doc.page_count,
            doc.table_count,
            group_digits(doc.content_length)
        );
    }

    let diffs = &result.differences;
    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({} total)", "Added content".green(), diffs.total_added);
    for item in &diffs.added_content {
        let _ = writeln!(out, "  {} {}", "+".green(), item);
    }
    if let Some(note) = truncation_note(diffs.added_content.len(), diffs.total_added) {
        let _ = writeln!(out, "  {}", note.dimmed());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({} total)", "Removed content".red(), diffs.total_removed);
    for item in &diffs.removed_content {
        let _ = writeln!(out, "  {} {}", "-".red(), item);
    }
    if let Some(note) = truncation_note(diffs.removed_content.len(), diffs.total_removed) {
        let _ = writeln!(out, "  {}", note.dimmed());
    }

    let structure = &result.structure_comparison;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Common content: {} shared sentence(s)",
        group_digits(diffs.common_content_count as u64)
    );
    let _ = writeln!(
        out,
        "Structure: pages {} -> {} ({:+}), tables {} -> {} ({:+})",
        structure.doc1_pages,
        structure.doc2_pages,
        structure.page_count_diff,
        structure.doc1_tables,
        structure.doc2_tables,
        structure.table_count_diff
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ContentDifferences, DocumentSummary, StructureComparison};

    fn sample_result() -> ComparisonResult {
        ComparisonResult {
            document1: DocumentSummary {
                filename: "a.pdf".to_string(),
                page_count: 3,
                table_count: 1,
                content_length: 45120,
            },
            document2: DocumentSummary {
                filename: "b.pdf".to_string(),
                page_count: 4,
                table_count: 1,
                content_length: 46000,
            },
            similarity_score: 0.85,
            differences: ContentDifferences {
                added_content: vec!["New clause".to_string()],
                removed_content: vec![],
                common_content_count: 120,
                total_added: 4,
                total_removed: 0,
            },
            structure_comparison: StructureComparison {
                page_count_diff: 1,
                table_count_diff: 0,
                doc1_pages: 3,
                doc2_pages: 4,
                doc1_tables: 1,
                doc2_tables: 1,
            },
            summary: "Documents are highly similar.".to_string(),
        }
    }

    #[test]
    fn test_verbose_report_contents() {
        colored::control::set_override(false);
        let report = render_report(&sample_result(), ReportStyle::Verbose);
        assert!(report.contains("85.0%"));
        assert!(report.contains("(high)"));
        assert!(report.contains("Documents are highly similar."));
        assert!(report.contains("45,120 characters"));
        assert!(report.contains("+ New clause"));
        assert!(report.contains("... and 3 more"));
        assert!(report.contains("pages 3 -> 4 (+1)"));
    }

    #[test]
    fn test_minimal_report_skips_details() {
        colored::control::set_override(false);
        let report = render_report(&sample_result(), ReportStyle::Minimal);
        assert!(report.contains("85.0%"));
        assert!(report.contains("Documents are highly similar."));
        assert!(!report.contains("Added content"));
        assert!(!report.contains("a.pdf"));
    }
}
