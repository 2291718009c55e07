use logdiff_core::{DiffResult, RowTag, Side};

/// Renders a Markdown summary report: counts plus a `diff`-style fenced
/// block per row, grounded in the grounding workspace's own
/// `format_markdown_report`. HTML/PDF templating and syntax highlighting
/// remain the renderer's responsibility, not this reference function's —
/// see the crate design notes.
pub fn render_markdown(result: &DiffResult, pre_label: &str, post_label: &str) -> String {
    let mut out = String::new();
    out.push_str("# Log Diff Report\n\n");
    out.push_str(&format!("- Pre: `{pre_label}`\n"));
    out.push_str(&format!("- Post: `{post_label}`\n\n"));

    out.push_str("## Stats\n\n");
    out.push_str(&format!("- Identical: {}\n", result.stats.identical));
    out.push_str(&format!("- Changed: {}\n", result.stats.changed));
    out.push_str(&format!("- Added: {}\n", result.stats.added));
    out.push_str(&format!("- Removed: {}\n", result.stats.removed));
    out.push_str(&format!("- Different: {}\n\n", result.is_different));

    out.push_str("## Lines\n\n");
    if result.lines.is_empty() {
        out.push_str("No lines to compare.\n");
        return out;
    }

    out.push_str("```diff\n");
    for line in &result.lines {
        match line.tag {
            RowTag::Equal => out.push_str(&format!("  {}\n", side_text(&line.pre))),
            RowTag::Replace => {
                out.push_str(&format!("- {}\n", side_text(&line.pre)));
                out.push_str(&format!("+ {}\n", side_text(&line.post)));
            }
            RowTag::Delete => out.push_str(&format!("- {}\n", side_text(&line.pre))),
            RowTag::Insert => out.push_str(&format!("+ {}\n", side_text(&line.post))),
            RowTag::MovedFrom => out.push_str(&format!("< {}\n", side_text(&line.pre))),
            RowTag::MovedTo => out.push_str(&format!("> {}\n", side_text(&line.post))),
        }
    }
    out.push_str("```\n");
    out
}

/// Renders the wire-form JSON described in the engine's external-interface
/// contract. This is a thin pass-through over `serde` — the `DiffResult`
/// derives `Serialize` and already matches the documented shape.
pub fn render_json(result: &DiffResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

fn side_text(side: &Side) -> String {
    side.segments.iter().map(|segment| segment.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logdiff_core::diff;

    #[test]
    fn markdown_report_includes_stats_and_a_diff_block() {
        let result = diff(&["a".to_string()], &["b".to_string()]);
        let report = render_markdown(&result, "pre.log", "post.log");
        assert!(report.contains("# Log Diff Report"));
        assert!(report.contains("Changed: 1"));
        assert!(report.contains("- a"));
        assert!(report.contains("+ b"));
    }

    #[test]
    fn markdown_report_handles_no_rows() {
        let result = diff(&[], &[]);
        let report = render_markdown(&result, "pre.log", "post.log");
        assert!(report.contains("No lines to compare."));
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let result = diff(&["a".to_string()], &["a".to_string()]);
        let json = render_json(&result).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["is_different"], false);
        assert_eq!(value["stats"]["identical"], 1);
    }
}
