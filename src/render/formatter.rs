use super::{NodeRow, RenderOptions};
use crate::classify::{GlyphSet, IconKind};
use crate::selection::DetailPanel;
use crate::stats::ForestStats;
use itertools::Itertools;

/// Turns rendered rows, detail panels and counters into terminal text.
pub struct TextFormatter;

impl TextFormatter {
    /// Formats rows as a nested listing. Each node takes a title line, an optional
    /// description line and an optional metadata line, all indented by the row's indent.
    pub fn format_rows(rows: &[NodeRow<'_>], options: &RenderOptions) -> String {
        let mut output = String::new();
        for row in rows {
            Self::format_row(&mut output, row, options);
        }
        output
    }

    fn format_row(output: &mut String, row: &NodeRow<'_>, options: &RenderOptions) {
        let glyphs = options.glyphs;
        let pad = " ".repeat(row.indent);
        let node = row.node;

        output.push_str(&format!(
            "{}{} {} [{} {}] ({})",
            pad,
            row.type_icon.glyph(glyphs),
            node.title,
            row.status.icon.glyph(glyphs),
            node.status,
            node.node_type,
        ));
        if row.expandable {
            output.push(' ');
            output.push_str(IconKind::Chevron.glyph(glyphs));
        }
        output.push('\n');

        // Body lines align under the title, past the icon.
        let body_pad = format!("{}  ", pad);
        if !node.description.is_empty() {
            output.push_str(&format!("{}{}\n", body_pad, node.description));
        }
        if !row.summary.is_empty() {
            let line = row.summary.parts.iter().join(Self::separator(glyphs));
            output.push_str(&format!("{}{}\n", body_pad, line));
        }
    }

    /// Formats the detail view of the inspected node.
    pub fn format_detail(panel: &DetailPanel<'_>) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", panel.title()));
        if !panel.description().is_empty() {
            output.push_str(&format!("{}\n", panel.description()));
        }
        output.push('\n');
        output.push_str(&format!("Node Type: {}\n", capitalize(panel.node_type().as_str())));
        output.push_str(&format!("Status: {}\n", capitalize(panel.status().as_str())));
        for (label, value) in panel.fields() {
            output.push_str(&format!("{}: {}\n", label, value));
        }
        output.push('\n');
        let actions = panel
            .actions()
            .iter()
            .map(|action| format!("[{}]", action.label()))
            .join(" ");
        output.push_str(&actions);
        output.push('\n');
        output
    }

    /// Formats the root-level counters.
    pub fn format_stats(stats: &ForestStats) -> String {
        format!(
            "Active Trees: {}\nTotal Triggers: {}\nErrors Detected: {}\n",
            stats.active,
            super::format_count(stats.total_triggers),
            stats.error,
        )
    }

    fn separator(glyphs: GlyphSet) -> &'static str {
        match glyphs {
            GlyphSet::Unicode => " \u{00B7} ",
            GlyphSet::Ascii => " | ",
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
