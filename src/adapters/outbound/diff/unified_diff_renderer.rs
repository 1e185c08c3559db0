use crate::ports::outbound::DiffRenderer;
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};

const CONTEXT_LINES: usize = 3;

/// UnifiedDiffRenderer adapter producing `diff -u` style output
///
/// Colour is off unless asked for; CI logs are the main consumer.
pub struct UnifiedDiffRenderer {
    color: bool,
}

impl UnifiedDiffRenderer {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn render_colored<'a>(diff: &TextDiff<'a, 'a, 'a, str>, before_label: &str, after_label: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", format!("--- {}", before_label).bold()));
        out.push_str(&format!("{}\n", format!("+++ {}", after_label).bold()));

        let mut unified = diff.unified_diff();
        unified.context_radius(CONTEXT_LINES);
        for hunk in unified.iter_hunks() {
            out.push_str(&format!("{}\n", hunk.header().cyan()));
            for change in hunk.iter_changes() {
                let line = change.value().trim_end_matches('\n');
                let rendered = match change.tag() {
                    ChangeTag::Delete => format!("-{}", line).red().to_string(),
                    ChangeTag::Insert => format!("+{}", line).green().to_string(),
                    ChangeTag::Equal => format!(" {}", line),
                };
                out.push_str(&rendered);
                out.push('\n');
                if change.missing_newline() {
                    out.push_str("\\ No newline at end of file\n");
                }
            }
        }
        out
    }
}

impl Default for UnifiedDiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffRenderer for UnifiedDiffRenderer {
    fn render(&self, before_label: &str, after_label: &str, before: &[u8], after: &[u8]) -> String {
        let before = String::from_utf8_lossy(before);
        let after = String::from_utf8_lossy(after);
        let diff = TextDiff::from_lines(before.as_ref(), after.as_ref());

        if self.color {
            return Self::render_colored(&diff, before_label, after_label);
        }

        diff.unified_diff()
            .context_radius(CONTEXT_LINES)
            .header(before_label, after_label)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEFORE: &[u8] = b"app dependencies: (generated by x)\n\n         bufio\n         fmt\n";
    const AFTER: &[u8] = b"app dependencies: (generated by x)\n\n         bufio\n         os\n";

    #[test]
    fn test_plain_unified_diff() {
        let diff = UnifiedDiffRenderer::new().render("before", "after", BEFORE, AFTER);

        assert!(diff.starts_with("--- before\n+++ after\n"));
        assert!(diff.contains("@@"));
        assert!(diff.contains("-         fmt\n"));
        assert!(diff.contains("+         os\n"));
        assert!(diff.contains("          bufio\n"));
        assert!(!diff.contains('\u{1b}'));
    }

    #[test]
    fn test_identical_inputs_have_no_hunks() {
        let diff = UnifiedDiffRenderer::new().render("before", "after", BEFORE, BEFORE);
        assert!(!diff.contains("@@"));
    }

    #[test]
    fn test_colored_diff_uses_ansi_escapes() {
        let diff = UnifiedDiffRenderer::with_color(true).render("before", "after", BEFORE, AFTER);

        assert!(diff.contains('\u{1b}'));
        assert!(diff.contains("-         fmt"));
        assert!(diff.contains("+         os"));
    }

    #[test]
    fn test_missing_trailing_newline_is_reported() {
        let diff = UnifiedDiffRenderer::with_color(true).render("before", "after", b"a\nb", b"a\nc\n");
        assert!(diff.contains("No newline at end of file"));
    }
}
