/// DiffRenderer port for turning two snapshot versions into a readable diff
pub trait DiffRenderer {
    /// Renders a line diff from `before` to `after`, labelled with the given names
    fn render(&self, before_label: &str, after_label: &str, before: &[u8], after: &[u8]) -> String;
}
