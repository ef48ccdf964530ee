//! Transcript parsing: turn a captured chat text file into fragments with
//! ancestor chains.
//!
//! Each non-blank line is one fragment. Leading indentation encodes the
//! container nesting of the capture, so an indented line's ancestors are the
//! texts of its enclosing lines, closest first. This feeds the extractor the
//! same chain a live observer would supply.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// Enclosing fragment texts, closest first.
    pub ancestors: Vec<String>,
}

/// Parse transcript text into fragments in document order.
pub fn fragments(text: &str) -> Vec<Fragment> {
    let mut out = Vec::new();
    // (indent, text) of the currently open containers, outermost first
    let mut stack: Vec<(usize, String)> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let indent = line.len() - line.trim_start().len();

        while let Some((top, _)) = stack.last()
            && *top >= indent
        {
            stack.pop();
        }

        let ancestors: Vec<String> = stack.iter().rev().map(|(_, t)| t.clone()).collect();

        out.push(Fragment {
            text: trimmed.to_string(),
            ancestors,
        });
        stack.push((indent, trimmed.to_string()));
    }

    out
}
