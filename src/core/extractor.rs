//! Candidate extraction: decide whether a text fragment carries an attendance
//! entry and recover the best-guess (name, email) pair.
//!
//! Chat captures often split a sender's name and message body across nested
//! containers, so the email-bearing fragment may hold no adjacent name text.
//! The widening rule climbs a bounded ancestor chain looking for a fragment
//! that still contains the email plus some surrounding name text.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap()
});

/// How many ancestor fragments the widening walk may visit.
const MAX_ANCESTOR_DEPTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub email: String,
}

/// Extract an attendance candidate from `fragment_text`.
///
/// `ancestor_texts` are the texts of the fragment's enclosing containers,
/// closest first. Returns None when the fragment carries no email-like
/// substring; never fails on malformed input.
pub fn extract(fragment_text: &str, ancestor_texts: &[String]) -> Option<Candidate> {
    // First match wins; any further emails in the fragment are ignored.
    let m = EMAIL_RE.find(fragment_text)?;
    let matched = m.as_str();
    let email = matched.to_lowercase();

    // Remove the exact matched substring, not any email-looking text.
    let mut name = remove_email(fragment_text, matched);

    if name.chars().count() < 2 {
        // The email-bearing fragment carried no adjacent name text; widen
        // through the ancestors, preferring the first sufficiently long name
        // over climbing further.
        for ancestor in ancestor_texts.iter().take(MAX_ANCESTOR_DEPTH) {
            if !ancestor.contains(matched) {
                continue;
            }
            let widened = remove_email(ancestor, matched);
            if widened.chars().count() > name.chars().count() {
                name = widened;
            }
            if name.chars().count() > 2 {
                break;
            }
        }
    }

    let name = strip_separators(&name);

    // Last resort: the email local-part always yields a non-empty name.
    let name = if name.is_empty() {
        email.split('@').next().unwrap_or(email.as_str()).to_string()
    } else {
        name.to_string()
    };

    Some(Candidate { name, email })
}

/// Remove the first occurrence of the matched email text and trim.
fn remove_email(text: &str, matched: &str) -> String {
    text.replacen(matched, "", 1).trim().to_string()
}

/// Strip leading/trailing runs of separator punctuation and whitespace.
fn strip_separators(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | ';' | ',' | '|'))
}
