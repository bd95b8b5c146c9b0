pub mod credit_card;
pub mod currency;
pub mod email;
pub mod hashtag;
pub mod html_tag;
pub mod phone;
pub mod time;
pub mod url;

use std::panic::{self, AssertUnwindSafe};

use regex::Regex;
use tracing::warn;

use crate::error::{ExtractError, Result};
use crate::Category;

/// A substring of the scanned text together with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

impl<'t> From<regex::Match<'t>> for Match<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        }
    }
}

pub trait PatternExtractor: Send + Sync {
    fn category(&self) -> Category;

    /// Scans `text` left to right and returns every non-overlapping match.
    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>>;

    /// Like `try_extract`, but a failing rule yields no matches instead of an error.
    fn extract<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let category = self.category();
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_extract(text))) {
            Ok(Ok(matches)) => matches,
            Ok(Err(err)) => {
                warn!(%category, error = %err, "extraction failed, returning no matches");
                Vec::new()
            }
            Err(_) => {
                let err = ExtractError::RulePanicked { category };
                warn!(%category, error = %err, "extraction failed, returning no matches");
                Vec::new()
            }
        }
    }

    /// True when the whole value is a single match of this rule.
    fn matches(&self, value: &str) -> bool {
        spans_whole(&self.extract(value), value)
    }
}

pub(crate) fn compiled(
    pattern: &'static std::result::Result<Regex, regex::Error>,
) -> Result<&'static Regex> {
    pattern
        .as_ref()
        .map_err(|err| ExtractError::Pattern(err.clone()))
}

pub(crate) fn scan<'t>(regex: &Regex, text: &'t str) -> Vec<Match<'t>> {
    regex.find_iter(text).map(Match::from).collect()
}

pub(crate) fn spans_whole(matches: &[Match<'_>], value: &str) -> bool {
    !value.is_empty() && matches.iter().any(|m| m.start == 0 && m.end == value.len())
}

pub(crate) fn into_strings(matches: Vec<Match<'_>>) -> Vec<String> {
    matches.into_iter().map(|m| m.text.to_string()).collect()
}
