use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    static ref EMAIL_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b"
    );
}

pub fn extract_emails(text: &str) -> Vec<String> {
    into_strings(EmailExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    EmailExtractor.matches(value)
}

pub struct EmailExtractor;

impl PatternExtractor for EmailExtractor {
    fn category(&self) -> Category {
        Category::Email
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&EMAIL_PATTERN)?, text))
    }
}
