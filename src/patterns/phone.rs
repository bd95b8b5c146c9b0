use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // US-style 3-3-4 numbers, either "(123) 456-7890" or "123-456-7890" / "123.456.7890"
    static ref PHONE_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"\(\d{3}\)\s*\d{3}[-.\s]*\d{4}|\b\d{3}[-.\s]*\d{3}[-.\s]*\d{4}\b"
    );
}

pub fn extract_phones(text: &str) -> Vec<String> {
    into_strings(PhoneExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    PhoneExtractor.matches(value)
}

pub struct PhoneExtractor;

impl PatternExtractor for PhoneExtractor {
    fn category(&self) -> Category {
        Category::Phone
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&PHONE_PATTERN)?, text))
    }
}
