use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // Four groups of four digits; the separator must be the same between every group
    static ref CREDIT_CARD_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"\b(?:\d{4}(?: \d{4}){3}|\d{4}(?:-\d{4}){3}|\d{16})\b"
    );
}

pub fn extract_credit_cards(text: &str) -> Vec<String> {
    into_strings(CreditCardExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    CreditCardExtractor.matches(value)
}

pub struct CreditCardExtractor;

impl PatternExtractor for CreditCardExtractor {
    fn category(&self) -> Category {
        Category::CreditCard
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&CREDIT_CARD_PATTERN)?, text))
    }
}
