use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // Dollar amounts with comma-grouped thousands, or plain digits; cents are optional
    static ref CURRENCY_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"\$(?:\d{1,3}(?:,\d{3})*(?:\.\d{2})?|\d+(?:\.\d{2})?)\b"
    );
}

pub fn extract_currency(text: &str) -> Vec<String> {
    into_strings(CurrencyExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    CurrencyExtractor.matches(value)
}

pub struct CurrencyExtractor;

impl PatternExtractor for CurrencyExtractor {
    fn category(&self) -> Category {
        Category::Currency
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&CURRENCY_PATTERN)?, text))
    }
}
