use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // Scheme, host with at least one dotted label, then any non-whitespace path/query
    static ref URL_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"https?://[-\w.]+(?:\.[a-zA-Z]{2,})+(?:/\S*)?"
    );
}

pub fn extract_urls(text: &str) -> Vec<String> {
    into_strings(UrlExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    UrlExtractor.matches(value)
}

pub struct UrlExtractor;

impl PatternExtractor for UrlExtractor {
    fn category(&self) -> Category {
        Category::Url
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&URL_PATTERN)?, text))
    }
}
