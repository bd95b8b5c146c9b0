use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // Opening, closing and self-closing tags
    static ref HTML_TAG_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"</?[a-zA-Z][^<>]*/?>"
    );
}

pub fn extract_html_tags(text: &str) -> Vec<String> {
    into_strings(HtmlTagExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    HtmlTagExtractor.matches(value)
}

pub struct HtmlTagExtractor;

impl PatternExtractor for HtmlTagExtractor {
    fn category(&self) -> Category {
        Category::HtmlTag
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&HTML_TAG_PATTERN)?, text))
    }
}
