use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, scan, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    static ref HASHTAG_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"#[a-zA-Z][a-zA-Z0-9_]*"
    );
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    into_strings(HashtagExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    HashtagExtractor.matches(value)
}

pub struct HashtagExtractor;

impl PatternExtractor for HashtagExtractor {
    fn category(&self) -> Category {
        Category::Hashtag
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        Ok(scan(compiled(&HASHTAG_PATTERN)?, text))
    }
}
