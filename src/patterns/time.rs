use regex::Regex;
use lazy_static::lazy_static;

use super::{compiled, into_strings, Match, PatternExtractor};
use crate::error::Result;
use crate::Category;

lazy_static! {
    // The 12-hour form is listed first so "2:30 PM" wins over the bare "2:30"
    static ref TIME_PATTERN: std::result::Result<Regex, regex::Error> = Regex::new(
        r"\b(?P<clock12>(?:1[0-2]|0?[1-9]):[0-5]\d\s?(?i:AM|PM))\b|\b(?P<clock24>(?:[01]?\d|2[0-3]):[0-5]\d)\b"
    );

    static ref MERIDIEM_SUFFIX: std::result::Result<Regex, regex::Error> = Regex::new(
        r"^\s?(?i:AM|PM)"
    );
}

pub fn extract_times(text: &str) -> Vec<String> {
    into_strings(TimeExtractor.extract(text))
}

pub fn is_match(value: &str) -> bool {
    TimeExtractor.matches(value)
}

pub struct TimeExtractor;

impl PatternExtractor for TimeExtractor {
    fn category(&self) -> Category {
        Category::Time
    }

    fn try_extract<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        let pattern = compiled(&TIME_PATTERN)?;
        let suffix = compiled(&MERIDIEM_SUFFIX)?;

        let mut results = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(caps) = pattern.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            // A 24-hour reading followed by AM/PM is a malformed 12-hour time, not a 24-hour one
            if caps.name("clock24").is_some() && suffix.is_match(&text[whole.end()..]) {
                pos = whole.start() + text[whole.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }

            results.push(Match::from(whole));
            pos = whole.end();
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_times() {
        let valid_times = vec![
            "12:34",
            "1:23",
            "01:23",
            "13:45",
            "23:59",
            "00:00",
            "12:34 AM",
            "1:23 PM",
            "11:45am",
            "9:05 pm",
        ];

        for time in valid_times {
            assert!(is_match(time), "Time should be valid: {}", time);
        }
    }

    #[test]
    fn test_invalid_times() {
        let invalid_times = vec![
            "24:00",    // hours out of range
            "12:60",    // minutes out of range
            "12:34 ZM", // invalid AM/PM
            "13:45 PM", // 24-hour clock with a meridiem
            "12-34",    // invalid separator
            "1234",     // no separator
        ];

        for time in invalid_times {
            assert!(!is_match(time), "Time should be invalid: {}", time);
        }
    }

    #[test]
    fn test_extract_in_scan_order() {
        assert_eq!(
            extract_times("Meeting at 14:30 or 2:30 PM"),
            vec!["14:30", "2:30 PM"]
        );
    }

    #[test]
    fn test_rejected_24_hour_reading_is_skipped() {
        assert!(extract_times("doors at 13:45 PM sharp").is_empty());
        assert_eq!(extract_times("13:45 PM then 18:00"), vec!["18:00"]);
    }
}
