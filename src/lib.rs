pub mod error;
pub mod filter;
pub mod patterns;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use error::{ExtractError, Result};
pub use filter::CategoryFilter;
pub use patterns::{Match, PatternExtractor};
pub use patterns::credit_card::extract_credit_cards;
pub use patterns::currency::extract_currency;
pub use patterns::email::extract_emails;
pub use patterns::hashtag::extract_hashtags;
pub use patterns::html_tag::extract_html_tags;
pub use patterns::phone::extract_phones;
pub use patterns::time::extract_times;
pub use patterns::url::extract_urls;

/// The fixed set of data kinds the extractor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Url,
    Phone,
    CreditCard,
    Time,
    HtmlTag,
    Hashtag,
    Currency,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::CreditCard,
        Category::Time,
        Category::HtmlTag,
        Category::Hashtag,
        Category::Currency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::Phone => "phone",
            Category::CreditCard => "credit_card",
            Category::Time => "time",
            Category::HtmlTag => "html_tag",
            Category::Hashtag => "hashtag",
            Category::Currency => "currency",
        }
    }

    /// Heading used when printing a result set.
    pub fn plural(self) -> &'static str {
        match self {
            Category::Email => "emails",
            Category::Url => "urls",
            Category::Phone => "phones",
            Category::CreditCard => "credit_cards",
            Category::Time => "times",
            Category::HtmlTag => "html_tags",
            Category::Hashtag => "hashtags",
            Category::Currency => "currency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == wanted || c.plural() == wanted)
            .ok_or_else(|| ExtractError::UnknownCategory(s.trim().to_string()))
    }
}

/// Parses a comma-separated category list, skipping empty entries.
pub fn parse_category_list(list: &str) -> Result<Vec<Category>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Category::from_str)
        .collect()
}

/// Category to matches, in the order they occur in the text. Every category is present.
pub type ExtractionResult = BTreeMap<Category, Vec<String>>;

/// The rule table: one stateless extractor per category.
pub fn extractor_for(category: Category) -> &'static dyn PatternExtractor {
    match category {
        Category::Email => &patterns::email::EmailExtractor,
        Category::Url => &patterns::url::UrlExtractor,
        Category::Phone => &patterns::phone::PhoneExtractor,
        Category::CreditCard => &patterns::credit_card::CreditCardExtractor,
        Category::Time => &patterns::time::TimeExtractor,
        Category::HtmlTag => &patterns::html_tag::HtmlTagExtractor,
        Category::Hashtag => &patterns::hashtag::HashtagExtractor,
        Category::Currency => &patterns::currency::CurrencyExtractor,
    }
}

pub struct Extractor {
    rules: [&'static dyn PatternExtractor; 8],
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            rules: Category::ALL.map(extractor_for),
        }
    }

    fn rule(&self, category: Category) -> &'static dyn PatternExtractor {
        self.rules[category as usize]
    }

    /// Matches with their byte spans. Never fails; a broken rule yields nothing.
    pub fn find_category<'t>(&self, text: &'t str, category: Category) -> Vec<Match<'t>> {
        let matches = self.rule(category).extract(text);
        trace!(%category, count = matches.len(), "scanned category");
        matches
    }

    pub fn extract_category(&self, text: &str, category: Category) -> Vec<String> {
        patterns::into_strings(self.find_category(text, category))
    }

    pub fn find_all<'t>(&self, text: &'t str) -> BTreeMap<Category, Vec<Match<'t>>> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.find_category(text, category)))
            .collect()
    }

    pub fn extract_all(&self, text: &str) -> ExtractionResult {
        let results: ExtractionResult = Category::ALL
            .into_iter()
            .map(|category| (category, self.extract_category(text, category)))
            .collect();
        debug!(
            total = results.values().map(Vec::len).sum::<usize>(),
            "extracted all categories"
        );
        results
    }

    /// Same result as `extract_all`, with the rules run on the rayon pool.
    pub fn extract_all_parallel(&self, text: &str) -> ExtractionResult {
        Category::ALL
            .par_iter()
            .map(|&category| (category, self.extract_category(text, category)))
            .collect()
    }

    /// Categories whose rule matches the entire value.
    pub fn classify(&self, value: &str) -> Vec<Category> {
        if value.is_empty() {
            return vec![];
        }

        Category::ALL
            .into_iter()
            .filter(|&category| self.rule(category).matches(value))
            .collect()
    }

    /// Compares extracted matches against expected ones per category, ignoring order.
    pub fn validate_extraction(
        &self,
        text: &str,
        expected: &BTreeMap<Category, Vec<String>>,
    ) -> BTreeMap<Category, bool> {
        expected
            .iter()
            .map(|(&category, wanted)| {
                let actual = self.extract_category(text, category);
                let actual: HashSet<&str> = actual.iter().map(String::as_str).collect();
                let wanted: HashSet<&str> = wanted.iter().map(String::as_str).collect();
                (category, actual == wanted)
            })
            .collect()
    }
}

/// Runs every rule over `text` with a default extractor.
pub fn extract_all(text: &str) -> ExtractionResult {
    Extractor::new().extract_all(text)
}

pub fn classify(value: &str) -> Vec<Category> {
    Extractor::new().classify(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_matches_categories() {
        for category in Category::ALL {
            assert_eq!(extractor_for(category).category(), category);
        }
    }

    struct PanickingHashtagRule;

    impl PatternExtractor for PanickingHashtagRule {
        fn category(&self) -> Category {
            Category::Hashtag
        }

        fn try_extract<'t>(&self, _text: &'t str) -> Result<Vec<Match<'t>>> {
            panic!("hashtag rule blew up")
        }
    }

    struct BrokenCurrencyRule;

    impl PatternExtractor for BrokenCurrencyRule {
        fn category(&self) -> Category {
            Category::Currency
        }

        fn try_extract<'t>(&self, _text: &'t str) -> Result<Vec<Match<'t>>> {
            Err(ExtractError::Pattern(regex::Error::Syntax("unclosed group".to_string())))
        }
    }

    #[test]
    fn test_failing_rules_only_empty_their_own_category() {
        let mut rules = Category::ALL.map(extractor_for);
        rules[Category::Hashtag as usize] = &PanickingHashtagRule;
        rules[Category::Currency as usize] = &BrokenCurrencyRule;
        let extractor = Extractor { rules };

        let text = "Mail ops@example.com about #launch at 9:30 PM, budget $1,200.00";
        for results in [extractor.extract_all(text), extractor.extract_all_parallel(text)] {
            assert_eq!(results.len(), Category::ALL.len());
            assert!(results[&Category::Hashtag].is_empty());
            assert!(results[&Category::Currency].is_empty());
            assert_eq!(results[&Category::Email], vec!["ops@example.com"]);
            assert_eq!(results[&Category::Time], vec!["9:30 PM"]);
        }

        let healthy = Extractor::new().extract_all(text);
        assert_eq!(healthy[&Category::Hashtag], vec!["#launch"]);
        assert_eq!(healthy[&Category::Currency], vec!["$1,200.00"]);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
            assert_eq!(category.plural().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Credit_Card ".parse::<Category>().unwrap(), Category::CreditCard);
        assert!(matches!(
            "ssn".parse::<Category>(),
            Err(ExtractError::UnknownCategory(name)) if name == "ssn"
        ));
    }

    #[test]
    fn test_parse_category_list() {
        assert_eq!(
            parse_category_list("email, url,,time").unwrap(),
            vec![Category::Email, Category::Url, Category::Time]
        );
        assert!(parse_category_list("email,bogus").is_err());
    }

    #[test]
    fn test_empty_text_has_every_category() {
        let results = extract_all("");
        assert_eq!(results.len(), Category::ALL.len());
        assert!(results.values().all(Vec::is_empty));
    }

    #[test]
    fn test_no_cross_category_suppression() {
        let extractor = Extractor::new();
        let results = extractor.extract_all("card 1234-5678-9012-3456 and 555-123-4567");
        assert_eq!(results[&Category::CreditCard], vec!["1234-5678-9012-3456"]);
        assert_eq!(results[&Category::Phone], vec!["555-123-4567"]);

        let nested = extractor.extract_all(r#"<a href="https://example.com/guide#Setup">"#);
        assert_eq!(nested[&Category::HtmlTag], vec![r#"<a href="https://example.com/guide#Setup">"#]);
        assert_eq!(nested[&Category::Url], vec![r#"https://example.com/guide#Setup">"#]);
        assert_eq!(nested[&Category::Hashtag], vec!["#Setup"]);
    }

    #[test]
    fn test_find_category_reports_offsets() {
        let text = "tags: #one #two";
        let found = Extractor::new().find_category(text, Category::Hashtag);
        assert_eq!(found.len(), 2);
        for m in found {
            assert_eq!(&text[m.start..m.end], m.text);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let extractor = Extractor::new();
        let text = "Mail a@b.io at 9:15 am, see <b>https://x.example.com</b> #deal $1,000.00";
        assert_eq!(extractor.extract_all(text), extractor.extract_all_parallel(text));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("user@example.com"), vec![Category::Email]);
        assert_eq!(classify("#TechTips"), vec![Category::Hashtag]);
        assert_eq!(classify("14:30"), vec![Category::Time]);
        assert!(classify("").is_empty());
        assert!(classify("~~~~").is_empty());
    }

    #[test]
    fn test_validate_extraction() {
        let extractor = Extractor::new();
        let text = "#b #a $5";
        let mut expected = BTreeMap::new();
        expected.insert(Category::Hashtag, vec!["#a".to_string(), "#b".to_string()]);
        expected.insert(Category::Currency, vec!["$6".to_string()]);

        let verdict = extractor.validate_extraction(text, &expected);
        assert_eq!(verdict.len(), 2);
        assert!(verdict[&Category::Hashtag]);
        assert!(!verdict[&Category::Currency]);
    }
}
