use thiserror::Error;

use crate::Category;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// A rule's pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A rule panicked while scanning its input
    #[error("Rule for {category} panicked during extraction")]
    RulePanicked { category: Category },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
