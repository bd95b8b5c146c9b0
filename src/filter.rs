use crate::error::Result;
use crate::{parse_category_list, Category, ExtractionResult};

/// Which categories a caller wants to see, built from `--categories` / `--exclude` style lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    include: Option<Vec<Category>>,
    exclude: Vec<Category>,
}

impl CategoryFilter {
    pub fn new(categories: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        let include = categories.map(parse_category_list).transpose()?;
        let exclude = exclude.map(parse_category_list).transpose()?.unwrap_or_default();
        Ok(Self { include, exclude })
    }

    pub fn allows(&self, category: Category) -> bool {
        if self.exclude.contains(&category) {
            return false;
        }
        match &self.include {
            Some(include) => include.contains(&category),
            None => true,
        }
    }

    pub fn selected(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|&c| self.allows(c)).collect()
    }

    pub fn apply(&self, results: &mut ExtractionResult) {
        results.retain(|&category, _| self.allows(category));
    }
}
