use serde::Serialize;

use super::domain::Category;

/// Category picked for a complaint together with the keyword that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub matched_keyword: Option<String>,
}

impl ClassificationResult {
    pub fn fallback() -> Self {
        Self {
            category: Category::GeneralMaintenance,
            matched_keyword: None,
        }
    }
}

/// Maps raw complaint text to a category. Implementations must be total and
/// deterministic.
pub trait IssueClassifier: Send + Sync {
    fn classify(&self, text: &str) -> ClassificationResult;
}

/// Checked in order; the first category with any hit wins.
const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (
        Category::PlumbingLeak,
        &["leak", "water", "plumbing", "pipe", "drain", "toilet", "sink"],
    ),
    (
        Category::AcMaintenance,
        &["ac", "air", "cool", "cooling", "conditioning", "temperature"],
    ),
    (
        Category::ElectricalIssue,
        &["electric", "power", "light", "outlet", "socket", "switch"],
    ),
];

/// Case-insensitive substring matcher over fixed keyword sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl IssueClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();

        KEYWORD_RULES
            .iter()
            .find_map(|(category, keywords)| {
                keywords
                    .iter()
                    .find(|keyword| lowered.contains(*keyword))
                    .map(|keyword| ClassificationResult {
                        category: *category,
                        matched_keyword: Some((*keyword).to_string()),
                    })
            })
            .unwrap_or_else(ClassificationResult::fallback)
    }
}

/// Classify with the default keyword rules.
pub fn classify(text: &str) -> ClassificationResult {
    KeywordClassifier.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_category_is_reachable() {
        for (category, keywords) in KEYWORD_RULES {
            for keyword in *keywords {
                let result = classify(&format!("tenant reports {}", keyword.to_uppercase()));
                assert_eq!(result.category, *category, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn reports_first_keyword_of_winning_category() {
        let result = classify("pipe is leaking water");
        assert_eq!(result.category, Category::PlumbingLeak);
        assert_eq!(result.matched_keyword.as_deref(), Some("leak"));
    }

    #[test]
    fn blank_text_falls_back_to_general() {
        assert_eq!(classify(""), ClassificationResult::fallback());
        assert_eq!(classify("   \n\t"), ClassificationResult::fallback());
    }
}
