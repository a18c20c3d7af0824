use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use quiz_core::model::{Category, CategoryKey, Question};

use crate::error::ProviderError;

//
// ─── CONTRACT ──────────────────────────────────────────────────────────────────
//

/// External question-bank contract: a category key in, the category's full
/// question pool out.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Load the full question pool for `category`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the bank is unreachable or returns
    /// malformed data. A failed load is never reported as an empty pool.
    async fn load(&self, category: &CategoryKey) -> Result<Vec<Question>, ProviderError>;
}

/// Wire format of a question-bank record.
#[derive(Debug, Clone, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl QuestionRecord {
    fn into_question(self, index: usize) -> Result<Question, ProviderError> {
        Question::new(self.question, self.options, self.answer)
            .map_err(|source| ProviderError::MalformedRecord { index, source })
    }
}

//
// ─── HTTP BANK ─────────────────────────────────────────────────────────────────
//

/// Question bank served as one JSON file per category
/// (`{base}/{key}.json`).
#[derive(Debug)]
pub struct HttpQuestionBank {
    client: reqwest::Client,
    base: Url,
}

impl HttpQuestionBank {
    /// Creates a bank rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidBaseUrl` if `base_url` does not
    /// parse.
    pub fn new(base_url: &str) -> Result<Self, ProviderError> {
        let base = Url::parse(base_url).map_err(|_| ProviderError::InvalidBaseUrl)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn category_url(&self, category: &CategoryKey) -> Result<Url, ProviderError> {
        self.base
            .join(&format!("{category}.json"))
            .map_err(|_| ProviderError::InvalidBaseUrl)
    }
}

#[async_trait]
impl QuestionBank for HttpQuestionBank {
    async fn load(&self, category: &CategoryKey) -> Result<Vec<Question>, ProviderError> {
        let url = self.category_url(category)?;
        log::debug!("loading question pool from {url}");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let records: Vec<QuestionRecord> = response.json().await?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_question(index))
            .collect()
    }
}

//
// ─── STATIC BANK ───────────────────────────────────────────────────────────────
//

/// In-memory question bank for tests and offline prototyping.
#[derive(Clone, Default)]
pub struct StaticQuestionBank {
    pools: HashMap<CategoryKey, Vec<Question>>,
}

impl StaticQuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pool` under `category`, replacing any previous pool.
    #[must_use]
    pub fn with_pool(mut self, category: CategoryKey, pool: Vec<Question>) -> Self {
        self.pools.insert(category, pool);
        self
    }
}

#[async_trait]
impl QuestionBank for StaticQuestionBank {
    async fn load(&self, category: &CategoryKey) -> Result<Vec<Question>, ProviderError> {
        self.pools
            .get(category)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownCategory(category.to_string()))
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

const CATALOG: &[(&str, &str)] = &[
    ("programming", "Programming"),
    ("cybersecurity", "Cyber Security"),
    ("machine_learning", "Machine Learning"),
    ("web_development", "Web Development"),
    ("microservices", "Microservices"),
    ("devops", "DevOps"),
    ("software_development", "Software Development"),
    ("data_science", "Data Science"),
];

/// The default dashboard catalog.
///
/// # Panics
///
/// Never: the built-in entries are valid by construction.
#[must_use]
pub fn catalog() -> Vec<Category> {
    CATALOG
        .iter()
        .map(|(key, title)| {
            let key = CategoryKey::new(*key).expect("built-in catalog key should be valid");
            Category::new(key, *title).expect("built-in catalog title should be valid")
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new("Q?", vec!["A".to_owned(), "B".to_owned()], "A").unwrap()
    }

    #[test]
    fn catalog_matches_the_dashboard() {
        let categories = catalog();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].key().as_str(), "programming");
        assert_eq!(categories[1].title(), "Cyber Security");
    }

    #[test]
    fn record_validation_is_a_typed_failure() {
        let record = QuestionRecord {
            question: "Q?".to_owned(),
            options: vec!["A".to_owned(), "B".to_owned()],
            answer: "Z".to_owned(),
        };
        let err = record.into_question(3).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedRecord { index: 3, .. }));
    }

    #[test]
    fn record_deserializes_the_wire_format() {
        let raw = r#"{"question":"2 + 2?","options":["3","4"],"answer":"4"}"#;
        let record: QuestionRecord = serde_json::from_str(raw).unwrap();
        let q = record.into_question(0).unwrap();
        assert_eq!(q.prompt(), "2 + 2?");
        assert_eq!(q.answer(), "4");
    }

    #[test]
    fn http_bank_rejects_bad_base_url() {
        let err = HttpQuestionBank::new("not a url").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidBaseUrl));
    }

    #[test]
    fn http_bank_builds_category_urls() {
        let bank = HttpQuestionBank::new("https://quizlab.example/banks/").unwrap();
        let key = CategoryKey::new("devops").unwrap();
        let url = bank.category_url(&key).unwrap();
        assert_eq!(url.as_str(), "https://quizlab.example/banks/devops.json");
    }

    #[tokio::test]
    async fn static_bank_serves_registered_pools() {
        let key = CategoryKey::new("programming").unwrap();
        let bank = StaticQuestionBank::new().with_pool(key.clone(), vec![question()]);

        let pool = bank.load(&key).await.unwrap();
        assert_eq!(pool.len(), 1);
    }

    #[tokio::test]
    async fn static_bank_reports_unknown_categories() {
        let bank = StaticQuestionBank::new();
        let key = CategoryKey::new("devops").unwrap();
        let err = bank.load(&key).await.unwrap_err();
        assert!(matches!(err, ProviderError::UnknownCategory(cat) if cat == "devops"));
    }
}
