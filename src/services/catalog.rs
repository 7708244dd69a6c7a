use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::{Item, Questionnaire},
};

/// Immutable view of the catalog used for a batch of requests
///
/// Requests hold an `Arc` to one snapshot, so a reload never changes the
/// items underneath a recommendation in progress.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub items: Vec<Item>,
    pub questionnaire: Questionnaire,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<Item>, questionnaire: Questionnaire) -> Self {
        Self {
            items,
            questionnaire,
            loaded_at: Utc::now(),
        }
    }

    /// Snapshot with no items and no questions
    pub fn empty() -> Self {
        Self::new(Vec::new(), Questionnaire::default())
    }

    /// Looks an item up by its catalog id
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Where catalog data comes from
///
/// Kept behind a trait so the server can read files while tests and
/// embedders hand over in-memory data.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every catalog item, in catalog order
    async fn load_items(&self) -> AppResult<Vec<Item>>;

    /// Loads the hearing questionnaire
    async fn load_questionnaire(&self) -> AppResult<Questionnaire>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Builds a fresh snapshot from a source
pub async fn load_snapshot(source: &dyn CatalogSource) -> AppResult<CatalogSnapshot> {
    let items = source.load_items().await?;
    let questionnaire = source.load_questionnaire().await?;

    tracing::info!(
        source = source.name(),
        item_count = items.len(),
        question_count = questionnaire.questions.len(),
        "Catalog loaded"
    );

    Ok(CatalogSnapshot::new(items, questionnaire))
}

/// On-disk layout of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sofas: Vec<Item>,
}

/// Reads the catalog and questionnaire from JSON files
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    catalog_path: PathBuf,
    questions_path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(catalog_path: impl Into<PathBuf>, questions_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            questions_path: questions_path.into(),
        }
    }

    async fn read(path: &Path) -> AppResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Catalog(format!("failed to read {}: {}", path.display(), e))
        })
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_items(&self) -> AppResult<Vec<Item>> {
        let raw = Self::read(&self.catalog_path).await?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!("invalid catalog {}: {}", self.catalog_path.display(), e))
        })?;
        Ok(file.sofas)
    }

    async fn load_questionnaire(&self) -> AppResult<Questionnaire> {
        let raw = Self::read(&self.questions_path).await?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!(
                "invalid questionnaire {}: {}",
                self.questions_path.display(),
                e
            ))
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Serves a fixed catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    items: Vec<Item>,
    questionnaire: Questionnaire,
}

impl InMemoryCatalogSource {
    pub fn new(items: Vec<Item>, questionnaire: Questionnaire) -> Self {
        Self {
            items,
            questionnaire,
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.items.clone())
    }

    async fn load_questionnaire(&self) -> AppResult<Questionnaire> {
        Ok(self.questionnaire.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
