use crate::{Result, SayuError};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const SEED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Genre such as "portrait", "landscape", "still life" or "abstract".
    pub genre: String,
    pub style: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cultural_context: Option<String>,
    /// 1..=10
    pub emotional_impact: u8,
    /// 1..=10
    pub intellectual_depth: u8,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Artwork {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub has_docent: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub avg_rating: f32,
    #[serde(default)]
    pub review_count: u32,
}

impl Exhibition {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_open_or_upcoming(&self, today: NaiveDate) -> bool {
        self.end_date >= today
    }
}

/// Read access to artworks and exhibitions. Backed by a database in
/// production deployments.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn artworks(&self) -> Result<Vec<Artwork>>;

    async fn artwork(&self, id: &str) -> Result<Option<Artwork>>;

    async fn exhibitions(&self) -> Result<Vec<Exhibition>>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artworks: Vec<Artwork>,
    #[serde(default)]
    exhibitions: Vec<Exhibition>,
}

/// Immutable in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    artworks: Vec<Artwork>,
    exhibitions: Vec<Exhibition>,
}

impl StaticCatalog {
    pub fn new(artworks: Vec<Artwork>, exhibitions: Vec<Exhibition>) -> Self {
        Self {
            artworks,
            exhibitions,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        for artwork in &file.artworks {
            if !(1..=10).contains(&artwork.emotional_impact)
                || !(1..=10).contains(&artwork.intellectual_depth)
            {
                return Err(SayuError::Catalog(format!(
                    "artwork {} has ratings outside 1..=10",
                    artwork.id
                )));
            }
        }
        Ok(Self::new(file.artworks, file.exhibitions))
    }

    /// The catalog bundled with the crate.
    pub fn seed() -> Result<Self> {
        Self::from_json(SEED_CATALOG)
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            artworks = catalog.artworks.len(),
            exhibitions = catalog.exhibitions.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn artworks(&self) -> Result<Vec<Artwork>> {
        Ok(self.artworks.clone())
    }

    async fn artwork(&self, id: &str) -> Result<Option<Artwork>> {
        Ok(self.artworks.iter().find(|a| a.id == id).cloned())
    }

    async fn exhibitions(&self) -> Result<Vec<Exhibition>> {
        Ok(self.exhibitions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_catalog_loads() {
        let catalog = StaticCatalog::seed().unwrap();
        assert!(catalog.artworks().await.unwrap().len() >= 12);
        assert!(!catalog.exhibitions().await.unwrap().is_empty());
        let starry = catalog.artwork("art-starry-night").await.unwrap();
        assert_eq!(starry.map(|a| a.artist), Some("Vincent van Gogh".to_string()));
        assert!(catalog.artwork("missing").await.unwrap().is_none());
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        let raw = r#"{"artworks":[{"id":"x","title":"t","artist":"a","genre":"portrait",
            "style":"baroque","emotionalImpact":11,"intellectualDepth":3,
            "createdAt":"2024-01-01T00:00:00Z"}]}"#;
        assert!(matches!(StaticCatalog::from_json(raw), Err(SayuError::Catalog(_))));
    }
}
