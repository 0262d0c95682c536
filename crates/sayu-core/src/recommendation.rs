use crate::archetype::{ArchetypeCode, ArchetypeRegistry, Axis};
use crate::catalog::{Artwork, CatalogSource, Exhibition};
use crate::matching::{artwork_match, exhibition_match, match_reason, ArtworkProfile};
use crate::{Result, SayuError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Artwork,
    Exhibition,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Artwork, ContentType::Exhibition];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Artwork => "artwork",
            ContentType::Exhibition => "exhibition",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = SayuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artwork" | "artworks" => Ok(ContentType::Artwork),
            "exhibition" | "exhibitions" => Ok(ContentType::Exhibition),
            other => Err(SayuError::Validation(format!(
                "Unknown content type: {other}. Expected artwork or exhibition"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationContext {
    #[default]
    General,
    Trending,
    New,
}

impl RecommendationContext {
    pub const ALL: [RecommendationContext; 3] = [
        RecommendationContext::General,
        RecommendationContext::Trending,
        RecommendationContext::New,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationContext::General => "general",
            RecommendationContext::Trending => "trending",
            RecommendationContext::New => "new",
        }
    }
}

impl FromStr for RecommendationContext {
    type Err = SayuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "general" => Ok(RecommendationContext::General),
            "trending" => Ok(RecommendationContext::Trending),
            "new" => Ok(RecommendationContext::New),
            other => Err(SayuError::Validation(format!(
                "Unknown recommendation context: {other}. Expected general, trending or new"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecommendedItem {
    Artwork {
        artwork: Artwork,
        #[serde(rename = "matchScore")]
        match_score: u8,
        #[serde(rename = "finalScore")]
        final_score: u8,
        reason: String,
    },
    Exhibition {
        exhibition: Exhibition,
        #[serde(rename = "matchScore")]
        match_score: u8,
        #[serde(rename = "finalScore")]
        final_score: u8,
        reasons: Vec<String>,
    },
}

impl RecommendedItem {
    pub fn id(&self) -> &str {
        match self {
            RecommendedItem::Artwork { artwork, .. } => &artwork.id,
            RecommendedItem::Exhibition { exhibition, .. } => &exhibition.id,
        }
    }

    pub fn final_score(&self) -> u8 {
        match self {
            RecommendedItem::Artwork { final_score, .. }
            | RecommendedItem::Exhibition { final_score, .. } => *final_score,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationLimits {
    pub artworks: usize,
    pub exhibitions: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            artworks: 50,
            exhibitions: 10,
        }
    }
}

const TRENDING_VIEW_THRESHOLD: u64 = 1000;
const NEW_WINDOW_DAYS: i64 = 30;

/// Ranks catalog content for an archetype.
#[derive(Clone)]
pub struct RecommendationEngine {
    registry: Arc<ArchetypeRegistry>,
    catalog: Arc<dyn CatalogSource>,
    limits: RecommendationLimits,
}

impl RecommendationEngine {
    pub fn new(
        registry: Arc<ArchetypeRegistry>,
        catalog: Arc<dyn CatalogSource>,
        limits: RecommendationLimits,
    ) -> Self {
        Self {
            registry,
            catalog,
            limits,
        }
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogSource> {
        &self.catalog
    }

    pub async fn compute(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
    ) -> Result<Vec<RecommendedItem>> {
        self.compute_at(code, content_type, context, Utc::now()).await
    }

    /// Same as [`compute`](Self::compute) with an explicit reference instant.
    pub async fn compute_at(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<RecommendedItem>> {
        let items = match content_type {
            ContentType::Artwork => {
                let artworks = self.catalog.artworks().await?;
                self.rank_artworks(code, artworks, context, now)
            }
            ContentType::Exhibition => {
                let exhibitions = self.catalog.exhibitions().await?;
                self.rank_exhibitions(code, exhibitions, context, now)
            }
        };
        debug!(
            code = %code,
            content_type = content_type.as_str(),
            context = context.as_str(),
            items = items.len(),
            "Computed recommendations"
        );
        Ok(items)
    }

    fn rank_artworks(
        &self,
        code: ArchetypeCode,
        artworks: Vec<Artwork>,
        context: RecommendationContext,
        now: DateTime<Utc>,
    ) -> Vec<RecommendedItem> {
        let archetype = self.registry.archetype(code);
        let new_cutoff = now - Duration::days(NEW_WINDOW_DAYS);

        let mut ranked: Vec<RecommendedItem> = artworks
            .into_iter()
            .filter(|a| match context {
                RecommendationContext::General => true,
                RecommendationContext::Trending => a.view_count > TRENDING_VIEW_THRESHOLD,
                RecommendationContext::New => a.created_at >= new_cutoff,
            })
            .map(|artwork| {
                let matched = artwork_match(archetype, &artwork);
                let profile: ArtworkProfile = matched.profile;
                let mut bonus: u32 = match context {
                    RecommendationContext::General => 0,
                    RecommendationContext::Trending => 5,
                    RecommendationContext::New => 3,
                };
                if code.is_first(Axis::Social) && profile.solitude > 7 {
                    bonus += 2;
                }
                if !code.is_first(Axis::Social) && profile.discussion > 7 {
                    bonus += 2;
                }
                let final_score = (u32::from(matched.score) + bonus).min(100) as u8;
                let reason = match_reason(archetype, &artwork, &profile, final_score);
                RecommendedItem::Artwork {
                    artwork,
                    match_score: matched.score,
                    final_score,
                    reason,
                }
            })
            .collect();

        sort_by_score(&mut ranked);
        ranked.truncate(self.limits.artworks);
        ranked
    }

    fn rank_exhibitions(
        &self,
        code: ArchetypeCode,
        exhibitions: Vec<Exhibition>,
        context: RecommendationContext,
        now: DateTime<Utc>,
    ) -> Vec<RecommendedItem> {
        let archetype = self.registry.archetype(code);
        let today = now.date_naive();
        let new_cutoff = today - Duration::days(NEW_WINDOW_DAYS);

        let mut ranked: Vec<RecommendedItem> = exhibitions
            .into_iter()
            .filter(|e| e.is_open_or_upcoming(today))
            .filter(|e| match context {
                RecommendationContext::New => e.start_date >= new_cutoff && e.start_date <= today,
                _ => true,
            })
            .map(|exhibition| {
                let matched = exhibition_match(archetype, &exhibition);
                let bonus: u32 = match context {
                    RecommendationContext::General => 0,
                    RecommendationContext::Trending => 5,
                    RecommendationContext::New => 3,
                };
                let final_score = (u32::from(matched.score) + bonus).min(100) as u8;
                RecommendedItem::Exhibition {
                    exhibition,
                    match_score: matched.score,
                    final_score,
                    reasons: matched.reasons,
                }
            })
            .collect();

        if context == RecommendationContext::Trending {
            ranked.sort_by(|a, b| popularity(b).total_cmp(&popularity(a)));
        } else {
            sort_by_score(&mut ranked);
        }
        ranked.truncate(self.limits.exhibitions);
        ranked
    }
}

fn popularity(item: &RecommendedItem) -> f64 {
    match item {
        RecommendedItem::Exhibition { exhibition, .. } => {
            f64::from(exhibition.avg_rating) * f64::from(exhibition.review_count)
        }
        RecommendedItem::Artwork { artwork, .. } => artwork.view_count as f64,
    }
}

// Highest final score first; ids break ties so rankings are stable.
fn sort_by_score(items: &mut [RecommendedItem]) {
    items.sort_by(|a, b| {
        b.final_score()
            .cmp(&a.final_score())
            .then_with(|| a.id().cmp(b.id()))
    });
}
