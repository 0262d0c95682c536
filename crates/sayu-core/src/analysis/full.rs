use super::{mentions_any, prepare_responses};
use crate::archetype::{Archetype, ArchetypeCode, ArchetypeRegistry, Axis};
use crate::compatibility::{CompatibilityScorer, MatchSummary};
use crate::{Result, SayuError};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-axis evidence gathered by a strategy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    pub axis: Axis,
    pub letter: char,
    pub first_hits: usize,
    pub second_hits: usize,
    /// Share of the axis evidence behind the chosen letter, 0..=100.
    pub margin: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullClassification {
    pub code: ArchetypeCode,
    pub confidence: u8,
    pub axes: Vec<AxisScore>,
}

/// Classifier behind the credential-gated tier.
///
/// Implementations receive responses that already passed validation
/// (at least three, trimmed, lower-cased).
#[async_trait]
pub trait FullAnalysisStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn classify(&self, responses: &[String]) -> Result<FullClassification>;
}

struct AxisKeywords {
    axis: Axis,
    first: &'static [&'static str],
    second: &'static [&'static str],
}

const AXIS_KEYWORDS: [AxisKeywords; 4] = [
    AxisKeywords {
        axis: Axis::Social,
        first: &["혼자", "조용", "고요", "나만의", "alone", "quiet", "solitude", "myself"],
        second: &["함께", "친구", "사람들", "대화", "together", "friends", "people", "discuss"],
    },
    AxisKeywords {
        axis: Axis::Perception,
        first: &["추상", "색채", "형태", "상상", "abstract", "color", "shape", "imagin"],
        second: &["구상", "사실", "풍경", "인물", "realistic", "portrait", "landscape", "figurative"],
    },
    AxisKeywords {
        axis: Axis::Response,
        first: &["감정", "느낌", "마음", "감동", "emotion", "feel", "heart", "moved"],
        second: &["의미", "역사", "배경", "해석", "meaning", "history", "context", "interpret"],
    },
    AxisKeywords {
        axis: Axis::Approach,
        first: &["자유", "즉흥", "발길", "흐름", "free", "spontaneous", "wander", "flow"],
        second: &["계획", "순서", "체계", "정리", "plan", "order", "system", "guide"],
    },
];

/// Scores each axis with keyword sets and assembles a four-letter code.
/// An axis with no evidence, or a tie, keeps its first letter.
#[derive(Debug, Clone, Default)]
pub struct AxisKeywordStrategy;

impl AxisKeywordStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FullAnalysisStrategy for AxisKeywordStrategy {
    fn name(&self) -> &'static str {
        "axis-keyword"
    }

    async fn classify(&self, responses: &[String]) -> Result<FullClassification> {
        let mut axes = Vec::with_capacity(AXIS_KEYWORDS.len());
        let mut letters = String::with_capacity(4);

        for keywords in &AXIS_KEYWORDS {
            let first_hits = responses
                .iter()
                .filter(|r| mentions_any(r, keywords.first))
                .count();
            let second_hits = responses
                .iter()
                .filter(|r| mentions_any(r, keywords.second))
                .count();

            let (first, second) = keywords.axis.letters();
            let pick_second = second_hits > first_hits;
            let letter = char::from(if pick_second { second } else { first });
            let total = first_hits + second_hits;
            let margin = if total == 0 {
                50
            } else {
                super::percent(first_hits.max(second_hits), total)
            };

            letters.push(letter);
            axes.push(AxisScore {
                axis: keywords.axis,
                letter,
                first_hits,
                second_hits,
                margin,
            });
        }

        let code = ArchetypeCode::parse(&letters)
            .ok_or_else(|| SayuError::Analysis(format!("strategy produced invalid code {letters}")))?;
        let confidence = mean_margin(&axes);

        Ok(FullClassification {
            code,
            confidence,
            axes,
        })
    }
}

fn mean_margin(axes: &[AxisScore]) -> u8 {
    if axes.is_empty() {
        return 0;
    }
    let sum: u32 = axes.iter().map(|a| u32::from(a.margin)).sum();
    (f64::from(sum) / axes.len() as f64).round() as u8
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewingPreferences {
    pub viewing: &'static str,
    pub perception: &'static str,
    pub response: &'static str,
    pub approach: &'static str,
    pub preferred_styles: Vec<String>,
}

impl ViewingPreferences {
    fn for_archetype(archetype: &Archetype) -> Self {
        let code = archetype.code;
        Self {
            viewing: if code.is_first(Axis::Social) {
                "solo"
            } else {
                "social"
            },
            perception: if code.is_first(Axis::Perception) {
                "abstract"
            } else {
                "representational"
            },
            response: if code.is_first(Axis::Response) {
                "emotional"
            } else {
                "meaning"
            },
            approach: if code.is_first(Axis::Approach) {
                "flow"
            } else {
                "structured"
            },
            preferred_styles: archetype.preferred_styles.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysis {
    pub archetype: Archetype,
    pub confidence: u8,
    pub axes: Vec<AxisScore>,
    pub traits: Vec<String>,
    pub preferences: ViewingPreferences,
    pub compatible_types: Vec<MatchSummary>,
    pub strategy: &'static str,
}

/// Runs a strategy and enriches its classification with reference data.
#[derive(Clone)]
pub struct FullAnalyzer {
    registry: Arc<ArchetypeRegistry>,
    scorer: Arc<CompatibilityScorer>,
    strategy: Arc<dyn FullAnalysisStrategy>,
}

impl FullAnalyzer {
    pub fn new(
        registry: Arc<ArchetypeRegistry>,
        scorer: Arc<CompatibilityScorer>,
        strategy: Arc<dyn FullAnalysisStrategy>,
    ) -> Self {
        Self {
            registry,
            scorer,
            strategy,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub async fn analyze(&self, responses: &[String]) -> Result<FullAnalysis> {
        let responses = prepare_responses(responses)?;
        let classification = self.strategy.classify(&responses).await?;
        debug!(
            strategy = self.strategy.name(),
            code = %classification.code,
            confidence = classification.confidence,
            "Full analysis classified"
        );

        let archetype = self.registry.archetype(classification.code).clone();
        let preferences = ViewingPreferences::for_archetype(&archetype);
        let compatible_types = self.scorer.best_matches(classification.code, 3);

        info!(code = %archetype.code, "Full analysis completed");
        Ok(FullAnalysis {
            traits: archetype.characteristics.clone(),
            archetype,
            confidence: classification.confidence,
            axes: classification.axes,
            preferences,
            compatible_types,
            strategy: self.strategy.name(),
        })
    }
}
