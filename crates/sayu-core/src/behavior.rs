use crate::archetype::{ArchetypeCode, Axis};
use crate::catalog::{CatalogSource, Exhibition};
use crate::matching::ArtworkProfile;
use crate::{Result, SayuError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A behavioural event reported by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BehaviorEvent {
    ArtworkView {
        artwork_id: String,
        #[serde(default)]
        duration_secs: Option<u32>,
    },
    ArtworkLike {
        artwork_id: String,
    },
    ExhibitionVisit {
        exhibition_id: String,
    },
    QuizCompleted {
        apt_type: ArchetypeCode,
    },
}

impl BehaviorEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BehaviorEvent::ArtworkView { .. } => "artwork_view",
            BehaviorEvent::ArtworkLike { .. } => "artwork_like",
            BehaviorEvent::ExhibitionVisit { .. } => "exhibition_visit",
            BehaviorEvent::QuizCompleted { .. } => "quiz_completed",
        }
    }
}

/// Axis signal in [-1, 1] per axis. Positive leans to the first letter (L, A, E, F).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxisSignal {
    pub social: f32,
    pub perception: f32,
    pub response: f32,
    pub approach: f32,
}

impl AxisSignal {
    fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Social => self.social,
            Axis::Perception => self.perception,
            Axis::Response => self.response,
            Axis::Approach => self.approach,
        }
    }

    pub fn from_artwork(profile: &ArtworkProfile, emotional: u8, intellectual: u8) -> Self {
        let scale = |v: f32| v.clamp(-1.0, 1.0);
        Self {
            social: scale((f32::from(profile.solitude) - f32::from(profile.discussion)) / 9.0),
            perception: if profile.is_abstract { 1.0 } else { -1.0 },
            response: scale((f32::from(emotional) - f32::from(intellectual)) / 9.0),
            approach: scale((f32::from(profile.viewing_freedom) - 5.5) / 4.5),
        }
    }

    pub fn from_exhibition(exhibition: &Exhibition) -> Self {
        let perception = if exhibition.has_tag("abstract") || exhibition.has_tag("contemporary") {
            1.0
        } else if exhibition.has_tag("traditional") || exhibition.has_tag("historical") {
            -1.0
        } else {
            0.0
        };
        let response = if exhibition.has_tag("emotional") || exhibition.has_tag("meditative") {
            1.0
        } else if exhibition.has_tag("historical") {
            -1.0
        } else {
            0.0
        };
        Self {
            social: if exhibition.quiet {
                1.0
            } else if exhibition.has_docent {
                -1.0
            } else {
                0.0
            },
            perception,
            response,
            approach: if exhibition.has_docent { -1.0 } else { 1.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceVector {
    pub axes: AxisSignal,
    pub total_weight: f32,
    pub views: u32,
    pub likes: u32,
    pub visits: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PreferenceVector {
    /// Folds a signal into the running weighted average.
    pub fn absorb(&mut self, signal: AxisSignal, weight: f32) {
        let previous = self.total_weight;
        let total = previous + weight;
        if total <= 0.0 {
            return;
        }
        let mix = |current: f32, incoming: f32| (current * previous + incoming * weight) / total;
        self.axes = AxisSignal {
            social: mix(self.axes.social, signal.social),
            perception: mix(self.axes.perception, signal.perception),
            response: mix(self.axes.response, signal.response),
            approach: mix(self.axes.approach, signal.approach),
        };
        self.total_weight = total;
        self.updated_at = Some(Utc::now());
    }

    /// The archetype the accumulated behaviour points to. Neutral axes keep the first letter.
    pub fn leaning(&self) -> Option<ArchetypeCode> {
        if self.total_weight <= 0.0 {
            return None;
        }
        let letters: String = Axis::ALL
            .iter()
            .map(|axis| {
                let (first, second) = axis.letters();
                char::from(if self.axes.get(*axis) >= 0.0 { first } else { second })
            })
            .collect();
        ArchetypeCode::parse(&letters)
    }
}

/// Persistence collaborator for user archetypes and preference vectors.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn archetype_of(&self, user_id: &str) -> Result<Option<ArchetypeCode>>;

    async fn set_archetype(&self, user_id: &str, code: ArchetypeCode) -> Result<()>;

    async fn apply_signal(
        &self,
        user_id: &str,
        event: &BehaviorEvent,
        signal: AxisSignal,
        weight: f32,
    ) -> Result<PreferenceVector>;

    async fn preferences(&self, user_id: &str) -> Result<Option<PreferenceVector>>;
}

#[derive(Debug, Clone, Default)]
struct UserProfile {
    archetype: Option<ArchetypeCode>,
    preferences: PreferenceVector,
}

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn archetype_of(&self, user_id: &str) -> Result<Option<ArchetypeCode>> {
        Ok(self.profiles.get(user_id).and_then(|p| p.archetype))
    }

    async fn set_archetype(&self, user_id: &str, code: ArchetypeCode) -> Result<()> {
        self.profiles.entry(user_id.to_string()).or_default().archetype = Some(code);
        Ok(())
    }

    async fn apply_signal(
        &self,
        user_id: &str,
        event: &BehaviorEvent,
        signal: AxisSignal,
        weight: f32,
    ) -> Result<PreferenceVector> {
        let mut profile = self.profiles.entry(user_id.to_string()).or_default();
        let prefs = &mut profile.preferences;
        match event {
            BehaviorEvent::ArtworkView { .. } => prefs.views += 1,
            BehaviorEvent::ArtworkLike { .. } => prefs.likes += 1,
            BehaviorEvent::ExhibitionVisit { .. } => prefs.visits += 1,
            BehaviorEvent::QuizCompleted { .. } => {}
        }
        prefs.absorb(signal, weight);
        Ok(prefs.clone())
    }

    async fn preferences(&self, user_id: &str) -> Result<Option<PreferenceVector>> {
        Ok(self.profiles.get(user_id).map(|p| p.preferences.clone()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorOutcome {
    pub event: &'static str,
    pub preferences: PreferenceVector,
    pub apt_type: Option<ArchetypeCode>,
    pub leaning: Option<ArchetypeCode>,
}

/// Turns behaviour events into preference updates.
#[derive(Clone)]
pub struct BehaviorRecorder {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn ProfileStore>,
}

impl BehaviorRecorder {
    pub fn new(catalog: Arc<dyn CatalogSource>, store: Arc<dyn ProfileStore>) -> Self {
        Self { catalog, store }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    pub async fn record(&self, user_id: &str, event: &BehaviorEvent) -> Result<BehaviorOutcome> {
        let resolved = self.resolve(event).await?;
        self.apply(user_id, event, resolved).await
    }

    /// Records a batch atomically with respect to catalog lookups: every event
    /// is resolved before any of them touches the profile.
    pub async fn record_batch(
        &self,
        user_id: &str,
        events: &[BehaviorEvent],
    ) -> Result<Vec<BehaviorOutcome>> {
        let mut resolved = Vec::with_capacity(events.len());
        for event in events {
            resolved.push(self.resolve(event).await?);
        }

        let mut outcomes = Vec::with_capacity(events.len());
        for (event, signal) in events.iter().zip(resolved) {
            outcomes.push(self.apply(user_id, event, signal).await?);
        }
        Ok(outcomes)
    }

    /// Looks up the catalog and derives the signal for `event`. Writes nothing.
    async fn resolve(&self, event: &BehaviorEvent) -> Result<(AxisSignal, f32)> {
        Ok(match event {
            BehaviorEvent::ArtworkView { artwork_id, .. } => (self.artwork_signal(artwork_id).await?, 1.0),
            BehaviorEvent::ArtworkLike { artwork_id } => (self.artwork_signal(artwork_id).await?, 2.0),
            BehaviorEvent::ExhibitionVisit { exhibition_id } => {
                let exhibitions = self.catalog.exhibitions().await?;
                let exhibition = exhibitions
                    .iter()
                    .find(|e| &e.id == exhibition_id)
                    .ok_or_else(|| SayuError::NotFound(format!("exhibition {exhibition_id}")))?;
                (AxisSignal::from_exhibition(exhibition), 1.0)
            }
            BehaviorEvent::QuizCompleted { .. } => (AxisSignal::default(), 0.0),
        })
    }

    async fn apply(
        &self,
        user_id: &str,
        event: &BehaviorEvent,
        (signal, weight): (AxisSignal, f32),
    ) -> Result<BehaviorOutcome> {
        if let BehaviorEvent::QuizCompleted { apt_type } = event {
            self.store.set_archetype(user_id, *apt_type).await?;
        }

        let preferences = self.store.apply_signal(user_id, event, signal, weight).await?;
        let apt_type = self.store.archetype_of(user_id).await?;
        debug!(user_id, event = event.kind(), "Recorded behaviour event");

        Ok(BehaviorOutcome {
            event: event.kind(),
            leaning: preferences.leaning(),
            preferences,
            apt_type,
        })
    }

    async fn artwork_signal(&self, artwork_id: &str) -> Result<AxisSignal> {
        let artwork = self
            .catalog
            .artwork(artwork_id)
            .await?
            .ok_or_else(|| SayuError::NotFound(format!("artwork {artwork_id}")))?;
        let profile = ArtworkProfile::derive(&artwork);
        Ok(AxisSignal::from_artwork(
            &profile,
            artwork.emotional_impact,
            artwork.intellectual_depth,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn recorder() -> BehaviorRecorder {
        BehaviorRecorder::new(
            Arc::new(StaticCatalog::seed().unwrap()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: BehaviorEvent =
            serde_json::from_str(r#"{"type":"artwork_like","artworkId":"art-guernica"}"#).unwrap();
        assert_eq!(
            event,
            BehaviorEvent::ArtworkLike {
                artwork_id: "art-guernica".into()
            }
        );
        assert!(serde_json::from_str::<BehaviorEvent>(r#"{"type":"teleport"}"#).is_err());
        assert!(serde_json::from_str::<BehaviorEvent>(
            r#"{"type":"quiz_completed","aptType":"ZZZZ"}"#
        )
        .is_err());
    }

    #[tokio::test]
    async fn likes_weigh_more_than_views() {
        let recorder = recorder();
        recorder
            .record(
                "u1",
                &BehaviorEvent::ArtworkView {
                    artwork_id: "art-mona-lisa".into(),
                    duration_secs: Some(30),
                },
            )
            .await
            .unwrap();
        let outcome = recorder
            .record(
                "u1",
                &BehaviorEvent::ArtworkLike {
                    artwork_id: "art-orange-and-yellow".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.preferences.views, 1);
        assert_eq!(outcome.preferences.likes, 1);
        assert!((outcome.preferences.total_weight - 3.0).abs() < f32::EPSILON);
        // Abstract like (weight 2) outweighs the representational view (weight 1).
        assert!(outcome.preferences.axes.perception > 0.0);
        assert_eq!(outcome.leaning.map(|c| c.letter(Axis::Perception)), Some('A'));
    }

    #[tokio::test]
    async fn quiz_completion_sets_archetype() {
        let recorder = recorder();
        let outcome = recorder
            .record(
                "u2",
                &BehaviorEvent::QuizCompleted {
                    apt_type: ArchetypeCode::parse("SREC").unwrap(),
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.apt_type.map(|c| c.to_string()), Some("SREC".into()));
        assert!(outcome.leaning.is_none());
    }

    #[tokio::test]
    async fn unknown_artwork_is_not_found() {
        let err = recorder()
            .record(
                "u3",
                &BehaviorEvent::ArtworkView {
                    artwork_id: "nope".into(),
                    duration_secs: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SayuError::NotFound(_)));
    }

    #[tokio::test]
    async fn batch_with_unknown_artwork_writes_nothing() {
        let recorder = recorder();
        let events = [
            BehaviorEvent::QuizCompleted {
                apt_type: ArchetypeCode::parse("SAEF").unwrap(),
            },
            BehaviorEvent::ArtworkLike {
                artwork_id: "art-guernica".into(),
            },
            BehaviorEvent::ArtworkView {
                artwork_id: "does-not-exist".into(),
                duration_secs: None,
            },
        ];
        let err = recorder.record_batch("u4", &events).await.unwrap_err();
        assert!(matches!(err, SayuError::NotFound(_)));
        assert!(recorder.store().archetype_of("u4").await.unwrap().is_none());
        assert!(recorder.store().preferences("u4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn valid_batch_applies_in_order() {
        let recorder = recorder();
        let events = [
            BehaviorEvent::QuizCompleted {
                apt_type: ArchetypeCode::parse("LREC").unwrap(),
            },
            BehaviorEvent::ArtworkLike {
                artwork_id: "art-orange-and-yellow".into(),
            },
        ];
        let outcomes = recorder.record_batch("u5", &events).await.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].event, "quiz_completed");
        assert_eq!(outcomes[1].apt_type.map(|c| c.to_string()), Some("LREC".into()));
        assert_eq!(outcomes[1].preferences.likes, 1);
    }
}
