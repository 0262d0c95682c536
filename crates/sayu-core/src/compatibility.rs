use crate::archetype::{ArchetypeCode, ArchetypeRegistry, Axis};
use crate::narratives::pair_narrative;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Score assigned to an archetype paired with itself.
pub const SELF_COMPATIBILITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Perfect,
    Excellent,
    Good,
    Fair,
    Moderate,
    Low,
}

impl CompatibilityLevel {
    pub fn for_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => CompatibilityLevel::Perfect,
            80..=89 => CompatibilityLevel::Excellent,
            70..=79 => CompatibilityLevel::Good,
            60..=69 => CompatibilityLevel::Fair,
            50..=59 => CompatibilityLevel::Moderate,
            _ => CompatibilityLevel::Low,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CompatibilityLevel::Perfect => "green",
            CompatibilityLevel::Excellent => "blue",
            CompatibilityLevel::Good => "purple",
            CompatibilityLevel::Fair => "yellow",
            CompatibilityLevel::Moderate => "orange",
            CompatibilityLevel::Low => "gray",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            CompatibilityLevel::Perfect => "완벽한 매칭",
            CompatibilityLevel::Excellent => "매우 좋음",
            CompatibilityLevel::Good => "좋음",
            CompatibilityLevel::Fair => "보통",
            CompatibilityLevel::Moderate => "적당함",
            CompatibilityLevel::Low => "낮음",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub ko: String,
    pub en: String,
}

impl Localized {
    fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    fn pair((ko, en): (&str, &str)) -> Self {
        Self::new(ko, en)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynergyEntry {
    pub score: u8,
    pub level: CompatibilityLevel,
    pub viewing_style: Localized,
    pub conversation_chemistry: Localized,
    pub recommended_activities: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub source: ArchetypeCode,
    pub target: ArchetypeCode,
    pub score: u8,
    pub level: CompatibilityLevel,
    pub color: &'static str,
    pub level_text: &'static str,
    pub viewing_style: Localized,
    pub conversation_chemistry: Localized,
    pub recommended_activities: Localized,
}

/// Directional 16x16 synergy table, indexed by `source * 16 + target`.
#[derive(Debug, Clone)]
pub struct CompatibilityTable {
    entries: Vec<SynergyEntry>,
}

impl CompatibilityTable {
    /// Builds the reference table. Each pair is built once with the lower
    /// canonical index first, so both directions carry the same entry.
    pub fn reference() -> Self {
        let mut entries = Vec::with_capacity(ArchetypeCode::COUNT * ArchetypeCode::COUNT);
        for source in ArchetypeCode::all() {
            for target in ArchetypeCode::all() {
                let (first, second) = if source.index() <= target.index() {
                    (source, target)
                } else {
                    (target, source)
                };
                entries.push(build_entry(first, second));
            }
        }
        Self { entries }
    }

    pub fn entry(&self, source: ArchetypeCode, target: ArchetypeCode) -> &SynergyEntry {
        // Both indices are below COUNT and the table holds every pair.
        &self.entries[source.index() * ArchetypeCode::COUNT + target.index()]
    }
}

fn axis_points(first: ArchetypeCode, second: ArchetypeCode, axis: Axis) -> u32 {
    let same = !first.differs(&second, axis);
    match (axis, same) {
        (Axis::Social, true) => 20,
        (Axis::Social, false) => 15,
        (Axis::Perception, true) | (Axis::Response, true) => 15,
        (Axis::Perception, false) | (Axis::Response, false) => 20,
        (Axis::Approach, true) => 10,
        (Axis::Approach, false) => 15,
    }
}

fn base_score(first: ArchetypeCode, second: ArchetypeCode) -> u8 {
    let total: u32 = 40 + Axis::ALL
        .iter()
        .map(|axis| axis_points(first, second, *axis))
        .sum::<u32>();
    total.min(100) as u8
}

struct TraitWords {
    viewing_ko: &'static str,
    perception_ko: &'static str,
    reflection_ko: &'static str,
    exploration_ko: &'static str,
    viewing_en: &'static str,
    perception_en: &'static str,
    reflection_en: &'static str,
    exploration_en: &'static str,
}

fn trait_words(code: ArchetypeCode) -> TraitWords {
    let lone = code.is_first(Axis::Social);
    let abstract_ = code.is_first(Axis::Perception);
    let emotional = code.is_first(Axis::Response);
    let flow = code.is_first(Axis::Approach);
    TraitWords {
        viewing_ko: if lone { "혼자" } else { "함께" },
        perception_ko: if abstract_ { "추상" } else { "구상" },
        reflection_ko: if emotional { "감정" } else { "의미" },
        exploration_ko: if flow { "자유롭게" } else { "체계적으로" },
        viewing_en: if lone { "alone" } else { "together" },
        perception_en: if abstract_ { "abstract" } else { "representational" },
        reflection_en: if emotional { "emotion" } else { "meaning" },
        exploration_en: if flow { "freely" } else { "systematically" },
    }
}

fn build_entry(first: ArchetypeCode, second: ArchetypeCode) -> SynergyEntry {
    if first == second {
        return SynergyEntry {
            score: SELF_COMPATIBILITY,
            level: CompatibilityLevel::for_score(SELF_COMPATIBILITY),
            viewing_style: Localized::new(
                format!("같은 {} 유형끼리 만나면 완벽한 공감대가 형성돼요. 서로의 관람 리듬과 감상 포인트가 일치해서 편안하고 깊이 있는 예술 경험을 공유할 수 있어요.", first),
                format!("Two {} types create perfect understanding. Matching viewing rhythms and appreciation points enable comfortable, deep art experiences together.", first),
            ),
            conversation_chemistry: Localized::new(
                "비슷한 관점에서 출발하기 때문에 대화가 자연스럽고 깊이 있게 흘러가요. 서로가 놓친 디테일을 보완해주며 더 풍부한 해석을 만들어내요.",
                "Starting from similar perspectives, conversations flow naturally and deeply. You complement each other's missed details, creating richer interpretations.",
            ),
            recommended_activities: Localized::new(
                "선호하는 환경에서의 편안한 전시 관람, 같은 작품을 다른 시간대에 보고 비교하기, 유사한 감상 스타일의 작가 탐구",
                "Comfortable gallery visits in preferred settings, viewing same works at different times to compare, exploring artists with similar appreciation styles",
            ),
        };
    }

    let score = base_score(first, second);
    if let Some(narrative) = pair_narrative(first.as_str(), second.as_str()) {
        return SynergyEntry {
            score,
            level: CompatibilityLevel::for_score(score),
            viewing_style: Localized::pair(narrative.viewing_style),
            conversation_chemistry: Localized::pair(narrative.conversation_chemistry),
            recommended_activities: Localized::pair(narrative.recommended_activities),
        };
    }

    let a = trait_words(first);
    let b = trait_words(second);
    SynergyEntry {
        score,
        level: CompatibilityLevel::for_score(score),
        viewing_style: Localized::new(
            format!(
                "한 명은 {} {}을 {} {}으로, 다른 한 명은 {} {}을 {} {}으로 감상해요.",
                a.viewing_ko, a.perception_ko, a.exploration_ko, a.reflection_ko,
                b.viewing_ko, b.perception_ko, b.exploration_ko, b.reflection_ko,
            ),
            format!(
                "One appreciates {} works through {} {} {}, the other {} works through {} {} {}.",
                a.perception_en, a.reflection_en, a.exploration_en, a.viewing_en,
                b.perception_en, b.reflection_en, b.exploration_en, b.viewing_en,
            ),
        ),
        conversation_chemistry: Localized::new(
            "서로 다른 관점이 만나 풍부한 대화를 만들어요. 각자의 방식을 존중하며 새로운 시각을 발견해요.",
            "Different perspectives meet creating rich dialogue. Respecting each other's ways discovering new viewpoints.",
        ),
        recommended_activities: Localized::new(
            "다양한 스타일의 전시 관람, 서로의 감상 방식 체험하기, 관점 교환 워크숍 참여",
            "Visiting diverse style exhibitions, experiencing each other's appreciation methods, participating in perspective exchange workshops",
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    #[serde(rename = "type")]
    pub code: ArchetypeCode,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisComparison {
    pub axis: Axis,
    pub label: &'static str,
    pub source_letter: char,
    pub target_letter: char,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityVerdict {
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityComparison {
    pub source: ArchetypeCode,
    pub target: ArchetypeCode,
    pub similarities: Vec<AxisComparison>,
    pub differences: Vec<AxisComparison>,
    pub similarity_percentage: u8,
    pub verdict: CompatibilityVerdict,
    pub complementary_traits: Vec<&'static str>,
}

fn verdict_for(similarity: u8) -> CompatibilityVerdict {
    match similarity {
        75..=u8::MAX => CompatibilityVerdict {
            level: "Highly Compatible",
            description: "You share most art appreciation preferences and will enjoy visiting galleries together",
        },
        50..=74 => CompatibilityVerdict {
            level: "Compatible",
            description: "You share a balanced mix of preferences with room to learn from each other",
        },
        25..=49 => CompatibilityVerdict {
            level: "Complementary",
            description: "Your differences help each other discover new ways of seeing art",
        },
        _ => CompatibilityVerdict {
            level: "Opposites Attract",
            description: "Completely different perspectives make every exhibition a fresh conversation",
        },
    }
}

fn complementary_note(axis: Axis) -> &'static str {
    match axis {
        Axis::Social => "One enjoys solitude while the other brings social energy",
        Axis::Perception => "Abstract and concrete perspectives balance each other",
        Axis::Response => "Emotional and analytical approaches create rich discussions",
        Axis::Approach => "Spontaneous and structured styles offer variety",
    }
}

/// Pure lookups over the reference table.
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    registry: Arc<ArchetypeRegistry>,
    table: CompatibilityTable,
}

impl CompatibilityScorer {
    pub fn new(registry: Arc<ArchetypeRegistry>) -> Self {
        Self {
            registry,
            table: CompatibilityTable::reference(),
        }
    }

    pub fn registry(&self) -> &ArchetypeRegistry {
        &self.registry
    }

    /// Validates both codes and returns the table entry for the pair.
    pub fn get_compatibility(&self, source: &str, target: &str) -> Result<CompatibilityScore> {
        let source = self.registry.parse(source)?;
        let target = self.registry.parse(target)?;
        Ok(self.score(source, target))
    }

    pub fn score(&self, source: ArchetypeCode, target: ArchetypeCode) -> CompatibilityScore {
        let entry = self.table.entry(source, target);
        CompatibilityScore {
            source,
            target,
            score: entry.score,
            level: entry.level,
            color: entry.level.color(),
            level_text: entry.level.label_ko(),
            viewing_style: entry.viewing_style.clone(),
            conversation_chemistry: entry.conversation_chemistry.clone(),
            recommended_activities: entry.recommended_activities.clone(),
        }
    }

    fn score_value(&self, source: ArchetypeCode, target: ArchetypeCode) -> u8 {
        self.table.entry(source, target).score
    }

    /// Highest scoring partners, self excluded. Equal scores keep canonical order.
    pub fn best_matches(&self, code: ArchetypeCode, count: usize) -> Vec<MatchSummary> {
        let mut matches: Vec<MatchSummary> = ArchetypeCode::all()
            .filter(|other| *other != code)
            .map(|other| MatchSummary {
                code: other,
                score: self.score_value(code, other),
            })
            .collect();
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(count);
        matches
    }

    /// Partners scoring within 50..=70, lowest first.
    pub fn challenging_matches(&self, code: ArchetypeCode, count: usize) -> Vec<MatchSummary> {
        let mut matches: Vec<MatchSummary> = ArchetypeCode::all()
            .filter(|other| *other != code)
            .map(|other| MatchSummary {
                code: other,
                score: self.score_value(code, other),
            })
            .filter(|m| (50..=70).contains(&m.score))
            .collect();
        matches.sort_by(|a, b| a.score.cmp(&b.score));
        matches.truncate(count);
        matches
    }

    pub fn compare(&self, source: ArchetypeCode, target: ArchetypeCode) -> PersonalityComparison {
        let (similarities, differences): (Vec<_>, Vec<_>) = Axis::ALL
            .iter()
            .map(|axis| AxisComparison {
                axis: *axis,
                label: axis.label(),
                source_letter: source.letter(*axis),
                target_letter: target.letter(*axis),
            })
            .partition(|c| c.source_letter == c.target_letter);

        let similarity_percentage = (source.shared_axes(&target) * 25) as u8;
        let complementary_traits = differences
            .iter()
            .map(|d| complementary_note(d.axis))
            .collect();

        PersonalityComparison {
            source,
            target,
            similarities,
            differences,
            similarity_percentage,
            verdict: verdict_for(similarity_percentage),
            complementary_traits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SayuError;

    fn scorer() -> CompatibilityScorer {
        CompatibilityScorer::new(Arc::new(ArchetypeRegistry::standard()))
    }

    fn code(raw: &str) -> ArchetypeCode {
        ArchetypeCode::parse(raw).unwrap()
    }

    #[test]
    fn self_pairs_use_the_table_entry() {
        let scorer = scorer();
        for c in ArchetypeCode::all() {
            let result = scorer.score(c, c);
            assert_eq!(result.score, 85);
            assert_eq!(result.level, CompatibilityLevel::Excellent);
            assert!(result.viewing_style.en.starts_with(&format!("Two {} types", c)));
        }
    }

    #[test]
    fn scores_are_deterministic_and_symmetric() {
        let scorer = scorer();
        for a in ArchetypeCode::all() {
            for b in ArchetypeCode::all() {
                let first = scorer.score(a, b);
                let again = scorer.score(a, b);
                let reverse = scorer.score(b, a);
                assert_eq!(first, again);
                assert_eq!(first.score, reverse.score);
                assert_eq!(first.level, reverse.level);
            }
        }
    }

    #[test]
    fn reference_scores_follow_axis_rule() {
        let scorer = scorer();
        // Only L/S differs: 40 + 15 + 15 + 15 + 10
        assert_eq!(scorer.score(code("LAEF"), code("SAEF")).score, 95);
        // Only F/C differs: 40 + 20 + 15 + 15 + 15
        assert_eq!(scorer.score(code("LAEF"), code("LAEC")).score, 100);
        // Everything differs, capped
        assert_eq!(scorer.score(code("LAEF"), code("SRMC")).score, 100);
        assert_eq!(
            scorer.score(code("LAEF"), code("SAEF")).level,
            CompatibilityLevel::Perfect
        );
    }

    #[test]
    fn unknown_codes_fail_with_valid_list() {
        let scorer = scorer();
        let err = scorer.get_compatibility("LAEF", "NOPE").unwrap_err();
        match err {
            SayuError::UnknownArchetype { code, valid_codes } => {
                assert_eq!(code, "NOPE");
                assert_eq!(valid_codes, ArchetypeCode::valid_codes());
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(scorer.get_compatibility("zzzz", "LAEF").is_err());
    }

    #[test]
    fn best_matches_exclude_self_and_sort_descending() {
        let scorer = scorer();
        let matches = scorer.best_matches(code("LAEF"), 5);
        assert_eq!(matches.len(), 5);
        assert!(matches.iter().all(|m| m.code != code("LAEF")));
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn challenging_matches_are_empty_for_reference_table() {
        let scorer = scorer();
        for c in ArchetypeCode::all() {
            assert!(scorer.challenging_matches(c, 3).is_empty());
        }
    }

    #[test]
    fn hand_written_pairs_override_the_template() {
        let scorer = scorer();
        let forward = scorer.score(code("LAEF"), code("LAEC"));
        let reverse = scorer.score(code("LAEC"), code("LAEF"));
        assert_eq!(
            forward.viewing_style.en,
            "Both prefer quiet solo viewing of abstract works, but one flows freely while the other is systematic. Respecting each other's pace, you meet after to share insights."
        );
        assert_eq!(forward.viewing_style, reverse.viewing_style);
        assert_eq!(forward.score, 100);
        assert!(forward
            .recommended_activities
            .en
            .contains("exchanging emotion journals"));

        // Stored out of order upstream, still resolved.
        let lamc_lamf = scorer.score(code("LAMC"), code("LAMF"));
        assert!(!lamc_lamf.viewing_style.en.starts_with("One appreciates"));
    }

    #[test]
    fn unlisted_pairs_use_the_template_in_canonical_order() {
        let scorer = scorer();
        // SAEF (index 8) precedes SRMC (index 15) whichever side asks.
        for (a, b) in [("SRMC", "SAEF"), ("SAEF", "SRMC")] {
            let result = scorer.score(code(a), code(b));
            assert_eq!(
                result.viewing_style.en,
                "One appreciates abstract works through emotion freely together, the other representational works through meaning systematically together."
            );
            assert_eq!(
                result.conversation_chemistry.en,
                "Different perspectives meet creating rich dialogue. Respecting each other's ways discovering new viewpoints."
            );
        }
    }

    #[test]
    fn every_listed_narrative_names_valid_codes() {
        for narrative in crate::narratives::PAIR_NARRATIVES {
            assert!(ArchetypeCode::parse(narrative.first).is_some());
            assert!(ArchetypeCode::parse(narrative.second).is_some());
            assert_ne!(narrative.first, narrative.second);
        }
        assert_eq!(crate::narratives::PAIR_NARRATIVES.len(), 54);
    }

    #[test]
    fn level_bands() {
        assert_eq!(CompatibilityLevel::for_score(100), CompatibilityLevel::Perfect);
        assert_eq!(CompatibilityLevel::for_score(90), CompatibilityLevel::Perfect);
        assert_eq!(CompatibilityLevel::for_score(89), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::for_score(70), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::for_score(65), CompatibilityLevel::Fair);
        assert_eq!(CompatibilityLevel::for_score(50), CompatibilityLevel::Moderate);
        assert_eq!(CompatibilityLevel::for_score(10), CompatibilityLevel::Low);
        assert_eq!(CompatibilityLevel::Low.color(), "gray");
    }

    #[test]
    fn compare_reports_axes_and_verdict() {
        let scorer = scorer();
        let cmp = scorer.compare(code("LAEF"), code("LAMC"));
        assert_eq!(cmp.similarities.len(), 2);
        assert_eq!(cmp.differences.len(), 2);
        assert_eq!(cmp.similarity_percentage, 50);
        assert_eq!(cmp.verdict.level, "Compatible");
        assert_eq!(
            cmp.complementary_traits,
            vec![
                "Emotional and analytical approaches create rich discussions",
                "Spontaneous and structured styles offer variety",
            ]
        );

        let opposite = scorer.compare(code("LAEF"), code("SRMC"));
        assert_eq!(opposite.similarity_percentage, 0);
        assert_eq!(opposite.verdict.level, "Opposites Attract");
    }
}
