use super::{mentions_any, percent, prepare_responses, Language};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// The four personality types exposed on the public tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicType {
    Visionary,
    Explorer,
    Curator,
    Social,
}

impl PublicType {
    /// Canonical order. Earlier entries win ties.
    pub const ALL: [PublicType; 4] = [
        PublicType::Visionary,
        PublicType::Explorer,
        PublicType::Curator,
        PublicType::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PublicType::Visionary => "VISIONARY",
            PublicType::Explorer => "EXPLORER",
            PublicType::Curator => "CURATOR",
            PublicType::Social => "SOCIAL",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PublicType::Visionary => &["새로운", "혁신", "미래", "innovative", "future", "new"],
            PublicType::Explorer => &["다양한", "탐험", "모험", "diverse", "explore", "adventure"],
            PublicType::Curator => &["품질", "전통", "클래식", "quality", "traditional", "classic"],
            PublicType::Social => &["공유", "사람들", "함께", "share", "people", "social"],
        }
    }

    pub fn similar_types(self) -> [PublicType; 2] {
        match self {
            PublicType::Visionary => [PublicType::Explorer, PublicType::Curator],
            PublicType::Explorer => [PublicType::Visionary, PublicType::Social],
            PublicType::Curator => [PublicType::Visionary, PublicType::Social],
            PublicType::Social => [PublicType::Explorer, PublicType::Curator],
        }
    }

    pub fn profile(self, language: Language) -> PublicTypeProfile {
        let ko = language == Language::Ko;
        let pick = |k: &'static str, e: &'static str| if ko { k } else { e };
        let list = |k: &[&'static str], e: &[&'static str]| -> Vec<String> {
            (if ko { k } else { e }).iter().map(|s| s.to_string()).collect()
        };

        let (name, description, traits, art_preferences, matches) = match self {
            PublicType::Visionary => (
                pick("비전가", "Visionary"),
                pick(
                    "예술을 변혁적 힘으로 보는 큰 그림을 그리는 사상가",
                    "Big picture thinker who sees art as transformative",
                ),
                list(
                    &["혁신적", "추상적", "미래지향적"],
                    &["innovative", "abstract", "future-focused"],
                ),
                ["contemporary", "conceptual", "experimental"],
                pick(
                    "현대미술, 개념미술, 실험적 작품",
                    "Contemporary art, conceptual pieces, experimental works",
                ),
            ),
            PublicType::Explorer => (
                pick("탐험가", "Explorer"),
                pick(
                    "새로운 예술적 영역을 찾는 모험적 정신",
                    "Adventurous spirit seeking new artistic frontiers",
                ),
                list(
                    &["호기심많은", "실험적", "다양한"],
                    &["curious", "experimental", "diverse"],
                ),
                ["mixed-media", "global-art", "emerging-artists"],
                pick(
                    "믹스미디어, 세계 각국 예술, 신진 작가",
                    "Mixed media, global art, emerging artists",
                ),
            ),
            PublicType::Curator => (
                pick("큐레이터", "Curator"),
                pick(
                    "세련된 미적 감각을 가진 사려깊은 수집가",
                    "Thoughtful collector with refined aesthetic sense",
                ),
                list(
                    &["분석적", "세부지향적", "품질중시"],
                    &["analytical", "detail-oriented", "quality-focused"],
                ),
                ["classical", "museum-quality", "well-established"],
                pick(
                    "고전미술, 박물관급 작품, 확립된 거장들",
                    "Classical art, museum-quality pieces, established masters",
                ),
            ),
            PublicType::Social => (
                pick("소셜", "Social"),
                pick(
                    "공유하기를 좋아하는 공동체 중심의 예술 애호가",
                    "Community-minded art enthusiast who loves sharing",
                ),
                list(
                    &["협력적", "소통지향적", "트렌드인식"],
                    &["collaborative", "communicative", "trend-aware"],
                ),
                ["popular", "shareable", "socially-relevant"],
                pick(
                    "인기작품, 공유가능한 작품, 사회적 관련성",
                    "Popular works, shareable pieces, socially relevant art",
                ),
            ),
        };

        PublicTypeProfile {
            public_type: self,
            name: name.to_string(),
            description: description.to_string(),
            traits,
            art_preferences: art_preferences.iter().map(|s| s.to_string()).collect(),
            matches: matches.to_string(),
        }
    }

    fn insights(self) -> BasicInsights {
        let (strengths, recommendations): ([&str; 3], [&str; 3]) = match self {
            PublicType::Visionary => (
                ["창의적 사고", "미래 지향적", "혁신적 접근"],
                ["현대미술관 방문", "아트페어 참관", "실험적 전시 탐방"],
            ),
            PublicType::Explorer => (
                ["호기심", "개방성", "다양성 추구"],
                ["세계 각국 미술 탐방", "신진 작가 발굴", "다양한 매체 체험"],
            ),
            PublicType::Curator => (
                ["품질 인식", "세부 주의", "심미안"],
                ["고전 거장 작품 감상", "박물관 컬렉션 연구", "아트 히스토리 학습"],
            ),
            PublicType::Social => (
                ["소통 능력", "공감대 형성", "트렌드 파악"],
                ["아트 커뮤니티 참여", "전시 관련 토론", "작품 공유 활동"],
            ),
        };
        BasicInsights {
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
            similar_types: self.similar_types().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTypeProfile {
    #[serde(rename = "type")]
    pub public_type: PublicType,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
    pub art_preferences: Vec<String>,
    pub matches: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInsights {
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub similar_types: Vec<PublicType>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalysis {
    pub primary_type: PublicType,
    pub confidence: u8,
    pub scores: BTreeMap<PublicType, usize>,
    pub responses_analyzed: usize,
    pub profile: PublicTypeProfile,
    pub insights: BasicInsights,
}

/// Keyword-count classifier for the public tier.
#[derive(Debug, Clone, Default)]
pub struct BasicAnalyzer;

impl BasicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, responses: &[String], language: Language) -> Result<BasicAnalysis> {
        let responses = prepare_responses(responses)?;

        let mut scores: BTreeMap<PublicType, usize> =
            PublicType::ALL.iter().map(|t| (*t, 0)).collect();
        for response in &responses {
            for public_type in PublicType::ALL {
                if mentions_any(response, public_type.keywords()) {
                    *scores.entry(public_type).or_insert(0) += 1;
                }
            }
        }

        // Strict maximum wins, so the earliest type in canonical order keeps a tie.
        let mut primary = PublicType::ALL[0];
        let mut best = 0;
        for public_type in PublicType::ALL {
            let count = scores.get(&public_type).copied().unwrap_or(0);
            if count > best {
                best = count;
                primary = public_type;
            }
        }

        let confidence = percent(best, responses.len());
        debug!(
            primary = primary.as_str(),
            confidence,
            responses = responses.len(),
            "Basic analysis classified"
        );

        Ok(BasicAnalysis {
            primary_type: primary,
            confidence,
            scores,
            responses_analyzed: responses.len(),
            profile: primary.profile(language),
            insights: primary.insights(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SayuError;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_way_tie_resolves_to_first_in_order() {
        let analyzer = BasicAnalyzer::new();
        let result = analyzer
            .analyze(
                &answers(&[
                    "새로운 혁신적인 작품이 좋아요",
                    "다양한 탐험을 즐겨요",
                    "전통적인 품질을 중시해요",
                ]),
                Language::Ko,
            )
            .unwrap();

        assert!(result.scores[&PublicType::Visionary] >= 1);
        assert!(result.scores[&PublicType::Explorer] >= 1);
        assert!(result.scores[&PublicType::Curator] >= 1);
        assert_eq!(result.scores[&PublicType::Social], 0);
        assert_eq!(result.primary_type, PublicType::Visionary);
        assert_eq!(result.confidence, 33);
        assert_eq!(result.responses_analyzed, 3);
    }

    #[test]
    fn strict_maximum_wins() {
        let analyzer = BasicAnalyzer::new();
        let result = analyzer
            .analyze(
                &answers(&[
                    "I love to share art with people",
                    "Going together with friends is social fun",
                    "Traditional quality matters",
                ]),
                Language::En,
            )
            .unwrap();
        assert_eq!(result.primary_type, PublicType::Social);
        assert_eq!(result.confidence, 67);
        assert_eq!(result.profile.name, "Social");
        assert_eq!(
            result.insights.similar_types,
            vec![PublicType::Explorer, PublicType::Curator]
        );
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let analyzer = BasicAnalyzer::new();
        let result = analyzer
            .analyze(&answers(&["EXPLORE", "Adventure", "DIVERSE"]), Language::En)
            .unwrap();
        assert_eq!(result.primary_type, PublicType::Explorer);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn no_keywords_is_deterministic() {
        let analyzer = BasicAnalyzer::new();
        let result = analyzer
            .analyze(&answers(&["음", "글쎄요", "모르겠어요"]), Language::Ko)
            .unwrap();
        assert_eq!(result.primary_type, PublicType::Visionary);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn fewer_than_three_responses_is_rejected() {
        let analyzer = BasicAnalyzer::new();
        let err = analyzer
            .analyze(&answers(&["새로운", "다양한"]), Language::Ko)
            .unwrap_err();
        assert!(matches!(err, SayuError::Validation(_)));
    }
}
