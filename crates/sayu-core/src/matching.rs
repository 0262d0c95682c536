use crate::archetype::{Archetype, ArchetypeCode, Axis};
use crate::catalog::{Artwork, Exhibition};
use serde::Serialize;

const ABSTRACT_INDICATORS: [&str; 6] = [
    "abstract",
    "non-representational",
    "conceptual",
    "minimalist",
    "expressionist",
    "color field",
];

/// Viewing characteristics derived from catalog metadata. Scores are 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkProfile {
    pub solitude: u8,
    pub discussion: u8,
    pub viewing_freedom: u8,
    pub is_abstract: bool,
    pub is_contemporary: bool,
}

fn clamp_score(value: i32) -> u8 {
    value.clamp(1, 10) as u8
}

impl ArtworkProfile {
    pub fn derive(artwork: &Artwork) -> Self {
        let genre = artwork.genre.to_lowercase();
        let style = artwork.style.to_lowercase();
        let is_abstract = ABSTRACT_INDICATORS
            .iter()
            .any(|i| style.contains(i) || genre.contains(i));
        let is_contemporary = style.contains("contemporary")
            || artwork.has_tag("contemporary")
            || artwork.year.map_or(false, |y| y >= 1960);

        let mut solitude = 5;
        if genre.contains("portrait") {
            solitude += 2;
        }
        if genre.contains("landscape") {
            solitude += 2;
        }
        if genre.contains("still life") {
            solitude += 1;
        }
        if artwork.has_tag("contemplative") {
            solitude += 2;
        }
        if artwork.has_tag("meditative") {
            solitude += 2;
        }
        if artwork.has_tag("solitude") {
            solitude += 1;
        }

        let mut discussion = 5;
        if is_abstract {
            discussion += 2;
        }
        if is_contemporary {
            discussion += 2;
        }
        if artwork.has_tag("controversial") {
            discussion += 3;
        }
        if artwork.has_tag("political") {
            discussion += 2;
        }
        if artwork.has_tag("social") {
            discussion += 1;
        }
        if artwork.cultural_context.is_some() {
            discussion += 1;
        }

        let mut freedom = 5;
        if is_abstract {
            freedom += 2;
        }
        if style.contains("surreal") {
            freedom += 2;
        }
        if artwork.subject.is_none() {
            freedom += 1;
        }
        if artwork
            .composition
            .as_deref()
            .map_or(false, |c| c.eq_ignore_ascii_case("open"))
        {
            freedom += 1;
        }

        Self {
            solitude: clamp_score(solitude),
            discussion: clamp_score(discussion),
            viewing_freedom: clamp_score(freedom),
            is_abstract,
            is_contemporary,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisContribution {
    pub axis: Axis,
    pub letter: char,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkMatch {
    pub artwork_id: String,
    pub apt_type: ArchetypeCode,
    pub score: u8,
    pub breakdown: Vec<AxisContribution>,
    pub profile: ArtworkProfile,
    pub reason: String,
}

fn axis_points(code: ArchetypeCode, axis: Axis, artwork: &Artwork, profile: &ArtworkProfile) -> u8 {
    let first = code.is_first(axis);
    match axis {
        Axis::Social if first => profile.solitude * 2,
        Axis::Social => profile.discussion * 2,
        Axis::Perception if first == profile.is_abstract => 10,
        Axis::Perception => 0,
        Axis::Response if first => artwork.emotional_impact.min(10),
        Axis::Response => artwork.intellectual_depth.min(10),
        Axis::Approach if first => profile.viewing_freedom,
        Axis::Approach => 11 - profile.viewing_freedom,
    }
}

/// Scores an artwork for an archetype. Base 50 plus per-axis points, capped at 100.
pub fn artwork_match(archetype: &Archetype, artwork: &Artwork) -> ArtworkMatch {
    let profile = ArtworkProfile::derive(artwork);
    let breakdown: Vec<AxisContribution> = Axis::ALL
        .iter()
        .map(|axis| AxisContribution {
            axis: *axis,
            letter: archetype.code.letter(*axis),
            points: axis_points(archetype.code, *axis, artwork, &profile),
        })
        .collect();
    let total: u32 = 50 + breakdown.iter().map(|b| u32::from(b.points)).sum::<u32>();
    let score = total.min(100) as u8;

    ArtworkMatch {
        artwork_id: artwork.id.clone(),
        apt_type: archetype.code,
        score,
        reason: match_reason(archetype, artwork, &profile, score),
        breakdown,
        profile,
    }
}

/// Human readable reason for a recommendation, joined with " · ".
pub fn match_reason(
    archetype: &Archetype,
    artwork: &Artwork,
    profile: &ArtworkProfile,
    score: u8,
) -> String {
    let mut reasons = Vec::new();
    if score > 90 {
        reasons.push(format!("{}님께 완벽한 작품이에요!", archetype.name));
    } else if score > 75 {
        reasons.push(format!("{}의 취향과 잘 맞아요", archetype.name));
    }
    if profile.is_abstract && archetype.code.is_first(Axis::Perception) {
        reasons.push("추상적 표현이 매력적".to_string());
    }
    if artwork.emotional_impact > 7 && archetype.code.is_first(Axis::Response) {
        reasons.push("감정적 울림이 깊은 작품".to_string());
    }
    if reasons.is_empty() {
        reasons.push(format!("{}님께 추천", archetype.name));
    }
    reasons.join(" · ")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionMatch {
    pub exhibition_id: String,
    pub apt_type: ArchetypeCode,
    pub score: u8,
    pub reasons: Vec<String>,
}

pub fn exhibition_match(archetype: &Archetype, exhibition: &Exhibition) -> ExhibitionMatch {
    let code = archetype.code;
    let mut score: u32 = 50;
    let mut reasons = Vec::new();

    if code.is_first(Axis::Social) {
        if exhibition.quiet {
            score += 15;
            reasons.push("조용한 관람 환경".to_string());
        }
    } else if exhibition.has_docent {
        score += 15;
        reasons.push("도슨트 투어 제공".to_string());
    }

    let contemporary = exhibition.has_tag("contemporary") || exhibition.has_tag("abstract");
    if code.is_first(Axis::Perception) {
        if contemporary {
            score += 10;
            reasons.push("현대적 작품 전시".to_string());
        }
    } else if exhibition.has_tag("traditional") || exhibition.has_tag("historical") {
        score += 10;
    }

    if code.is_first(Axis::Response) {
        if exhibition.has_tag("emotional") || exhibition.has_tag("meditative") {
            score += 10;
            reasons.push("감성적인 작품 구성".to_string());
        }
    } else if exhibition.has_tag("historical") || exhibition.has_docent {
        score += 10;
    }

    // Guided tours suit structured visitors, unguided halls suit free flow.
    if code.is_first(Axis::Approach) != exhibition.has_docent {
        score += 5;
    }
    score += exhibition.avg_rating.clamp(0.0, 5.0).round() as u32;

    if reasons.is_empty() {
        reasons.push(format!("{}님께 추천", archetype.name));
    }

    ExhibitionMatch {
        exhibition_id: exhibition.id.clone(),
        apt_type: code,
        score: score.min(100) as u8,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::ArchetypeRegistry;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn artwork(genre: &str, style: &str, tags: &[&str]) -> Artwork {
        Artwork {
            id: "a1".into(),
            title: "Untitled".into(),
            artist: "Anon".into(),
            year: Some(1900),
            genre: genre.into(),
            style: style.into(),
            subject: Some("figure".into()),
            composition: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cultural_context: None,
            emotional_impact: 9,
            intellectual_depth: 4,
            view_count: 0,
            like_count: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            image_url: None,
        }
    }

    #[test]
    fn profile_scores_follow_metadata() {
        let portrait = artwork("portrait", "Baroque", &["contemplative", "meditative"]);
        let profile = ArtworkProfile::derive(&portrait);
        assert_eq!(profile.solitude, 10);
        assert_eq!(profile.discussion, 5);
        assert!(!profile.is_abstract);

        let mut abstract_work = artwork("abstract", "Color Field", &["controversial"]);
        abstract_work.subject = None;
        abstract_work.composition = Some("open".into());
        let profile = ArtworkProfile::derive(&abstract_work);
        assert!(profile.is_abstract);
        assert_eq!(profile.discussion, 10);
        assert_eq!(profile.viewing_freedom, 9);
        assert_eq!(profile.solitude, 5);
    }

    #[test]
    fn lone_abstract_emotional_flow_prefers_rothko_like_work() {
        let registry = ArchetypeRegistry::standard();
        let laef = registry.get("LAEF").unwrap();
        let srmc = registry.get("SRMC").unwrap();
        let mut work = artwork("abstract", "Color Field", &["meditative", "solitude"]);
        work.subject = None;
        work.composition = Some("open".into());

        let laef_match = artwork_match(laef, &work);
        let srmc_match = artwork_match(srmc, &work);
        assert!(laef_match.score > srmc_match.score);
        assert_eq!(laef_match.breakdown.len(), 4);
        assert!(laef_match.reason.contains("추상적 표현이 매력적"));
        assert!(laef_match.reason.contains("감정적 울림이 깊은 작품"));
        assert!(laef_match.score <= 100);
    }

    #[test]
    fn reason_falls_back_to_name() {
        let registry = ArchetypeRegistry::standard();
        let lrmc = registry.get("LRMC").unwrap();
        let work = artwork("portrait", "Baroque", &[]);
        let profile = ArtworkProfile::derive(&work);
        assert_eq!(
            match_reason(lrmc, &work, &profile, 60),
            "학구적 연구자님께 추천"
        );
    }

    #[test]
    fn exhibition_reasons_depend_on_axes() {
        let registry = ArchetypeRegistry::standard();
        let exhibition = Exhibition {
            id: "e1".into(),
            title: "Quiet Colors".into(),
            venue: "Museum".into(),
            location: "seoul".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            tags: vec!["contemporary".into(), "emotional".into()],
            has_docent: true,
            quiet: true,
            avg_rating: 4.4,
            review_count: 10,
        };
        let laef = exhibition_match(registry.get("LAEF").unwrap(), &exhibition);
        assert_eq!(
            laef.reasons,
            vec!["조용한 관람 환경", "현대적 작품 전시", "감성적인 작품 구성"]
        );
        let srmc = exhibition_match(registry.get("SRMC").unwrap(), &exhibition);
        assert_eq!(srmc.reasons, vec!["도슨트 투어 제공"]);
        assert!(laef.score <= 100 && srmc.score <= 100);
    }
}
