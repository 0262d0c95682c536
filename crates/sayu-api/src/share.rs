use sayu_core::{ArchetypeCode, ArchetypeRegistry, Language, SayuError, ShareableCard};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const SHARE_BASE_URL: &str = "https://sayu.art";
pub const TWITTER_MAX_CHARS: usize = 280;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Instagram,
    Twitter,
    Facebook,
    Kakao,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Instagram,
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::Kakao,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SharePlatform::Instagram => "instagram",
            SharePlatform::Twitter => "twitter",
            SharePlatform::Facebook => "facebook",
            SharePlatform::Kakao => "kakao",
        }
    }
}

impl FromStr for SharePlatform {
    type Err = SayuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(SharePlatform::Instagram),
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "facebook" => Ok(SharePlatform::Facebook),
            "kakao" | "kakaotalk" => Ok(SharePlatform::Kakao),
            other => Err(SayuError::Validation(format!(
                "Unsupported platform: {other}. Expected instagram, twitter, facebook or kakao"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SharePayload {
    pub platform: SharePlatform,
    pub text: String,
    pub hashtags: Vec<String>,
    pub url: String,
    pub image: ShareableCard,
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Builds the post text for a completed result. Pure formatting.
pub fn format_share(
    registry: &ArchetypeRegistry,
    code: ArchetypeCode,
    platform: SharePlatform,
    language: Language,
) -> SharePayload {
    let archetype = registry.archetype(code);
    let url = format!(
        "{}/quiz/result/{}?utm_source={}",
        SHARE_BASE_URL,
        code,
        platform.as_str()
    );

    let mut hashtags = vec!["SAYU".to_string(), code.to_string()];
    let (headline, invite) = match language {
        Language::Ko => {
            hashtags.push("예술성격".to_string());
            hashtags.push(archetype.animal.replace(' ', ""));
            (
                format!(
                    "나의 예술 성격은 {} {} ({})!",
                    archetype.emoji, archetype.name, code
                ),
                "당신의 예술 성격도 알아보세요",
            )
        }
        Language::En => {
            hashtags.push("ArtPersonality".to_string());
            hashtags.push(archetype.animal_en.replace(' ', ""));
            (
                format!(
                    "My art personality is {} {} ({})!",
                    archetype.emoji, archetype.name_en, code
                ),
                "Discover yours",
            )
        }
    };
    let tag_line = hashtags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    let text = match platform {
        SharePlatform::Instagram => format!(
            "{headline}\n\n{}\n\n{invite} 👉 {SHARE_BASE_URL}\n\n{tag_line}",
            archetype.description
        ),
        SharePlatform::Twitter => {
            // Hashtags and link must survive, so only the headline is shortened.
            let suffix = format!(" {invite} {url} {tag_line}");
            let budget = TWITTER_MAX_CHARS.saturating_sub(suffix.chars().count());
            truncate_chars(&format!("{}{}", truncate_chars(&headline, budget), suffix), TWITTER_MAX_CHARS)
        }
        SharePlatform::Facebook => format!("{headline} {}\n{invite}", archetype.description),
        SharePlatform::Kakao => format!("{headline}\n{invite}"),
    };

    SharePayload {
        platform,
        text,
        hashtags,
        url,
        image: registry.shareable_card(code),
    }
}
