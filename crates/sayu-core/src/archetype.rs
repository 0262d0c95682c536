use crate::{Result, SayuError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The four cognitive axes of an APT code, in code-letter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// L (lone) vs S (social) viewing.
    Social,
    /// A (abstract) vs R (representational) works.
    Perception,
    /// E (emotional) vs M (meaning) response.
    Response,
    /// F (flow) vs C (constructive) approach.
    Approach,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Social, Axis::Perception, Axis::Response, Axis::Approach];

    pub fn position(self) -> usize {
        match self {
            Axis::Social => 0,
            Axis::Perception => 1,
            Axis::Response => 2,
            Axis::Approach => 3,
        }
    }

    /// (first, second) letters. The first letter is bit value 0 in canonical order.
    pub fn letters(self) -> (u8, u8) {
        match self {
            Axis::Social => (b'L', b'S'),
            Axis::Perception => (b'A', b'R'),
            Axis::Response => (b'E', b'M'),
            Axis::Approach => (b'F', b'C'),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Social => "L/S",
            Axis::Perception => "A/R",
            Axis::Response => "E/M",
            Axis::Approach => "F/C",
        }
    }
}

/// A validated four-letter archetype code such as `LAEF`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArchetypeCode([u8; 4]);

impl ArchetypeCode {
    pub const COUNT: usize = 16;

    /// Parses a code case-insensitively. Returns `None` for anything that is not
    /// one of the sixteen valid combinations.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() != 4 || !raw.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 4];
        for (i, b) in raw.bytes().enumerate() {
            let upper = b.to_ascii_uppercase();
            let (first, second) = Axis::ALL[i].letters();
            if upper != first && upper != second {
                return None;
            }
            bytes[i] = upper;
        }
        Some(Self(bytes))
    }

    /// Builds the code at `index` in canonical order (LAEF = 0 ... SRMC = 15).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        let mut bytes = [0u8; 4];
        for axis in Axis::ALL {
            let bit = (index >> (3 - axis.position())) & 1;
            let (first, second) = axis.letters();
            bytes[axis.position()] = if bit == 0 { first } else { second };
        }
        Some(Self(bytes))
    }

    pub fn index(&self) -> usize {
        Axis::ALL.iter().fold(0, |acc, axis| {
            let (first, _) = axis.letters();
            let bit = usize::from(self.0[axis.position()] != first);
            (acc << 1) | bit
        })
    }

    /// All sixteen codes in canonical order.
    pub fn all() -> impl Iterator<Item = ArchetypeCode> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    pub fn valid_codes() -> Vec<String> {
        Self::all().map(|c| c.to_string()).collect()
    }

    pub fn letter(&self, axis: Axis) -> char {
        char::from(self.0[axis.position()])
    }

    /// True when this code carries the first letter on `axis` (L, A, E or F).
    pub fn is_first(&self, axis: Axis) -> bool {
        self.0[axis.position()] == axis.letters().0
    }

    pub fn differs(&self, other: &ArchetypeCode, axis: Axis) -> bool {
        self.0[axis.position()] != other.0[axis.position()]
    }

    pub fn shared_axes(&self, other: &ArchetypeCode) -> usize {
        Axis::ALL.iter().filter(|a| !self.differs(other, **a)).count()
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Display for ArchetypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ArchetypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArchetypeCode({})", self.as_str())
    }
}

impl FromStr for ArchetypeCode {
    type Err = SayuError;

    fn from_str(s: &str) -> Result<Self> {
        ArchetypeCode::parse(s).ok_or_else(|| SayuError::UnknownArchetype {
            code: s.to_string(),
            valid_codes: ArchetypeCode::valid_codes(),
        })
    }
}

impl Serialize for ArchetypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArchetypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub code: ArchetypeCode,
    pub name: String,
    pub name_en: String,
    pub animal: String,
    pub animal_en: String,
    pub emoji: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub preferred_styles: Vec<String>,
}

/// Social card image generated for an archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableCard {
    pub url: String,
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

struct Definition {
    name: &'static str,
    name_en: &'static str,
    animal: &'static str,
    animal_en: &'static str,
    emoji: &'static str,
    description: &'static str,
    characteristics: [&'static str; 4],
    styles: [&'static str; 4],
}

// Canonical order, index == ArchetypeCode::index().
const DEFINITIONS: [Definition; 16] = [
    Definition {
        name: "몽환적 방랑자",
        name_en: "Dreamy Wanderer",
        animal: "여우",
        animal_en: "Fox",
        emoji: "🦊",
        description: "혼자서 추상 작품을 감정적으로 자유롭게 감상",
        characteristics: ["독립적", "감성적", "자유로운", "직관적"],
        styles: ["추상표현주의", "초현실주의", "미니멀리즘", "인상주의"],
    },
    Definition {
        name: "감성 큐레이터",
        name_en: "Emotional Curator",
        animal: "고양이",
        animal_en: "Cat",
        emoji: "🐱",
        description: "혼자서 추상 작품을 감정적으로 체계적으로 감상",
        characteristics: ["섬세한", "체계적", "감성적", "분석적"],
        styles: ["색면추상", "미니멀리즘", "서정추상", "모노크롬"],
    },
    Definition {
        name: "직관적 탐구자",
        name_en: "Intuitive Explorer",
        animal: "올빼미",
        animal_en: "Owl",
        emoji: "🦉",
        description: "혼자서 추상 작품의 의미를 자유롭게 탐구",
        characteristics: ["탐구적", "자유로운", "철학적", "개방적"],
        styles: ["개념미술", "초현실주의", "다다이즘", "설치미술"],
    },
    Definition {
        name: "철학적 수집가",
        name_en: "Philosophical Collector",
        animal: "거북이",
        animal_en: "Turtle",
        emoji: "🐢",
        description: "혼자서 추상 작품의 의미를 체계적으로 정리",
        characteristics: ["체계적", "철학적", "수집가", "분석적"],
        styles: ["개념미술", "구성주의", "미니멀리즘", "기하추상"],
    },
    Definition {
        name: "고독한 관찰자",
        name_en: "Solitary Observer",
        animal: "카멜레온",
        animal_en: "Chameleon",
        emoji: "🦎",
        description: "혼자서 구상 작품을 감정적으로 자유롭게 관찰",
        characteristics: ["관찰력", "감성적", "독립적", "자유로운"],
        styles: ["인상주의", "풍경화", "사진", "낭만주의"],
    },
    Definition {
        name: "섬세한 감정가",
        name_en: "Delicate Connoisseur",
        animal: "고슴도치",
        animal_en: "Hedgehog",
        emoji: "🦔",
        description: "혼자서 구상 작품을 감정적으로 체계적으로 음미",
        characteristics: ["섬세한", "체계적", "감상적", "깊이있는"],
        styles: ["사실주의", "정물화", "초상화", "고전주의"],
    },
    Definition {
        name: "디지털 탐험가",
        name_en: "Digital Explorer",
        animal: "문어",
        animal_en: "Octopus",
        emoji: "🐙",
        description: "혼자서 구상 작품의 의미를 자유롭게 분석",
        characteristics: ["분석적", "탐험적", "기술적", "자유로운"],
        styles: ["디지털아트", "미디어아트", "사진", "팝아트"],
    },
    Definition {
        name: "학구적 연구자",
        name_en: "Academic Researcher",
        animal: "비버",
        animal_en: "Beaver",
        emoji: "🦫",
        description: "혼자서 구상 작품의 의미를 체계적으로 연구",
        characteristics: ["학구적", "체계적", "연구적", "정밀한"],
        styles: ["르네상스", "바로크", "고전주의", "역사화"],
    },
    Definition {
        name: "감정의 물결",
        name_en: "The Emotional Current",
        animal: "나비",
        animal_en: "Butterfly",
        emoji: "🦋",
        description: "함께 추상 작품의 감정을 자유롭게 나눔",
        characteristics: ["사교적", "감성적", "나눔", "자유로운"],
        styles: ["추상표현주의", "색면추상", "팝아트", "퍼포먼스"],
    },
    Definition {
        name: "감정의 건축가",
        name_en: "The Emotional Architect",
        animal: "펭귄",
        animal_en: "Penguin",
        emoji: "🐧",
        description: "함께 추상 작품의 감정을 체계적으로 공유",
        characteristics: ["네트워킹", "체계적", "감성적", "연결"],
        styles: ["기하추상", "옵아트", "미니멀리즘", "설치미술"],
    },
    Definition {
        name: "의미의 직조자",
        name_en: "The Meaning Weaver",
        animal: "앵무새",
        animal_en: "Parrot",
        emoji: "🦜",
        description: "함께 추상 작품의 의미를 자유롭게 전파",
        characteristics: ["전파력", "영감적", "자유로운", "열정적"],
        styles: ["개념미술", "퍼포먼스", "설치미술", "스트리트아트"],
    },
    Definition {
        name: "지혜의 건축가",
        name_en: "The Wisdom Architect",
        animal: "사슴",
        animal_en: "Deer",
        emoji: "🦌",
        description: "함께 추상 작품의 의미를 체계적으로 기획",
        characteristics: ["기획력", "체계적", "문화적", "조직적"],
        styles: ["구성주의", "바우하우스", "개념미술", "기하추상"],
    },
    Definition {
        name: "마음의 여행자",
        name_en: "The Heart Wanderer",
        animal: "강아지",
        animal_en: "Dog",
        emoji: "🐕",
        description: "함께 구상 작품을 감정적으로 자유롭게 즐김",
        characteristics: ["열정적", "사교적", "즐거운", "자유로운"],
        styles: ["인상주의", "팝아트", "일러스트레이션", "풍경화"],
    },
    Definition {
        name: "감정의 치유사",
        name_en: "The Emotional Healer",
        animal: "오리",
        animal_en: "Duck",
        emoji: "🦆",
        description: "함께 구상 작품을 감정적으로 체계적으로 안내",
        characteristics: ["안내력", "따뜻한", "체계적", "배려"],
        styles: ["사실주의", "초상화", "민화", "풍속화"],
    },
    Definition {
        name: "문화의 시간여행자",
        name_en: "The Cultural Time Traveler",
        animal: "코끼리",
        animal_en: "Elephant",
        emoji: "🐘",
        description: "함께 구상 작품의 의미를 자유롭게 가르침",
        characteristics: ["가르침", "지식", "자유로운", "멘토링"],
        styles: ["역사화", "르네상스", "현대미술", "사진"],
    },
    Definition {
        name: "마스터 도슨트",
        name_en: "The Master Docent",
        animal: "독수리",
        animal_en: "Eagle",
        emoji: "🦅",
        description: "함께 구상 작품의 의미를 체계적으로 교육",
        characteristics: ["교육적", "체계적", "조직적", "전문적"],
        styles: ["고전주의", "바로크", "르네상스", "신고전주의"],
    },
];

/// Immutable set of the sixteen archetypes. Built once at startup.
#[derive(Debug, Clone)]
pub struct ArchetypeRegistry {
    archetypes: Vec<Archetype>,
}

impl ArchetypeRegistry {
    pub fn standard() -> Self {
        let archetypes = ArchetypeCode::all()
            .zip(DEFINITIONS.iter())
            .map(|(code, def)| Archetype {
                code,
                name: def.name.to_string(),
                name_en: def.name_en.to_string(),
                animal: def.animal.to_string(),
                animal_en: def.animal_en.to_string(),
                emoji: def.emoji.to_string(),
                description: def.description.to_string(),
                characteristics: def.characteristics.iter().map(|s| s.to_string()).collect(),
                preferred_styles: def.styles.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { archetypes }
    }

    pub fn all(&self) -> &[Archetype] {
        &self.archetypes
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn parse(&self, raw: &str) -> Result<ArchetypeCode> {
        raw.parse()
    }

    /// Looks up an archetype by its textual code.
    pub fn get(&self, raw: &str) -> Result<&Archetype> {
        let code = self.parse(raw)?;
        Ok(self.archetype(code))
    }

    pub fn archetype(&self, code: ArchetypeCode) -> &Archetype {
        &self.archetypes[code.index()]
    }

    pub fn shareable_card(&self, code: ArchetypeCode) -> ShareableCard {
        let archetype = self.archetype(code);
        ShareableCard {
            url: format!("https://sayu.art/api/cards/{}.png", code),
            alt_text: format!("{} - SAYU Art Personality", archetype.name),
            width: 1200,
            height: 630,
        }
    }
}

impl Default for ArchetypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
