//! Type codes and the fixed persona table.
//!
//! Every [`TypeCode`] maps to a static [`PersonaRecord`] through an
//! exhaustive match, so the table cannot be missing an entry. String input
//! that is not a known code resolves to the ENFP persona.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::model::{Axis, TraitLetter};

/// One of the sixteen four-letter type codes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCode {
    ISTJ,
    ISFJ,
    INFJ,
    INTJ,
    ISTP,
    ISFP,
    INFP,
    INTP,
    ESTP,
    ESFP,
    ENFP,
    ENTP,
    ESTJ,
    ESFJ,
    ENFJ,
    ENTJ,
}

impl TypeCode {
    pub const ALL: [TypeCode; 16] = [
        TypeCode::ISTJ,
        TypeCode::ISFJ,
        TypeCode::INFJ,
        TypeCode::INTJ,
        TypeCode::ISTP,
        TypeCode::ISFP,
        TypeCode::INFP,
        TypeCode::INTP,
        TypeCode::ESTP,
        TypeCode::ESFP,
        TypeCode::ENFP,
        TypeCode::ENTP,
        TypeCode::ESTJ,
        TypeCode::ESFJ,
        TypeCode::ENFJ,
        TypeCode::ENTJ,
    ];

    /// The code returned for unrecognised input.
    pub const DEFAULT: TypeCode = TypeCode::ENFP;

    /// Build a code from one letter per axis. A letter from the wrong axis
    /// counts as that axis's second letter.
    pub fn from_letters(ei: TraitLetter, sn: TraitLetter, tf: TraitLetter, jp: TraitLetter) -> Self {
        let upper = |letter: TraitLetter, axis: Axis| letter == axis.first();
        match (
            upper(ei, Axis::EI),
            upper(sn, Axis::SN),
            upper(tf, Axis::TF),
            upper(jp, Axis::JP),
        ) {
            (false, true, true, true) => TypeCode::ISTJ,
            (false, true, false, true) => TypeCode::ISFJ,
            (false, false, false, true) => TypeCode::INFJ,
            (false, false, true, true) => TypeCode::INTJ,
            (false, true, true, false) => TypeCode::ISTP,
            (false, true, false, false) => TypeCode::ISFP,
            (false, false, false, false) => TypeCode::INFP,
            (false, false, true, false) => TypeCode::INTP,
            (true, true, true, false) => TypeCode::ESTP,
            (true, true, false, false) => TypeCode::ESFP,
            (true, false, false, false) => TypeCode::ENFP,
            (true, false, true, false) => TypeCode::ENTP,
            (true, true, true, true) => TypeCode::ESTJ,
            (true, true, false, true) => TypeCode::ESFJ,
            (true, false, false, true) => TypeCode::ENFJ,
            (true, false, true, true) => TypeCode::ENTJ,
        }
    }

    /// The four letters in axis order.
    pub fn letters(self) -> [TraitLetter; 4] {
        let code = self.as_str().as_bytes();
        let pick = |i: usize, axis: Axis| {
            if code[i] == axis.first().as_char() as u8 {
                axis.first()
            } else {
                axis.second()
            }
        };
        [
            pick(0, Axis::EI),
            pick(1, Axis::SN),
            pick(2, Axis::TF),
            pick(3, Axis::JP),
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeCode::ISTJ => "ISTJ",
            TypeCode::ISFJ => "ISFJ",
            TypeCode::INFJ => "INFJ",
            TypeCode::INTJ => "INTJ",
            TypeCode::ISTP => "ISTP",
            TypeCode::ISFP => "ISFP",
            TypeCode::INFP => "INFP",
            TypeCode::INTP => "INTP",
            TypeCode::ESTP => "ESTP",
            TypeCode::ESFP => "ESFP",
            TypeCode::ENFP => "ENFP",
            TypeCode::ENTP => "ENTP",
            TypeCode::ESTJ => "ESTJ",
            TypeCode::ESFJ => "ESFJ",
            TypeCode::ENFJ => "ENFJ",
            TypeCode::ENTJ => "ENTJ",
        }
    }

    /// The persona for this code.
    pub fn persona(self) -> &'static PersonaRecord {
        match self {
            TypeCode::INTJ => &ATHENA,
            TypeCode::INTP => &HEPHAESTUS,
            TypeCode::ENTJ => &ZEUS,
            TypeCode::ENTP => &HERMES,
            TypeCode::INFJ => &APOLLO,
            TypeCode::INFP => &PERSEPHONE,
            TypeCode::ENFJ => &HERA,
            TypeCode::ENFP => &APHRODITE,
            TypeCode::ISTJ => &HESTIA,
            TypeCode::ISFJ => &DEMETER,
            TypeCode::ESTJ => &ARES,
            TypeCode::ESFJ => &HEBE,
            TypeCode::ISTP => &ARTEMIS,
            TypeCode::ISFP => &MUSES,
            TypeCode::ESTP => &POSEIDON,
            TypeCode::ESFP => &DIONYSUS,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = String;

    /// Exact match on the upper-case code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("unknown type code: {s}"))
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A persona shown as the quiz result.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRecord {
    #[serde(rename = "mbtiType")]
    pub type_code: TypeCode,
    #[serde(rename = "characterName")]
    pub display_name: &'static str,
    pub emoji: &'static str,
    pub image_url: Option<&'static str>,
    pub description: &'static str,
    pub traits: &'static [&'static str],
}

/// Resolve an untyped code. Unknown codes yield the ENFP persona.
pub fn resolve(code: &str) -> &'static PersonaRecord {
    match code.parse::<TypeCode>() {
        Ok(code) => code.persona(),
        Err(_) => {
            tracing::warn!("unknown type code {code:?}, using {}", TypeCode::DEFAULT);
            TypeCode::DEFAULT.persona()
        }
    }
}

/// All personas in [`TypeCode::ALL`] order.
pub fn all_personas() -> impl Iterator<Item = &'static PersonaRecord> {
    TypeCode::ALL.into_iter().map(TypeCode::persona)
}

macro_rules! image_url {
    ($prompt:literal) => {
        Some(concat!(
            "https://image.pollinations.ai/prompt/",
            $prompt,
            "?width=800&height=600&nologo=true"
        ))
    };
}

static ATHENA: PersonaRecord = PersonaRecord {
    type_code: TypeCode::INTJ,
    display_name: "아테나 (Athena)",
    emoji: "🦉",
    image_url: None,
    description: "지혜와 전략의 여신 아테나처럼, 당신은 뛰어난 통찰력과 전략적 사고를 가진 사람입니다.",
    traits: &[
        "전략적이고 체계적인 계획가",
        "독립적이며 자기 확신이 강함",
        "지식과 능력 개발에 열정적",
        "혁신적인 해결책을 찾는 능력",
    ],
};

static HEPHAESTUS: PersonaRecord = PersonaRecord {
    type_code: TypeCode::INTP,
    display_name: "헤파이스토스 (Hephaestus)",
    emoji: "🔨",
    image_url: image_url!("Greek%20god%20Hephaestus%20blacksmith%20with%20forge%20and%20hammer%2C%20creative%20anime%20style%2C%20warm%20colors%2C%20detailed%20art"),
    description: "대장장이의 신 헤파이스토스처럼, 당신은 창의적이고 논리적인 사고로 새로운 것을 만들어내는 발명가입니다.",
    traits: &[
        "분석적이고 논리적인 사고",
        "호기심이 많고 탐구적",
        "독창적인 아이디어 창출",
        "복잡한 문제 해결을 즐김",
    ],
};

static ZEUS: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ENTJ,
    display_name: "제우스 (Zeus)",
    emoji: "⚡",
    image_url: image_url!("Powerful%20Greek%20god%20Zeus%20with%20lightning%20bolt%2C%20majestic%20anime%20style%2C%20royal%20blue%20colors%2C%20epic%20illustration"),
    description: "신들의 왕 제우스처럼, 당신은 타고난 리더십과 결단력을 가진 지도자입니다.",
    traits: &[
        "타고난 리더십과 추진력",
        "장기적 비전 제시",
        "효율적이고 체계적인 조직 관리",
        "도전적인 목표를 향한 열정",
    ],
};

static HERMES: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ENTP,
    display_name: "헤르메스 (Hermes)",
    emoji: "🪽",
    image_url: image_url!("Greek%20god%20Hermes%20messenger%20with%20winged%20sandals%2C%20dynamic%20anime%20style%2C%20bright%20colors%2C%20energetic%20illustration"),
    description: "전령의 신 헤르메스처럼, 당신은 재치 있고 민첩한 사고로 상황에 빠르게 대응합니다.",
    traits: &[
        "빠른 사고와 재치있는 대화",
        "혁신적이고 창의적인 아이디어",
        "다양한 관점에서 문제 접근",
        "논리적 토론을 즐김",
    ],
};

static APOLLO: PersonaRecord = PersonaRecord {
    type_code: TypeCode::INFJ,
    display_name: "아폴론 (Apollo)",
    emoji: "🎵",
    image_url: image_url!("Greek%20god%20Apollo%20with%20lyre%20and%20sun%2C%20artistic%20anime%20style%2C%20golden%20light%2C%20beautiful%20illustration"),
    description: "예언과 예술의 신 아폴론처럼, 당신은 깊은 통찰력과 이상주의를 가진 선구자입니다.",
    traits: &[
        "깊은 통찰력과 직관",
        "이상주의적 비전 추구",
        "타인에 대한 깊은 이해",
        "창의적이고 예술적 감각",
    ],
};

static PERSEPHONE: PersonaRecord = PersonaRecord {
    type_code: TypeCode::INFP,
    display_name: "페르세포네 (Persephone)",
    emoji: "🌸",
    image_url: image_url!("Greek%20goddess%20Persephone%20with%20flowers%20and%20spring%2C%20gentle%20anime%20style%2C%20pastel%20pink%20colors%2C%20dreamy%20illustration"),
    description: "봄의 여신 페르세포네처럼, 당신은 순수하고 이상적인 가치를 추구하는 몽상가입니다.",
    traits: &[
        "이상주의적 가치관",
        "풍부한 감수성과 상상력",
        "진정성과 순수함 추구",
        "예술적 표현력",
    ],
};

static HERA: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ENFJ,
    display_name: "헤라 (Hera)",
    emoji: "👑",
    image_url: image_url!("Greek%20goddess%20Hera%20queen%20with%20crown%20and%20peacock%2C%20regal%20anime%20style%2C%20royal%20purple%20colors%2C%20majestic%20illustration"),
    description: "신들의 여왕 헤라처럼, 당신은 사람들을 이끌고 조화롭게 만드는 카리스마 있는 리더입니다.",
    traits: &[
        "뛰어난 공감 능력과 리더십",
        "타인의 성장을 돕는 멘토",
        "조화로운 관계 구축",
        "영감을 주는 의사소통",
    ],
};

static APHRODITE: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ENFP,
    display_name: "아프로디테 (Aphrodite)",
    emoji: "💖",
    image_url: image_url!("Greek%20goddess%20Aphrodite%20of%20love%20and%20beauty%2C%20charming%20anime%20style%2C%20pink%20and%20gold%20colors%2C%20romantic%20illustration"),
    description: "사랑과 아름다움의 여신 아프로디테처럼, 당신은 열정적이고 창의적인 에너지로 주변을 밝힙니다.",
    traits: &[
        "열정적이고 창의적",
        "사람들과의 깊은 교감",
        "새로운 경험에 대한 열린 마음",
        "긍정적 에너지 전파",
    ],
};

static HESTIA: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ISTJ,
    display_name: "헤스티아 (Hestia)",
    emoji: "🔥",
    image_url: image_url!("Greek%20goddess%20Hestia%20of%20hearth%20and%20home%20with%20sacred%20flame%2C%20warm%20anime%20style%2C%20orange%20and%20red%20colors%2C%20cozy%20illustration"),
    description: "가정의 여신 헤스티아처럼, 당신은 책임감 있고 신뢰할 수 있는 사람입니다.",
    traits: &[
        "책임감 있고 신뢰할 수 있음",
        "체계적이고 조직적",
        "전통과 규칙 존중",
        "꼼꼼하고 정확한 업무 처리",
    ],
};

static DEMETER: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ISFJ,
    display_name: "데메테르 (Demeter)",
    emoji: "🌾",
    image_url: image_url!("Greek%20goddess%20Demeter%20of%20harvest%20with%20wheat%20and%20nature%2C%20nurturing%20anime%20style%2C%20earth%20tone%20colors%2C%20peaceful%20illustration"),
    description: "수확의 여신 데메테르처럼, 당신은 헌신적이고 따뜻한 마음으로 타인을 돌보는 양육자입니다.",
    traits: &[
        "헌신적이고 배려심 깊음",
        "실용적이고 세심한 돌봄",
        "안정과 조화 추구",
        "타인의 필요를 먼저 생각",
    ],
};

static ARES: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ESTJ,
    display_name: "아레스 (Ares)",
    emoji: "⚔️",
    image_url: image_url!("Greek%20god%20Ares%20of%20war%20with%20armor%20and%20sword%2C%20powerful%20anime%20style%2C%20red%20and%20black%20colors%2C%20warrior%20illustration"),
    description: "전쟁의 신 아레스처럼, 당신은 강력한 추진력과 용기로 목표를 달성하는 실행가입니다.",
    traits: &[
        "강력한 실행력과 결단력",
        "체계적인 조직 관리",
        "효율성과 생산성 추구",
        "명확한 규칙과 질서 선호",
    ],
};

static HEBE: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ESFJ,
    display_name: "헤베 (Hebe)",
    emoji: "🌟",
    image_url: image_url!("Greek%20goddess%20Hebe%20of%20youth%20with%20cup%20of%20nectar%2C%20cheerful%20anime%20style%2C%20bright%20yellow%20colors%2C%20joyful%20illustration"),
    description: "청춘의 여신 헤베처럼, 당신은 활기차고 사교적이며 타인을 돌보는 것을 즐깁니다.",
    traits: &[
        "사교적이고 친화력이 뛰어남",
        "타인을 돕고 배려함",
        "조화로운 분위기 조성",
        "전통과 사회적 가치 존중",
    ],
};

static ARTEMIS: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ISTP,
    display_name: "아르테미스 (Artemis)",
    emoji: "🏹",
    image_url: image_url!("Greek%20goddess%20Artemis%20hunter%20with%20bow%20and%20deer%2C%20independent%20anime%20style%2C%20silver%20and%20green%20colors%2C%20wild%20illustration"),
    description: "사냥의 여신 아르테미스처럼, 당신은 독립적이고 실용적인 문제 해결사입니다.",
    traits: &[
        "독립적이고 자유로움",
        "실용적인 문제 해결",
        "순발력과 적응력",
        "위기 상황에서의 침착함",
    ],
};

static MUSES: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ISFP,
    display_name: "뮤즈 (Muses)",
    emoji: "🎨",
    image_url: image_url!("Greek%20muse%20goddess%20of%20arts%20with%20painting%20and%20music%2C%20artistic%20anime%20style%2C%20rainbow%20colors%2C%20creative%20illustration"),
    description: "예술의 여신 뮤즈처럼, 당신은 감수성이 풍부하고 예술적인 영혼을 가진 사람입니다.",
    traits: &[
        "예술적 감각과 심미안",
        "온화하고 배려심 깊음",
        "현재를 즐기는 여유",
        "자유로운 자기 표현",
    ],
};

static POSEIDON: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ESTP,
    display_name: "포세이돈 (Poseidon)",
    emoji: "🌊",
    image_url: image_url!("Greek%20god%20Poseidon%20of%20sea%20with%20trident%20and%20waves%2C%20dynamic%20anime%20style%2C%20ocean%20blue%20colors%2C%20adventurous%20illustration"),
    description: "바다의 신 포세이돈처럼, 당신은 역동적이고 대담한 모험가입니다.",
    traits: &[
        "역동적이고 에너지 넘침",
        "대담하고 모험적",
        "빠른 판단과 실행",
        "현실적이고 실용적",
    ],
};

static DIONYSUS: PersonaRecord = PersonaRecord {
    type_code: TypeCode::ESFP,
    display_name: "디오니소스 (Dionysus)",
    emoji: "🍇",
    image_url: image_url!("Greek%20god%20Dionysus%20of%20wine%20and%20festivity%20with%20grapes%2C%20festive%20anime%20style%2C%20purple%20and%20green%20colors%2C%20party%20illustration"),
    description: "축제의 신 디오니소스처럼, 당신은 즐거움과 열정으로 가득한 엔터테이너입니다.",
    traits: &[
        "활기차고 즐거움을 추구",
        "사교적이고 친근함",
        "순간을 즐기는 낙천성",
        "창의적인 즉흥성",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const IMAGE_BASE: &str = "https://image.pollinations.ai/prompt/";

    #[test]
    fn every_code_has_its_own_persona() {
        let mut names = HashSet::new();
        for code in TypeCode::ALL {
            let persona = code.persona();
            assert_eq!(persona.type_code, code);
            assert_eq!(persona.traits.len(), 4);
            assert!(names.insert(persona.display_name), "duplicate {}", persona.display_name);
        }
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn resolve_known_codes() {
        assert_eq!(resolve("INFP").display_name, "페르세포네 (Persephone)");
        assert_eq!(resolve("ENTJ").emoji, "⚡");
        for code in TypeCode::ALL {
            assert_eq!(resolve(code.as_str()).type_code, code);
        }
    }

    #[test]
    fn resolve_unknown_defaults_to_enfp() {
        assert_eq!(resolve("XXXX").type_code, TypeCode::ENFP);
        assert_eq!(resolve("").type_code, TypeCode::ENFP);
        assert_eq!(resolve("infp").type_code, TypeCode::ENFP);
        assert_eq!(resolve("ENFP").type_code, TypeCode::ENFP);
    }

    #[test]
    fn letters_round_trip_through_from_letters() {
        for code in TypeCode::ALL {
            let [a, b, c, d] = code.letters();
            assert_eq!(TypeCode::from_letters(a, b, c, d), code);
            let text: String = code.letters().iter().map(|l| l.as_char()).collect();
            assert_eq!(text, code.as_str());
        }
    }

    #[test]
    fn only_athena_lacks_an_image() {
        let without: Vec<_> = all_personas().filter(|p| p.image_url.is_none()).collect();
        assert_eq!(without.len(), 1);
        assert_eq!(without[0].type_code, TypeCode::INTJ);
        for p in all_personas().filter_map(|p| p.image_url) {
            assert!(p.starts_with(IMAGE_BASE));
        }
    }

    #[test]
    fn persona_serializes_to_result_shape() {
        let json = serde_json::to_value(TypeCode::INTJ.persona()).unwrap();
        assert_eq!(json["mbtiType"], "INTJ");
        assert_eq!(json["characterName"], "아테나 (Athena)");
        assert_eq!(json["emoji"], "🦉");
        assert!(json["imageUrl"].is_null());
        assert_eq!(json["traits"].as_array().unwrap().len(), 4);
    }
}
