//! 불규칙 활용 변형기
//!
//! 여덟 가지 불규칙(ㅅ, ㄷ, ㅂ, ㅎ, 러, 우, 여, 르)을 하나의
//! 열거형 뒤에 모았다. 철자가 규칙 활용과 겹치는 다섯 가지
//! (ㅅ/ㄷ/ㅂ/ㅎ/러)는 형태소 분석기의 태그로 선택되고,
//! 나머지 셋(우/여/르)은 태그 없이 어간 형태로 판정된다.

use crate::core::jamo::{
    CHO_RIEUL, JONG_DIGEUT, JONG_HIEUT, JONG_RIEUL, JONG_SIOT, JUNG_A, JUNG_AE, JUNG_E, JUNG_EO,
    JUNG_EU, JUNG_O, JUNG_U, JUNG_YA, JUNG_YAE, JUNG_YE, JUNG_YEO,
};
use crate::core::jamo::{is_syllable, CHO_FILLER, JONG_BIEUP};
use crate::core::syllable::{last_syllable, replace_last, split_last, Syllable};
use crate::dict::ReuDict;
use crate::error::ConjugateError;
use crate::harmony::{harmonize, harmonize_series, stem_is_bright};
use crate::rules::regular::split_first;

/// 분석기 태그로 지정되는 불규칙 (철자 중의적 규칙)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularTag {
    /// ㅅ불규칙 (짓다)
    Siot,
    /// ㄷ불규칙 (듣다)
    Digeut,
    /// ㅂ불규칙 (돕다)
    Bieup,
    /// ㅎ불규칙 (파랗다)
    Hieut,
    /// 러불규칙 (이르다)
    Reo,
}

impl IrregularTag {
    /// 분석기 품사 태그 문자열에서 불규칙 태그 추출
    /// "VV+ㅅ불규칙" 같은 복합 태그와 "ㅅ" 단독 표기를 모두 받는다
    pub fn from_pos_tag(tag: &str) -> Option<Self> {
        match tag {
            "ㅅ" => return Some(IrregularTag::Siot),
            "ㄷ" => return Some(IrregularTag::Digeut),
            "ㅂ" => return Some(IrregularTag::Bieup),
            "ㅎ" => return Some(IrregularTag::Hieut),
            "러" => return Some(IrregularTag::Reo),
            _ => {}
        }
        if tag.contains("ㅅ불규칙") {
            Some(IrregularTag::Siot)
        } else if tag.contains("ㄷ불규칙") {
            Some(IrregularTag::Digeut)
        } else if tag.contains("ㅂ불규칙") {
            Some(IrregularTag::Bieup)
        } else if tag.contains("ㅎ불규칙") {
            Some(IrregularTag::Hieut)
        } else if tag.contains("러불규칙") {
            Some(IrregularTag::Reo)
        } else {
            None
        }
    }

    /// 대응하는 변형 규칙
    pub fn rule(self) -> Irregular {
        match self {
            IrregularTag::Siot => Irregular::Siot,
            IrregularTag::Digeut => Irregular::Digeut,
            IrregularTag::Bieup => Irregular::Bieup,
            IrregularTag::Hieut => Irregular::Hieut,
            IrregularTag::Reo => Irregular::Reo,
        }
    }
}

/// 불규칙 변형 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Irregular {
    /// ㅅ 탈락: 짓 + 어 → 지어
    Siot,
    /// ㄷ → ㄹ: 듣 + 어 → 들어
    Digeut,
    /// ㅂ → 오/우 활음: 돕 + 아 → 도와
    Bieup,
    /// ㅎ 탈락 + 모음 융합: 파랗 + 아 → 파래
    Hieut,
    /// 러 불규칙: 이르 + 어 → 이르러
    Reo,
    /// 우 불규칙: 푸 + 어 → 퍼 (푸다 단일 어간)
    U,
    /// 여 불규칙: 하 + 어 → 해
    Yeo,
    /// 르 불규칙: 흐르 + 어 → 흘러 (사전 등재 어간)
    Reu,
}

/// ㅂ불규칙에서 항상 오 활음을 쓰는 어휘 예외
const BIEUP_O_GLIDE_STEMS: &[&str] = &["돕", "곱"];

impl Irregular {
    /// 어간/어미 형태가 이 규칙의 적용 조건을 만족하는지
    ///
    /// 모음 어미임은 디스패처가 보장한다. 여기서는 어간 모양과
    /// 규칙별 어미 제약만 본다.
    pub fn matches(self, stem: &str, ending: &str, dict: &ReuDict) -> bool {
        let tail = match last_syllable(stem) {
            Some(s) => s,
            None => return false,
        };
        match self {
            Irregular::Siot => tail.jong == JONG_SIOT,
            Irregular::Digeut => tail.jong == JONG_DIGEUT,
            Irregular::Bieup => tail.jong == JONG_BIEUP,
            Irregular::Hieut => tail.jong == JONG_HIEUT,
            Irregular::Reo => stem.chars().last() == Some('르'),
            Irregular::U => {
                stem == "푸" && ending_head_jung(ending) == Some(JUNG_EO)
            }
            Irregular::Yeo => {
                stem.chars().last() == Some('하')
                    && matches!(ending_head_jung(ending), Some(JUNG_A | JUNG_EO))
            }
            Irregular::Reu => {
                stem.chars().last() == Some('르')
                    && stem.chars().count() >= 2
                    && dict.contains(stem)
            }
        }
    }

    /// 불규칙 변형 적용 (모음 어미 전제)
    pub fn apply(self, stem: &str, ending: &str) -> Result<String, ConjugateError> {
        match self {
            Irregular::Siot => apply_siot(stem, ending),
            Irregular::Digeut => apply_digeut(stem, ending),
            Irregular::Bieup => apply_bieup(stem, ending),
            Irregular::Hieut => apply_hieut(stem, ending),
            Irregular::Reo => apply_reo(stem, ending),
            Irregular::U => apply_u(stem, ending),
            Irregular::Yeo => apply_yeo(stem, ending),
            Irregular::Reu => apply_reu(stem, ending),
        }
    }
}

/// 어미 첫 음절의 중성 (모음 어미가 아니면 None)
fn ending_head_jung(ending: &str) -> Option<u32> {
    let first = ending.chars().next()?;
    match Syllable::decompose(first) {
        Ok(s) if s.is_filler_lead() => Some(s.jung),
        _ => None,
    }
}

/// 어미를 (첫 음절, 나머지)로 분해
fn ending_head(ending: &str) -> Result<(Syllable, &str), ConjugateError> {
    let (first, rest) = split_first(ending).ok_or(ConjugateError::EmptyInput("어미"))?;
    Ok((Syllable::decompose(first)?, rest))
}

/// ㅅ불규칙: 받침 ㅅ 탈락, 어미는 축약 없이 그대로 붙는다 (짓 + 어 → 지어)
fn apply_siot(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let harmonized = harmonize(stem, ending);
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;
    let mut out = replace_last(stem, tail.open())?;
    out.push_str(&harmonized);
    Ok(out)
}

/// ㄷ불규칙: 받침 ㄷ → ㄹ (듣 + 어 → 들어)
fn apply_digeut(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let harmonized = harmonize(stem, ending);
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;
    let mut out = replace_last(stem, tail.with_jong(JONG_RIEUL))?;
    out.push_str(&harmonized);
    Ok(out)
}

/// ㅂ불규칙: 받침 ㅂ이 오/우 활음으로 바뀌고 어미 모음과 축약된다
///
/// 돕/곱과 1음절 양성 어간은 오 (돕 + 아 → 도와),
/// 그 밖에는 우 (아름답 + 어 → 아름다워).
fn apply_bieup(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let syllable_count = stem.chars().filter(|&c| is_syllable(c)).count();
    let o_glide = BIEUP_O_GLIDE_STEMS.contains(&stem)
        || (syllable_count <= 1 && stem_is_bright(stem));
    let glide_jung = if o_glide { JUNG_O } else { JUNG_U };

    // 활음 계열에 맞춰 어미 계열을 강제 (오→아, 우→어)
    let harmonized = harmonize_series(ending, o_glide);
    let (head, rest) = ending_head(&harmonized)?;

    let merged_jung = if head.jung == JUNG_EU {
        // ㅡ 어미는 오/우 구분과 무관하게 우로 흡수된다 (돕 + 으면 → 도우면)
        JUNG_U
    } else {
        match (glide_jung, head.jung) {
            (JUNG_O, JUNG_A) => 9,   // ㅗ + ㅏ = ㅘ
            (JUNG_U, JUNG_EO) => 14, // ㅜ + ㅓ = ㅝ
            _ => glide_jung,
        }
    };

    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;
    let mut out = replace_last(stem, tail.open())?;
    out.push(Syllable::new(CHO_FILLER, merged_jung, head.jong).compose()?);
    out.push_str(rest);
    Ok(out)
}

/// ㅎ불규칙 융합 테이블: 어간 모음 + 어미 모음 → 융합 모음
fn hieut_fusion(stem_jung: u32, ending_jung: u32) -> Option<u32> {
    match (stem_jung, ending_jung) {
        (JUNG_A, JUNG_A) => Some(JUNG_AE),   // 파랗 + 아 → 파래
        (JUNG_EO, JUNG_EO) => Some(JUNG_E),  // ㅓ + ㅓ = ㅔ
        (JUNG_YA, JUNG_A) => Some(JUNG_YAE), // 하얗 + 아 → 하얘
        (JUNG_YEO, JUNG_EO) => Some(JUNG_YE), // ㅕ + ㅓ = ㅖ
        _ => None,
    }
}

/// ㅎ불규칙: 받침 ㅎ 탈락 후 모음 융합 (파랗 + 아 → 파래)
///
/// ㅡ 어미는 융합 대신 ㅡ가 탈락하고 받침만 넘어온다 (파랗 + 은 → 파란)
fn apply_hieut(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let harmonized = harmonize(stem, ending);
    let (head, rest) = ending_head(&harmonized)?;
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;

    let merged = if head.jung == JUNG_EU {
        tail.open().with_jong(head.jong)
    } else {
        match hieut_fusion(tail.jung, head.jung) {
            Some(fused) => tail.open().with_jung(fused).with_jong(head.jong),
            None => {
                // 융합 불가 조합: ㅎ만 떨구고 잇는다
                let mut out = replace_last(stem, tail.open())?;
                out.push_str(&harmonized);
                return Ok(out);
            }
        }
    };

    let mut out = replace_last(stem, merged)?;
    out.push_str(rest);
    Ok(out)
}

/// 러불규칙: 어미가 러-계열로 길어진다 (이르 + 어 → 이르러)
fn apply_reo(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    // 어미는 조화 예측과 무관하게 어-계열
    let harmonized = harmonize_series(ending, false);
    let (head, rest) = ending_head(&harmonized)?;

    let mut out = String::with_capacity(stem.len() + ending.len() + 3);
    out.push_str(stem);
    out.push(Syllable::new(CHO_RIEUL, head.jung, head.jong).compose()?);
    out.push_str(rest);
    Ok(out)
}

/// 우불규칙: 어간 모음 ㅜ가 통째로 탈락 (푸 + 어 → 퍼)
fn apply_u(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let (head, rest) = ending_head(ending)?;
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;

    let merged = Syllable::new(tail.cho, head.jung, head.jong);
    let mut out = replace_last(stem, merged)?;
    out.push_str(rest);
    Ok(out)
}

/// 여불규칙: 하 + 어/아 → 해 (어미 모음이 ㅐ로 강제)
fn apply_yeo(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let (head, rest) = ending_head(ending)?;
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;

    let merged = tail.with_jung(JUNG_AE).with_jong(head.jong);
    let mut out = replace_last(stem, merged)?;
    out.push_str(rest);
    Ok(out)
}

/// 르불규칙: 르 앞 음절에 받침 ㄹ이 붙고 어미 초성도 ㄹ이 된다
/// (흐르 + 어 → 흘러, 모르 + 아 → 몰라)
fn apply_reu(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    // 모음조화는 르 앞 음절이 결정한다
    let harmonized = harmonize(stem, ending);
    let (head, rest) = ending_head(&harmonized)?;

    let (base, _) = split_last(stem).ok_or(ConjugateError::EmptyInput("어간"))?;
    let pre = last_syllable(base)
        .ok_or_else(|| ConjugateError::NotHangul(base.chars().last().unwrap_or(' ')))?;

    let mut out = replace_last(base, pre.with_jong(JONG_RIEUL))?;
    out.push(Syllable::new(CHO_RIEUL, head.jung, head.jong).compose()?);
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> ReuDict {
        ReuDict::default()
    }

    #[test]
    fn test_siot() {
        assert_eq!(apply_siot("짓", "어").unwrap(), "지어");
        assert_eq!(apply_siot("낫", "아").unwrap(), "나아");
        assert_eq!(apply_siot("잇", "어").unwrap(), "이어");
        // 축약 없음: 지어 (져 아님)
    }

    #[test]
    fn test_digeut() {
        assert_eq!(apply_digeut("듣", "어").unwrap(), "들어");
        assert_eq!(apply_digeut("걷", "어").unwrap(), "걸어");
        assert_eq!(apply_digeut("묻", "었다").unwrap(), "물었다");
    }

    #[test]
    fn test_bieup_o_glide() {
        assert_eq!(apply_bieup("돕", "아").unwrap(), "도와");
        // 계열이 달라도 활음이 조화를 강제한다
        assert_eq!(apply_bieup("돕", "어").unwrap(), "도와");
        assert_eq!(apply_bieup("돕", "았다").unwrap(), "도왔다");
        assert_eq!(apply_bieup("곱", "아서").unwrap(), "고와서");
    }

    #[test]
    fn test_bieup_u_glide() {
        assert_eq!(apply_bieup("아름답", "어").unwrap(), "아름다워");
        assert_eq!(apply_bieup("춥", "어").unwrap(), "추워");
        assert_eq!(apply_bieup("덥", "어서").unwrap(), "더워서");
    }

    #[test]
    fn test_bieup_eu_ending() {
        assert_eq!(apply_bieup("돕", "으면").unwrap(), "도우면");
        assert_eq!(apply_bieup("춥", "은").unwrap(), "추운");
    }

    #[test]
    fn test_hieut() {
        assert_eq!(apply_hieut("파랗", "아").unwrap(), "파래");
        assert_eq!(apply_hieut("빨갛", "아").unwrap(), "빨개");
        assert_eq!(apply_hieut("하얗", "아").unwrap(), "하얘");
        assert_eq!(apply_hieut("파랗", "았다").unwrap(), "파랬다");
    }

    #[test]
    fn test_hieut_eu_ending() {
        assert_eq!(apply_hieut("파랗", "은").unwrap(), "파란");
        assert_eq!(apply_hieut("파랗", "으면").unwrap(), "파라면");
    }

    #[test]
    fn test_reo() {
        assert_eq!(apply_reo("이르", "어").unwrap(), "이르러");
        assert_eq!(apply_reo("푸르", "어").unwrap(), "푸르러");
        assert_eq!(apply_reo("이르", "었다").unwrap(), "이르렀다");
    }

    #[test]
    fn test_u() {
        assert_eq!(apply_u("푸", "어").unwrap(), "퍼");
        assert_eq!(apply_u("푸", "었다").unwrap(), "펐다");
    }

    #[test]
    fn test_yeo() {
        assert_eq!(apply_yeo("하", "어").unwrap(), "해");
        assert_eq!(apply_yeo("하", "었다").unwrap(), "했다");
        assert_eq!(apply_yeo("공부하", "어요").unwrap(), "공부해요");
    }

    #[test]
    fn test_reu() {
        assert_eq!(apply_reu("흐르", "어").unwrap(), "흘러");
        assert_eq!(apply_reu("부르", "어").unwrap(), "불러");
        // 르 앞 음절이 양성이면 아-계열
        assert_eq!(apply_reu("모르", "아").unwrap(), "몰라");
        assert_eq!(apply_reu("모르", "어").unwrap(), "몰라");
        assert_eq!(apply_reu("다르", "아서").unwrap(), "달라서");
    }

    #[test]
    fn test_matches() {
        let d = dict();
        assert!(Irregular::Siot.matches("짓", "어", &d));
        assert!(!Irregular::Siot.matches("먹", "어", &d));
        assert!(Irregular::U.matches("푸", "어", &d));
        assert!(!Irregular::U.matches("푸", "으면", &d));
        assert!(Irregular::Yeo.matches("공부하", "어", &d));
        assert!(Irregular::Reu.matches("흐르", "어", &d));
        // 사전에 없는 르 어간은 르불규칙이 아니다
        assert!(!Irregular::Reu.matches("따르", "아", &d));
        // 단음절 '르'는 앞 음절이 없어 제외
        assert!(!Irregular::Reu.matches("르", "어", &d));
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!(IrregularTag::from_pos_tag("ㅅ"), Some(IrregularTag::Siot));
        assert_eq!(IrregularTag::from_pos_tag("VV+ㅅ불규칙"), Some(IrregularTag::Siot));
        assert_eq!(IrregularTag::from_pos_tag("VA+ㅂ불규칙"), Some(IrregularTag::Bieup));
        assert_eq!(IrregularTag::from_pos_tag("VV+러불규칙"), Some(IrregularTag::Reo));
        assert_eq!(IrregularTag::from_pos_tag("VV"), None);
    }
}
