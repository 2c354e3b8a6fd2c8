//! ㄹ탈락 (ㄹ-drop)
//!
//! ㄹ 받침 어간이 ㄴ/ㅂ/ㅅ/ㄹ로 시작하는 어미를 만나면 받침 ㄹ이
//! 탈락한다 (놀 + 는 → 노는, 살 + ㅂ니다 → 삽니다).
//! 완성형 음절 어미는 초성이 ㄴ(는, 네, 니)이나 ㅅ(시, 세요)일 때만
//! 탈락하고, 러-류의 ㄹ 초성 어미는 받침을 유지한다 (살 + 러 → 살러).

use crate::core::jamo::{
    compat_consonant_to_jongseong, CHO_NIEUN, CHO_SIOT, JONG_BIEUP, JONG_NIEUN, JONG_RIEUL,
    JONG_SIOT,
};
use crate::core::syllable::{last_syllable, replace_last, Syllable};
use crate::error::ConjugateError;

/// ㄹ탈락 적용 조건 판정
pub fn applies(stem: &str, ending: &str) -> bool {
    let stem_tail = match last_syllable(stem) {
        Some(s) => s,
        None => return false,
    };
    if stem_tail.jong != JONG_RIEUL {
        return false;
    }

    let first = match ending.chars().next() {
        Some(c) => c,
        None => return false,
    };

    // 자소 어미: ㄴ, ㅂ, ㅅ, ㄹ
    if let Some(jong) = compat_consonant_to_jongseong(first) {
        return matches!(jong, JONG_NIEUN | JONG_BIEUP | JONG_SIOT | JONG_RIEUL);
    }

    // 완성형 음절 어미: ㄴ/ㅅ 초성만
    match Syllable::decompose(first) {
        Ok(syl) => matches!(syl.cho, CHO_NIEUN | CHO_SIOT),
        Err(_) => false,
    }
}

/// 어간의 받침 ㄹ을 제거
pub fn drop_l(stem: &str) -> Result<String, ConjugateError> {
    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;
    replace_last(stem, tail.open())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_syllable_endings() {
        assert!(applies("놀", "는"));
        assert!(applies("살", "세요"));
        assert!(applies("만들", "니"));
        // ㄹ 초성 음절 어미는 탈락 없음
        assert!(!applies("살", "러"));
        // 모음/기타 자음 어미
        assert!(!applies("살", "아요"));
        assert!(!applies("살", "고"));
    }

    #[test]
    fn test_applies_jamo_endings() {
        assert!(applies("놀", "ㄴ"));
        assert!(applies("살", "ㅂ니다"));
        assert!(applies("만들", "ㄹ까"));
        assert!(!applies("살", "ㅁ")); // 삶: 겹받침 모아쓰기 소관
    }

    #[test]
    fn test_applies_requires_rieul_final() {
        assert!(!applies("먹", "는"));
        assert!(!applies("가", "ㄴ"));
    }

    #[test]
    fn test_drop_l() {
        assert_eq!(drop_l("놀").unwrap(), "노");
        assert_eq!(drop_l("만들").unwrap(), "만드");
    }
}
