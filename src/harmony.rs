//! 모음조화 (vowel harmony)
//!
//! 어간의 마지막 모음이 양성(ㅏ, ㅗ 계열)이면 아-계열 어미,
//! 그 밖에는 어-계열 어미를 고른다. 마지막 모음이 ㅡ인 음절은
//! 판정에서 투명하게 건너뛴다 (모르 + 아 → 몰라, 흐르 + 어 → 흘러).

use crate::core::jamo::{is_bright_jungseong, JUNG_A, JUNG_AE, JUNG_E, JUNG_EO, JUNG_EU};
use crate::core::syllable::Syllable;

/// 양성 모음 어간인지 판정
///
/// 어간 음절을 뒤에서부터 훑되 ㅡ 모음은 건너뛴다.
/// 판정할 모음이 없으면 음성(어-계열)으로 본다.
pub fn stem_is_bright(stem: &str) -> bool {
    for c in stem.chars().rev() {
        let syl = match Syllable::decompose(c) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if syl.jung == JUNG_EU {
            continue;
        }
        return is_bright_jungseong(syl.jung);
    }
    false
}

/// 어미 첫 음절 모음을 지정된 계열로 교체
///
/// 양성: ㅓ→ㅏ, ㅔ→ㅐ, ㅝ→ㅘ / 음성: ㅏ→ㅓ, ㅐ→ㅔ, ㅘ→ㅝ
/// 교체 대상이 아닌 모음(으, 이, 여 등)은 그대로 둔다.
/// ㅕ/ㅑ는 교체하지 않는다: 여-계열 이형태 어미는 이미 선택이 끝난
/// 형태로 들어오므로 손대지 않고 통과시킨다 (하 + 여 → 하여).
pub fn harmonize_series(ending: &str, bright: bool) -> String {
    let first = match ending.chars().next() {
        Some(c) => c,
        None => return String::new(),
    };
    let syl = match Syllable::decompose(first) {
        Ok(s) if s.is_filler_lead() => s,
        _ => return ending.to_string(),
    };

    let swapped = if bright {
        match syl.jung {
            JUNG_EO => JUNG_A,
            JUNG_E => JUNG_AE,
            14 => 9, // ㅝ → ㅘ
            j => j,
        }
    } else {
        match syl.jung {
            JUNG_A => JUNG_EO,
            JUNG_AE => JUNG_E,
            9 => 14, // ㅘ → ㅝ
            j => j,
        }
    };

    if swapped == syl.jung {
        return ending.to_string();
    }
    match syl.with_jung(swapped).compose() {
        Ok(c) => {
            let mut out = String::with_capacity(ending.len());
            out.push(c);
            out.extend(ending.chars().skip(1));
            out
        }
        Err(_) => ending.to_string(),
    }
}

/// 어간에 맞춰 어미 첫 음절에 모음조화 적용
pub fn harmonize(stem: &str, ending: &str) -> String {
    harmonize_series(ending, stem_is_bright(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_is_bright() {
        assert!(stem_is_bright("가"));
        assert!(stem_is_bright("살"));
        assert!(stem_is_bright("보"));
        assert!(!stem_is_bright("먹"));
        assert!(!stem_is_bright("기"));
    }

    #[test]
    fn test_eu_transparent() {
        // ㅡ는 건너뛰고 앞 음절 모음으로 판정
        assert!(stem_is_bright("모르"));
        assert!(stem_is_bright("바쁘"));
        assert!(!stem_is_bright("부르"));
        // ㅡ뿐이면 음성
        assert!(!stem_is_bright("쓰"));
        assert!(!stem_is_bright("흐르"));
    }

    #[test]
    fn test_harmonize() {
        assert_eq!(harmonize("살", "어요"), "아요");
        assert_eq!(harmonize("먹", "아요"), "어요");
        assert_eq!(harmonize("먹", "어요"), "어요");
        // 었다 ↔ 았다: 첫 음절의 모음만 바뀌고 받침은 유지
        assert_eq!(harmonize("가", "었다"), "았다");
        assert_eq!(harmonize("먹", "았다"), "었다");
    }

    #[test]
    fn test_harmonize_untouched() {
        // 교체 대상이 아닌 모음 어미
        assert_eq!(harmonize("잡", "은"), "은");
        assert_eq!(harmonize("먹", "으면"), "으면");
        // 자음 어미는 그대로
        assert_eq!(harmonize("먹", "고"), "고");
        // 여-계열 이형태는 양성 어간 뒤에서도 통과
        assert_eq!(harmonize("하", "여"), "여");
        assert_eq!(harmonize("하", "여서"), "여서");
    }

    #[test]
    fn test_harmonize_series_forced() {
        assert_eq!(harmonize_series("어", true), "아");
        assert_eq!(harmonize_series("아", false), "어");
    }
}
