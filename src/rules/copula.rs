//! 이다 (계사) 활용
//!
//! 계사 이다의 이형태는 앞 단어의 끝소리가 결정한다.
//! 받침 단어 뒤에서는 이가 그대로 남고 (학생 + 이다 → 학생이다),
//! 모음 단어 뒤에서는 이가 어미 첫 모음에 흡수된다
//! (나무 + 이었다 → 나무였다, 이에요 → 예요, 이야 → 야).

use crate::core::jamo::{CHO_FILLER, JUNG_A, JUNG_E, JUNG_EO, JUNG_YA, JUNG_YE, JUNG_YEO};
use crate::core::syllable::{last_syllable, Syllable};
use crate::ending::{classify, EndingHead};
use crate::error::ConjugateError;
use crate::rules::regular::{attach_incomplete, split_first};

/// 계사 어간 표기
pub const COPULA_STEM: &str = "이";

/// 이 + 모음을 한 음절로 접는 y-활음화 테이블
fn y_contract(jung: u32) -> Option<u32> {
    match jung {
        JUNG_EO => Some(JUNG_YEO), // 이 + ㅓ = ㅕ (이었다 → 였다)
        JUNG_E => Some(JUNG_YE),   // 이 + ㅔ = ㅖ (이에요 → 예요)
        JUNG_A => Some(JUNG_YA),   // 이 + ㅏ = ㅑ (이야 → 야)
        JUNG_YA | JUNG_YEO | JUNG_YE => Some(jung),
        _ => None,
    }
}

/// 이다 활용
///
/// `prev_word`가 없거나 한글로 끝나지 않으면 받침 단어 취급이
/// 안전한 기본값이다.
pub fn conjugate(prev_word: Option<&str>, ending: &str) -> Result<String, ConjugateError> {
    match classify(ending)? {
        // 인, 일, 임: 이 음절에 바로 모아쓰기
        EndingHead::IncompleteConsonant(jong) => attach_incomplete(COPULA_STEM, jong, ending),
        EndingHead::ConsonantInitial => Ok([COPULA_STEM, ending].concat()),
        EndingHead::VowelInitial => {
            let prev_open = prev_word
                .and_then(last_syllable)
                .map(|syl| !syl.has_jong())
                .unwrap_or(false);

            if !prev_open {
                return Ok([COPULA_STEM, ending].concat());
            }

            let (first, rest) = split_first(ending).ok_or(ConjugateError::EmptyInput("어미"))?;
            let head = Syllable::decompose(first)?;
            match y_contract(head.jung) {
                Some(jung) => {
                    let mut out = String::with_capacity(ending.len());
                    out.push(Syllable::new(CHO_FILLER, jung, head.jong).compose()?);
                    out.push_str(rest);
                    Ok(out)
                }
                // 축약 불가 모음은 이를 그대로 남긴다
                None => Ok([COPULA_STEM, ending].concat()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_consonant() {
        assert_eq!(conjugate(Some("학생"), "다").unwrap(), "이다");
        assert_eq!(conjugate(Some("학생"), "었다").unwrap(), "이었다");
    }

    #[test]
    fn test_after_vowel() {
        assert_eq!(conjugate(Some("나무"), "었다").unwrap(), "였다");
        assert_eq!(conjugate(Some("나무"), "어서").unwrap(), "여서");
        assert_eq!(conjugate(Some("나무"), "에요").unwrap(), "예요");
        assert_eq!(conjugate(Some("나무"), "야").unwrap(), "야");
    }

    #[test]
    fn test_without_prev_word() {
        // 앞 단어를 모르면 받침 단어로 취급
        assert_eq!(conjugate(None, "었다").unwrap(), "이었다");
    }

    #[test]
    fn test_non_hangul_prev_word() {
        assert_eq!(conjugate(Some("abc"), "었다").unwrap(), "이었다");
    }

    #[test]
    fn test_incomplete_consonant_ending() {
        assert_eq!(conjugate(Some("학생"), "ㄴ").unwrap(), "인");
        assert_eq!(conjugate(Some("나무"), "ㄹ").unwrap(), "일");
    }
}
