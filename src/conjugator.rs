//! 활용 디스패처
//!
//! 고정된 우선순위로 규칙을 시도한다. 순서가 결과를 정하므로
//! 절대 재배열하지 않는다:
//!
//! 1. ㄹ탈락 (적용 후 3으로 계속)
//! 2. 이다(계사) 분기 — 즉시 반환
//! 3. 어미 유형 분기 (자소 / 자음 / 모음)
//! 4. 태그 불규칙 (ㅅ/ㄷ/ㅂ/ㅎ/러)
//! 5. 무태그 특수 어간: 우 → 여 → 르
//! 6. 으탈락
//! 7. 규칙 활용 (모음조화 + 축약)

use lazy_static::lazy_static;
use log::debug;

use crate::dict::ReuDict;
use crate::ending::{classify, EndingHead};
use crate::error::ConjugateError;
use crate::rules::irregular::{Irregular, IrregularTag};
use crate::rules::{copula, eu_drop, l_drop, regular};

/// 용언 활용 엔진
///
/// 르불규칙 사전을 소유하는 것 외에는 상태가 없고,
/// 모든 호출은 순수 함수처럼 동작한다.
#[derive(Debug, Clone, Default)]
pub struct Conjugator {
    dict: ReuDict,
}

impl Conjugator {
    /// 내장 르불규칙 사전으로 엔진 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 외부에서 만든 사전을 주입해 엔진 생성
    pub fn with_dict(dict: ReuDict) -> Self {
        Self { dict }
    }

    pub fn dict(&self) -> &ReuDict {
        &self.dict
    }

    /// 어간 + 어미 → 활용형
    ///
    /// - `tag`: 분석기가 철자 중의성을 풀어 준 불규칙 태그 (없으면 무태그 탐색)
    /// - `prev_word`: 이다 활용에서 앞 단어의 끝소리 판정에만 쓰인다
    pub fn conjugate(
        &self,
        stem: &str,
        ending: &str,
        tag: Option<IrregularTag>,
        prev_word: Option<&str>,
    ) -> Result<String, ConjugateError> {
        if stem.is_empty() {
            return Err(ConjugateError::EmptyInput("어간"));
        }
        if ending.is_empty() {
            return Err(ConjugateError::EmptyInput("어미"));
        }

        // 1. ㄹ탈락 — 탈락한 어간으로 아래 분기를 계속한다
        let dropped: String;
        let stem: &str = if l_drop::applies(stem, ending) {
            debug!("ㄹ탈락 적용: {} + {}", stem, ending);
            dropped = l_drop::drop_l(stem)?;
            &dropped
        } else {
            stem
        };

        // 2. 이다(계사)
        if stem == copula::COPULA_STEM {
            debug!("이다 활용: 앞 단어 {:?}", prev_word);
            return copula::conjugate(prev_word, ending);
        }

        // 3. 어미 유형 분기
        match classify(ending)? {
            EndingHead::IncompleteConsonant(jong) => {
                regular::attach_incomplete(stem, jong, ending)
            }
            EndingHead::ConsonantInitial => Ok([stem, ending].concat()),
            EndingHead::VowelInitial => self.conjugate_vowel(stem, ending, tag),
        }
    }

    /// 모음 어미 분기 (우선순위 4~7)
    fn conjugate_vowel(
        &self,
        stem: &str,
        ending: &str,
        tag: Option<IrregularTag>,
    ) -> Result<String, ConjugateError> {
        // 4. 태그 불규칙: 어간 모양이 태그와 맞을 때만 적용
        if let Some(tag) = tag {
            let rule = tag.rule();
            if rule.matches(stem, ending, &self.dict) {
                debug!("태그 불규칙 {:?} 적용: {} + {}", tag, stem, ending);
                return rule.apply(stem, ending);
            }
        }

        // 5. 무태그 특수 어간 — 첫 일치가 이긴다
        for rule in [Irregular::U, Irregular::Yeo, Irregular::Reu] {
            if rule.matches(stem, ending, &self.dict) {
                debug!("불규칙 {:?} 적용: {} + {}", rule, stem, ending);
                return rule.apply(stem, ending);
            }
        }

        // 6. 으탈락
        if eu_drop::applies(stem) {
            debug!("으탈락 적용: {} + {}", stem, ending);
            return eu_drop::apply(stem, ending);
        }

        // 7. 규칙 활용
        regular::attach_vowel(stem, ending)
    }
}

lazy_static! {
    /// 편의 함수용 기본 엔진 (내장 사전)
    static ref DEFAULT_CONJUGATOR: Conjugator = Conjugator::new();
}

/// 기본 엔진으로 활용 (태그/앞 단어 없음)
pub fn conjugate(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    DEFAULT_CONJUGATOR.conjugate(stem, ending, None, None)
}

/// 기본 엔진으로 활용 (태그/앞 단어 지정)
pub fn conjugate_with(
    stem: &str,
    ending: &str,
    tag: Option<IrregularTag>,
    prev_word: Option<&str>,
) -> Result<String, ConjugateError> {
    DEFAULT_CONJUGATOR.conjugate(stem, ending, tag, prev_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_l_drop_first() {
        // ㄹ탈락은 태그가 있어도 먼저 적용된다
        let c = Conjugator::new();
        assert_eq!(c.conjugate("놀", "는", None, None).unwrap(), "노는");
        assert_eq!(
            c.conjugate("놀", "ㄴ", Some(IrregularTag::Siot), None).unwrap(),
            "논"
        );
    }

    #[test]
    fn test_priority_copula_before_vowel_rules() {
        let c = Conjugator::new();
        assert_eq!(c.conjugate("이", "었다", None, Some("나무")).unwrap(), "였다");
        assert_eq!(
            c.conjugate("이", "었다", Some(IrregularTag::Siot), Some("나무")).unwrap(),
            "였다"
        );
    }

    #[test]
    fn test_tag_mismatch_falls_back() {
        // 태그가 어간 모양과 안 맞으면 무태그 탐색으로 내려간다
        let c = Conjugator::new();
        assert_eq!(
            c.conjugate("먹", "어요", Some(IrregularTag::Siot), None).unwrap(),
            "먹어요"
        );
    }

    #[test]
    fn test_untagged_ambiguous_stem_is_regular() {
        // 태그 없는 ㅅ/ㄷ/ㅂ 받침 어간은 규칙 활용 (묻다: 땅에 묻다)
        let c = Conjugator::new();
        assert_eq!(c.conjugate("묻", "어", None, None).unwrap(), "묻어");
        assert_eq!(c.conjugate("짓", "어", None, None).unwrap(), "짓어");
    }

    #[test]
    fn test_empty_input() {
        let c = Conjugator::new();
        assert_eq!(
            c.conjugate("", "어요", None, None),
            Err(ConjugateError::EmptyInput("어간"))
        );
        assert_eq!(
            c.conjugate("먹", "", None, None),
            Err(ConjugateError::EmptyInput("어미"))
        );
    }

    #[test]
    fn test_injected_dict() {
        // 주입한 사전이 르불규칙 판정을 바꾼다
        let c = Conjugator::with_dict(ReuDict::from_stems(["구르"]));
        assert_eq!(c.conjugate("구르", "어", None, None).unwrap(), "굴러");
        // 사전에 없는 흐르는 이 엔진에서 으탈락으로 떨어진다
        assert_eq!(c.conjugate("흐르", "어", None, None).unwrap(), "흐러");
    }

    #[test]
    fn test_determinism() {
        let c = Conjugator::new();
        let a = c.conjugate("돕", "아", Some(IrregularTag::Bieup), None).unwrap();
        let b = c.conjugate("돕", "아", Some(IrregularTag::Bieup), None).unwrap();
        assert_eq!(a, b);
    }
}
