//! 어미 분류기
//!
//! 어미의 첫 단위를 보고 자소 어미 / 자음 어미 / 모음 어미를 판정한다.
//! 이 분류가 규칙 분기의 출발점이다.

use crate::core::jamo::compat_consonant_to_jongseong;
use crate::core::syllable::Syllable;
use crate::error::ConjugateError;

/// 어미 첫 단위의 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingHead {
    /// 자소 어미: 낱자음 하나로 시작 (ㄴ, ㄹ까요의 ㄹ, ㅂ니다의 ㅂ)
    /// 값은 해당 자음의 종성 인덱스 — 앞 음절 받침 자리에 모아쓰기된다
    IncompleteConsonant(u32),
    /// 자음으로 시작하는 완성형 음절 어미 (고, 는, 다, ...)
    ConsonantInitial,
    /// ㅇ(무음가) 초성으로 시작하는 모음 어미 (아, 어요, 은, ...)
    VowelInitial,
}

/// 어미 첫 단위를 분류
///
/// 한글이 아닌 첫 문자는 자음 어미로 취급한다: 상위 분기에서
/// 단순 연결로 흘러 들어가 그대로 통과된다.
pub fn classify(ending: &str) -> Result<EndingHead, ConjugateError> {
    let first = ending.chars().next().ok_or(ConjugateError::EmptyInput("어미"))?;

    if let Some(jong) = compat_consonant_to_jongseong(first) {
        return Ok(EndingHead::IncompleteConsonant(jong));
    }

    match Syllable::decompose(first) {
        Ok(syl) if syl.is_filler_lead() => Ok(EndingHead::VowelInitial),
        _ => Ok(EndingHead::ConsonantInitial),
    }
}
