//! 으탈락 (ㅡ-drop)
//!
//! 받침 없는 ㅡ 모음 어간이 모음 어미 앞에서 ㅡ를 잃고
//! 초성이 어미 모음과 바로 결합한다 (쓰 + 어 → 써, 크 + 었다 → 컸다).

use crate::core::jamo::JUNG_EU;
use crate::core::syllable::{last_syllable, replace_last, Syllable};
use crate::error::ConjugateError;
use crate::harmony::harmonize;
use crate::rules::regular::split_first;

/// 으탈락 적용 조건: 마지막 음절이 받침 없는 ㅡ 모음
pub fn applies(stem: &str) -> bool {
    match last_syllable(stem) {
        Some(syl) => syl.jung == JUNG_EU && !syl.has_jong(),
        None => false,
    }
}

/// 으탈락 적용
///
/// 모음조화는 ㅡ 앞 음절의 모음이 결정한다 (바쁘 + 어 → 바빠).
pub fn apply(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let harmonized = harmonize(stem, ending);

    let tail = last_syllable(stem)
        .ok_or_else(|| ConjugateError::NotHangul(stem.chars().last().unwrap_or(' ')))?;
    let (first, rest) = split_first(&harmonized)
        .ok_or(ConjugateError::EmptyInput("어미"))?;
    let head = Syllable::decompose(first)?;

    // ㅡ가 빠진 자리에서 어간 초성이 어미 모음을 직접 받는다
    let merged = Syllable::new(tail.cho, head.jung, head.jong);
    let mut out = replace_last(stem, merged)?;
    out.push_str(rest);
    Ok(out)
}
