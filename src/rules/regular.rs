//! 규칙 활용: 모아쓰기, ㅡ 삽입, 모음 어미 결합
//!
//! 불규칙이 하나도 적용되지 않았을 때의 기본 결합 처리.

use crate::contraction::{allows_contraction, contract_jungseong};
use crate::core::jamo::{combine_jongseong, CHO_FILLER, CHO_SIOT, JONG_BIEUP, JUNG_EU};
use crate::core::syllable::{last_syllable, replace_last, Syllable};
use crate::error::ConjugateError;
use crate::harmony::harmonize;

/// 자소 어미 결합 (모아쓰기)
///
/// - 받침 자리가 비어 있으면 그대로 받침으로 넣는다 (가 + ㅂ니다 → 갑니다)
/// - 겹받침이 가능하면 겹쳐 쓴다 (살 + ㅁ → 삶)
/// - ㅂ니다/ㅂ니까의 ㅂ은 받침 뒤에서 '습' 음절이 된다 (먹 + ㅂ니다 → 먹습니다)
/// - 그 밖에는 매개모음 ㅡ 음절을 끼운다 (잡 + ㄴ → 잡은)
///
/// `jong`은 어미 머리 자음의 종성 인덱스, `ending`은 머리 자모를 포함한
/// 어미 전체다.
pub fn attach_incomplete(stem: &str, jong: u32, ending: &str) -> Result<String, ConjugateError> {
    let rest: &str = {
        let mut chars = ending.char_indices();
        chars.next();
        match chars.next() {
            Some((idx, _)) => &ending[idx..],
            None => "",
        }
    };

    let tail = match last_syllable(stem) {
        Some(s) => s,
        // 어간 꼬리가 한글이 아니면 분해 없이 그대로 잇는다
        None => return Ok([stem, ending].concat()),
    };

    // 받침 자리가 빔: 바로 모아쓰기
    if !tail.has_jong() {
        let mut out = replace_last(stem, tail.with_jong(jong))?;
        out.push_str(rest);
        return Ok(out);
    }

    // 겹받침 조합 가능: 삶, 앎
    if let Some(cluster) = combine_jongseong(tail.jong, jong) {
        let mut out = replace_last(stem, tail.with_jong(cluster))?;
        out.push_str(rest);
        return Ok(out);
    }

    // ㅂ니다/ㅂ니까: 받침 뒤 이형태는 '습'
    let filler_syl = if jong == JONG_BIEUP && rest.starts_with('니') {
        Syllable::new(CHO_SIOT, JUNG_EU, JONG_BIEUP)
    } else {
        Syllable::new(CHO_FILLER, JUNG_EU, jong)
    };

    let mut out = String::with_capacity(stem.len() + ending.len() + 3);
    out.push_str(stem);
    out.push(filler_syl.compose()?);
    out.push_str(rest);
    Ok(out)
}

/// 모음 어미 결합: 모음조화 적용 후 가능하면 축약
pub fn attach_vowel(stem: &str, ending: &str) -> Result<String, ConjugateError> {
    let harmonized = harmonize(stem, ending);

    if allows_contraction(stem) {
        if let Some(tail) = last_syllable(stem) {
            if !tail.has_jong() {
                if let Some(contracted) = try_contract(stem, tail, &harmonized)? {
                    return Ok(contracted);
                }
            }
        }
    }

    Ok([stem, harmonized.as_str()].concat())
}

/// 열린 어간 음절과 어미 첫 음절의 모음 축약 시도
fn try_contract(
    stem: &str,
    tail: Syllable,
    ending: &str,
) -> Result<Option<String>, ConjugateError> {
    let (first, rest) = match split_first(ending) {
        Some(pair) => pair,
        None => return Ok(None),
    };
    let head = match Syllable::decompose(first) {
        Ok(s) if s.is_filler_lead() => s,
        _ => return Ok(None),
    };
    let fused = match contract_jungseong(tail.jung, head.jung) {
        Some(j) => j,
        None => return Ok(None),
    };

    // 융합 음절은 어간 초성을 유지하고 어미 첫 음절의 받침을 가져온다
    // (가 + 았다 → 갔다)
    let merged = Syllable::new(tail.cho, fused, head.jong);
    let mut out = replace_last(stem, merged)?;
    out.push_str(rest);
    Ok(Some(out))
}

/// 문자열을 (첫 문자, 나머지)로 분리
pub fn split_first(s: &str) -> Option<(char, &str)> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    let rest = match chars.next() {
        Some((idx, _)) => &s[idx..],
        None => "",
    };
    Some((first, rest))
}
