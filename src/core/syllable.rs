//! 음절 값 타입과 단어 꼬리 조작 유틸리티
//!
//! 활용 규칙 대부분은 어간의 마지막 음절 하나를 고쳐 쓰는 일이므로
//! "마지막 음절 분해 → 고치기 → 재조합" 연산을 여기에 모은다.

use crate::core::jamo::{
    compose_syllable, decompose_syllable, CHO_FILLER, JONG_NONE,
};
use crate::error::ConjugateError;

/// 분해된 완성형 음절 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// 초성 인덱스 (0~18)
    pub cho: u32,
    /// 중성 인덱스 (0~20)
    pub jung: u32,
    /// 종성 인덱스 (0~27, 0 = 없음)
    pub jong: u32,
}

impl Syllable {
    pub fn new(cho: u32, jung: u32, jong: u32) -> Self {
        Self { cho, jung, jong }
    }

    /// 완성형 음절 문자를 분해
    pub fn decompose(c: char) -> Result<Self, ConjugateError> {
        let (cho, jung, jong) =
            decompose_syllable(c).ok_or(ConjugateError::NotHangul(c))?;
        Ok(Self { cho, jung, jong })
    }

    /// 음절 문자로 재조합
    pub fn compose(self) -> Result<char, ConjugateError> {
        compose_syllable(self.cho, self.jung, self.jong).ok_or(ConjugateError::InvalidJamo {
            cho: self.cho,
            jung: self.jung,
            jong: self.jong,
        })
    }

    /// 종성(받침)이 있는지
    pub fn has_jong(&self) -> bool {
        self.jong != JONG_NONE
    }

    /// 초성이 무음가 ㅇ인지
    pub fn is_filler_lead(&self) -> bool {
        self.cho == CHO_FILLER
    }

    /// 종성을 제거한 열린 음절
    pub fn open(self) -> Self {
        Self { jong: JONG_NONE, ..self }
    }

    /// 종성을 바꾼 음절
    pub fn with_jong(self, jong: u32) -> Self {
        Self { jong, ..self }
    }

    /// 중성을 바꾼 음절
    pub fn with_jung(self, jung: u32) -> Self {
        Self { jung, ..self }
    }
}

/// 단어를 (마지막 문자 앞까지, 마지막 문자)로 분리
pub fn split_last(word: &str) -> Option<(&str, char)> {
    let (idx, c) = word.char_indices().last()?;
    Some((&word[..idx], c))
}

/// 단어 마지막 문자를 음절로 분해 (빈 문자열이거나 완성형이 아니면 None)
pub fn last_syllable(word: &str) -> Option<Syllable> {
    let c = word.chars().last()?;
    Syllable::decompose(c).ok()
}

/// 단어 마지막 음절을 교체한 새 문자열
pub fn replace_last(word: &str, syl: Syllable) -> Result<String, ConjugateError> {
    let (head, _) = split_last(word).ok_or(ConjugateError::EmptyInput("어간"))?;
    let mut out = String::with_capacity(word.len());
    out.push_str(head);
    out.push(syl.compose()?);
    Ok(out)
}
