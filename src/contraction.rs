//! 모음 축약 (contraction)
//!
//! 받침 없는 어간 음절과 모음 어미 첫 음절이 만나면
//! 두 모음이 한 모음으로 융합될 수 있다 (보 + 아 → 봐, 가 + 았다 → 갔다).

use crate::core::jamo::{JUNG_A, JUNG_AE, JUNG_E, JUNG_EO, JUNG_O, JUNG_U, JUNG_YEO};

/// 어간 모음 + 어미 모음 → 융합 모음 축약 테이블
pub fn contract_jungseong(stem_jung: u32, ending_jung: u32) -> Option<u32> {
    match (stem_jung, ending_jung) {
        (JUNG_A, JUNG_A) => Some(JUNG_A),     // ㅏ + ㅏ = ㅏ (가 + 아 → 가)
        (JUNG_EO, JUNG_EO) => Some(JUNG_EO),  // ㅓ + ㅓ = ㅓ (서 + 어 → 서)
        (JUNG_O, JUNG_A) => Some(9),          // ㅗ + ㅏ = ㅘ (보 + 아 → 봐)
        (JUNG_U, JUNG_EO) => Some(14),        // ㅜ + ㅓ = ㅝ (주 + 어 → 줘)
        (20, JUNG_EO) => Some(JUNG_YEO),      // ㅣ + ㅓ = ㅕ (가리 + 어 → 가려)
        (11, JUNG_EO) => Some(10),            // ㅚ + ㅓ = ㅙ (되 + 어 → 돼)
        (JUNG_AE, JUNG_EO) => Some(JUNG_AE),  // ㅐ + ㅓ = ㅐ (보내 + 어 → 보내)
        (JUNG_E, JUNG_EO) => Some(JUNG_E),    // ㅔ + ㅓ = ㅔ (건네 + 어 → 건네)
        (JUNG_YEO, JUNG_EO) => Some(JUNG_YEO), // ㅕ + ㅓ = ㅕ (펴 + 어 → 펴)
        _ => None,
    }
}

/// 축약 예외 어간: 기-, 미-, 비-, 띠-로 끝나는 어간은 축약하지 않는다
/// (기 + 어 → 기어, 겨 아님)
pub fn allows_contraction(stem: &str) -> bool {
    !matches!(stem.chars().last(), Some('기' | '미' | '비' | '띠'))
}
