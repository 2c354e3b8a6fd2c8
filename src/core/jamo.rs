//! 자모 인덱스 테이블과 유니코드 조합/분해 연산
//!
//! 초성 19 × 중성 21 × 종성 28(없음 포함)의 고정 오프셋 산술로
//! 완성형 음절(U+AC00~U+D7A3)을 다룬다.

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_END: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

// 초성 인덱스 (0~18):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
pub const CHO_NIEUN: u32 = 2;
pub const CHO_RIEUL: u32 = 5;
pub const CHO_SIOT: u32 = 9;
/// 무음가 초성 ㅇ — 모음으로 시작하는 어미의 자리채움 자음
pub const CHO_FILLER: u32 = 11;
pub const CHO_HIEUT: u32 = 18;

// 중성 인덱스 (0~20):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
pub const JUNG_A: u32 = 0;
pub const JUNG_AE: u32 = 1;
pub const JUNG_YA: u32 = 2;
pub const JUNG_YAE: u32 = 3;
pub const JUNG_EO: u32 = 4;
pub const JUNG_E: u32 = 5;
pub const JUNG_YEO: u32 = 6;
pub const JUNG_YE: u32 = 7;
pub const JUNG_O: u32 = 8;
pub const JUNG_U: u32 = 13;
pub const JUNG_EU: u32 = 18;

// 종성 인덱스 (0~27, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
pub const JONG_NONE: u32 = 0;
pub const JONG_NIEUN: u32 = 4;
pub const JONG_DIGEUT: u32 = 7;
pub const JONG_RIEUL: u32 = 8;
pub const JONG_MIEUM: u32 = 16;
pub const JONG_BIEUP: u32 = 17;
pub const JONG_SIOT: u32 = 19;
pub const JONG_HIEUT: u32 = 27;

/// 초성/중성/종성 인덱스로 완성형 음절 조합
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 음절을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_BASE..=HANGUL_END).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    let code = c as u32;
    (HANGUL_BASE..=HANGUL_END).contains(&code)
}

/// 호환용 자음 자모(ㄱ~ㅎ, U+3131~U+314E)를 종성 인덱스로 변환
/// 종성으로 쓸 수 없는 자음(ㄸ, ㅃ, ㅉ)과 그 외 문자는 None
pub fn compat_consonant_to_jongseong(c: char) -> Option<u32> {
    match c {
        'ㄱ' => Some(1),
        'ㄲ' => Some(2),
        'ㄳ' => Some(3),
        'ㄴ' => Some(4),
        'ㄵ' => Some(5),
        'ㄶ' => Some(6),
        'ㄷ' => Some(7),
        'ㄹ' => Some(8),
        'ㄺ' => Some(9),
        'ㄻ' => Some(10),
        'ㄼ' => Some(11),
        'ㄽ' => Some(12),
        'ㄾ' => Some(13),
        'ㄿ' => Some(14),
        'ㅀ' => Some(15),
        'ㅁ' => Some(16),
        'ㅂ' => Some(17),
        'ㅄ' => Some(18),
        'ㅅ' => Some(19),
        'ㅆ' => Some(20),
        'ㅇ' => Some(21),
        'ㅈ' => Some(22),
        'ㅊ' => Some(23),
        'ㅋ' => Some(24),
        'ㅌ' => Some(25),
        'ㅍ' => Some(26),
        'ㅎ' => Some(27),
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합 (받침 겹치기)
/// 반환: 복합 종성 인덱스 (조합 불가 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 양성 모음 여부 (ㅏ, ㅗ, ㅑ, ㅛ, ㅘ)
/// 모음조화에서 아-계열 어미를 선택하는 모음
pub fn is_bright_jungseong(jung: u32) -> bool {
    matches!(jung, JUNG_A | JUNG_O | JUNG_YA | 12 /* ㅛ */ | 9 /* ㅘ */)
}
