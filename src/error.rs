//! 활용 엔진 에러 타입

/// 활용 처리 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConjugateError {
    /// 음절 분해가 필요한 자리에 한글이 아닌 문자가 옴
    NotHangul(char),
    /// 내부 규칙 테이블이 만든 자모 조합이 유효한 음절이 아님
    InvalidJamo { cho: u32, jung: u32, jong: u32 },
    /// 어간 또는 어미가 빈 문자열
    EmptyInput(&'static str),
}

impl std::fmt::Display for ConjugateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConjugateError::NotHangul(c) => write!(f, "한글 음절이 아닌 문자: {:?}", c),
            ConjugateError::InvalidJamo { cho, jung, jong } => {
                write!(f, "유효하지 않은 자모 조합: 초성 {} 중성 {} 종성 {}", cho, jung, jong)
            }
            ConjugateError::EmptyInput(field) => write!(f, "빈 입력: {}", field),
        }
    }
}

impl std::error::Error for ConjugateError {}

/// 르불규칙 사전 로드 에러
#[derive(Debug)]
pub enum DictError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for DictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictError::IoError(e) => write!(f, "사전 파일 읽기 오류: {}", e),
            DictError::ParseError(s) => write!(f, "사전 JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for DictError {}

impl From<std::io::Error> for DictError {
    fn from(e: std::io::Error) -> Self {
        DictError::IoError(e)
    }
}
