//! 르불규칙 어간 사전
//!
//! 르불규칙(흐르 → 흘러)은 철자만으로는 러불규칙(이르 → 이르러)이나
//! 규칙 활용과 구분되지 않으므로, 해당 패턴을 따르는 어간 목록을
//! 사전으로 들고 있다가 정확 일치로만 조회한다.
//! 생성 후에는 불변이며 엔진에 값으로 주입된다.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DictError;

/// 기본 내장 르불규칙 어간
///
/// 원전의 폴백 목록에서 따르/치르를 제외했다. 둘은 으탈락 규칙
/// 활용(따라, 치러)이라 사전에 있으면 딸라/칠러로 잘못 활용된다.
const DEFAULT_STEMS: &[&str] = &[
    "흐르", "부르", "오르", "고르", "누르", "자르", "모르", "이르", "다르",
    "빠르", "기르", "거르", "나르", "마르", "바르", "서두르", "게으르",
];

/// 르불규칙 어간 사전 (정확 일치 조회 전용)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReuDict {
    stems: HashSet<String>,
}

impl ReuDict {
    /// 임의의 어간 목록으로 사전 구성
    pub fn from_stems<I, S>(stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stems: stems.into_iter().map(Into::into).collect(),
        }
    }

    /// JSON 문자열 배열에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// ["흐르", "부르", "모르"]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DictError> {
        let stems: Vec<String> =
            serde_json::from_str(json).map_err(|e| DictError::ParseError(e.to_string()))?;
        Ok(Self::from_stems(stems))
    }

    /// JSON 파일에서 사전 로드
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let stems: Vec<String> =
            serde_json::from_reader(reader).map_err(|e| DictError::ParseError(e.to_string()))?;
        Ok(Self::from_stems(stems))
    }

    /// 어간이 르불규칙인지 조회
    pub fn contains(&self, stem: &str) -> bool {
        self.stems.contains(stem)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl Default for ReuDict {
    fn default() -> Self {
        Self::from_stems(DEFAULT_STEMS.iter().copied())
    }
}
