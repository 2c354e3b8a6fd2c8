//! 한국어 용언 활용 엔진
//!
//! (어간, 어미) 쌍을 받아 음운 규칙(ㄹ탈락, 모음조화, 축약,
//! 여덟 가지 불규칙, 이다 활용)을 적용한 표면형을 돌려준다.
//!
//! ```
//! use hwalyong::conjugate;
//!
//! assert_eq!(conjugate("먹", "어요").unwrap(), "먹어요");
//! assert_eq!(conjugate("흐르", "어").unwrap(), "흘러");
//! ```

pub mod conjugator;
pub mod contraction;
pub mod core;
pub mod dict;
pub mod ending;
pub mod error;
pub mod harmony;
pub mod rules;

pub use conjugator::{conjugate, conjugate_with, Conjugator};
pub use dict::ReuDict;
pub use error::{ConjugateError, DictError};
pub use rules::irregular::IrregularTag;
