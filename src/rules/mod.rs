//! 활용 규칙 모듈
//!
//! 각 규칙은 "적용 조건 판정"과 "변형 적용"을 분리해 제공하고,
//! 적용 순서는 전적으로 디스패처(`conjugator`)가 소유한다.

pub mod copula;
pub mod eu_drop;
pub mod irregular;
pub mod l_drop;
pub mod regular;
