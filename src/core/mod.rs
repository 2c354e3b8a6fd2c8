pub mod jamo;
pub mod syllable;
