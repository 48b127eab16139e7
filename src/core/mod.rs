//! 발음 정규화 핵심 로직
//!
//! 한글 자모 분해, 영문 음소 대응, 발음 규칙, 편집 거리

pub mod jamo_mapper;
pub mod phonetic;
pub mod pronunciation;
pub mod similarity;
pub mod unicode;

pub use phonetic::{pronounce, Phonetic, PhoneticError};
pub use similarity::normalized_distance;
