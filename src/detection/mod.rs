//! 문자 체계 분류와 조사 검출 모듈

pub mod postposition;
pub mod script;

pub use postposition::{split_postposition, POSTPOSITIONS};
pub use script::{classify_mapping, contains_hangul, is_ascii_term, MappingDirection};
