//! 용어 매핑 모듈
//!
//! 정답 용어 집합과 양방향 용어 매핑 테이블

mod table;
mod terms;

pub use table::{TermMappingTable, BASE_MAPPINGS};
pub use terms::CanonicalTerms;
