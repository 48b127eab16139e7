//! 후보 엔진 모듈
//!
//! 후보 생성/선택과 문장 단위 교정

mod candidate;
mod index;
mod mapper;
pub mod options;

pub use candidate::{CandidatePool, Correction, Strategy};
pub use index::PhoneticIndex;
pub use mapper::PronunciationMapper;
pub use options::{EngineOptions, DEFAULT_THRESHOLD};
