pub mod config;
pub mod core;
pub mod detection;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod numeral;
pub mod persistence;
pub mod vocabulary;

pub use config::{load_config, MapperConfig};
pub use self::core::normalized_distance;
pub use engine::{Correction, EngineOptions, PronunciationMapper, Strategy};
pub use error::{MapperError, MapperResult};
pub use numeral::convert_korean_numbers;
pub use vocabulary::default_terms;
