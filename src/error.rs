//! 매퍼 에러 타입
//!
//! 질의 연산(find_closest_term, map_sentence)은 에러를 반환하지 않습니다.
//! 설정/캐시/용어 파일을 다루는 주변 기능만 `MapperResult`를 사용합니다.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("잘못된 용어 파일 형식: {path} - {reason}")]
    InvalidTermFile { path: String, reason: String },
}

pub type MapperResult<T> = Result<T, MapperError>;
