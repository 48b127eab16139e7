//! 후보 엔진 설정
//!
//! 임계값과 전략별 우선순위 점수 정의

/// 기본 유사도 임계값 (정규화 편집 거리)
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// 전략별 우선순위 점수
///
/// 점수가 낮을수록 우선합니다. 정확/복합어 일치가 발음 추정보다 앞서도록 정한 값입니다.
pub mod priority {
    /// 매핑 테이블 직접 일치
    pub const EXACT: f64 = 0.0;
    /// 단어 안에서 알려진 용어 표기 발견
    pub const COMPOUND: f64 = 0.1;
    /// 부분 단어의 매핑 테이블 직접 일치
    pub const TOKEN_OVERRIDE: f64 = 0.2;
    /// 부분 단어 발음 유사도에 더하는 값
    pub const TOKEN_PHONETIC_OFFSET: f64 = 0.3;
}

/// 엔진 설정
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// 발음 유사도 임계값
    /// 최근접 용어의 거리가 이 값 이하일 때만 후보로 채택
    pub threshold: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl EngineOptions {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 임계값 설정
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
