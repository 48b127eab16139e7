//! 교정 후보와 결과

/// 후보를 만든 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 매핑 테이블 직접 일치
    ExactOverride,
    /// 단어 안의 알려진 용어 표기 치환
    Compound,
    /// 단어 전체 발음 최근접
    WholeWord,
    /// 부분 단어의 매핑 테이블 직접 일치
    TokenOverride,
    /// 부분 단어 발음 최근접
    TokenPhonetic,
    /// 후보 없음, 입력 그대로
    Unchanged,
}

/// 교정 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// 교정된 텍스트
    pub text: String,
    /// 점수 (낮을수록 확실, 0.0 = 정확 일치, 후보 없음 = 1.0)
    pub score: f64,
    /// 채택된 전략
    pub strategy: Strategy,
}

impl Correction {
    pub fn new(text: impl Into<String>, score: f64, strategy: Strategy) -> Self {
        Self {
            text: text.into(),
            score,
            strategy,
        }
    }

    /// 입력을 그대로 돌려주는 결과
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(text, 1.0, Strategy::Unchanged)
    }

    /// 후보가 채택되었는지
    pub fn is_match(&self) -> bool {
        self.strategy != Strategy::Unchanged
    }
}

/// 후보 모음
///
/// 가장 낮은 점수가 이기고, 점수가 같으면 먼저 들어온 후보가 이깁니다.
#[derive(Debug, Default)]
pub struct CandidatePool {
    candidates: Vec<Correction>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, score: f64, strategy: Strategy) {
        let candidate = Correction::new(text, score, strategy);
        log::debug!(
            "후보: {} ({:.3}, {:?})",
            candidate.text,
            candidate.score,
            candidate.strategy
        );
        self.candidates.push(candidate);
    }

    /// 최선 후보 선택
    pub fn into_best(self) -> Option<Correction> {
        self.candidates.into_iter().reduce(|best, candidate| {
            if candidate.score < best.score {
                candidate
            } else {
                best
            }
        })
    }
}
