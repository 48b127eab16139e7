//! 한글 발음 규칙
//!
//! 자모열에 순서대로 적용되는 (패턴, 치환) 규칙 목록입니다.
//! 각 규칙은 앞 규칙의 결과를 입력으로 받으므로 순서가 곧 의미입니다.
//! 치환 문자열의 캡처 참조는 `${n}` 형식을 씁니다.

use lazy_static::lazy_static;
use regex::Regex;

/// (패턴, 치환) 원본 목록
#[rustfmt::skip]
const KOREAN_RULE_SOURCES: &[(&str, &str)] = &[
    // 된소리 -> 예사소리 (음성 인식에서 자주 흔들림)
    ("ㄲ", "ㄱ"), ("ㄸ", "ㄷ"), ("ㅃ", "ㅂ"), ("ㅆ", "ㅅ"), ("ㅉ", "ㅈ"),
    // 겹받침 -> 대표음
    ("ㄳ", "ㄱ"), ("ㄵ", "ㄴ"), ("ㄶ", "ㄴ"), ("ㄺ", "ㄱ"), ("ㄻ", "ㅁ"), ("ㄼ", "ㄹ"),
    ("ㄽ", "ㄹ"), ("ㄾ", "ㄹ"), ("ㄿ", "ㅂ"), ("ㅀ", "ㄹ"), ("ㅄ", "ㅂ"),
    // 모음 앞 초성 ㅇ은 소리가 없음 (앞 받침이 넘어가는 연음 효과)
    ("ㅇ([ㅏ-ㅣ])", "${1}"),
    // 거센소리되기
    ("ㄱㅎ", "ㅋ"), ("ㅎㄱ", "ㅋ"), ("ㄷㅎ", "ㅌ"), ("ㅎㄷ", "ㅌ"), ("ㅂㅎ", "ㅍ"), ("ㅈㅎ", "ㅊ"),
    // 유음화
    ("ㄴㄹ", "ㄹㄹ"), ("ㄹㄴ", "ㄹㄹ"),
    // 비음화
    ("ㄱ([ㄴㅁ])", "ㅇ${1}"), ("ㅂ([ㄴㅁ])", "ㅁ${1}"), ("ㄷ([ㄴㅁ])", "ㄴ${1}"),
    // 외래어 표기 흔들림 (쉬핑/시핑)
    ("ㅟ", "ㅣ"),
    // 자음 사이, 어말 자음 뒤의 삽입 모음 ㅡ 제거 (스트 -> ㅅㅌ)
    ("([ㄱ-ㅎ])ㅡ([ㄱ-ㅎ])", "${1}${2}"),
    ("([ㄱ-ㅎ])ㅡ$", "${1}"),
];

/// 자모열 재작성 규칙 하나
#[derive(Debug)]
pub struct PronunciationRule {
    pattern: Regex,
    replacement: &'static str,
}

impl PronunciationRule {
    /// 규칙을 자모열 전체에 적용
    pub fn apply(&self, jamo: &str) -> String {
        self.pattern.replace_all(jamo, self.replacement).into_owned()
    }
}

lazy_static! {
    static ref KOREAN_RULES: Vec<PronunciationRule> = KOREAN_RULE_SOURCES
        .iter()
        .filter_map(|&(pattern, replacement)| match Regex::new(pattern) {
            Ok(pattern) => Some(PronunciationRule {
                pattern,
                replacement,
            }),
            Err(e) => {
                log::error!("발음 규칙 컴파일 실패: {} - {}", pattern, e);
                None
            }
        })
        .collect();
}

/// 한국어 발음 규칙 목록 (적용 순서대로)
pub fn korean_rules() -> &'static [PronunciationRule] {
    &KOREAN_RULES
}

/// 모든 발음 규칙을 순서대로 적용
pub fn apply_rules(jamo: &str) -> String {
    korean_rules()
        .iter()
        .fold(jamo.to_string(), |acc, rule| rule.apply(&acc))
}
