//! 문자 체계(스크립트) 분류
//!
//! 한글 음절 포함 여부로 용어와 매핑의 방향을 판별합니다.

use crate::core::unicode::is_hangul_syllable;

/// 완성형 한글 음절이 하나라도 포함되어 있는지 검사
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

/// 모든 문자가 ASCII인지 검사 (영문 DB 용어 판별용)
pub fn is_ascii_term(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii())
}

/// 매핑 항목의 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingDirection {
    /// 한글 원본 -> 영문 DB 용어
    KoreanToLatin,
    /// 영문 DB 용어 -> 한글 표기
    LatinToKorean,
    /// 어느 쪽에도 해당하지 않음 (역방향 보정 대상 아님)
    Unclassified,
}

/// 매핑 항목 하나의 방향을 분류
///
/// - 한글 -> 영문: source에 한글이 있고, target은 DB 용어이며 한글이 없음
/// - 영문 -> 한글: source가 DB 용어이며 한글이 없고, target에 한글이 있음
pub fn classify_mapping<F>(source: &str, target: &str, is_canonical: F) -> MappingDirection
where
    F: Fn(&str) -> bool,
{
    let source_korean = contains_hangul(source);
    let target_korean = contains_hangul(target);

    if source_korean && !target_korean && is_canonical(target) {
        MappingDirection::KoreanToLatin
    } else if !source_korean && target_korean && is_canonical(source) {
        MappingDirection::LatinToKorean
    } else {
        MappingDirection::Unclassified
    }
}
