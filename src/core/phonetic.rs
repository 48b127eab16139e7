//! 발음 정규화
//!
//! 한글 단어는 자모로 분해한 뒤 발음 규칙을 적용하고,
//! 그 밖의 단어는 글자 단위로 한글 음소에 대응시킵니다.
//! 결과는 유사도 계산에만 쓰이고 사용자에게 보이지 않습니다.

use thiserror::Error;

use super::jamo_mapper::latin_to_phonemes;
use super::pronunciation::apply_rules;
use super::unicode::{
    choseong_to_jamo_char, decompose_syllable, is_conjoining_jamo, jongseong_to_jamo_char,
    jungseong_to_jamo_char,
};
use crate::detection::contains_hangul;

/// 자모 분해 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneticError {
    /// 완성형과 섞여 들어온 조합형 자모 (NFD 입력 등)
    #[error("분해할 수 없는 조합형 자모: {0:?}")]
    MalformedJamo(char),

    /// 음절 인덱스에 대응하는 자모가 없음
    #[error("자모 인덱스 변환 실패: {0}")]
    MalformedSyllable(char),
}

/// 정규화 결과
///
/// 분해에 실패하면 원래 단어를 `Unnormalized`로 돌려주고, 계속 진행할지는 호출자가 정합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phonetic {
    /// 발음 문자열
    Normalized(String),
    /// 정규화하지 못한 원래 단어
    Unnormalized(String),
}

impl Phonetic {
    pub fn as_str(&self) -> &str {
        match self {
            Phonetic::Normalized(s) | Phonetic::Unnormalized(s) => s,
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, Phonetic::Normalized(_))
    }
}

/// 한글 단어를 호환용 자모열로 분해 ('안녕' -> 'ㅇㅏㄴㄴㅕㅇ')
///
/// 한글 음절이 아닌 문자는 그대로 유지합니다.
pub fn decompose_to_jamo(word: &str) -> Result<String, PhoneticError> {
    let mut jamo = String::with_capacity(word.len() * 3);

    for c in word.chars() {
        if is_conjoining_jamo(c) {
            return Err(PhoneticError::MalformedJamo(c));
        }

        let Some((cho, jung, jong)) = decompose_syllable(c) else {
            jamo.push(c);
            continue;
        };

        jamo.push(choseong_to_jamo_char(cho).ok_or(PhoneticError::MalformedSyllable(c))?);
        jamo.push(jungseong_to_jamo_char(jung).ok_or(PhoneticError::MalformedSyllable(c))?);
        if jong != 0 {
            jamo.push(jongseong_to_jamo_char(jong).ok_or(PhoneticError::MalformedSyllable(c))?);
        }
    }

    Ok(jamo)
}

/// 단어 하나를 발음 문자열로 변환 (매핑 테이블 치환은 호출자가 먼저 수행)
pub fn pronounce(word: &str) -> Phonetic {
    if !contains_hangul(word) {
        return Phonetic::Normalized(latin_to_phonemes(word));
    }

    match decompose_to_jamo(word) {
        Ok(jamo) => Phonetic::Normalized(apply_rules(&jamo)),
        Err(e) => {
            log::warn!("자모 분리 오류: '{}' - {}", word, e);
            Phonetic::Unnormalized(word.to_string())
        }
    }
}
