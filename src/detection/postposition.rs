//! 한국어 조사(후치사) 검출
//!
//! 명사 뒤에 띄어쓰기 없이 붙는 조사를 찾아 분리합니다.
//! 교정된 용어 뒤에 원래 조사를 다시 붙이는 데 사용됩니다.

use std::sync::LazyLock;

/// 대표적인 조사 목록
pub const POSTPOSITIONS: &[&str] = &[
    "이", "가", "을", "를", "의", "에", "에서", "로", "으로", "과", "와", "은", "는", "도",
    "만", "께", "에게", "한테", "보다", "처럼", "같이",
];

/// 긴 조사부터 검사하도록 정렬한 목록 ("에서"가 "서"보다 먼저)
static POSTPOSITIONS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut sorted = POSTPOSITIONS.to_vec();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    sorted
});

/// 단어 끝의 조사를 분리
///
/// 어간이 비지 않는 가장 긴 조사를 고릅니다.
/// 반환: (어간, 조사)
pub fn split_postposition(word: &str) -> (&str, Option<&str>) {
    for josa in POSTPOSITIONS_BY_LENGTH.iter() {
        if let Some(stem) = word.strip_suffix(josa) {
            if !stem.is_empty() {
                return (stem, Some(&word[stem.len()..]));
            }
        }
    }
    (word, None)
}
