//! 고유명사 보호
//!
//! 숫자 음절로 시작하지만 수가 아닌 단어("천국", "천사" 등)를
//! 숫자 변환에서 제외합니다. 고정 목록이며 일반적인 중의성 해소는 하지 않습니다.

/// 숫자로 읽으면 안 되는 단어 목록
pub const PROTECTED_WORDS: &[&str] = &[
    "천국", "천사", "천재", "천지", "천둥", "백화점", "백수", "십자가",
];

/// 글자별 보호 여부
///
/// 왼쪽부터 훑으며 보호 단어가 시작되면 그 범위를 표시하고 건너뜁니다.
pub fn protected_mask(chars: &[char]) -> Vec<bool> {
    let mut mask = vec![false; chars.len()];
    let mut i = 0;

    while i < chars.len() {
        match matching_word_len(&chars[i..]) {
            Some(len) => {
                mask[i..i + len].iter_mut().for_each(|m| *m = true);
                i += len;
            }
            None => i += 1,
        }
    }

    mask
}

/// 현재 위치에서 시작하는 보호 단어의 글자 수
fn matching_word_len(rest: &[char]) -> Option<usize> {
    PROTECTED_WORDS.iter().find_map(|word| {
        let len = word.chars().count();
        let matches = rest.len() >= len && word.chars().zip(rest).all(|(w, c)| w == *c);
        matches.then_some(len)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(text: &str) -> Vec<bool> {
        let chars: Vec<char> = text.chars().collect();
        protected_mask(&chars)
    }

    #[test]
    fn test_protects_listed_word() {
        assert_eq!(mask_of("천국"), vec![true, true]);
        assert_eq!(mask_of("백화점에"), vec![true, true, true, false]);
    }

    #[test]
    fn test_unlisted_text_is_free() {
        assert_eq!(mask_of("삼백"), vec![false, false]);
        assert!(mask_of("").is_empty());
    }

    #[test]
    fn test_protects_inside_sentence() {
        assert_eq!(
            mask_of("이천사백"),
            vec![false, true, true, false]
        );
    }
}
