//! 영문자 -> 한글 음소 매핑
//!
//! 영문 용어를 한글 자모 공간의 근사 발음으로 옮겨 한글 입력과 비교할 수 있게 합니다.
//! 자모열은 `unicode` 모듈과 같은 호환용 자모를 사용합니다.

/// 소문자 영문 한 글자를 가장 가까운 한글 음소로 변환
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
pub fn map_to_phoneme(c: char) -> Option<&'static str> {
    match c {
        // 모음
        'a' => Some("ㅏ"),
        'e' => Some("ㅔ"),
        'i' => Some("ㅣ"),
        'o' => Some("ㅗ"),
        'u' => Some("ㅓ"),
        'y' => Some("ㅣ"),
        'w' => Some("ㅜ"),

        // 자음
        'b' => Some("ㅂ"),
        'c' => Some("ㅋ"),
        'd' => Some("ㄷ"),
        'f' => Some("ㅍ"),
        'g' => Some("ㄱ"),
        'h' => Some("ㅎ"),
        'j' => Some("ㅈ"),
        'k' => Some("ㅋ"),
        'l' => Some("ㄹ"),
        'm' => Some("ㅁ"),
        'n' => Some("ㄴ"),
        'p' => Some("ㅍ"),
        'q' => Some("ㅋ"),
        'r' => Some("ㄹ"),
        's' => Some("ㅅ"),
        't' => Some("ㅌ"),
        'v' => Some("ㅂ"),
        'x' => Some("ㅋㅅ"),
        'z' => Some("ㅈ"),

        _ => None,
    }
}

/// 영문 문자열을 소문자로 바꾼 뒤 글자 단위로 한글 음소열로 변환
/// 매핑되지 않는 문자는 그대로 유지
pub fn latin_to_phonemes(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 3);

    for c in word.chars().flat_map(char::to_lowercase) {
        match map_to_phoneme(c) {
            Some(phoneme) => result.push_str(phoneme),
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_vowels() {
        assert_eq!(map_to_phoneme('a'), Some("ㅏ"));
        assert_eq!(map_to_phoneme('u'), Some("ㅓ"));
        assert_eq!(map_to_phoneme('w'), Some("ㅜ"));
    }

    #[test]
    fn test_map_consonants() {
        assert_eq!(map_to_phoneme('c'), Some("ㅋ"));
        assert_eq!(map_to_phoneme('r'), Some("ㄹ"));
        assert_eq!(map_to_phoneme('x'), Some("ㅋㅅ"));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(map_to_phoneme('1'), None);
        assert_eq!(map_to_phoneme('_'), None);
        // 대문자는 latin_to_phonemes에서 소문자로 바뀐 뒤 조회됨
        assert_eq!(map_to_phoneme('A'), None);
    }

    #[test]
    fn test_latin_to_phonemes() {
        assert_eq!(latin_to_phonemes("customer"), "ㅋㅓㅅㅌㅗㅁㅔㄹ");
        assert_eq!(latin_to_phonemes("Server"), "ㅅㅔㄹㅂㅔㄹ");
        assert_eq!(latin_to_phonemes("box"), "ㅂㅗㅋㅅ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(latin_to_phonemes("svc66"), "ㅅㅂㅋ66");
        assert_eq!(latin_to_phonemes("account_id"), "ㅏㅋㅋㅗㅓㄴㅌ_ㅣㄷ");
        assert_eq!(latin_to_phonemes(""), "");
    }
}
