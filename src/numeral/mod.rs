//! 한글 숫자 정규화 모듈
//!
//! 문장 속 한글 수 표현을 아라비아 숫자로 바꾸는 전처리 단계입니다.
//!
//! # 처리 순서
//!
//! 1. 보호 단어("천국" 등) 표시
//! 2. 숫자/단위 음절이 이어진 최대 구간 추출
//! 3. 구간별 변환: 단위 포함 -> 누적 계산, 숫자 나열 -> 자리별 변환
//!
//! 변환 결과에는 한글 숫자 음절이 남지 않으므로 두 번 적용해도 결과가 같습니다.
//!
//! ```
//! use pronunciation_mapper::numeral::convert_korean_numbers;
//! assert_eq!(convert_korean_numbers("이천이십삼년"), "2023년");
//! assert_eq!(convert_korean_numbers("오더육십육"), "오더66");
//! ```

mod guards;
mod korean_number;

pub use guards::{protected_mask, PROTECTED_WORDS};
pub use korean_number::{KoreanNumberConverter, NumeralError, RunKind};

/// 텍스트 안의 한글 숫자를 아라비아 숫자로 변환
pub fn convert_korean_numbers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let protected = protected_mask(&chars);
    let is_numeral =
        |i: usize| !protected[i] && KoreanNumberConverter::is_numeral_syllable(chars[i]);

    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !is_numeral(i) {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_numeral(i) {
            i += 1;
        }

        let run: String = chars[start..i].iter().collect();
        result.push_str(&KoreanNumberConverter::convert_run(&run));
    }

    result
}
