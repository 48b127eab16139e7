//! 유니코드 한글 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 조합형 자모 영역 (U+1100 ~ U+11FF)
const CONJOINING_JAMO_FIRST: u32 = 0x1100;
const CONJOINING_JAMO_LAST: u32 = 0x11FF;

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자가 조합형(첫가끝) 자모인지 확인
///
/// NFD로 분해된 한글은 이 영역의 문자로 들어옵니다.
pub fn is_conjoining_jamo(c: char) -> bool {
    (CONJOINING_JAMO_FIRST..=CONJOINING_JAMO_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    if cho >= CHOSEONG_COUNT {
        return None;
    }
    // 호환용 자모: 초성 순서와 다르므로 직접 매핑
    #[rustfmt::skip]
    let jamo_codes: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    char::from_u32(jamo_codes[cho as usize])
}

/// 중성 인덱스 -> 호환용 모음 자모 (ㅏ 0x314F ~ ㅣ 0x3163, 연속 배치)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung >= JUNGSEONG_COUNT {
        return None;
    }
    char::from_u32(0x314F + jung)
}

/// 종성 인덱스 -> 호환용 자모 문자
/// 종성 없음(0)은 None
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    #[rustfmt::skip]
    let jamo_codes: [u32; 27] = [
        0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, 0x3139, 0x313A,
        0x313B, 0x313C, 0x313D, 0x313E, 0x313F, 0x3140, 0x3141, 0x3142, 0x3144,
        0x3145, 0x3146, 0x3147, 0x3148, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E,
    ];
    if jong == 0 || jong >= JONGSEONG_COUNT {
        return None;
    }
    char::from_u32(jamo_codes[(jong - 1) as usize])
}
