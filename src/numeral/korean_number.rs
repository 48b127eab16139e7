//! 한글 숫자 변환
//!
//! 한자어 수사(일, 이, 삼 ... 십, 백, 천, 만, 억, 조)를 아라비아 숫자로 바꿉니다.
//!
//! 지원 음절: 영공빵일이삼사오육칠팔구 + 십백천만억조

use thiserror::Error;

/// 숫자 구간 변환 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("빈 숫자 구간")]
    Empty,

    #[error("숫자가 아닌 음절: {0}")]
    UnexpectedSyllable(char),

    #[error("숫자 범위 초과: {0}")]
    Overflow(String),
}

/// 숫자 구간의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// 단위가 섞인 수 (삼백이십일)
    UnitBearing,
    /// 두 자리 이상 숫자 나열 (팔이사오)
    DigitSequence,
    /// 변환 대상 아님 (한 음절 숫자, 단위만 있는 구간)
    Plain,
}

/// 한글 숫자 변환기
pub struct KoreanNumberConverter;

impl KoreanNumberConverter {
    /// 숫자 음절의 값
    pub fn digit_value(c: char) -> Option<u64> {
        match c {
            '영' | '공' | '빵' => Some(0),
            '일' => Some(1),
            '이' => Some(2),
            '삼' => Some(3),
            '사' => Some(4),
            '오' => Some(5),
            '육' => Some(6),
            '칠' => Some(7),
            '팔' => Some(8),
            '구' => Some(9),
            _ => None,
        }
    }

    /// 단위 음절의 값
    pub fn unit_value(c: char) -> Option<u64> {
        match c {
            '십' => Some(10),
            '백' => Some(100),
            '천' => Some(1_000),
            '만' => Some(10_000),
            '억' => Some(100_000_000),
            '조' => Some(1_000_000_000_000),
            _ => None,
        }
    }

    /// 숫자 또는 단위 음절인지 확인
    pub fn is_numeral_syllable(c: char) -> bool {
        Self::digit_value(c).is_some() || Self::unit_value(c).is_some()
    }

    /// 숫자 구간의 종류 판별
    pub fn classify(run: &str) -> RunKind {
        let has_digit = run.chars().any(|c| Self::digit_value(c).is_some());
        let has_unit = run.chars().any(|c| Self::unit_value(c).is_some());

        if has_digit && has_unit {
            RunKind::UnitBearing
        } else if has_digit && !has_unit && run.chars().count() >= 2 {
            RunKind::DigitSequence
        } else {
            RunKind::Plain
        }
    }

    /// 단위가 포함된 한글 숫자를 값으로 변환
    ///
    /// 왼쪽부터 읽으며:
    /// - 숫자: 대기 값 설정
    /// - 십/백/천: 대기 값(없으면 1) x 단위를 소계에 더함
    /// - 만/억/조: (소계 + 대기 값) x 단위를 결과에 더하고 소계 초기화.
    ///   대기 값과 소계가 모두 없으면 1로 간주
    ///
    /// # 예시
    /// ```
    /// # use pronunciation_mapper::numeral::KoreanNumberConverter;
    /// assert_eq!(KoreanNumberConverter::parse_with_units("삼백이십일").unwrap(), 321);
    /// assert_eq!(KoreanNumberConverter::parse_with_units("이천만").unwrap(), 20_000_000);
    /// ```
    pub fn parse_with_units(run: &str) -> Result<u64, NumeralError> {
        if run.is_empty() {
            return Err(NumeralError::Empty);
        }

        let overflow = || NumeralError::Overflow(run.to_string());

        let mut result = 0u64;
        let mut subtotal = 0u64;
        let mut pending: Option<u64> = None;

        for c in run.chars() {
            if let Some(digit) = Self::digit_value(c) {
                pending = Some(digit);
                continue;
            }

            let unit = Self::unit_value(c).ok_or(NumeralError::UnexpectedSyllable(c))?;

            if unit < 10_000 {
                // 앞에 숫자가 없으면 1로 가정 (백 = 일백)
                let value = pending.take().unwrap_or(1);
                let scaled = value.checked_mul(unit).ok_or_else(overflow)?;
                subtotal = subtotal.checked_add(scaled).ok_or_else(overflow)?;
            } else {
                let value = match pending.take() {
                    Some(digit) => digit,
                    None if subtotal == 0 => 1,
                    None => 0,
                };
                let group = subtotal.checked_add(value).ok_or_else(overflow)?;
                let scaled = group.checked_mul(unit).ok_or_else(overflow)?;
                result = result.checked_add(scaled).ok_or_else(overflow)?;
                subtotal = 0;
            }
        }

        result
            .checked_add(subtotal)
            .and_then(|sum| sum.checked_add(pending.unwrap_or(0)))
            .ok_or_else(overflow)
    }

    /// 숫자만 나열된 구간을 한 자리씩 변환 ("팔이사오" -> "8245")
    pub fn transliterate(run: &str) -> Result<String, NumeralError> {
        if run.is_empty() {
            return Err(NumeralError::Empty);
        }

        run.chars()
            .map(|c| {
                Self::digit_value(c)
                    .and_then(|d| char::from_digit(d as u32, 10))
                    .ok_or(NumeralError::UnexpectedSyllable(c))
            })
            .collect()
    }

    /// 구간 하나를 변환
    ///
    /// 변환 대상이 아니거나 실패한 구간은 원문 그대로 돌려줍니다.
    pub fn convert_run(run: &str) -> String {
        let converted = match Self::classify(run) {
            RunKind::UnitBearing => Self::parse_with_units(run).map(|n| n.to_string()),
            RunKind::DigitSequence => Self::transliterate(run),
            RunKind::Plain => return run.to_string(),
        };

        converted.unwrap_or_else(|e| {
            log::warn!("숫자 변환 실패: {} - {}", run, e);
            run.to_string()
        })
    }
}
