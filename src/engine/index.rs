//! 발음 색인 (Phonetic Index)
//!
//! 정답 용어마다 미리 계산한 발음 문자열. 용어 순서를 그대로 유지하며,
//! 거리가 같으면 앞선 용어가 최근접으로 선택됩니다.

use crate::core::{normalized_distance, Phonetic};

#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    entries: Vec<(String, Phonetic)>,
}

impl PhoneticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 용어의 발음 저장 (있으면 교체, 없으면 끝에 추가)
    pub fn upsert(&mut self, term: &str, phonetic: Phonetic) {
        match self.entries.iter_mut().find(|(t, _)| t == term) {
            Some(entry) => entry.1 = phonetic,
            None => self.entries.push((term.to_string(), phonetic)),
        }
    }

    /// 발음 거리가 가장 가까운 용어와 그 거리
    pub fn nearest(&self, phonetic: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;

        for (term, term_phonetic) in &self.entries {
            let distance = normalized_distance(phonetic, term_phonetic.as_str());
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((term.as_str(), distance));
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(s: &str) -> Phonetic {
        Phonetic::Normalized(s.to_string())
    }

    #[test]
    fn test_nearest() {
        let mut index = PhoneticIndex::new();
        index.upsert("server", normalized("ㅅㅓㅂㅓ"));
        index.upsert("ground", normalized("ㄱㄹㅏㅜㄴㄷ"));

        let (term, distance) = index.nearest("ㅅㅓㅂㅓㅢ").unwrap();
        assert_eq!(term, "server");
        assert!((distance - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_tie_prefers_earlier_term() {
        let mut index = PhoneticIndex::new();
        index.upsert("first", normalized("ㄱㅏ"));
        index.upsert("second", normalized("ㄱㅏ"));

        assert_eq!(index.nearest("ㄱㅏ").unwrap().0, "first");
    }

    #[test]
    fn test_upsert_replaces() {
        let mut index = PhoneticIndex::new();
        index.upsert("customer", normalized("ㅋㅓㅅㅌㅗㅁㅔㄹ"));
        index.upsert("customer", normalized("ㄱㅗㄱㅐㄱ"));
        index.upsert("product", normalized("ㄱㅗㄱㅐ"));

        assert_eq!(index.nearest("ㄱㅗㄱㅐㄱ"), Some(("customer", 0.0)));
    }

    #[test]
    fn test_empty_index() {
        assert!(PhoneticIndex::new().nearest("ㄱ").is_none());
    }
}
