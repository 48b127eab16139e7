//! 정답 용어 집합 (Canonical Term Set)
//!
//! 순서를 유지하는 DB 용어 목록입니다. 명시적으로 추가될 때만 커지고 줄어들지 않습니다.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct CanonicalTerms {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl CanonicalTerms {
    /// 용어 목록으로 생성 (중복은 첫 등장만 유지)
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for term in terms {
            set.push(term.into());
        }
        set
    }

    /// 용어 추가. 새로 추가되었으면 true
    pub fn push(&mut self, term: String) -> bool {
        if self.members.contains(&term) {
            return false;
        }
        self.members.insert(term.clone());
        self.ordered.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.members.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order_and_drops_duplicates() {
        let terms = CanonicalTerms::new(["server", "ground", "server", "서버"]);
        assert_eq!(terms.as_slice(), ["server", "ground", "서버"]);
    }

    #[test]
    fn test_push() {
        let mut terms = CanonicalTerms::new(Vec::<String>::new());
        assert!(terms.as_slice().is_empty());
        assert!(terms.push("user".to_string()));
        assert!(!terms.push("user".to_string()));
        assert!(terms.contains("user"));
        assert!(!terms.contains("admin"));
    }
}
