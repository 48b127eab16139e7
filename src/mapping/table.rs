//! 용어 매핑 테이블
//!
//! 원본 -> 대상 문자열 대응을 저장합니다. 키는 유일하며 대소문자를 구분합니다.
//! 한글->영문, 영문->한글 두 방향이 한 테이블에 함께 들어 있고,
//! 대상이 DB 용어인 항목은 역방향이 없으면 한 번 채워 넣어 어느 쪽 표기로도 조회되게 합니다.
//! 항목은 자동으로 지워지지 않고, 같은 키에 대한 나중 쓰기가 앞의 값을 덮어씁니다.

use std::collections::BTreeMap;

use super::terms::CanonicalTerms;
use crate::detection::{classify_mapping, contains_hangul, MappingDirection};

/// 기본 한글 표기 -> 영문 DB 용어
pub const BASE_MAPPINGS: &[(&str, &str)] = &[
    ("커스터머", "customer"),
    ("프로덕트", "product"),
    ("트랜잭션", "transaction"),
    ("페이먼트", "payment"),
    ("쉬핑", "shipping"),
    ("인보이스", "invoice"),
    ("그라운드", "ground"),
    ("클라우드", "cloud"),
    ("서버", "server"),
];

#[derive(Debug, Clone, Default)]
pub struct TermMappingTable {
    entries: BTreeMap<String, String>,
}

impl TermMappingTable {
    /// 빈 테이블
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 매핑이 들어 있는 테이블
    pub fn with_base() -> Self {
        let mut table = Self::new();
        for (source, target) in BASE_MAPPINGS {
            table.insert(source, target);
        }
        table
    }

    /// 항목 저장 (같은 키는 덮어씀)
    pub fn insert(&mut self, source: &str, target: &str) {
        self.entries.insert(source.to_string(), target.to_string());
    }

    /// 키가 없을 때만 저장. 저장했으면 true
    pub fn insert_if_absent(&mut self, source: &str, target: &str) -> bool {
        if self.entries.contains_key(source) {
            return false;
        }
        self.insert(source, target);
        true
    }

    pub fn resolve(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// 대상이 DB 용어인 경우에만 대상 반환
    pub fn resolve_canonical<'a>(&'a self, source: &str, terms: &CanonicalTerms) -> Option<&'a str> {
        self.resolve(source).filter(|target| terms.contains(target))
    }

    /// 사용자 매핑 병합
    ///
    /// 각 항목을 저장하고, 대상이 DB 용어인데 대상 키가 아직 없으면 역방향을 추가합니다.
    pub fn merge_overrides<'a, I>(&mut self, overrides: I, terms: &CanonicalTerms)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (source, target) in overrides {
            self.insert(source, target);
            if terms.contains(target) {
                self.insert_if_absent(target, source);
            }
        }
    }

    /// 역방향 보정
    ///
    /// 모든 항목을 한글->영문 / 영문->한글로 분류하고 빠진 역방향을 채웁니다.
    /// 기존 키는 건드리지 않으므로 여러 번 실행해도 결과가 같습니다.
    /// 반환: 새로 추가된 항목 수
    pub fn reconcile(&mut self, terms: &CanonicalTerms) -> usize {
        let missing: Vec<(String, String)> = self
            .entries
            .iter()
            .filter(|(source, target)| {
                classify_mapping(source, target, |t| terms.contains(t))
                    != MappingDirection::Unclassified
            })
            .map(|(source, target)| (target.clone(), source.clone()))
            .collect();

        missing
            .iter()
            .filter(|(source, target)| self.insert_if_absent(source, target))
            .count()
    }

    /// 용어로 매핑되는 한글 표기 목록 (긴 것부터)
    pub fn korean_aliases(&self, term: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .entries
            .iter()
            .filter(|(source, target)| target.as_str() == term && contains_hangul(source))
            .map(|(source, _)| source.as_str())
            .collect();
        aliases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        aliases
    }

    /// 전체 항목 (영속화용)
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> CanonicalTerms {
        CanonicalTerms::new(["customer", "product", "server", "데이터베이스"])
    }

    #[test]
    fn test_base_mappings() {
        let table = TermMappingTable::with_base();
        assert_eq!(table.resolve("커스터머"), Some("customer"));
        assert_eq!(table.resolve("서버"), Some("server"));
        assert_eq!(table.resolve("customer"), None);
    }

    #[test]
    fn test_merge_adds_reverse_for_canonical_target() {
        let mut table = TermMappingTable::new();
        let overrides: BTreeMap<String, String> = [
            ("고객".to_string(), "customer".to_string()),
            ("시스템".to_string(), "system".to_string()),
        ]
        .into_iter()
        .collect();

        table.merge_overrides(&overrides, &terms());

        assert_eq!(table.resolve("고객"), Some("customer"));
        assert_eq!(table.resolve("customer"), Some("고객"));
        // system은 DB 용어가 아니므로 역방향 없음
        assert_eq!(table.resolve("system"), None);
    }

    #[test]
    fn test_merge_does_not_overwrite_existing_reverse() {
        let mut table = TermMappingTable::new();
        table.insert("customer", "커스터머");
        let overrides: BTreeMap<String, String> =
            [("고객".to_string(), "customer".to_string())].into_iter().collect();

        table.merge_overrides(&overrides, &terms());

        assert_eq!(table.resolve("customer"), Some("커스터머"));
    }

    #[test]
    fn test_reconcile_fills_both_directions() {
        let mut table = TermMappingTable::with_base();
        table.insert("product", "프러덕트");
        let terms = terms();

        let added = table.reconcile(&terms);

        // 한글 -> 영문 항목의 역방향
        assert_eq!(table.resolve("customer"), Some("커스터머"));
        assert_eq!(table.resolve("server"), Some("서버"));
        // 영문 -> 한글 항목의 역방향
        assert_eq!(table.resolve("프러덕트"), Some("product"));
        // product 키는 이미 있으므로 그대로
        assert_eq!(table.resolve("product"), Some("프러덕트"));
        // ground는 DB 용어가 아님
        assert_eq!(table.resolve("ground"), None);
        assert_eq!(added, 3);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut table = TermMappingTable::with_base();
        let terms = terms();
        table.reconcile(&terms);
        let snapshot = table.entries().clone();

        assert_eq!(table.reconcile(&terms), 0);
        assert_eq!(table.entries(), &snapshot);
    }

    #[test]
    fn test_resolve_canonical() {
        let mut table = TermMappingTable::new();
        table.insert("쉬스템", "system");
        table.insert("써버", "server");
        let terms = terms();

        assert_eq!(table.resolve_canonical("써버", &terms), Some("server"));
        assert_eq!(table.resolve_canonical("쉬스템", &terms), None);
    }

    #[test]
    fn test_korean_aliases_longest_first() {
        let mut table = TermMappingTable::new();
        table.insert("고객", "customer");
        table.insert("커스터머", "customer");
        table.insert("customer", "고객");

        assert_eq!(table.korean_aliases("customer"), vec!["커스터머", "고객"]);
        assert!(table.korean_aliases("product").is_empty());
    }
}
