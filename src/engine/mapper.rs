//! 발음 매퍼
//!
//! 음성 인식 결과의 단어를 DB 용어로 교정합니다.
//!
//! # 후보 생성 순서
//!
//! 1. 한글 숫자 전처리
//! 2. 매핑 테이블 직접 일치 (0.0, 즉시 반환)
//! 3. 단어 안의 알려진 한글 표기 치환 (0.1)
//! 4. 단어 전체 발음 최근접 (거리), 조사 유지
//! 5. 한글/영숫자 구간별 직접 일치 (0.2) 와 발음 최근접 (거리 + 0.3)
//!
//! 가장 낮은 점수의 후보가 이기고, 같은 점수면 먼저 만들어진 후보가 이깁니다.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::candidate::{CandidatePool, Correction, Strategy};
use super::index::PhoneticIndex;
use super::options::{priority, EngineOptions};
use crate::core::{pronounce, Phonetic};
use crate::detection::{contains_hangul, is_ascii_term, split_postposition};
use crate::mapping::{CanonicalTerms, TermMappingTable};
use crate::numeral::convert_korean_numbers;

lazy_static! {
    /// 한글 음절 구간 또는 영숫자 구간
    static ref TOKEN_RUN: Option<Regex> = match Regex::new(r"[가-힣]+|[a-zA-Z0-9]+") {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("구간 분리 패턴 컴파일 실패: {}", e);
            None
        }
    };
}

/// 바이트 구간을 다른 문자열로 바꾼 새 문자열
fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len() + replacement.len());
    result.push_str(&text[..start]);
    result.push_str(replacement);
    result.push_str(&text[end..]);
    result
}

/// 발음 매퍼
///
/// 용어 집합, 매핑 테이블, 발음 색인을 함께 소유하며
/// 변경 메서드는 역방향 매핑과 색인을 항상 같이 갱신합니다.
#[derive(Debug, Clone)]
pub struct PronunciationMapper {
    terms: CanonicalTerms,
    table: TermMappingTable,
    index: PhoneticIndex,
    options: EngineOptions,
}

impl PronunciationMapper {
    /// 기본 설정으로 생성
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_overrides(terms, &BTreeMap::new(), EngineOptions::default())
    }

    pub fn with_options<I, S>(terms: I, options: EngineOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_overrides(terms, &BTreeMap::new(), options)
    }

    /// 사용자 매핑을 포함해 생성
    ///
    /// 기본 테이블 -> 사용자 매핑 병합 -> 역방향 보정 -> 발음 색인 순으로 구성합니다.
    pub fn with_overrides<I, S>(
        terms: I,
        overrides: &BTreeMap<String, String>,
        options: EngineOptions,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = CanonicalTerms::new(terms);
        let mut table = TermMappingTable::with_base();
        table.merge_overrides(overrides, &terms);
        let added = table.reconcile(&terms);
        log::debug!("역방향 매핑 {}개 추가", added);

        let mut mapper = Self {
            terms,
            table,
            index: PhoneticIndex::new(),
            options,
        };
        mapper.rebuild_index();
        mapper
    }

    fn rebuild_index(&mut self) {
        let mut index = PhoneticIndex::new();
        for term in self.terms.iter() {
            index.upsert(term, self.phonetic(term));
        }
        self.index = index;
    }

    fn refresh_index_entry(&mut self, term: &str) {
        if self.terms.contains(term) {
            let phonetic = self.phonetic(term);
            self.index.upsert(term, phonetic);
        }
    }

    /// 단어의 발음 표기
    ///
    /// 매핑 테이블에 항목이 있으면 대상 표기를 발음합니다.
    pub fn phonetic(&self, word: &str) -> Phonetic {
        let resolved = self.table.resolve(word).unwrap_or(word);
        let phonetic = pronounce(resolved);
        if !phonetic.is_normalized() {
            log::debug!("정규화되지 않은 발음 사용: {}", word);
        }
        phonetic
    }

    /// 기본 임계값으로 최근접 용어 검색
    pub fn find_closest_term(&self, query: &str) -> Correction {
        self.find_closest_term_with(query, self.options.threshold)
    }

    /// 주어진 임계값으로 최근접 용어 검색
    pub fn find_closest_term_with(&self, query: &str, threshold: f64) -> Correction {
        let query = convert_korean_numbers(query);
        if let Some(target) = self.table.resolve_canonical(&query, &self.terms) {
            return Correction::new(target, priority::EXACT, Strategy::ExactOverride);
        }

        let mut pool = CandidatePool::new();
        self.push_compound_candidates(&query, &mut pool);
        self.push_whole_word_candidate(&query, threshold, &mut pool);
        self.push_token_candidates(&query, threshold, &mut pool);

        match pool.into_best() {
            Some(best) => {
                log::debug!("{} -> {} ({:?})", query, best.text, best.strategy);
                best
            }
            None => Correction::unchanged(query),
        }
    }

    /// 단어 안에서 용어의 한글 표기를 찾아 치환
    ///
    /// 한글 단어에서는 영문 용어를 별칭까지 건너뜁니다.
    /// 용어 자체가 아닌 한글 별칭만 검사합니다.
    fn push_compound_candidates(&self, query: &str, pool: &mut CandidatePool) {
        let korean_query = contains_hangul(query);

        for term in self.terms.iter() {
            if korean_query && is_ascii_term(term) {
                continue;
            }

            let hit = self
                .table
                .korean_aliases(term)
                .into_iter()
                .filter(|alias| *alias != term)
                .find_map(|alias| query.find(alias).map(|start| (start, start + alias.len())));

            if let Some((start, end)) = hit {
                pool.push(splice(query, start, end, term), priority::COMPOUND, Strategy::Compound);
            }
        }
    }

    fn push_whole_word_candidate(&self, query: &str, threshold: f64, pool: &mut CandidatePool) {
        let phonetic = self.phonetic(query);
        let Some((term, distance)) = self.index.nearest(phonetic.as_str()) else {
            return;
        };
        if distance > threshold {
            return;
        }

        let (_, postposition) = split_postposition(query);
        let text = format!("{}{}", term, postposition.unwrap_or(""));
        pool.push(text, distance, Strategy::WholeWord);
    }

    /// 한글 구간마다 직접 일치와 발음 최근접을 시도
    fn push_token_candidates(&self, query: &str, threshold: f64, pool: &mut CandidatePool) {
        let Some(token_run) = TOKEN_RUN.as_ref() else {
            return;
        };
        let runs: Vec<_> = token_run.find_iter(query).collect();
        if runs.len() < 2 {
            return;
        }

        for run in runs.iter().filter(|run| contains_hangul(run.as_str())) {
            if let Some(target) = self.table.resolve_canonical(run.as_str(), &self.terms) {
                pool.push(
                    splice(query, run.start(), run.end(), target),
                    priority::TOKEN_OVERRIDE,
                    Strategy::TokenOverride,
                );
            }

            let phonetic = self.phonetic(run.as_str());
            if let Some((term, distance)) = self.index.nearest(phonetic.as_str()) {
                if distance <= threshold {
                    pool.push(
                        splice(query, run.start(), run.end(), term),
                        distance + priority::TOKEN_PHONETIC_OFFSET,
                        Strategy::TokenPhonetic,
                    );
                }
            }
        }
    }

    /// 문장 전체 교정
    ///
    /// 숫자 전처리 후 공백으로 나눈 단어를 각각 교정하고 한 칸 공백으로 다시 잇습니다.
    pub fn map_sentence(&self, text: &str) -> String {
        convert_korean_numbers(text)
            .split_whitespace()
            .map(|word| self.find_closest_term(word).text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 매핑 추가 (대상을 용어 집합에도 추가)
    pub fn add_mapping(&mut self, source: &str, target: &str) {
        self.add_mapping_with(source, target, true);
    }

    /// 매핑 추가
    ///
    /// `add_to_terms`가 false면 대상이 용어 집합에 없어도 추가하지 않습니다.
    pub fn add_mapping_with(&mut self, source: &str, target: &str, add_to_terms: bool) {
        self.table.insert(source, target);
        if add_to_terms {
            self.add_term(target);
        }
        if self.terms.contains(target) && self.table.insert_if_absent(target, source) {
            log::debug!("역방향 매핑 추가: {} -> {}", target, source);
        }

        self.refresh_index_entry(source);
        self.refresh_index_entry(target);
        log::info!("매핑 추가: {} -> {}", source, target);
    }

    /// 용어 추가. 새로 추가됐으면 true
    pub fn add_term(&mut self, term: &str) -> bool {
        if !self.terms.push(term.to_string()) {
            return false;
        }
        let phonetic = self.phonetic(term);
        self.index.upsert(term, phonetic);
        log::info!("용어 추가: {}", term);
        true
    }

    pub fn terms(&self) -> &[String] {
        self.terms.as_slice()
    }

    pub fn threshold(&self) -> f64 {
        self.options.threshold
    }

    pub fn resolve(&self, source: &str) -> Option<&str> {
        self.table.resolve(source)
    }

    /// 매핑 테이블 전체 (저장용)
    pub fn mappings(&self) -> &BTreeMap<String, String> {
        self.table.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terms() -> Vec<&'static str> {
        vec![
            "customer",
            "product",
            "transaction",
            "payment",
            "shipping",
            "invoice",
            "ground",
            "cloud",
            "server",
            "데이터베이스",
            "테이블",
            "필드",
            "인덱스",
            "쿼리",
            "트랜잭션",
        ]
    }

    #[test]
    fn test_base_mapping_exact() {
        let mapper = PronunciationMapper::new(sample_terms());
        let result = mapper.find_closest_term("커스터머");
        assert_eq!(result.text, "customer");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.strategy, Strategy::ExactOverride);
    }

    #[test]
    fn test_phonetic_korean_terms() {
        let mapper = PronunciationMapper::new(sample_terms());
        assert_eq!(mapper.find_closest_term("데이타베이스").text, "데이터베이스");
        assert_eq!(mapper.find_closest_term("테이불").text, "테이블");
        assert_eq!(mapper.find_closest_term("휠드").text, "필드");
    }

    #[test]
    fn test_postposition_preserved() {
        let mapper = PronunciationMapper::new(sample_terms());
        let result = mapper.find_closest_term("서버의");
        assert_eq!(result.text, "server의");
        assert!(result.is_match());
    }

    fn mapper_with_database_alias() -> PronunciationMapper {
        let overrides: BTreeMap<String, String> =
            [("데이타베이스".to_string(), "데이터베이스".to_string())]
                .into_iter()
                .collect();
        PronunciationMapper::with_overrides(sample_terms(), &overrides, EngineOptions::default())
    }

    #[test]
    fn test_compound_korean_alias() {
        let mapper = mapper_with_database_alias();
        let result = mapper.find_closest_term("데이타베이스테이블");
        assert_eq!(result.text, "데이터베이스테이블");
        assert_eq!(result.strategy, Strategy::Compound);
        assert!((result.score - priority::COMPOUND).abs() < 1e-9);
    }

    #[test]
    fn test_compound_keeps_postposition() {
        let mapper = mapper_with_database_alias();
        assert_eq!(
            mapper.find_closest_term("데이타베이스테이블을").text,
            "데이터베이스테이블을"
        );
        let result = mapper.find_closest_term("데이타베이스의");
        assert_eq!(result.text, "데이터베이스의");
        assert_eq!(result.strategy, Strategy::Compound);
    }

    #[test]
    fn test_latin_term_alias_not_compound_in_korean_word() {
        let mapper = PronunciationMapper::new(sample_terms());
        for word in ["클라우드서버", "페이먼트내역", "트랜잭션로그"] {
            let result = mapper.find_closest_term(word);
            assert_ne!(result.strategy, Strategy::Compound, "{}", word);
        }
        assert_eq!(mapper.find_closest_term("클라우드서버").text, "클라우드서버");
        assert_eq!(mapper.find_closest_term("페이먼트내역").text, "페이먼트내역");
    }

    #[test]
    fn test_override_matched_after_numeral_prepass() {
        let overrides: BTreeMap<String, String> = [("오더66".to_string(), "order".to_string())]
            .into_iter()
            .collect();
        let mapper = PronunciationMapper::with_overrides(
            vec!["order", "customer"],
            &overrides,
            EngineOptions::default(),
        );

        let result = mapper.find_closest_term("오더육십육");
        assert_eq!(result.text, "order");
        assert_eq!(result.strategy, Strategy::ExactOverride);
    }

    #[test]
    fn test_unmatched_word_unchanged() {
        let mapper = PronunciationMapper::new(sample_terms());
        for word in ["있는", "로그를", "확인해주세요"] {
            let result = mapper.find_closest_term(word);
            assert_eq!(result.text, word);
            assert_eq!(result.score, 1.0);
            assert!(!result.is_match());
        }
    }

    #[test]
    fn test_explicit_threshold() {
        let mapper = PronunciationMapper::new(sample_terms());
        assert_eq!(
            mapper.find_closest_term_with("데이터배이스", 0.1).text,
            "데이터배이스"
        );
        assert_eq!(
            mapper.find_closest_term_with("데이터배이스", 0.7).text,
            "데이터베이스"
        );
    }

    #[test]
    fn test_numeral_prepass() {
        let mapper = PronunciationMapper::new(sample_terms());
        let result = mapper.find_closest_term("오더육십육");
        assert_eq!(result.text, "오더66");
        assert!(!result.is_match());
    }

    #[test]
    fn test_add_mapping_updates_terms_and_reverse() {
        let mut mapper = PronunciationMapper::new(vec!["customer", "product"]);
        mapper.add_mapping("사용자", "user");

        assert!(mapper.terms().iter().any(|t| t == "user"));
        assert_eq!(mapper.resolve("사용자"), Some("user"));
        assert_eq!(mapper.resolve("user"), Some("사용자"));

        let result = mapper.find_closest_term("사용자");
        assert_eq!(result.text, "user");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_add_mapping_without_term() {
        let mut mapper = PronunciationMapper::new(vec!["customer"]);
        mapper.add_mapping_with("시스템", "system", false);

        assert!(!mapper.terms().iter().any(|t| t == "system"));
        assert_eq!(mapper.resolve("시스템"), Some("system"));
        assert_eq!(mapper.resolve("system"), None);
        // 대상이 용어가 아니므로 직접 일치로 쓰이지 않음
        assert_ne!(mapper.find_closest_term("시스템").strategy, Strategy::ExactOverride);
    }

    #[test]
    fn test_add_term_is_deduplicated() {
        let mut mapper = PronunciationMapper::new(vec!["customer"]);
        assert!(mapper.add_term("order"));
        assert!(!mapper.add_term("order"));
        assert_eq!(mapper.terms(), ["customer", "order"]);
    }

    #[test]
    fn test_overrides_take_effect() {
        let overrides: BTreeMap<String, String> = [("고객", "customer"), ("제품", "product")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mapper = PronunciationMapper::with_overrides(
            vec!["customer", "product"],
            &overrides,
            EngineOptions::default(),
        );

        assert_eq!(mapper.find_closest_term("고객").text, "customer");
        assert_eq!(mapper.find_closest_term("제품").text, "product");
        assert_eq!(mapper.resolve("customer"), Some("고객"));
    }

    #[test]
    fn test_sentence() {
        let mapper = PronunciationMapper::new(sample_terms());
        assert_eq!(
            mapper.map_sentence("그라운드에 있는 데이타베이스 서버의 트랜잭션 로그를 확인해주세요"),
            "ground에 있는 데이터베이스 server의 transaction 로그를 확인해주세요"
        );
    }

    #[test]
    fn test_sentence_collapses_whitespace() {
        let mapper = PronunciationMapper::new(sample_terms());
        assert_eq!(mapper.map_sentence("  있는   로그를 "), "있는 로그를");
    }
}
