//! 매핑 캐시와 DB 용어 파일
//!
//! 매핑 캐시는 `{ "원본": "대상" }` 형태의 JSON 객체 하나입니다.
//! 용어 파일은 문자열 배열, `{ "terms": [...] }`, 또는 테이블/필드 설명
//! `{ "tables": [...], "fields": { "테이블": [...] } }` 중 하나를 받습니다.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::app_dir;
use crate::error::{MapperError, MapperResult};

/// 매핑 캐시 경로: ~/.pronunciation_mapper/mapping_cache.json
pub fn cache_path() -> PathBuf {
    app_dir().join("mapping_cache.json")
}

/// 매핑 캐시 로드 (파일이 없으면 빈 매핑)
pub fn load_mappings(path: &Path) -> MapperResult<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    let mappings: BTreeMap<String, String> = serde_json::from_str(&content)?;
    log::debug!("매핑 {}개 로드: {}", mappings.len(), path.display());
    Ok(mappings)
}

/// 매핑 캐시 저장 (상위 디렉토리 생성)
pub fn save_mappings(mappings: &BTreeMap<String, String>, path: &Path) -> MapperResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(mappings)?;
    fs::write(path, json)?;
    log::info!("매핑 {}개 저장: {}", mappings.len(), path.display());
    Ok(())
}

/// DB 구조 설명
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DbDescription {
    #[serde(default)]
    pub tables: Vec<String>,
    /// 테이블 -> 필드 목록
    #[serde(default)]
    pub fields: BTreeMap<String, Vec<String>>,
}

/// 테이블명과 필드명을 모아 중복 제거 후 정렬
pub fn extract_db_terms(description: &DbDescription) -> Vec<String> {
    description
        .tables
        .iter()
        .chain(description.fields.values().flatten())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TermFile {
    List(Vec<String>),
    Wrapped { terms: Vec<String> },
    Described(DbDescription),
}

/// DB 용어 파일 로드
pub fn load_term_file(path: &Path) -> MapperResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let invalid = |reason: &str| MapperError::InvalidTermFile {
        path: path.display().to_string(),
        reason: reason.to_string(),
    };

    let parsed: TermFile = serde_json::from_str(&content)
        .map_err(|_| invalid("문자열 배열 또는 terms 목록이 필요합니다"))?;

    let terms = match parsed {
        TermFile::List(terms) | TermFile::Wrapped { terms } => terms,
        TermFile::Described(description) => {
            if description.tables.is_empty() && description.fields.is_empty() {
                return Err(invalid("용어가 없습니다"));
            }
            extract_db_terms(&description)
        }
    };

    log::debug!("DB 용어 {}개 로드: {}", terms.len(), path.display());
    Ok(terms)
}
