//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{EngineOptions, DEFAULT_THRESHOLD};
use crate::error::MapperResult;

const APP_DIR_NAME: &str = ".pronunciation_mapper";

/// 매퍼 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapperConfig {
    /// 발음 유사도 임계값
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// 매핑 캐시 파일 경로 (없으면 기본 위치)
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
    /// DB 용어 파일 경로 (없으면 기본 용어 목록)
    #[serde(default)]
    pub db_terms_path: Option<PathBuf>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            cache_path: None,
            db_terms_path: None,
        }
    }
}

impl MapperConfig {
    /// 엔진 설정으로 변환
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::new().with_threshold(self.threshold)
    }

    /// 매핑 캐시 경로 (설정값 우선)
    pub fn resolved_cache_path(&self) -> PathBuf {
        self.cache_path
            .clone()
            .unwrap_or_else(crate::persistence::cache_path)
    }
}

/// 앱 데이터 디렉토리: ~/.pronunciation_mapper
pub fn app_dir() -> PathBuf {
    let home = dirs::home_dir()
        .filter(|p| p.is_absolute() && p.is_dir())
        // 홈 디렉토리를 알 수 없으면 /var/tmp 사용
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(APP_DIR_NAME)
}

/// 설정 파일 경로: ~/.pronunciation_mapper/config.json
pub fn config_path() -> PathBuf {
    app_dir().join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MapperConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> MapperConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            MapperConfig::default()
        }),
        Err(_) => MapperConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &MapperConfig) -> MapperResult<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &MapperConfig, path: &Path) -> MapperResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
