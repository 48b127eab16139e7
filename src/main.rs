//! pronunciation-mapper - 음성 인식 결과 DB 용어 교정 도구

use clap::{Args, CommandFactory, Parser, Subcommand};
use pronunciation_mapper::config::load_config;
use pronunciation_mapper::persistence::{load_mappings, load_term_file, save_mappings};
use pronunciation_mapper::{default_terms, MapperConfig, MapperResult, PronunciationMapper};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pronunciation-mapper", version, about = "발음 유사도 기반 매핑 도구")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 단일 단어 매핑
    MapWord {
        /// 매핑할 단어
        word: String,
        #[command(flatten)]
        lookup: LookupArgs,
    },
    /// 문장 내 단어 매핑
    MapSentence {
        /// 매핑할 문장
        sentence: String,
        #[command(flatten)]
        lookup: LookupArgs,
    },
    /// 사용자 정의 매핑 추가
    AddMapping {
        /// 원본 단어
        source: String,
        /// 대상 단어
        target: String,
        /// 매핑을 캐시에 저장
        #[arg(short, long)]
        save: bool,
    },
}

#[derive(Args, Debug, Default)]
struct LookupArgs {
    /// DB 용어 파일(.json)
    #[arg(short = 'd', long = "db-terms")]
    db_terms: Option<PathBuf>,
    /// 유사도 임계값
    #[arg(short, long)]
    threshold: Option<f64>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (warn 이상만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::from(1);
    };

    match run(command, load_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("오류: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(command: Command, config: MapperConfig) -> MapperResult<()> {
    let cache_path = config.resolved_cache_path();
    let mut cached = load_mappings(&cache_path)?;

    match command {
        Command::MapWord { word, lookup } => {
            let mapper = build_mapper(&config, &lookup, &cached)?;
            let result = mapper.find_closest_term(&word);
            println!("{} → {} (유사도: {:.2})", word, result.text, 1.0 - result.score);
        }
        Command::MapSentence { sentence, lookup } => {
            let mapper = build_mapper(&config, &lookup, &cached)?;
            println!("원문: {}", sentence);
            println!("매핑: {}", mapper.map_sentence(&sentence));
        }
        Command::AddMapping {
            source,
            target,
            save,
        } => {
            let mut mapper = build_mapper(&config, &LookupArgs::default(), &cached)?;
            mapper.add_mapping(&source, &target);
            println!("매핑 추가: {} → {}", source, target);

            if save {
                cached.insert(source, target);
                save_mappings(&cached, &cache_path)?;
                println!("매핑이 저장됨: {}", cache_path.display());
            }
        }
    }

    Ok(())
}

fn build_mapper(
    config: &MapperConfig,
    lookup: &LookupArgs,
    cached: &BTreeMap<String, String>,
) -> MapperResult<PronunciationMapper> {
    let terms = match lookup.db_terms.as_ref().or(config.db_terms_path.as_ref()) {
        Some(path) => load_term_file(path)?,
        None => default_terms(),
    };

    let mut options = config.engine_options();
    if let Some(threshold) = lookup.threshold {
        options = options.with_threshold(threshold);
    }

    Ok(PronunciationMapper::with_overrides(terms, cached, options))
}
