//! 기본 DB 용어 목록

/// 용어 파일이 없을 때 쓰는 기본 용어
pub const DEFAULT_TERMS: &[&str] = &[
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
];

pub fn default_terms() -> Vec<String> {
    DEFAULT_TERMS.iter().map(|term| term.to_string()).collect()
}
