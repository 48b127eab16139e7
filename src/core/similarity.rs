//! 발음 문자열 간 편집 거리

/// 글자 단위 Levenshtein 거리 (삽입/삭제/치환 비용 1)
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // 짧은 쪽을 열로 사용
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(lc != sc);
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

/// 정규화된 편집 거리 (0.0 ~ 1.0)
///
/// 거리를 긴 쪽 길이로 나눕니다. 빈 문자열끼리는 0.0.
/// 삼각 부등식은 보장하지 않으므로 최근접 순위 매기기에만 사용합니다.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / max_len as f64
}
