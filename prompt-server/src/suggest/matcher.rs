//! Keyword Matcher
//!
//! 三层匹配：对一个已规范化的查询串，把分类下的关键词
//! 分入三个互斥的层级，层内按热度降序：
//!
//! 1. **Exact** - 查询是关键词文本的子串
//! 2. **Related** - 查询是某个相关词的子串
//! 3. **Partial** - 查询的某个空白分隔的词是关键词文本的子串
//!
//! 层级拼接后按关键词身份去重 (保留首次出现)，截断到 10 条。
//! 纯函数，不触存储。

use std::collections::HashSet;

use crate::db::models::Keyword;

/// 单次建议的最大条数
pub const MAX_SUGGESTIONS: usize = 10;

/// 低于该长度的查询跳过匹配，直接返回热度榜
pub const MIN_QUERY_CHARS: usize = 3;

/// Normalize a raw user query: trim + lowercase
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether the normalized query is too short for matching
pub fn is_short_query(query: &str) -> bool {
    query.chars().count() < MIN_QUERY_CHARS
}

/// Uppercase the first character, keep the rest as-is
///
/// 用于把未命中的 (已小写的) 查询转成新关键词文本，如 "jsx" -> "Jsx"
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Rank keywords against a normalized query
///
/// 输入关键词顺序不做假设；返回至多 [`MAX_SUGGESTIONS`] 条引用。
pub fn rank<'a>(keywords: &'a [Keyword], query: &str) -> Vec<&'a Keyword> {
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut exact: Vec<&Keyword> = Vec::new();
    let mut related: Vec<&Keyword> = Vec::new();
    let mut partial: Vec<&Keyword> = Vec::new();

    for keyword in keywords {
        let text = keyword.text.to_lowercase();
        if text.contains(query) {
            exact.push(keyword);
        } else if keyword
            .related_terms()
            .iter()
            .any(|term| term.to_lowercase().contains(query))
        {
            related.push(keyword);
        } else if words.iter().any(|word| text.contains(word)) {
            partial.push(keyword);
        }
    }

    // 层内热度降序；stable sort 让同分保持输入顺序 (implementation-defined)
    for tier in [&mut exact, &mut related, &mut partial] {
        tier.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    }

    // 按身份去重，保留首次出现，截断
    let mut seen: HashSet<String> = HashSet::new();
    let mut ranked: Vec<&Keyword> = Vec::new();
    for keyword in exact.into_iter().chain(related).chain(partial) {
        if let Some(id) = keyword.id.as_ref().map(|t| t.to_string())
            && !seen.insert(id)
        {
            continue;
        }
        ranked.push(keyword);
        if ranked.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::sql::Thing;

    fn kw(id: &str, text: &str, popularity: i64, related: &str) -> Keyword {
        Keyword {
            id: Some(Thing::from(("keyword", id))),
            text: text.to_string(),
            category: Thing::from(("category", "coding")),
            popularity,
            related_keywords: related.to_string(),
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Python Code  "), "python code");
    }

    #[test]
    fn test_short_query_cutoff() {
        assert!(is_short_query(""));
        assert!(is_short_query("py"));
        assert!(!is_short_query("jsx"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("jsx"), "Jsx");
        assert_eq!(capitalize("python code"), "Python code");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_exact_match_is_case_insensitive_substring() {
        let keywords = vec![kw("1", "Python", 10, ""), kw("2", "JavaScript", 8, "")];
        let ranked = rank(&keywords, "python");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].text, "Python");
    }

    #[test]
    fn test_exact_tier_ranks_above_related_and_partial() {
        let keywords = vec![
            // partial only: 命中查询词 "python"，但不含完整查询串
            kw("1", "python basics", 9, ""),
            // related only: 相关词包含完整查询串
            kw("2", "tooling", 8, "daily python scripts, cron jobs"),
            // exact: 文本包含完整查询串
            kw("3", "advanced python scripts", 2, ""),
        ];
        let ranked = rank(&keywords, "python scripts");
        assert_eq!(
            ranked.iter().map(|k| k.text.as_str()).collect::<Vec<_>>(),
            vec!["advanced python scripts", "tooling", "python basics"]
        );
    }

    #[test]
    fn test_tiers_sorted_by_popularity_desc() {
        let keywords = vec![
            kw("1", "python basics", 3, ""),
            kw("2", "Python", 10, ""),
            kw("3", "python web", 7, ""),
        ];
        let ranked = rank(&keywords, "python");
        let pops: Vec<i64> = ranked.iter().map(|k| k.popularity).collect();
        assert_eq!(pops, vec![10, 7, 3]);
    }

    #[test]
    fn test_partial_tier_matches_single_query_word() {
        let keywords = vec![kw("1", "python code", 5, "")];
        // 完整查询不是子串，但词 "code" 是
        let ranked = rank(&keywords, "javascript code");
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_no_duplicate_identities() {
        let dup = kw("1", "Python", 10, "python programming");
        let keywords = vec![dup.clone(), dup];
        let ranked = rank(&keywords, "python");
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_truncated_to_max_suggestions() {
        let keywords: Vec<Keyword> = (0..15)
            .map(|i| kw(&i.to_string(), &format!("python {i}"), i, ""))
            .collect();
        let ranked = rank(&keywords, "python");
        assert_eq!(ranked.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_total_miss_returns_empty() {
        let keywords = vec![kw("1", "Python", 10, "python programming")];
        assert!(rank(&keywords, "jsx").is_empty());
    }
}
