//! Query parsing and compilation / 查询解析与编译
//!
//! Turns a raw user string into a structured search intent scoped to one
//! FTS column, then renders it as an FTS5 MATCH expression. Supported
//! syntax / 支持的语法：
//!
//! - `"iron ingot"` exact phrase (at most one; a later phrase overwrites
//!   an earlier one) / 精确短语，后出现者生效
//! - `-ore` exclude a word / 排除词
//! - `craft*` prefix match / 前缀匹配
//! - `craft+` prefix expansion: matches `craft*` but suppresses the bare
//!   word, so one literal is not counted under both an exact and a
//!   prefix clause / 前缀扩展并抑制原词

use once_cell::sync::Lazy;
use regex::Regex;

/// Token scanner: a double-quoted phrase or a run of non-whitespace / 词法扫描
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"|\S+"#).unwrap());

/// Parsed representation of a raw query / 查询的结构化表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIntent {
    /// FTS column every clause is scoped to / 所有子句作用的FTS列
    pub column: String,
    /// Bare required words, in encounter order / 必需词，按出现顺序
    pub required: Vec<String>,
    /// Single exact phrase, last quoted phrase wins / 精确短语，后者覆盖前者
    pub phrase: Option<String>,
    /// Negated words, from `-word` and from the base of `word+` / 排除词
    pub excluded: Vec<String>,
    /// Prefix terms, trailing `*` kept verbatim / 前缀词，保留`*`
    pub prefix: Vec<String>,
}

/// Compiled FTS expression plus the exact-match literal / 编译后的FTS表达式及精确匹配词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    /// Space-joined MATCH expression / 空格连接的MATCH表达式
    pub expression: String,
    /// Trimmed raw query, used only for the weight-3 tie-break / 仅用于权重判定的原始查询
    pub exact_term: String,
}

/// Parse a raw query into a search intent / 将原始查询解析为搜索意图
///
/// Every non-phrase token lands in exactly one of required / excluded /
/// prefix. The caller is expected to have rejected blank input already.
pub fn parse(raw: &str, column: &str) -> SearchIntent {
    let mut intent = SearchIntent {
        column: column.to_string(),
        required: Vec::new(),
        phrase: None,
        excluded: Vec::new(),
        prefix: Vec::new(),
    };

    for cap in TOKEN_RE.captures_iter(raw) {
        if let Some(phrase) = cap.get(1) {
            // Last quoted phrase wins / 后出现的短语生效
            intent.phrase = Some(phrase.as_str().to_string());
            continue;
        }

        let word = &cap[0];
        if let Some(rest) = word.strip_prefix('-') {
            intent.excluded.push(rest.to_string());
        } else if word.ends_with('*') {
            intent.prefix.push(word.to_string());
        } else if let Some(base) = word.strip_suffix('+') {
            // Prefix expansion: match base*, suppress the bare word so the
            // same literal is not counted twice / 前缀扩展并抑制原词
            intent.prefix.push(format!("{}*", base));
            intent.excluded.push(base.to_string());
        } else {
            intent.required.push(word.to_string());
        }
    }

    intent
}

impl SearchIntent {
    /// Render the FTS5 MATCH expression / 生成FTS5 MATCH表达式
    ///
    /// Clause order: phrase, then positives (required and prefix terms),
    /// then `NOT` clauses. Term text is never altered beyond the column
    /// qualifier. Zero clauses yield an empty expression, which FTS5
    /// rejects as a query error downstream.
    pub fn to_expression(&self) -> String {
        let mut clauses: Vec<String> = Vec::new();

        if let Some(ref phrase) = self.phrase {
            clauses.push(format!("{}:\"{}\"", self.column, phrase));
        }
        for term in &self.required {
            clauses.push(format!("{}:{}", self.column, term));
        }
        for term in &self.prefix {
            clauses.push(format!("{}:{}", self.column, term));
        }
        for term in &self.excluded {
            clauses.push(format!("NOT {}:{}", self.column, term));
        }

        clauses.join(" ")
    }
}

/// Trim, parse and compile in one step / 一步完成裁剪、解析与编译
pub fn compile(raw: &str, column: &str) -> CompiledQuery {
    let trimmed = raw.trim();
    let intent = parse(trimmed, column);
    CompiledQuery {
        expression: intent.to_expression(),
        exact_term: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words_are_required() {
        let intent = parse("iron ingot", "origin_name");
        assert_eq!(intent.required, vec!["iron", "ingot"]);
        assert!(intent.phrase.is_none());
        assert!(intent.excluded.is_empty());
        assert!(intent.prefix.is_empty());
        assert_eq!(
            intent.to_expression(),
            "origin_name:iron origin_name:ingot"
        );
    }

    #[test]
    fn test_phrase_only() {
        let intent = parse("\"foo bar\"", "origin_name");
        assert_eq!(intent.phrase.as_deref(), Some("foo bar"));
        assert!(intent.required.is_empty());
        assert!(intent.excluded.is_empty());
        assert!(intent.prefix.is_empty());
        // Compiler still emits a valid expression / 仍需生成合法表达式
        assert_eq!(intent.to_expression(), "origin_name:\"foo bar\"");
    }

    #[test]
    fn test_last_phrase_wins() {
        let intent = parse("\"first one\" \"second one\"", "origin_name");
        assert_eq!(intent.phrase.as_deref(), Some("second one"));
    }

    #[test]
    fn test_exclusion() {
        let intent = parse("-ore", "origin_name");
        assert_eq!(intent.excluded, vec!["ore"]);
        assert!(intent.required.is_empty());
        assert!(intent.prefix.is_empty());
        // Only the NOT clause / 仅含NOT子句
        assert_eq!(intent.to_expression(), "NOT origin_name:ore");
    }

    #[test]
    fn test_prefix_verbatim() {
        let intent = parse("craft*", "origin_name");
        assert_eq!(intent.prefix, vec!["craft*"]);
        assert_eq!(intent.to_expression(), "origin_name:craft*");
    }

    #[test]
    fn test_prefix_expansion_suppresses_base() {
        let intent = parse("craft+", "origin_name");
        assert!(intent.required.is_empty());
        assert_eq!(intent.prefix, vec!["craft*"]);
        assert_eq!(intent.excluded, vec!["craft"]);
        assert_eq!(
            intent.to_expression(),
            "origin_name:craft* NOT origin_name:craft"
        );
    }

    #[test]
    fn test_mixed_query_clause_order() {
        let compiled = compile("  \"iron ingot\" block -ore craft+  ", "origin_name");
        assert_eq!(
            compiled.expression,
            "origin_name:\"iron ingot\" origin_name:block origin_name:craft* \
             NOT origin_name:ore NOT origin_name:craft"
        );
        assert_eq!(compiled.exact_term, "\"iron ingot\" block -ore craft+");
    }

    #[test]
    fn test_no_stray_quotes_outside_phrase() {
        let compiled = compile("\"iron ingot\" block -ore craft+ gear*", "origin_name");
        // Exactly the two quotes of the single phrase clause / 仅短语子句的一对引号
        assert_eq!(compiled.expression.matches('"').count(), 2);
        let phrase_clause = "origin_name:\"iron ingot\"";
        assert!(compiled.expression.starts_with(phrase_clause));
        assert!(!compiled.expression[phrase_clause.len()..].contains('"'));
    }

    #[test]
    fn test_column_scoping() {
        let intent = parse("铁锭", "trans_name");
        assert_eq!(intent.to_expression(), "trans_name:铁锭");
    }
}
