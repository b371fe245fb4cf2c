//! FAQ 匹配引擎
//!
//! 将用户消息与 FAQ 目录打分匹配。纯函数式：给定 (消息, 目录, 配置)
//! 结果是确定的，不持有可变状态。
//!
//! 打分规则：
//! - 关键词是消息子串 +3；否则与消息分词互为子串，每个命中分词 +1
//! - 问题单词（长度 > 2）是消息子串 +2
//! - 消息分词与（问题单词 ∪ 关键词）交集大于 1 时，加交集大小
//!
//! 并列取目录扫描顺序中先出现的条目。得分为 1 的最高分视为无匹配，
//! 要求至少两个弱信号或一个强信号。

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::faq::FaqEntry;

/// 预处理保留 \w、空白、? 和 !，其余字符全部剔除
static STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s?!]").expect("invalid strip pattern"));

/// 接受匹配所需的最低原始分
pub const MIN_MATCH_SCORE: u32 = 2;

/// 匹配器配置
///
/// 固定的问候语映射和兜底回复，构造时注入，运行期不可变。
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// 问候语子串 -> 罐头回复（按声明顺序检查）
    pub greetings: Vec<(String, String)>,
    /// 未命中时的兜底回复
    pub default_response: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        let greetings = [
            ("hello", "Hello! How can I help you today?"),
            ("hi", "Hi there! What can I do for you?"),
            ("hey", "Hey! How can I assist you?"),
            ("good morning", "Good morning! How may I help you?"),
            ("good afternoon", "Good afternoon! What can I do for you?"),
            ("good evening", "Good evening! How can I assist you today?"),
        ];
        Self {
            greetings: greetings
                .iter()
                .map(|(greeting, reply)| (greeting.to_string(), reply.to_string()))
                .collect(),
            default_response: "I'm sorry, I couldn't find an answer to your question. \
                Please contact our support team at support@ddecor.com or call \
                +91 22 1234 5678 for further assistance."
                .to_string(),
        }
    }
}

/// 匹配结果
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// 命中的条目（目录中的索引）
    pub entry_index: Option<usize>,
    /// 原始分（非负）
    pub score: u32,
}

/// FAQ 匹配器
#[derive(Debug, Clone, Default)]
pub struct FaqMatcher {
    config: MatcherConfig,
}

impl FaqMatcher {
    /// 创建匹配器
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// 匹配器配置
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// 兜底回复文本
    pub fn default_response(&self) -> &str {
        &self.config.default_response
    }

    /// 清洗并归一化用户消息
    pub fn preprocess(&self, message: &str) -> String {
        let lowered = message.to_lowercase();
        STRIP_PATTERN.replace_all(lowered.trim(), "").into_owned()
    }

    /// 检查消息是否为问候语，命中返回罐头回复
    ///
    /// 对小写、去首尾空白后的原始消息做子串检查，绕过打分流程。
    pub fn check_greeting(&self, message: &str) -> Option<&str> {
        let lowered = message.to_lowercase();
        let trimmed = lowered.trim();
        self.config
            .greetings
            .iter()
            .find(|(greeting, _)| trimmed.contains(greeting.as_str()))
            .map(|(_, reply)| reply.as_str())
    }

    /// 在目录中寻找最佳匹配
    ///
    /// 只考虑 active 条目。返回最高分条目的索引与原始分；
    /// 最高分为 0 时无匹配。并列保留先见条目（严格大于才更新）。
    pub fn find_best_match(&self, user_message: &str, catalog: &[FaqEntry]) -> MatchResult {
        let processed = self.preprocess(user_message);
        let words: Vec<&str> = processed.split_whitespace().collect();

        let mut best_index = None;
        let mut max_score = 0u32;

        for (index, entry) in catalog.iter().enumerate() {
            if !entry.active {
                continue;
            }

            let score = score_entry(&processed, &words, entry);
            if score > max_score {
                max_score = score;
                best_index = Some(index);
            }
        }

        MatchResult {
            entry_index: best_index,
            score: max_score,
        }
    }
}

/// 对单个条目打分
fn score_entry(processed: &str, words: &[&str], entry: &FaqEntry) -> u32 {
    let mut score = 0u32;
    let question_words = entry.question_words();

    for keyword in &entry.keywords {
        if processed.contains(keyword.as_str()) {
            score += 3;
        } else {
            for word in words {
                if word.contains(keyword.as_str()) || keyword.contains(word) {
                    score += 1;
                }
            }
        }
    }

    for question_word in &question_words {
        if question_word.len() > 2 && processed.contains(question_word.as_str()) {
            score += 2;
        }
    }

    let message_words: HashSet<&str> = words.iter().copied().collect();
    let entry_words: HashSet<&str> = question_words
        .iter()
        .map(|word| word.as_str())
        .chain(entry.keywords.iter().map(|keyword| keyword.as_str()))
        .collect();
    let common = message_words.intersection(&entry_words).count() as u32;
    if common > 1 {
        score += common;
    }

    score
}

/// 原始分换算为 0-100 的置信度
pub fn confidence_from_score(score: u32) -> u32 {
    (score * 10).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new(
                "What is your return policy?",
                "Our return policy allows returns within 7 days.",
                vec![
                    "return".to_string(),
                    "policy".to_string(),
                    "refund".to_string(),
                ],
            ),
            FaqEntry::new(
                "How long does shipping take?",
                "Standard shipping takes 3-5 business days.",
                vec![
                    "shipping".to_string(),
                    "delivery".to_string(),
                    "how long".to_string(),
                ],
            ),
        ]
    }

    #[rstest]
    #[case("Hello there", "Hello! How can I help you today?")]
    #[case("I said hey", "Hey! How can I assist you?")]
    #[case("GOOD MORNING team", "Good morning! How may I help you?")]
    #[case("  hi  ", "Hi there! What can I do for you?")]
    fn test_greeting_is_case_insensitive_substring(#[case] message: &str, #[case] reply: &str) {
        let matcher = FaqMatcher::default();
        assert_eq!(matcher.check_greeting(message), Some(reply));
    }

    #[test]
    fn test_non_greeting_passes_through() {
        let matcher = FaqMatcher::default();
        assert_eq!(matcher.check_greeting("where is my package"), None);
    }

    #[rstest]
    #[case("What's your RETURN policy??", "whats your return policy??")]
    #[case("  track #my $order!  ", "track my order!")]
    #[case("...", "")]
    fn test_preprocess(#[case] raw: &str, #[case] expected: &str) {
        let matcher = FaqMatcher::default();
        assert_eq!(matcher.preprocess(raw), expected);
    }

    #[test]
    fn test_refund_policy_scenario() {
        let matcher = FaqMatcher::default();
        let catalog = catalog();

        let result = matcher.find_best_match("what is your refund policy", &catalog);
        assert_eq!(result.entry_index, Some(0));
        // 关键词 policy +3, refund +3；问题单词 what/your +2+2；交集 5 个 +5
        assert_eq!(result.score, 15);
        assert_eq!(confidence_from_score(result.score), 100);
    }

    #[test]
    fn test_gibberish_scores_zero() {
        let matcher = FaqMatcher::default();
        let result = matcher.find_best_match("asdkjasd", &catalog());
        assert_eq!(result.entry_index, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_message_scores_zero() {
        let matcher = FaqMatcher::default();
        let result = matcher.find_best_match("   ", &catalog());
        assert_eq!(result.entry_index, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_inactive_entries_are_skipped() {
        let matcher = FaqMatcher::default();
        let mut catalog = catalog();
        catalog[0].active = false;

        let result = matcher.find_best_match("what is your refund policy", &catalog);
        assert_ne!(result.entry_index, Some(0));
    }

    #[test]
    fn test_determinism() {
        let matcher = FaqMatcher::default();
        let catalog = catalog();
        let first = matcher.find_best_match("how long does shipping take", &catalog);
        let second = matcher.find_best_match("how long does shipping take", &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_break_keeps_first_entry() {
        let matcher = FaqMatcher::default();
        // 两个条目对同一消息得分完全相同，目录顺序在前者胜出
        let catalog = vec![
            FaqEntry::new("Alpha?", "first", vec!["widget".to_string()]),
            FaqEntry::new("Beta?", "second", vec!["widget".to_string()]),
        ];

        let result = matcher.find_best_match("widget", &catalog);
        assert_eq!(result.entry_index, Some(0));

        let reversed: Vec<FaqEntry> = catalog.into_iter().rev().collect();
        let result = matcher.find_best_match("widget", &reversed);
        assert_eq!(result.entry_index, Some(0));
    }

    #[test]
    fn test_partial_keyword_match_scores_one_per_word() {
        let matcher = FaqMatcher::default();
        // "ship" 不是消息子串匹配的关键词，但与 "shipment" 互为子串
        let catalog = vec![FaqEntry::new("Q?", "a", vec!["shipment".to_string()])];
        let result = matcher.find_best_match("ship it", &catalog);
        assert_eq!(result.score, 1);
        assert_eq!(result.entry_index, Some(0));
    }

    #[test]
    fn test_confidence_scaling() {
        assert_eq!(confidence_from_score(0), 0);
        assert_eq!(confidence_from_score(2), 20);
        assert_eq!(confidence_from_score(8), 80);
        assert_eq!(confidence_from_score(15), 100);
    }
}
