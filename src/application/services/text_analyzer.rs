use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::is_stopword;

const SIMPLE_SENTENCE_LENGTH: f64 = 15.0;
const MODERATE_SENTENCE_LENGTH: f64 = 25.0;
const GENERAL_TOPIC: &str = "General";

// UAX#29 keeps "a b c. d e f." together because the next word is lowercase.
static TERMINAL_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+").expect("terminal break pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicRule {
    pub topic: String,
    pub keywords: Vec<String>,
}

impl TopicRule {
    pub fn new(topic: &str, keywords: &[&str]) -> Self {
        Self {
            topic: topic.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

pub fn default_topic_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new("Technology", &["technology", "tech", "software", "computer"]),
        TopicRule::new("Business", &["business", "company", "market", "finance"]),
        TopicRule::new("Education", &["education", "learning", "school", "university"]),
        TopicRule::new("Healthcare", &["health", "medical", "medicine", "doctor"]),
        TopicRule::new("News/Current Events", &["news", "current", "event", "update"]),
    ]
}

/// Tunables for keyword ranking and summarization.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRules {
    pub top_keywords: usize,
    pub summary_keywords: usize,
    pub summary_sentences: usize,
    pub topics: Vec<TopicRule>,
}

impl Default for AnalysisRules {
    fn default() -> Self {
        Self {
            top_keywords: 10,
            summary_keywords: 5,
            summary_sentences: 3,
            topics: default_topic_rules(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    fn from_avg_sentence_length(avg: f64) -> Self {
        if avg < SIMPLE_SENTENCE_LENGTH {
            Self::Simple
        } else if avg < MODERATE_SENTENCE_LENGTH {
            Self::Moderate
        } else {
            Self::Complex
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
    pub top_keywords: Vec<KeywordCount>,
    pub avg_sentence_length: f64,
    pub unique_words_ratio: f64,
    pub topics: Vec<String>,
    pub complexity: Complexity,
}

pub struct TextAnalyzer {
    rules: AnalysisRules,
}

impl TextAnalyzer {
    pub fn new(mut rules: AnalysisRules) -> Self {
        for rule in &mut rules.topics {
            for keyword in &mut rule.keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }
        Self { rules }
    }

    pub fn rules(&self) -> &AnalysisRules {
        &self.rules
    }

    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let normalized = collapse_whitespace(text);
        let sentences = split_sentences(&normalized);
        let words = lowercase_words(&normalized);

        let keywords: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|w| is_keyword(w))
            .collect();

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f64 / sentences.len() as f64
        };

        let unique_words_ratio = if keywords.is_empty() {
            0.0
        } else {
            let unique: HashSet<&str> = keywords.iter().copied().collect();
            unique.len() as f64 / keywords.len() as f64
        };

        TextAnalysis {
            word_count: words.len(),
            sentence_count: sentences.len(),
            character_count: normalized.chars().count(),
            top_keywords: rank_keywords(&keywords, self.rules.top_keywords),
            avg_sentence_length: round_to(avg_sentence_length, 2),
            unique_words_ratio: round_to(unique_words_ratio, 3),
            topics: self.detect_topics(&words),
            complexity: Complexity::from_avg_sentence_length(avg_sentence_length),
        }
    }

    fn detect_topics(&self, words: &[String]) -> Vec<String> {
        let vocabulary: HashSet<&str> = words.iter().map(String::as_str).collect();

        let topics: Vec<String> = self
            .rules
            .topics
            .iter()
            .filter(|rule| rule.keywords.iter().any(|k| vocabulary.contains(k.as_str())))
            .map(|rule| rule.topic.clone())
            .collect();

        if topics.is_empty() {
            vec![GENERAL_TOPIC.to_string()]
        } else {
            topics
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisRules::default())
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unicode sentence segmentation, additionally broken after every run of
/// terminal punctuation followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .flat_map(split_after_terminals)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn split_after_terminals(sentence: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for found in TERMINAL_BREAK.find_iter(sentence) {
        parts.push(&sentence[start..found.end()]);
        start = found.end();
    }
    parts.push(&sentence[start..]);
    parts
}

pub fn lowercase_words(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_lowercase).collect()
}

fn is_keyword(word: &str) -> bool {
    word.chars().all(char::is_alphanumeric) && !is_stopword(word)
}

/// Most frequent first; equal counts keep first-seen order.
fn rank_keywords(keywords: &[&str], limit: usize) -> Vec<KeywordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();

    for &word in keywords {
        match index.get(word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word, counts.len());
                counts.push(KeywordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
