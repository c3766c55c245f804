use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::ProcessType;

use super::text_analyzer::{TextAnalysis, TextAnalyzer, collapse_whitespace, split_sentences};

const FALLBACK_SUMMARY_SENTENCES: usize = 2;
const REPORT_KEY_TERMS: usize = 5;
const REPORT_EXTRA_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedText {
    pub processed_content: String,
    /// Whitespace-delimited tokens of the input.
    pub word_count: usize,
    /// Unicode scalar values of the input.
    pub char_count: usize,
    pub analysis: TextAnalysis,
}

pub struct TextProcessingService {
    analyzer: TextAnalyzer,
}

impl TextProcessingService {
    pub fn new(analyzer: TextAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn process(&self, text: &str, process_type: &ProcessType) -> ProcessedText {
        let analysis = self.analyzer.analyze(text);

        let processed_content = match process_type {
            ProcessType::Summary => self.summarize(text, &analysis),
            ProcessType::Explanation => explain(text, &analysis),
            ProcessType::Analysis => {
                serde_json::to_string_pretty(&analysis).unwrap_or_else(|_| text.to_string())
            }
            ProcessType::Other(_) => text.to_string(),
        };

        tracing::debug!(
            process_type = process_type.as_str(),
            words = analysis.word_count,
            sentences = analysis.sentence_count,
            topics = ?analysis.topics,
            "Text processed"
        );

        ProcessedText {
            processed_content,
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            analysis,
        }
    }

    /// Picks the sentences densest in top keywords, in score order.
    fn summarize(&self, text: &str, analysis: &TextAnalysis) -> String {
        let rules = self.analyzer.rules();
        let sentences = split_sentences(&collapse_whitespace(text));
        let keywords: HashSet<&str> = analysis
            .top_keywords
            .iter()
            .take(rules.summary_keywords)
            .map(|k| k.word.as_str())
            .collect();

        let mut scored: Vec<(&str, usize)> = sentences
            .iter()
            .map(|sentence| {
                let score = sentence
                    .unicode_words()
                    .filter(|w| keywords.contains(w.to_lowercase().as_str()))
                    .count();
                (sentence.as_str(), score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let important: Vec<&str> = scored
            .iter()
            .take(rules.summary_sentences)
            .filter(|(_, score)| *score > 0)
            .map(|(sentence, _)| *sentence)
            .collect();

        if important.is_empty() {
            leading_sentences(&sentences, FALLBACK_SUMMARY_SENTENCES)
        } else {
            important.join(" ")
        }
    }
}

impl Default for TextProcessingService {
    fn default() -> Self {
        Self::new(TextAnalyzer::default())
    }
}

fn leading_sentences(sentences: &[String], count: usize) -> String {
    let mut summary = sentences
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if !summary.is_empty() && !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }
    summary
}

fn explain(text: &str, analysis: &TextAnalysis) -> String {
    let sentences = split_sentences(&collapse_whitespace(text));

    let mut lines = vec![
        "Document Analysis Report".to_string(),
        String::new(),
        "Content Overview:".to_string(),
        format!("- Total Words: {}", thousands(analysis.word_count)),
        format!("- Total Sentences: {}", thousands(analysis.sentence_count)),
        format!("- Characters: {}", thousands(analysis.character_count)),
        format!("- Reading Complexity: {}", analysis.complexity.as_str()),
        String::new(),
        format!("Identified Topics: {}", analysis.topics.join(", ")),
        String::new(),
    ];

    if !analysis.top_keywords.is_empty() {
        lines.push("Key Terms:".to_string());
        lines.extend(
            analysis
                .top_keywords
                .iter()
                .take(REPORT_KEY_TERMS)
                .enumerate()
                .map(|(i, k)| format!("{}. {} (appears {} times)", i + 1, k.word, k.count)),
        );
        lines.push(String::new());
    }

    lines.push("Content Summary:".to_string());
    lines.push(
        sentences
            .first()
            .cloned()
            .unwrap_or_else(|| "No content available".to_string()),
    );

    if sentences.len() > 1 {
        lines.push(String::new());
        lines.push("Additional key points:".to_string());
        lines.extend(
            sentences
                .iter()
                .skip(1)
                .take(REPORT_EXTRA_POINTS)
                .enumerate()
                .map(|(i, sentence)| format!("{}. {}", i + 2, sentence)),
        );
    }

    lines.join("\n")
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
