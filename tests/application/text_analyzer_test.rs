use sabda::application::services::{
    AnalysisRules, Complexity, TextAnalyzer, TopicRule, is_stopword,
};

#[test]
fn given_repeated_words_when_analyzing_then_ranks_by_frequency_with_stable_ties() {
    let analyzer = TextAnalyzer::default();

    let analysis = analyzer.analyze("Rust compiles. Cargo builds rust. Tests pass and cargo runs.");

    let words: Vec<&str> = analysis
        .top_keywords
        .iter()
        .map(|k| k.word.as_str())
        .collect();
    assert_eq!(&words[..4], &["rust", "cargo", "compiles", "builds"]);
    assert_eq!(analysis.top_keywords[0].count, 2);
}

#[test]
fn given_stopwords_when_analyzing_then_they_are_not_keywords() {
    let analysis = TextAnalyzer::default().analyze("The and of the to a parser");

    assert_eq!(analysis.top_keywords.len(), 1);
    assert_eq!(analysis.top_keywords[0].word, "parser");
    assert!(is_stopword("the"));
    assert!(!is_stopword("parser"));
}

#[test]
fn given_two_sentences_when_analyzing_then_counts_words_and_sentences() {
    let analysis = TextAnalyzer::default().analyze("a b c. d e f.");

    assert_eq!(analysis.word_count, 6);
    assert_eq!(analysis.sentence_count, 2);
    assert_eq!(analysis.avg_sentence_length, 3.0);
    assert_eq!(analysis.complexity, Complexity::Simple);
}

#[test]
fn given_topic_keyword_as_whole_word_when_analyzing_then_topic_is_tagged() {
    let analysis = TextAnalyzer::default().analyze("The new software ships to every school.");

    assert_eq!(analysis.topics, vec!["Technology", "Education"]);
}

#[test]
fn given_keyword_only_inside_longer_word_when_analyzing_then_topic_is_not_tagged() {
    let analysis = TextAnalyzer::default().analyze("Technological marvels and techniques abound.");

    assert_eq!(analysis.topics, vec!["General"]);
}

#[test]
fn given_custom_topic_rules_when_analyzing_then_matches_case_insensitively() {
    let rules = AnalysisRules {
        topics: vec![TopicRule::new("Astronomy", &["Telescope", "ORBIT"])],
        ..AnalysisRules::default()
    };
    let analyzer = TextAnalyzer::new(rules);

    let analysis = analyzer.analyze("A telescope tracked the orbit.");

    assert_eq!(analysis.topics, vec!["Astronomy"]);
}

#[test]
fn given_long_sentence_when_analyzing_then_complexity_is_complex() {
    let sentence = "word ".repeat(30);

    let analysis = TextAnalyzer::default().analyze(&sentence);

    assert_eq!(analysis.complexity, Complexity::Complex);
}

#[test]
fn given_empty_text_when_analyzing_then_returns_zeroes() {
    let analysis = TextAnalyzer::default().analyze("   ");

    assert_eq!(analysis.word_count, 0);
    assert_eq!(analysis.sentence_count, 0);
    assert_eq!(analysis.unique_words_ratio, 0.0);
    assert!(analysis.top_keywords.is_empty());
}

#[test]
fn given_terminal_punctuation_runs_when_analyzing_then_breaks_after_each_run() {
    let analysis = TextAnalyzer::default().analyze("wait... what?! yes. no");

    assert_eq!(analysis.sentence_count, 4);
}
