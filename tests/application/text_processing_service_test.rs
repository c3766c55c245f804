use sabda::application::services::TextProcessingService;
use sabda::domain::ProcessType;

const ARTICLE: &str = "Rust is a systems language. The weather was pleasant today. \
Rust tooling like cargo makes rust projects easy. Lunch was good.";

#[test]
fn given_text_when_summarizing_then_drops_sentences_without_top_keywords() {
    let service = TextProcessingService::default();

    let processed = service.process(ARTICLE, &ProcessType::Summary);

    assert_eq!(
        processed.processed_content,
        "Rust is a systems language. The weather was pleasant today. \
         Rust tooling like cargo makes rust projects easy."
    );
}

#[test]
fn given_sentences_without_keywords_when_summarizing_then_falls_back_to_leading_sentences() {
    let service = TextProcessingService::default();

    let processed = service.process("It is. It was. It will be", &ProcessType::Summary);

    assert_eq!(processed.processed_content, "It is. It was.");
}

#[test]
fn given_text_when_processing_then_counts_whitespace_tokens_and_chars() {
    let service = TextProcessingService::default();

    let processed = service.process("a b c. d e f.", &ProcessType::Summary);

    assert_eq!(processed.word_count, 6);
    assert_eq!(processed.char_count, 13);
}

#[test]
fn given_text_when_explaining_then_builds_report_with_overview() {
    let service = TextProcessingService::default();

    let processed = service.process(ARTICLE, &ProcessType::Explanation);

    let report = processed.processed_content;
    assert!(report.starts_with("Document Analysis Report"));
    assert!(report.contains("- Total Words: "));
    assert!(report.contains("Key Terms:"));
    assert!(report.contains("Content Summary:\nRust is a systems language."));
    assert!(report.contains("Additional key points:"));
}

#[test]
fn given_large_text_when_explaining_then_counts_use_thousands_separators() {
    let text = "alpha ".repeat(1_234);
    let service = TextProcessingService::default();

    let processed = service.process(&text, &ProcessType::Explanation);

    assert!(processed.processed_content.contains("- Total Words: 1,234"));
}

#[test]
fn given_text_when_analysis_requested_then_returns_pretty_json() {
    let service = TextProcessingService::default();

    let processed = service.process(ARTICLE, &ProcessType::Analysis);

    let parsed: serde_json::Value = serde_json::from_str(&processed.processed_content).unwrap();
    assert_eq!(parsed["word_count"], processed.analysis.word_count);
    assert!(processed.processed_content.contains('\n'));
}

#[test]
fn given_unknown_type_when_processing_then_content_is_unchanged() {
    let service = TextProcessingService::default();

    let processed = service.process(ARTICLE, &ProcessType::Other("raw".to_string()));

    assert_eq!(processed.processed_content, ARTICLE);
}

#[test]
fn given_lowercase_sentences_when_summarizing_then_each_sentence_is_scored_separately() {
    let service = TextProcessingService::default();

    let processed = service.process(
        "the parser failed. the parser recovered. the parser won. ok then.",
        &ProcessType::Summary,
    );

    assert_eq!(
        processed.processed_content,
        "the parser failed. the parser recovered. the parser won."
    );
}

#[test]
fn given_lowercase_sentences_when_explaining_then_lists_additional_points() {
    let service = TextProcessingService::default();

    let processed = service.process("a b c. d e f.", &ProcessType::Explanation);

    assert!(processed.processed_content.contains("Content Summary:\na b c."));
    assert!(
        processed
            .processed_content
            .contains("Additional key points:\n2. d e f.")
    );
}
