//! Report rendering.
//!
//! Turns an [`AnalysisReport`] into a terminal dashboard:
//! sentiment/subjectivity banners with progress bars,
//! a top-N word frequency bar chart, the aligned sentence list, and the
//! original/translated text section. JSON output serializes the report
//! as-is.

use std::fmt::Write as _;

use crate::config::AnalyzerConfig;
use crate::frequency::FrequencyTable;
use crate::types::{AnalysisReport, SentencePair, SentimentLabel};

/// Width of progress bars and chart bars, in characters.
const BAR_WIDTH: usize = 30;

/// Render the full report as plain text.
pub fn render_text(report: &AnalysisReport, config: &AnalyzerConfig) -> String {
    let mut out = String::new();

    if report.translation_degraded {
        out.push_str("warning: translation failed, results use the original text\n\n");
    }

    render_sentiment_section(&mut out, report, config);
    render_frequency_section(&mut out, &report.frequencies, config.top_words);
    render_sentence_section(&mut out, &report.sentences, config);
    render_text_section(&mut out, report);

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn render_sentiment_section(out: &mut String, report: &AnalysisReport, config: &AnalyzerConfig) {
    let sentiment = &report.sentiment;
    let label = config.classify_polarity(sentiment.polarity);
    let marker = polarity_marker(label);

    out.push_str("== Sentiment ==\n");
    let _ = writeln!(
        out,
        "{} {} ({:+.2})",
        progress_bar(sentiment.normalized_polarity()),
        marker,
        sentiment.polarity
    );
    let _ = writeln!(out, "classified: {}", label.as_str());

    let subj_label = config.classify_subjectivity(sentiment.subjectivity);
    out.push_str("\n== Subjectivity ==\n");
    let _ = writeln!(
        out,
        "{} {:.2}",
        progress_bar(sentiment.subjectivity),
        sentiment.subjectivity
    );
    let _ = writeln!(out, "classified: {} subjectivity", subj_label.as_str());
}

fn render_frequency_section(out: &mut String, table: &FrequencyTable, top_words: usize) {
    out.push_str("\n== Most frequent words ==\n");
    let top = table.top(top_words);
    if top.is_empty() {
        out.push_str("(no qualifying words)\n");
        return;
    }

    let max_count = top[0].count.max(1);
    let widest = top.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
    for entry in top {
        let bar_len = (entry.count as usize * BAR_WIDTH).div_ceil(max_count as usize);
        let _ = writeln!(
            out,
            "{:widest$}  {} {}",
            entry.word,
            "█".repeat(bar_len),
            entry.count,
        );
    }
}

fn render_sentence_section(out: &mut String, sentences: &[SentencePair], config: &AnalyzerConfig) {
    out.push_str("\n== Sentences ==\n");
    if sentences.is_empty() {
        out.push_str("(no sentences detected)\n");
        return;
    }

    for (i, pair) in sentences.iter().take(config.max_sentences).enumerate() {
        match pair.sentiment {
            Some(sentiment) => {
                let marker = polarity_marker(config.classify_polarity(sentiment.polarity));
                let _ = writeln!(
                    out,
                    "{}. {} \"{}\"\n   -> \"{}\" ({:+.2})",
                    i + 1,
                    marker,
                    pair.original,
                    pair.translated,
                    sentiment.polarity
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{}. \"{}\"\n   -> \"{}\"",
                    i + 1,
                    pair.original,
                    pair.translated
                );
            }
        }
    }
    if sentences.len() > config.max_sentences {
        let _ = writeln!(
            out,
            "... and {} more",
            sentences.len() - config.max_sentences
        );
    }
}

fn render_text_section(out: &mut String, report: &AnalysisReport) {
    if report.translated_text == report.original_text {
        return;
    }
    out.push_str("\n== Translation ==\n");
    let _ = writeln!(out, "original:   {}", report.original_text);
    let _ = writeln!(out, "translated: {}", report.translated_text);
}

/// A `[█████·····]`-style bar for a value in [0, 1].
fn progress_bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "·".repeat(BAR_WIDTH - filled)
    )
}

fn polarity_marker(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "(+)",
        SentimentLabel::Negative => "(-)",
        SentimentLabel::Neutral => "(=)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AnalysisInput;
    use crate::pipeline::runner::OfflineAnalyzer;
    use crate::types::Sentiment;

    fn sample_report() -> (AnalysisReport, AnalyzerConfig) {
        let analyzer = OfflineAnalyzer::offline();
        let input = AnalysisInput::from_text("The zebra runs fast. The zebra sleeps!");
        (analyzer.analyze(&input), AnalyzerConfig::default())
    }

    #[test]
    fn test_render_contains_all_sections() {
        let (report, config) = sample_report();
        let text = render_text(&report, &config);
        assert!(text.contains("== Sentiment =="));
        assert!(text.contains("== Subjectivity =="));
        assert!(text.contains("== Most frequent words =="));
        assert!(text.contains("== Sentences =="));
    }

    #[test]
    fn test_degraded_translation_prints_warning() {
        let (mut report, config) = sample_report();
        report.translation_degraded = true;
        let text = render_text(&report, &config);
        assert!(text.starts_with("warning:"));
    }

    #[test]
    fn test_identical_texts_skip_translation_section() {
        let (report, config) = sample_report();
        assert_eq!(report.original_text, report.translated_text);
        let text = render_text(&report, &config);
        assert!(!text.contains("== Translation =="));
    }

    #[test]
    fn test_differing_texts_show_translation_section() {
        let (mut report, config) = sample_report();
        report.translated_text = "something else".to_string();
        let text = render_text(&report, &config);
        assert!(text.contains("== Translation =="));
        assert!(text.contains("something else"));
    }

    #[test]
    fn test_sentence_list_truncates_at_max() {
        let (mut report, config) = sample_report();
        report.sentences = (0..15)
            .map(|i| SentencePair {
                original: format!("s{i}"),
                translated: format!("t{i}"),
                sentiment: Some(Sentiment::neutral()),
            })
            .collect();
        let text = render_text(&report, &config);
        assert!(text.contains("... and 5 more"));
        assert!(!text.contains("\"s10\""));
    }

    #[test]
    fn test_unscored_sentence_has_no_marker_or_score() {
        let (mut report, config) = sample_report();
        report.sentences = vec![SentencePair {
            original: "hola".into(),
            translated: "hello".into(),
            sentiment: None,
        }];
        let text = render_text(&report, &config);
        assert!(text.contains("1. \"hola\""));
    }

    #[test]
    fn test_progress_bar_extremes() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "·".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "█".repeat(BAR_WIDTH)));
        // Out-of-range values are clamped, not panicking.
        assert_eq!(progress_bar(2.0), progress_bar(1.0));
    }

    #[test]
    fn test_empty_frequency_table_renders_placeholder() {
        let (mut report, config) = sample_report();
        report.frequencies = FrequencyTable::default();
        let text = render_text(&report, &config);
        assert!(text.contains("(no qualifying words)"));
    }

    #[test]
    fn test_json_round_trips() {
        let (report, _) = sample_report();
        let json = render_json(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frequencies, report.frequencies);
        assert_eq!(back.original_text, report.original_text);
    }
}
