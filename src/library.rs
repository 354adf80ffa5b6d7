use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

static TEXTS_DIR: Dir = include_dir!("src/texts");

/// Reading difficulty grade carried by every text and session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Rough word-count band used when requesting a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LengthBand {
    Short,
    Medium,
    Long,
}

impl LengthBand {
    /// Word-count range covered by the band; Short < 120 <= Medium < 400 <= Long
    pub fn contains(&self, words: usize) -> bool {
        match self {
            LengthBand::Short => words < 120,
            LengthBand::Medium => (120..400).contains(&words),
            LengthBand::Long => words >= 400,
        }
    }
}

/// An immutable content unit from the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub fiction: bool,
    pub difficulty: Difficulty,
    pub content: String,
}

impl Text {
    pub fn word_length(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Constraints for picking a text; unset fields match anything
#[derive(Debug, Clone, Default)]
pub struct TextQuery {
    pub genre: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub fiction: Option<bool>,
    pub length: Option<LengthBand>,
}

impl TextQuery {
    pub fn matches(&self, text: &Text) -> bool {
        if let Some(ref genre) = self.genre {
            if !text.genre.eq_ignore_ascii_case(genre) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if text.difficulty != difficulty {
                return false;
            }
        }
        if let Some(fiction) = self.fiction {
            if text.fiction != fiction {
                return false;
            }
        }
        if let Some(length) = self.length {
            if !length.contains(text.word_length()) {
                return false;
            }
        }
        true
    }
}

/// Text-retrieval collaborator seam
pub trait TextSource {
    /// A text matching the query, or None if the library has no match
    fn find(&self, query: &TextQuery) -> Option<Text>;
}

/// Library of texts bundled into the binary
#[derive(Debug)]
pub struct BundledLibrary {
    texts: Vec<Text>,
}

impl BundledLibrary {
    pub fn load() -> Self {
        let mut texts = Vec::new();
        for file in TEXTS_DIR.files() {
            let Some(raw) = file.contents_utf8() else {
                continue;
            };
            match serde_json::from_str::<Text>(raw) {
                Ok(text) => texts.push(text),
                Err(err) => log::warn!("skipping bundled text {:?}: {err}", file.path()),
            }
        }
        Self { texts }
    }

    pub fn all(&self) -> &[Text] {
        &self.texts
    }
}

impl Default for BundledLibrary {
    fn default() -> Self {
        Self::load()
    }
}

impl TextSource for BundledLibrary {
    fn find(&self, query: &TextQuery) -> Option<Text> {
        let matches: Vec<&Text> = self.texts.iter().filter(|t| query.matches(t)).collect();
        matches.choose(&mut rand::thread_rng()).map(|t| (*t).clone())
    }
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("nothing to summarize")]
    EmptyContent,
}

/// Summarization collaborator seam, used only by summarized playback
pub trait Summarizer {
    fn summarize(&self, content: &str, title: &str) -> Result<String, SummarizeError>;
}

/// Local stand-in for the summarization collaborator: keeps the leading
/// third of the sentences, which is enough to exercise summarized
/// playback without a language model behind it.
#[derive(Debug, Default)]
pub struct LeadSummarizer;

impl Summarizer for LeadSummarizer {
    fn summarize(&self, content: &str, _title: &str) -> Result<String, SummarizeError> {
        let mut sentences: Vec<String> = Vec::new();
        let mut current = String::new();
        for ch in content.chars() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?') {
                sentences.push(current.trim().to_string());
                current.clear();
            }
        }
        if !current.trim().is_empty() {
            sentences.push(current.trim().to_string());
        }

        if sentences.is_empty() {
            return Err(SummarizeError::EmptyContent);
        }

        let keep = sentences.len().div_ceil(3);
        Ok(sentences[..keep].join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, genre: &str, fiction: bool, difficulty: Difficulty, words: usize) -> Text {
        Text {
            id: id.to_string(),
            title: format!("title {id}"),
            genre: genre.to_string(),
            fiction,
            difficulty,
            content: vec!["word"; words].join(" "),
        }
    }

    #[test]
    fn bundled_library_loads_texts() {
        let library = BundledLibrary::load();
        assert!(!library.all().is_empty());
        for text in library.all() {
            assert!(!text.content.trim().is_empty(), "{} is empty", text.id);
        }
    }

    #[test]
    fn bundled_library_finds_any_with_default_query() {
        let library = BundledLibrary::load();
        assert!(library.find(&TextQuery::default()).is_some());
    }

    #[test]
    fn query_filters_by_all_fields() {
        let text = sample("t1", "science", false, Difficulty::Medium, 150);

        assert!(TextQuery::default().matches(&text));
        assert!(TextQuery {
            genre: Some("Science".into()),
            ..Default::default()
        }
        .matches(&text));
        assert!(!TextQuery {
            genre: Some("history".into()),
            ..Default::default()
        }
        .matches(&text));
        assert!(!TextQuery {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        }
        .matches(&text));
        assert!(!TextQuery {
            fiction: Some(true),
            ..Default::default()
        }
        .matches(&text));
        assert!(TextQuery {
            length: Some(LengthBand::Medium),
            ..Default::default()
        }
        .matches(&text));
        assert!(!TextQuery {
            length: Some(LengthBand::Long),
            ..Default::default()
        }
        .matches(&text));
    }

    #[test]
    fn no_match_returns_none() {
        let library = BundledLibrary::load();
        let query = TextQuery {
            genre: Some("definitely-not-a-genre".into()),
            ..Default::default()
        };
        assert!(library.find(&query).is_none());
    }

    #[test]
    fn length_bands_cover_all_counts() {
        for words in [0, 1, 119, 120, 399, 400, 10_000] {
            let matching = [LengthBand::Short, LengthBand::Medium, LengthBand::Long]
                .iter()
                .filter(|b| b.contains(words))
                .count();
            assert_eq!(matching, 1, "{words} words must sit in exactly one band");
        }
    }

    #[test]
    fn lead_summarizer_keeps_leading_third() {
        let content = "One. Two. Three. Four. Five. Six.";
        let summary = LeadSummarizer.summarize(content, "t").unwrap();
        assert_eq!(summary, "One. Two.");
    }

    #[test]
    fn lead_summarizer_keeps_trailing_fragment_as_sentence() {
        let summary = LeadSummarizer.summarize("no punctuation at all", "t").unwrap();
        assert_eq!(summary, "no punctuation at all");
    }

    #[test]
    fn lead_summarizer_rejects_empty_content() {
        assert!(matches!(
            LeadSummarizer.summarize("   ", "t"),
            Err(SummarizeError::EmptyContent)
        ));
    }
}
