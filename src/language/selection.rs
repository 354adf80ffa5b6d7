use super::{
    core::Language,
    difficulty::CharacterDifficulty,
    selector::{IntelligentSelector, RandomSelector, SubstitutionSelector, WordSelector},
};
// Delegates selection to selector module; no direct RNG use here
use std::collections::HashMap;

impl Language {
    /// Get random words from the language
    pub fn get_random(&self, num: usize) -> Vec<String> {
        // Delegate to the unified selector implementation
        let empty: std::collections::HashMap<char, CharacterDifficulty> = Default::default();
        RandomSelector.select_words(self, num, &empty)
    }

    /// Get words with character substitution: replace some characters with ones that need most practice
    pub fn get_substituted(
        &self,
        num: usize,
        char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String> {
        SubstitutionSelector.select_words(self, num, char_stats)
    }

    /// Get words intelligently selected based on character statistics
    /// Words containing characters that need more practice are prioritized
    pub fn get_intelligent(
        &self,
        num: usize,
        char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String> {
        IntelligentSelector.select_words(self, num, char_stats)
    }

    /// Calculate difficulty score for a word based on character statistics
    #[allow(dead_code)]
    fn calculate_word_difficulty_score(
        &self,
        _word: &str,
        _char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> f64 {
        // Deprecated: logic moved to selector module; kept for compatibility
        0.0
    }

    /// Get the weakest characters (those that need most practice) from character statistics
    #[allow(dead_code)]
    fn get_weakest_characters(
        &self,
        _char_stats: &HashMap<char, CharacterDifficulty>,
        _count: usize,
    ) -> Vec<char> {
        // Deprecated: logic moved to selector module; kept for compatibility
        Vec::new()
    }

    /// Substitute some characters in a word with weaker characters for practice
    #[allow(dead_code)]
    fn substitute_characters_in_word(&self, word: &str, _weak_chars: &[char]) -> String {
        // Deprecated: logic moved to selector module; kept for compatibility
        word.to_string()
    }
}
