pub mod core;
pub mod difficulty;
pub mod formatter;
pub mod formatting;
pub mod selection;
pub mod selector;
pub mod sentences;

// Re-export the main types for convenience
pub use core::Language;
pub use difficulty::CharacterDifficulty;
pub use formatter::{TextFormatter, BasicFormatter, CapitalizationFormatter, SymbolFormatter, CompositeFormatter};
pub use selector::{WordSelector, RandomSelector, IntelligentSelector, SubstitutionSelector};
