pub mod suggest;
pub mod vocabulary;

pub use suggest::SuggestionIndex;
pub use vocabulary::{canonical, is_known, POPULAR, VOCABULARY};
