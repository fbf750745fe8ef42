pub mod cooccur;
pub mod frequency;
pub mod stopwords;

pub use cooccur::*;
pub use frequency::*;
pub use stopwords::*;
