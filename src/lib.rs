//! Rostrum: address-corpus dataset pipeline
//!
//! Transforms a curated corpus of annual political addresses into
//! analysis-ready tabular datasets, partitioned by a historical cutoff.
//!
//! # Architecture
//!
//! ## Corpus (`corpus/`)
//! - `document.rs` - Record types for each pipeline boundary
//! - `loader.rs` - `AddressLoader`: CSV ingestion with schema validation
//!
//! ## Lexicon (`lexicon/`)
//! - `SentimentLexicon`: external word -> sentiment mapping, loaded once,
//!   de-duplicated, passed by reference into the join
//!
//! ## Pipeline (`pipeline/`)
//! - `config.rs` - `PipelineConfig`: cutoff year, analysis window,
//!   modality, lexicon source
//! - `temporal.rs` - year extraction + pre/post period classification
//! - `filter.rs` - population filter + column pruning
//! - `identify.rs` - dense 1..N address_id assignment
//! - `tokenize.rs` - `WordTokenizer`: Unicode word boundaries, case fold
//! - `join.rs` - `LexiconJoiner`: row-preserving left join
//! - `writer.rs` - `DatasetWriter`: CSV output + schema exposure
//!
//! ## Derived tables (`datasets/`)
//! - `frequency.rs` - term counts by period
//! - `cooccur.rs` - consecutive-pair counts by period
//!
//! # Usage
//! ```no_run
//! use rostrum::{AddressLoader, CorpusPipeline, DatasetWriter, PipelineConfig, SentimentLexicon};
//!
//! # fn main() -> Result<(), rostrum::PipelineError> {
//! let config = PipelineConfig::with_lexicon("data/sentiment_lexicon.csv");
//! let corpus = AddressLoader::load("data/addresses.csv")?;
//! let lexicon = SentimentLexicon::load(&config.lexicon_source)?;
//!
//! let output = CorpusPipeline::new(config).run(corpus, &lexicon)?;
//! DatasetWriter::new("out").write_all(
//!     &output.tokens,
//!     &output.term_frequency,
//!     &output.cooccurrence,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod datasets;
pub mod error;
pub mod lexicon;
pub mod pipeline;

pub use corpus::*;
pub use datasets::*;
pub use error::PipelineError;
pub use lexicon::*;
pub use pipeline::*;
