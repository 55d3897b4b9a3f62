//! Reference and working corpora.
//!
//! - [`ReferenceCorpus`] is the labeled dataset, loaded once and read-only afterwards.
//! - [`WorkingCorpus`] is built per scoring call: the sentences under evaluation
//!   followed by every reference sentence, embedded in one batched call.

pub mod error;
pub mod leaning;
pub mod reference;
pub mod working;


pub use error::CorpusError;
pub use leaning::Leaning;
pub use reference::{LabeledSentence, PartitionCounts, ReferenceCorpus};
pub use working::WorkingCorpus;
