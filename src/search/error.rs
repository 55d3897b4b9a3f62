use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("query index {index} out of range for working corpus of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(
        "no admissible neighbor for item {index} among the {k} closest candidates ({blacklisted} sentences blacklisted)"
    )]
    NoAdmissibleNeighbor {
        index: usize,
        k: usize,
        blacklisted: usize,
    },
}
