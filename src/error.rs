//! Failures of [`Dataset`](crate::dataset::Dataset) queries

use std::convert::Infallible;
use thiserror::Error;

/// Reason why a dataset query could not produce a result
///
/// Queries never modify the dataset, so after any of these errors the dataset
/// can be queried again as if nothing happened.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DatasetError {
    /// The most common value of a field was requested over zero records
    ///
    /// This happens on empty datasets, but also when a filter (e.g. by make)
    /// leaves no candidate record.
    #[error("cannot find the most common {field} among zero records")]
    EmptyDataset {
        /// Field whose most common value was requested
        field: &'static str,
    },

    /// A model year argument did not look like a calendar year
    #[error("{input:?} is not a valid model year")]
    InvalidYear {
        /// Year argument, as it was provided
        input: Box<str>,
    },

    /// A query referred to a field that this record shape does not have
    #[error("records have no field named {field:?}")]
    UnknownField {
        /// Requested field name
        field: Box<str>,
    },
}
//
impl From<Infallible> for DatasetError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
