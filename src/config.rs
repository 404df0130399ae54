//! Processing configuration

use crate::{csv::Location, sources::DataSource, year::ModelYear, Args, Result};
use std::sync::Arc;

/// Final process configuration
///
/// This is the result of combining digested [`Args`] with information about
/// the selected data source. Please refer to [`Args`] to know more about
/// common fields.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Selected data source
    pub source: DataSource,

    /// Where the source's records will be read from
    pub location: Location,

    /// Field whose most common value is reported
    pub group_by: Box<str>,

    /// Field and value that records are counted by, if any
    pub filter: Option<(Box<str>, Box<str>)>,

    // Other fields have the same meaning as in Args
    pub year: ModelYear,
    pub quiet: bool,
}
//
impl Config {
    /// Field that is grouped by when the user doesn't say otherwise
    pub const DEFAULT_GROUP_BY: &'static str = "city";

    /// Determine process configuration from initialization products
    pub(crate) fn new(args: Args, source: DataSource) -> Result<Arc<Self>> {
        let Args {
            source: _,
            input,
            year,
            group_by,
            filter_field,
            filter_value,
            quiet,
        } = args;

        // Check that the requested fields exist in this kind of record
        let fields = source.kind.fields();
        let check_field = |field: &str| {
            anyhow::ensure!(
                fields.contains(&field),
                "{} records have no field named {field:?} (available fields: {})",
                source.short_name,
                fields.join(", ")
            );
            Ok(())
        };
        let group_by = group_by.unwrap_or_else(|| Self::DEFAULT_GROUP_BY.into());
        check_field(&group_by)?;
        let filter = match (filter_field, filter_value) {
            (Some(field), Some(value)) => {
                check_field(&field)?;
                Some((field, value))
            }
            (None, None) => None,
            _ => anyhow::bail!("--filter-field and --filter-value must be used together"),
        };

        let location = input.as_deref().map_or_else(
            || Location::Url(source.url.into()),
            Location::parse,
        );
        Ok(Arc::new(Self {
            source,
            location,
            group_by,
            filter,
            year,
            quiet,
        }))
    }
}
