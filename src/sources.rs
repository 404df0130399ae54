//! Supported public datasets

use crate::{
    record::{facility::Region, Facility, Record, Vehicle},
    Result,
};
use anyhow::Context;
use dialoguer::FuzzySelect;

/// Get information about a data source
pub fn get(short_name: &str) -> Result<DataSource> {
    SUPPORTED_SOURCES
        .iter()
        .find(|source| source.short_name == short_name)
        .copied()
        .with_context(|| {
            format!(
                "Failed to find user-requested data source {short_name} (known sources: {})",
                short_names().collect::<Vec<_>>().join(", ")
            )
        })
}

/// Ask the user to select a data source
pub fn prompt() -> dialoguer::Result<DataSource> {
    let source_names = SUPPORTED_SOURCES
        .iter()
        .map(|source| format!("{} ({})", source.name, source.short_name))
        .collect::<Vec<_>>();
    let source_idx = FuzzySelect::new()
        .with_prompt("Which dataset should I use?")
        .items(&source_names)
        .default(0)
        .max_length(usize::MAX)
        .interact()?;
    Ok(SUPPORTED_SOURCES[source_idx])
}

/// Short names of all supported data sources
pub fn short_names() -> impl Iterator<Item = &'static str> {
    SUPPORTED_SOURCES.iter().map(|source| source.short_name)
}

/// What we know about a public dataset
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DataSource {
    /// Short name, as used on the command line
    pub short_name: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Kind of records in this dataset
    pub kind: SourceKind,

    /// Where the CSV export of the dataset can be downloaded
    pub url: &'static str,
}

/// Kind of records that a data source provides
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SourceKind {
    /// Vehicle registrations
    Vehicles,

    /// DMV facilities from some region
    Facilities(Region),
}
//
impl SourceKind {
    /// Fields of the records from this kind of source
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Vehicles => Vehicle::FIELDS,
            Self::Facilities(_) => Facility::FIELDS,
        }
    }
}

/// Every data source supported by this program
//
// NOTE: Socrata resource endpoints return 1000 rows unless told otherwise
const SUPPORTED_SOURCES: &[DataSource] = &[
    DataSource {
        short_name: "wa-ev",
        name: "Washington State electric vehicle registrations",
        kind: SourceKind::Vehicles,
        url: "https://data.wa.gov/resource/rpr4-cgyd.csv?$limit=500000",
    },
    DataSource {
        short_name: "or",
        name: "Oregon DMV offices",
        kind: SourceKind::Facilities(Region::Oregon),
        url: "https://data.oregon.gov/resource/t4xd-7ehm.csv?$limit=5000",
    },
    DataSource {
        short_name: "ny",
        name: "New York DMV offices",
        kind: SourceKind::Facilities(Region::NewYork),
        url: "https://data.ny.gov/resource/9upz-c7xg.csv?$limit=5000",
    },
    DataSource {
        short_name: "mo",
        name: "Missouri license offices",
        kind: SourceKind::Facilities(Region::Missouri),
        url: "https://data.mo.gov/resource/835g-7keg.csv?$limit=5000",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_short_name() {
        let wa = get("wa-ev").unwrap();
        assert_eq!(wa.kind, SourceKind::Vehicles);
        assert!(wa.url.starts_with("https://"));
        assert_eq!(
            get("ny").unwrap().kind,
            SourceKind::Facilities(Region::NewYork)
        );
    }

    #[test]
    fn unknown_source_lists_alternatives() {
        let message = get("ca").unwrap_err().to_string();
        assert!(message.contains("ca"));
        for name in short_names() {
            assert!(message.contains(name), "{name} not listed in {message}");
        }
    }

    #[test]
    fn short_names_are_unique() {
        let mut names = short_names().collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SUPPORTED_SOURCES.len());
    }

    #[test]
    fn fields_follow_record_kind() {
        assert!(SourceKind::Vehicles.fields().contains(&"county"));
        assert!(!SourceKind::Facilities(Region::Oregon)
            .fields()
            .contains(&"county"));
    }
}
