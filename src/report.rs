//! Summary of a dataset, as displayed to the user

use crate::{
    config::Config,
    dataset::Dataset,
    record::{Record, VehicleLike},
    Result,
};
use anyhow::Context;
use std::fmt;

/// One labeled value of the summary
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    /// What the value means
    pub label: Box<str>,

    /// Value
    pub value: Box<str>,
}
//
impl Line {
    fn new(label: impl Into<Box<str>>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string().into(),
        }
    }
}
//
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Summarize a dataset of any kind
pub fn summarize<R: Record>(config: &Config, dataset: &Dataset<R>) -> Result<Vec<Line>> {
    if dataset.is_empty() {
        log::warn!("Dataset is empty, most statistics will be unavailable");
    }
    let mut lines = vec![Line::new("records", dataset.len())];
    let group_by = &*config.group_by;
    let most_common = dataset
        .most_common(group_by)
        .with_context(|| format!("looking for the most common {group_by}"))?;
    lines.push(Line::new(format!("most common {group_by}"), most_common));
    if let Some((field, value)) = &config.filter {
        let count = dataset
            .count_matching(field, value)
            .with_context(|| format!("counting records with {field} = {value:?}"))?;
        lines.push(Line::new(format!("records with {field} = {value:?}"), count));
    }
    Ok(lines)
}

/// Summarize a dataset of vehicles
///
/// This is the generic summary, followed by vehicle-specific statistics.
pub fn summarize_vehicles<R: Record + VehicleLike>(
    config: &Config,
    dataset: &Dataset<R>,
) -> Result<Vec<Line>> {
    let mut lines = summarize(config, dataset)?;
    let (make, model) = dataset
        .most_popular_make_model()
        .context("looking for the most popular make and model")?;
    lines.push(Line::new("most popular make and model", format!("{make} {model}")));
    let year = config.year;
    let count = dataset
        .count_by_model_year(year)
        .with_context(|| format!("counting vehicles from model year {year}"))?;
    lines.push(Line::new(format!("vehicles from model year {year}"), count));
    let county = dataset
        .county_with_most_vehicles()
        .context("looking for the county with most vehicles")?;
    lines.push(Line::new("county with most vehicles", county));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{facility::tests::facility, vehicle::tests::vehicle, Vehicle},
        sources, Args,
    };
    use std::sync::Arc;

    fn config(source: &str, filter: Option<(&str, &str)>) -> Arc<Config> {
        let (filter_field, filter_value) = filter.unzip();
        Config::new(
            Args {
                source: None,
                input: None,
                year: 2019.into(),
                group_by: None,
                filter_field: filter_field.map(Into::into),
                filter_value: filter_value.map(Into::into),
                quiet: true,
            },
            sources::get(source).unwrap(),
        )
        .unwrap()
    }

    fn render(lines: &[Line]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn vehicle_summary() {
        let fleet = Dataset::new(vec![
            vehicle("Tesla", "Model 3", "2019", "King"),
            vehicle("Tesla", "Model 3", "2019", "King"),
            vehicle("Nissan", "Leaf", "2018", "Pierce"),
        ]);
        let lines = summarize_vehicles(&config("wa-ev", Some(("make", "Nissan"))), &fleet).unwrap();
        assert_eq!(
            render(&lines),
            [
                "records: 3",
                "most common city: Seattle",
                "records with make = \"Nissan\": 1",
                "most popular make and model: Tesla Model 3",
                "vehicles from model year 2019: 2",
                "county with most vehicles: King",
            ]
        );
    }

    #[test]
    fn facility_summary() {
        let offices = Dataset::new(vec![
            facility("Salem DMV", "Salem"),
            facility("Portland East", "Portland"),
            facility("Portland Downtown", "Portland"),
        ]);
        let lines = summarize(&config("or", None), &offices).unwrap();
        assert_eq!(
            render(&lines),
            ["records: 3", "most common city: Portland"]
        );
    }

    #[test]
    fn empty_datasets_cannot_be_summarized() {
        let empty = Dataset::<Vehicle>::default();
        let error = summarize_vehicles(&config("wa-ev", None), &empty).unwrap_err();
        assert!(format!("{error:#}").contains("most common city"));
    }
}
