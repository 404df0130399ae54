//! In-memory collection of records and the statistics we compute over it
//!
//! A [`Dataset`] never modifies its records. Every query is a pure function
//! of the records and of its arguments, and returns owned values.

use crate::{
    error::DatasetError,
    record::{Record, VehicleLike},
    stats,
    year::ModelYear,
};

/// Ordered collection of records from one data source
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dataset<R> {
    /// Records, in the order they were provided
    data: Vec<R>,
}
//
impl<R> Dataset<R> {
    /// Wrap an already built sequence of records
    pub fn new(data: Vec<R>) -> Self {
        Self { data }
    }

    /// Records, in the order they were provided at construction time
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Truth that there are no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
//
impl<R> Default for Dataset<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
//
impl<R> From<Vec<R>> for Dataset<R> {
    fn from(data: Vec<R>) -> Self {
        Self::new(data)
    }
}

/// Queries that work with any record shape
impl<R: Record> Dataset<R> {
    /// Most common value of a named field
    ///
    /// Ties are broken in favor of the value that appears first.
    pub fn most_common(&self, field: &str) -> Result<Box<str>, DatasetError> {
        let field = Self::known_field(field)?;
        stats::mode(self.data.iter().filter_map(|record| record.field(field)))
            .map(Box::from)
            .ok_or(DatasetError::EmptyDataset { field })
    }

    /// Number of records whose named field has a certain value
    pub fn count_matching(&self, field: &str, value: &str) -> Result<usize, DatasetError> {
        let field = Self::known_field(field)?;
        Ok(self
            .data
            .iter()
            .filter(|record| record.field(field) == Some(value))
            .count())
    }

    /// Check that a field exists, and get its name with a static lifetime
    fn known_field(field: &str) -> Result<&'static str, DatasetError> {
        R::FIELDS
            .iter()
            .copied()
            .find(|&known| known == field)
            .ok_or_else(|| DatasetError::UnknownField {
                field: field.into(),
            })
    }
}

/// Queries that only make sense for vehicle records
impl<R: VehicleLike> Dataset<R> {
    /// Most popular make, and most popular model of that make
    pub fn most_popular_make_model(&self) -> Result<(Box<str>, Box<str>), DatasetError> {
        self.most_popular_make_model_in(self.data())
    }

    /// Like [`most_popular_make_model()`](Self::most_popular_make_model), but
    /// over an arbitrary sequence of records
    pub fn most_popular_make_model_in(
        &self,
        records: &[R],
    ) -> Result<(Box<str>, Box<str>), DatasetError> {
        let make = self.get_make(records)?;
        let model = self.get_model(records, &make)?;
        Ok((make, model))
    }

    /// Most popular make among some records
    ///
    /// Ties are broken in favor of the make that appears first.
    pub fn get_make(&self, records: &[R]) -> Result<Box<str>, DatasetError> {
        stats::mode(records.iter().map(R::make))
            .map(Box::from)
            .ok_or(DatasetError::EmptyDataset { field: "make" })
    }

    /// Most popular model among the records of a certain make
    ///
    /// Ties are broken in favor of the model that appears first.
    pub fn get_model(&self, records: &[R], make: &str) -> Result<Box<str>, DatasetError> {
        let models = records
            .iter()
            .filter(|vehicle| vehicle.make() == make)
            .map(R::model);
        stats::mode(models)
            .map(Box::from)
            .ok_or(DatasetError::EmptyDataset { field: "model" })
    }

    /// Number of vehicles from a certain model year
    ///
    /// The year can be specified as an integer or as a string, both are
    /// normalized the same way as the years of the records.
    pub fn count_by_model_year<Y>(&self, year: Y) -> Result<usize, DatasetError>
    where
        Y: TryInto<ModelYear>,
        DatasetError: From<Y::Error>,
    {
        let year = year.try_into()?;
        Ok(self
            .data
            .iter()
            .filter(|vehicle| match ModelYear::parse(vehicle.year()) {
                Ok(vehicle_year) => vehicle_year == year,
                Err(e) => {
                    log::trace!("Vehicle with unusable model year never matches: {e}");
                    false
                }
            })
            .count())
    }

    /// County where the most vehicles are registered
    ///
    /// Ties are broken in favor of the county that appears first.
    pub fn county_with_most_vehicles(&self) -> Result<Box<str>, DatasetError> {
        stats::mode(self.data.iter().map(R::county))
            .map(Box::from)
            .ok_or(DatasetError::EmptyDataset { field: "county" })
    }
}
