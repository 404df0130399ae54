//! Record shapes that datasets are made of
//!
//! Every record is a flat, immutable bundle of named text fields, which is
//! expressed by the [`Record`] trait. Record shapes that describe vehicles
//! additionally implement [`VehicleLike`], which unlocks the vehicle-specific
//! [`Dataset`](crate::dataset::Dataset) queries.

pub mod facility;
pub mod vehicle;

pub use facility::Facility;
pub use vehicle::Vehicle;

/// Flat record with named text fields
pub trait Record {
    /// Names of the fields exposed by this record shape
    const FIELDS: &'static [&'static str];

    /// Value of a named field, or `None` if this record shape has no such field
    fn field(&self, name: &str) -> Option<&str>;
}

/// Record shape that describes a registered vehicle
pub trait VehicleLike {
    /// Manufacturer, e.g. "TESLA"
    fn make(&self) -> &str;

    /// Model name, e.g. "MODEL 3"
    fn model(&self) -> &str;

    /// Model year, as found in the data source
    ///
    /// Use [`ModelYear::parse()`](crate::year::ModelYear::parse) before
    /// comparing it with anything.
    fn year(&self) -> &str;

    /// County of registration
    fn county(&self) -> &str;
}
