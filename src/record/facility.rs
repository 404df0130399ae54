//! DMV facility locations
//!
//! Every state publishes its DMV offices with a different column layout, so
//! each supported region gets its own raw row type, all of which convert into
//! the common [`Facility`] record.

use super::Record;
use serde::Deserialize;

/// DMV office
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Facility {
    /// Office name
    pub name: Box<str>,

    /// Kind of office, when the data source tells
    pub kind: Box<str>,

    /// Street address
    pub address: Box<str>,

    /// City
    pub city: Box<str>,

    /// State
    pub state: Box<str>,

    /// ZIP code
    pub zip_code: Box<str>,

    /// Public phone number
    pub phone: Box<str>,
}
//
impl Record for Facility {
    const FIELDS: &'static [&'static str] = &[
        "name", "kind", "address", "city", "state", "zip_code", "phone",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "name" => &*self.name,
            "kind" => &*self.kind,
            "address" => &*self.address,
            "city" => &*self.city,
            "state" => &*self.state,
            "zip_code" => &*self.zip_code,
            "phone" => &*self.phone,
            _ => return None,
        })
    }
}

/// Region whose DMV facilities we know how to read
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Region {
    Oregon,
    NewYork,
    Missouri,
}

/// Row of the Oregon DMV office dataset
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct OregonFacilityRow {
    title: Box<str>,
    #[serde(default, rename = "type")]
    kind: Box<str>,
    #[serde(default)]
    location_1_address: Box<str>,
    #[serde(default)]
    location_1_city: Box<str>,
    #[serde(default)]
    location_1_state: Box<str>,
    #[serde(default)]
    location_1_zip: Box<str>,
    #[serde(default)]
    phone_number: Box<str>,
}
//
impl From<OregonFacilityRow> for Facility {
    fn from(row: OregonFacilityRow) -> Self {
        Self {
            name: row.title,
            kind: row.kind,
            address: row.location_1_address,
            city: row.location_1_city,
            state: or_default_state(row.location_1_state, "OR"),
            zip_code: row.location_1_zip,
            phone: row.phone_number,
        }
    }
}

/// Row of the New York DMV office dataset
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NewYorkFacilityRow {
    office_name: Box<str>,
    #[serde(default)]
    office_type: Box<str>,
    #[serde(default)]
    street_address_line_1: Box<str>,
    #[serde(default)]
    city: Box<str>,
    #[serde(default)]
    state: Box<str>,
    #[serde(default)]
    zip_code: Box<str>,
    #[serde(default)]
    public_phone_number: Box<str>,
}
//
impl From<NewYorkFacilityRow> for Facility {
    fn from(row: NewYorkFacilityRow) -> Self {
        Self {
            name: row.office_name,
            kind: row.office_type,
            address: row.street_address_line_1,
            city: row.city,
            state: or_default_state(row.state, "NY"),
            zip_code: row.zip_code,
            phone: row.public_phone_number,
        }
    }
}

/// Row of the Missouri license office dataset
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct MissouriFacilityRow {
    name: Box<str>,
    #[serde(default)]
    address1: Box<str>,
    #[serde(default)]
    city: Box<str>,
    #[serde(default)]
    state: Box<str>,
    #[serde(default)]
    zipcode: Box<str>,
    #[serde(default)]
    phone: Box<str>,
}
//
impl From<MissouriFacilityRow> for Facility {
    fn from(row: MissouriFacilityRow) -> Self {
        Self {
            name: row.name,
            kind: "License Office".into(),
            address: row.address1,
            city: row.city,
            state: or_default_state(row.state, "MO"),
            zip_code: row.zipcode,
            phone: row.phone,
        }
    }
}

/// Fill in the state of a facility when the data source leaves it blank
fn or_default_state(state: Box<str>, default: &str) -> Box<str> {
    if state.trim().is_empty() {
        default.into()
    } else {
        state
    }
}
