//! Vehicle registrations

use super::{Record, VehicleLike};
use serde::Deserialize;

/// Registered vehicle
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vehicle {
    /// First characters of the vehicle identification number
    pub vin: Box<str>,

    /// Model year, as found in the data source
    pub year: Box<str>,

    /// Manufacturer
    pub make: Box<str>,

    /// Model name
    pub model: Box<str>,

    /// County of registration
    pub county: Box<str>,

    /// City of registration
    pub city: Box<str>,

    /// State of registration
    pub state: Box<str>,

    /// Kind of engine
    pub engine: Engine,
}
//
impl Record for Vehicle {
    const FIELDS: &'static [&'static str] = &[
        "vin", "year", "make", "model", "county", "city", "state", "engine",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "vin" => &*self.vin,
            "year" => &*self.year,
            "make" => &*self.make,
            "model" => &*self.model,
            "county" => &*self.county,
            "city" => &*self.city,
            "state" => &*self.state,
            "engine" => self.engine.as_str(),
            _ => return None,
        })
    }
}
//
impl VehicleLike for Vehicle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn county(&self) -> &str {
        &self.county
    }
}
//
impl From<RawRegistration> for Vehicle {
    fn from(raw: RawRegistration) -> Self {
        let engine = Engine::from_ev_type(&raw.ev_type);
        Self {
            vin: raw.vin_1_10,
            year: raw.model_year,
            make: raw.make,
            model: raw.model,
            county: raw.county,
            city: raw.city,
            state: raw.state,
            engine,
        }
    }
}

/// Kind of engine that a vehicle runs on
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Engine {
    /// Battery electric vehicle (BEV)
    BatteryElectric,

    /// Plug-in hybrid electric vehicle (PHEV)
    PluginHybrid,

    /// Electric vehicle of unspecified kind
    Electric,
}
//
impl Engine {
    /// Classify the electric vehicle type column of registration data
    fn from_ev_type(ev_type: &str) -> Self {
        if ev_type.contains("BEV") || ev_type.starts_with("Battery") {
            Self::BatteryElectric
        } else if ev_type.contains("PHEV") || ev_type.starts_with("Plug-in") {
            Self::PluginHybrid
        } else {
            Self::Electric
        }
    }

    /// Textual form, as exposed by [`Record::field()`]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BatteryElectric => "bev",
            Self::PluginHybrid => "phev",
            Self::Electric => "ev",
        }
    }
}

/// Row of the Washington State electric vehicle registration dataset
///
/// Field names follow the CSV column headers of the data.wa.gov export.
/// Columns that we don't use are ignored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawRegistration {
    #[serde(default)]
    vin_1_10: Box<str>,
    model_year: Box<str>,
    make: Box<str>,
    model: Box<str>,
    county: Box<str>,
    #[serde(default)]
    city: Box<str>,
    #[serde(default)]
    state: Box<str>,
    #[serde(default)]
    ev_type: Box<str>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a vehicle with only the fields that queries care about
    pub(crate) fn vehicle(make: &str, model: &str, year: &str, county: &str) -> Vehicle {
        Vehicle {
            vin: "5YJ3E1EA0K".into(),
            year: year.into(),
            make: make.into(),
            model: model.into(),
            county: county.into(),
            city: "Seattle".into(),
            state: "WA".into(),
            engine: Engine::BatteryElectric,
        }
    }

    #[test]
    fn fields_are_exposed_by_name() {
        let tesla = vehicle("TESLA", "MODEL 3", "2019", "King");
        for &name in Vehicle::FIELDS {
            assert!(tesla.field(name).is_some(), "missing field {name}");
        }
        assert_eq!(tesla.field("make"), Some("TESLA"));
        assert_eq!(tesla.field("year"), Some("2019"));
        assert_eq!(tesla.field("engine"), Some("bev"));
        assert_eq!(tesla.field("plate_type"), None);
        assert!(Vehicle::FIELDS.contains(&"county"));
        assert!(!Vehicle::FIELDS.contains(&"phone"));
    }

    #[test]
    fn registrations_become_vehicles() {
        let raw = RawRegistration {
            vin_1_10: "1N4AZ0CP8D".into(),
            model_year: "2013".into(),
            make: "NISSAN".into(),
            model: "LEAF".into(),
            county: "Pierce".into(),
            city: "Tacoma".into(),
            state: "WA".into(),
            ev_type: "Battery Electric Vehicle (BEV)".into(),
        };
        let leaf = Vehicle::from(raw);
        assert_eq!(leaf.make(), "NISSAN");
        assert_eq!(leaf.model(), "LEAF");
        assert_eq!(leaf.year(), "2013");
        assert_eq!(leaf.county(), "Pierce");
        assert_eq!(leaf.engine, Engine::BatteryElectric);
    }

    #[test]
    fn engine_classification() {
        assert_eq!(
            Engine::from_ev_type("Plug-in Hybrid Electric Vehicle (PHEV)"),
            Engine::PluginHybrid
        );
        assert_eq!(
            Engine::from_ev_type("Battery Electric Vehicle (BEV)"),
            Engine::BatteryElectric
        );
        assert_eq!(Engine::from_ev_type(""), Engine::Electric);
    }
}
