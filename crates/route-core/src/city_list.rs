use crate::catalog::CityCatalog;
use crate::error::{Result, RouteError};
use crate::location::Location;
use serde::{Deserialize, Serialize};

pub const MIN_CITIES: usize = 3;

/// Ordered cities for one run: fixed start, intermediates, fixed end.
#[derive(Clone, Debug, PartialEq)]
pub struct CityList {
    cities: Vec<Location>,
}

impl CityList {
    /// Takes cities already in `start, intermediates.., end` order.
    pub fn new(cities: Vec<Location>) -> Result<Self> {
        if cities.len() < MIN_CITIES {
            return Err(RouteError::invalid(format!(
                "at least {MIN_CITIES} cities are required (start, one intermediate, end), got {}",
                cities.len()
            )));
        }
        for (idx, city) in cities.iter().enumerate() {
            if cities[..idx].iter().any(|c| c.name == city.name) {
                return Err(RouteError::invalid(format!(
                    "city '{}' appears more than once",
                    city.name
                )));
            }
        }
        Ok(Self { cities })
    }

    pub fn from_parts(start: Location, intermediates: Vec<Location>, end: Location) -> Result<Self> {
        let mut cities = Vec::with_capacity(intermediates.len() + 2);
        cities.push(start);
        cities.extend(intermediates);
        cities.push(end);
        Self::new(cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn start(&self) -> &Location {
        &self.cities[0]
    }

    pub fn end(&self) -> &Location {
        &self.cities[self.cities.len() - 1]
    }

    pub fn intermediates(&self) -> &[Location] {
        &self.cities[1..self.cities.len() - 1]
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.cities
    }

    pub fn names(&self) -> Vec<String> {
        self.cities.iter().map(|c| c.name.clone()).collect()
    }
}

/// A route selection by city name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub intermediates: Vec<String>,
}

impl RouteRequest {
    /// Looks every name up in `catalog`, keeping the selection order.
    pub fn resolve(&self, catalog: &CityCatalog) -> Result<CityList> {
        let lookup = |role: &str, name: &str| -> Result<Location> {
            if name.trim().is_empty() {
                return Err(RouteError::invalid(format!("missing {role} city")));
            }
            catalog
                .get(name)
                .cloned()
                .ok_or_else(|| RouteError::invalid(format!("unknown {role} city '{name}'")))
        };

        let start = lookup("start", self.start.as_str())?;
        let end = lookup("end", self.end.as_str())?;
        if start.name == end.name {
            return Err(RouteError::invalid(format!(
                "start and end must differ, both are '{}'",
                start.name
            )));
        }

        let intermediates = self
            .intermediates
            .iter()
            .map(|name| lookup("intermediate", name.as_str()))
            .collect::<Result<Vec<_>>>()?;

        CityList::from_parts(start, intermediates, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, mids: &[&str], end: &str) -> RouteRequest {
        RouteRequest {
            start: start.into(),
            end: end.into(),
            intermediates: mids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn resolves_in_selection_order() {
        let list = request("Delhi", &["Pune", "Agra"], "Chennai")
            .resolve(&CityCatalog::india())
            .unwrap();
        assert_eq!(list.names(), vec!["Delhi", "Pune", "Agra", "Chennai"]);
        assert_eq!(list.start().name, "Delhi");
        assert_eq!(list.end().name, "Chennai");
        assert_eq!(list.intermediates().len(), 2);
    }

    #[test]
    fn rejects_short_lists() {
        let err = request("Delhi", &[], "Chennai")
            .resolve(&CityCatalog::india())
            .unwrap_err();
        assert!(err.to_string().contains("at least 3"), "{err}");
    }

    #[test]
    fn rejects_duplicates_and_unknowns() {
        let catalog = CityCatalog::india();
        assert!(request("Delhi", &["Delhi"], "Pune").resolve(&catalog).is_err());
        assert!(request("Delhi", &["Pune"], "Delhi").resolve(&catalog).is_err());
        assert!(request("Delhi", &["Gotham"], "Pune").resolve(&catalog).is_err());
        assert!(request("", &["Agra"], "Pune").resolve(&catalog).is_err());
    }

    #[test]
    fn request_parses_from_json() {
        let req: RouteRequest =
            serde_json::from_str(r#"{"start": "Delhi", "end": "Agra"}"#).unwrap();
        assert!(req.intermediates.is_empty());
    }
}
