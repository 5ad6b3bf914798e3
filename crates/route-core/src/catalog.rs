use crate::error::{Result, RouteError};
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// Registry of named locations that route requests are resolved against.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityCatalog {
    cities: Vec<Location>,
}

const INDIA: [(&str, f64, f64); 26] = [
    ("Delhi", 28.6139, 77.2090),
    ("Mumbai", 19.0760, 72.8777),
    ("Bangalore", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Pune", 18.5204, 73.8567),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Surat", 21.1702, 72.8311),
    ("Bhopal", 23.2599, 77.4126),
    ("Nagpur", 21.1458, 79.0882),
    ("Indore", 22.7196, 75.8577),
    ("Kanpur", 26.4499, 80.3319),
    ("Patna", 25.5941, 85.1376),
    ("Ranchi", 23.3441, 85.3096),
    ("Guwahati", 26.1445, 91.7362),
    ("Raipur", 21.2514, 81.6296),
    ("Thiruvananthapuram", 8.5241, 76.9366),
    ("Coimbatore", 11.0168, 76.9558),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Vadodara", 22.3072, 73.1812),
    ("Vijayawada", 16.5062, 80.6480),
    ("Agra", 27.1767, 78.0081),
    ("Varanasi", 25.3176, 82.9739),
];

impl CityCatalog {
    /// Builds a catalog, rejecting repeated names.
    pub fn new(cities: Vec<Location>) -> Result<Self> {
        for (idx, city) in cities.iter().enumerate() {
            if cities[..idx].iter().any(|c| c.name == city.name) {
                return Err(RouteError::invalid(format!(
                    "catalog lists '{}' more than once",
                    city.name
                )));
            }
        }
        Ok(Self { cities })
    }

    /// Major Indian cities.
    pub fn india() -> Self {
        Self {
            cities: INDIA
                .iter()
                .map(|&(name, lat, lon)| Location::new(name, lat, lon))
                .collect(),
        }
    }

    /// Parses a JSON array of `{ "name", "latitude", "longitude" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cities: Vec<Location> = serde_json::from_str(json)?;
        Self::new(cities)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.cities.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|c| c.name.as_str())
    }

    pub fn cities(&self) -> &[Location] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
