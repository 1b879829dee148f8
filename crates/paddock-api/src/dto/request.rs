use serde::Deserialize;

/// `?year=` for season-scoped listings
#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    pub year: Option<i32>,
}

/// Query for the viewport and marker endpoints
#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub year: Option<i32>,
    pub selected: Option<i64>,
    pub base_size: Option<f64>,
}

/// Loose venue fields to resolve
#[derive(Debug, Default, Deserialize)]
pub struct VenueQuery {
    #[serde(default)]
    pub circuit: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DriversQuery {
    #[serde(default)]
    pub search: String,
    pub sort: Option<String>,
}
