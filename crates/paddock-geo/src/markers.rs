//! Race markers and their selection-dependent style.

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, Value};
use paddock_core::models::{RaceDescriptor, RaceId};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::models::Coordinate;
use crate::resolver::{CoordinateResolver, ResolutionTier};

/// Unselected marker radius in pixels
pub const DEFAULT_BASE_SIZE: f64 = 12.0;

/// Radius and border of a circular marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub border_width: u8,
}

impl MarkerStyle {
    /// Width and height of the square icon
    pub fn icon_size(&self) -> f64 {
        self.radius * 2.0
    }

    /// Offset of the geographic point from the icon's top-left corner
    pub fn icon_anchor(&self) -> (f64, f64) {
        (self.radius, self.radius)
    }
}

/// Style for one marker: selected markers grow by half and get a thicker border
pub fn marker_style(base_size: f64, is_selected: bool) -> MarkerStyle {
    if is_selected {
        MarkerStyle { radius: base_size * 1.5, border_width: 4 }
    } else {
        MarkerStyle { radius: base_size, border_width: 3 }
    }
}

/// Text shown when a marker is opened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub title: String,
    pub circuit: String,
    pub venue: String,
    pub schedule: String,
}

/// A rendered race marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub race_id: RaceId,
    pub position: Coordinate,
    pub tier: ResolutionTier,
    pub selected: bool,
    pub style: MarkerStyle,
    pub popup: MarkerPopup,
}

/// Builds markers for a race list from the current selection
pub struct MarkerLayer;

impl MarkerLayer {
    /// One marker per race, in list order
    pub fn build(
        resolver: &CoordinateResolver,
        races: &[RaceDescriptor],
        selected: Option<RaceId>,
        base_size: f64,
    ) -> Vec<Marker> {
        races
            .iter()
            .map(|race| {
                let resolution = resolver.resolve_with_tier(race);
                let is_selected = selected == Some(race.race_id);
                Marker {
                    race_id: race.race_id,
                    position: resolution.coordinate,
                    tier: resolution.tier,
                    selected: is_selected,
                    style: marker_style(base_size, is_selected),
                    popup: MarkerPopup {
                        title: race.name.clone(),
                        circuit: race.circuit.clone(),
                        venue: race.venue_line(),
                        schedule: race.schedule_line(),
                    },
                }
            })
            .collect()
    }

    /// Markers as a GeoJSON point collection, one feature per race
    pub fn to_feature_collection(markers: &[Marker]) -> FeatureCollection {
        let features = markers.iter().map(marker_to_feature).collect();

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }
}

fn marker_to_feature(marker: &Marker) -> Feature {
    let mut properties = Map::new();
    properties.insert("raceId".to_string(), JsonValue::from(marker.race_id.0));
    properties.insert("selected".to_string(), JsonValue::from(marker.selected));
    properties.insert("tier".to_string(), JsonValue::from(marker.tier.to_string()));
    properties.insert("radius".to_string(), JsonValue::from(marker.style.radius));
    properties.insert("borderWidth".to_string(), JsonValue::from(marker.style.border_width));
    properties.insert("name".to_string(), JsonValue::from(marker.popup.title.clone()));
    properties.insert("circuit".to_string(), JsonValue::from(marker.popup.circuit.clone()));
    properties.insert("venue".to_string(), JsonValue::from(marker.popup.venue.clone()));
    properties.insert("schedule".to_string(), JsonValue::from(marker.popup.schedule.clone()));

    Feature {
        geometry: Some(Geometry::new(Value::Point(marker.position.to_position()))),
        properties: Some(properties),
        id: Some(Id::Number(marker.race_id.0.into())),
        bbox: None,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(id: i64, circuit: &str, country: &str) -> RaceDescriptor {
        RaceDescriptor {
            race_id: RaceId(id),
            label: String::new(),
            name: format!("{} Grand Prix", country),
            circuit: circuit.to_string(),
            location: String::new(),
            country: country.to_string(),
            round: id as u32,
            year: 2025,
            date: "2025-04-06".to_string(),
        }
    }

    #[test]
    fn test_selected_style() {
        let style = marker_style(12.0, true);
        assert_eq!(style.radius, 18.0);
        assert_eq!(style.border_width, 4);
        assert_eq!(style.icon_size(), 36.0);
        assert_eq!(style.icon_anchor(), (18.0, 18.0));
    }

    #[test]
    fn test_unselected_style() {
        let style = marker_style(12.0, false);
        assert_eq!(style.radius, 12.0);
        assert_eq!(style.border_width, 3);
    }

    #[test]
    fn test_layer_marks_only_selected_race() {
        let resolver = CoordinateResolver::default();
        let races = [race(1, "Bahrain", "Bahrain"), race(3, "Suzuka", "Japan")];

        let markers = MarkerLayer::build(&resolver, &races, Some(RaceId(3)), DEFAULT_BASE_SIZE);

        assert_eq!(markers.len(), 2);
        assert!(!markers[0].selected);
        assert_eq!(markers[0].style.radius, 12.0);
        assert!(markers[1].selected);
        assert_eq!(markers[1].style.radius, 18.0);
        assert_eq!(markers[1].tier, ResolutionTier::Country);
        assert_eq!(markers[1].popup.schedule, "Round 3 • 6 Apr 2025");
    }

    #[test]
    fn test_feature_collection() {
        let resolver = CoordinateResolver::default();
        let markers =
            MarkerLayer::build(&resolver, &[race(1, "Monaco", "Monaco")], None, DEFAULT_BASE_SIZE);

        let collection = MarkerLayer::to_feature_collection(&markers);
        let json = serde_json::to_value(&collection).unwrap();

        let feature = &json["features"][0];
        assert_eq!(feature["geometry"]["coordinates"], serde_json::json!([7.4206, 43.7347]));
        assert_eq!(feature["properties"]["raceId"], 1);
        assert_eq!(feature["properties"]["borderWidth"], 3);
        assert_eq!(feature["properties"]["tier"], "circuit");
        assert_eq!(feature["id"], 1);
    }
}
