use std::path::Path;

use geojson::{Feature, FeatureCollection, JsonObject};
use log::info;
use serde::Serialize;
use serde_json::json;

use super::RoutePath;
use crate::Error;
use crate::model::FlightGraph;

/// One stop of a computed route, in output order. Serializes to the route
/// CSV schema: `label,lat,longitude`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    pub label: String,
    pub lat: f64,
    pub longitude: f64,
}

/// A computed route, ready for the boundary layer: the first stop is
/// labeled "Start", the last "End", and every intermediate node
/// "Charging Station {id}".
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub stops: Vec<RouteStop>,
    pub total_weight: f64,
}

impl Itinerary {
    /// Resolve a path's node ids against the graph into labeled stops.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if a path node is missing from the graph.
    pub fn from_path(graph: &FlightGraph, path: &RoutePath) -> Result<Self, Error> {
        let last = path.nodes.len().saturating_sub(1);
        let stops = path
            .nodes
            .iter()
            .enumerate()
            .map(|(position, &id)| {
                let point = graph.position(id).ok_or(Error::UnknownNode(id))?;
                let label = if position == 0 {
                    "Start".to_string()
                } else if position == last {
                    "End".to_string()
                } else {
                    format!("Charging Station {id}")
                };
                Ok(RouteStop {
                    label,
                    lat: point.y(),
                    longitude: point.x(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            stops,
            total_weight: path.total_weight,
        })
    }

    /// Write the route as CSV with a `label,lat,longitude` header.
    pub fn write_csv(&self, path: &Path) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(path)?;
        for stop in &self.stops {
            writer.serialize(stop)?;
        }
        writer.flush()?;
        info!("Route with {} stops saved to {}", self.stops.len(), path.display());
        Ok(())
    }

    /// Export the route for map display: one LineString feature for the
    /// flight path plus a labeled Point feature per stop.
    pub fn to_geojson(&self) -> FeatureCollection {
        let coords: Vec<Vec<f64>> = self
            .stops
            .iter()
            .map(|stop| vec![stop.longitude, stop.lat])
            .collect();

        let mut features = Vec::with_capacity(self.stops.len() + 1);

        let mut line_properties = JsonObject::new();
        line_properties.insert("total_weight".into(), json!(self.total_weight));
        features.push(Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::LineString(coords))),
            id: None,
            properties: Some(line_properties),
            foreign_members: None,
        });

        for stop in &self.stops {
            let mut properties = JsonObject::new();
            properties.insert("label".into(), json!(stop.label));
            features.push(Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![
                    stop.longitude,
                    stop.lat,
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
