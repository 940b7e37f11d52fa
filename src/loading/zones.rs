use std::path::Path;

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use log::info;
use serde_json::json;

use crate::Error;
use crate::spatial::{CircularZone, RegionSet};

/// Load a named region collection from a GeoJSON FeatureCollection.
/// Features without geometry are skipped.
///
/// # Errors
///
/// [`Error::MissingData`] when the file does not exist, and
/// [`Error::InvalidData`] when the file is not a FeatureCollection.
pub fn load_region_set(path: &Path, name: &str) -> Result<RegionSet, Error> {
    if !path.exists() {
        return Err(Error::MissingData(format!(
            "{name} zone file not found: {}",
            path.display()
        )));
    }

    let raw = std::fs::read_to_string(path)?;
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(Error::InvalidData(format!(
            "{name} zone file {} is not a GeoJSON FeatureCollection",
            path.display()
        )));
    };

    let mut regions = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(geometry) = feature.geometry else {
            continue;
        };
        regions.push(geo::Geometry::<f64>::try_from(geometry)?);
    }

    info!(
        "Loaded {} {name} regions from {}",
        regions.len(),
        path.display()
    );
    Ok(RegionSet::new(name, regions))
}

/// Persist authored circular zones as a GeoJSON FeatureCollection, with
/// the source center/radius kept as feature properties.
pub fn save_zones(zones: &[CircularZone], path: &Path) -> Result<(), Error> {
    let features = zones
        .iter()
        .map(|zone| {
            let mut properties = JsonObject::new();
            properties.insert("latitude".into(), json!(zone.latitude));
            properties.insert("longitude".into(), json!(zone.longitude));
            properties.insert("radius".into(), json!(zone.radius));
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(
                    &zone.to_polygon(),
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    std::fs::write(path, serde_json::to_string_pretty(&collection)?)?;
    info!("Saved {} zones to {}", zones.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    #[test]
    fn saved_zones_load_back_as_regions() {
        let zones = [
            CircularZone::new(5.60, -0.15, 800.0),
            CircularZone::new(5.70, -0.10, 400.0),
        ];
        let file = tempfile::NamedTempFile::new().unwrap();
        save_zones(&zones, file.path()).unwrap();

        let set = load_region_set(file.path(), "no_fly").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains_point(&Point::new(-0.15, 5.60)));
        assert!(set.contains_point(&Point::new(-0.10, 5.70)));
        assert!(!set.contains_point(&Point::new(-0.05, 5.50)));
    }

    #[test]
    fn missing_zone_file_names_the_collection() {
        match load_region_set(Path::new("no_such.geojson"), "avoidance") {
            Err(Error::MissingData(message)) => assert!(message.contains("avoidance")),
            other => panic!("expected MissingData, got {other:?}"),
        }
    }

    #[test]
    fn non_collection_geojson_is_invalid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"type": "Point", "coordinates": [-0.15, 5.60]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_region_set(file.path(), "no_fly"),
            Err(Error::InvalidData(_))
        ));
    }
}
