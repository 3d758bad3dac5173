/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::Path;
use geo::Geometry;
use geojson::GeoJson;

use crate::errors::{Result, invalid_geometry};

/// load the area of interest from a GeoJSON file. For FeatureCollections this is the geometry of
/// the first feature, single Features and bare Geometry objects are accepted as well
pub fn load_geojson_geometry (path: impl AsRef<Path>) -> Result<Geometry<f64>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err( |e| invalid_geometry( format!("failed to read {path:?}: {e}")))?;
    parse_geojson_geometry( &input)
}

pub fn parse_geojson_geometry (input: &str) -> Result<Geometry<f64>> {
    let geojson: GeoJson = input.parse().map_err( |e| invalid_geometry( format!("not a valid GeoJSON document: {e}")))?;

    let geometry = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features.into_iter().next()
            .ok_or_else( || invalid_geometry("feature collection has no features"))?
            .geometry,
        GeoJson::Feature(feature) => feature.geometry,
        GeoJson::Geometry(geometry) => Some(geometry)
    }.ok_or_else( || invalid_geometry("feature has no geometry"))?;

    Geometry::<f64>::try_from( geometry).map_err( |e| invalid_geometry( e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AOI: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "name": "aoi" },
              "geometry": { "type": "Polygon", "coordinates": [[[10.0,45.0],[10.5,45.0],[10.5,45.5],[10.0,45.5],[10.0,45.0]]] } },
            { "type": "Feature", "properties": {},
              "geometry": { "type": "Point", "coordinates": [0.0, 0.0] } }
        ]
    }"#;

    #[test]
    fn test_first_feature() {
        let geometry = parse_geojson_geometry( AOI).unwrap();
        assert!( matches!( geometry, Geometry::Polygon(_)));

        let bbox = crate::geometry_bounds( &geometry).unwrap();
        assert_eq!( bbox.to_wsen_array(), [10.0, 45.0, 10.5, 45.5]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!( parse_geojson_geometry( r#"{ "type": "FeatureCollection", "features": [] }"#).is_err());
        assert!( parse_geojson_geometry( r#"{ "type": "Feature", "properties": {}, "geometry": null }"#).is_err());
        assert!( parse_geojson_geometry( "not json").is_err());
    }

    #[test]
    fn test_bare_geometry() {
        let geometry = parse_geojson_geometry( r#"{ "type": "Point", "coordinates": [9.1, 45.05] }"#).unwrap();
        assert!( matches!( geometry, Geometry::Point(_)));
    }
}
