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

use std::fmt;
use serde::{Serialize,Deserialize};
use odin_gdal::{GisTransform, SpatialRef};

use crate::bounds::BoundingBox;
use crate::errors::{Result, unsupported_crs};

/// a point in the native (projected) CRS of a raster asset
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct ProjectedCorner {
    pub x: f64,
    pub y: f64
}

impl fmt::Display for ProjectedCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3},{:.3})", self.x, self.y)
    }
}

/// projects bounding box corners from the (geographic) source CRS into the CRS of one asset.
/// Since each asset can have its own CRS a new projector has to be created per asset
pub struct CornerProjector {
    transform: GisTransform
}

impl CornerProjector {
    pub fn new (src_srs: &SpatialRef, asset_srs: &SpatialRef) -> Result<Self> {
        let transform = GisTransform::new( src_srs, asset_srs).map_err( |e| unsupported_crs( e.to_string()))?;
        Ok( CornerProjector { transform } )
    }

    pub fn project (&self, x: f64, y: f64) -> Result<ProjectedCorner> {
        let (x,y) = self.transform.transform_point( x, y).map_err( |e| unsupported_crs( e.to_string()))?;
        Ok( ProjectedCorner { x, y } )
    }

    /// the (upper-left, lower-right) corners of `bbox` in the asset CRS
    pub fn project_corners (&self, bbox: &BoundingBox) -> Result<(ProjectedCorner,ProjectedCorner)> {
        let (west,north) = bbox.upper_left();
        let (east,south) = bbox.lower_right();
        Ok( (self.project( west, north)?, self.project( east, south)?) )
    }
}
