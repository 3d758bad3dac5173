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
use geo::{BoundingRect, Geometry};

use crate::errors::{Result, invalid_geometry};

/// axis aligned bounding box in the coordinates of the geometry it was derived from
/// (lon/lat degrees for geographic input)
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox {
    pub west: f64,   // min x
    pub south: f64,  // min y
    pub east: f64,   // max x
    pub north: f64   // max y
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox { west, south, east, north }
    }

    pub fn to_wsen_array (&self) -> [f64;4] {
        [self.west, self.south, self.east, self.north]
    }

    /// the (x,y) corner that maps to the first row/column of a north-up raster
    pub fn upper_left (&self) -> (f64,f64) { (self.west, self.north) }

    pub fn lower_right (&self) -> (f64,f64) { (self.east, self.south) }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west, self.south, self.east, self.north)
    }
}

/// the minimal axis aligned rectangle that encloses all vertices of the given geometry
pub fn geometry_bounds (geometry: &Geometry<f64>) -> Result<BoundingBox> {
    let rect = geometry.bounding_rect().ok_or_else( || invalid_geometry("geometry has no coordinates"))?;
    let (min,max) = (rect.min(), rect.max());

    if [min.x, min.y, max.x, max.y].iter().all( |v| v.is_finite()) {
        Ok( BoundingBox::new( min.x, min.y, max.x, max.y) )
    } else {
        Err( invalid_geometry( format!("non-finite coordinates in geometry bounds {rect:?}")) )
    }
}
