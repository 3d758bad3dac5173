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
use odin_gdal::{GeoTransform, invert_geotransform, pixel_position};

use crate::project::ProjectedCorner;
use crate::errors::{Result, OdinClipError};

/// half-open pixel index window `[row_start..row_end) x [col_start..col_end)` of a raster.
/// Values are signed since they are computed from arbitrary projected coordinates. A validated
/// window has no negative values, the upper bounds are not checked against the raster size
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq,Eq)]
pub struct PixelWindow {
    pub row_start: i64,
    pub row_end: i64,
    pub col_start: i64,
    pub col_end: i64
}

impl PixelWindow {
    pub fn new (row_start: i64, row_end: i64, col_start: i64, col_end: i64) -> Self {
        PixelWindow { row_start, row_end, col_start, col_end }
    }

    /// map projected upper-left/lower-right corners through the inverse of `geo_transform` to the
    /// enclosing pixel indices and validate the result
    pub fn from_corners (geo_transform: &GeoTransform, ul: &ProjectedCorner, lr: &ProjectedCorner) -> Result<PixelWindow> {
        let geo_to_pixel = invert_geotransform( geo_transform)
            .map_err( |e| OdinClipError::InvalidGeoTransform( e.to_string()))?;

        let (col_start,row_start) = enclosing_pixel( &geo_to_pixel, ul);
        let (col_end,row_end) = enclosing_pixel( &geo_to_pixel, lr);

        let window = PixelWindow { row_start, row_end, col_start, col_end };
        window.validate()?;
        Ok(window)
    }

    /// negative indices mean the requested area is outside of the raster footprint, which we have to detect
    /// before reading. Indices beyond the raster width/height are accepted and clipped by the reader
    pub fn validate (&self) -> Result<()> {
        if self.has_negative() {
            Err( OdinClipError::OutOfBoundsWindow(*self))
        } else if self.is_empty() {
            Err( OdinClipError::EmptyWindow(*self))
        } else {
            Ok(())
        }
    }

    pub fn has_negative (&self) -> bool {
        self.row_start < 0 || self.row_end < 0 || self.col_start < 0 || self.col_end < 0
    }

    pub fn is_empty (&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    pub fn height (&self) -> usize { (self.row_end - self.row_start).max(0) as usize }

    pub fn width (&self) -> usize { (self.col_end - self.col_start).max(0) as usize }

    /// clip window to a raster of given size. Returns None if nothing is left
    pub fn clipped (&self, raster_width: usize, raster_height: usize) -> Option<PixelWindow> {
        let window = PixelWindow {
            row_start: self.row_start.max(0),
            row_end: self.row_end.min( raster_height as i64),
            col_start: self.col_start.max(0),
            col_end: self.col_end.min( raster_width as i64)
        };
        if window.is_empty() { None } else { Some(window) }
    }
}

impl fmt::Display for PixelWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows {}..{}, cols {}..{}", self.row_start, self.row_end, self.col_start, self.col_end)
    }
}

fn enclosing_pixel (geo_to_pixel: &GeoTransform, p: &ProjectedCorner) -> (i64,i64) {
    let (col,row) = pixel_position( geo_to_pixel, p.x, p.y);
    (col.floor() as i64, row.floor() as i64)
}
