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

use tracing::debug;
use odin_gdal::{Buffer, Dataset, GdalType, SpatialRef, gis_srs_from_wkt, open_remote, read_window};

use crate::catalog::AssetRef;
use crate::profile::RasterProfile;
use crate::window::PixelWindow;
use crate::errors::{Result, OdinClipError, remote_read_error, unsupported_crs};

/// an opened raster asset. Opening only reads the header, sample data is fetched per window
pub struct RasterAsset {
    locator: String,
    ds: Dataset,
    profile: RasterProfile,
    band_index: usize,
}

impl RasterAsset {
    pub fn open (asset: &AssetRef, band_index: usize) -> Result<RasterAsset> {
        let locator = asset.locator().to_string();
        let ds = open_remote( &locator).map_err( |e| remote_read_error( &locator, e))?;
        let profile = RasterProfile::from_dataset( &ds, band_index).map_err( |e| remote_read_error( &locator, e))?;
        debug!("opened {} ({}x{} {:?}, driver {})", locator, profile.width, profile.height, profile.data_type, profile.driver);

        Ok( RasterAsset { locator, ds, profile, band_index } )
    }

    pub fn locator (&self) -> &str { self.locator.as_str() }

    pub fn profile (&self) -> &RasterProfile { &self.profile }

    /// the native CRS of this asset (with traditional GIS axis order)
    pub fn srs (&self) -> Result<SpatialRef> {
        gis_srs_from_wkt( &self.profile.crs_wkt).map_err( |e| unsupported_crs( format!("{}: {}", self.locator, e)))
    }

    /// read the samples of `window` from the asset band. Window extents beyond the raster size are
    /// clipped to the raster, the returned block reports the window that was actually read
    pub fn read_sample_block<T> (&self, window: &PixelWindow) -> Result<SampleBlock<T>>
        where T: Copy + GdalType
    {
        let window = window.clipped( self.profile.width, self.profile.height)
            .ok_or( OdinClipError::EmptyWindow(*window))?;

        let band = self.ds.rasterband( self.band_index).map_err( |e| remote_read_error( &self.locator, e.into()))?;
        let buffer = read_window::<T>( &band, window.col_start as usize, window.row_start as usize, window.width(), window.height())
            .map_err( |e| remote_read_error( &self.locator, e))?;
        debug!("read {} from {}", window, self.locator);

        Ok( SampleBlock { window, buffer } )
    }
}

/// row-major sample values of a pixel window
pub struct SampleBlock<T: GdalType> {
    pub window: PixelWindow,
    buffer: Buffer<T>
}

impl<T: GdalType + Copy> SampleBlock<T> {
    /// `(height,width)`
    pub fn shape (&self) -> (usize,usize) {
        let (cols,rows) = self.buffer.shape();
        (rows,cols)
    }

    pub fn buffer_mut (&mut self) -> &mut Buffer<T> { &mut self.buffer }
}
