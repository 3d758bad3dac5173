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

pub mod errors;

use std::path::Path;

// we re-export these so that other crates don't have to use a direct gdal depedency to import.
pub use gdal::{self, Driver, DriverManager, Metadata, Dataset, errors::GdalError, GeoTransform, GeoTransformEx};
pub use gdal::raster::{GdalType, GdalDataType, RasterBand, Buffer, RasterCreationOptions};
pub use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};

use crate::errors::{Result, invalid_srs, misc_error, unsupported_data_type};

pub fn get_driver_by_name (name: &str) -> Result<Driver> {
    Ok( DriverManager::get_driver_by_name( name)? )
}

/// does the driver support `Create()`, i.e. random write access. Drivers such as PNG or JP2OpenJPEG
/// only support `CreateCopy()` from an existing dataset
pub fn supports_create (driver: &Driver) -> bool {
    driver.metadata_item( "DCAP_CREATE", "").is_some_and( |v| v.eq_ignore_ascii_case("YES"))
}

/* #region remote datasets *********************************************************************************/

/// map a remote asset locator to the GDAL virtual file system path that supports ranged reads.
/// Locators that are already VSI paths, local paths or other GDAL connection strings are returned unchanged
pub fn vsi_path (locator: &str) -> String {
    if locator.starts_with("/vsi") {
        locator.to_string()
    } else if locator.starts_with("http://") || locator.starts_with("https://") {
        format!("/vsicurl/{locator}")
    } else if let Some(object) = locator.strip_prefix("s3://") {
        format!("/vsis3/{object}")
    } else if let Some(object) = locator.strip_prefix("gs://") {
        format!("/vsigs/{object}")
    } else {
        locator.to_string()
    }
}

/// open a (possibly remote) raster dataset. For http(s) and cloud storage locators this does not
/// download the file, GDAL only fetches the header and later the byte ranges of requested blocks
pub fn open_remote (locator: &str) -> Result<Dataset> {
    Ok( Dataset::open( vsi_path(locator))? )
}

/// set global GDAL config options (e.g. GDAL_DISABLE_READDIR_ON_OPEN). This affects all
/// subsequently opened datasets of this process
pub fn set_config_options (opts: &[(String,String)]) -> Result<()> {
    for (key,value) in opts {
        gdal::config::set_config_option( key, value)?;
    }
    Ok(())
}

/* #endregion remote datasets */

/* #region SpatialRef based coordinate transformations *****************************************************/

/// create a SpatialRef from any definition GDAL understands ("EPSG:4326", WKT, PROJ strings..).
/// The returned SpatialRef uses traditional GIS axis order (x: lon/easting, y: lat/northing)
pub fn gis_srs (definition: &str) -> Result<SpatialRef> {
    let srs = SpatialRef::from_definition( definition).map_err( |e| invalid_srs( format!("'{definition}': {e}")))?;
    Ok( with_gis_axis_order( &srs) )
}

pub fn gis_srs_from_wkt (wkt: &str) -> Result<SpatialRef> {
    if wkt.trim().is_empty() { return Err( invalid_srs("no spatial reference system")) }
    let srs = SpatialRef::from_wkt( wkt).map_err( |e| invalid_srs( e.to_string()))?;
    Ok( with_gis_axis_order( &srs) )
}

pub fn srs_epsg_4326 () -> Result<SpatialRef> { gis_srs( "EPSG:4326") }

// we don't want to change the axis mapping of the provided SpatialRef
pub fn with_gis_axis_order (srs: &SpatialRef) -> SpatialRef {
    let mut srs = srs.clone();
    srs.set_axis_mapping_strategy( AxisMappingStrategy::TraditionalGisOrder);
    srs
}

pub fn transform_point_2d (transform: &CoordTransform, x: f64, y: f64) -> Result<(f64,f64)> {
    let mut ax: [f64;1] = [x];
    let mut ay: [f64;1] = [y];
    let mut az: [f64;0] = [];

    transform.transform_coords(&mut ax, &mut ay, &mut az)?;
    if ax[0].is_finite() && ay[0].is_finite() {
        Ok((ax[0],ay[0]))
    } else {
        Err( misc_error( format!("point ({x},{y}) has no finite projection")))
    }
}

/// a coordinate transformation between two SRS that always uses (x,y) == (lon,lat) | (easting,northing)
/// argument order, no matter what axis order the authority of the respective SRS defines
pub struct GisTransform {
    transform: CoordTransform
}

impl GisTransform {
    pub fn new (s_srs: &SpatialRef, t_srs: &SpatialRef) -> Result<Self> {
        let s_srs = with_gis_axis_order( s_srs);
        let t_srs = with_gis_axis_order( t_srs);
        let transform = CoordTransform::new( &s_srs, &t_srs).map_err( |e| invalid_srs( e.to_string()))?;
        Ok( GisTransform { transform } )
    }

    pub fn transform_point (&self, x: f64, y: f64) -> Result<(f64,f64)> {
        transform_point_2d( &self.transform, x, y)
    }
}

/* #endregion SpatialRef based coordinate transformations */

/* #region geotransforms ***********************************************************************************/

pub fn new_geotransform (x_upper_left: f64, x_resolution: f64, row_rotation: f64,
                         y_upper_left: f64, col_rotation: f64, y_resolution: f64) -> GeoTransform {
    [x_upper_left,x_resolution,row_rotation,y_upper_left,col_rotation,y_resolution]
}

/// replace the translation of a geotransform while keeping pixel size and rotation coefficients
pub fn reanchor_geotransform (gt: &GeoTransform, x_upper_left: f64, y_upper_left: f64) -> GeoTransform {
    new_geotransform( x_upper_left, gt[1], gt[2], y_upper_left, gt[4], gt[5])
}

pub fn invert_geotransform (gt: &GeoTransform) -> Result<GeoTransform> {
    gt.invert().map_err( |e| misc_error( format!("geotransform {gt:?} not invertible: {e}")))
}

/// (fractional) pixel position `(col,row)` of a point in the dataset SRS for the given inverted geotransform
#[inline]
pub fn pixel_position (geo_to_pixel: &GeoTransform, x: f64, y: f64) -> (f64,f64) {
    geo_to_pixel.apply( x, y)
}

/* #endregion geotransforms */

/* #region generic Dataset/Rasterband access ****************************************************************/

/// read a `(width,height)` window at `(col,row)` offset of the given band at full resolution.
/// Note the window has to be within the raster bounds
pub fn read_window<T> (band: &RasterBand, col: usize, row: usize, width: usize, height: usize) -> Result<Buffer<T>>
    where T: Copy + GdalType
{
    let (x_size,y_size) = band.size();
    if col + width > x_size || row + height > y_size {
        return Err( misc_error( format!("window {width}x{height}+{col}+{row} outside of raster {x_size}x{y_size}")))
    }
    Ok( band.read_as::<T>( (col as isize, row as isize), (width,height), (width,height), None)? )
}

/// compression of a dataset as stored in its IMAGE_STRUCTURE metadata (e.g. "DEFLATE" or "LZW")
pub fn get_compression (ds: &Dataset) -> Option<String> {
    ds.metadata_item( "COMPRESSION", "IMAGE_STRUCTURE")
}

pub fn to_creation_options (opts: &[(String,String)]) -> Result<RasterCreationOptions> {
    let mut co = RasterCreationOptions::new();
    for (key,value) in opts {
        co.add_string( format!("{key}={value}").as_str())?;
    }
    Ok(co)
}

pub fn create_dataset<P> (driver: &Driver, path: P, width: usize, height: usize, n_bands: usize, data_type: GdalDataType, co: &RasterCreationOptions)->Result<Dataset>
    where P: AsRef<Path>
{
    use GdalDataType::*;
    match data_type {
        UInt8   => Ok( driver.create_with_band_type_with_options::<u8,P>(path, width, height, n_bands, co)? ),
        UInt16  => Ok( driver.create_with_band_type_with_options::<u16,P>(path, width, height, n_bands, co)? ),
        UInt32  => Ok( driver.create_with_band_type_with_options::<u32,P>(path, width, height, n_bands, co)? ),
        UInt64  => Ok( driver.create_with_band_type_with_options::<u64,P>(path, width, height, n_bands, co)? ),
        Int8    => Ok( driver.create_with_band_type_with_options::<i8,P>(path, width, height, n_bands, co)? ),
        Int16   => Ok( driver.create_with_band_type_with_options::<i16,P>(path, width, height, n_bands, co)? ),
        Int32   => Ok( driver.create_with_band_type_with_options::<i32,P>(path, width, height, n_bands, co)? ),
        Int64   => Ok( driver.create_with_band_type_with_options::<i64,P>(path, width, height, n_bands, co)? ),
        Float32 => Ok( driver.create_with_band_type_with_options::<f32,P>(path, width, height, n_bands, co)? ),
        Float64 => Ok( driver.create_with_band_type_with_options::<f64,P>(path, width, height, n_bands, co)? ),
        other => Err( unsupported_data_type( format!("{other:?}")))
    }
}

/// in-memory dataset to be filled before it is copied with a driver that does not support `Create()`
pub fn create_mem_dataset (width: usize, height: usize, n_bands: usize, data_type: GdalDataType) -> Result<Dataset> {
    let driver = get_driver_by_name("MEM")?;
    create_dataset( &driver, "", width, height, n_bands, data_type, &RasterCreationOptions::new())
}

pub fn create_copy<P> (src: &Dataset, driver: &Driver, path: P, co: &RasterCreationOptions) -> Result<Dataset>
    where P: AsRef<Path>
{
    Ok( src.create_copy( driver, path, co)? )
}

/* #endregion generic Dataset/Rasterband access */
