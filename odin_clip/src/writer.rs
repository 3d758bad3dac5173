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

use std::path::{Path,PathBuf};
use tracing::info;
use odin_gdal::{Dataset, GdalType, create_copy, create_dataset, create_mem_dataset, get_driver_by_name, supports_create,
    to_creation_options, errors::Result as GdalResult};

use crate::profile::RasterProfile;
use crate::reader::SampleBlock;
use crate::errors::{Result, write_error};

/// a clipped sample block together with the profile it should be stored with
pub struct OutputRaster<T: GdalType> {
    pub block: SampleBlock<T>,
    pub profile: RasterProfile
}

/// write `output` as single band raster to `path`, replacing existing files
pub fn write_output<T> (output: OutputRaster<T>, path: &Path) -> Result<PathBuf>
    where T: Copy + GdalType
{
    info!("writing {:?}", path);
    let OutputRaster { mut block, profile } = output;
    write_block( &mut block, &profile, path).map_err( |e| write_error( path, e))?;
    Ok( path.to_path_buf() )
}

// drivers without Create() support (PNG, JP2OpenJPEG..) get the block via an in-memory dataset and CreateCopy()
fn write_block<T> (block: &mut SampleBlock<T>, profile: &RasterProfile, path: &Path) -> GdalResult<()>
    where T: Copy + GdalType
{
    let driver = get_driver_by_name( &profile.driver)?;
    let co = to_creation_options( &profile.creation_options())?;
    let (height,width) = block.shape();

    if supports_create( &driver) {
        let mut ds = create_dataset( &driver, path, width, height, 1, profile.data_type, &co)?;
        fill_dataset( &mut ds, block, profile)?;
        ds.flush_cache()?;
    } else {
        let mut mem = create_mem_dataset( width, height, 1, profile.data_type)?;
        fill_dataset( &mut mem, block, profile)?;
        let mut ds = create_copy( &mem, &driver, path, &co)?;
        ds.flush_cache()?;
    }
    Ok(())
}

fn fill_dataset<T> (ds: &mut Dataset, block: &mut SampleBlock<T>, profile: &RasterProfile) -> GdalResult<()>
    where T: Copy + GdalType
{
    let (height,width) = block.shape();
    ds.set_projection( &profile.crs_wkt)?;
    ds.set_geo_transform( &profile.geo_transform)?;

    let mut band = ds.rasterband(1)?;
    if profile.no_data.is_some() {
        band.set_no_data_value( profile.no_data)?;
    }
    band.write( (0,0), (width,height), block.buffer_mut())?;
    Ok(())
}
