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
use geo::Geometry;
use serde::Serialize;
use tracing::{debug, info, warn};
use odin_gdal::{GdalDataType, GdalType, SpatialRef, gis_srs, set_config_options};

use crate::bounds::{BoundingBox, geometry_bounds};
use crate::catalog::{AssetCatalog, AssetRef};
use crate::config::{ClipConfig, FailurePolicy};
use crate::project::{CornerProjector, ProjectedCorner};
use crate::reader::RasterAsset;
use crate::window::PixelWindow;
use crate::writer::{OutputRaster, write_output};
use crate::errors::{Result, OdinClipError, unsupported_crs};

#[derive(Debug,Clone,Serialize,PartialEq)]
pub enum ClipStatus {
    Written { path: PathBuf, window: PixelWindow, width: usize, height: usize },
    Skipped { reason: String }
}

#[derive(Debug,Clone,Serialize,PartialEq)]
pub struct AssetOutcome {
    pub locator: String,
    pub status: ClipStatus
}

/// per-asset outcomes of a clip run, in the order in which assets were processed
#[derive(Debug,Clone,Serialize,PartialEq)]
pub struct ClipReport {
    pub bbox: BoundingBox,
    pub outcomes: Vec<AssetOutcome>
}

impl ClipReport {
    pub fn new (bbox: BoundingBox) -> Self {
        ClipReport { bbox, outcomes: Vec::new() }
    }

    pub fn n_written (&self) -> usize {
        self.outcomes.iter().filter( |o| matches!( o.status, ClipStatus::Written{..})).count()
    }

    pub fn n_skipped (&self) -> usize {
        self.outcomes.iter().filter( |o| matches!( o.status, ClipStatus::Skipped{..})).count()
    }

    pub fn written_paths (&self) -> Vec<&Path> {
        self.outcomes.iter().filter_map( |o| match &o.status {
            ClipStatus::Written { path, .. } => Some( path.as_path()),
            _ => None
        }).collect()
    }
}

/// clips the bounding box of an area of interest out of a sequence of raster assets. Each asset is
/// read only within the pixel window that covers the box, and written to the destination directory
/// under its own file name with a geotransform that is anchored at the projected upper-left box corner
pub struct Clipper {
    config: ClipConfig,
    src_srs: SpatialRef
}

impl Clipper {
    pub fn new (config: ClipConfig) -> Result<Self> {
        set_config_options( &config.gdal_options)?;
        let src_srs = gis_srs( &config.src_crs).map_err( |e| unsupported_crs( e.to_string()))?;
        Ok( Clipper { config, src_srs } )
    }

    /// clip all assets of `catalog` to the bounds of `geometry`
    pub fn clip_geometry (&self, geometry: &Geometry<f64>, catalog: &dyn AssetCatalog, dest_dir: &Path) -> Result<ClipReport> {
        let bbox = geometry_bounds( geometry)?;
        let assets = catalog.asset_refs()?;
        info!("{} items found", assets.len());

        self.clip_assets( &bbox, &assets, dest_dir)
    }

    /// clip `assets` to `bbox` (in the source CRS), sequentially and in the given order
    pub fn clip_assets (&self, bbox: &BoundingBox, assets: &[AssetRef], dest_dir: &Path) -> Result<ClipReport> {
        let mut report = ClipReport::new( *bbox);
        self.clip_assets_into( assets, dest_dir, &mut report, |_| {})?;
        Ok(report)
    }

    /// clip `assets` to the bbox of `report`, adding outcomes to `report` as they happen and calling
    /// `on_outcome` for each of them. If the run is aborted `report` keeps the outcomes up to that point
    pub fn clip_assets_into<F> (&self, assets: &[AssetRef], dest_dir: &Path, report: &mut ClipReport, mut on_outcome: F) -> Result<()>
        where F: FnMut(&AssetOutcome)
    {
        let bbox = report.bbox;
        info!("clipping {} assets to {}", assets.len(), bbox);

        for asset in assets {
            let status = match self.clip_asset( &bbox, asset, dest_dir) {
                Ok(status) => status,
                Err(e) if e.is_window_error() && self.config.on_out_of_bounds == FailurePolicy::Skip => {
                    warn!("skipping {}: {}", asset, e);
                    ClipStatus::Skipped { reason: e.to_string() }
                }
                Err(e) => {
                    warn!("aborting clip run at {}: {}", asset, e);
                    return Err(e)
                }
            };

            let outcome = AssetOutcome { locator: asset.locator().to_string(), status };
            on_outcome( &outcome);
            report.outcomes.push( outcome);
        }

        info!("{} assets written, {} skipped", report.n_written(), report.n_skipped());
        Ok(())
    }

    /// clip a single asset. The output file is only created if the pixel window is valid
    pub fn clip_asset (&self, bbox: &BoundingBox, asset: &AssetRef, dest_dir: &Path) -> Result<ClipStatus> {
        let path = dest_dir.join( asset.file_name()?);

        let raster = RasterAsset::open( asset, self.config.band)?;
        let projector = CornerProjector::new( &self.src_srs, &raster.srs()?)?;
        let (ul,lr) = projector.project_corners( bbox)?;
        debug!("{} projected corners ul={} lr={}", asset, ul, lr);

        let window = PixelWindow::from_corners( &raster.profile().geo_transform, &ul, &lr)?;

        use GdalDataType::*;
        match raster.profile().data_type {
            UInt8   => clip_typed::<u8>( &raster, &window, &ul, &path),
            UInt16  => clip_typed::<u16>( &raster, &window, &ul, &path),
            UInt32  => clip_typed::<u32>( &raster, &window, &ul, &path),
            UInt64  => clip_typed::<u64>( &raster, &window, &ul, &path),
            Int8    => clip_typed::<i8>( &raster, &window, &ul, &path),
            Int16   => clip_typed::<i16>( &raster, &window, &ul, &path),
            Int32   => clip_typed::<i32>( &raster, &window, &ul, &path),
            Int64   => clip_typed::<i64>( &raster, &window, &ul, &path),
            Float32 => clip_typed::<f32>( &raster, &window, &ul, &path),
            Float64 => clip_typed::<f64>( &raster, &window, &ul, &path),
            other => Err( OdinClipError::UnsupportedDataType( format!("{other:?}")))
        }
    }
}

fn clip_typed<T> (raster: &RasterAsset, window: &PixelWindow, ul: &ProjectedCorner, path: &Path) -> Result<ClipStatus>
    where T: Copy + GdalType
{
    let block = raster.read_sample_block::<T>( window)?;
    let (height,width) = block.shape();
    let profile = raster.profile().cropped( (height,width), ul);

    let path = write_output( OutputRaster { block, profile }, path)?;
    Ok( ClipStatus::Written { path, window: *window, width, height } )
}
