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
#![allow(unused)]

//! partial-extent clipping of remote raster assets (e.g. Cloud Optimized GeoTIFFs).
//!
//! For each asset the bounding box of an area of interest is projected into the native CRS of the
//! asset, mapped to a pixel window, and only the samples inside that window are read (using ranged
//! reads for remote assets). The result is written as a new raster with the same profile as the
//! source, anchored at the projected upper-left corner of the bounding box.

pub mod errors;
pub mod bounds;
pub mod geometry;
pub mod catalog;
pub mod config;
pub mod project;
pub mod window;
pub mod profile;
pub mod reader;
pub mod writer;
pub mod pipeline;

pub use errors::{Result, OdinClipError};
pub use bounds::{BoundingBox, geometry_bounds};
pub use geometry::{load_geojson_geometry, parse_geojson_geometry};
pub use catalog::{AssetCatalog, AssetList, AssetRef};
pub use config::{ClipConfig, FailurePolicy, load_config};
pub use project::{CornerProjector, ProjectedCorner};
pub use window::PixelWindow;
pub use profile::RasterProfile;
pub use reader::{RasterAsset, SampleBlock};
pub use writer::{OutputRaster, write_output};
pub use pipeline::{AssetOutcome, ClipReport, ClipStatus, Clipper};
