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
use serde::{Serialize,Deserialize};

use crate::errors::{Result, config_error};

/// what to do with assets for which the requested area maps to an invalid pixel window
#[derive(Debug,Copy,Clone,Default,Serialize,Deserialize,PartialEq,Eq)]
pub enum FailurePolicy {
    /// stop the whole run at the first asset that does not cover the area of interest
    #[default]
    Abort,

    /// record the asset as skipped and continue with the next one
    Skip
}

/// clip run configuration
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
#[serde(default)]
pub struct ClipConfig {
    /// CRS of the area of interest geometry (any definition GDAL understands, e.g. "EPSG:4326")
    pub src_crs: String,

    /// 1-based index of the raster band to clip
    pub band: usize,

    pub on_out_of_bounds: FailurePolicy,

    /// GDAL config options that are set before any asset is opened
    pub gdal_options: Vec<(String,String)>,
}

impl Default for ClipConfig {
    fn default() -> Self {
        ClipConfig {
            src_crs: "EPSG:4326".to_string(),
            band: 1,
            on_out_of_bounds: FailurePolicy::Abort,
            gdal_options: vec![
                ("GDAL_DISABLE_READDIR_ON_OPEN".to_string(), "EMPTY_DIR".to_string()),
                ("CPL_VSIL_CURL_ALLOWED_EXTENSIONS".to_string(), ".tif,.tiff,.TIF".to_string()),
                ("GDAL_HTTP_MULTIRANGE".to_string(), "YES".to_string()),
                ("GDAL_HTTP_MERGE_CONSECUTIVE_RANGES".to_string(), "YES".to_string()),
            ]
        }
    }
}

pub fn load_config (path: impl AsRef<Path>) -> Result<ClipConfig> {
    let path = path.as_ref();
    let data = std::fs::read( path).map_err( |e| config_error( format!("failed to read {path:?}: {e}")))?;
    parse_config( &data).map_err( |e| config_error( format!("{path:?}: {e}")))
}

pub fn parse_config (data: &[u8]) -> std::result::Result<ClipConfig,ron::de::SpannedError> {
    ron::de::from_bytes( data)
}
