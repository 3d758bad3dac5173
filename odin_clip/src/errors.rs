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
use thiserror::Error;
use odin_gdal::errors::OdinGdalError;

use crate::window::PixelWindow;

pub type Result<T> = std::result::Result<T, OdinClipError>;

#[derive(Error,Debug)]
pub enum OdinClipError {

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid asset locator: {0}")]
    InvalidLocator(String),

    #[error("unsupported CRS: {0}")]
    UnsupportedCrs(String),

    #[error("invalid geotransform: {0}")]
    InvalidGeoTransform(String),

    /// the requested bounding box is (at least partially) outside of the raster footprint
    #[error("requested area extends beyond the available data (pixel window {0})")]
    OutOfBoundsWindow(PixelWindow),

    #[error("requested area does not cover any pixel (pixel window {0})")]
    EmptyWindow(PixelWindow),

    #[error("failed to read {locator}: {source}")]
    RemoteRead { locator: String, source: OdinGdalError },

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: OdinGdalError },

    #[error("unsupported raster data type {0}")]
    UnsupportedDataType(String),

    #[error("config error: {0}")]
    ConfigError(String),

    // pass through for OdinGdalErrors
    #[error("ODIN gdal error {0}")]
    OdinGdalError( #[from] OdinGdalError),
}

impl OdinClipError {
    /// is this an error of the requested window (as opposed to I/O or CRS errors)
    pub fn is_window_error (&self) -> bool {
        matches!( self, OdinClipError::OutOfBoundsWindow(_) | OdinClipError::EmptyWindow(_))
    }
}

pub fn invalid_geometry<S: ToString> (msg: S)->OdinClipError {
    OdinClipError::InvalidGeometry(msg.to_string())
}

pub fn invalid_locator<S: ToString> (msg: S)->OdinClipError {
    OdinClipError::InvalidLocator(msg.to_string())
}

pub fn unsupported_crs<S: ToString> (msg: S)->OdinClipError {
    OdinClipError::UnsupportedCrs(msg.to_string())
}

pub fn config_error<S: ToString> (msg: S)->OdinClipError {
    OdinClipError::ConfigError(msg.to_string())
}

pub fn remote_read_error (locator: &str, source: OdinGdalError)->OdinClipError {
    OdinClipError::RemoteRead { locator: locator.to_string(), source }
}

pub fn write_error (path: &Path, source: OdinGdalError)->OdinClipError {
    OdinClipError::Write { path: path.to_path_buf(), source }
}
