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

use crate::errors::{Result, invalid_locator};

/// reference to a single (remote) raster asset, which is either a URL that supports ranged reads,
/// a cloud storage object (s3://, gs://) or a local path
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct AssetRef {
    locator: String
}

impl AssetRef {
    pub fn new (locator: impl ToString) -> Self {
        AssetRef { locator: locator.to_string() }
    }

    pub fn locator (&self) -> &str { self.locator.as_str() }

    /// the trailing path segment of the locator, which is also the name of the clipped output file
    pub fn file_name (&self) -> Result<&str> {
        let path = self.locator.split(['?','#']).next().unwrap_or_default();
        let name = path.rsplit(['/','\\']).next().unwrap_or_default();

        if name.is_empty() || name == "." || name == ".." {
            Err( invalid_locator( format!("no file name in '{}'", self.locator)))
        } else {
            Ok(name)
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locator)
    }
}

/// the source of asset references for a clip run. This is where catalog queries (e.g. STAC searches for
/// items that intersect the area of interest and have all required bands) plug in
pub trait AssetCatalog {
    fn asset_refs (&self) -> Result<Vec<AssetRef>>;
}

/// a static list of asset references, e.g. from the command line
#[derive(Debug,Clone,Default)]
pub struct AssetList {
    assets: Vec<AssetRef>
}

impl AssetList {
    pub fn from_locators<S: AsRef<str>> (locators: &[S]) -> Self {
        AssetList { assets: locators.iter().map( |l| AssetRef::new( l.as_ref())).collect() }
    }
}

impl AssetCatalog for AssetList {
    fn asset_refs (&self) -> Result<Vec<AssetRef>> {
        Ok( self.assets.clone() )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let asset = AssetRef::new("https://sentinel-cogs.s3.us-west-2.amazonaws.com/sentinel-s2-l2a-cogs/32/T/NR/2023/7/S2A_32TNR_20230715_0_L2A/scene_band4.tif");
        assert_eq!( asset.file_name().unwrap(), "scene_band4.tif");

        let asset = AssetRef::new("https://example.com/data/B04.TIF?X-Amz-Signature=abc#frag");
        assert_eq!( asset.file_name().unwrap(), "B04.TIF");

        let asset = AssetRef::new("/tmp/assets/scene_band4.tif");
        assert_eq!( asset.file_name().unwrap(), "scene_band4.tif");

        assert!( AssetRef::new("https://example.com/data/").file_name().is_err());
        assert!( AssetRef::new("").file_name().is_err());
    }

    #[test]
    fn test_asset_list() {
        let list = AssetList::from_locators( &["s3://bucket/a_B04.tif", "s3://bucket/a_B08.tif"]);
        let refs = list.asset_refs().unwrap();
        assert_eq!( refs.len(), 2);
        assert_eq!( refs[1].locator(), "s3://bucket/a_B08.tif");
        assert_eq!( refs[1].to_string(), "s3://bucket/a_B08.tif");
    }
}
