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

use odin_gdal::{Dataset, GdalDataType, GeoTransform, Metadata, get_compression, reanchor_geotransform, errors::Result};

use crate::project::ProjectedCorner;

/// the metadata we need to re-create a raster band in the same format: driver, data type, size,
/// CRS, geotransform (GDAL coefficient order `[x0, a, b, y0, d, e]`), nodata and storage layout
#[derive(Debug,Clone,PartialEq)]
pub struct RasterProfile {
    pub driver: String,
    pub data_type: GdalDataType,
    pub width: usize,
    pub height: usize,
    pub crs_wkt: String,
    pub geo_transform: GeoTransform,
    pub no_data: Option<f64>,
    pub compression: Option<String>,
    pub predictor: Option<String>,
    pub block_size: Option<(usize,usize)>, // only set for tiled rasters
}

impl RasterProfile {
    pub fn from_dataset (ds: &Dataset, band_index: usize) -> Result<RasterProfile> {
        let band = ds.rasterband( band_index)?;
        let (width,height) = ds.raster_size();

        let block_size = Some( band.block_size()).filter( |&block| is_tiled( block, width));

        Ok( RasterProfile {
            driver: ds.driver().short_name(),
            data_type: band.band_type(),
            width,
            height,
            crs_wkt: ds.projection(),
            geo_transform: ds.geo_transform()?,
            no_data: band.no_data_value(),
            compression: get_compression( ds),
            predictor: ds.metadata_item( "PREDICTOR", "IMAGE_STRUCTURE"),
            block_size
        })
    }

    /// the profile of a `(height,width)` window of this raster that starts at the projected `ul` corner.
    /// Pixel size and rotation are kept so that the output grid aligns with the source grid
    pub fn cropped (&self, shape: (usize,usize), ul: &ProjectedCorner) -> RasterProfile {
        let (height,width) = shape;
        RasterProfile {
            width,
            height,
            geo_transform: reanchor_geotransform( &self.geo_transform, ul.x, ul.y),
            ..self.clone()
        }
    }

    /// driver creation options that reproduce compression and tiling of the source
    pub fn creation_options (&self) -> Vec<(String,String)> {
        let mut opts: Vec<(String,String)> = Vec::new();

        if self.driver == "GTiff" {
            if let Some(compression) = &self.compression {
                if let Some(method) = gtiff_compress_method( compression) {
                    opts.push( ("COMPRESS".to_string(), method.to_string()));
                    if let Some(predictor) = &self.predictor {
                        opts.push( ("PREDICTOR".to_string(), predictor.clone()));
                    }
                }
            }
            if let Some((block_x,block_y)) = self.block_size {
                opts.push( ("TILED".to_string(), "YES".to_string()));
                opts.push( ("BLOCKXSIZE".to_string(), block_x.to_string()));
                opts.push( ("BLOCKYSIZE".to_string(), block_y.to_string()));
            }
        }

        opts
    }
}

// strips always span the full raster width, TIFF tiles are multiples of 16 in both dimensions.
// Square blocks that happen to be exactly as wide as the raster are taken as tiles
fn is_tiled (block: (usize,usize), width: usize) -> bool {
    let (block_x,block_y) = block;
    block_y > 1 && block_x % 16 == 0 && block_y % 16 == 0 && (block_x != width || block_x == block_y)
}

// IMAGE_STRUCTURE COMPRESSION metadata values are not always valid COMPRESS creation option values
fn gtiff_compress_method (compression: &str) -> Option<&'static str> {
    let c = compression.to_ascii_uppercase();
    if c.contains("JPEG") { return Some("JPEG") }
    match c.as_str() {
        "DEFLATE" | "ZIP" => Some("DEFLATE"),
        "LZW" => Some("LZW"),
        "ZSTD" => Some("ZSTD"),
        "LZMA" => Some("LZMA"),
        "PACKBITS" => Some("PACKBITS"),
        "WEBP" => Some("WEBP"),
        "LERC" => Some("LERC"),
        "LERC_DEFLATE" => Some("LERC_DEFLATE"),
        "LERC_ZSTD" => Some("LERC_ZSTD"),
        "CCITTRLE" => Some("CCITTRLE"),
        "CCITTFAX3" => Some("CCITTFAX3"),
        "CCITTFAX4" => Some("CCITTFAX4"),
        _ => None // NONE or unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odin_gdal::new_geotransform;

    fn utm_profile() -> RasterProfile {
        RasterProfile {
            driver: "GTiff".to_string(),
            data_type: GdalDataType::UInt16,
            width: 10980,
            height: 10980,
            crs_wkt: "PROJCS[\"WGS 84 / UTM zone 32N\"]".to_string(),
            geo_transform: new_geotransform( 500000.0, 10.0, 0.0, 5010000.0, 0.0, -10.0),
            no_data: Some(0.0),
            compression: Some("DEFLATE".to_string()),
            predictor: None,
            block_size: Some((1024,1024))
        }
    }

    #[test]
    fn test_cropped_anchoring() {
        let src = utm_profile();
        let ul = ProjectedCorner { x: 503940.7, y: 4994063.2 };
        let out = src.cropped( (1111, 788), &ul);

        assert_eq!( (out.height, out.width), (1111, 788));
        let (s,o) = (src.geo_transform, out.geo_transform);
        assert_eq!( (o[1], o[2], o[4], o[5]), (s[1], s[2], s[4], s[5]));
        assert_eq!( (o[0], o[3]), (ul.x, ul.y));

        assert_eq!( out.crs_wkt, src.crs_wkt);
        assert_eq!( out.data_type, src.data_type);
        assert_eq!( out.no_data, src.no_data);
        assert_eq!( out.compression, src.compression);
    }

    #[test]
    fn test_rotation_kept() {
        let mut src = utm_profile();
        src.geo_transform = new_geotransform( 1000.0, 2.0, 0.3, 2000.0, -0.2, -2.0);
        let out = src.cropped( (5,6), &ProjectedCorner { x: 1100.0, y: 1900.0 });
        assert_eq!( out.geo_transform, [1100.0, 2.0, 0.3, 1900.0, -0.2, -2.0]);
    }

    #[test]
    fn test_creation_options() {
        let opts = utm_profile().creation_options();
        assert!( opts.contains( &("COMPRESS".to_string(), "DEFLATE".to_string())));
        assert!( opts.contains( &("TILED".to_string(), "YES".to_string())));
        assert!( opts.contains( &("BLOCKXSIZE".to_string(), "1024".to_string())));

        let mut striped = utm_profile();
        striped.block_size = None;
        striped.compression = Some("YCbCr JPEG".to_string());
        assert_eq!( striped.creation_options(), vec![("COMPRESS".to_string(), "JPEG".to_string())]);

        let mut png = utm_profile();
        png.driver = "PNG".to_string();
        assert!( png.creation_options().is_empty());
    }

    #[test]
    fn test_predictor() {
        let mut src = utm_profile();
        src.predictor = Some("2".to_string());
        assert!( src.creation_options().contains( &("PREDICTOR".to_string(), "2".to_string())));

        src.compression = None;
        assert!( !src.creation_options().iter().any( |(k,_)| k == "PREDICTOR"));
    }

    #[test]
    fn test_tiling_detection() {
        assert!( is_tiled( (256,256), 1200));
        assert!( is_tiled( (256,256), 200));  // tile wider than the raster
        assert!( is_tiled( (256,256), 256));
        assert!( !is_tiled( (1200,1), 1200)); // single row strips
        assert!( !is_tiled( (1200,6), 1200));
        assert!( !is_tiled( (32,24), 32));
    }
}
