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

use odin_gdal::*;

// run with "cargo test -p odin_gdal -- --nocapture"

#[test]
fn test_vsi_path() {
    assert_eq!( vsi_path("https://data.example.com/cogs/scene_B04.tif"), "/vsicurl/https://data.example.com/cogs/scene_B04.tif");
    assert_eq!( vsi_path("http://localhost:8080/a.tif"), "/vsicurl/http://localhost:8080/a.tif");
    assert_eq!( vsi_path("s3://bucket/path/a.tif"), "/vsis3/bucket/path/a.tif");
    assert_eq!( vsi_path("gs://bucket/a.tif"), "/vsigs/bucket/a.tif");
    assert_eq!( vsi_path("/vsicurl/https://x/a.tif"), "/vsicurl/https://x/a.tif");
    assert_eq!( vsi_path("/tmp/a.tif"), "/tmp/a.tif");
}

#[test]
fn test_driver_capabilities() {
    assert!( supports_create( &get_driver_by_name("GTiff").unwrap()));
    assert!( supports_create( &get_driver_by_name("MEM").unwrap()));
    assert!( !supports_create( &get_driver_by_name("PNG").unwrap()));
}

#[test]
fn test_reanchor_geotransform() {
    let gt = new_geotransform( 500000.0, 10.0, 0.5, 5010000.0, 0.25, -10.0);
    let gt1 = reanchor_geotransform( &gt, 501234.5, 5001234.5);
    assert_eq!( gt1, [501234.5, 10.0, 0.5, 5001234.5, 0.25, -10.0]);
}

#[test]
fn test_pixel_position() {
    let gt = new_geotransform( 500000.0, 10.0, 0.0, 5010000.0, 0.0, -10.0);
    let inv = invert_geotransform( &gt).unwrap();
    let (col,row) = pixel_position( &inv, 500105.0, 5009975.0);
    assert!( (col - 10.5).abs() < 1e-9);
    assert!( (row - 2.5).abs() < 1e-9);

    let singular = new_geotransform( 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert!( invert_geotransform( &singular).is_err());
}

#[test]
fn test_gis_transform_utm() {
    let s_srs = srs_epsg_4326().unwrap();
    let t_srs = gis_srs("EPSG:32632").unwrap();
    let transform = GisTransform::new( &s_srs, &t_srs).unwrap();

    // central meridian of UTM zone 32 is 9°E
    let (x,y) = transform.transform_point( 9.0, 0.0).unwrap();
    println!("(9,0) -> ({x},{y})");
    assert!( (x - 500000.0).abs() < 0.01);
    assert!( y.abs() < 0.01);

    let (x,y) = transform.transform_point( 9.0, 45.0).unwrap();
    println!("(9,45) -> ({x},{y})");
    assert!( (x - 500000.0).abs() < 0.01);
    assert!( (y - 4982950.4).abs() < 1.0);

    // east of the central meridian has to increase the easting
    let (x,_) = transform.transform_point( 10.0, 45.0).unwrap();
    assert!( x > 570000.0 && x < 580000.0);
}

#[test]
fn test_invalid_srs() {
    assert!( gis_srs("EPSG:99999999").is_err());
    assert!( gis_srs_from_wkt("").is_err());
}

#[test]
fn test_create_and_read_window() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.tif");
    let (w,h) = (32usize, 24usize);

    {
        let driver = get_driver_by_name("GTiff").unwrap();
        let co = to_creation_options( &[("COMPRESS".to_string(), "DEFLATE".to_string())]).unwrap();
        let mut ds = create_dataset( &driver, &path, w, h, 1, GdalDataType::UInt16, &co).unwrap();
        ds.set_geo_transform( &new_geotransform( 0.0, 1.0, 0.0, 0.0, 0.0, -1.0)).unwrap();

        let data: Vec<u16> = (0..w*h).map( |i| i as u16).collect();
        let mut buf = Buffer::new( (w,h), data);
        let mut band = ds.rasterband(1).unwrap();
        band.write( (0,0), (w,h), &mut buf).unwrap();
    }

    let ds = open_remote( path.to_str().unwrap()).unwrap();
    assert_eq!( get_compression(&ds).as_deref(), Some("DEFLATE"));

    let band = ds.rasterband(1).unwrap();
    let buf: Buffer<u16> = read_window( &band, 4, 2, 3, 2).unwrap();
    assert_eq!( buf.shape(), (3,2));
    assert_eq!( buf.data(), &[ (2*w+4) as u16, (2*w+5) as u16, (2*w+6) as u16,
                               (3*w+4) as u16, (3*w+5) as u16, (3*w+6) as u16 ]);

    assert!( read_window::<u16>( &band, 30, 0, 3, 1).is_err());
}

#[test]
fn test_create_copy_from_mem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.png");
    let (w,h) = (16usize, 8usize);

    {
        let mut mem = create_mem_dataset( w, h, 1, GdalDataType::UInt8).unwrap();
        let data: Vec<u8> = (0..w*h).map( |i| (i % 251) as u8).collect();
        let mut buf = Buffer::new( (w,h), data);
        mem.rasterband(1).unwrap().write( (0,0), (w,h), &mut buf).unwrap();

        let driver = get_driver_by_name("PNG").unwrap();
        create_copy( &mem, &driver, &path, &RasterCreationOptions::new()).unwrap();
    }

    let ds = Dataset::open( &path).unwrap();
    assert_eq!( ds.driver().short_name(), "PNG");
    let buf: Buffer<u8> = read_window( &ds.rasterband(1).unwrap(), 0, 1, w, 1).unwrap();
    assert_eq!( buf.data()[0], w as u8);
}
