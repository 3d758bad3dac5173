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

use std::{fs, path::PathBuf, process::ExitCode};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use odin_clip::{AssetCatalog, AssetList, ClipConfig, ClipReport, ClipStatus, Clipper, FailurePolicy, geometry_bounds,
    load_config, load_geojson_geometry};

/// clip the bounding box of a GeoJSON area of interest out of remote raster assets, reading only
/// the required byte ranges of each asset
#[derive(Parser,Debug)]
#[command(version, about)]
struct CliOpts {
    /// GeoJSON file with the area of interest (first feature is used)
    #[arg(short='g', long)]
    geojson: PathBuf,

    /// output directory for clipped rasters
    #[arg(short='o', long, default_value=".")]
    dir: PathBuf,

    /// optional RON config file (defaults are used otherwise)
    #[arg(short='c', long)]
    config: Option<PathBuf>,

    /// skip assets that do not cover the area of interest instead of aborting
    #[arg(long)]
    skip_out_of_bounds: bool,

    /// write a JSON report of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// asset locators (http(s)/s3/gs URLs or local paths)
    #[arg(required=true)]
    assets: Vec<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();
    let opts = CliOpts::parse();

    let mut config = match &opts.config {
        Some(path) => load_config( path)?,
        None => ClipConfig::default()
    };
    if opts.skip_out_of_bounds {
        config.on_out_of_bounds = FailurePolicy::Skip;
    }

    let geometry = load_geojson_geometry( &opts.geojson)?;
    let bbox = geometry_bounds( &geometry)?;
    let assets = AssetList::from_locators( &opts.assets).asset_refs()?;
    println!("{} items found", assets.len());

    fs::create_dir_all( &opts.dir)?;
    let clipper = Clipper::new( config)?;

    let mut report = ClipReport::new( bbox);
    let res = clipper.clip_assets_into( &assets, &opts.dir, &mut report, |outcome| {
        if let ClipStatus::Written { path, .. } = &outcome.status {
            println!("Writing {}", path.display());
        }
    });

    // the report also covers the assets that were written before an abort
    if let Some(path) = &opts.report {
        fs::write( path, serde_json::to_string_pretty( &report)?)?;
    }

    match res {
        Ok(()) => Ok( ExitCode::SUCCESS ),
        Err(e) if e.is_window_error() => {
            eprintln!("{e}");
            println!("Provided geometry extends available datafile.");
            println!("Provide a smaller area of interest to get a result.");
            Ok( ExitCode::FAILURE )
        }
        Err(e) => Err( e.into() )
    }
}
