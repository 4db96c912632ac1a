use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use geojson::{FeatureCollection, GeoJson};
use log::{Level, LevelFilter, info, log};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::io::session::ExtSession;

pub mod cli;
pub mod map_to_svg;
pub mod output;
pub mod session;
pub mod svg_util;

pub fn read_map_file(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path).with_context(|| format!("could not open map file: {path:?}"))?;
    let reader = BufReader::new(file);
    let geojson =
        GeoJson::from_reader(reader).with_context(|| format!("could not parse map file: {path:?}"))?;
    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        _ => bail!("map file is not a FeatureCollection: {path:?}"),
    }
}

pub fn read_session_file(path: &Path) -> Result<ExtSession> {
    let file = File::open(path).with_context(|| format!("could not open session file: {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse session file: {path:?}"))
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not create output file: {path:?}"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write output file: {path:?}"))?;

    info!("[IO] json written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[IO] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
