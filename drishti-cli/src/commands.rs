//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use drishti::core::{CORRIDOR_KIND, SHOP_KIND};
use drishti::grid::GridStats;
use drishti::io::{SvgVisualizer, load_annotations, load_index, load_map, save_index};
use drishti::recognition::{
    GeminiRecognizer, RecordedRecognizer, ShopRecognizer, mime_type_for_path,
};
use drishti::{Annotation, DrishtiConfig, Estimate, PoseEstimator};
use serde_json::json;
use tracing::{info, warn};

use crate::error::{CliError, Result};

/// Where the observed shop names come from.
pub enum Observation {
    /// Names given on the command line
    Names(Vec<String>),
    /// A recorded recognizer response, optionally with the photo it describes
    Recorded {
        detections: PathBuf,
        photo: Option<PathBuf>,
    },
    /// A photo sent to the live recognizer
    Photo(PathBuf),
}

fn load_venue(shops: &Path, corridors: Option<&Path>) -> Result<Vec<Annotation>> {
    let mut sources = vec![(shops, SHOP_KIND)];
    if let Some(corridors) = corridors {
        sources.push((corridors, CORRIDOR_KIND));
    }
    Ok(load_map(sources)?)
}

pub fn stats(config: &DrishtiConfig, shops: &Path, corridors: Option<&Path>) -> Result<()> {
    let map = load_venue(shops, corridors)?;
    let (grid, bounds) = config.rasterizer().rasterize(&map)?;
    let stats = GridStats::compute(&grid, &bounds);

    for line in stats.to_string().lines() {
        info!("{}", line);
    }
    Ok(())
}

pub fn build_index(
    config: &DrishtiConfig,
    shops: &Path,
    corridors: &Path,
    output: &Path,
) -> Result<()> {
    let map = load_venue(shops, Some(corridors))?;
    if !map.iter().any(Annotation::is_corridor) {
        warn!(
            "No annotations of kind '{}' in {:?}; the index will be empty",
            CORRIDOR_KIND, corridors
        );
    }

    let (index, _, _) = config.index_builder().build_from_map(&map)?;
    if let Some((signature, count)) = index.most_ambiguous() {
        info!("Most ambiguous signature {} ({} poses)", signature, count);
    }
    save_index(&index, output)?;
    Ok(())
}

fn observed_names(config: &DrishtiConfig, observation: Observation) -> Result<Vec<String>> {
    match observation {
        Observation::Names(names) if names.is_empty() => Err(CliError::Usage(
            "provide --photo, --detections or at least one --shop".into(),
        )),
        Observation::Names(names) => Ok(names),
        Observation::Recorded { detections, photo } => {
            let recognizer = RecordedRecognizer::from_file(&detections)?;
            let (image, mime_type) = match photo {
                Some(path) => (fs::read(&path)?, mime_type_for_path(&path)),
                None => (Vec::new(), "image/jpeg"),
            };
            info!(
                "Replaying detections from {:?} (model {})",
                detections, config.recognizer.model
            );
            Ok(recognizer.detect(&image, mime_type)?)
        }
        Observation::Photo(path) => {
            let recognizer = GeminiRecognizer::new(config.recognizer.to_recognizer_config())?;
            let image = fs::read(&path)?;
            info!("Recognizing shops in {:?}", path);
            Ok(recognizer.detect(&image, mime_type_for_path(&path))?)
        }
    }
}

fn print_estimate(estimate: &Estimate, as_json: bool) -> Result<()> {
    if as_json {
        let value = json!({
            "signature": estimate.signature(),
            "found": estimate.is_found(),
            "poses": estimate.poses(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match estimate {
        Estimate::Found { signature, poses } => {
            println!("Signature {}: {} candidate poses", signature, poses.len());
            for pose in poses {
                println!("  {}", pose);
            }
        }
        Estimate::NotFound { signature } => {
            println!("Signature {} not found in index", signature);
        }
    }
    Ok(())
}

pub fn locate(
    config: &DrishtiConfig,
    index_path: &Path,
    observation: Observation,
    render: Option<(PathBuf, PathBuf)>,
    as_json: bool,
) -> Result<()> {
    let names = observed_names(config, observation)?;
    let estimator = PoseEstimator::new(load_index(index_path)?);

    let built_with = &estimator.index().metadata().sensor;
    if *built_with != config.sensor.to_sensor_config() {
        warn!("Index was built with different sensor settings than the current configuration");
    }

    let estimate = estimator.estimate(&names);
    print_estimate(&estimate, as_json)?;

    if let Some((output, shops_path)) = render {
        let shops: Vec<Annotation> = load_annotations(&shops_path, SHOP_KIND)?
            .into_iter()
            .filter(|a| !a.is_corridor())
            .collect();
        SvgVisualizer::new(shops, config.render.to_render_config())
            .with_title(format!("Candidates for {}", estimate.signature()))
            .with_candidates(estimate.candidate_points())
            .with_heat_layer()
            .save(&output)?;
        info!("Wrote {:?}", output);
    }
    Ok(())
}

pub fn render(
    config: &DrishtiConfig,
    shops: &Path,
    corridors: Option<&Path>,
    output: &Path,
    with_grid: bool,
) -> Result<()> {
    let map = load_venue(shops, corridors)?;
    let mut visualizer = SvgVisualizer::new(map.clone(), config.render.to_render_config())
        .with_title(format!("{}", shops.display()));
    if with_grid {
        let (grid, bounds) = config.rasterizer().rasterize(&map)?;
        visualizer = visualizer.with_grid(grid, bounds);
    }
    visualizer.save(output)?;
    info!("Wrote {:?}", output);
    Ok(())
}
