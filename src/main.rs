//! Command-line entry point: binarize an input image, vectorize it and write
//! the road-graph JSON plus any requested debug rasters.

use road_vectorizer::config::{load_config, ToolConfig};
use road_vectorizer::raster::io::{load_mask, save_labels_png, save_mask_png, write_json_file};
use road_vectorizer::{RoadVectorizer, VectorizerConfig};
use std::env;
use std::path::Path;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: ToolConfig = load_config(Path::new(&config_path))?;

    let mask = load_mask(&config.input, config.threshold)?;
    println!(
        "Loaded {} ({}×{}, {} road pixels)",
        config.input.display(),
        mask.w,
        mask.h,
        mask.count_fg()
    );

    let vectorizer = RoadVectorizer::new(config.vectorizer);
    let report = vectorizer.process(&mask)?;

    if let Some(path) = &config.output.mask_png {
        save_mask_png(&mask, path)?;
    }
    if let Some(path) = &config.output.skeleton_png {
        save_mask_png(&report.skeleton, path)?;
    }
    if let Some(path) = &config.output.labels_png {
        save_labels_png(&report.labels, path)?;
    }
    write_json_file(&config.output.roads_json, &report.graph)?;

    println!(
        "Vectorized {} roads ({} indexed pixels) in {:.1} ms",
        report.graph.roads.len(),
        report.graph.pixel_index.len(),
        report.timing.total_ms
    );
    println!("Road graph written to {}", config.output.roads_json.display());
    Ok(())
}

fn usage() -> String {
    let defaults = VectorizerConfig::default();
    format!(
        "Usage: road_vectorizer <config.json>\n\
         \n\
         The config file is JSON with the following shape:\n\
         {{\n\
           \"input\": \"mask.png\",\n\
           \"threshold\": 30,\n\
           \"vectorizer\": {{\n\
             \"gap_fill_max_px\": {},\n\
             \"min_blob_px\": {},\n\
             \"spike_max_len_px\": {},\n\
             \"junction_sample_radius_px\": {},\n\
             \"continuity_angle_deg\": {},\n\
             \"endpoint_merge_dist_px\": {}\n\
           }},\n\
           \"output\": {{\n\
             \"roads_json\": \"roads.json\",\n\
             \"skeleton_png\": \"skeleton.png\",\n\
             \"labels_png\": \"labels.png\"\n\
           }}\n\
         }}\n\
         \"threshold\", \"vectorizer\" and the PNG outputs are optional.",
        defaults.gap_fill_max_px,
        defaults.min_blob_px,
        defaults.spike_max_len_px,
        defaults.junction_sample_radius_px,
        defaults.continuity_angle_deg,
        defaults.endpoint_merge_dist_px,
    )
}
