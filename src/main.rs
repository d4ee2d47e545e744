use std::env;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use vessel_filter::config::load_config;
use vessel_filter::image::io::{load_grayscale_f32, save_normalized_f32, write_json_file};
use vessel_filter::{multi_scale, GaussianHessian};

#[derive(Serialize)]
struct LayerReport {
    sigma: f32,
    label: String,
    max_response: f32,
}

#[derive(Serialize)]
struct RunReport {
    input: String,
    width: usize,
    height: usize,
    layers: Vec<LayerReport>,
    latency_ms: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: vesselness_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_grayscale_f32(&config.input_path)?;
    let t0 = Instant::now();
    let stack = multi_scale(&image, &config.scale_range, &config.params, &GaussianHessian)
        .map_err(|e| format!("Vesselness failed: {e}"))?;
    let latency_ms = t0.elapsed().as_secs_f64() * 1e3;

    if let Some(dir) = &config.output.layers_dir {
        for (i, layer) in stack.layers.iter().enumerate() {
            let path = dir.join(format!("layer_{i:02}_sigma_{:.3}.png", layer.sigma));
            save_normalized_f32(&layer.map, &path)?;
        }
    }

    let report = RunReport {
        input: config.input_path.display().to_string(),
        width: image.w,
        height: image.h,
        layers: stack
            .layers
            .iter()
            .map(|layer| LayerReport {
                sigma: layer.sigma,
                label: layer.label.clone(),
                max_response: layer.max_response(),
            })
            .collect(),
        latency_ms,
    };
    if let Some(path) = &config.output.report_out {
        write_json_file(path, &report)?;
    }

    println!(
        "layers={} peak={:.4} latency_ms={:.3}",
        report.layers.len(),
        report
            .layers
            .iter()
            .map(|l| l.max_response)
            .fold(0.0f32, f32::max),
        latency_ms
    );
    Ok(())
}
