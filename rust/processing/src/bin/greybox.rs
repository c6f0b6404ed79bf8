// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: compile a scene plan into blockout and navmesh files
//!
//! Usage:
//!   greybox <scene_plan.json> [options]

use std::env;
use std::path::PathBuf;
use std::process;

use greybox_processing::{
    compile_scene, load_scene_plan, plan_and_compile, save_artifacts, Config, JsonFilePlanner,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,greybox=debug".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let input = PathBuf::from(&args[1]);
    let mut config = Config::from_env();
    let mut prompt: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                config.output_dir = PathBuf::from(required_value(&args, i, "--output"));
            }
            "--prompt" => {
                i += 1;
                prompt = Some(required_value(&args, i, "--prompt").to_string());
            }
            "--threads" => {
                i += 1;
                config.worker_threads = required_value(&args, i, "--threads")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("Invalid --threads value");
                        process::exit(1);
                    });
            }
            "--no-obj" => {
                config.write_obj = false;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
    {
        tracing::warn!(error = %e, "Could not configure rayon thread pool, using default");
    }

    tracing::info!(
        input = %input.display(),
        output_dir = %config.output_dir.display(),
        worker_threads = config.worker_threads,
        write_obj = config.write_obj,
        "Starting greybox"
    );

    // A prompt means the input is a raw generator response rather than a full plan
    let result = match &prompt {
        Some(prompt) => plan_and_compile(&JsonFilePlanner::new(&input), prompt),
        None => load_scene_plan(&input)
            .and_then(|plan| compile_scene(&plan).map(|artifacts| (plan, artifacts))),
    };

    let (plan, artifacts) = match result {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::error!(error = %e, "Scene compilation failed");
            process::exit(1);
        }
    };

    for diagnostic in &artifacts.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
    if artifacts.navmesh_degraded() {
        eprintln!("warning: navmesh is the open world bounds; obstacles were not applied");
    }

    let saved = match save_artifacts(&config.output_dir, &plan, &artifacts, config.write_obj) {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!(error = %e, "Writing artifacts failed");
            process::exit(1);
        }
    };

    println!("Scene theme: {}", plan.theme);
    println!("Num regions: {}", plan.regions.len());
    println!("Num objects: {}", plan.objects.len());
    println!("Blockout boxes: {}", artifacts.blockout.len());
    println!("Navmesh polygons: {}", artifacts.navmesh.len());
    println!("Scene plan saved to {}", saved.scene_plan.display());
    println!("Blockout saved to {}", saved.blockout.display());
    println!("Navmesh saved to {}", saved.navmesh.display());
    if let Some(obj) = &saved.obj {
        println!("Blockout OBJ saved to {}", obj.display());
    }
}

fn required_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        r#"greybox - compile a scene plan into a blockout and a walkable navmesh

Usage:
  greybox <scene_plan.json> [options]

Options:
  --output <dir>       Output directory (default: $GREYBOX_OUTPUT_DIR or .)
  --prompt <text>      Treat the input as a raw generator response for <text>
  --threads <n>        Worker threads (default: $GREYBOX_WORKER_THREADS or CPU count)
  --no-obj             Skip blockout.obj export
  -h, --help           Show this help

Environment:
  RUST_LOG             Log filter (default: info,greybox=debug)
  GREYBOX_WRITE_OBJ    Set to false to skip OBJ export

Examples:
  greybox scene_plan.json --output out/
  greybox llm_response.json --prompt "A small medieval village" --no-obj"#
    );
}
