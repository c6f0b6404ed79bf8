// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON and OBJ persistence of plans and compiled artifacts
//!
//! JSON keeps full f64 precision: serde_json writes the shortest
//! representation that parses back to the identical value.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use greybox_core::{BlockoutMesh, NavMesh2D, ScenePlan};
use greybox_geometry::box_mesh;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::pipeline::SceneArtifacts;

pub const SCENE_PLAN_FILE: &str = "scene_plan.json";
pub const BLOCKOUT_FILE: &str = "blockout.json";
pub const NAVMESH_FILE: &str = "navmesh.json";
pub const BLOCKOUT_OBJ_FILE: &str = "blockout.obj";

pub fn save_scene_plan(path: impl AsRef<Path>, plan: &ScenePlan) -> Result<()> {
    write_json(path.as_ref(), plan)
}

pub fn load_scene_plan(path: impl AsRef<Path>) -> Result<ScenePlan> {
    read_json(path.as_ref())
}

pub fn save_blockout(path: impl AsRef<Path>, blockout: &BlockoutMesh) -> Result<()> {
    write_json(path.as_ref(), blockout)
}

pub fn load_blockout(path: impl AsRef<Path>) -> Result<BlockoutMesh> {
    read_json(path.as_ref())
}

pub fn save_navmesh(path: impl AsRef<Path>, navmesh: &NavMesh2D) -> Result<()> {
    write_json(path.as_ref(), navmesh)
}

pub fn load_navmesh(path: impl AsRef<Path>) -> Result<NavMesh2D> {
    read_json(path.as_ref())
}

/// Files written by [`save_artifacts`]
#[derive(Debug, Clone)]
pub struct SavedArtifacts {
    pub scene_plan: PathBuf,
    pub blockout: PathBuf,
    pub navmesh: PathBuf,
    pub obj: Option<PathBuf>,
}

/// Write the plan and both artifacts into `dir`, creating it if needed
pub fn save_artifacts(
    dir: impl AsRef<Path>,
    plan: &ScenePlan,
    artifacts: &SceneArtifacts,
    with_obj: bool,
) -> Result<SavedArtifacts> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let saved = SavedArtifacts {
        scene_plan: dir.join(SCENE_PLAN_FILE),
        blockout: dir.join(BLOCKOUT_FILE),
        navmesh: dir.join(NAVMESH_FILE),
        obj: with_obj.then(|| dir.join(BLOCKOUT_OBJ_FILE)),
    };

    save_scene_plan(&saved.scene_plan, plan)?;
    save_blockout(&saved.blockout, &artifacts.blockout)?;
    save_navmesh(&saved.navmesh, &artifacts.navmesh)?;
    if let Some(obj) = &saved.obj {
        write_obj(obj, &artifacts.blockout)?;
    }

    tracing::info!(dir = %dir.display(), obj = with_obj, "Saved scene artifacts");
    Ok(saved)
}

/// Export blockout boxes as a Wavefront OBJ, one object per box
///
/// Box coordinates are already Y-up, matching the OBJ convention.
pub fn write_obj(path: impl AsRef<Path>, blockout: &BlockoutMesh) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);

    write_obj_to(&mut out, blockout).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

fn write_obj_to(out: &mut impl Write, blockout: &BlockoutMesh) -> std::io::Result<()> {
    writeln!(out, "# Generated by greybox")?;
    writeln!(out, "# Boxes: {}", blockout.len())?;
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out)?;

    // OBJ indices are 1-based and global across objects
    let mut vertex_base = 1u32;
    for (index, volume) in blockout.boxes.iter().enumerate() {
        let mesh = box_mesh(volume);
        writeln!(out, "o box_{}", index)?;

        for p in mesh.positions.chunks_exact(3) {
            writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[1], p[2])?;
        }
        for n in mesh.normals.chunks_exact(3) {
            writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2])?;
        }
        for tri in mesh.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] + vertex_base, tri[1] + vertex_base, tri[2] + vertex_base);
            writeln!(out, "f {}//{} {}//{} {}//{}", i0, i0, i1, i1, i2, i2)?;
        }
        writeln!(out)?;

        vertex_base += mesh.vertex_count() as u32;
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| Error::io(path, e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
