//! Whole-scene STL export.

use crate::float_types::Real;
use crate::io::IoError;
use crate::io::stl::{Facet, facets, write_ascii_facets};
use crate::scene::{Group, MeshNode};
use crate::traits::MeshOps;
use nalgebra::Matrix4;
use std::path::{Path, PathBuf};

/// File name offered for the exported model.
pub const EXPORT_FILE_NAME: &str = "trophy.stl";
/// Solid name written into the ASCII STL.
pub const SOLID_NAME: &str = "exported";

/// Facet count contributed by one exported mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub name: String,
    pub facets: usize,
}

/// A serialised STL model ready to be handed to a download or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct StlPayload {
    pub file_name: String,
    pub contents: String,
    /// One entry per exported mesh, trophy parts first
    pub groups: Vec<FacetGroup>,
}

impl StlPayload {
    /// Write `contents` to `dir/file_name`, returning the written path.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, IoError> {
        let dir = dir.as_ref();
        if dir.is_file() {
            return Err(IoError::MalformedPath(format!("{} is not a directory", dir.display())));
        }
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// World-space duplicates of every exported mesh, as `(node, world matrix)`.
///
/// Duplicates share geometry with the live nodes; nothing in the scene is touched.
fn export_group(trophy: &Group, text: Option<&MeshNode>) -> Vec<(MeshNode, Matrix4<Real>)> {
    let mut nodes: Vec<_> = trophy
        .world_children()
        .map(|(node, world)| (node.clone(), world))
        .collect();
    if let Some(text) = text {
        nodes.push((text.clone(), text.transform.matrix()));
    }
    nodes
}

fn world_facets(trophy: &Group, text: Option<&MeshNode>) -> Vec<(String, Vec<Facet>)> {
    export_group(trophy, text)
        .into_iter()
        .filter_map(|(node, world)| match node.geometry.get() {
            Some(geometry) => Some((node.name, facets(&geometry.transform(&world)))),
            None => {
                log::warn!("skipping {:?}: geometry already disposed", node.name);
                None
            },
        })
        .collect()
}

/// Serialise the trophy and the optional text mesh as a single ASCII STL solid.
pub fn export_scene(trophy: &Group, text: Option<&MeshNode>) -> StlPayload {
    let meshes = world_facets(trophy, text);

    let mut contents = format!("solid {SOLID_NAME}\n");
    for (_, facets) in &meshes {
        write_ascii_facets(&mut contents, facets);
    }
    contents.push_str(&format!("endsolid {SOLID_NAME}\n"));

    let groups: Vec<FacetGroup> = meshes
        .into_iter()
        .map(|(name, facets)| FacetGroup { name, facets: facets.len() })
        .collect();
    log::info!(
        "STL file exported successfully ({} meshes, {} facets)",
        groups.len(),
        groups.iter().map(|g| g.facets).sum::<usize>()
    );

    StlPayload {
        file_name: EXPORT_FILE_NAME.to_string(),
        contents,
        groups,
    }
}

/// Same content as [`export_scene`], encoded as binary STL.
#[cfg(feature = "stl-io")]
pub fn export_scene_binary(trophy: &Group, text: Option<&MeshNode>) -> Result<Vec<u8>, IoError> {
    let meshes = world_facets(trophy, text);
    crate::io::stl::facets_to_stl_binary(meshes.iter().flat_map(|(_, facets)| facets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trophy::build_trophy;

    #[test]
    fn trophy_alone_exports_five_groups() {
        let payload = export_scene(&build_trophy(), None);
        assert_eq!(payload.file_name, "trophy.stl");
        assert_eq!(payload.groups.len(), 5);
        assert!(payload.contents.starts_with("solid exported\n"));
        assert!(payload.contents.ends_with("endsolid exported\n"));
    }

    #[test]
    fn group_sizes_match_primitives() {
        let payload = export_scene(&build_trophy(), None);
        let sizes: Vec<_> = payload.groups.iter().map(|g| g.facets).collect();
        // 32 side quads as two triangles plus two 32-triangle caps
        assert_eq!(sizes[..3], [128, 128, 128]);
        // 16 x 32 quads
        assert_eq!(sizes[3..], [1024, 1024]);
    }

    #[test]
    fn disposed_parts_are_skipped() {
        let trophy = build_trophy();
        trophy.children[0].dispose();
        let payload = export_scene(&trophy, None);
        assert_eq!(payload.groups.len(), 4);
        assert_eq!(payload.groups[0].name, "stem");
    }

    #[test]
    fn vertices_are_in_world_space() {
        let payload = export_scene(&build_trophy(), None);
        let max_y = payload
            .contents
            .lines()
            .filter_map(|l| l.trim().strip_prefix("vertex "))
            .filter_map(|l| l.split_whitespace().nth(1)?.parse::<f64>().ok())
            .fold(f64::MIN, f64::max);
        // cup rim: 2.7 + 0.9
        assert!((max_y - 3.6).abs() < 1e-6);
    }
}
