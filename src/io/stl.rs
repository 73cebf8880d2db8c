use crate::float_types::{EPSILON, Real};
use crate::mesh::vertex::Vertex;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};

/// One STL facet: a triangle with its face normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub normal: Vector3<Real>,
    pub vertices: [Point3<Real>; 3],
}

impl Facet {
    /// Facet of a triangle, with the normal recomputed from the positions as the
    /// normalised `(b - a) × (c - a)`. Degenerate triangles get a zero normal.
    pub fn from_triangle(tri: &[Vertex; 3]) -> Self {
        let [a, b, c] = [tri[0].pos, tri[1].pos, tri[2].pos];
        let n = (b - a).cross(&(c - a));
        let normal = n.try_normalize(EPSILON).unwrap_or_else(Vector3::zeros);
        Facet { normal, vertices: [a, b, c] }
    }
}

/// Collect the facets of any triangulated shape.
pub fn facets<T: Triangulated3D>(shape: &T) -> Vec<Facet> {
    let mut out = Vec::with_capacity(shape.triangle_count());
    shape.visit_triangles(|tri| out.push(Facet::from_triangle(&tri)));
    out
}

/// Append one `facet` ... `endfacet` block per facet to `out`.
pub fn write_ascii_facets<'a, I>(out: &mut String, facets: I)
where
    I: IntoIterator<Item = &'a Facet>,
{
    for facet in facets {
        let n = facet.normal;
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in &facet.vertices {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
}

/// Export to ASCII STL
///
/// Convert a triangulated shape to an **ASCII STL** string with the given solid `name`.
///
/// ```rust
/// # use trophyrs::mesh::Mesh;
/// let mesh = Mesh::frustum(1.0, 1.0, 2.0, 8);
/// let text = trophyrs::io::stl::to_stl_ascii(&mesh, "pillar");
/// assert!(text.starts_with("solid pillar\n"));
/// assert!(text.ends_with("endsolid pillar\n"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));
    write_ascii_facets(&mut out, &facets(shape));
    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Encode facets as **binary STL** bytes.
#[cfg(feature = "stl-io")]
pub fn facets_to_stl_binary<'a, I>(facets: I) -> Result<Vec<u8>, super::IoError>
where
    I: IntoIterator<Item = &'a Facet>,
{
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    #[allow(clippy::unnecessary_cast)]
    let triangles: Vec<Triangle> = facets
        .into_iter()
        .map(|f| Triangle {
            normal: Normal::new([f.normal.x as f32, f.normal.y as f32, f.normal.z as f32]),
            vertices: f.vertices.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
        })
        .collect();

    let mut cursor = std::io::Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The binary format carries no solid name.
#[cfg(feature = "stl-io")]
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, super::IoError> {
    facets_to_stl_binary(&facets(shape))
}

impl crate::mesh::Mesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    #[cfg(feature = "stl-io")]
    pub fn to_stl_binary(&self) -> Result<Vec<u8>, super::IoError> {
        self::to_stl_binary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    #[test]
    fn facet_normal_follows_winding() {
        let tri = [
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::x()),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::x()),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::x()),
        ];
        assert_eq!(Facet::from_triangle(&tri).normal, Vector3::z());
    }

    #[test]
    fn degenerate_facet_has_zero_normal() {
        let p = Vertex::new(Point3::new(1.0, 1.0, 1.0), Vector3::y());
        let tri = [p.clone(), p.clone(), p];
        assert_eq!(Facet::from_triangle(&tri).normal, Vector3::zeros());
    }

    #[test]
    fn ascii_blocks_balance() {
        let mesh = Mesh::frustum(1.0, 1.0, 1.0, 6);
        let text = mesh.to_stl_ascii("c");
        let facets = text.matches("facet normal").count();
        assert_eq!(facets, mesh.triangle_count());
        assert_eq!(text.matches("outer loop").count(), facets);
        assert_eq!(text.matches("      vertex ").count(), facets * 3);
        assert_eq!(text.matches("endfacet").count(), facets);
    }

    #[cfg(feature = "stl-io")]
    #[test]
    fn binary_has_header_and_count() {
        let mesh = Mesh::frustum(1.0, 1.0, 1.0, 6);
        let bytes = mesh.to_stl_binary().unwrap();
        let count = mesh.triangle_count();
        assert_eq!(bytes.len(), 84 + 50 * count);
        let header_count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(header_count as usize, count);
    }
}
