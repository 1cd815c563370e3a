use super::delaunay::TriMesh;
use crate::error::TriangulationError;
use nalgebra::Point2;

impl TriMesh {
    /// Flood-fill from the super triangle and from every hole marker without
    /// crossing constrained edges. Returns a per-triangle "removed" flag.
    pub fn carve(&self, holes: &[Point2<f64>]) -> Result<Vec<bool>, TriangulationError> {
        let mut eaten = vec![false; self.tris.len()];
        let mut stack: Vec<usize> = self
            .tris
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.alive && tri.v.iter().any(|&v| self.is_super(v)))
            .map(|(t, _)| t)
            .collect();
        for hole in holes {
            stack.push(self.locate(hole)?);
        }

        while let Some(t) = stack.pop() {
            if eaten[t] {
                continue;
            }
            eaten[t] = true;
            let tri = &self.tris[t];
            for i in 0..3 {
                let (a, b) = tri.edge(i);
                if self.is_constrained(a, b) {
                    continue;
                }
                if let Some(nb) = tri.n[i] {
                    if !eaten[nb] {
                        stack.push(nb);
                    }
                }
            }
        }
        Ok(eaten)
    }
}
