// Finds the particle pairs close enough to be linked by a line.
//
// `pairwise` checks all n(n-1)/2 pairs. `SpatialGrid` buckets particles
// into square cells as wide as the link distance, so only the 3x3
// neighbourhood of a cell can hold partners. Both return the same pairs in
// the same ascending (a, b) order, so the painted frame is identical.

use crate::particle::Particle;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    /// Lower particle index.
    pub a: usize,
    /// Higher particle index.
    pub b: usize,
    pub distance: f64,
}

fn usable(max_distance: f64) -> bool {
    max_distance.is_finite() && max_distance > 0.0
}

pub fn pairwise(particles: &[Particle], max_distance: f64) -> Vec<Connection> {
    let mut connections = Vec::new();
    if !usable(max_distance) {
        return connections;
    }
    for a in 0..particles.len() {
        for b in (a + 1)..particles.len() {
            let distance = particles[a].distance_to(&particles[b]);
            if distance < max_distance {
                connections.push(Connection { a, b, distance });
            }
        }
    }
    connections
}

type Cell = (i64, i64);

pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<Cell, Vec<usize>>,
}

impl SpatialGrid {
    pub fn build(particles: &[Particle], cell_size: f64) -> SpatialGrid {
        let mut cells: HashMap<Cell, Vec<usize>> = HashMap::new();
        for (i, p) in particles.iter().enumerate() {
            cells.entry(cell_of(p, cell_size)).or_default().push(i);
        }
        SpatialGrid { cell_size, cells }
    }

    #[cfg(test)]
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn connections(particles: &[Particle], max_distance: f64) -> Vec<Connection> {
        if !usable(max_distance) {
            return Vec::new();
        }
        let grid = SpatialGrid::build(particles, max_distance);
        let mut connections = Vec::new();
        for (a, p) in particles.iter().enumerate() {
            let (cx, cy) = cell_of(p, grid.cell_size);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let neighbours = match grid.cells.get(&(cx + dx, cy + dy)) {
                        Some(indices) => indices,
                        None => continue,
                    };
                    for &b in neighbours {
                        if b <= a {
                            continue;
                        }
                        let distance = p.distance_to(&particles[b]);
                        if distance < max_distance {
                            connections.push(Connection { a, b, distance });
                        }
                    }
                }
            }
        }
        connections.sort_by(|l, r| (l.a, l.b).cmp(&(r.a, r.b)));
        connections
    }
}

fn cell_of(p: &Particle, cell_size: f64) -> Cell {
    (
        (p.x() / cell_size).floor() as i64,
        (p.y() / cell_size).floor() as i64,
    )
}
