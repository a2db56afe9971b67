//! Planar graph assembly and face extraction.
//!
//! The polygon boundary plus the sweep's diagonals form an undirected
//! planar graph. Walking that graph greedily by angular order recovers
//! its bounded faces without ever building half-edge twins: at each step
//! the walk leaves along the next neighbor after the incoming edge's
//! reverse direction, so every face is traced exactly once and every
//! directed edge is consumed exactly once.

use crate::polygon::Polygon;
use crate::primitives::{Coord, Edge, Point, VertexId};
use std::collections::HashMap;

/// Adjacency entry: a neighbor id with the cached angle of the segment
/// from the pivot vertex to that neighbor.
type Neighbor = (f64, VertexId);

/// An undirected planar graph over a polygon's vertices, with each
/// vertex's neighbor list kept sorted by descending angle around it.
///
/// The angular comparator is parameterized by the pivot vertex (the angle
/// is cached per entry at insertion); there is no shared mutable "current
/// base" between lookups.
#[derive(Debug)]
pub struct PlanarGraph<C> {
    points: HashMap<VertexId, Point<C>>,
    adjacency: HashMap<VertexId, Vec<Neighbor>>,
    /// Seed order for face walks: the polygon's own vertex order.
    seeds: Vec<VertexId>,
    /// Vertex count of the input polygon, identifying the outer face.
    boundary_len: usize,
    /// Directed edges inserted; the extraction must consume all of them.
    directed_edges: usize,
}

impl<C: Coord> PlanarGraph<C> {
    /// Builds the graph from a polygon boundary and a set of diagonals.
    ///
    /// Every boundary edge and every diagonal is inserted in both
    /// directions.
    pub fn new(polygon: &Polygon<C>, diagonals: &[Edge]) -> Self {
        let verts = polygon.vertices();
        let n = verts.len();

        let mut graph = Self {
            points: verts.iter().map(|v| (v.id, *v)).collect(),
            adjacency: verts.iter().map(|v| (v.id, Vec::new())).collect(),
            seeds: verts.iter().map(|v| v.id).collect(),
            boundary_len: n,
            directed_edges: 0,
        };

        for i in 0..n {
            let a = verts[i].id;
            let b = verts[(i + 1) % n].id;
            graph.link(a, b);
            graph.link(b, a);
        }
        for d in diagonals {
            graph.link(d.from, d.to);
            graph.link(d.to, d.from);
        }

        graph
    }

    /// Inserts the directed edge `from -> to` into `from`'s neighbor
    /// list, keeping the list sorted by descending angle around `from`.
    fn link(&mut self, from: VertexId, to: VertexId) {
        let angle = (self.points[&to] - self.points[&from]).full_angle();
        let list = self
            .adjacency
            .get_mut(&from)
            .expect("edge endpoint not in universe");
        let idx = list.partition_point(|&(a, _)| a > angle);
        list.insert(idx, (angle, to));
        self.directed_edges += 1;
    }

    /// Consumes and returns the neighbor of `at` that follows the
    /// direction back towards `incoming_from` in descending angular
    /// order, wrapping to the largest angle. Returns `None` when `at`
    /// has no neighbors left.
    fn take_next(&mut self, at: VertexId, incoming_from: VertexId) -> Option<VertexId> {
        let back_angle = if incoming_from == at {
            // Fresh walk: no incoming direction, treat it as angle 0.
            0.0
        } else {
            (self.points[&incoming_from] - self.points[&at]).full_angle()
        };

        let list = self.adjacency.get_mut(&at)?;
        if list.is_empty() {
            return None;
        }
        // Entries with angle >= back_angle form a prefix; the reverse of
        // the incoming edge compares equal and is skipped, so the walk
        // only doubles back when nothing else remains.
        let mut idx = list.partition_point(|&(a, _)| a >= back_angle);
        if idx == list.len() {
            idx = 0;
        }
        Some(list.remove(idx).1)
    }

    /// Walks every remaining edge into closed faces and returns the
    /// bounded ones as counter-clockwise polygons.
    ///
    /// Exactly one recovered face traces the full input boundary; it is
    /// the unbounded outer face and is dropped.
    pub fn extract_faces(self) -> Vec<Polygon<C>> {
        self.extract_faces_counted().0
    }

    /// As [`extract_faces`](Self::extract_faces), also returning the
    /// number of directed edges consumed, which must equal twice the
    /// boundary-plus-diagonal count for well-formed input.
    pub(crate) fn extract_faces_counted(mut self) -> (Vec<Polygon<C>>, usize) {
        let mut cycles: Vec<Vec<VertexId>> = Vec::new();
        let mut consumed = 0usize;

        for seed in self.seeds.clone() {
            while !self.adjacency[&seed].is_empty() {
                self.walk(seed, &mut cycles, &mut consumed);
            }
        }

        debug_assert_eq!(consumed, self.directed_edges, "unconsumed directed edges");

        // The first cycle matching the input's vertex count is the outer
        // boundary; everything else is a bounded face.
        let mut outer_seen = false;
        let mut faces = Vec::with_capacity(cycles.len().saturating_sub(1));
        for cycle in cycles {
            if !outer_seen && cycle.len() == self.boundary_len {
                outer_seen = true;
                continue;
            }
            let vertices = cycle.iter().map(|id| self.points[id]).collect();
            let mut face = Polygon::from_vertices_unchecked(vertices);
            face.ensure_ccw();
            faces.push(face);
        }

        (faces, consumed)
    }

    /// One angular walk from `seed`, emitting a closed cycle every time
    /// the walk returns to the seed, until the seed runs out of
    /// neighbors.
    fn walk(&mut self, seed: VertexId, cycles: &mut Vec<Vec<VertexId>>, consumed: &mut usize) {
        let mut path = vec![seed];
        let mut prev = seed;
        let mut cur = seed;

        while let Some(next) = self.take_next(cur, prev) {
            *consumed += 1;
            prev = cur;
            cur = next;
            if cur == seed {
                cycles.push(std::mem::replace(&mut path, vec![seed]));
            } else {
                path.push(cur);
            }
        }
        // A leftover partial path here means the graph was inconsistent;
        // for boundary + non-crossing diagonals it is always just the
        // seed itself.
        debug_assert_eq!(path.len(), 1);
    }
}
