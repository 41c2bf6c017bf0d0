//! # Vertex Welder
//!
//! Independent per-face triangulation produces geometrically identical
//! boundary vertices as slightly different floating-point values. Welding
//! clusters near-coincident points across the whole mesh and replaces every
//! vertex with its cluster's centroid so shared edges reference literally
//! equal vertices.
//!
//! ## Clustering
//!
//! Points are visited in encounter order. Each joins the first cluster (in
//! creation order) holding any member closer than `threshold`, otherwise it
//! opens a new cluster. This is first-match, not nearest-match: a chain of
//! points each within `threshold` of its predecessor grows one cluster well
//! beyond `threshold` end to end, so the result is sensitive to input order.
//!
//! Candidate clusters are found through a uniform grid keyed on cells of
//! `2 * threshold`; the lowest matching cluster index wins, which reproduces
//! the quadratic scan exactly.
//!
//! ## Fixed point
//!
//! Passes repeat until one leaves the mesh unchanged, so welding an already
//! welded mesh is a no-op.

use std::collections::{HashMap, HashSet};

use config::constants::MAX_WELD_PASSES;
use tracing::{debug, warn};

use crate::face::Triangle3;
use crate::vector::Point3;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Summary of a welding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeldStats {
    /// Triangle vertices visited (three per triangle).
    pub vertices: usize,
    /// Distinct vertex values before welding.
    pub distinct_before: usize,
    /// Distinct vertex values after welding.
    pub distinct_after: usize,
    /// Clustering passes run, including the final unchanged one.
    pub passes: usize,
    /// False when the pass limit was hit before a pass left the mesh
    /// unchanged; welding the output again may then move vertices.
    pub settled: bool,
}

/// Welds vertices closer than `threshold` across all triangles.
///
/// A non-positive or non-finite threshold leaves the mesh unchanged.
///
/// Passes stop after `MAX_WELD_PASSES`; only a settled result is guaranteed
/// to be a fixed point. Use [`weld_with_stats`] to check
/// [`WeldStats::settled`].
///
/// # Examples
/// ```
/// use earcut3d::{weld, Point3};
///
/// let mesh = vec![
///     [Point3::ZERO, Point3::X, Point3::Y],
///     [Point3::new(1.0 + 1e-6, 0.0, 0.0), Point3::Y, Point3::Z],
/// ];
/// let welded = weld(&mesh, 0.01);
/// assert_eq!(welded[0][1], welded[1][0]);
/// assert_eq!(weld(&welded, 0.01), welded);
/// ```
pub fn weld(mesh: &[Triangle3], threshold: f64) -> Vec<Triangle3> {
    weld_with_stats(mesh, threshold).0
}

/// [`weld`] that also reports what it did.
pub fn weld_with_stats(mesh: &[Triangle3], threshold: f64) -> (Vec<Triangle3>, WeldStats) {
    weld_bounded(mesh, threshold, MAX_WELD_PASSES)
}

/// Repeats [`weld_pass`] until the mesh stops changing or `max_passes` is
/// reached.
pub(crate) fn weld_bounded(mesh: &[Triangle3], threshold: f64, max_passes: usize) -> (Vec<Triangle3>, WeldStats) {
    let mut stats = WeldStats {
        vertices: mesh.len() * 3,
        distinct_before: count_distinct(mesh),
        ..WeldStats::default()
    };

    if !(threshold.is_finite() && threshold > 0.0) {
        debug!(threshold, "weld threshold disables welding");
        stats.distinct_after = stats.distinct_before;
        stats.settled = true;
        return (mesh.to_vec(), stats);
    }

    let mut current = mesh.to_vec();
    loop {
        let next = weld_pass(&current, threshold);
        stats.passes += 1;
        if next == current {
            stats.settled = true;
            break;
        }
        current = next;
        if stats.passes >= max_passes {
            warn!(passes = stats.passes, "welding did not settle; returning last pass");
            break;
        }
    }

    stats.distinct_after = count_distinct(&current);
    debug!(
        vertices = stats.vertices,
        before = stats.distinct_before,
        after = stats.distinct_after,
        passes = stats.passes,
        settled = stats.settled,
        "welded mesh"
    );
    (current, stats)
}

// =============================================================================
// SINGLE PASS
// =============================================================================

/// One greedy clustering pass followed by centroid replacement.
///
/// Replacement is keyed on the exact vertex value: a value that landed in
/// several clusters takes the centroid of the last of them.
pub(crate) fn weld_pass(mesh: &[Triangle3], threshold: f64) -> Vec<Triangle3> {
    let mut arena = ClusterArena::new(threshold);
    let mut owner: HashMap<PointKey, usize> = HashMap::new();

    for point in mesh.iter().flatten() {
        let cluster = arena.insert(*point);
        owner
            .entry(PointKey::from(*point))
            .and_modify(|c| *c = (*c).max(cluster))
            .or_insert(cluster);
    }

    let centroids = arena.centroids();
    let replace = |p: &Point3| match owner.get(&PointKey::from(*p)) {
        Some(&cluster) => centroids[cluster],
        None => *p,
    };

    mesh.iter()
        .map(|tri| [replace(&tri[0]), replace(&tri[1]), replace(&tri[2])])
        .collect()
}

// =============================================================================
// CLUSTER ARENA
// =============================================================================

/// Clusters indexed by creation order, each owning its members.
struct ClusterArena {
    threshold: f64,
    cell_size: f64,
    clusters: Vec<Vec<Point3>>,
    /// Grid cell → (cluster, member) entries whose member lies in the cell.
    grid: HashMap<(i64, i64, i64), Vec<(usize, Point3)>>,
}

impl ClusterArena {
    fn new(threshold: f64) -> Self {
        Self {
            threshold,
            cell_size: threshold * 2.0,
            clusters: Vec::new(),
            grid: HashMap::new(),
        }
    }

    fn cell(&self, p: Point3) -> (i64, i64, i64) {
        let c = (p / self.cell_size).floor();
        (c.x as i64, c.y as i64, c.z as i64)
    }

    /// Lowest-index cluster with a member closer than `threshold` to `p`.
    fn first_match(&self, p: Point3) -> Option<usize> {
        let (cx, cy, cz) = self.cell(p);
        let mut best: Option<usize> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let key = (cx.saturating_add(dx), cy.saturating_add(dy), cz.saturating_add(dz));
                    let Some(entries) = self.grid.get(&key) else {
                        continue;
                    };
                    for &(cluster, member) in entries {
                        if best.map_or(true, |b| cluster < b) && p.distance(member) < self.threshold {
                            best = Some(cluster);
                        }
                    }
                }
            }
        }

        best
    }

    /// Adds `p` to its first matching cluster (or a new one) and returns the
    /// cluster index.
    fn insert(&mut self, p: Point3) -> usize {
        let cluster = match self.first_match(p) {
            Some(existing) => existing,
            None => {
                self.clusters.push(Vec::new());
                self.clusters.len() - 1
            }
        };
        self.clusters[cluster].push(p);
        let cell = self.cell(p);
        self.grid.entry(cell).or_default().push((cluster, p));
        cluster
    }

    /// Arithmetic mean of each cluster. Clusters whose members are all the
    /// same value keep that exact value.
    fn centroids(&self) -> Vec<Point3> {
        self.clusters
            .iter()
            .map(|members| {
                let first = members[0];
                if members.iter().all(|m| PointKey::from(*m) == PointKey::from(first)) {
                    return first;
                }
                let sum = members.iter().fold(Point3::ZERO, |acc, m| acc + *m);
                sum / members.len() as f64
            })
            .collect()
    }
}

// =============================================================================
// EXACT KEYS
// =============================================================================

/// Bit-exact point key; `-0.0` folds into `+0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PointKey([u64; 3]);

impl From<Point3> for PointKey {
    fn from(p: Point3) -> Self {
        Self([(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()])
    }
}

fn count_distinct(mesh: &[Triangle3]) -> usize {
    mesh.iter()
        .flatten()
        .map(|p| PointKey::from(*p))
        .collect::<HashSet<_>>()
        .len()
}
