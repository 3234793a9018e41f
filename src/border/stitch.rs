//! Chaining exposed edges into continuous border paths

use std::collections::VecDeque;
use std::fmt::Write;

use ahash::AHashMap;
use geo::{Area, Centroid, LineString, Polygon};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::border::BorderEdge;
use crate::core::types::{Faction, ScreenPoint};
use crate::grid::{LatticePoint, Projection};

/// A stitched border outline for one faction
///
/// Closed paths store the starting point again at the end, so consecutive
/// point pairs cover every edge of the loop including the closing one.
/// Open chains keep distinct endpoints and `closed = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderPath {
    pub owner: Faction,
    pub points: Vec<LatticePoint>,
    pub closed: bool,
}

impl BorderPath {
    /// Number of edges covered by this path
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Consecutive point pairs, one per covered edge
    pub fn edges(&self) -> impl Iterator<Item = (LatticePoint, LatticePoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Path points in screen coordinates
    pub fn screen_points(&self, projection: &Projection) -> Vec<ScreenPoint> {
        self.points.iter().map(|&p| projection.to_screen(p)).collect()
    }

    /// SVG path data: M/L commands, plus Z when closed
    pub fn svg_path_data(&self, projection: &Projection) -> String {
        // Z implies the closing edge, so the repeated last point is skipped
        let points = if self.closed {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points[..]
        };
        let mut data = String::new();
        for (i, &p) in points.iter().enumerate() {
            let s = projection.to_screen(p);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(data, "{}{} {} ", cmd, s.x, s.y);
        }
        if self.closed {
            data.push('Z');
        }
        data.trim_end().to_string()
    }

    /// Enclosed screen-space area; zero for open chains
    pub fn area(&self, projection: &Projection) -> f64 {
        match self.ring(projection) {
            Some(poly) => poly.unsigned_area(),
            None => 0.0,
        }
    }

    /// Interior point for a region label; None for open chains
    pub fn label_anchor(&self, projection: &Projection) -> Option<ScreenPoint> {
        let centroid = self.ring(projection)?.centroid()?;
        Some(ScreenPoint::new(centroid.x() as f32, centroid.y() as f32))
    }

    fn ring(&self, projection: &Projection) -> Option<Polygon<f64>> {
        if !self.closed {
            return None;
        }
        let exterior: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&p| {
                let s = projection.to_screen(p);
                (s.x as f64, s.y as f64)
            })
            .collect();
        Some(Polygon::new(LineString::from(exterior), vec![]))
    }
}

/// Stitch edges into per-faction border paths
///
/// Every edge is used exactly once. Chains grow from the lowest-index
/// unused edge, extending at the tail first and the head otherwise, and
/// stop as soon as their endpoints meet. Chains that cannot close are
/// still emitted as open polylines, never dropped.
pub fn stitch_paths(edges: Vec<BorderEdge>) -> Vec<BorderPath> {
    let mut paths = Vec::new();
    for faction in Faction::ALL {
        let owned: Vec<BorderEdge> = edges.iter().filter(|e| e.owner == faction).copied().collect();
        if owned.is_empty() {
            continue;
        }
        stitch_faction(faction, &owned, &mut paths);
    }
    paths
}

fn stitch_faction(faction: Faction, edges: &[BorderEdge], out: &mut Vec<BorderPath>) {
    // Both endpoints of every edge, in emission order
    let mut incident: AHashMap<LatticePoint, Vec<usize>> = AHashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        incident.entry(edge.from).or_default().push(i);
        incident.entry(edge.to).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = 0;
    let mut open_chains = 0;
    for seed in 0..edges.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut points = VecDeque::new();
        points.push_back(edges[seed].from);
        points.push_back(edges[seed].to);
        let mut head = edges[seed].from;
        let mut tail = edges[seed].to;

        while head != tail {
            if let Some(i) = take_incident(&incident, &mut used, tail) {
                tail = far_end(&edges[i], tail);
                points.push_back(tail);
            } else if let Some(i) = take_incident(&incident, &mut used, head) {
                head = far_end(&edges[i], head);
                points.push_front(head);
            } else {
                break;
            }
        }

        let closed = head == tail;
        if closed {
            loops += 1;
        } else {
            open_chains += 1;
        }
        out.push(BorderPath {
            owner: faction,
            points: points.into_iter().collect(),
            closed,
        });
    }

    if open_chains > 0 {
        warn!(
            "Stitched {} edges for {} into {} loop(s) and {} open chain(s)",
            edges.len(),
            faction.name(),
            loops,
            open_chains
        );
    } else {
        debug!(
            "Stitched {} edges for {} into {} loop(s)",
            edges.len(),
            faction.name(),
            loops
        );
    }
}

/// Lowest-index unused edge incident to the point, marked used on return
fn take_incident(
    incident: &AHashMap<LatticePoint, Vec<usize>>,
    used: &mut [bool],
    point: LatticePoint,
) -> Option<usize> {
    for &i in incident.get(&point)? {
        if !used[i] {
            used[i] = true;
            return Some(i);
        }
    }
    None
}

/// The endpoint of the edge that is not `near`
fn far_end(edge: &BorderEdge, near: LatticePoint) -> LatticePoint {
    if edge.from == near {
        edge.to
    } else {
        edge.from
    }
}
