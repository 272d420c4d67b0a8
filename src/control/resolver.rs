//! Drag resolution under cross, spacing, and fixed-offset policies.
//!
//! Everything here is a pure function of the current positions: valid
//! ranges are recomputed on every call, so back-to-back moves never see
//! stale bounds.

use super::config::SliderConfig;
use crate::mapper::Mapper;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Tolerance for spacing comparisons, in percent.
pub const EPSILON: f64 = 1e-9;

/// Movement policies with ranges already converted to percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    /// All handles shift by one shared delta.
    pub fixed: bool,

    /// Handles may pass their neighbours.
    pub enable_cross: bool,

    /// Minimum spacing between adjacent handles, in percent.
    pub min_range_gap: Option<f64>,

    /// Maximum spacing between adjacent handles, in percent.
    pub max_range_gap: Option<f64>,

    /// Only position 0 is valid.
    pub degenerate: bool,
}

impl Constraints {
    pub fn from_config(config: &SliderConfig, mapper: &Mapper) -> Self {
        let gap = mapper.gap();
        Self {
            fixed: config.fixed,
            enable_cross: config.enable_cross,
            min_range_gap: config.effective_min_range().map(|steps| steps * gap),
            max_range_gap: config.effective_max_range().map(|steps| steps * gap),
            degenerate: mapper.is_degenerate(),
        }
    }

    fn has_range(&self) -> bool {
        self.min_range_gap.is_some() || self.max_range_gap.is_some()
    }
}

/// The interval handle `index` may occupy given the current positions.
///
/// - degenerate domain: `[0, 0]`
/// - minimum range `g`: `[g·i, 100 − g·(N−1−i)]`, which leaves room for
///   every other handle to keep its spacing at the extremes
/// - crossing disabled: between the neighbours (`0` / `100` at the ends);
///   skipped in fixed mode, where a shared shift cannot reorder handles
/// - otherwise the whole axis
pub fn valid_range(positions: &[f64], index: usize, c: &Constraints) -> (f64, f64) {
    if c.degenerate {
        return (0.0, 0.0);
    }
    if let Some(gap) = c.min_range_gap {
        return spacing_bound(positions.len(), index, gap);
    }
    if !c.enable_cross && !c.fixed {
        let lo = match index {
            0 => 0.0,
            i => positions.get(i - 1).copied().unwrap_or(0.0),
        };
        let hi = positions.get(index + 1).copied().unwrap_or(100.0);
        return (lo, hi);
    }
    (0.0, 100.0)
}

/// `[g·i, 100 − g·(N−1−i)]`: room for every other handle to keep a
/// spacing of `g` at the ends of the axis.
fn spacing_bound(len: usize, index: usize, gap: f64) -> (f64, f64) {
    let after = len.saturating_sub(index + 1);
    (gap * index as f64, 100.0 - gap * after as f64)
}

/// Bound for a neighbour forced by a spacing walk.
///
/// Only the axis and the minimum-range bound apply. Neighbour bounds are
/// computed from the positions before the move, so they would hold a
/// pulled handle behind the mover's old position; the walk itself keeps
/// handles in order.
fn walk_range(len: usize, index: usize, c: &Constraints) -> (f64, f64) {
    match c.min_range_gap {
        Some(gap) => spacing_bound(len, index, gap),
        None => (0.0, 100.0),
    }
}

pub fn valid_ranges(positions: &[f64], c: &Constraints) -> Vec<(f64, f64)> {
    (0..positions.len())
        .map(|i| valid_range(positions, i, c))
        .collect()
}

/// Clamps `pos` into `range`; the flag is false when clamping occurred.
fn clamp(pos: f64, (lo, hi): (f64, f64)) -> (f64, bool) {
    if pos < lo {
        (lo, false)
    } else if pos > hi {
        (hi, false)
    } else {
        (pos, true)
    }
}

/// Resolves a request to move handle `index` to `target`.
///
/// Returns the new positions of all handles, or `None` when the request
/// resolves to no movement at all (including an out-of-bounds index or a
/// non-finite target). The moved handle lands exactly on its clamped
/// target unless a fixed-mode peer shortened the shared delta.
///
/// # Examples
///
/// ```
/// use u_slider::control::{resolve, Constraints};
///
/// let c = Constraints { fixed: true, enable_cross: true, ..Default::default() };
/// let next = resolve(&[20.0, 80.0], 0, 30.0, &c).unwrap();
/// assert_eq!(next, vec![30.0, 90.0]);
///
/// // Handle 1 can only move 20 more, so both move by 20.
/// let next = resolve(&[20.0, 80.0], 0, 60.0, &c).unwrap();
/// assert_eq!(next, vec![40.0, 100.0]);
/// ```
pub fn resolve(positions: &[f64], index: usize, target: f64, c: &Constraints) -> Option<Vec<f64>> {
    if index >= positions.len() || !target.is_finite() {
        return None;
    }
    let ranges = valid_ranges(positions, c);
    let (clamped, _) = clamp(target, ranges[index]);
    let delta = clamped - positions[index];
    if delta == 0.0 {
        return None;
    }

    let deltas: BTreeMap<usize, f64> = if c.fixed {
        let shared = fixed_delta(positions, index, delta, &ranges);
        (0..positions.len()).map(|i| (i, shared)).collect()
    } else if c.has_range() {
        range_deltas(positions, index, clamped, delta, c)
    } else {
        BTreeMap::from([(index, delta)])
    };

    if deltas.values().all(|d| *d == 0.0) {
        return None;
    }

    let mut next = positions.to_vec();
    for (&i, &d) in &deltas {
        next[i] += d;
    }
    if deltas.get(&index) == Some(&delta) {
        next[index] = clamped;
    }
    Some(next)
}

/// Shrinks `delta` until every handle stays inside its valid range.
fn fixed_delta(positions: &[f64], index: usize, delta: f64, ranges: &[(f64, f64)]) -> f64 {
    let mut delta = delta;
    for (i, &origin) in positions.iter().enumerate() {
        if i == index {
            continue;
        }
        let (last, in_range) = clamp(origin + delta, ranges[i]);
        if !in_range {
            delta = (last - origin).abs().min(delta.abs()).copysign(delta);
        }
    }
    delta
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Walks outward from the moved handle, pushing or pulling neighbours
/// until spacing bounds hold.
///
/// The minimum-range walk runs in the direction of motion, the
/// maximum-range walk against it.
fn range_deltas(
    positions: &[f64],
    index: usize,
    clamped: f64,
    delta: f64,
    c: &Constraints,
) -> BTreeMap<usize, f64> {
    let mut deltas = BTreeMap::from([(index, delta)]);
    let forward: isize = if delta > 0.0 { 1 } else { -1 };

    let walks = [
        (Bound::Min, c.min_range_gap, forward),
        (Bound::Max, c.max_range_gap, -forward),
    ];
    for (bound, gap, step) in walks {
        let Some(gap) = gap else {
            continue;
        };
        let dir = step as f64;
        let mut front = clamped;
        let mut i = index as isize + step;
        while let Some(&neighbour) = usize::try_from(i).ok().and_then(|j| positions.get(j)) {
            let j = i as usize;
            let spacing = (neighbour - front) * dir;
            let violated = match bound {
                Bound::Min => spacing < gap - EPSILON,
                Bound::Max => spacing > gap + EPSILON,
            };
            if !violated {
                break;
            }
            let (landed, _) = clamp(front + dir * gap, walk_range(positions.len(), j, c));
            merge(&mut deltas, j, landed - neighbour);
            front = landed;
            i += step;
        }
    }
    deltas
}

/// Records a neighbour's delta. When both walks reach the same handle the
/// smaller movement wins; on a tie the first recorded stays.
fn merge(deltas: &mut BTreeMap<usize, f64>, index: usize, delta: f64) {
    match deltas.entry(index) {
        Entry::Vacant(e) => {
            e.insert(delta);
        }
        Entry::Occupied(mut e) => {
            if delta.abs() < e.get().abs() {
                e.insert(delta);
            }
        }
    }
}
