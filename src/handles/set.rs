//! Handle positions and their ordering rules.

use crate::mapper::{Mapper, SliderValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read view of one handle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Handle {
    /// Stable index, fixed for the lifetime of the set.
    pub index: usize,
    /// Position along the axis, 0–100.
    pub position: f64,
    /// Value reported for this slot.
    pub value: SliderValue,
}

/// Fixed-size ordered collection of handle positions.
///
/// Values are never stored: they are derived from a *value basis*, which
/// is the stored positions themselves or, while an ordered set is being
/// dragged, a sorted copy of them. This keeps reported values low-to-high
/// even while raw positions are temporarily out of index order.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    positions: Vec<f64>,
    basis: Vec<f64>,
    order: bool,
}

impl HandleSet {
    /// Creates a settled set. When `order` is on, positions are sorted.
    pub fn new(positions: Vec<f64>, order: bool) -> Self {
        let mut set = Self {
            positions: Vec::new(),
            basis: Vec::new(),
            order,
        };
        set.set_positions(positions, false);
        set
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn order(&self) -> bool {
        self.order
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Positions the reported values are derived from.
    pub fn value_positions(&self) -> &[f64] {
        &self.basis
    }

    /// Whether positions are non-decreasing by index.
    pub fn is_sorted(&self) -> bool {
        self.positions.windows(2).all(|w| w[0] <= w[1])
    }

    /// Replaces all positions.
    ///
    /// - `order` off: stored as given, values follow the stored order.
    /// - `order` on, `dragging`: stored as given so each handle keeps its
    ///   identity during the gesture; values follow a sorted copy.
    /// - `order` on, settled: the sorted copy is stored.
    pub fn set_positions(&mut self, positions: Vec<f64>, dragging: bool) {
        if !self.order {
            self.basis = positions.clone();
            self.positions = positions;
        } else if dragging {
            self.basis = sorted(&positions);
            self.positions = positions;
        } else {
            self.positions = sorted(&positions);
            self.basis = self.positions.clone();
        }
    }

    /// Sorts stored positions ascending.
    pub fn sort_positions(&mut self) {
        self.positions = sorted(&self.positions);
        self.basis = self.positions.clone();
    }

    /// Reported values, one per slot.
    pub fn values(&self, mapper: &Mapper) -> Vec<SliderValue> {
        self.basis
            .iter()
            .map(|&pos| mapper.position_to_value(pos))
            .collect()
    }

    pub fn handles(&self, mapper: &Mapper) -> Vec<Handle> {
        self.positions
            .iter()
            .zip(self.values(mapper))
            .enumerate()
            .map(|(index, (&position, value))| Handle {
                index,
                position,
                value,
            })
            .collect()
    }

    /// Index of the handle closest to `pos`. Ties resolve to the lowest
    /// index; an empty set yields 0.
    pub fn nearest(&self, pos: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &p) in self.positions.iter().enumerate() {
            let dist = (p - pos).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}

/// Stable ascending sort.
fn sorted(positions: &[f64]) -> Vec<f64> {
    let mut out = positions.to_vec();
    out.sort_by(f64::total_cmp);
    out
}
