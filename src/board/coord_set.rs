use std::ops::{BitAnd, BitOr};

use super::coord::Coord;

/// A set of coordinates stored as one bit per square, indexed by
/// `Coord::index`. Iteration yields coordinates in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct CoordSet(u64);

impl CoordSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, coord: Coord) {
        self.0 |= 1 << coord.index();
    }

    pub fn remove(&mut self, coord: Coord) {
        self.0 &= !(1 << coord.index());
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0 & (1 << coord.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Empties the set, returning what it held.
    pub fn take(&mut self) -> CoordSet {
        std::mem::take(self)
    }

    pub fn iter(&self) -> CoordSetIter {
        CoordSetIter(self.0)
    }
}

impl BitOr for CoordSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CoordSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

pub struct CoordSetIter(u64);

impl Iterator for CoordSetIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Coord::from_index(index))
    }
}

impl IntoIterator for CoordSet {
    type Item = Coord;
    type IntoIter = CoordSetIter;

    fn into_iter(self) -> CoordSetIter {
        self.iter()
    }
}

impl std::iter::FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CoordSet::EMPTY;
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}
