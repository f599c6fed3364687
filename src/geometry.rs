//! Coordinate types, normalization and orientation generation.
//!
//! A 2D piece has up to 8 orientations (the dihedral group of the square:
//! 4 quarter turns, with and without a mirror). A 3D piece is pushed through
//! 4x4x4 quarter turns about the three axes combined with the 8 axis-flip
//! masks, 512 raw images that collapse to at most 48 distinct shapes.
//!
//! Every orientation is normalized (minimum on each axis is 0) and sorted in
//! board scan order, so its first coordinate is the cell the search engine
//! anchors on.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

/// A cell offset on a 2D board: `(row, col)`.
pub type Coord2 = (i32, i32);

/// A cell offset in a pyramid: `(layer, row, col)`.
pub type Coord3 = (i32, i32, i32);

/// A normalized, scan-order sorted coordinate list.
pub type Orientation<C> = Vec<C>;

/// Largest absolute offset a piece coordinate may carry. Every symmetry map
/// and normalization stays inside `i32` for coordinates within this bound.
pub const COORD_LIMIT: i32 = 1 << 24;

/// Integer coordinates the placement engines can translate and orient.
///
/// The derived `Ord` on tuples is the board scan order: row-major in 2D,
/// layer then row then column in 3D.
pub trait Coordinate: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Component-wise sum, `None` on overflow.
    fn checked_offset(self, by: Self) -> Option<Self>;

    /// Whether every component lies within `-COORD_LIMIT..=COORD_LIMIT`.
    fn within_limit(self) -> bool;

    /// Component-wise difference `self - origin`.
    fn relative_to(self, origin: Self) -> Self;

    /// Component-wise minimum.
    fn component_min(self, other: Self) -> Self;

    /// Every raw image of `coords` under the symmetry group, unnormalized and
    /// possibly repeated.
    fn symmetry_images(coords: &[Self]) -> Vec<Vec<Self>>;
}

/// Quarter turn in the plane: `(row, col) -> (col, -row)`.
const ROTATE_2D: fn(Coord2) -> Coord2 = |(r, c)| (c, -r);

/// Mirror across the vertical axis.
const FLIP_2D: fn(Coord2) -> Coord2 = |(r, c)| (r, -c);

impl Coordinate for Coord2 {
    #[inline]
    fn checked_offset(self, by: Self) -> Option<Self> {
        Some((self.0.checked_add(by.0)?, self.1.checked_add(by.1)?))
    }

    #[inline]
    fn within_limit(self) -> bool {
        [self.0, self.1]
            .iter()
            .all(|v| (-COORD_LIMIT..=COORD_LIMIT).contains(v))
    }

    #[inline]
    fn relative_to(self, origin: Self) -> Self {
        (self.0 - origin.0, self.1 - origin.1)
    }

    #[inline]
    fn component_min(self, other: Self) -> Self {
        (self.0.min(other.0), self.1.min(other.1))
    }

    fn symmetry_images(coords: &[Self]) -> Vec<Vec<Self>> {
        let mut images = Vec::with_capacity(8);
        for mirrored in [false, true] {
            let mut current: Vec<Coord2> = if mirrored {
                coords.iter().map(|&p| FLIP_2D(p)).collect()
            } else {
                coords.to_vec()
            };
            for _ in 0..4 {
                let next = current.iter().map(|&p| ROTATE_2D(p)).collect();
                images.push(std::mem::replace(&mut current, next));
            }
        }
        images
    }
}

/// Quarter turns about the layer, row and column axes respectively.
pub const AXIS_ROTATIONS: [fn(Coord3) -> Coord3; 3] = [
    |(l, r, c)| (l, c, -r),
    |(l, r, c)| (-c, r, l),
    |(l, r, c)| (r, -l, c),
];

/// Negates the axes selected by the low three bits of `mask`.
#[inline]
fn flip_axes((l, r, c): Coord3, mask: u8) -> Coord3 {
    let sign = |bit: u8| if mask & bit != 0 { -1 } else { 1 };
    (l * sign(1), r * sign(2), c * sign(4))
}

fn turn(coords: &[Coord3], rotate: fn(Coord3) -> Coord3) -> Vec<Coord3> {
    coords.iter().map(|&p| rotate(p)).collect()
}

impl Coordinate for Coord3 {
    #[inline]
    fn checked_offset(self, by: Self) -> Option<Self> {
        Some((
            self.0.checked_add(by.0)?,
            self.1.checked_add(by.1)?,
            self.2.checked_add(by.2)?,
        ))
    }

    #[inline]
    fn within_limit(self) -> bool {
        [self.0, self.1, self.2]
            .iter()
            .all(|v| (-COORD_LIMIT..=COORD_LIMIT).contains(v))
    }

    #[inline]
    fn relative_to(self, origin: Self) -> Self {
        (self.0 - origin.0, self.1 - origin.1, self.2 - origin.2)
    }

    #[inline]
    fn component_min(self, other: Self) -> Self {
        (
            self.0.min(other.0),
            self.1.min(other.1),
            self.2.min(other.2),
        )
    }

    fn symmetry_images(coords: &[Self]) -> Vec<Vec<Self>> {
        let mut images = Vec::with_capacity(4 * 4 * 4 * 8);
        let mut about_layer = coords.to_vec();
        for _ in 0..4 {
            let mut about_row = about_layer.clone();
            for _ in 0..4 {
                let mut about_col = about_row.clone();
                for _ in 0..4 {
                    for mask in 0..8 {
                        images.push(about_col.iter().map(|&p| flip_axes(p, mask)).collect());
                    }
                    about_col = turn(&about_col, AXIS_ROTATIONS[2]);
                }
                about_row = turn(&about_row, AXIS_ROTATIONS[1]);
            }
            about_layer = turn(&about_layer, AXIS_ROTATIONS[0]);
        }
        images
    }
}

/// Translates coordinates so the minimum on every axis is zero, then sorts
/// them in scan order.
///
/// Two shapes that differ only by translation normalize to the same list.
pub fn normalize<C: Coordinate>(coords: &[C]) -> Vec<C> {
    let Some(min) = coords.iter().copied().reduce(C::component_min) else {
        return Vec::new();
    };
    let mut normalized: Vec<C> = coords.iter().map(|&p| p.relative_to(min)).collect();
    normalized.sort_unstable();
    normalized
}

/// Generates all unique orientations of a piece.
///
/// Results keep the order in which each distinct shape was first produced.
/// A piece with any coordinate beyond [`COORD_LIMIT`] fits no board and has
/// no orientations.
pub fn orientations<C: Coordinate>(coords: &[C]) -> Vec<Orientation<C>> {
    if !coords.iter().all(|&p| p.within_limit()) {
        return Vec::new();
    }
    let mut seen: FxHashSet<Vec<C>> = FxHashSet::default();
    let mut unique = Vec::new();

    for image in C::symmetry_images(coords) {
        let normalized = normalize(&image);
        // symmetric pieces produce the same shape many times over
        if seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }

    unique
}

/// Memoized orientation lists keyed by a piece's raw coordinates.
///
/// Owned by a single solver so its contents never outlive one solve.
#[derive(Debug, Default)]
pub struct OrientationCache<C> {
    entries: FxHashMap<Vec<C>, Arc<[Orientation<C>]>>,
}

impl<C: Coordinate> OrientationCache<C> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Returns the orientations of `coords`, computing them on first use.
    pub fn get(&mut self, coords: &[C]) -> Arc<[Orientation<C>]> {
        if let Some(hit) = self.entries.get(coords) {
            return Arc::clone(hit);
        }
        let computed: Arc<[Orientation<C>]> = orientations(coords).into();
        self.entries.insert(coords.to_vec(), Arc::clone(&computed));
        computed
    }

    /// Number of distinct raw shapes cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
