//! Landmark containers as handed over by a landmark detector.
//!
//! Landmark coordinates are expected to be *normalized image coordinates*: X points to the right,
//! Y points *down*, and both are roughly in range 0.0 to 1.0. Z is relative depth and is carried
//! along, but unused by the classifier.

type Position = [f32; 3];

/// An ordered list of landmarks belonging to one detected object.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: Box<[Position]>,
}

impl Landmarks {
    /// Creates a new [`Landmarks`] collection containing `len` preallocated landmarks.
    ///
    /// All landmarks will start with all coordinates at `0.0`.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![[0.0, 0.0, 0.0]; len].into_boxed_slice(),
        }
    }

    /// Creates a collection from 2D positions, setting every Z coordinate to `0.0`.
    pub fn from_xy(positions: impl IntoIterator<Item = [f32; 2]>) -> Self {
        positions.into_iter().map(|[x, y]| [x, y, 0.0]).collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Landmark> + Clone + '_ {
        self.positions.iter().map(|&pos| Landmark::new(pos))
    }

    /// Returns the landmark at `index`, or [`None`] if the collection is too short.
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.positions.get(index).map(|&pos| Landmark::new(pos))
    }

    /// Overwrites the landmark at `index`.
    ///
    /// # Panics
    ///
    /// This method panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        self.positions[index] = landmark.pos;
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl FromIterator<Position> for Landmarks {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// A landmark in 3D space.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Landmark {
    pos: [f32; 3],
}

impl Landmark {
    pub fn new(position: [f32; 3]) -> Self {
        Self { pos: position }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.pos[2]
    }
}
