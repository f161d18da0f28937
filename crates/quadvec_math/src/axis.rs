//! Component axis enumeration

use std::fmt;

use crate::VectorError;

/// One of the four component slots of a 4D vector
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Component index of this axis (0 for X through 3 for W)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase component letter, as used in swizzle names
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::W => 'w',
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = VectorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or(VectorError::AxisOutOfRange { index })
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::W => "W",
        };
        f.write_str(name)
    }
}
