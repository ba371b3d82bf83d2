use enum_map::Enum;
use rand::Rng;
use ratatui::layout::{Flex, Layout, Position, Rect, Size};

/// The dimensions of a wraparound playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    #[cfg(test)]
    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Pick a position uniformly at random from anywhere on the field
    pub(crate) fn random_position<R: Rng>(self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(0..self.width),
            y: rng.random_range(0..self.height),
        }
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Bounds {
        Bounds {
            width: size.width,
            height: size.height,
        }
    }
}

/// Return a rectangle of the given size centered within `area`.  If `area` is
/// too small, the result is clipped to it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) trait EnumExt: Enum {
    /// Iterate over all variants in declaration order
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Pick a variant uniformly at random
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_usize(rng.random_range(0..Self::LENGTH))
    }
}

impl<T: Enum> EnumExt for T {}
