//! Core block value types.

/// The kinds of logic component a cell can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockKind {
    Wire,
    Inverter,
    AndGate,
    OrGate,
    XorGate,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Wire,
        BlockKind::Inverter,
        BlockKind::AndGate,
        BlockKind::OrGate,
        BlockKind::XorGate,
    ];

    /// Catalog name; also the primitive name the mesh builder looks up.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Wire => "wire",
            BlockKind::Inverter => "inverter",
            BlockKind::AndGate => "and_gate",
            BlockKind::OrGate => "or_gate",
            BlockKind::XorGate => "xor_gate",
        }
    }

    pub fn from_name(s: &str) -> Option<BlockKind> {
        BlockKind::ALL.into_iter().find(|k| k.name() == s)
    }
}

/// Axis-aligned facing. The discriminant doubles as the variant index
/// into a primitive's orientation table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Direction {
        match i {
            0 => Direction::PosX,
            1 => Direction::NegX,
            2 => Direction::PosY,
            3 => Direction::NegY,
            4 => Direction::PosZ,
            5 => Direction::NegZ,
            _ => Direction::PosY,
        }
    }

    /// Integer grid delta when stepping one cell along this facing.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::PosX => (1, 0, 0),
            Direction::NegX => (-1, 0, 0),
            Direction::PosY => (0, 1, 0),
            Direction::NegY => (0, -1, 0),
            Direction::PosZ => (0, 0, 1),
            Direction::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::PosY
    }
}

/// One placed block. The grid coordinate is the registry key, not a field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub facing: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for k in BlockKind::ALL {
            assert_eq!(BlockKind::from_name(k.name()), Some(k));
        }
        assert_eq!(BlockKind::from_name("piston"), None);
    }

    #[test]
    fn direction_indices_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index()), d);
        }
        assert_eq!(Direction::from_index(99), Direction::PosY);
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy, dz) = d.delta();
            let (ox, oy, oz) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy, dz + oz), (0, 0, 0));
        }
    }
}
