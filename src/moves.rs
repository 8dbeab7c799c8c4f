use std::{fmt, str::FromStr};

use bincode::{Decode, Encode};

use self::Move::*;
use crate::constants::*;
use crate::cubie::{Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::facelet::Color;

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble),
        }
    }
}

impl Move {
    /// The face this move turns, 0..6 in the order U, R, F, D, L, B.
    pub fn face(self) -> usize {
        self as usize / 3
    }

    /// True if both moves turn the same layer.
    pub fn is_same_layer(&self, other: Move) -> bool {
        self.face() == other.face()
    }

    /// True if the moves turn opposite layers (U/D, R/L, F/B).
    pub fn is_opposite_layer(&self, other: Move) -> bool {
        self.face() % 3 == other.face() % 3 && self.face() != other.face()
    }

    /// A move is redundant after `last` if it turns the same face, or the
    /// paired face against the canonical order (U before D, R before L, F before B).
    pub fn is_redundant_after(&self, last: Move) -> bool {
        let diff = last.face() as i8 - self.face() as i8;
        diff == 0 || diff == 3
    }

    pub fn get_inverse(self) -> Self {
        match self {
            U => U3,
            U3 => U,
            D => D3,
            D3 => D,
            R => R3,
            R3 => R,
            L => L3,
            L3 => L,
            F => F3,
            F3 => F,
            B => B3,
            B3 => B,
            _ => self,
        }
    }

    /// True for the ten moves that keep a cube inside G1.
    pub fn is_phase2(&self) -> bool {
        PHASE2_MOVES.contains(self)
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the orientations of the edges
};

/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The six basis cubes in face order U, R, F, D, L, B.
pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

/// One successor table per coordinate: `table[N_MOVE * x + m]` is the
/// coordinate after applying move m to a state with coordinate x.
#[derive(Debug, PartialEq, Encode, Decode)]
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_sorted_move: Vec<u16>,
    pub u_edges_move: Vec<u16>,
    pub d_edges_move: Vec<u16>,
    pub corners_move: Vec<u16>,
    pub ud_edges_move: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist_move: move_twist(),
            flip_move: move_flip(),
            slice_sorted_move: move_slice_sorted(),
            u_edges_move: move_u_edges(),
            d_edges_move: move_d_edges(),
            corners_move: move_corners(),
            ud_edges_move: move_ud_edges(),
        }
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Move table for the twists of the corners.
///
/// The twist coordinate describes the 3^7 = 2187 possible orientations of the 8 corners.
pub fn move_twist() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut twist_move = vec![0; N_TWIST * N_MOVE];
    for i in 0..N_TWIST {
        a.set_twist(i as u16);
        for j in ALL_COLORS {
            // six faces U, R, F, D, L, B
            for k in 0..3 {
                // three moves for each face, for example U, U2, U3 = U'
                a.corner_multiply(bmc[j as usize]);
                twist_move[N_MOVE * i + 3 * j as usize + k] = a.get_twist();
            }
            a.corner_multiply(bmc[j as usize]); // 4. move restores face
        }
    }
    twist_move
}

/// Move table for the flip of the edges.
///
/// The flip coordinate describes the 2^11 = 2048 possible orientations of the 12 edges.
pub fn move_flip() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut flip_move = vec![0; N_FLIP * N_MOVE];
    for i in 0..N_FLIP {
        a.set_flip(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[j as usize]);
                flip_move[N_MOVE * i + 3 * j as usize + k] = a.get_flip();
            }
            a.edge_multiply(bmc[j as usize]);
        }
    }
    flip_move
}

/// Move table for the four UD-slice edges FR, FL, BL and BR.
///
/// The slice_sorted coordinate describes the 12!/8! = 11880 possible positions of the FR, FL, BL
/// and BR edges. Though for phase 1 only the "unsorted" slice coordinate with Binomial(12,4) = 495
/// positions is relevant, using the slice_sorted coordinate gives us the permutation of the FR,
/// FL, BL and BR edges at the beginning of phase 2 for free.
pub fn move_slice_sorted() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut slice_move = vec![0; N_SLICE_SORTED * N_MOVE];
    for i in 0..N_SLICE_SORTED {
        a.set_slice_sorted(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[j as usize]);
                slice_move[N_MOVE * i + 3 * j as usize + k] = a.get_slice_sorted();
            }
            a.edge_multiply(bmc[j as usize]);
        }
    }
    slice_move
}

/// Move table for the u_edges coordinate for the transition phase 1 -> phase 2.
///
/// The u_edges coordinate describes the 12!/8! = 11880 possible positions of the UR, UF, UL and UB
/// edges. It is needed at the end of phase 1 to set up the coordinates of phase 2.
pub fn move_u_edges() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut u_edges_move = vec![0; N_SLICE_SORTED * N_MOVE];
    for i in 0..N_SLICE_SORTED {
        a.set_u_edges(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[j as usize]);
                u_edges_move[N_MOVE * i + 3 * j as usize + k] = a.get_u_edges();
            }
            a.edge_multiply(bmc[j as usize]);
        }
    }
    u_edges_move
}

/// Move table for the d_edges coordinate for the transition phase 1 -> phase 2.
///
/// The d_edges coordinate describes the 12!/8! = 11880 possible positions of the DR, DF, DL and DB
/// edges. It is needed at the end of phase 1 to set up the coordinates of phase 2.
pub fn move_d_edges() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut d_edges_move = vec![0; N_SLICE_SORTED * N_MOVE];
    for i in 0..N_SLICE_SORTED {
        a.set_d_edges(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[j as usize]);
                d_edges_move[N_MOVE * i + 3 * j as usize + k] = a.get_d_edges();
            }
            a.edge_multiply(bmc[j as usize]);
        }
    }
    d_edges_move
}

/// Move table for the corners coordinate in phase 2.
///
/// The corners coordinate describes the 8! = 40320 permutations of the corners.
pub fn move_corners() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut corners_move = vec![0; N_CORNERS * N_MOVE];
    for i in 0..N_CORNERS {
        a.set_corners(i as u16);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.corner_multiply(bmc[j as usize]);
                corners_move[N_MOVE * i + 3 * j as usize + k] = a.get_corners();
            }
            a.corner_multiply(bmc[j as usize]);
        }
    }
    corners_move
}

/// Move table for the permutation of the eight U and D edges in phase 2.
///
/// The ud_edges coordinate describes the 40320 permutations of the edges UR, UF, UL, UB, DR, DF,
/// DL and DB. Only the columns of the ten phase 2 moves are populated.
pub fn move_ud_edges() -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let mut ud_edges_move = vec![0; N_UD_EDGES * N_MOVE];
    for i in 0..N_UD_EDGES {
        a.set_ud_edges(i);
        for j in ALL_COLORS {
            for k in 0..3 {
                a.edge_multiply(bmc[j as usize]);
                // only R2, F2, L2 and B2 are phase 2 moves on these faces
                if ((j == Color::R) || (j == Color::F) || (j == Color::L) || (j == Color::B))
                    && k != 1
                {
                    continue;
                }
                ud_edges_move[N_MOVE * i + 3 * j as usize + k] = a.get_ud_edges();
            }
            a.edge_multiply(bmc[j as usize]);
        }
    }
    ud_edges_move
}
