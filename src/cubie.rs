use rand::random;
use std::fmt;
use std::ops::Mul;

use self::{Corner::*, Edge::*};
use crate::constants::*;
use crate::error::Error;
use crate::facelet::*;
use crate::moves::*;

/// Represents the 8 corners on the cube, described by the layer they are on.
///
/// Example: `ULB` (Up, Left, Back).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Represents the 12 edges on the cube, described by the layer they are on.
///
/// Example: `BL` (Back, Left).
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Eq, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Cube on the cubie level.
///
/// A state is described by the permutation and orientation of the 8 corner
/// and 12 edge cubies; the six centers never move.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CubieCube {
    /// Corner permutation, relative to SOLVED_CUBIE_CUBE.
    pub cp: [Corner; 8],
    /// Corner orientation, 3 possible values: 0 (correctly oriented), 1 (twisted clockwise), 2 (twisted counter-clockwise).
    pub co: [u8; 8],
    /// Edge permutation, relative to SOLVED_CUBIE_CUBE.
    pub ep: [Edge; 12],
    /// Edge orientation, 2 possible values: 0 (correctly oriented), 1 (flipped).
    pub eo: [u8; 12],
}

/// Solved cube on the cubie level.
pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl Mul for CubieCube {
    type Output = Self;

    fn mul(self, rhs: CubieCube) -> Self::Output {
        let mut res = CubieCube::default();
        // (A * B).c = A(B(x).c).c
        // (A * B).o = A(B(x).c).o + B(x).o

        for i in 0..8 {
            res.cp[i] = self.cp[rhs.cp[i] as usize];
            res.co[i] = (self.co[rhs.cp[i] as usize] + rhs.co[i]) % 3;
        }

        for i in 0..12 {
            res.ep[i] = self.ep[rhs.ep[i] as usize];
            res.eo[i] = (self.eo[rhs.ep[i] as usize] + rhs.eo[i]) % 2;
        }
        res
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        for i in 0..8 {
            let cs: String = format!("({},{})", self.cp[i], self.co[i]);
            s.push_str(&cs);
        }
        for i in 0..12 {
            let es: String = format!("({},{})", self.ep[i], self.eo[i]);
            s.push_str(&es);
        }
        write!(f, "{s}")
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

/// Gives the cubie representation of a face cube.
///
/// Fails with `InvalidCube` if some sticker triple matches no cubie or some
/// cubie appears twice, and with `Unsolvable` if the cube assembles but
/// violates a parity invariant.
impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;
    fn try_from(face_cube: &FaceCube) -> Result<Self, Self::Error> {
        let mut state = CubieCube::default();

        for i in 0..8 {
            let fac = CORNER_FACELET[i];
            // get the colors of the cubie at corner position i, starting with U/D
            let mut ori = 3;
            for index in 0..3 {
                let col = face_cube.f[fac[index] as usize];
                if col == Color::U || col == Color::D {
                    ori = index;
                    break;
                }
            }
            if ori == 3 {
                // no U or D sticker on a corner
                return Err(Error::InvalidCube);
            }

            let col1 = face_cube.f[fac[(ori + 1) % 3] as usize];
            let col2 = face_cube.f[fac[(ori + 2) % 3] as usize];

            let mut matched = false;
            for j in 0..8 {
                if col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2] {
                    // in corner position i we have corner cubie j
                    state.cp[i] = ALL_CORNERS[j];
                    state.co[i] = ori as u8 % 3;
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(Error::InvalidCube);
            }
        }

        for i in 0..12 {
            let fac = EDGE_FACELET[i];
            let col0 = face_cube.f[fac[0] as usize];
            let col1 = face_cube.f[fac[1] as usize];

            let mut matched = false;
            for j in 0..12 {
                if col0 == EDGE_COLOR[j][0] && col1 == EDGE_COLOR[j][1] {
                    state.ep[i] = ALL_EDGES[j];
                    state.eo[i] = 0;
                    matched = true;
                    break;
                }
                if col0 == EDGE_COLOR[j][1] && col1 == EDGE_COLOR[j][0] {
                    state.ep[i] = ALL_EDGES[j];
                    state.eo[i] = 1;
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(Error::InvalidCube);
            }
        }

        if !state.has_distinct_cubies() {
            return Err(Error::InvalidCube);
        }
        if !state.is_solvable() {
            return Err(Error::Unsolvable);
        }
        Ok(state)
    }
}

impl CubieCube {
    /// Applies a move to the current state.
    pub fn apply_move(self, move_name: Move) -> Self {
        use Move::*;
        let move_state = match move_name {
            U => U_MOVE,
            U2 => U_MOVE * U_MOVE,
            U3 => U_MOVE * U_MOVE * U_MOVE,
            R => R_MOVE,
            R2 => R_MOVE * R_MOVE,
            R3 => R_MOVE * R_MOVE * R_MOVE,
            F => F_MOVE,
            F2 => F_MOVE * F_MOVE,
            F3 => F_MOVE * F_MOVE * F_MOVE,
            D => D_MOVE,
            D2 => D_MOVE * D_MOVE,
            D3 => D_MOVE * D_MOVE * D_MOVE,
            L => L_MOVE,
            L2 => L_MOVE * L_MOVE,
            L3 => L_MOVE * L_MOVE * L_MOVE,
            B => B_MOVE,
            B2 => B_MOVE * B_MOVE,
            B3 => B_MOVE * B_MOVE * B_MOVE,
        };

        self * move_state
    }

    /// Applies the sequence of moves to the current state.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |acc, &m| acc.apply_move(m))
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the corners.
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut c_perm = [URF; 8];
        let mut c_ori = [0; 8];
        for c in 0..8 {
            c_perm[c] = self.cp[b.cp[c] as usize];
            c_ori[c] = (self.co[b.cp[c] as usize] + b.co[c]) % 3;
        }
        self.cp = c_perm;
        self.co = c_ori;
    }

    /// Multiply this cubie cube with another cubie cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut e_perm = [UR; 12];
        let mut e_ori = [0; 12];
        for e in 0..12 {
            e_perm[e] = self.ep[b.ep[e] as usize];
            e_ori[e] = (self.eo[b.ep[e] as usize] + b.eo[e]) % 2;
        }
        self.ep = e_perm;
        self.eo = e_ori;
    }

    /// Multiply this cubie cube with another cubie cube b.
    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Return the inverse of this cubie cube.
    pub fn inverse_cubie_cube(&self) -> Self {
        let mut d = CubieCube::default();
        for ei in ALL_EDGES {
            let e = ei as usize;
            d.ep[self.ep[e] as usize] = ei;
        }
        for e in 0..12 {
            d.eo[e] = self.eo[d.ep[e] as usize];
        }

        for ci in ALL_CORNERS {
            let c = ci as usize;
            d.cp[self.cp[c] as usize] = ci;
        }
        for c in 0..8 {
            d.co[c] = (3 - self.co[d.cp[c] as usize]) % 3;
        }
        d
    }

    /// The twist of the 8 corners. 0 <= twist < 2187 in phase 1, twist = 0 in phase 2.
    pub fn get_twist(&self) -> u16 {
        let mut twist = 0;
        for i in (URF as usize)..(DRB as usize) {
            twist = 3 * twist + self.co[i] as u16;
        }
        twist
    }

    pub fn set_twist(&mut self, twist: u16) {
        let mut rest = twist;
        let mut sum = 0;
        for i in (0..7).rev() {
            self.co[i] = (rest % 3) as u8;
            sum += self.co[i];
            rest /= 3;
        }
        // the eighth orientation is forced by the mod 3 invariant
        self.co[7] = (3 - sum % 3) % 3;
    }

    /// The flip of the 12 edges. 0 <= flip < 2048 in phase 1, flip = 0 in phase 2.
    pub fn get_flip(&self) -> u16 {
        let mut flip = 0;
        for i in (UR as usize)..(BR as usize) {
            flip = 2 * flip + self.eo[i] as u16;
        }
        flip
    }

    pub fn set_flip(&mut self, flip: u16) {
        let mut rest = flip;
        let mut sum = 0;
        for i in (0..11).rev() {
            self.eo[i] = (rest % 2) as u8;
            sum += self.eo[i];
            rest /= 2;
        }
        // the twelfth orientation is forced by the mod 2 invariant
        self.eo[11] = sum % 2;
    }

    /// The location of the UD-slice edges FR, FL, BL and BR ignoring their permutation.
    ///
    /// 0 <= slice < 495 in phase 1, slice = 0 in phase 2.
    pub fn get_slice(&self) -> u16 {
        let mut a = 0;
        let mut x = 0;
        // Compute the index a < (12 choose 4)
        for j in ((UR as usize)..=(BR as usize)).rev() {
            if FR <= self.ep[j] && self.ep[j] <= BR {
                a += c_nk((11 - j) as u32, x + 1);
                x += 1;
            }
        }
        a as u16
    }

    pub fn set_slice(&mut self, idx: u16) {
        let slice_edge = [FR, FL, BL, BR];
        let other_edge = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut a = idx;
        let mut ep = [-1; 12];

        let mut x: i32 = 4; // set slice edges
        for j in ALL_EDGES {
            if a >= c_nk(11 - j as u32, x as u32) as u16 {
                self.ep[j as usize] = slice_edge[(4 - x) as usize];
                ep[j as usize] = slice_edge[(4 - x) as usize] as i32;
                a -= c_nk(11 - j as u32, x as u32) as u16;
                x -= 1;
            }
        }
        let mut x = 0; // set the remaining edges UR..DB
        for j in ALL_EDGES {
            if ep[j as usize] == -1 {
                self.ep[j as usize] = other_edge[x];
                x += 1;
            }
        }
    }

    /// The permutation and location of the UD-slice edges FR, FL, BL and BR.
    ///
    /// slice_sorted = 24 * slice + permutation index of the four slice edges.
    ///
    /// 0 <= slice_sorted < 11880 in phase 1, 0 <= slice_sorted < 24 in phase 2,
    /// slice_sorted = 0 for the solved cube.
    pub fn get_slice_sorted(&self) -> u16 {
        let mut a = 0;
        let mut x: usize = 0;
        let mut edge4 = [FR; 4];
        // First compute the index a < (12 choose 4) and the permutation array edge4.
        for j in ((UR as usize)..=(BR as usize)).rev() {
            if FR <= self.ep[j] && self.ep[j] <= BR {
                a += c_nk((11 - j) as u32, x as u32 + 1);
                edge4[3 - x] = self.ep[j];
                x += 1;
            }
        }
        // Then compute the index b < 4! for the permutation in edge4
        let mut b: u32 = 0;
        for j in (1..4usize).rev() {
            let mut k = 0;
            while edge4[j] as usize != j + 8 {
                rotate_left(&mut edge4, 0, j);
                k += 1;
            }
            b = (j as u32 + 1) * b + k;
        }
        (24 * a + b) as u16
    }

    pub fn set_slice_sorted(&mut self, idx: u16) {
        let mut slice_edge = [FR, FL, BL, BR];
        let other_edge = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut b = idx % 24; // permutation
        let mut a = idx / 24; // location
        let mut ep = [-1; 12];

        let mut j: u16 = 1; // generate permutation of the slice edges from index b
        while j < 4 {
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut slice_edge, 0, j as usize);
                k -= 1;
            }
            j += 1;
        }

        let mut x: i32 = 4; // set slice edges
        for j in ALL_EDGES {
            if a >= c_nk(11 - j as u32, x as u32) as u16 {
                self.ep[j as usize] = slice_edge[(4 - x) as usize];
                ep[j as usize] = slice_edge[(4 - x) as usize] as i32;
                a -= c_nk(11 - j as u32, x as u32) as u16;
                x -= 1;
            }
        }
        let mut x = 0; // set the remaining edges UR..DB
        for j in ALL_EDGES {
            if ep[j as usize] == -1 {
                self.ep[j as usize] = other_edge[x];
                x += 1;
            }
        }
    }

    /// The permutation and location of the edges UR, UF, UL and UB.
    ///
    /// 0 <= u_edges < 11880 in phase 1, 0 <= u_edges < 1680 in phase 2,
    /// u_edges = 1656 for the solved cube.
    pub fn get_u_edges(&self) -> u16 {
        let mut a = 0;
        let mut x: usize = 0;
        let mut edge4 = [UR; 4];
        let mut ep_mod = self.ep;
        for _ in 0..4 {
            rotate_right(&mut ep_mod, 0, 11);
        }
        for j in ((UR as usize)..=(BR as usize)).rev() {
            if UR <= ep_mod[j] && ep_mod[j] <= UB {
                a += c_nk((11 - j) as u32, x as u32 + 1);
                edge4[3 - x] = ep_mod[j];
                x += 1;
            }
        }
        let mut b: u32 = 0;
        for j in (1..4usize).rev() {
            let mut k = 0;
            while edge4[j] as usize != j {
                rotate_left(&mut edge4, 0, j);
                k += 1;
            }
            b = (j as u32 + 1) * b + k;
        }
        (24 * a + b) as u16
    }

    pub fn set_u_edges(&mut self, idx: u16) {
        let mut slice_edge = [UR, UF, UL, UB];
        let other_edge = [DR, DF, DL, DB, FR, FL, BL, BR];
        let mut b = idx % 24;
        let mut a = idx / 24;
        let mut ep = [-1; 12];

        let mut j: u16 = 1;
        while j < 4 {
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut slice_edge, 0, j as usize);
                k -= 1;
            }
            j += 1;
        }

        let mut x: i32 = 4;
        for j in ALL_EDGES {
            if a >= c_nk(11 - j as u32, x as u32) as u16 {
                self.ep[j as usize] = slice_edge[(4 - x) as usize];
                ep[j as usize] = slice_edge[(4 - x) as usize] as i32;
                a -= c_nk(11 - j as u32, x as u32) as u16;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in ALL_EDGES {
            if ep[j as usize] == -1 {
                self.ep[j as usize] = other_edge[x];
                x += 1;
            }
        }
        for _ in 0..4 {
            rotate_left(&mut self.ep, 0, 11);
        }
    }

    /// The permutation and location of the edges DR, DF, DL and DB.
    ///
    /// 0 <= d_edges < 11880 in phase 1, 0 <= d_edges < 1680 in phase 2,
    /// d_edges = 0 for the solved cube.
    pub fn get_d_edges(&self) -> u16 {
        let mut a = 0;
        let mut x: usize = 0;
        let mut edge4 = [DR; 4];
        let mut ep_mod = self.ep;
        for _ in 0..4 {
            rotate_right(&mut ep_mod, 0, 11);
        }
        for j in ((UR as usize)..=(BR as usize)).rev() {
            if DR <= ep_mod[j] && ep_mod[j] <= DB {
                a += c_nk((11 - j) as u32, x as u32 + 1);
                edge4[3 - x] = ep_mod[j];
                x += 1;
            }
        }
        let mut b: u32 = 0;
        for j in (1..4usize).rev() {
            let mut k = 0;
            while edge4[j] as usize != j + 4 {
                rotate_left(&mut edge4, 0, j);
                k += 1;
            }
            b = (j as u32 + 1) * b + k;
        }
        (24 * a + b) as u16
    }

    pub fn set_d_edges(&mut self, idx: u16) {
        let mut slice_edge = [DR, DF, DL, DB];
        let other_edge = [FR, FL, BL, BR, UR, UF, UL, UB];
        let mut b = idx % 24;
        let mut a = idx / 24;
        let mut ep = [-1; 12];

        let mut j: u16 = 1;
        while j < 4 {
            let mut k = b % (j + 1);
            b /= j + 1;
            while k > 0 {
                rotate_right(&mut slice_edge, 0, j as usize);
                k -= 1;
            }
            j += 1;
        }

        let mut x: i32 = 4;
        for j in ALL_EDGES {
            if a >= c_nk(11 - j as u32, x as u32) as u16 {
                self.ep[j as usize] = slice_edge[(4 - x) as usize];
                ep[j as usize] = slice_edge[(4 - x) as usize] as i32;
                a -= c_nk(11 - j as u32, x as u32) as u16;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in ALL_EDGES {
            if ep[j as usize] == -1 {
                self.ep[j as usize] = other_edge[x];
                x += 1;
            }
        }
        for _ in 0..4 {
            rotate_left(&mut self.ep, 0, 11);
        }
    }

    /// The permutation of the 8 corners.
    ///
    /// 0 <= corners < 40320, corners = 0 for the solved cube.
    pub fn get_corners(&self) -> u16 {
        let mut perm = self.cp;
        let mut b: u16 = 0;
        for j in ((URF as usize + 1)..=(DRB as usize)).rev() {
            let mut k = 0;
            while perm[j] as usize != j {
                rotate_left(&mut perm, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        b
    }

    pub fn set_corners(&mut self, idx: u16) {
        self.cp = ALL_CORNERS;
        let mut idx = idx;
        for j in ALL_CORNERS {
            let mut k = idx % (j as u16 + 1);
            idx /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut self.cp, 0, j as usize);
                k -= 1;
            }
        }
    }

    /// The permutation of the 8 U and D edges within the first eight slots.
    ///
    /// Undefined outside G1. 0 <= ud_edges < 40320, ud_edges = 0 for the solved cube.
    pub fn get_ud_edges(&self) -> u16 {
        let mut perm = [UR; 8];
        perm.copy_from_slice(&self.ep[0..8]);
        let mut b: u16 = 0;
        for j in ((UR as usize + 1)..=(DB as usize)).rev() {
            let mut k = 0;
            while perm[j] as usize != j {
                rotate_left(&mut perm, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        b
    }

    pub fn set_ud_edges(&mut self, idx: usize) {
        // the positions of the slice edges are not affected
        for i in 0..8 {
            self.ep[i] = ALL_EDGES[i];
        }
        let mut idx = idx;
        for j in 0..8 {
            let mut k = idx % (j + 1);
            idx /= j + 1;
            while k > 0 {
                rotate_right(&mut self.ep, 0, j);
                k -= 1;
            }
        }
    }

    /// Generate a random cube. The probability is the same for all possible states.
    pub fn randomize(&mut self) {
        // Fisher-Yates over the edges, then corners until the signs match
        self.ep = ALL_EDGES;
        for i in (1..12).rev() {
            self.ep.swap(i, random::<usize>() % (i + 1));
        }
        let sign = self.edge_parity();
        loop {
            self.set_corners((random::<u32>() % N_CORNERS as u32) as u16);
            if self.corner_parity() == sign {
                break;
            }
        }
        self.set_flip((random::<u32>() % N_FLIP as u32) as u16);
        self.set_twist((random::<u32>() % N_TWIST as u32) as u16);
    }

    /// Sign of the corner permutation: true for even.
    pub fn corner_parity(&self) -> bool {
        let mut inversions = 0;
        for i in 0..8 {
            for j in 0..i {
                if self.cp[j] > self.cp[i] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Sign of the edge permutation. A solvable cube has equal corner and edge signs.
    pub fn edge_parity(&self) -> bool {
        let mut inversions = 0;
        for i in 0..12 {
            for j in 0..i {
                if self.ep[j] > self.ep[i] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Each corner and each edge cubie occurs exactly once.
    pub fn has_distinct_cubies(&self) -> bool {
        let mut corner_count = [0; 8];
        for c in self.cp {
            corner_count[c as usize] += 1;
        }
        let mut edge_count = [0; 12];
        for e in self.ep {
            edge_count[e as usize] += 1;
        }
        corner_count == [1; 8] && edge_count == [1; 12]
    }

    /// A state is solvable iff the corner twists sum to 0 mod 3, the edge
    /// flips sum to 0 mod 2 and corner and edge permutations have the same sign.
    pub fn is_solvable(&self) -> bool {
        let twist: u32 = self.co.iter().map(|&c| c as u32).sum();
        let flip: u32 = self.eo.iter().map(|&e| e as u32).sum();
        twist % 3 == 0 && flip % 2 == 0 && self.corner_parity() == self.edge_parity()
    }

    /// A state is in G1 iff all orientations are zero and the slice edges sit in the slice.
    pub fn is_in_g1(&self) -> bool {
        self.get_twist() == 0 && self.get_flip() == 0 && self.get_slice() == 0
    }
}

/// Rotate arr one step to the right within left..=right.
pub fn rotate_right<T>(arr: &mut [T], left: usize, right: usize) {
    arr[left..=right].rotate_right(1);
}

/// Rotate arr one step to the left within left..=right.
pub fn rotate_left<T>(arr: &mut [T], left: usize, right: usize) {
    arr[left..=right].rotate_left(1);
}

/// Binomial coefficient [n choose k].
pub fn c_nk(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut c = 1;
    for i in 0..k {
        // exact at every step: c holds (n choose i) here
        c = c * (n - i) / (i + 1);
    }
    c
}

#[cfg(test)]
mod tests {
    use crate::cubie::*;
    use crate::moves::Move::*;

    // R then U, multiplied out by hand from the two basis cubes: the corner
    // at position i comes from R.cp[U.cp[i]] with twist R.co[U.cp[i]].
    fn ru_state() -> CubieCube {
        CubieCube {
            cp: [URF, DFR, UFL, ULB, DRB, DLF, DBL, UBR],
            co: [1, 2, 0, 0, 1, 0, 0, 2],
            ep: [UB, FR, UF, UL, BR, DF, DL, DB, DR, FL, BL, UR],
            eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    #[test]
    fn test_mult() {
        let state = CubieCube::default().apply_move(R);
        assert_eq!(state, R_MOVE);

        let r2_state = CubieCube::default().apply_move(R).apply_move(R);
        assert_eq!(r2_state, R_MOVE * R_MOVE);

        let r3_state = r2_state.apply_move(R);
        assert_eq!(r3_state, r2_state * R_MOVE);

        assert_eq!(R_MOVE * U_MOVE, ru_state());
        assert_eq!(CubieCube::default().apply_moves(&[R, U]), ru_state());
    }

    #[test]
    fn test_identity_moves() {
        // every face turn has order dividing four
        for m in ALL_MOVES {
            let mut state = CubieCube::default();
            for _ in 0..4 {
                state = state.apply_move(m);
            }
            assert_eq!(state, SOLVED_CUBIE_CUBE);
        }
        // (R U R' U') * 6
        let moves = vec![
            R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3, R, U, R3, U3,
        ];
        let state = CubieCube::default().apply_moves(&moves);
        assert_eq!(state, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_inverse() {
        let state = ru_state();
        // the inverse of R U is U' R'
        assert_eq!(
            state.inverse_cubie_cube(),
            CubieCube::default().apply_moves(&[U3, R3])
        );
        let mut both = state;
        both.multiply(state.inverse_cubie_cube());
        assert_eq!(both, SOLVED_CUBIE_CUBE);
        assert_eq!(state.inverse_cubie_cube().inverse_cubie_cube(), state);

        let scramble = [F, B2, L3, D, R2, U2, B];
        let undo = [B3, U2, R2, D3, L, B2, F3];
        let state = CubieCube::default().apply_moves(&scramble);
        assert_eq!(state.inverse_cubie_cube(), CubieCube::default().apply_moves(&undo));
    }

    #[test]
    fn test_parity() {
        let state = CubieCube::default();
        assert_eq!(state.corner_parity(), true);
        assert_eq!(state.edge_parity(), true);

        // a quarter turn is a 4-cycle on corners and on edges, both odd
        let state = CubieCube::default().apply_move(R);
        assert_eq!(state.corner_parity(), false);
        assert_eq!(state.edge_parity(), false);
        assert!(state.is_solvable());

        // two quarter turns compose to even signs again
        let state = ru_state();
        assert_eq!(state.corner_parity(), true);
        assert_eq!(state.edge_parity(), true);
        assert!(state.is_solvable());
    }

    #[test]
    fn test_apply_then_undo() {
        // composition stays exact over a scramble and its inverse
        let scramble = [D2, L, F3, U2, B, R2, D3, F2, L3, U, B2, R];
        let undo: Vec<Move> = scramble.iter().rev().map(|m| m.get_inverse()).collect();
        let state = CubieCube::default().apply_moves(&scramble).apply_moves(&undo);
        assert_eq!(state, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_orientation_round_trips() {
        let mut cc = CubieCube::default();
        for x in 0..N_TWIST as u16 {
            cc.set_twist(x);
            assert_eq!(cc.get_twist(), x);
            assert_eq!(cc.co.iter().map(|&c| c as u32).sum::<u32>() % 3, 0);
        }
        for x in 0..N_FLIP as u16 {
            cc.set_flip(x);
            assert_eq!(cc.get_flip(), x);
            assert_eq!(cc.eo.iter().map(|&e| e as u32).sum::<u32>() % 2, 0);
        }
    }

    #[test]
    fn test_edge_location_round_trips() {
        let mut cc = CubieCube::default();
        for x in 0..N_SLICE_SORTED as u16 {
            cc.set_slice_sorted(x);
            assert_eq!(cc.get_slice_sorted(), x);
            assert_eq!(cc.get_slice(), x / 24);
        }
        for x in 0..N_SLICE_SORTED as u16 {
            cc.set_u_edges(x);
            assert_eq!(cc.get_u_edges(), x);
        }
        for x in 0..N_SLICE_SORTED as u16 {
            cc.set_d_edges(x);
            assert_eq!(cc.get_d_edges(), x);
        }
        assert_eq!(CubieCube::default().get_u_edges(), 1656);
        assert_eq!(CubieCube::default().get_d_edges(), 0);
    }

    #[test]
    fn test_permutation_round_trips() {
        let mut cc = CubieCube::default();
        for x in 0..N_CORNERS as u16 {
            cc.set_corners(x);
            assert_eq!(cc.get_corners(), x);
        }
        for x in 0..N_UD_EDGES {
            cc.set_ud_edges(x);
            assert_eq!(cc.get_ud_edges() as usize, x);
        }
    }

    #[test]
    fn test_g1_membership() {
        let cc = CubieCube::default().apply_moves(&[U, R2, D3, B2, L2, U2]);
        assert!(cc.is_in_g1());
        assert!(!cc.apply_move(F).is_in_g1());
        assert!(!cc.apply_move(R).is_in_g1());
    }

    #[test]
    fn test_randomize() {
        let mut cc = CubieCube::default();
        for _ in 0..100 {
            cc.randomize();
            assert!(cc.has_distinct_cubies());
            assert!(cc.is_solvable());
        }
    }
}
