use std::fmt;

use bincode::{Decode, Encode};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::cubie::Edge::*;
use crate::error::Error;
use crate::moves::{Move, MoveTables};

/// Represent a cube on the coordinate level.
///
/// In phase 1 a state is uniquely determined by the three coordinates flip, twist and
/// slice = slice_sorted / 24.
///
/// In phase 2 a state is uniquely determined by the three coordinates corners, ud_edges
/// and slice_sorted % 24.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CoordCube {
    pub twist: u16,        // twist of corners
    pub flip: u16,         // flip of edges
    pub slice_sorted: u16, // position of the FR, FL, BL, BR edges. <11880 in phase 1, <24 in phase 2
    pub u_edges: u16,      // valid in phase 1 (<11880) and phase 2 (<1680). 1656 when solved
    pub d_edges: u16,      // valid in phase 1 (<11880) and phase 2 (<1680)
    pub corners: u16,      // corner permutation, valid in both phases
    pub ud_edges: u16,     // permutation of the U and D edges, defined only inside G1
}

/// ud_edges is undefined while any slice edge sits outside the slice.
pub const UD_EDGES_UNDEF: u16 = u16::MAX;

impl Default for CoordCube {
    fn default() -> Self {
        Self {
            twist: 0,
            flip: 0,
            slice_sorted: 0,
            u_edges: 1656,
            d_edges: 0,
            corners: 0,
            ud_edges: 0,
        }
    }
}

impl fmt::Display for CoordCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(twist: {}, flip: {}, slice: {}, U-edges: {}, D-edges: {}, E-edges: {}, Corners: {}, UD-Edges: {})",
            self.twist,
            self.flip,
            self.slice_sorted / 24,
            self.u_edges,
            self.d_edges,
            self.slice_sorted,
            self.corners,
            self.ud_edges
        )
    }
}

impl TryFrom<&CubieCube> for CoordCube {
    type Error = Error;

    fn try_from(cc: &CubieCube) -> Result<Self, Self::Error> {
        if !cc.is_solvable() {
            return Err(Error::Unsolvable);
        }

        let slice_sorted = cc.get_slice_sorted();
        let ud_edges = if slice_sorted < N_PERM_4 as u16 {
            // phase 2 cube
            cc.get_ud_edges()
        } else {
            UD_EDGES_UNDEF
        };

        Ok(Self {
            twist: cc.get_twist(),
            flip: cc.get_flip(),
            slice_sorted,
            u_edges: cc.get_u_edges(),
            d_edges: cc.get_d_edges(),
            corners: cc.get_corners(),
            ud_edges,
        })
    }
}

impl CoordCube {
    /// Update the phase 1 coordinates when a move is applied.
    pub fn phase1_move(&mut self, m: Move, mv: &MoveTables) {
        let m = m as usize;
        self.twist = mv.twist_move[N_MOVE * self.twist as usize + m];
        self.flip = mv.flip_move[N_MOVE * self.flip as usize + m];
        self.slice_sorted = mv.slice_sorted_move[N_MOVE * self.slice_sorted as usize + m];
        // u_edges and d_edges retrieve ud_edges easily when phase 2 starts
        self.u_edges = mv.u_edges_move[N_MOVE * self.u_edges as usize + m];
        self.d_edges = mv.d_edges_move[N_MOVE * self.d_edges as usize + m];
        // needed only in phase 2
        self.corners = mv.corners_move[N_MOVE * self.corners as usize + m];
        // recomputed from u_edges and d_edges when phase 2 starts
        self.ud_edges = UD_EDGES_UNDEF;
    }

    /// Update the phase 2 coordinates when one of the ten phase 2 moves is applied.
    ///
    /// Requires ud_edges to be defined, i.e. the cube must be inside G1.
    pub fn phase2_move(&mut self, m: Move, mv: &MoveTables) {
        let m = m as usize;
        self.slice_sorted = mv.slice_sorted_move[N_MOVE * self.slice_sorted as usize + m];
        self.corners = mv.corners_move[N_MOVE * self.corners as usize + m];
        self.ud_edges = mv.ud_edges_move[N_MOVE * self.ud_edges as usize + m];
    }
}

/// EdgeMergeTables stores the initial phase 2 ud_edges coordinate computed
/// from the u_edges and d_edges coordinates at the end of phase 1.
#[derive(Debug, PartialEq, Encode, Decode)]
pub struct EdgeMergeTables {
    pub upd_ud_edges: Vec<u16>,
}

impl EdgeMergeTables {
    pub fn new() -> Self {
        Self {
            upd_ud_edges: create_phase2_edgemerge_table(),
        }
    }

    /// The phase 2 ud_edges coordinate of a G1 cube with the given u_edges and d_edges.
    pub fn merge(&self, u_edges: u16, d_edges: u16) -> u16 {
        self.upd_ud_edges[N_PERM_4 * u_edges as usize + d_edges as usize % N_PERM_4]
    }
}

impl Default for EdgeMergeTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the table retrieving the initial phase 2 ud_edges coordinate from
/// the u_edges and d_edges coordinates.
pub(crate) fn create_phase2_edgemerge_table() -> Vec<u16> {
    let mut u_edges_plus_d_edges_to_ud_edges = vec![0; N_U_EDGES_PHASE2 * N_PERM_4];
    let mut c_u = CubieCube::default();
    let mut c_d = CubieCube::default();
    let mut c_ud = CubieCube::default();
    let edge_u = [UR, UF, UL, UB];
    let edge_d = [DR, DF, DL, DB];
    let edge_ud = [UR, UF, UL, UB, DR, DF, DL, DB];

    for i in 0..N_U_EDGES_PHASE2 {
        c_u.set_u_edges(i as u16);
        for j in 0..N_CHOOSE_8_4 {
            c_d.set_d_edges((j * N_PERM_4) as u16);
            let mut invalid = false;
            let mut c_ud_ep = [-1; 12];
            for ei in edge_ud {
                let e = ei as usize;
                c_ud_ep[e] = -1; // invalidate edges
                if edge_u.contains(&c_u.ep[e]) {
                    c_ud.ep[e] = c_u.ep[e];
                    c_ud_ep[e] = c_u.ep[e] as i32;
                }
                if edge_d.contains(&c_d.ep[e]) {
                    c_ud.ep[e] = c_d.ep[e];
                    c_ud_ep[e] = c_d.ep[e] as i32;
                }
                if c_ud_ep[e] == -1 {
                    invalid = true; // edge collision
                    break;
                }
            }
            if !invalid {
                for k in 0..N_PERM_4 {
                    c_d.set_d_edges((j * N_PERM_4 + k) as u16);
                    for ei in edge_ud {
                        let e = ei as usize;
                        if edge_u.contains(&c_u.ep[e]) {
                            c_ud.ep[e] = c_u.ep[e];
                        }
                        if edge_d.contains(&c_d.ep[e]) {
                            c_ud.ep[e] = c_d.ep[e];
                        }
                    }
                    u_edges_plus_d_edges_to_ud_edges[N_PERM_4 * i + k] = c_ud.get_ud_edges();
                }
            }
        }
    }
    u_edges_plus_d_edges_to_ud_edges
}

#[cfg(test)]
mod test {
    use crate::coord::*;
    use crate::cubie::CubieCube;
    use crate::moves::Move;

    #[test]
    fn test_solved_coordinates() {
        let cdc = CoordCube::try_from(&CubieCube::default()).unwrap();
        assert_eq!(cdc, CoordCube::default());
    }

    /// Coordinates of the cube one R away from solved, worked out on paper:
    /// the R corner twists give 1494 in base 3, the slice edges land with
    /// subset rank 367 and permutation index 16, so slice_sorted is 8824, and
    /// the Lehmer code of the R corner cycle is 26692.
    #[test]
    fn test_coordcube_one_turn() {
        let cc = CubieCube::default().apply_move(Move::R);
        let cdc = CoordCube::try_from(&cc).unwrap();
        assert_eq!(cdc.twist, 1494);
        assert_eq!(cdc.flip, 0);
        assert_eq!(cdc.slice_sorted, 8824);
        assert_eq!(cdc.u_edges, 2496);
        assert_eq!(cdc.d_edges, 7920);
        assert_eq!(cdc.corners, 26692);
        assert_eq!(cdc.ud_edges, UD_EDGES_UNDEF);

        // U keeps the cube inside G1, so ud_edges stays defined
        let cc = CubieCube::default().apply_move(Move::U);
        let cdc = CoordCube::try_from(&cc).unwrap();
        assert_eq!(cdc.twist, 0);
        assert_eq!(cdc.flip, 0);
        assert_eq!(cdc.slice_sorted, 0);
        assert_eq!(cdc.u_edges, 1662);
        assert_eq!(cdc.d_edges, 0);
        assert_eq!(cdc.corners, 6);
        assert_eq!(cdc.ud_edges, 6);
    }

    #[test]
    fn test_coord_moves_match_cubie_moves() {
        let mv = MoveTables::new();
        let mut cc = CubieCube::default();
        cc.randomize();
        let mut cdc = CoordCube::try_from(&cc).unwrap();
        for m in [Move::R, Move::U2, Move::F3, Move::D, Move::L2, Move::B] {
            cc = cc.apply_move(m);
            cdc.phase1_move(m, &mv);
            let expected = CoordCube::try_from(&cc).unwrap();
            assert_eq!(cdc.twist, expected.twist);
            assert_eq!(cdc.flip, expected.flip);
            assert_eq!(cdc.slice_sorted, expected.slice_sorted);
            assert_eq!(cdc.u_edges, expected.u_edges);
            assert_eq!(cdc.d_edges, expected.d_edges);
            assert_eq!(cdc.corners, expected.corners);
        }
    }

    #[test]
    fn test_edgemerge_table() {
        let em = EdgeMergeTables::new();
        assert_eq!(em.upd_ud_edges.len(), 40320);
        // the solved cube has u_edges 1656 and d_edges 0, after a U turn 1662 and 0
        assert_eq!(em.merge(1656, 0), 0);
        assert_eq!(em.merge(1662, 0), 6);
    }

    #[test]
    fn test_merge_agrees_with_cubie_level() {
        let em = EdgeMergeTables::new();
        // every phase 2 move keeps the cube inside G1, where the merge must
        // reproduce the cubie level ud_edges coordinate
        for m in crate::constants::PHASE2_MOVES {
            let cc = CubieCube::default().apply_move(m);
            let cdc = CoordCube::try_from(&cc).unwrap();
            assert_eq!(em.merge(cdc.u_edges, cdc.d_edges), cc.get_ud_edges());
        }
        let maneuvers: [&[Move]; 3] = [
            &[Move::U, Move::R2, Move::D3, Move::B2, Move::U2, Move::L2],
            &[Move::F2, Move::D, Move::L2, Move::U3, Move::B2, Move::R2, Move::D2],
            &[Move::R2, Move::L2, Move::U2, Move::D2, Move::F2, Move::B2],
        ];
        for moves in maneuvers {
            let cc = CubieCube::default().apply_moves(moves);
            let cdc = CoordCube::try_from(&cc).unwrap();
            assert!(cdc.slice_sorted < 24);
            assert_eq!(em.merge(cdc.u_edges, cdc.d_edges), cc.get_ud_edges());
            assert_eq!(cdc.ud_edges, cc.get_ud_edges());
        }
    }
}
