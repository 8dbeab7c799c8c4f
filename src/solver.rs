use std::cmp::{max, min};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::constants::*;
use crate::coord::CoordCube;
use crate::cubie::{CubieCube, SOLVED_CUBIE_CUBE};
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::Move;
use crate::tables::Tables;

lazy_static! {
    static ref TABLES: Tables = Tables::load_or_generate(Tables::default_path());
}

/// Pre-build or pre-load the process-wide tables, so that later calls to
/// [`solve`] pay no table cost.
pub fn init_tables() {
    lazy_static::initialize(&TABLES);
}

/// A complete two-phase maneuver.
///
/// The concatenation of the phase 1 and phase 2 parts restores the scrambled
/// cube that was solved; an empty solution means the input was already solved.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub phase1: Vec<Move>,
    pub phase2: Vec<Move>,
    pub solve_time: Duration,
}

impl Solution {
    /// Total maneuver length in the half-turn metric.
    pub fn len(&self) -> usize {
        self.phase1.len() + self.phase2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase1.is_empty() && self.phase2.is_empty()
    }

    /// All moves of the maneuver, phase 1 first.
    pub fn moves(&self) -> Vec<Move> {
        self.phase1.iter().chain(self.phase2.iter()).copied().collect()
    }

    /// The maneuver with a `.` token between the phase 1 and phase 2 parts.
    pub fn to_string_with_separator(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let p1: Vec<String> = self.phase1.iter().map(|m| m.to_string()).collect();
        let p2: Vec<String> = self.phase2.iter().map(|m| m.to_string()).collect();
        let mut tokens = p1;
        tokens.push(".".to_string());
        tokens.extend(p2);
        tokens.join(" ")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.moves().iter().map(|m| m.to_string()).collect();
        write!(f, "{}", tokens.join(" "))
    }
}

/// Solve a cube defined by its cube definition string, using the process-wide
/// tables.
///
/// `max_depth` bounds the phase 1 depth. `timeout` is the wall clock budget
/// in seconds: the best solution found before it expires is returned, and the
/// search only fails if no complete solution appeared at all.
pub fn solve(cubestring: &str, max_depth: usize, timeout: f64) -> Result<Solution, Error> {
    solve_with_tables(cubestring, max_depth, timeout, &TABLES)
}

/// Solve against an explicitly constructed table context.
pub fn solve_with_tables(
    cubestring: &str,
    max_depth: usize,
    timeout: f64,
    tables: &Tables,
) -> Result<Solution, Error> {
    let fc = FaceCube::try_from(cubestring)?;
    let cc = CubieCube::try_from(&fc)?;
    Solver::new(tables, max_depth, timeout).solve(&cc)
}

/// The string-in, string-out surface: the solution string, or an
/// `Error: <kind>` token. With `separator` a `.` splits the two phases.
pub fn solve_string(cubestring: &str, max_depth: usize, timeout: f64, separator: bool) -> String {
    match solve(cubestring, max_depth, timeout) {
        Ok(solution) => {
            if separator {
                solution.to_string_with_separator()
            } else {
                solution.to_string()
            }
        }
        Err(e) => format!("Error: {}", e),
    }
}

/// Two-phase IDA* over the coordinate representation.
///
/// Phase 1 brings the cube into G1 with bound iteration up to `max_depth`;
/// every G1 entry starts a phase 2 search on the residual coordinates. After
/// the first complete solution the phase 1 bound keeps growing and every
/// shorter total found before the deadline replaces the incumbent.
pub struct Solver<'a> {
    tables: &'a Tables,
    max_depth: usize,
    timeout: f64,
    deadline: Instant,
    cancel: Option<Arc<AtomicBool>>,
    root: CoordCube,
    sofar_phase1: Vec<Move>,
    sofar_phase2: Vec<Move>,
    best: Option<(Vec<Move>, Vec<Move>)>,
    phase2_done: bool,
    terminated: bool,
    nodes: u64,
}

impl<'a> Solver<'a> {
    pub fn new(tables: &'a Tables, max_depth: usize, timeout: f64) -> Self {
        Self {
            tables,
            max_depth,
            timeout,
            deadline: Instant::now(),
            cancel: None,
            root: CoordCube::default(),
            sofar_phase1: Vec::new(),
            sofar_phase2: Vec::new(),
            best: None,
            phase2_done: false,
            terminated: false,
            nodes: 0,
        }
    }

    /// Observe an external cancel flag at the same points as the deadline.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Find a near-minimal maneuver restoring `cc` to the solved cube.
    pub fn solve(&mut self, cc: &CubieCube) -> Result<Solution, Error> {
        let start = Instant::now();
        if *cc == SOLVED_CUBIE_CUBE {
            return Ok(Solution {
                phase1: Vec::new(),
                phase2: Vec::new(),
                solve_time: start.elapsed(),
            });
        }
        self.deadline = start + Duration::from_secs_f64(self.timeout.max(0.0));
        self.root = CoordCube::try_from(cc)?;
        self.best = None;
        self.terminated = false;
        self.nodes = 0;

        let dist = self.phase1_h(self.root.twist, self.root.flip, self.root.slice_sorted);
        let max_togo = self.max_depth.min(u8::MAX as usize) as u8;
        for togo1 in dist..=max_togo {
            // iterative deepening, a solution has at least dist moves
            if self.terminated {
                break;
            }
            if let Some(best_len) = self.best_len() {
                // a longer phase 1 prefix can no longer beat the incumbent
                if togo1 as usize >= best_len {
                    break;
                }
            }
            self.sofar_phase1.clear();
            self.search_phase1(
                self.root.twist,
                self.root.flip,
                self.root.slice_sorted,
                dist,
                togo1,
            );
        }

        match self.best.take() {
            Some((phase1, phase2)) => Ok(Solution {
                phase1,
                phase2,
                solve_time: start.elapsed(),
            }),
            None => Err(Error::NoSolutionInBudget),
        }
    }

    fn best_len(&self) -> Option<usize> {
        self.best.as_ref().map(|(p1, p2)| p1.len() + p2.len())
    }

    /// max of the two phase 1 pruning tables, an admissible distance to G1.
    fn phase1_h(&self, twist: u16, flip: u16, slice_sorted: u16) -> u8 {
        let slice_ = slice_sorted / N_PERM_4 as u16;
        max(
            self.tables.pr.slice_twist_depth(slice_, twist),
            self.tables.pr.slice_flip_depth(slice_, flip),
        )
    }

    /// max of the two phase 2 pruning tables, an admissible distance to solved.
    fn phase2_h(&self, corners: u16, ud_edges: u16, slice_sorted: u16) -> u8 {
        max(
            self.tables.pr.corner_slice_depth(corners, slice_sorted),
            self.tables.pr.edge8_slice_depth(ud_edges, slice_sorted),
        )
    }

    /// Deadline and cancel check, gated to every few thousand node expansions.
    fn check_budget(&mut self) -> bool {
        if self.terminated {
            return true;
        }
        self.nodes += 1;
        if self.nodes & 0xfff == 0 {
            self.check_deadline();
        }
        self.terminated
    }

    fn check_deadline(&mut self) {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                self.terminated = true;
                return;
            }
        }
        if Instant::now() >= self.deadline {
            self.terminated = true;
        }
    }

    fn search_phase1(&mut self, twist: u16, flip: u16, slice_sorted: u16, dist: u8, togo: u8) {
        if self.check_budget() {
            return;
        }
        if togo == 0 {
            // in G1, the phase 1 pruning tables are exact there
            self.begin_phase2(slice_sorted);
            return;
        }
        let mv = &self.tables.mv;
        for m in ALL_MOVES {
            // dist == 0 means we are already inside G1. With less than 5 moves
            // left every remaining move would be a phase 2 move, and those are
            // generated in phase 2 after a shorter phase 1 exit instead.
            if dist == 0 && togo < 5 && m.is_phase2() {
                continue;
            }

            if let Some(&last) = self.sofar_phase1.last() {
                // successive moves on the same face or on the same axis in the wrong order
                if m.is_redundant_after(last) {
                    continue;
                }
            }

            let twist1 = mv.twist_move[N_MOVE * twist as usize + m as usize];
            let flip1 = mv.flip_move[N_MOVE * flip as usize + m as usize];
            let slice_sorted1 = mv.slice_sorted_move[N_MOVE * slice_sorted as usize + m as usize];

            let dist1 = self.phase1_h(twist1, flip1, slice_sorted1);
            if dist1 >= togo {
                // impossible to reach G1 in togo - 1 moves
                continue;
            }

            self.sofar_phase1.push(m);
            self.search_phase1(twist1, flip1, slice_sorted1, dist1, togo - 1);
            self.sofar_phase1.pop();
            if self.terminated {
                return;
            }
        }
    }

    /// Phase 1 is solved with the moves in sofar_phase1; set up the phase 2
    /// coordinates and run its bound iteration.
    fn begin_phase2(&mut self, slice_sorted: u16) {
        self.check_deadline();
        if self.terminated {
            return;
        }
        let mv = &self.tables.mv;

        // walk the corner and U/D edge coordinates along the phase 1 maneuver
        let mut corners = self.root.corners;
        let mut u_edges = self.root.u_edges;
        let mut d_edges = self.root.d_edges;
        for &m in &self.sofar_phase1 {
            corners = mv.corners_move[N_MOVE * corners as usize + m as usize];
            u_edges = mv.u_edges_move[N_MOVE * u_edges as usize + m as usize];
            d_edges = mv.d_edges_move[N_MOVE * d_edges as usize + m as usize];
        }

        // the new solution must be shorter, and phase 2 maneuvers longer than
        // MAX_DEPTH2 never pay off against a deeper phase 1 exit
        let room = match self.best_len() {
            Some(best_len) => best_len.saturating_sub(self.sofar_phase1.len()),
            None => MAX_DEPTH2 + 1,
        };
        let togo2_limit = min(room, MAX_DEPTH2 + 1) as u8;
        if self.tables.pr.corner_slice_depth(corners, slice_sorted) >= togo2_limit {
            // cheap precheck before the edge merge
            return;
        }

        let ud_edges = self.tables.em.merge(u_edges, d_edges);
        let dist2 = self.phase2_h(corners, ud_edges, slice_sorted);
        for togo2 in dist2..togo2_limit {
            self.sofar_phase2.clear();
            self.phase2_done = false;
            self.search_phase2(corners, ud_edges, slice_sorted, togo2);
            if self.phase2_done || self.terminated {
                break;
            }
        }
    }

    fn search_phase2(&mut self, corners: u16, ud_edges: u16, slice_sorted: u16, togo: u8) {
        if self.phase2_done || self.check_budget() {
            return;
        }
        if togo == 0 {
            if corners == 0 && ud_edges == 0 && slice_sorted == 0 {
                // the phase 2 budget guarantees this beats the incumbent
                self.best = Some((self.sofar_phase1.clone(), self.sofar_phase2.clone()));
                self.phase2_done = true;
            }
            return;
        }
        let mv = &self.tables.mv;
        for m in PHASE2_MOVES {
            // the last move of phase 1 counts as the previous move for the
            // first move of phase 2
            let last = self
                .sofar_phase2
                .last()
                .or_else(|| self.sofar_phase1.last());
            if let Some(&last) = last {
                if m.is_redundant_after(last) {
                    continue;
                }
            }

            let corners1 = mv.corners_move[N_MOVE * corners as usize + m as usize];
            let ud_edges1 = mv.ud_edges_move[N_MOVE * ud_edges as usize + m as usize];
            let slice_sorted1 = mv.slice_sorted_move[N_MOVE * slice_sorted as usize + m as usize];

            if self.phase2_h(corners1, ud_edges1, slice_sorted1) >= togo {
                // impossible to reach the solved cube in togo - 1 moves
                continue;
            }

            self.sofar_phase2.push(m);
            self.search_phase2(corners1, ud_edges1, slice_sorted1, togo - 1);
            self.sofar_phase2.pop();
            if self.phase2_done || self.terminated {
                return;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::cubie::CubieCube;
    use crate::facelet::FaceCube;
    use crate::scramble::gen_scramble;
    use crate::solver::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn assert_solves(facelets: &str, solution: &Solution) {
        let fc = FaceCube::try_from(facelets).unwrap();
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc.apply_moves(&solution.moves()), CubieCube::default());
    }

    #[test]
    fn test_already_solved() {
        let solution = solve(SOLVED, 21, 3.0).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.to_string(), "");
    }

    #[test]
    fn test_single_move() {
        let cc = CubieCube::default().apply_move(Move::R);
        let facelets = FaceCube::try_from(&cc).unwrap().to_string();
        let solution = solve(&facelets, 21, 3.0).unwrap();
        assert_eq!(solution.len(), 1);
        assert_solves(&facelets, &solution);
    }

    #[test]
    fn test_published_state() {
        let facelets = "DRLUUBFBRBLURRLBFFUFRFBDUDDRFDDLLDRLDUBFLUBLRFBBDUULF";
        let solution = solve(facelets, 21, 5.0).unwrap();
        assert_solves(facelets, &solution);
        assert!(solution.len() <= 24);
    }

    #[test]
    fn test_superflip() {
        let facelets = "UBULURUFUFURFRBRFRFUFLFRFDFDRDFDLDBDLFLDLBLULBDBLBRBUB";
        let solution = solve(facelets, 21, 10.0).unwrap();
        assert_solves(facelets, &solution);
        assert!(solution.len() <= 24);
    }

    #[test]
    fn test_random_scrambles() {
        for len in [1, 3, 8, 14, 30] {
            let scramble = gen_scramble(len);
            let cc = CubieCube::default().apply_moves(&scramble);
            let facelets = FaceCube::try_from(&cc).unwrap().to_string();
            let solution = solve(&facelets, 21, 2.0).unwrap();
            assert_solves(&facelets, &solution);
            assert!(solution.len() <= 24);
        }
    }

    #[test]
    fn test_separator_output() {
        let cc = CubieCube::default().apply_moves(&gen_scramble(12));
        let facelets = FaceCube::try_from(&cc).unwrap().to_string();
        let with_sep = solve_string(&facelets, 21, 3.0, true);
        assert!(with_sep.contains('.'));
        let replay: Vec<Move> = with_sep
            .split_whitespace()
            .filter(|t| *t != ".")
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(cc.apply_moves(&replay), CubieCube::default());
    }

    #[test]
    fn test_error_tokens() {
        assert_eq!(
            solve_string("AAAAAAAAA", 21, 3.0, false),
            "Error: invalid length"
        );
        let bad_symbol = "XUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        assert_eq!(
            solve_string(bad_symbol, 21, 3.0, false),
            "Error: invalid symbol"
        );
        // solved cube with the UR edge flipped in place
        let flipped = "UUUUURUUURURRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        assert_eq!(solve_string(flipped, 21, 3.0, false), "Error: unsolvable");
        // two non-center stickers of different colors transposed
        let transposed = "RUUUUUUUUURRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";
        assert_eq!(
            solve_string(transposed, 21, 3.0, false),
            "Error: invalid cube"
        );
    }

    #[test]
    fn test_heuristics_admissible() {
        for _ in 0..20 {
            let mut cc = CubieCube::default();
            cc.randomize();
            let facelets = FaceCube::try_from(&cc).unwrap().to_string();
            let solution = solve(&facelets, 21, 1.0).unwrap();
            assert_solves(&facelets, &solution);
            let root = crate::coord::CoordCube::try_from(&cc).unwrap();
            let h = max(
                TABLES
                    .pr
                    .slice_twist_depth(root.slice_sorted / 24, root.twist),
                TABLES.pr.slice_flip_depth(root.slice_sorted / 24, root.flip),
            );
            assert!((h as usize) <= solution.len());
        }
    }

    #[test]
    fn test_timeout_without_solution() {
        let cc = CubieCube::default().apply_moves(&gen_scramble(25));
        let facelets = FaceCube::try_from(&cc).unwrap().to_string();
        match solve(&facelets, 21, 0.0) {
            Err(Error::NoSolutionInBudget) => {}
            other => panic!("expected timeout failure, got {:?}", other.map(|s| s.to_string())),
        }
    }

    #[test]
    fn test_cancel_flag() {
        let cc = CubieCube::default().apply_moves(&gen_scramble(25));
        let cancel = Arc::new(AtomicBool::new(true));
        let mut solver = Solver::new(&TABLES, 21, 10.0).with_cancel(cancel);
        assert!(solver.solve(&cc).is_err());
    }
}
