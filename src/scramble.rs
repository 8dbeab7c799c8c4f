use std::str::FromStr;

use rand::random;

use crate::constants::ALL_MOVES;
use crate::error::Error;
use crate::moves::Move;

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> Result<String, Error> {
    let result: String = s
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(result)
}

/// Generate a random scramble of the given length.
///
/// No two successive moves turn the same layer and paired layers only appear
/// in canonical order, so the scramble never shortens trivially.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    while scramble.len() < length {
        let m = ALL_MOVES[random::<usize>() % ALL_MOVES.len()];
        if let Some(&last) = scramble.last() {
            if m.is_redundant_after(last) {
                continue;
            }
        }
        scramble.push(m);
    }
    scramble
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![F2, U3, L, D, B3, R2, U2, F, D3];
        assert_eq!(scramble_from_str("F2 U' L D B' R2 U2 F D'").unwrap(), m);
        assert!(scramble_from_str("F2 U' Q").is_err());
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![F2, U3, L, D, B3, R2, U2, F, D3];
        assert_eq!(scramble_to_str(&m).unwrap(), "F2 U' L D B' R2 U2 F D'");
    }

    #[test]
    fn test_gen_scramble() {
        for len in [1, 5, 25] {
            let s = gen_scramble(len);
            assert_eq!(s.len(), len);
            for w in s.windows(2) {
                assert!(!w[1].is_redundant_after(w[0]));
            }
        }
    }
}
