use std::fs;
use std::path::{Path, PathBuf};

use bincode::{Decode, Encode};

use crate::coord::EdgeMergeTables;
use crate::error::Error;
use crate::moves::MoveTables;
use crate::pruning::PruningTables;
use crate::{decode_table, encode_table};

/// Version tag of the on-disk table format. Bump whenever a coordinate
/// encoding, a table layout or the blob format changes.
const TABLES_VERSION: u32 = 1;

/// All precomputed data a solve needs: move tables, pruning tables and the
/// phase 2 edge merge table.
///
/// Built once and immutable afterwards; a single `Tables` value can back any
/// number of concurrent solves.
#[derive(Debug, PartialEq, Encode, Decode)]
pub struct Tables {
    pub mv: MoveTables,
    pub pr: PruningTables,
    pub em: EdgeMergeTables,
}

/// The cache file holds one version-tagged, checksummed bincode blob.
#[derive(Encode, Decode)]
struct CacheBlob {
    version: u32,
    checksum: u64,
    payload: Vec<u8>,
}

impl Tables {
    /// Generate all tables in memory. Takes a few seconds on first use.
    pub fn new() -> Self {
        let mv = MoveTables::new();
        let pr = PruningTables::new(&mv);
        let em = EdgeMergeTables::new();
        Self { mv, pr, em }
    }

    /// The default cache location, `tables/twophase.tables` relative to the
    /// working directory unless `TWOPHASE_TABLE_DIR` overrides the directory.
    pub fn default_path() -> PathBuf {
        let dir = std::env::var("TWOPHASE_TABLE_DIR").unwrap_or_else(|_| "tables".to_string());
        Path::new(&dir).join("twophase.tables")
    }

    /// Load the table cache, or generate the tables and best-effort write the
    /// cache back. A missing, corrupted or version-mismatched cache is never
    /// fatal: the tables are regenerated in memory and the stale file is
    /// overwritten.
    pub fn load_or_generate<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tables) => tables,
            Err(_) => {
                let tables = Self::new();
                if let Err(e) = tables.store(path) {
                    // in-memory tables work fine without a cache
                    println!("Could not write table cache {}: {}", path.display(), e);
                }
                tables
            }
        }
    }

    fn load(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        let blob: CacheBlob = decode_table(&bytes)?;
        if blob.version != TABLES_VERSION {
            return Err(Error::CacheVersionMismatch);
        }
        if fnv1a(&blob.payload) != blob.checksum {
            return Err(Error::CacheCorrupt);
        }
        decode_table(&blob.payload)
    }

    fn store(&self, path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let payload = encode_table(self)?;
        let blob = CacheBlob {
            version: TABLES_VERSION,
            checksum: fnv1a(&payload),
            payload,
        };
        fs::write(path, encode_table(&blob)?)?;
        Ok(())
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a over the encoded payload, enough to catch truncation and bit rot.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod test {
    use crate::tables::*;

    #[test]
    fn test_cache_round_trip() {
        let path = std::env::temp_dir().join("twophase_test_cache.tables");
        let _ = fs::remove_file(&path);
        let tables = Tables::new();
        tables.store(&path).unwrap();
        let loaded = Tables::load(&path).unwrap();
        assert_eq!(loaded, tables);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_cache_rejected() {
        let path = std::env::temp_dir().join("twophase_test_corrupt.tables");
        fs::write(&path, b"not a table blob").unwrap();
        assert!(Tables::load(&path).is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_cache_rejected() {
        let path = std::env::temp_dir().join("twophase_test_missing.tables");
        let _ = fs::remove_file(&path);
        assert!(Tables::load(&path).is_err());
    }
}
