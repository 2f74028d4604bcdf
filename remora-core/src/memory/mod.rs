//! Memory map module.
//!
//! Holds the virtual-memory layout of one target process as a snapshot
//! of named regions. Regions are stored verbatim in the order the
//! target reported them; no sorting, merging, or overlap validation is
//! performed, so lookup results always reflect the target's own view.

use crate::process::MatchMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region is readable.
pub const PROT_READ: u32 = 0x1;
/// Region is writable.
pub const PROT_WRITE: u32 = 0x2;
/// Region is executable.
pub const PROT_EXEC: u32 = 0x4;

/// One contiguous virtual-memory region of the target process.
///
/// The range is `[start, end)`. The protection bitmask is stored
/// verbatim as reported by the target; only the conventional low
/// read/write/execute bits are given accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegion {
    /// Start address of the region.
    pub start: u64,
    /// End address of the region (exclusive).
    pub end: u64,
    /// Region name.
    pub name: String,
    /// File backing offset.
    pub offset: u64,
    /// Raw protection bitmask.
    pub prot: u32,
}

impl MemoryRegion {
    /// Geometric size of the region in bytes.
    ///
    /// A malformed region with `end < start` yields 0 rather than
    /// wrapping, so a bad record cannot satisfy a size lookup by
    /// accident.
    pub fn size(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `addr` falls inside the region.
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.start && addr < self.end
    }

    /// Whether the read bit is set.
    pub fn is_readable(&self) -> bool {
        self.prot & PROT_READ != 0
    }

    /// Whether the write bit is set.
    pub fn is_writable(&self) -> bool {
        self.prot & PROT_WRITE != 0
    }

    /// Whether the execute bit is set.
    pub fn is_executable(&self) -> bool {
        self.prot & PROT_EXEC != 0
    }

    /// Render the conventional protection bits as an `rwx` triple.
    pub fn prot_str(&self) -> String {
        format!(
            "{}{}{}",
            if self.is_readable() { 'r' } else { '-' },
            if self.is_writable() { 'w' } else { '-' },
            if self.is_executable() { 'x' } else { '-' },
        )
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:016x}-{:016x} {} {:08x} {}",
            self.start,
            self.end,
            self.prot_str(),
            self.offset,
            self.name
        )
    }
}

/// Snapshot of one process's virtual-memory map.
///
/// Rebuilt wholesale each time the target is queried; never mutated in
/// place, so readers can share a snapshot freely.
#[derive(Debug, Clone)]
pub struct MemoryMap {
    pid: i32,
    regions: Vec<MemoryRegion>,
}

impl MemoryMap {
    /// Build a snapshot for `pid` from regions already decoded by the
    /// transport, keeping their order.
    pub fn new(pid: i32, regions: Vec<MemoryRegion>) -> Self {
        log::debug!("built memory map for pid {} with {} regions", pid, regions.len());
        Self { pid, regions }
    }

    /// Find the first region whose name satisfies the query.
    ///
    /// Same scan law as [`crate::ProcessList::find_process`]: linear,
    /// first match in snapshot order, case-sensitive. Returns `None` if
    /// nothing matches.
    pub fn find_region(&self, name: &str, mode: MatchMode) -> Option<&MemoryRegion> {
        self.regions.iter().find(|r| mode.matches(&r.name, name))
    }

    /// Find the first region whose geometric size equals `size`.
    pub fn find_region_by_size(&self, size: u64) -> Option<&MemoryRegion> {
        self.regions.iter().find(|r| r.size() == size)
    }

    /// Process ID this map belongs to.
    pub fn pid(&self) -> i32 {
        self.pid
    }

    /// All regions in snapshot order.
    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    /// Number of regions in the snapshot.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(start: u64, end: u64, name: &str) -> MemoryRegion {
        MemoryRegion {
            start,
            end,
            name: name.to_string(),
            offset: 0,
            prot: PROT_READ | PROT_WRITE,
        }
    }

    #[test]
    fn test_find_region_by_name() {
        let map = MemoryMap::new(
            42,
            vec![region(0x1000, 0x2000, "libc.sprx"), region(0x2000, 0x3000, "heap")],
        );

        assert_eq!(map.find_region("heap", MatchMode::Exact).unwrap().start, 0x2000);
        assert_eq!(map.find_region("libc", MatchMode::Contains).unwrap().start, 0x1000);
        assert!(map.find_region("Heap", MatchMode::Exact).is_none());
        assert!(map.find_region("stack", MatchMode::Contains).is_none());
    }

    #[test]
    fn test_find_region_first_match_wins() {
        let map = MemoryMap::new(
            1,
            vec![region(0x1000, 0x2000, "seg1"), region(0x3000, 0x4000, "seg2")],
        );
        assert_eq!(map.find_region("seg", MatchMode::Contains).unwrap().name, "seg1");
    }

    #[test]
    fn test_find_region_by_size() {
        let map = MemoryMap::new(
            1,
            vec![region(0x1000, 0x2000, "a"), region(0x2000, 0x2000, "b")],
        );

        assert_eq!(map.find_region_by_size(0x1000).unwrap().name, "a");
        assert_eq!(map.find_region_by_size(0).unwrap().name, "b");
        assert!(map.find_region_by_size(0x500).is_none());
    }

    #[test]
    fn test_inverted_range_has_zero_size() {
        let bad = region(0x2000, 0x1000, "bad");
        assert_eq!(bad.size(), 0);

        // It matches a zero-size query, never a huge wrapped one
        let map = MemoryMap::new(1, vec![bad]);
        assert!(map.find_region_by_size(u64::MAX - 0xFFF).is_none());
        assert_eq!(map.find_region_by_size(0).unwrap().name, "bad");
    }

    #[test]
    fn test_empty_map_returns_none() {
        let map = MemoryMap::new(7, Vec::new());
        assert!(map.is_empty());
        assert_eq!(map.pid(), 7);
        assert!(map.find_region("x", MatchMode::Exact).is_none());
        assert!(map.find_region_by_size(0).is_none());
    }

    #[test]
    fn test_contains() {
        let r = region(0x1000, 0x2000, "r");
        assert!(r.contains(0x1000));
        assert!(r.contains(0x1FFF));
        assert!(!r.contains(0x2000));
        assert!(!r.contains(0xFFF));
    }

    #[test]
    fn test_prot_accessors() {
        let mut r = region(0, 0x1000, "r");
        r.prot = PROT_READ | PROT_EXEC;
        assert!(r.is_readable());
        assert!(!r.is_writable());
        assert!(r.is_executable());
        assert_eq!(r.prot_str(), "r-x");

        // Raw value is kept verbatim, including bits we do not interpret
        r.prot = 0xFFF0;
        assert_eq!(r.prot, 0xFFF0);
        assert_eq!(r.prot_str(), "---");
    }

    #[test]
    fn test_region_display() {
        let mut r = region(0x1000, 0x2000, "eboot.bin");
        r.prot = PROT_READ | PROT_EXEC;
        assert_eq!(
            r.to_string(),
            "0000000000001000-0000000000002000 r-x 00000000 eboot.bin"
        );
    }
}
