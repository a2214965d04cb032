//! Allocation accounting.
//!
//! [`Tracker`] wraps the system allocator and records every allocation and
//! release. A release of a block that is not live is counted as a double
//! release and is *not* forwarded, so tests can observe the mistake
//! without triggering it.

use std::alloc::Layout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{trace, warn};

use crate::alloc::{Global, RawAllocator, RawBlock};
use crate::error::{Error, Result};
use crate::types::{BlockId, Stats};

#[derive(Debug, Default)]
struct Ledger {
    stats: Stats,
    limit: Option<usize>,
    /// Live blocks by address, with their size.
    live: HashMap<usize, usize>,
    /// Release attempts per address since its latest allocation.
    attempts: HashMap<usize, u32>,
    /// Addresses released while not live, in order.
    doubles: Vec<usize>,
}

/// Single-threaded counting allocator.
///
/// Clones share one ledger, so a tracker can be handed to many owners and
/// inspected afterwards.
///
/// # Example
///
/// ```
/// use owner::{Owner, OwnerOptions, Tracker};
///
/// let tracker = Tracker::new();
/// {
///     let _a = Owner::new_in(OwnerOptions::default(), tracker.clone())?;
/// }
/// assert_eq!(tracker.stats().releases, 1);
/// tracker.check()?;
/// # Ok::<(), owner::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    ledger: Rc<RefCell<Ledger>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that refuses allocations once `max_live_bytes`
    /// would be exceeded.
    pub fn with_limit(max_live_bytes: usize) -> Self {
        let tracker = Self::new();
        tracker.ledger.borrow_mut().limit = Some(max_live_bytes);
        tracker
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> Stats {
        self.ledger.borrow().stats
    }

    /// Release attempts on `id` since it was last allocated.
    pub fn releases_of(&self, id: BlockId) -> u32 {
        self.ledger
            .borrow()
            .attempts
            .get(&id.addr())
            .copied()
            .unwrap_or(0)
    }

    /// Whether `id` is currently allocated.
    pub fn is_live(&self, id: BlockId) -> bool {
        self.ledger.borrow().live.contains_key(&id.addr())
    }

    /// Fail if any block was released twice or is still live.
    pub fn check(&self) -> Result<()> {
        let ledger = self.ledger.borrow();
        if let Some(&addr) = ledger.doubles.first() {
            return Err(Error::DoubleRelease { addr });
        }
        if !ledger.live.is_empty() {
            return Err(Error::Leak {
                live: ledger.live.len(),
            });
        }
        Ok(())
    }
}

unsafe impl RawAllocator for Tracker {
    fn allocate(&self, layout: Layout) -> Result<RawBlock> {
        let mut ledger = self.ledger.borrow_mut();

        if let Some(limit) = ledger.limit {
            if ledger.stats.live_bytes + layout.size() > limit {
                ledger.stats.failed_allocations += 1;
                trace!(
                    "tracker: refusing {} bytes ({} of {} in use)",
                    layout.size(),
                    ledger.stats.live_bytes,
                    limit
                );
                return Err(Error::Allocation {
                    size: layout.size(),
                    align: layout.align(),
                });
            }
        }

        let block = match Global.allocate(layout) {
            Ok(block) => block,
            Err(e) => {
                ledger.stats.failed_allocations += 1;
                return Err(e);
            }
        };

        let addr = block.as_ptr() as usize;
        ledger.live.insert(addr, block.len());
        ledger.attempts.insert(addr, 0);
        ledger.stats.allocations += 1;
        ledger.stats.live += 1;
        ledger.stats.live_bytes += block.len();
        Ok(block)
    }

    unsafe fn release(&self, block: RawBlock) {
        if !block.is_valid() {
            return;
        }

        let mut ledger = self.ledger.borrow_mut();
        let addr = block.as_ptr() as usize;
        *ledger.attempts.entry(addr).or_insert(0) += 1;

        match ledger.live.remove(&addr) {
            Some(size) => {
                ledger.stats.releases += 1;
                ledger.stats.live -= 1;
                ledger.stats.live_bytes -= size;
                Global.release(block);
            }
            None => {
                warn!("tracker: block {:#x} released while not live", addr);
                ledger.stats.double_releases += 1;
                ledger.doubles.push(addr);
            }
        }
    }
}
