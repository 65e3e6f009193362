//! Display ordering for task records.
//!
//! Records sort by three keys, in precedence order:
//!
//! 1. priority records first,
//! 2. near-deadline records before the rest,
//! 3. ascending naming-convention index (`-1` for foreign names).
//!
//! The sort is stable, so records with equal keys keep the loader's
//! enumeration order. Nothing here is persisted; callers re-sort after every
//! reload and every priority change.

use crate::record::TaskRecord;
use std::cmp::Reverse;

/// Sort records in place into display order.
pub fn sort(records: &mut [TaskRecord]) {
    records.sort_by_key(|r| (Reverse(r.is_priority), !r.is_near_deadline, r.index()));
}

/// Consume records and return them in display order.
pub fn sorted(mut records: Vec<TaskRecord>) -> Vec<TaskRecord> {
    sort(&mut records);
    records
}
