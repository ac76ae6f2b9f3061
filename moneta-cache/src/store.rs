//! The ordered entry store.
//!
//! Maintains a client-side list of entries sorted by the composite key
//! in [`moneta_core::entry_cmp`] and applies the single-entry mutations
//! arriving from the change feed. Every operation is copy-on-write: the
//! input slice is never touched, so readers holding a previous snapshot
//! keep a consistent view while the next one is produced.

use moneta_core::{entry_cmp, Entry};

use crate::{CacheError, CacheResult};

/// Insert an entry into a sorted snapshot, returning the next snapshot.
///
/// Position lookup is a binary search over the ordering relation, with
/// direct boundary checks for entries that sort before the first or
/// after the last element. Redelivered inserts (an id the store already
/// holds at the same position) are rejected with
/// [`CacheError::DuplicateEntry`] instead of silently duplicating.
pub fn insert(current: &[Entry], new_entry: Entry) -> CacheResult<Vec<Entry>> {
    let index = insert_position(current, &new_entry);
    if current.get(index).is_some_and(|existing| existing.id == new_entry.id) {
        return Err(CacheError::DuplicateEntry { id: new_entry.id });
    }
    debug_assert!(
        current.iter().all(|existing| existing.id != new_entry.id),
        "store already holds entry {}",
        new_entry.id
    );

    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(&current[..index]);
    next.push(new_entry);
    next.extend_from_slice(&current[index..]);
    Ok(next)
}

/// Remove the entry with `old_entry`'s id from a sorted snapshot.
///
/// The ordering relation includes the id, so the binary search lands on
/// the exact entry or nowhere; a miss means the cache has
/// desynchronized from the backend and surfaces as
/// [`CacheError::EntryNotFound`].
pub fn delete(current: &[Entry], old_entry: &Entry) -> CacheResult<Vec<Entry>> {
    let index = current
        .binary_search_by(|existing| entry_cmp(existing, old_entry))
        .map_err(|_| CacheError::EntryNotFound {
            id: old_entry.id,
            store_len: current.len(),
        })?;
    debug_assert_eq!(current[index].id, old_entry.id);

    let mut next = current.to_vec();
    next.remove(index);
    Ok(next)
}

/// Replace `old_entry` with `new_entry`, relocating it in the order.
///
/// An update may change the sort key (the date in particular), so the
/// entry is deleted and reinserted rather than patched in place.
pub fn update(current: &[Entry], new_entry: Entry, old_entry: &Entry) -> CacheResult<Vec<Entry>> {
    let without_old = delete(current, old_entry)?;
    insert(&without_old, new_entry)
}

fn insert_position(current: &[Entry], entry: &Entry) -> usize {
    match current.first() {
        None => return 0,
        Some(first) if entry.sort_precedes(first) => return 0,
        _ => {}
    }
    if current.last().is_some_and(|last| last.sort_precedes(entry)) {
        return current.len();
    }
    current.partition_point(|existing| existing.sort_precedes(entry))
}
