//! Chain operations
//!
//! Whole-chain write, streamed read, and best-effort purge over a
//! [`RecordStore`].

use std::sync::Arc;

use tracing::debug;

use crate::error::{FatError, Result};
use crate::store::{codec, RecordStore};

use super::{segment_key, Segment, CHAIN_TRAVERSAL_LIMIT, MAX_SEGMENT_CHARS};

/// Reads and writes segment chains against a shared record store
pub struct SegmentStore<S> {
    store: Arc<S>,
}

impl<S: RecordStore> SegmentStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Split `content` into a chain of segments owned by `name` and persist
    /// each as its own record. Returns the head key.
    ///
    /// Slices are consecutive, in original order, at most
    /// [`MAX_SEGMENT_CHARS`] characters each; concatenating them reproduces
    /// `content` exactly. Empty content still produces one terminal segment
    /// holding an empty slice, so every file has a traversable chain.
    pub fn write_chain(&self, name: &str, content: &str) -> Result<String> {
        let slices = split_slices(content);
        let count = slices.len();

        for (i, slice) in slices.iter().enumerate() {
            let index = i + 1;
            let is_last = index == count;

            let segment = Segment {
                data: (*slice).to_string(),
                next: (!is_last).then(|| segment_key(name, index + 1)),
                is_last,
            };

            let frame = codec::encode_record(&segment)?;
            self.store.put(&segment_key(name, index), &frame)?;
        }

        debug!(name, segments = count, "wrote chain");
        Ok(segment_key(name, 1))
    }

    /// Reconstruct the full content of the chain starting at `head`.
    ///
    /// Fails with [`FatError::BrokenChain`] if a referenced segment is
    /// missing, malformed, or the traversal exceeds its hop budget.
    pub fn read_chain(&self, head: &str) -> Result<String> {
        let mut content = String::new();
        for data in self.iter_chain(head) {
            content.push_str(&data?);
        }
        Ok(content)
    }

    /// Stream the chain's segment data in traversal order.
    ///
    /// Restartable only by calling again with the same head key.
    pub fn iter_chain(&self, head: &str) -> ChainIter<'_, S> {
        ChainIter {
            store: &self.store,
            next_key: Some(head.to_string()),
            hops: 0,
            failed: false,
        }
    }

    /// Delete every segment record of the chain starting at `head`.
    ///
    /// Best-effort: a missing or undecodable segment mid-chain stops the
    /// traversal without error (earlier deletions stand). Not atomic: a
    /// crash mid-purge leaves a partial chain orphaned. I/O errors still
    /// propagate.
    pub fn purge_chain(&self, head: &str) -> Result<usize> {
        let mut removed = 0;
        let mut key = head.to_string();

        for _ in 0..CHAIN_TRAVERSAL_LIMIT {
            let bytes = match self.store.get(&key)? {
                Some(bytes) => bytes,
                None => break,
            };

            self.store.delete(&key)?;
            removed += 1;

            let segment: Segment = match codec::decode_record(&key, &bytes) {
                Ok(segment) => segment,
                // Record is gone either way; without its link we stop here
                Err(_) => break,
            };

            match segment.next {
                Some(next) if !segment.is_last => key = next,
                _ => break,
            }
        }

        debug!(head, removed, "purged chain");
        Ok(removed)
    }
}

/// Split content into ≤ 20-character slices on char boundaries.
///
/// Empty content yields a single empty slice (the chain always has at least
/// one segment).
fn split_slices(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return vec![""];
    }

    let mut slices = Vec::with_capacity(content.len() / MAX_SEGMENT_CHARS + 1);
    let mut rest = content;

    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(MAX_SEGMENT_CHARS)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (slice, tail) = rest.split_at(split);
        slices.push(slice);
        rest = tail;
    }

    slices
}

/// Streaming iterator over a chain's segment data
pub struct ChainIter<'a, S> {
    store: &'a Arc<S>,
    next_key: Option<String>,
    hops: usize,
    failed: bool,
}

impl<S: RecordStore> Iterator for ChainIter<'_, S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let key = self.next_key.take()?;

        if self.hops >= CHAIN_TRAVERSAL_LIMIT {
            self.failed = true;
            return Some(Err(FatError::BrokenChain {
                key,
                reason: format!("chain exceeds {} segments (cycle?)", CHAIN_TRAVERSAL_LIMIT),
            }));
        }
        self.hops += 1;

        let result = self.fetch(&key);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

impl<S: RecordStore> ChainIter<'_, S> {
    fn fetch(&mut self, key: &str) -> Result<String> {
        let bytes = self.store.get(key)?.ok_or_else(|| FatError::BrokenChain {
            key: key.to_string(),
            reason: "referenced segment does not exist".to_string(),
        })?;

        let segment: Segment = codec::decode_record(key, &bytes)?;

        if !segment.is_well_formed() {
            return Err(FatError::BrokenChain {
                key: key.to_string(),
                reason: "terminal marker disagrees with next link".to_string(),
            });
        }

        self.next_key = segment.next;
        Ok(segment.data)
    }
}
