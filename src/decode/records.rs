//! Record sequence

use serde_json::Value;

/// A finite, single-pass sequence of decoded records
///
/// Produced by [`super::JsonDecoder::decode`]. The sequence is consumed as
/// it is iterated and is not restartable; decode the body again to get a
/// fresh (structurally equal) sequence.
#[derive(Debug)]
pub struct Records {
    inner: std::vec::IntoIter<Value>,
}

impl Records {
    pub(crate) fn new(records: Vec<Value>) -> Self {
        Self {
            inner: records.into_iter(),
        }
    }

    /// Records remaining in the sequence
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl Iterator for Records {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records {}
