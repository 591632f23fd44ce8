use rook_runtime::{PtrMut, Result, prelude::*};
use std::collections::VecDeque;

/// Provides scripted input to Rook
///
/// [RookRead] is implemented for InputFeed, allowing it to be used as stdin for the Rook runtime.
/// Clones share the same remaining input.
#[derive(Clone)]
pub struct InputFeed {
    input: PtrMut<VecDeque<u8>>,
}

impl InputFeed {
    /// Makes a new feed that will provide the given input
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: make_ptr_mut!(input.as_ref().iter().copied().collect::<VecDeque<_>>()),
        }
    }

    /// Returns the number of bytes that haven't been read yet
    pub fn remaining(&self) -> usize {
        self.input.borrow().len()
    }
}

impl RookWrite for InputFeed {}
impl RookRead for InputFeed {
    fn read_bytes(&self, count: usize) -> Result<Vec<u8>> {
        let mut input = self.input.borrow_mut();
        let count = count.min(input.len());
        Ok(input.drain(..count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stop_at_the_end_of_the_input() {
        let feed = InputFeed::new("ab\ncd");

        assert_eq!(feed.read_bytes(1).unwrap(), b"a");
        assert_eq!(feed.remaining(), 4);
        assert_eq!(feed.read_bytes(10).unwrap(), b"b\ncd");
        assert!(feed.read_bytes(usize::MAX).unwrap().is_empty());
        assert_eq!(feed.remaining(), 0);
    }
}
