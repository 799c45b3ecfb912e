//! Scratch buffer the lexer builds token text in.

use crate::errors::CompileError;

const DEFAULT_CAPACITY: usize = 16;

/// Append-only text buffer. Capacity doubles as needed; failure to grow is
/// reported as [`CompileError::OutOfMemory`] instead of aborting.
#[derive(Debug, Default)]
pub struct Collector {
    buffer: String,
}

impl Collector {
    pub fn new() -> Self {
        Collector {
            buffer: String::new(),
        }
    }

    pub fn push(&mut self, byte: u8) -> Result<(), CompileError> {
        self.reserve(1)?;
        self.buffer.push(byte as char);
        Ok(())
    }

    pub fn push_str(&mut self, text: &str) -> Result<(), CompileError> {
        self.reserve(text.len())?;
        self.buffer.push_str(text);
        Ok(())
    }

    /// Copy of the current contents. The buffer itself is left as is.
    pub fn snapshot(&self) -> String {
        self.buffer.clone()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn reserve(&mut self, extra: usize) -> Result<(), CompileError> {
        let needed = self.buffer.len() + extra;
        if needed <= self.buffer.capacity() {
            return Ok(());
        }

        let mut capacity = self.buffer.capacity().max(DEFAULT_CAPACITY);
        while capacity < needed {
            capacity *= 2;
        }
        self.buffer
            .try_reserve_exact(capacity - self.buffer.len())
            .map_err(|_| CompileError::OutOfMemory {
                requested: capacity,
            })
    }
}
