//! Outgoing byte stream seam.
//!
//! Everything the emulated mouse sends to the host (command responses and
//! movement packets alike) is pushed one byte at a time into a [`ByteSink`].
//! Pushes never block: a bounded sink that is full hands the byte back and
//! the emulator drops it.

/// Non-blocking destination for bytes headed to the PS/2 host.
pub trait ByteSink {
    /// Push one byte.
    ///
    /// # Errors
    ///
    /// Returns `Err(byte)` if the sink has no room; the byte is not stored.
    fn try_push(&mut self, byte: u8) -> Result<(), u8>;
}

impl ByteSink for Vec<u8> {
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        self.push(byte);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        (**self).try_push(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Full;

    impl ByteSink for Full {
        fn try_push(&mut self, byte: u8) -> Result<(), u8> {
            Err(byte)
        }
    }

    #[test]
    fn test_vec_sink_accepts_everything() {
        let mut out = Vec::new();
        assert_eq!(out.try_push(0xFA), Ok(()));
        assert_eq!(out.try_push(0xAA), Ok(()));
        assert_eq!(out, vec![0xFA, 0xAA]);
    }

    fn push_one<S: ByteSink>(mut sink: S, byte: u8) -> Result<(), u8> {
        sink.try_push(byte)
    }

    #[test]
    fn test_full_sink_returns_byte() {
        let mut sink = Full;
        assert_eq!(push_one(&mut sink, 0x42), Err(0x42));
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut out = Vec::new();
        assert_eq!(push_one(&mut out, 0x08), Ok(()));
        assert_eq!(out, vec![0x08]);
    }
}
