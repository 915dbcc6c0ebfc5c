// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental UTF-8 decoding for a byte stream arriving in arbitrary-sized
//! chunks, mirroring Python's `codecs.getincrementaldecoder('utf-8')`.

/// Decodes a stream of byte chunks into `String`s, buffering any trailing
/// incomplete multi-byte sequence until the next chunk arrives. Invalid
/// sequences are replaced with U+FFFD rather than rejected.
#[derive(Debug, Default)]
pub struct IncrementalUtf8Decoder {
    pending: Vec<u8>,
}

impl IncrementalUtf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `chunk` as forms complete UTF-8 sequences, holding
    /// back any incomplete tail for the next call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let valid_len = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) => e.valid_up_to(),
        };

        let complete: Vec<u8> = self.pending.drain(..valid_len).collect();
        let mut out = String::from_utf8_lossy(&complete).into_owned();

        // If the remaining tail is too long to ever be a valid continuation
        // (more than 3 bytes, the longest a UTF-8 sequence can trail), treat
        // it as invalid and emit a replacement character rather than
        // buffering forever.
        if self.pending.len() > 3 {
            let bad: Vec<u8> = std::mem::take(&mut self.pending);
            out.push_str(&String::from_utf8_lossy(&bad));
        }
        out
    }
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
