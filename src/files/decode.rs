//! Byte-to-text decoding for input files.
//!
//! A byte-order mark selects the encoding (UTF-8, UTF-16 LE/BE). Without one
//! the bytes must be strict UTF-8; nothing is guessed and nothing is replaced.

use crate::error::{MergeError, MergeResult};
use encoding_rs::Encoding;
use std::path::Path;

pub fn decode_text(bytes: &[u8], path: &Path) -> MergeResult<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!("{} has a {} byte-order mark", path.display(), encoding.name());
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            return Err(MergeError::Encoding { path: path.to_path_buf(), encoding: encoding.name() });
        }
        return Ok(text.into_owned());
    }

    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| MergeError::Encoding { path: path.to_path_buf(), encoding: "UTF-8" })
}
