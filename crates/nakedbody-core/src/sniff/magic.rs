//! Binary signature checks on leading body bytes.

use super::FileExtension;

const WASM_MAGIC: [u8; 4] = [0x00, b'a', b's', b'm'];

/// Extension implied by the bytes at `body_offset`, if they carry a known signature.
pub(super) fn extension_from_magic(message: &[u8], body_offset: usize) -> Option<FileExtension> {
    let head = message.get(body_offset..)?.get(..WASM_MAGIC.len())?;
    if head == WASM_MAGIC {
        return Some(FileExtension(".wasm"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasm_at_offset() {
        let msg = b"HDR\r\n\r\n\0asm\x01\0\0\0";
        assert_eq!(extension_from_magic(msg, 7).unwrap().as_str(), ".wasm");
    }

    #[test]
    fn exactly_four_bytes_is_enough() {
        assert!(extension_from_magic(b"\0asm", 0).is_some());
    }

    #[test]
    fn short_or_out_of_range() {
        assert!(extension_from_magic(b"\0as", 0).is_none());
        assert!(extension_from_magic(b"\0asm", 1).is_none());
        assert!(extension_from_magic(b"\0asm", 99).is_none());
    }

    #[test]
    fn other_bytes() {
        assert!(extension_from_magic(b"\x89PNG\r\n", 0).is_none());
    }
}
