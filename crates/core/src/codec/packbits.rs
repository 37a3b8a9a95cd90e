//! TIFF 4.0 PackBits row decoder.

/// Decode a PackBits-encoded row.
///
/// Format:
/// - Control byte 0-127: Copy next (control + 1) bytes literally
/// - Control byte 128: No-op, nothing further is consumed
/// - Control byte 129-255: Repeat next byte (257 - control) times
///
/// Truncated runs are tolerated: a literal run copies whatever bytes
/// remain, and a repeat run with no value byte produces nothing.
pub fn unpack_bits(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        let control = data[i];
        i += 1;

        match control {
            128 => continue,
            0..=127 => {
                let end = (i + control as usize + 1).min(data.len());
                result.extend_from_slice(&data[i..end]);
                i = end;
            }
            129..=255 => {
                if let Some(&byte) = data.get(i) {
                    let count = 257 - control as usize;
                    result.extend(std::iter::repeat_n(byte, count));
                }
                i += 1;
            }
        }
    }

    result
}
