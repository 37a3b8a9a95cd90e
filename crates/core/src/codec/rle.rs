//! Plain run-length row decoder (HP RTL compression mode 1).

/// Decode `(count, value)` byte pairs.
///
/// Each pair expands to `count` copies of `value`. A trailing count byte
/// with no value byte is ignored.
pub fn run_length_decode(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(2)
        .flat_map(|pair| std::iter::repeat_n(pair[1], pair[0] as usize))
        .collect()
}
