//! Bit-precision buffer comparison.

/// Compare the first `n` bits of two buffers.
///
/// Logs are packed most-significant bit first, one bit per time step.
/// Only the first `n` bits carry state; trailing bits of the final byte
/// are uninitialized padding and must never cause a mismatch. A buffer
/// shorter than `ceil(n / 8)` bytes cannot be judged and compares
/// unequal.
pub fn cmp_n_bits(a: &[u8], b: &[u8], n: u32) -> bool {
    let full_bytes = (n / 8) as usize;
    let extra_bits = n % 8;
    let needed = full_bytes + usize::from(extra_bits != 0);
    if a.len() < needed || b.len() < needed {
        return false;
    }
    if a[..full_bytes] != b[..full_bytes] {
        return false;
    }
    if extra_bits == 0 {
        return true;
    }
    let shift = 8 - extra_bits;
    (a[full_bytes] >> shift) == (b[full_bytes] >> shift)
}
