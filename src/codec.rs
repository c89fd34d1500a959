use num_bigint::BigUint;

/// Longest run of raw bytes a single block may carry.
///
/// A full block pads to an integer below `256^255 < 2^2048`, which keeps
/// it under any modulus built from two 1024-bit primes, and the cipher
/// needs every padded block strictly below the modulus.
pub const BLOCK_LEN: usize = 255;

/// Reads a byte sequence as a base-256 integer, least significant byte
/// first: `sum(byte[i] * 256^i)`. The empty sequence maps to zero.
pub fn pad(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Inverse of [`pad`]: peels base-256 digits back off, least significant
/// first.
///
/// Trailing zero bytes never make it through a pad/depad trip, since the
/// integer cannot remember high zero digits. The chunker feeds this only
/// blocks whose final byte is meaningful in practice, and zero comes
/// back as a single zero byte.
pub fn depad(num: &BigUint) -> Vec<u8> {
    num.to_bytes_le()
}

/// Splits a message into consecutive blocks of at most [`BLOCK_LEN`]
/// bytes, preserving order and content. An empty message yields no
/// blocks at all, and an exact multiple of the block length yields no
/// trailing stub.
pub fn chunk(message: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    message.chunks(BLOCK_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_is_least_significant_first() {
        // 0x41 + 0x42 * 256
        assert_eq!(pad(b"AB"), BigUint::from(16961u32));
        assert_eq!(pad(&[7]), BigUint::from(7u8));
        assert_eq!(pad(&[]), BigUint::from(0u8));
    }

    #[test]
    fn depad_inverts_pad() {
        for msg in [&b"AB"[..], &[1u8, 2, 3, 255][..], &[255u8; 40][..], &b"x"[..]] {
            assert_eq!(depad(&pad(msg)), msg);
        }
    }

    #[test]
    fn boundary_value_splits_into_two_digits() {
        // 256 is not a byte; it must come back as the digits [0, 1].
        assert_eq!(depad(&BigUint::from(256u32)), vec![0, 1]);
        assert_eq!(depad(&BigUint::from(255u32)), vec![255]);
    }

    #[test]
    fn zero_depads_to_a_single_zero_byte() {
        assert_eq!(depad(&BigUint::from(0u8)), vec![0]);
    }

    #[test]
    fn trailing_zero_bytes_are_lost() {
        assert_eq!(pad(&[0x41, 0x00]), pad(&[0x41]));
        assert_eq!(depad(&pad(&[0x41, 0x00])), vec![0x41]);
    }

    #[test]
    fn chunk_boundaries() {
        let sizes = |len: usize| -> Vec<usize> {
            let msg = vec![1u8; len];
            chunk(&msg).map(<[u8]>::len).collect()
        };
        assert_eq!(sizes(0), Vec::<usize>::new());
        assert_eq!(sizes(1), vec![1]);
        assert_eq!(sizes(255), vec![255]);
        assert_eq!(sizes(256), vec![255, 1]);
        assert_eq!(sizes(510), vec![255, 255]);
        assert_eq!(sizes(600), vec![255, 255, 90]);
    }

    #[test]
    fn chunks_preserve_content_in_order() {
        let msg: Vec<u8> = (0..600u32).map(|i| (i % 251) as u8 + 1).collect();
        let rejoined: Vec<u8> = chunk(&msg).flatten().copied().collect();
        assert_eq!(rejoined, msg);
    }
}
