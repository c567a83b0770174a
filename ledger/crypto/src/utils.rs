use crate::{CryptoError, CryptoResult};

/// Try cast a slice to a fixed length array. Error if the size is incorrect.
pub fn to_sized<const S: usize>(data: &[u8]) -> CryptoResult<[u8; S]> {
    data.try_into().map_err(|_| CryptoError::IncorrectLength {
        expect: S,
        actual: data.len(),
    })
}

/// Truncate a slice to a fixed length array, keeping the _last_ `S` bytes.
///
/// ## Panics
///
/// Panic if the input slice's length is smaller than the output length.
pub fn truncate<const S: usize>(data: &[u8]) -> [u8; S] {
    debug_assert!(
        data.len() >= S,
        "can't truncate a slice of length {} to a longer length {}",
        data.len(),
        S
    );

    #[allow(
        clippy::unwrap_used,
        reason = "we have ensured the slice has a length equal or greater than S; its last S bytes necessarily have length S"
    )]
    data[data.len() - S..].try_into().unwrap()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_sized_rejects_wrong_length() {
        assert_eq!(to_sized::<2>(&[1, 2]), Ok([1, 2]));
        assert_eq!(
            to_sized::<2>(&[1, 2, 3]),
            Err(CryptoError::IncorrectLength {
                expect: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn truncate_keeps_tail() {
        assert_eq!(truncate::<2>(&[1, 2, 3, 4]), [3, 4]);
    }
}
