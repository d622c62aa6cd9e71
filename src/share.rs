use alloc::vec::Vec;

use hashbrown::HashMap;

use super::error::{Error, ParameterError};
use super::field::{FieldElement, FIELD_BYTES};

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

/// A share set: share index (the polynomial's `x`, starting at 1) to share payload.
pub type Shares = HashMap<u32, Share>;

/// The payload of one share: the polynomial's `y` at the share's index, as exactly
/// [`FIELD_BYTES`] big-endian bytes. The index is carried by the [`Shares`] key.
///
/// Usage example:
/// ```
/// use modp_sss::{share_rng, recover, Share, Shares};
/// use core::convert::TryFrom;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
/// # fn send_to_printer(_: u32, _: Vec<u8>) {}
///
/// let mut rng = ChaCha20Rng::from_seed([0x90; 32]);
/// let shares = share_rng(b"hunter2", 2, 3, &mut rng).unwrap();
///
/// // Transmit the share bytes to a printer
/// for (index, share) in &shares {
///     send_to_printer(*index, Vec::from(share));
/// }
///
/// // Read the bytes back from an external source and recover the secret
/// let stored: Vec<(u32, Vec<u8>)> = shares
///     .iter()
///     .take(2)
///     .map(|(index, share)| (*index, Vec::from(share)))
///     .collect();
/// let mut combine = Shares::new();
/// for (index, bytes) in &stored {
///     combine.insert(*index, Share::try_from(bytes.as_slice()).unwrap());
/// }
/// assert_eq!(recover(&combine).unwrap(), b"hunter2".to_vec());
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary, Debug))]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize))]
#[cfg_attr(feature = "zeroize_memory", zeroize(drop))]
pub struct Share {
    /// The y coordinate, big-endian and left-padded with zeros.
    pub y: [u8; FIELD_BYTES],
}

impl Share {
    pub fn as_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.y
    }

    pub(crate) fn to_field(&self) -> FieldElement {
        FieldElement::from_bytes_be(&self.y)
    }
}

impl From<&FieldElement> for Share {
    fn from(value: &FieldElement) -> Share {
        Share {
            y: value.to_bytes_be_padded(),
        }
    }
}

/// Converts a Share to a vector of its 256 payload bytes.
impl From<&Share> for Vec<u8> {
    fn from(s: &Share) -> Vec<u8> {
        s.y.to_vec()
    }
}

impl core::convert::TryFrom<&[u8]> for Share {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Share, Self::Error> {
        let y = <[u8; FIELD_BYTES]>::try_from(s)
            .map_err(|_| ParameterError::InvalidShareLength { len: s.len() })?;
        Ok(Share { y })
    }
}

#[cfg(test)]
mod tests {
    use super::{Share, FIELD_BYTES};
    use crate::error::{Error, ParameterError};
    use crate::field::FieldElement;
    use alloc::{vec, vec::Vec};
    use core::convert::TryFrom;

    #[test]
    fn vec_from_share_works() {
        let mut y = [0u8; FIELD_BYTES];
        y[FIELD_BYTES - 1] = 3;
        let bytes = Vec::from(&Share { y });
        assert_eq!(bytes.len(), FIELD_BYTES);
        assert_eq!(bytes[FIELD_BYTES - 1], 3);
    }

    #[test]
    fn share_from_u8_slice_works() {
        let bytes = vec![7u8; FIELD_BYTES];
        let share = Share::try_from(&bytes[..]).unwrap();
        assert_eq!(share.as_bytes(), &[7u8; FIELD_BYTES]);
    }

    #[test]
    fn share_from_short_slice_fails() {
        let bytes = [1u8, 2, 3];
        assert_eq!(
            Share::try_from(&bytes[..]).err(),
            Some(Error::InvalidParameter(ParameterError::InvalidShareLength {
                len: 3
            }))
        );
    }

    #[test]
    fn share_from_long_slice_fails() {
        let bytes = vec![0u8; FIELD_BYTES + 1];
        assert!(Share::try_from(&bytes[..]).is_err());
    }

    #[test]
    fn share_from_field_element_is_padded() {
        let share = Share::from(&FieldElement::from(0x53));
        assert!(share.y[..FIELD_BYTES - 1].iter().all(|b| *b == 0));
        assert_eq!(share.y[FIELD_BYTES - 1], 0x53);
        assert_eq!(share.to_field(), FieldElement::from(0x53));
    }
}
