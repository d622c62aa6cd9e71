// Arithmetic over the prime field defined by the 2048-bit MODP group of RFC 3526, section 3,
// and the reversible mapping between secret bytes and field elements.

use alloc::vec::Vec;
use core::iter::{Product, Sum};
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

/// Width in bytes of a field element once serialized into a share.
pub const FIELD_BYTES: usize = 256;

/// Maximum secret length. The marker byte plus 255 secret bytes always stay below the prime.
pub const MAX_SECRET_LEN: usize = FIELD_BYTES - 1;

/// Sentinel prepended to every secret before it is mapped into the field.
pub const SECRET_MARKER: u8 = b'S';

/// Big-endian bytes of the 2048-bit MODP prime.
pub const PRIME: [u8; FIELD_BYTES] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2,
    0x21, 0x68, 0xc2, 0x34, 0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1,
    0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74, 0x02, 0x0b, 0xbe, 0xa6,
    0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d,
    0xf2, 0x5f, 0x14, 0x37, 0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45,
    0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6, 0xf4, 0x4c, 0x42, 0xe9,
    0xa6, 0x37, 0xed, 0x6b, 0x0b, 0xff, 0x5c, 0xb6, 0xf4, 0x06, 0xb7, 0xed,
    0xee, 0x38, 0x6b, 0xfb, 0x5a, 0x89, 0x9f, 0xa5, 0xae, 0x9f, 0x24, 0x11,
    0x7c, 0x4b, 0x1f, 0xe6, 0x49, 0x28, 0x66, 0x51, 0xec, 0xe4, 0x5b, 0x3d,
    0xc2, 0x00, 0x7c, 0xb8, 0xa1, 0x63, 0xbf, 0x05, 0x98, 0xda, 0x48, 0x36,
    0x1c, 0x55, 0xd3, 0x9a, 0x69, 0x16, 0x3f, 0xa8, 0xfd, 0x24, 0xcf, 0x5f,
    0x83, 0x65, 0x5d, 0x23, 0xdc, 0xa3, 0xad, 0x96, 0x1c, 0x62, 0xf3, 0x56,
    0x20, 0x85, 0x52, 0xbb, 0x9e, 0xd5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6d,
    0x67, 0x0c, 0x35, 0x4e, 0x4a, 0xbc, 0x98, 0x04, 0xf1, 0x74, 0x6c, 0x08,
    0xca, 0x18, 0x21, 0x7c, 0x32, 0x90, 0x5e, 0x46, 0x2e, 0x36, 0xce, 0x3b,
    0xe3, 0x9e, 0x77, 0x2c, 0x18, 0x0e, 0x86, 0x03, 0x9b, 0x27, 0x83, 0xa2,
    0xec, 0x07, 0xa2, 0x8f, 0xb5, 0xc5, 0x5d, 0xf0, 0x6f, 0x4c, 0x52, 0xc9,
    0xde, 0x2b, 0xcb, 0xf6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7c,
    0xea, 0x95, 0x6a, 0xe5, 0x15, 0xd2, 0x26, 0x18, 0x98, 0xfa, 0x05, 0x10,
    0x15, 0x72, 0x8e, 0x5a, 0x8a, 0xac, 0xaa, 0x68, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff,
];

pub(crate) fn prime() -> BigUint {
    BigUint::from_bytes_be(&PRIME)
}

/// An element of the prime field, always kept in its canonical range `[0, P)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Reduces `value` modulo the prime.
    pub fn new(value: BigUint) -> Self {
        FieldElement(value % prime())
    }

    /// Interprets `bytes` as a big-endian unsigned integer and reduces it into the field.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Serializes the element as exactly [`FIELD_BYTES`] big-endian bytes, left-padded with zeros.
    pub fn to_bytes_be_padded(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.0.to_bytes_be();
        let mut padded = [0u8; FIELD_BYTES];
        padded[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        padded
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Multiplicative inverse by Fermat's little theorem, `a^(P-2)`. Zero maps to zero.
    pub fn inverse(&self) -> Self {
        let p = prime();
        let exponent = &p - BigUint::from(2u32);
        FieldElement(self.0.modpow(&exponent, &p))
    }
}

impl From<u32> for FieldElement {
    fn from(x: u32) -> Self {
        FieldElement(BigUint::from(x))
    }
}

impl Zero for FieldElement {
    fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for FieldElement {
    fn one() -> Self {
        FieldElement(BigUint::one())
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: Self) -> Self::Output {
        let p = prime();
        let sum = self.0 + other.0;
        if sum >= p {
            FieldElement(sum - p)
        } else {
            FieldElement(sum)
        }
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: Self) -> Self::Output {
        if self.0 >= other.0 {
            FieldElement(self.0 - other.0)
        } else {
            FieldElement(prime() - (other.0 - self.0))
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        if self.0.is_zero() {
            self
        } else {
            FieldElement(prime() - self.0)
        }
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement((self.0 * rhs.0) % prime())
    }
}

impl Div for FieldElement {
    type Output = FieldElement;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FieldElement::zero(), |acc, x| acc + x)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FieldElement::one(), |acc, x| acc * x)
    }
}

/// Maps a secret of at most [`MAX_SECRET_LEN`] bytes into the field by prepending [`SECRET_MARKER`].
/// The marker keeps leading zero bytes of the secret and lets decoding tell a real secret from noise.
pub fn encode_secret(secret: &[u8]) -> FieldElement {
    debug_assert!(secret.len() <= MAX_SECRET_LEN);

    let mut marked = Vec::with_capacity(secret.len() + 1);
    marked.push(SECRET_MARKER);
    marked.extend_from_slice(secret);
    let value = BigUint::from_bytes_be(&marked);

    #[cfg(feature = "zeroize_memory")]
    marked.zeroize();

    FieldElement(value)
}

/// Inverse of [`encode_secret`]. Returns `None` when the minimal big-endian form of `value`
/// does not start with the marker.
pub fn decode_secret(value: &FieldElement) -> Option<Vec<u8>> {
    let mut bytes = value.0.to_bytes_be();
    if bytes.first() != Some(&SECRET_MARKER) {
        #[cfg(feature = "zeroize_memory")]
        bytes.zeroize();
        return None;
    }
    bytes.remove(0);
    Some(bytes)
}
