//! [Shamir's Secret Sharing](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing) for secrets
//! of up to 255 bytes over the 2048-bit MODP prime field of
//! [RFC 3526](https://www.rfc-editor.org/rfc/rfc3526#section-3).
//!
//! The whole secret is a single field element, so every share is one 256 byte big-endian
//! number regardless of the secret's length. Shares produced here are interchangeable with
//! those of any other implementation using the same prime and encoding.
//!
//! # Usage
//! ## (std)
//!
//! ```
//! use modp_sss::{ share, recover, Shares };
//!
//! # #[cfg(feature = "std")]
//! # {
//! // Split "Hello, world!" into 3 shares, any 2 of which recover it
//! let shares = share(b"Hello, world!", 2, 3).unwrap();
//! assert_eq!(shares.len(), 3);
//!
//! // Recover the original secret from shares 1 and 3
//! let combine: Shares = shares.into_iter().filter(|(x, _)| *x != 2).collect();
//! let secret = recover(&combine).unwrap();
//! assert_eq!(secret, b"Hello, world!".to_vec());
//! # }
//! ```
//!
//! ## (no std)
//!
//! ```
//! use modp_sss::{ share_rng, recover };
//! use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
//!
//! // Any cryptographically secure generator can be injected
//! let mut rng = ChaCha20Rng::from_seed([0x90; 32]);
//! let shares = share_rng(&[1, 2, 3, 4], 3, 5, &mut rng).unwrap();
//! let secret = recover(&shares).unwrap();
//! assert_eq!(secret, vec![1, 2, 3, 4]);
//! ```
//!
//! # Encoding
//!
//! The secret is prefixed with the marker byte `'S'` (`0x53`) and read as a big-endian
//! integer, which is the constant term of the sharing polynomial. On recovery the marker is
//! checked and stripped. A missing marker is reported as [`Error::RecoveryFailure`].
//! The marker is a weak sanity check, not an integrity guarantee: a bad share set passes it
//! with probability about 1/256.
//!
//! # Feature flags
//!
//! - `std` — enables [`share`] and [`recover_share`] conveniences fed by `rand::thread_rng`.
//!   Without `std`, use [`share_rng`].
//! - `zeroize_memory` — enables `Zeroize` on [`Share`] to clear memory on drop, and wipes
//!   transient buffers holding the encoded secret or raw coefficient bytes.
//! - `fuzzing` — derives `arbitrary::Arbitrary` for [`Share`].
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod field;
mod math;
mod share;

extern crate alloc;

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};

pub use error::{Error, ParameterError};
pub use field::{
    decode_secret, encode_secret, FieldElement, FIELD_BYTES, MAX_SECRET_LEN, PRIME,
    SECRET_MARKER,
};
pub use share::{Share, Shares};

/// This method is useful when `std` is not available, or to reproduce shares from a seeded
/// generator. For typical usage see the [`share`] function.
///
/// Splits `secret` into `total` shares indexed `1..=total`, any `needed` of which recover it.
/// Coefficients are drawn from `rng`, which must be cryptographically secure.
///
/// Fails with [`Error::InvalidParameter`] when the secret is longer than 255 bytes,
/// `needed < 2` or `needed > total`. No shares are produced in that case.
///
/// Example:
/// ```
/// # use modp_sss::{share_rng, FIELD_BYTES};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = share_rng(&[1, 2], 2, 4, &mut rng).unwrap();
/// assert_eq!(shares.len(), 4);
/// assert!(shares.values().all(|s| s.as_bytes().len() == FIELD_BYTES));
/// ```
pub fn share_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    needed: u32,
    total: u32,
    rng: &mut R,
) -> Result<Shares, Error> {
    if secret.len() > MAX_SECRET_LEN {
        return Err(ParameterError::SecretTooLong { len: secret.len() }.into());
    }
    if needed < 2 {
        return Err(ParameterError::ThresholdTooSmall { needed }.into());
    }
    if needed > total {
        return Err(ParameterError::ThresholdExceedsTotal { needed, total }.into());
    }

    let poly = math::random_polynomial(encode_secret(secret), needed, rng);
    Ok(math::get_evaluator(poly).take(total as usize).collect())
}

/// Splits `secret` into `total` shares, any `needed` of which recover it, drawing the
/// polynomial coefficients from `rand::thread_rng`.
///
/// Example:
/// ```
/// # use modp_sss::{share, Error, ParameterError};
/// let shares = share(b"Secret message", 3, 5).unwrap();
/// assert_eq!(shares.len(), 5);
///
/// // A threshold of 1 would hand the secret to every shareholder
/// assert_eq!(
///     share(b"Secret message", 1, 5).err(),
///     Some(Error::InvalidParameter(ParameterError::ThresholdTooSmall { needed: 1 }))
/// );
/// ```
#[cfg(feature = "std")]
pub fn share(secret: &[u8], needed: u32, total: u32) -> Result<Shares, Error> {
    let mut rng = rand::thread_rng();
    share_rng(secret, needed, total, &mut rng)
}

fn samples(shares: &Shares) -> Result<Vec<(FieldElement, FieldElement)>, Error> {
    if shares.is_empty() {
        return Err(ParameterError::NoShares.into());
    }
    Ok(shares
        .iter()
        .map(|(x, s)| (FieldElement::from(*x), s.to_field()))
        .collect())
}

/// Given a set of shares, recovers the original secret by Lagrange interpolation at `x = 0`.
///
/// The threshold is not carried by the shares, so the number of shares is not checked.
/// Too few or inconsistent shares usually fail the marker check with
/// [`Error::RecoveryFailure`], but may also yield an unrelated byte string.
///
/// Example:
/// ```
/// # use modp_sss::{share_rng, recover, Error, Shares};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// # let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let mut shares = share_rng(&[1], 3, 5, &mut rng).unwrap();
/// // Recover original secret from shares
/// assert_eq!(recover(&shares).unwrap(), vec![1]);
/// // Remove shares for demonstration purposes
/// shares.clear();
/// assert!(matches!(recover(&shares), Err(Error::InvalidParameter(_))));
/// ```
pub fn recover(shares: &Shares) -> Result<Vec<u8>, Error> {
    let root = math::interpolate(&samples(shares)?);
    decode_secret(&root).ok_or(Error::RecoveryFailure)
}

/// Given a set of shares, reissues the share at `index`, e.g. to replace a lost one.
///
/// Like [`recover`], the result is only meaningful when at least `needed` consistent shares
/// are supplied. Index 0 is rejected, since the polynomial's value there is the secret.
///
/// Example:
/// ```
/// # use modp_sss::{share_rng, recover_share, Shares};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// # let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = share_rng(&[1, 2, 3, 4], 2, 3, &mut rng).unwrap();
/// let known: Shares = shares.iter().filter(|(x, _)| **x != 2).map(|(x, s)| (*x, s.clone())).collect();
/// let reissued = recover_share(&known, 2).unwrap();
/// assert!(reissued == shares[&2]);
/// ```
pub fn recover_share(shares: &Shares, index: u32) -> Result<Share, Error> {
    if index == 0 {
        return Err(ParameterError::ReservedIndex.into());
    }
    let y = math::interpolate_at(&samples(shares)?, &FieldElement::from(index));
    Ok(Share::from(&y))
}

#[cfg(test)]
mod tests {
    use super::{recover, recover_share, share_rng, Error, ParameterError, Share, Shares};
    use alloc::vec::Vec;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    fn make_shares(secret: &[u8], needed: u32, total: u32) -> Shares {
        let mut rng = ChaCha20Rng::from_seed([10; 32]);
        share_rng(secret, needed, total, &mut rng).unwrap()
    }

    fn subset(shares: &Shares, indices: &[u32]) -> Shares {
        indices.iter().map(|x| (*x, shares[x].clone())).collect()
    }

    #[test]
    fn test_integration_works() {
        let shares = make_shares(&[1, 2, 3, 4], 10, 20);
        let secret = recover(&shares).unwrap();
        assert_eq!(secret, [1, 2, 3, 4].to_vec());
    }

    #[test]
    fn test_indices_cover_one_to_total() {
        let shares = make_shares(b"abc", 3, 7);
        let mut keys: Vec<u32> = shares.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, (1..=7).collect::<Vec<u32>>());
    }

    #[test]
    fn test_same_seed_same_shares() {
        let a = make_shares(b"abc", 2, 3);
        let b = make_shares(b"abc", 2, 3);
        for x in 1..=3 {
            assert!(a[&x] == b[&x]);
        }
    }

    #[test]
    fn test_insufficient_shares_err() {
        let shares = make_shares(b"Secret", 3, 5);
        match recover(&subset(&shares, &[1, 2])) {
            Ok(secret) => assert_ne!(secret, b"Secret".to_vec()),
            Err(e) => assert_eq!(e, Error::RecoveryFailure),
        }
    }

    #[test]
    fn test_mixed_splits_do_not_recover() {
        let first = make_shares(b"Secret", 2, 3);
        let mut rng = ChaCha20Rng::from_seed([11; 32]);
        let second = share_rng(b"Secret", 2, 3, &mut rng).unwrap();

        let mut mixed = subset(&first, &[1]);
        mixed.insert(2, second[&2].clone());
        match recover(&mixed) {
            Ok(secret) => assert_ne!(secret, b"Secret".to_vec()),
            Err(e) => assert_eq!(e, Error::RecoveryFailure),
        }
    }

    #[test]
    fn test_empty_shares_err() {
        assert_eq!(
            recover(&Shares::new()),
            Err(Error::InvalidParameter(ParameterError::NoShares))
        );
    }

    #[test]
    fn test_reshare_works() {
        let shares = make_shares(&[1, 2, 3, 4], 3, 5);
        let known = subset(&shares, &[1, 3, 5]);

        for x in [2u32, 4] {
            let reissued = recover_share(&known, x).unwrap();
            assert!(reissued == shares[&x]);
        }

        let mut with_reissued = subset(&shares, &[1, 5]);
        with_reissued.insert(4, recover_share(&known, 4).unwrap());
        assert_eq!(recover(&with_reissued).unwrap(), [1, 2, 3, 4].to_vec());
    }

    #[test]
    fn test_reshare_rejects_reserved_index() {
        let shares = make_shares(&[1], 2, 3);
        assert!(matches!(
            recover_share(&shares, 0),
            Err(Error::InvalidParameter(ParameterError::ReservedIndex))
        ));
        assert!(matches!(
            recover_share(&Shares::new(), 1),
            Err(Error::InvalidParameter(ParameterError::NoShares))
        ));
    }

    #[test]
    fn test_share_round_trips_through_bytes() {
        let shares = make_shares(b"bytes", 2, 2);
        let reparsed: Shares = shares
            .iter()
            .map(|(x, s)| (*x, Share::try_from(Vec::from(s).as_slice()).unwrap()))
            .collect();
        assert_eq!(recover(&reparsed).unwrap(), b"bytes".to_vec());
    }
}
