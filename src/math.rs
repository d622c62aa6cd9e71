// A module which contains necessary algorithms to compute Shamir's shares and recover secrets

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

use super::field::{prime, FieldElement, FIELD_BYTES};
use super::share::Share;

// Draws a uniformly distributed field element. Out of range draws are rejected and redrawn
// rather than reduced, which would skew the distribution towards small values.
pub fn random_coefficient<R: RngCore + CryptoRng>(rng: &mut R) -> FieldElement {
    let p = prime();
    let mut bytes = [0u8; FIELD_BYTES];
    loop {
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < p {
            #[cfg(feature = "zeroize_memory")]
            bytes.zeroize();
            return FieldElement::new(candidate);
        }
    }
}

// Generates `k` polynomial coefficients, being the first one `s` and the others uniformly random.
// Coefficient degrees go from lower to higher in the returned vector order.
pub fn random_polynomial<R: RngCore + CryptoRng>(
    s: FieldElement,
    k: u32,
    rng: &mut R,
) -> Vec<FieldElement> {
    let mut poly = Vec::with_capacity(k as usize);
    poly.push(s);

    for _ in 1..k {
        poly.push(random_coefficient(rng));
    }

    poly
}

// Evaluates `poly` at `x` with Horner's rule.
pub fn evaluate(poly: &[FieldElement], x: &FieldElement) -> FieldElement {
    poly.iter()
        .rev()
        .fold(FieldElement::zero(), |acc, c| acc * x.clone() + c.clone())
}

// Returns an iterator over the points of `poly`, as `(x, share)` pairs.
// The iterator starts at `x = 1`; index 0 is never emitted since it holds the secret.
pub fn get_evaluator(poly: Vec<FieldElement>) -> impl Iterator<Item = (u32, Share)> {
    (1..=u32::MAX).map(move |x| {
        let y = evaluate(&poly, &FieldElement::from(x));
        (x, Share::from(&y))
    })
}

/// Takes N sample points `(x_i, y_i)` and returns the value at a given `x` using Lagrange
/// interpolation over the prime field. Each basis coefficient is built as a numerator product
/// and a denominator product, so only one inversion is paid per sample.
pub fn interpolate_at(samples: &[(FieldElement, FieldElement)], x: &FieldElement) -> FieldElement {
    samples
        .iter()
        .map(|(x_i, y_i)| {
            let (num, denom) = samples.iter().filter(|(x_j, _)| x_j != x_i).fold(
                (FieldElement::one(), FieldElement::one()),
                |(num, denom), (x_j, _)| {
                    (
                        num * (x.clone() - x_j.clone()),
                        denom * (x_i.clone() - x_j.clone()),
                    )
                },
            );
            y_i.clone() * (num / denom)
        })
        .sum()
}

// Finds the [root of the Lagrange polynomial](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing#Computationally_efficient_approach),
// i.e. its value at `x = 0`.
pub fn interpolate(samples: &[(FieldElement, FieldElement)]) -> FieldElement {
    interpolate_at(samples, &FieldElement::zero())
}
