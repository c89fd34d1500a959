/// Probabilistic primality verification.
pub mod ver {
    use num_bigint::{BigUint, RandBigInt};
    use num_integer::Integer;
    use num_traits::One;
    use rand::thread_rng;

    /// Miller-Rabin test with `rounds` random witnesses.
    ///
    /// Writes `n - 1` as `s * 2^r` with `s` odd, then checks for each
    /// witness `a` in `[2, n-2]` that the sequence `a^s, a^(2s), ...`
    /// behaves like it would for a prime modulus. A composite survives
    /// one round with probability at most 1/4, so a false positive slips
    /// through at most once in `4^rounds` calls. Callers pick `rounds`
    /// with that risk in mind; there is no certainty on the true branch.
    pub fn is_prime(n: &BigUint, rounds: u32) -> bool {
        let two = BigUint::from(2u8);
        if n < &two {
            return false;
        }
        if n == &two || n == &BigUint::from(3u8) {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let n_minus_one = n - 1u32;
        let mut s = n_minus_one.clone();
        let mut r = 0u32;
        while s.is_even() {
            s >>= 1;
            r += 1;
        }

        let mut rng = thread_rng();
        'rounds: for _ in 0..rounds {
            // Upper bound is exclusive, so this draws from [2, n-2].
            let a = rng.gen_biguint_range(&two, &n_minus_one);
            let mut x = a.modpow(&s, n);
            if x.is_one() || x == n_minus_one {
                continue 'rounds;
            }
            for _ in 0..r - 1 {
                x = x.modpow(&two, n);
                if x.is_one() {
                    return false;
                }
                if x == n_minus_one {
                    continue 'rounds;
                }
            }
            return false;
        }
        true
    }
}

/// Prime number generation.
pub mod gen {
    use num_bigint::{BigUint, RandBigInt};
    use num_traits::One;
    use rand::thread_rng;

    use super::ver;
    use crate::algo;

    /// Draws uniformly from `[lower, upper]` (both ends inclusive) until
    /// a draw passes [`ver::is_prime`], then returns it.
    ///
    /// Loops forever if the range holds no prime. For ranges near
    /// `2^1024` the prime density makes the expected draw count a few
    /// hundred, so callers just wait it out.
    pub fn rand_prime(lower: &BigUint, upper: &BigUint, rounds: u32) -> BigUint {
        let mut rng = thread_rng();
        let above = upper + 1u32;
        loop {
            let candidate = rng.gen_biguint_range(lower, &above);
            if ver::is_prime(&candidate, rounds) {
                return candidate;
            }
        }
    }

    /// Smallest prime `>= start` that is coprime to `coprime_to`, found
    /// by linear scan.
    ///
    /// Scanning from 2 against an RSA totient lands on a single-digit
    /// prime nearly always, since the totient has few small factors.
    pub fn first_coprime(start: &BigUint, coprime_to: &BigUint, rounds: u32) -> BigUint {
        let mut candidate = start.clone();
        loop {
            if ver::is_prime(&candidate, rounds) && algo::gcd(&candidate, coprime_to).is_one() {
                return candidate;
            }
            candidate += 1u32;
        }
    }
}
