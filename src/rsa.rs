use num_bigint::{BigUint, ToBigInt};
use num_traits::Signed;

use crate::config::Config;
use crate::prime::gen;
use crate::{algo, codec};

/// Rsa public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    e: BigUint,
    n: BigUint,
}

/// Rsa private key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    d: BigUint,
    n: BigUint,
}

/// A freshly generated key: the modulus with both exponents.
///
/// Hand out [`KeyPair::public`] and keep [`KeyPair::private`] to
/// yourself. The pair itself can encrypt and decrypt directly, which is
/// convenient for local round trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

impl PublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { e, n }
    }

    /// Encrypts one padded block.
    ///
    /// # Panic
    ///
    /// Panics if `m` is not strictly below the modulus. Blocks coming
    /// out of the codec fit any modulus of two 1024-bit primes, so a
    /// violation means the key is too small for the block cap.
    pub fn encrypt_block(&self, m: &BigUint) -> BigUint {
        assert!(m < &self.n, "block does not fit the modulus");
        m.modpow(&self.e, &self.n)
    }

    /// Chunks, pads and encrypts a whole message. Deterministic: the
    /// same message under the same key always yields the same blocks.
    pub fn encrypt(&self, message: &[u8]) -> Vec<BigUint> {
        codec::chunk(message)
            .map(|block| self.encrypt_block(&codec::pad(block)))
            .collect()
    }

    /// Get a reference to the public key's e.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the public key's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl PrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Self {
        Self { d, n }
    }

    /// Decrypts one block.
    ///
    /// # Panic
    ///
    /// Panics if `c` is not strictly below the modulus, which cannot
    /// happen for blocks produced under the matching public key.
    pub fn decrypt_block(&self, c: &BigUint) -> BigUint {
        assert!(c < &self.n, "block does not fit the modulus");
        c.modpow(&self.d, &self.n)
    }

    /// Decrypts a block sequence and joins the recovered chunks back
    /// into the message.
    pub fn decrypt(&self, blocks: &[BigUint]) -> Vec<u8> {
        blocks
            .iter()
            .flat_map(|c| codec::depad(&self.decrypt_block(c)))
            .collect()
    }

    /// Get a reference to the private key's d.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Get a reference to the private key's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl KeyPair {
    /// The half of the pair that is safe to publish.
    pub fn public(&self) -> PublicKey {
        PublicKey {
            e: self.e.clone(),
            n: self.n.clone(),
        }
    }

    /// The half of the pair that stays with the owner.
    pub fn private(&self) -> PrivateKey {
        PrivateKey {
            d: self.d.clone(),
            n: self.n.clone(),
        }
    }

    pub fn encrypt(&self, message: &[u8]) -> Vec<BigUint> {
        self.public().encrypt(message)
    }

    pub fn decrypt(&self, blocks: &[BigUint]) -> Vec<u8> {
        self.private().decrypt(blocks)
    }

    /// Get a reference to the key pair's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Get a reference to the key pair's e.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the key pair's d.
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

/// Generates a key pair with primes drawn from the configured range.
///
/// Both primes come from the same inclusive range, drawn independently.
/// The public exponent is the first prime coprime to the totient when
/// scanning up from 2, so it lands on a single-digit value nearly
/// always; anyone expecting the conventional 65537 should know this
/// format never used it.
pub fn generate_keypair(cfg: &Config) -> KeyPair {
    let p = gen::rand_prime(&cfg.prime_min, &cfg.prime_max, cfg.rounds);
    let q = gen::rand_prime(&cfg.prime_min, &cfg.prime_max, cfg.rounds);
    derive_keypair(p, q, cfg.rounds)
}

/// Assembles the pair from two primes.
///
/// The raw inverse of `e` can come back negative; adding the totient
/// until it turns positive lands it in `(0, phi)`.
#[allow(clippy::many_single_char_names)]
fn derive_keypair(p: BigUint, q: BigUint, rounds: u32) -> KeyPair {
    let n = &p * &q;
    let phi = (p - 1u32) * (q - 1u32);
    let e = gen::first_coprime(&BigUint::from(2u8), &phi, rounds);
    let mut d = algo::mod_inverse(&e, &phi).expect("e was picked coprime to phi");
    let phi = phi.to_bigint().unwrap();
    while d.is_negative() {
        d += &phi;
    }
    KeyPair {
        n,
        e,
        d: d.to_biguint().unwrap(),
    }
}
