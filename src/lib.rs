//! Textbook RSA over big integers: probabilistic prime generation, the
//! classic n/e/d key algebra, a base-256 block codec and an armored
//! text format for moving keys and ciphertext around as plain text.
//!
//! Nothing here is hardened cryptography. Blocks are encrypted raw,
//! with no padding scheme and no integrity tag, exactly as the textbook
//! construction goes. Treat it as a study implementation.
//!
//! ```
//! use num_bigint::BigUint;
//! use schoolbook_rsa::{armor, config::Config, rsa};
//!
//! // Small primes keep the example quick; the defaults are 1024-bit.
//! let cfg = Config {
//!     prime_min: BigUint::from(1u8) << 128u32,
//!     prime_max: BigUint::from(1u8) << 129u32,
//!     ..Config::default()
//! };
//!
//! let pair = rsa::generate_keypair(&cfg);
//! let blocks = pair.encrypt(b"attack at dawn");
//!
//! let armored = armor::armor_ciphertext(&cfg, &blocks);
//! let received = armor::parse_ciphertext(&cfg, &armored).unwrap();
//! assert_eq!(pair.decrypt(&received), b"attack at dawn");
//! ```

mod algo;

/// Module dedicated to the armored text format for keys and ciphertext
pub mod armor;

/// Module dedicated to the byte to big integer block mapping
pub mod codec;

/// Module dedicated to the generation and armoring parameters
pub mod config;

/// Module dedicated to the prime number generation and verification
pub mod prime;

/// Module dedicated to the rsa keys and the block cipher
pub mod rsa;
