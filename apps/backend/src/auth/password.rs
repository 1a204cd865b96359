//! Password digests stored in the users collection.
//!
//! A password is stored as the lowercase hex SHA-256 of its UTF-8 bytes. There
//! is no per-user salt; the stored format must stay readable by existing
//! `users.json` files.

use sha2::{Digest, Sha256};

pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    hash_password(plaintext).eq_ignore_ascii_case(stored_hash)
}
