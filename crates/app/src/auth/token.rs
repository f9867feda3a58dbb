//! Access tokens.
//!
//! A token reads `pantry.<token uuid>.<secret>`, both parts lowercase hex.
//! Only a SHA-256 verifier binding the token, its owner and the secret is
//! stored, so a leaked table cannot be replayed.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::users::records::UserUuid;

const TOKEN_PREFIX: &str = "pantry";

const SECRET_BYTES: usize = 32;

/// Why a presented string is not an access token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenFormatError {
    #[error("access token must look like pantry.<id>.<secret>")]
    Malformed,

    #[error("access token id is not a UUID")]
    BadId,

    #[error("access token secret must be {} hex characters", SECRET_BYTES * 2)]
    BadSecret,
}

/// Random part of a token. Wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
struct Secret([u8; SECRET_BYTES]);

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(**redacted**)")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A token as handed to, and presented by, a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    uuid: Uuid,
    secret: Secret,
}

impl AccessToken {
    /// Mint a fresh token with a random secret.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0_u8; SECRET_BYTES];

        OsRng.fill_bytes(&mut secret);

        Self {
            uuid: Uuid::now_v7(),
            secret: Secret(secret),
        }
    }

    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The full token text. Show it to the owner once and never log it.
    #[must_use]
    pub fn reveal(&self) -> String {
        format!(
            "{TOKEN_PREFIX}.{}.{}",
            self.uuid.simple(),
            to_hex(&self.secret.0)
        )
    }

    /// Hex SHA-256 verifier stored in place of the token.
    #[must_use]
    pub fn verifier(&self, owner: UserUuid) -> String {
        let mut hasher = Sha256::new();

        hasher.update(self.uuid.as_bytes());
        hasher.update(owner.into_uuid().as_bytes());
        hasher.update(self.secret.0);

        to_hex(&hasher.finalize())
    }

    /// Whether `stored` is this token's verifier for `owner`, compared in
    /// constant time.
    #[must_use]
    pub fn matches(&self, owner: UserUuid, stored: &str) -> bool {
        let computed = self.verifier(owner);

        computed.len() == stored.len()
            && computed
                .bytes()
                .zip(stored.bytes())
                .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
                == 0
    }
}

impl FromStr for AccessToken {
    type Err = TokenFormatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split('.');

        let (Some(TOKEN_PREFIX), Some(uuid), Some(secret), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenFormatError::Malformed);
        };

        let uuid = Uuid::try_parse(uuid).map_err(|_error| TokenFormatError::BadId)?;
        let secret = from_hex(secret).ok_or(TokenFormatError::BadSecret)?;

        Ok(Self {
            uuid,
            secret: Secret(secret),
        })
    }
}

fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);

    for nibble in bytes.iter().flat_map(|byte| [byte >> 4, byte & 0x0f]) {
        hex.extend(char::from_digit(u32::from(nibble), 16));
    }

    hex
}

fn from_hex(hex: &str) -> Option<[u8; SECRET_BYTES]> {
    if hex.len() != SECRET_BYTES * 2 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let mut secret = [0_u8; SECRET_BYTES];

    for (byte, pair) in secret.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
        *byte = u8::from_str_radix(std::str::from_utf8(pair).ok()?, 16).ok()?;
    }

    Some(secret)
}
