//! Twelve-byte document identifiers rendered as 24 hex digits.
//!
//! Layout: 4-byte big-endian creation seconds, 5 bytes of per-process
//! entropy, 3-byte wrapping counter. Identifiers therefore sort roughly by
//! creation time and never collide within one process.

use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoded length of an identifier.
pub const DOCUMENT_ID_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_ENTROPY: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier must be {DOCUMENT_ID_LEN} hexadecimal characters")]
pub struct DocumentIdError;

/// Raw identifier shared by users and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Allocate a new identifier stamped with `created_at`.
    pub fn generate(created_at: DateTime<Utc>) -> Self {
        let seconds = u32::try_from(created_at.timestamp().max(0)).unwrap_or(u32::MAX);
        let entropy = PROCESS_ENTROPY.get_or_init(rand::random::<[u8; 5]>);
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0_u8; 12];
        let (time, rest) = bytes.split_at_mut(4);
        let (random, count) = rest.split_at_mut(5);
        time.copy_from_slice(&seconds.to_be_bytes());
        random.copy_from_slice(entropy);
        count.copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Parse 24 hex digits in either case.
    ///
    /// # Examples
    /// ```
    /// use taskplanner::domain::DocumentId;
    ///
    /// let id = DocumentId::parse("65F1A2B3C4D5E6F708091A2B").expect("well formed");
    /// assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708091a2b");
    /// assert!(DocumentId::parse("xyz").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DocumentIdError> {
        if raw.len() != DOCUMENT_ID_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DocumentIdError);
        }
        let mut bytes = [0_u8; 12];
        hex::decode_to_slice(raw, &mut bytes).map_err(|_| DocumentIdError)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Declare a typed identifier backed by [`DocumentId`].
macro_rules! define_document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(DocumentId);

        impl $name {
            /// Allocate a new identifier stamped with `created_at`.
            pub fn generate(created_at: DateTime<Utc>) -> Self {
                Self(DocumentId::generate(created_at))
            }

            /// Validate textual input.
            pub fn parse(raw: &str) -> Result<Self, DocumentIdError> {
                DocumentId::parse(raw).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DocumentIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }
    };
}

define_document_id! {
    /// Identifier of a user account.
    UserId
}

define_document_id! {
    /// Identifier of a task document.
    TaskId
}
