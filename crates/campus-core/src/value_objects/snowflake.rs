//! Snowflake ID - 64-bit time-ordered unique identifier
//!
//! Layout:
//! - Bits 63-22: milliseconds since the custom epoch
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Because the high bits are the creation timestamp, the natural integer
//! ordering of Snowflakes is creation order, which makes them usable as
//! pagination cursors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;

/// 64-bit time-ordered unique ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2023-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_672_531_200_000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extract the creation timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    /// Extract the worker ID (0-1023)
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & ((1 << WORKER_BITS) - 1)) as u16
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl<'de> Visitor<'de> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a snowflake ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Thread-safe Snowflake ID generator
///
/// Generates unique IDs at up to 4096 per millisecond per worker. The
/// generator keeps its whole state (last timestamp plus sequence) packed in
/// a single atomic word, so claiming an ID is one compare-exchange.
pub struct SnowflakeGenerator {
    worker_id: u16,
    // (millis << SEQUENCE_BITS) | sequence
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < (1 << WORKER_BITS), "Worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        loop {
            let now = current_millis();
            let state = self.state.load(Ordering::Acquire);
            let last = state >> SEQUENCE_BITS;
            let sequence = state & MAX_SEQUENCE;

            // If the clock went backwards, keep issuing under the last
            // claimed millisecond until real time catches up.
            let next = if now > last {
                now << SEQUENCE_BITS
            } else if sequence < MAX_SEQUENCE {
                state + 1
            } else {
                // Sequence exhausted for this millisecond
                std::hint::spin_loop();
                continue;
            };

            if self
                .state
                .compare_exchange(state, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                let millis = next >> SEQUENCE_BITS;
                let sequence = next & MAX_SEQUENCE;
                let id = ((millis - Snowflake::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                    | ((self.worker_id as i64) << SEQUENCE_BITS)
                    | sequence;
                return Snowflake::new(id);
            }
            // Lost the race to another thread, retry
        }
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
#[inline]
fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
