//! Version 1 byte source
//!
//! A version 1 UUID packs a 60-bit count of 100-nanosecond intervals since 1582-10-15 00:00:00
//! UTC (the start of the Gregorian calendar) together with a clock sequence and a node ID:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|        clock_seq          |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The `ver` and `var` fields are left to [`stamp()`](crate::stamp()).

use super::ByteSource;
use crate::{Error, RandError, RandSource};

/// Number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// A trait that defines the system clock interface for [`TimeBasedSource`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in 100-nanosecond intervals.
    fn unix_ts_ticks(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ticks(&mut self) -> u64 {
        use std::time;
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        elapsed.as_secs() * 10_000_000 + u64::from(elapsed.subsec_nanos() / 100)
    }
}

/// A network-interface-like record that optionally carries a hardware address.
///
/// The crate never enumerates the interfaces of the host; callers collect them and pass them in
/// through [`Configuration::with_interfaces`](crate::Configuration::with_interfaces).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Interface {
    /// Interface name, for diagnostics only.
    pub name: String,

    /// Hardware (MAC) address of the interface, if any.
    pub hardware_addr: Option<Vec<u8>>,
}

impl Interface {
    /// Creates an interface record.
    pub fn new(name: impl Into<String>, hardware_addr: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            hardware_addr,
        }
    }
}

/// Produces the 60-bit timestamps of version 1 UUIDs and disambiguates identical clock readings.
///
/// When the clock returns the same reading as in the previous call, an internal counter is
/// incremented and added to the timestamp. The counter is never reset, so it also pushes the
/// timestamps of later readings forward.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
struct TimestampFactory<T> {
    clock: T,
    last_instant: Option<u64>,
    counter: u64,
}

impl<T: TimeSource> TimestampFactory<T> {
    const fn new(clock: T) -> Self {
        Self {
            clock,
            last_instant: None,
            counter: 0,
        }
    }

    /// Returns the next timestamp, in 100-nanosecond intervals since 1582-10-15.
    fn next_timestamp(&mut self) -> u64 {
        let now = self.clock.unix_ts_ticks();
        if self.last_instant == Some(now) {
            self.counter += 1;
            log::trace!("clock reading repeated; collision counter at {}", self.counter);
        }
        self.last_instant = Some(now);

        UUID_EPOCH_OFFSET
            .wrapping_add(now)
            .wrapping_add(self.counter)
    }
}

/// A byte source that lays out a timestamp, a clock sequence, and a node ID.
///
/// This type is not synchronized: share a generator built on it across threads through
/// [`SharedGenerator`](crate::SharedGenerator) or another form of mutual exclusion.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TimeBasedSource<T> {
    clock_seq: [u8; 2],
    node: [u8; 6],
    timestamps: TimestampFactory<T>,
}

impl<T: TimeSource> TimeBasedSource<T> {
    /// Creates a byte source, resolving the node ID from `interfaces` and drawing the clock
    /// sequence from `rng`.
    ///
    /// The node ID is the hardware address of the first interface that has a non-empty one. When
    /// no such interface exists, six random bytes are used instead, with the multicast bit set so
    /// that the value cannot collide with a real IEEE 802 address.
    pub fn new<R: RandSource + ?Sized>(
        interfaces: &[Interface],
        rng: &mut R,
        clock: T,
    ) -> Result<Self, Error> {
        let node = resolve_node(interfaces, rng).map_err(Error::NodeResolution)?;

        let mut clock_seq = [0u8; 2];
        rng.fill_exact(&mut clock_seq)
            .map_err(Error::ClockSequence)?;

        Ok(Self {
            clock_seq,
            node,
            timestamps: TimestampFactory::new(clock),
        })
    }

    /// Returns the clock sequence, which is fixed for the lifetime of the source.
    pub const fn clock_sequence(&self) -> [u8; 2] {
        self.clock_seq
    }

    /// Returns the node ID.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }
}

impl<T: TimeSource> ByteSource for TimeBasedSource<T> {
    fn read(&mut self, dest: &mut [u8; 16]) -> Result<usize, RandError> {
        let timestamp = self.timestamps.next_timestamp().to_be_bytes();

        dest[0..4].copy_from_slice(&timestamp[4..8]);
        dest[4..6].copy_from_slice(&timestamp[2..4]);
        dest[6..8].copy_from_slice(&timestamp[0..2]);
        dest[8..10].copy_from_slice(&self.clock_seq);
        dest[10..16].copy_from_slice(&self.node);

        Ok(dest.len())
    }
}

/// Returns the first non-empty hardware address fitted into six bytes, or a random multicast node
/// ID if no interface has one.
fn resolve_node<R: RandSource + ?Sized>(
    interfaces: &[Interface],
    rng: &mut R,
) -> Result<[u8; 6], RandError> {
    let found = interfaces.iter().find_map(|ift| {
        ift.hardware_addr
            .as_deref()
            .filter(|addr| !addr.is_empty())
            .map(|addr| (ift.name.as_str(), addr))
    });

    let mut node = [0u8; 6];
    if let Some((name, addr)) = found {
        let len = addr.len().min(node.len());
        node[..len].copy_from_slice(&addr[..len]);
        log::debug!("using hardware address of interface {:?} as node id", name);
    } else {
        rng.fill_exact(&mut node)?;
        node[0] |= 0x01;
        log::debug!("no hardware address found; using random node id");
    }
    Ok(node)
}
