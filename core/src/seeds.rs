use std::net::{IpAddr, Ipv6Addr, SocketAddr, SocketAddrV6};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{NODE_NETWORK, ONE_WEEK};

/// Compact fixed seed record compiled into the binary.
///
/// IPv4 peers are stored in their IPv4-mapped IPv6 form.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// Fixed seed peers for main. Regenerate from a fresh crawl before each release.
pub const SEED6_MAIN: &[SeedSpec6] = &[];

/// Fixed seed peers for testnet.
pub const SEED6_TEST: &[SeedSpec6] = &[];

/// A peer address as handed to the address manager.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PeerAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// Last-seen time, in UNIX seconds.
    pub time: u32,
}

impl PeerAddress {
    /// The peer's IP with IPv4-mapped addresses collapsed back to IPv4.
    pub fn ip(&self) -> IpAddr {
        self.addr.ip().to_canonical()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Expands fixed seed records into peer addresses, appending them to `dest`.
///
/// A node only needs one or two seeds: once connected it receives plenty of
/// addresses with newer timestamps. Each seed therefore gets a random last-seen
/// time between one and two weeks ago.
pub fn convert_seed6(dest: &mut Vec<PeerAddress>, data: &[SeedSpec6]) {
    let now = chrono::Utc::now().timestamp();
    convert_seed6_at(dest, data, now, &mut rand::thread_rng());
}

/// [`convert_seed6`] with an explicit clock reading and randomness source.
///
/// Every produced timestamp lies strictly between `now - 2 * ONE_WEEK` and
/// `now - ONE_WEEK`.
pub fn convert_seed6_at<R: Rng + ?Sized>(
    dest: &mut Vec<PeerAddress>,
    data: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) {
    dest.reserve(data.len());
    for seed in data {
        let age = ONE_WEEK + rng.gen_range(1..ONE_WEEK);
        let time = u32::try_from(now - age).unwrap_or(0);
        dest.push(PeerAddress {
            addr: SocketAddr::V6(SocketAddrV6::new(
                Ipv6Addr::from(seed.addr),
                seed.port,
                0,
                0,
            )),
            services: NODE_NETWORK,
            time,
        });
    }
    if !data.is_empty() {
        debug!(count = data.len(), "Converted fixed seed peers");
    }
}
