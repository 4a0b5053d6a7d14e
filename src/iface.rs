//! The read-only view on the platform interface table.
//!
//! Destination sorting only needs to know which kinds of source addresses
//! exist locally, so the table is consumed as a flat snapshot of bound
//! addresses per interface and condensed into a [`SourceSummary`] right
//! away.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::addrsel::SourceSummary;
use netdb_types::ip::HostAddr;

/// IPv6 address slots per interface.
pub const IFACE_IPV6_SLOTS: usize = 3;

/// Upper bound on source candidates consumed across all interfaces.
///
/// Candidates beyond the bound are discarded silently; only the presence
/// of scopes and labels matters, so dropping the tail costs precision in
/// exotic setups only.
pub const SOURCE_CANDIDATE_LIMIT: usize = 6 * (IFACE_IPV6_SLOTS + 1);

/// The addresses bound to a single interface.
///
/// Empty slots are `None`; a slot holding the unspecified address counts
/// as empty as well. Address state (preferred, tentative, deprecated) is
/// not represented, every bound address is a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterfaceAddrs {
    pub v4: Option<Ipv4Addr>,
    pub v6: [Option<Ipv6Addr>; IFACE_IPV6_SLOTS],
}

impl InterfaceAddrs {
    /// The addrs of a loopback interface.
    #[must_use]
    pub const fn loopback() -> Self {
        Self {
            v4: Some(Ipv4Addr::LOCALHOST),
            v6: [Some(Ipv6Addr::LOCALHOST), None, None],
        }
    }

    /// The addrs of an ethernet-like interface with one IPv4 address and
    /// up to [`IFACE_IPV6_SLOTS`] IPv6 addresses.
    #[must_use]
    pub fn eth(v4: Ipv4Addr, v6: &[Ipv6Addr]) -> Self {
        assert!(
            v6.len() <= IFACE_IPV6_SLOTS,
            "cannot bind more than {IFACE_IPV6_SLOTS} ipv6 addrs to one interface"
        );
        let mut slots = [None; IFACE_IPV6_SLOTS];
        for (slot, addr) in slots.iter_mut().zip(v6) {
            *slot = Some(*addr);
        }
        Self {
            v4: Some(v4),
            v6: slots,
        }
    }

    /// An IPv6-only interface.
    #[must_use]
    pub fn eth_v6(v6: &[Ipv6Addr]) -> Self {
        let mut this = Self::eth(Ipv4Addr::UNSPECIFIED, v6);
        this.v4 = None;
        this
    }
}

/// A snapshot source for the per-interface address sets.
pub trait InterfaceTable {
    /// Lists all interfaces with their currently bound addresses.
    fn interfaces(&self) -> Vec<InterfaceAddrs>;
}

impl InterfaceTable for Vec<InterfaceAddrs> {
    fn interfaces(&self) -> Vec<InterfaceAddrs> {
        self.clone()
    }
}

/// Walks the interface table and summarises every candidate source address.
///
/// Emits each present, non-unspecified IPv4 address and IPv6 slot until
/// [`SOURCE_CANDIDATE_LIMIT`] candidates have been consumed; the rest is
/// discarded. Cannot fail.
#[must_use]
pub fn collect_source_summary(table: &dyn InterfaceTable) -> SourceSummary {
    let mut summary = SourceSummary::new();
    let mut emitted = 0;

    'tbl: for iface in table.interfaces() {
        if let Some(v4) = iface.v4 {
            if !v4.is_unspecified() {
                if emitted == SOURCE_CANDIDATE_LIMIT {
                    break 'tbl;
                }
                summary.observe(HostAddr::V4(v4).to_ipv6());
                emitted += 1;
            }
        }
        for addr in iface.v6.iter().flatten() {
            if !addr.is_unspecified() {
                if emitted == SOURCE_CANDIDATE_LIMIT {
                    break 'tbl;
                }
                summary.observe(*addr);
                emitted += 1;
            }
        }
    }

    let (v6_scopes, v4_scopes, labels) = summary.masks();
    tracing::trace!(
        "summarised {emitted} source candidates (v6 scopes {v6_scopes:#x}, v4 scopes {v4_scopes:#x}, labels {labels:#x})"
    );
    summary
}
