use std::sync::atomic::{AtomicI32, Ordering};

use crate::addrinfo::AddressFamily;
use netdb_types::ip::HostAddr;

/// The process-wide error cell of the legacy lookup surface.
static H_ERRNO: AtomicI32 = AtomicI32::new(0);

/// Reads the legacy host-lookup error integer.
///
/// [`gethostbyname`](crate::Netdb::gethostbyname) stores
/// [`HostError::HostNotFound`](crate::HostError::HostNotFound) here on a
/// miss, mirroring the classical global `h_errno`. The cell is shared by
/// the whole process; callers running the legacy surface from several
/// threads at once must serialize around it. The reentrant entry point
/// never touches it.
#[must_use]
pub fn h_errno() -> i32 {
    H_ERRNO.load(Ordering::Relaxed)
}

pub(crate) fn set_h_errno(code: i32) {
    H_ERRNO.store(code, Ordering::Relaxed);
}

/// A resolved host, in the shape of the classical `hostent` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEntry {
    /// The official name of the host.
    pub name: String,
    /// Alias names; always empty, the resolver seam reports none.
    pub aliases: Vec<String>,
    /// The family of the entries in `addrs`.
    pub addrtype: AddressFamily,
    /// The resolved addresses; a single entry.
    pub addrs: Vec<HostAddr>,
}
