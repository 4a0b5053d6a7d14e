use std::net::SocketAddr;

/// Address family selector for lookups and result records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// Either family; lookups query both stacks.
    #[default]
    Unspec,
    /// IPv4.
    Inet,
    /// IPv6.
    Inet6,
}

/// Lookup flags understood by [`getaddrinfo`](crate::Netdb::getaddrinfo).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrInfoFlags {
    /// Synthesise the wildcard address instead of loopback when no node is
    /// given.
    pub passive: bool,
    /// Treat the node as an address literal; the resolver is never asked.
    pub numeric_host: bool,
}

/// Hints narrowing a [`getaddrinfo`](crate::Netdb::getaddrinfo) request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrInfoHints {
    pub flags: AddrInfoFlags,
    pub family: AddressFamily,
    /// Copied verbatim into each result record.
    pub socktype: i32,
    /// Copied verbatim into each result record.
    pub protocol: i32,
}

/// One record of a lookup result.
///
/// Records are linked in preference order; the head of the chain is the
/// address a caller should try first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddrInfo {
    pub family: AddressFamily,
    pub socktype: i32,
    pub protocol: i32,
    /// The resolved endpoint. IPv6 records carry the zone id as scope id.
    pub addr: SocketAddr,
    /// The queried node name, echoed when one was supplied.
    pub canonname: Option<String>,
    pub next: Option<Box<AddrInfo>>,
}

impl AddrInfo {
    /// Iterates this record and its successors in preference order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }
}

impl Drop for AddrInfo {
    fn drop(&mut self) {
        // unlink iteratively, a long chain must not recurse
        let mut next = self.next.take();
        while let Some(mut record) = next {
            next = record.next.take();
        }
    }
}

/// Iterator over the records of a result chain.
#[derive(Debug)]
pub struct Iter<'a> {
    next: Option<&'a AddrInfo>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a AddrInfo;
    fn next(&mut self) -> Option<Self::Item> {
        let record = self.next?;
        self.next = record.next.as_deref();
        Some(record)
    }
}

/// Releases a result chain built by [`getaddrinfo`](crate::Netdb::getaddrinfo).
///
/// Walks the chain and frees every record. Dropping the head has the same
/// effect; this routine exists for callers porting code that frees
/// explicitly. Passing `None` is a no-op.
pub fn freeaddrinfo(list: Option<Box<AddrInfo>>) {
    drop(list);
}
