use std::mem;
use std::net::{SocketAddr, SocketAddrV4, SocketAddrV6};

use crate::addrinfo::{AddrInfo, AddrInfoHints, AddressFamily};
use crate::addrsel::sort_destination_addresses;
use crate::errors::{HostError, LookupError};
use crate::hostent::{set_h_errno, HostEntry};
use crate::iface::{collect_source_summary, InterfaceTable};
use crate::resolver::{QueryFamily, Resolver};
use netdb_types::ip::HostAddr;

/// The maximum length of a DNS name.
pub const DNS_MAX_NAME_LENGTH: usize = 255;

/// The name-resolution façade.
///
/// Binds a DNS [`Resolver`] and an [`InterfaceTable`] together and exposes
/// the classical lookup operations on top of them. The façade itself holds
/// no mutable state; every lookup snapshots the interface table anew.
#[derive(Debug)]
pub struct Netdb<R, T> {
    resolver: R,
    ifaces: T,
}

impl<R: Resolver, T: InterfaceTable> Netdb<R, T> {
    pub fn new(resolver: R, ifaces: T) -> Self {
        Self { resolver, ifaces }
    }

    /// Resolves a node and/or service to a chain of address records.
    ///
    /// With an unspecified family both stacks are queried and, when both
    /// answer, the results are ordered by RFC 6724 destination rules
    /// against the locally bound source addresses. Without a node the
    /// loopback address is synthesised, or the wildcard when the `passive`
    /// flag is set. The `numeric_host` flag parses the node as an address
    /// literal (IPv6 literals may carry a `%zone` suffix) and never asks
    /// the resolver.
    ///
    /// The returned chain is linked in preference order and owned by the
    /// caller; see [`freeaddrinfo`](crate::freeaddrinfo).
    ///
    /// # Errors
    ///
    /// Fails closed on the first problem: [`LookupError::NoName`] when
    /// node and service are both absent, a literal cannot be parsed or
    /// contradicts the family hint; [`LookupError::Service`] when the
    /// service is not a decimal port; [`LookupError::Fail`] when the name
    /// exceeds [`DNS_MAX_NAME_LENGTH`] or no stack produced an answer.
    pub async fn getaddrinfo(
        &self,
        node: Option<&str>,
        service: Option<&str>,
        hints: Option<&AddrInfoHints>,
    ) -> Result<Box<AddrInfo>, LookupError> {
        if node.is_none() && service.is_none() {
            return Err(LookupError::NoName);
        }

        let hints = hints.copied().unwrap_or_default();
        let family = hints.family;

        let port: u16 = match service {
            Some(service) => service.parse().map_err(|_| LookupError::Service)?,
            None => 0,
        };

        let mut dests: Vec<HostAddr> = Vec::with_capacity(2);
        if let Some(node) = node {
            if node.len() > DNS_MAX_NAME_LENGTH {
                return Err(LookupError::Fail);
            }

            if hints.flags.numeric_host {
                let addr: HostAddr = node.parse().map_err(|_| LookupError::NoName)?;
                match (family, addr.is_ipv4()) {
                    (AddressFamily::Inet, false) | (AddressFamily::Inet6, true) => {
                        return Err(LookupError::NoName)
                    }
                    _ => {}
                }
                dests.push(addr);
            } else {
                match family {
                    AddressFamily::Unspec => {
                        let v6 = self.resolver.resolve(node, QueryFamily::Ipv6).await;
                        let v4 = self.resolver.resolve(node, QueryFamily::Ipv4).await;
                        dests.extend(v6.ok());
                        dests.extend(v4.ok());
                        if dests.is_empty() {
                            tracing::trace!("resolution of '{node}' failed on both stacks");
                            return Err(LookupError::Fail);
                        }
                    }
                    AddressFamily::Inet => {
                        let addr = self
                            .resolver
                            .resolve(node, QueryFamily::Ipv4)
                            .await
                            .map_err(|_| LookupError::Fail)?;
                        dests.push(addr);
                    }
                    AddressFamily::Inet6 => {
                        let addr = self
                            .resolver
                            .resolve(node, QueryFamily::Ipv6)
                            .await
                            .map_err(|_| LookupError::Fail)?;
                        dests.push(addr);
                    }
                }

                if dests.len() >= 2 {
                    let summary = collect_source_summary(&self.ifaces);
                    sort_destination_addresses(&mut dests, &summary);
                }
            }
        } else {
            let v6 = family == AddressFamily::Inet6;
            dests.push(if hints.flags.passive {
                HostAddr::unspecified(v6)
            } else {
                HostAddr::loopback(v6)
            });
        }

        // link the records back to front, most preferred first
        let mut head: Option<Box<AddrInfo>> = None;
        for addr in dests.iter().rev() {
            let (family, sockaddr) = match addr {
                HostAddr::V4(v4) => (
                    AddressFamily::Inet,
                    SocketAddr::V4(SocketAddrV4::new(*v4, port)),
                ),
                HostAddr::V6 { addr, zone } => (
                    AddressFamily::Inet6,
                    SocketAddr::V6(SocketAddrV6::new(*addr, port, 0, *zone)),
                ),
            };
            head = Some(Box::new(AddrInfo {
                family,
                socktype: hints.socktype,
                protocol: hints.protocol,
                addr: sockaddr,
                canonname: node.map(str::to_owned),
                next: head,
            }));
        }
        head.ok_or(LookupError::Fail)
    }

    /// Looks up a host by name, preferring an IPv4 answer.
    ///
    /// On a miss `None` is returned and [`HostError::HostNotFound`] is
    /// stored in the process-wide [`h_errno`](crate::h_errno) cell; use
    /// [`gethostbyname_r`](Self::gethostbyname_r) from concurrent callers.
    /// The entry's name is truncated to [`DNS_MAX_NAME_LENGTH`].
    pub async fn gethostbyname(&self, name: &str) -> Option<HostEntry> {
        let addr = match self.resolver.resolve(name, QueryFamily::Ipv4ThenIpv6).await {
            Ok(addr) => addr,
            Err(e) => {
                tracing::trace!("gethostbyname({name}) failed: {e}");
                set_h_errno(HostError::HostNotFound.code());
                return None;
            }
        };

        Some(HostEntry {
            name: truncate_name(name),
            aliases: Vec::new(),
            addrtype: family_of(addr),
            addrs: vec![addr],
        })
    }

    /// Reentrant variant of [`gethostbyname`](Self::gethostbyname).
    ///
    /// Instead of the process-wide error cell, errors travel in the return
    /// value, and the caller provides both the result entry and a scratch
    /// buffer. The scratch must hold one address record plus a
    /// NUL-terminated copy of `name`, i.e. at least
    /// `size_of::<HostAddr>() + name.len() + 1` bytes; the name copy is
    /// written through it.
    ///
    /// # Errors
    ///
    /// [`HostError::Invalid`] for a degenerate (empty) name,
    /// [`HostError::Range`] when the scratch buffer cannot hold the
    /// result, [`HostError::HostNotFound`] when the resolver misses.
    pub async fn gethostbyname_r(
        &self,
        name: &str,
        entry: &mut HostEntry,
        buf: &mut [u8],
    ) -> Result<(), HostError> {
        if name.is_empty() {
            return Err(HostError::Invalid);
        }

        let record = mem::size_of::<HostAddr>();
        let required = record + name.len() + 1;
        if buf.len() < required {
            return Err(HostError::Range);
        }

        let addr = self
            .resolver
            .resolve(name, QueryFamily::Ipv4ThenIpv6)
            .await
            .map_err(|e| {
                tracing::trace!("gethostbyname_r({name}) failed: {e}");
                HostError::HostNotFound
            })?;

        // copy the queried name into the caller's scratch space
        let name_buf = &mut buf[record..required];
        name_buf[..name.len()].copy_from_slice(name.as_bytes());
        name_buf[name.len()] = 0;

        entry.name = String::from_utf8_lossy(&name_buf[..name.len()]).into_owned();
        entry.aliases.clear();
        entry.addrtype = family_of(addr);
        entry.addrs = vec![addr];
        Ok(())
    }
}

fn family_of(addr: HostAddr) -> AddressFamily {
    if addr.is_ipv4() {
        AddressFamily::Inet
    } else {
        AddressFamily::Inet6
    }
}

fn truncate_name(name: &str) -> String {
    if name.len() <= DNS_MAX_NAME_LENGTH {
        return name.to_string();
    }
    let mut end = DNS_MAX_NAME_LENGTH;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}
