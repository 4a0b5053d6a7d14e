//! Host and service name resolution with RFC 6724 destination ordering.
//!
//! This crate provides the classical `netdb` lookup surface ([`gethostbyname`],
//! its reentrant sibling and [`getaddrinfo`]) on top of two narrow
//! collaborator seams: a DNS [`Resolver`] answering single-family queries and
//! an [`InterfaceTable`](iface::InterfaceTable) listing the locally bound
//! addresses. When a dual-stack lookup yields both an IPv6 and an IPv4 answer,
//! the [`addrsel`] engine orders them by RFC 6724 §6 destination rules against
//! the set of available source addresses.
//!
//! [`gethostbyname`]: Netdb::gethostbyname
//! [`getaddrinfo`]: Netdb::getaddrinfo

pub mod addrsel;
pub mod iface;

mod addrinfo;
pub use addrinfo::{
    freeaddrinfo, AddrInfo, AddrInfoFlags, AddrInfoHints, AddressFamily,
};

mod errors;
pub use errors::{HostError, LookupError};

mod hostent;
pub use hostent::{h_errno, HostEntry};

mod resolver;
pub use resolver::{NullResolver, QueryFamily, Resolver};

mod lookup;
pub use lookup::{Netdb, DNS_MAX_NAME_LENGTH};

pub use netdb_types as types;
