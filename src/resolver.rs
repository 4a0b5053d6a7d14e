use std::io::{Error, ErrorKind, Result};

use async_trait::async_trait;
use netdb_types::ip::HostAddr;

/// The address family requested from the DNS collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    /// Only IPv4 answers (A records).
    Ipv4,
    /// Only IPv6 answers (AAAA records).
    Ipv6,
    /// Either family, preferring an IPv4 answer when both exist.
    Ipv4ThenIpv6,
}

/// The DNS client behind the lookup façade.
///
/// Implementations answer a single-name, single-family query with one
/// address. Retries, caching and transport are entirely the implementor's
/// concern; the façade only distinguishes success from failure. A call may
/// block its caller for as long as the underlying query takes.
#[async_trait]
pub trait Resolver {
    /// Resolves `name` to a single address of the requested family.
    async fn resolve(&self, name: &str, family: QueryFamily) -> Result<HostAddr>;
}

/// A resolver without any backend; every query misses.
///
/// Useful wherever only literal lookups are expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

#[async_trait]
impl Resolver for NullResolver {
    async fn resolve(&self, _name: &str, _family: QueryFamily) -> Result<HostAddr> {
        Err(Error::new(
            ErrorKind::NotFound,
            "name could not be resolved - no dns",
        ))
    }
}
