#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Error, ErrorKind, Result};
use std::net::{Ipv4Addr, Ipv6Addr};

use async_trait::async_trait;
use netdb::iface::InterfaceAddrs;
use netdb::types::ip::HostAddr;
use netdb::{QueryFamily, Resolver};

/// A resolver backed by a fixed host table.
#[derive(Debug, Default)]
pub struct StaticDns {
    v4: HashMap<String, Ipv4Addr>,
    v6: HashMap<String, Ipv6Addr>,
}

impl StaticDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host_v4(mut self, name: &str, addr: &str) -> Self {
        self.v4.insert(name.to_string(), addr.parse().unwrap());
        self
    }

    pub fn host_v6(mut self, name: &str, addr: &str) -> Self {
        self.v6.insert(name.to_string(), addr.parse().unwrap());
        self
    }
}

#[async_trait]
impl Resolver for StaticDns {
    async fn resolve(&self, name: &str, family: QueryFamily) -> Result<HostAddr> {
        let miss = || Error::new(ErrorKind::NotFound, format!("unknown host '{name}'"));
        match family {
            QueryFamily::Ipv4 => self
                .v4
                .get(name)
                .copied()
                .map(HostAddr::V4)
                .ok_or_else(miss),
            QueryFamily::Ipv6 => self
                .v6
                .get(name)
                .copied()
                .map(HostAddr::from)
                .ok_or_else(miss),
            QueryFamily::Ipv4ThenIpv6 => self
                .v4
                .get(name)
                .copied()
                .map(HostAddr::V4)
                .or_else(|| self.v6.get(name).copied().map(HostAddr::from))
                .ok_or_else(miss),
        }
    }
}

/// Loopback plus an ethernet interface with global IPv4 and IPv6 bindings.
pub fn dual_stack_host() -> Vec<InterfaceAddrs> {
    vec![
        InterfaceAddrs::loopback(),
        InterfaceAddrs::eth(
            Ipv4Addr::new(198, 51, 100, 117),
            &["fe80::1".parse().unwrap(), "2001:db8:1::2".parse().unwrap()],
        ),
    ]
}

/// Global IPv4 connectivity, but only link-local IPv6.
pub fn link_local_v6_host() -> Vec<InterfaceAddrs> {
    vec![
        InterfaceAddrs::loopback(),
        InterfaceAddrs::eth(Ipv4Addr::new(198, 51, 100, 117), &["fe80::1".parse().unwrap()]),
    ]
}

/// No IPv4 bindings at all.
pub fn v6_only_host() -> Vec<InterfaceAddrs> {
    vec![InterfaceAddrs::eth_v6(&[
        "fe80::2".parse().unwrap(),
        "2001:db8:1::2".parse().unwrap(),
    ])]
}

/// A host without any interfaces.
pub fn empty_host() -> Vec<InterfaceAddrs> {
    Vec::new()
}
