use std::{error, fmt};

/// Errors returned by [`getaddrinfo`](crate::Netdb::getaddrinfo).
///
/// The discriminants are the classical `EAI_*` integers and are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LookupError {
    /// The node or service is not known, or an address literal did not
    /// match the requested family.
    NoName = 200,
    /// The service string is not a decimal port number in `[0, 65535]`.
    Service = 201,
    /// The resolver produced no usable answer, or the node name exceeds
    /// the DNS maximum.
    Fail = 202,
    /// A result record could not be allocated.
    Memory = 203,
    /// The hints request an unsupported address family.
    Family = 204,
}

impl LookupError {
    /// The numeric `EAI_*` value of this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoName => "name or service not known",
            Self::Service => "invalid service string",
            Self::Fail => "non-recoverable resolver failure",
            Self::Memory => "out of memory",
            Self::Family => "address family not supported",
        };
        write!(f, "{msg}")
    }
}

impl error::Error for LookupError {}

/// Errors reported by the legacy host-lookup entry points.
///
/// [`gethostbyname_r`](crate::Netdb::gethostbyname_r) carries these in its
/// return value; the non-reentrant [`gethostbyname`](crate::Netdb::gethostbyname)
/// stores the numeric code in the process-wide [`h_errno`](crate::h_errno)
/// cell instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HostError {
    /// Required arguments are missing or degenerate.
    Invalid = 22,
    /// The caller-supplied scratch buffer is too small.
    Range = 34,
    /// The resolver does not know the host.
    HostNotFound = 210,
}

impl HostError {
    /// The numeric errno-style value of this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Invalid => "invalid argument",
            Self::Range => "scratch buffer too small",
            Self::HostNotFound => "host not found",
        };
        write!(f, "{msg}")
    }
}

impl error::Error for HostError {}
