//! # Application Constants

use std::net::{IpAddr, Ipv4Addr};

/// Bind address used when `APP_HOST` is unset
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Bind port used when `APP_PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mentorlink=info,tower_http=info";
