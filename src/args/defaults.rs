pub(crate) const DEFAULT_USER_AGENT: &str = concat!("thor/", env!("CARGO_PKG_VERSION"));

pub(super) const DEFAULT_HAMMERS: &str = "1";
pub(super) const DEFAULT_THROWS: &str = "1";
pub(super) const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub(super) const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
