pub(crate) mod config;
pub(crate) mod gradient;
pub(crate) mod snapshot;
