pub(crate) mod backend;
pub(crate) mod eval;
pub(crate) mod params;
pub(crate) mod weight;
