pub(crate) mod boundary;
pub(crate) mod region;
pub(crate) mod registry;
