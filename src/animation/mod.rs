pub(crate) mod ease;
pub(crate) mod step;
pub(crate) mod timeline;
pub(crate) mod value;
