pub(crate) mod common;
pub(crate) mod escape;
pub(crate) mod math;
