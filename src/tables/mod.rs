pub(crate) mod backgrounds;
pub(crate) mod palette;
