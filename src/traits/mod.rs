pub(crate) mod category;
pub(crate) mod identity;
pub(crate) mod set;
