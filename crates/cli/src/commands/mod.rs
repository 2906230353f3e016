pub(crate) mod list;
pub(crate) mod migrate;
pub(crate) mod serve;
