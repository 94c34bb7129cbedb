/// Provide a `select` method for [`bool`], integer primitives, [`Option`], and [`Result`].
pub(crate) mod select;
