/// Document-to-document copy command.
pub mod copy;
/// Shape classification command.
pub mod shape;

#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
