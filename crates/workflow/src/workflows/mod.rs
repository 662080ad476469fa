pub mod session;
pub mod statistics;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
