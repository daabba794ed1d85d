
#[cfg(test)]
pub use fixture::TestRepo;
