//! Release source implementations

pub mod listing;

pub use listing::DirectoryListingSource;
