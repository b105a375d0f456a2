pub mod bid;
pub mod context;
pub mod request;
pub mod sync;
