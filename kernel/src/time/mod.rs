pub mod civil;
pub mod convert;
pub mod resolve;
