pub mod constants;
pub mod storage;
