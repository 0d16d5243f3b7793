pub mod config;
pub mod csv;
pub mod remote;
pub mod storage;
