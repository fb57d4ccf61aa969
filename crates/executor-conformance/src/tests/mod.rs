pub mod a02_version;
pub mod a05_timestamps;
