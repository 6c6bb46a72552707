pub mod dataset;
pub mod subscription;
