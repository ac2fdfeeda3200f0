pub mod config;
pub mod descriptors;


pub use config::ProjectConfig;
pub use descriptors::{DescriptorFormat, DescriptorLoader, parse_descriptors};
