//! Configuration module

mod site;

pub use site::LoaderOverride;
pub use site::SiteConfig;
