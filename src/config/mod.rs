//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::ContentfulConfig;
pub use site::ResearchConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
