// crates/post-cli/src/services/mod.rs - Service layer modules
pub mod opener;
pub mod site;

pub use site::SiteService;
