pub mod lyrics;
pub mod metadata;
pub mod root;
pub mod song;
pub use metadata::METADATA_CLIENT;
pub use root::RootController;
