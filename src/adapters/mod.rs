// Adapters layer: concrete implementations at the I/O edges (file system, http).

pub mod fs_loader;
#[cfg(feature = "server")]
pub mod http;

pub use fs_loader::FileSystemLoader;
