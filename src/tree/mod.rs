//! Directory tree model and loading
//!
//! - `Node`: immutable file/directory tree that reports read from
//! - `NodeBuilder`: mutable form used while a tree is assembled
//! - `TreeLoader`: builds a `Node` tree from a path on disk

mod builder;
mod config;
mod loader;
mod node;
mod utils;

pub use builder::NodeBuilder;
pub use config::LoaderConfig;
pub use loader::TreeLoader;
pub use node::Node;
