mod cluster;
mod cluster_state;
mod container;
mod mongodb_version;
mod page;
mod peer;
mod project;
mod root;

pub use cluster::*;
pub use cluster_state::*;
pub use container::*;
pub use mongodb_version::*;
pub use page::*;
pub use peer::*;
pub use project::*;
pub use root::*;
