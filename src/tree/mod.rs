mod error;
mod insert;
pub mod node;
mod route_tree;
mod traversal;

pub use error::{TreeError, TreeResult};
pub use node::{NodeId, ROOT_NODE, RouteNode};
pub use route_tree::{RouteInfo, RouteTree};
