pub use self::{
    chain::ChainApi,
    hive::Hive,
    node_pool::{Node, NodePool},
    reputation::{Reputation, ReputationSource},
};

mod chain;
mod hive;
mod node_pool;
mod reputation;
