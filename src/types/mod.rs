pub use self::{
    account::Account,
    chat_message::{ChatAuthor, ChatMessage},
    discussion::{ActiveVote, Beneficiary, Discussion},
    dynamic_global_properties::DynamicGlobalProperties,
    reputation_score::ReputationScore,
    rpc_request::RpcRequest,
    rpc_response::{RpcError, RpcResponse},
};

mod account;
mod chat_message;
mod discussion;
mod dynamic_global_properties;
mod reputation_score;
mod rpc_request;
mod rpc_response;
