pub use self::{
    account_info::{AccountInfo, AccountLookup},
    history::{
        HistoryItem, HistoryKind, HistoryScan, REWARD_APP_ACCOUNT, WINDOW_DAYS,
    },
    reply::{Embed, EmbedField, EmbedFooter, EmbedMedia, Reply},
};

mod account_info;
mod history;
mod reply;
