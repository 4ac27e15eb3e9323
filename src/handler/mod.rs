pub use self::dispatcher::{dispatch, Command};

pub mod account_info;
pub mod dispatcher;
pub mod history_scanner;
pub mod vesting;

#[cfg(test)]
pub(crate) mod fake;
