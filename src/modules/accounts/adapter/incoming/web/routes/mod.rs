mod get_profile;
pub mod register_account;
mod update_profile;

pub use get_profile::get_profile_handler;
pub use register_account::{
    register_account_handler, RegisterAccountRequest, RegisteredAccount,
};
pub use update_profile::{update_profile_handler, ProfileResponse, UpdateProfileRequest};
