pub mod fetch_profile;
pub mod register_account;
pub mod update_profile;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, IFetchProfileUseCase};
pub use register_account::{
    IRegisterAccountUseCase, RegisterAccountError, RegisterAccountInput, RegisterAccountUseCase,
};
pub use update_profile::{
    IUpdateProfileUseCase, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
