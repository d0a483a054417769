pub mod current_user;
pub mod list_products;
pub mod login;
pub mod logout;
pub mod signup;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use current_user::CurrentUserUseCase;
pub use list_products::ListProductsUseCase;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use signup::SignupUseCase;
pub use types::{AuthenticatedIdentity, CurrentUser};
