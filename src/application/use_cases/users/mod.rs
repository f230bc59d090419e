//! User Use Cases
//!
//! Retrieve, list and update users.

mod get_user;
mod list_users;
mod update_user;

pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::UpdateUserUseCase;
