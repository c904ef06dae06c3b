pub mod login;
pub mod logout;
pub mod register;
pub mod update;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub use update::UpdateUserCommand;
