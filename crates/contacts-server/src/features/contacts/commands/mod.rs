pub mod create;
pub mod delete;
pub mod update;

pub use create::CreateContactCommand;
pub use update::UpdateContactCommand;
