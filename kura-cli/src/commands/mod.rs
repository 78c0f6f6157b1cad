//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_user`: Register a new user
//! - `add_space`: Register a new rental space
//! - `spaces`: List registered spaces
//! - `book`: Book a space over an inclusive date range
//! - `set_status`: Update reservation or payment status
//! - `cancel`: Cancel a reservation
//! - `list`: List reservations
//! - `show`: Show a single reservation
//! - `completions`: Generate shell completion scripts

pub mod add_space;
pub mod add_user;
pub mod book;
pub mod cancel;
pub mod completions;
pub mod init;
pub mod list;
pub mod set_status;
pub mod show;
pub mod spaces;

pub use add_space::AddSpaceCommand;
pub use add_user::AddUserCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use set_status::SetStatusCommand;
pub use show::ShowCommand;
pub use spaces::SpacesCommand;
