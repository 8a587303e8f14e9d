//! Authentication endpoints: login, registration, logout.

pub mod login;
pub mod logout;
pub mod register;

pub use login::{show_login, submit_login};
pub use logout::logout;
pub use register::{show_register, submit_register};
