pub mod prelude;

pub mod heimdall_user;
