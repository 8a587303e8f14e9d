pub use super::heimdall_user::Entity as HeimdallUser;
