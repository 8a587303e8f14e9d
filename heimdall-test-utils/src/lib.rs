pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod session;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use session::FailingStore;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD},
        fixtures::user as user_factory,
        FailingStore, TestBuilder, TestContext, TestError,
    };
}
