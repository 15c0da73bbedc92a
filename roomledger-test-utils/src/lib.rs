pub mod error;
pub mod factory;
pub mod setup;

pub use error::TestError;
pub use factory::Fixtures;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        test_setup_with_core_tables, test_setup_with_tables, Fixtures, TestError, TestSetup,
    };
}
