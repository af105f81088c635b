//! Command implementations.

pub mod lineage;
pub mod profile;
pub mod relatives;
pub mod resolve;
pub mod viewer;

pub use self::lineage::execute_lineage;
pub use self::profile::execute_profile;
pub use self::relatives::execute_relatives;
pub use self::resolve::execute_resolve;
pub use self::viewer::execute_viewer;
