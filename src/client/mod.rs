mod coordinator;
pub use coordinator::{Coordinator, HUMAN};

mod status;
pub use status::Status;
