pub mod batch;
pub mod descriptor;
pub mod path;
pub mod tree;

pub use batch::CommandBatch;
pub use descriptor::{ConnectionTarget, OperationDescriptor};
pub use path::CommandPath;
pub use tree::{CommandTree, NodeId};
