mod execute;
mod info;

pub(crate) use execute::cmd_execute;
pub(crate) use info::{cmd_node_types, cmd_version};
