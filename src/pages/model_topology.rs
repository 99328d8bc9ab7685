use anyhow::{Context, Result};

use crate::config::NavConfig;
use crate::descriptor::{ComponentLoader, RouteDescriptor};
use crate::operation::{OperationId, SYSTEM_MODEL_GRAPHICS};

pub const NAME: &str = "modelTopology";
pub const PATH: &str = "/model/topology";

/// Operations a principal needs to see the page.
pub const OPERATIONS: [OperationId; 1] = [SYSTEM_MODEL_GRAPHICS];

pub fn model_topology(nav: &NavConfig) -> Result<RouteDescriptor> {
    RouteDescriptor::builder(
        NAME,
        PATH,
        ComponentLoader::module("views/model-topology/index.old.vue", "model-topology"),
    )
    .menu(
        NAME,
        r#"Nav["模型拓扑"]"#,
        2,
        Some(nav.model_management_group.as_str()),
    )
    .auth(OPERATIONS)
    .build(&nav.operations)
    .context("model topology route is misconfigured")
}
