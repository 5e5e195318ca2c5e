//! MVP definition: scope of the first release

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{from_value, MvpDefinitionPayload, ValueProposition};

pub fn render(data: &Value, vp: Option<&ValueProposition>) -> Vec<Block> {
    let payload: MvpDefinitionPayload = from_value(data);

    BlockBuilder::new()
        .value_proposition(vp)
        .field("Core problem", payload.core_problem.as_deref())
        .field("Target user", payload.target_user.as_deref())
        .subheading("Scope")
        .bullets("Must have", &payload.must_have)
        .bullets("Nice to have", &payload.nice_to_have)
        .bullets("Out of scope", &payload.out_of_scope)
        .subheading("Launch")
        .field("Success metrics", payload.success_metrics.as_deref())
        .inline("Target launch date", payload.launch_date.as_deref())
        .build()
}
