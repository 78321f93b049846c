use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::UserId;

/// A student account with the codes of every course they are enrolled in.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: UserId,
    pub username: String,
    pub name: String,
    #[schema(example = json!(["CS101", "MA201"]))]
    pub courses_enrolled: Vec<String>,
}
