// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Summary types for the most common Data Catalog resources.
//!
//! These types capture the fields shared by most resources. Any other field
//! in the response is preserved in `extra`. Applications needing the full
//! resource can use [serde_json::Value] or their own types with
//! [RequestBuilder::send][crate::builder::RequestBuilder::send].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The lifecycle state of a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum LifecycleState {
    Creating,
    Active,
    Inactive,
    Updating,
    Deleting,
    Deleted,
    Failed,
    Moving,
    /// A state not known to this version of the library.
    #[default]
    #[serde(other)]
    Unknown,
}

impl LifecycleState {
    /// The value used in `lifecycleState` query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Updating => "UPDATING",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
            Self::Failed => "FAILED",
            Self::Moving => "MOVING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// The sort order for list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

/// A data catalog instance.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Catalog {
    /// The OCID of the catalog.
    pub id: String,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub time_updated: Option<DateTime<Utc>>,
    pub lifecycle_state: LifecycleState,
    /// The OCIDs of the private endpoints attached to the catalog.
    pub attached_catalog_private_endpoints: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields shared by the keyed resources inside a catalog.
macro_rules! keyed_resource {
    ($(#[$attr:meta])* $name:ident { $($(#[$fattr:meta])* $field:ident: $ty:ty,)* }) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct $name {
            /// Unique key of the resource within its parent.
            pub key: String,
            pub display_name: Option<String>,
            pub description: Option<String>,
            pub time_created: Option<DateTime<Utc>>,
            pub time_updated: Option<DateTime<Utc>>,
            pub lifecycle_state: LifecycleState,
            /// The URI of the resource, relative to the endpoint.
            pub uri: Option<String>,
            $($(#[$fattr])* pub $field: $ty,)*
            /// Any other fields in the resource.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }
    };
}

keyed_resource!(
    /// A data asset, such as a database or an object storage bucket.
    DataAsset {
        catalog_id: Option<String>,
        external_key: Option<String>,
        type_key: Option<String>,
    }
);

keyed_resource!(
    /// A data entity, such as a table or a file.
    Entity {
        data_asset_key: Option<String>,
        folder_key: Option<String>,
        external_key: Option<String>,
        business_name: Option<String>,
        is_logical: Option<bool>,
        path: Option<String>,
    }
);

keyed_resource!(
    /// A business glossary.
    Glossary {
        catalog_id: Option<String>,
        workflow_status: Option<String>,
    }
);

keyed_resource!(
    /// A term in a business glossary.
    Term {
        glossary_key: Option<String>,
        parent_term_key: Option<String>,
        is_allowed_to_have_child_terms: Option<bool>,
        path: Option<String>,
        workflow_status: Option<String>,
    }
);

keyed_resource!(
    /// A job, such as a harvest or an import.
    Job {
        catalog_id: Option<String>,
        job_type: Option<String>,
        job_definition_key: Option<String>,
        schedule_cron_expression: Option<String>,
    }
);

/// The status of an asynchronous operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequest {
    pub id: String,
    pub operation_type: Option<String>,
    pub status: WorkRequestStatus,
    pub compartment_id: Option<String>,
    /// The percentage of the request completed.
    pub percent_complete: Option<f32>,
    pub time_accepted: Option<DateTime<Utc>>,
    pub time_started: Option<DateTime<Utc>>,
    pub time_finished: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum WorkRequestStatus {
    Accepted,
    InProgress,
    Failed,
    Succeeded,
    Canceling,
    Canceled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WorkRequestStatus {
    /// Returns true if the work request will not change anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Succeeded | Self::Canceled)
    }
}

/// A page of results returned by list operations.
///
/// The token for the next page is returned in the `opc-next-page` header, see
/// [Response::opc_next_page][gax::response::Response::opc_next_page].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn catalog() -> anyhow::Result<()> {
        let input = json!({
            "id": "ocid1.datacatalog.oc1..abc",
            "displayName": "test",
            "timeCreated": "2025-01-02T03:04:05.678Z",
            "lifecycleState": "ACTIVE",
            "freeformTags": {"team": "data"},
        });
        let got = serde_json::from_value::<Catalog>(input)?;
        assert_eq!(got.id, "ocid1.datacatalog.oc1..abc");
        assert_eq!(got.display_name.as_deref(), Some("test"));
        assert_eq!(got.lifecycle_state, LifecycleState::Active);
        assert_eq!(
            got.time_created.map(|t| t.timestamp_millis()),
            Some(1735787045678)
        );
        assert_eq!(got.extra.get("freeformTags"), Some(&json!({"team": "data"})));
        Ok(())
    }

    #[test]
    fn unknown_enum_values() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LifecycleState>(json!("HIBERNATING"))?;
        assert_eq!(got, LifecycleState::Unknown);
        let got = serde_json::from_value::<WorkRequest>(json!({"id": "w", "status": "PAUSED"}))?;
        assert_eq!(got.status, WorkRequestStatus::Unknown);
        assert!(!got.status.is_terminal());
        Ok(())
    }

    #[test]
    fn keyed_resource_extra_fields() -> anyhow::Result<()> {
        let input = json!({
            "key": "entity-1",
            "displayName": "orders",
            "isLogical": true,
            "properties": {"default": {"rows": "10"}},
        });
        let got = serde_json::from_value::<Entity>(input)?;
        assert_eq!(got.key, "entity-1");
        assert_eq!(got.is_logical, Some(true));
        assert_eq!(got.lifecycle_state, LifecycleState::Unknown);
        assert_eq!(got.extra.len(), 1, "{got:?}");
        Ok(())
    }

    #[test]
    fn collection() -> anyhow::Result<()> {
        let input = json!({"items": [{"key": "g1"}, {"key": "g2", "displayName": "Finance"}], "count": 2});
        let got = serde_json::from_value::<Collection<Glossary>>(input)?;
        let keys = got.items.iter().map(|g| g.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["g1", "g2"]);
        assert_eq!(got.count, Some(2));
        let empty = serde_json::from_value::<Collection<Glossary>>(json!({}))?;
        assert!(empty.items.is_empty());
        Ok(())
    }

    #[test]
    fn lifecycle_state_names() -> anyhow::Result<()> {
        for state in [LifecycleState::Creating, LifecycleState::Moving, LifecycleState::Deleted] {
            assert_eq!(serde_json::to_value(&state)?, json!(state.as_str()));
        }
        assert_eq!(serde_json::to_value(SortOrder::Descending)?, json!("DESC"));
        Ok(())
    }
}
