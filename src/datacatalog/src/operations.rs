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

//! The operations in the Data Catalog service.
//!
//! Each operation is a static [Operation]. The [DataCatalog] client has one
//! accessor per operation, returning a [RequestBuilder] bound to it. For
//! example, [GET_CATALOG] is used by [DataCatalog::get_catalog].
//!
//! [DataCatalog]: crate::client::DataCatalog
//! [DataCatalog::get_catalog]: crate::client::DataCatalog::get_catalog
//! [RequestBuilder]: crate::builder::RequestBuilder

use crate::operation::{Body, OPC_RETRY_TOKEN, Operation, Parameter};

const OPC_REQUEST_ID: Parameter = Parameter::optional("opc-request-id");
const IF_MATCH: Parameter = Parameter::optional("if-match");
const RETRY_TOKEN: Parameter = Parameter::optional(OPC_RETRY_TOKEN);

// Header sets.
const READ: &[Parameter] = &[OPC_REQUEST_ID];
const CREATE: &[Parameter] = &[OPC_REQUEST_ID, RETRY_TOKEN];
const MODIFY: &[Parameter] = &[OPC_REQUEST_ID, IF_MATCH];
const GUARDED: &[Parameter] = &[OPC_REQUEST_ID, IF_MATCH, RETRY_TOKEN];

const LIFECYCLE_STATES: &[&str] = &[
    "CREATING", "ACTIVE", "INACTIVE", "UPDATING", "DELETING", "DELETED", "FAILED", "MOVING",
];
const JOB_TYPES: &[&str] = &[
    "HARVEST",
    "PROFILING",
    "SAMPLING",
    "PREVIEW",
    "IMPORT",
    "EXPORT",
    "IMPORT_GLOSSARY",
    "EXPORT_GLOSSARY",
    "INTERNAL",
    "PURGE",
    "IMMEDIATE",
    "SCHEDULED",
    "IMMEDIATE_EXECUTION",
    "SCHEDULED_EXECUTION",
    "SCHEDULED_EXECUTION_INSTANCE",
    "ASYNC_DELETE",
    "IMPORT_DATA_ASSET",
    "CREATE_SCAN_PROXY",
    "ASYNC_EXPORT_GLOSSARY",
    "ASYNC_EXPORT_DATA_ASSET",
];
const HARVEST_STATUSES: &[&str] = &["COMPLETE", "ERROR", "IN_PROGRESS", "DEFERRED"];
const EXPORT_TYPES: &[&str] = &["CUSTOM_PROPERTY_VALUES", "ALL"];

// Query parameters shared by many operations.
const FIELDS: Parameter = Parameter::optional("fields").multi();
const LIMIT: Parameter = Parameter::optional("limit");
const PAGE: Parameter = Parameter::optional("page");
const SORT_ORDER: Parameter = Parameter::optional("sortOrder").one_of(&["ASC", "DESC"]);
const SORT_BY: Parameter = Parameter::optional("sortBy").one_of(&["TIMECREATED", "DISPLAYNAME"]);
const LIFECYCLE_STATE: Parameter = Parameter::optional("lifecycleState").one_of(LIFECYCLE_STATES);
const DISPLAY_NAME: Parameter = Parameter::optional("displayName");
const DISPLAY_NAME_CONTAINS: Parameter = Parameter::optional("displayNameContains");
const NAME: Parameter = Parameter::optional("name");
const TIME_CREATED: Parameter = Parameter::optional("timeCreated");
const TIME_UPDATED: Parameter = Parameter::optional("timeUpdated");
const CREATED_BY_ID: Parameter = Parameter::optional("createdById");
const UPDATED_BY_ID: Parameter = Parameter::optional("updatedById");
const EXTERNAL_KEY: Parameter = Parameter::optional("externalKey");
const COMPARTMENT_ID: Parameter = Parameter::required("compartmentId");
const TIMEOUT: Parameter = Parameter::optional("timeout");
const INCLUDE_RELATIONSHIPS: Parameter = Parameter::optional("isIncludeObjectRelationships");
const CONNECTION_KEY: Parameter = Parameter::optional("connectionKey");
const IS_MISSING_VALUE_IGNORED: Parameter = Parameter::optional("isMissingValueIgnored");
const IS_RELATIONSHIP_EXPORTED: Parameter = Parameter::optional("isRelationshipExported");
const IS_RELATIONSHIP_IMPORTED: Parameter = Parameter::optional("isRelationshipImported");

// Query parameter sets.
const GET_QUERY: &[Parameter] = &[FIELDS];
const LIST_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_IN_COMPARTMENT_QUERY: &[Parameter] = &[
    COMPARTMENT_ID,
    DISPLAY_NAME,
    LIMIT,
    PAGE,
    LIFECYCLE_STATE,
    SORT_ORDER,
    SORT_BY,
];
const LIST_TAGS_QUERY: &[Parameter] = &[
    NAME,
    LIFECYCLE_STATE,
    Parameter::optional("termKey"),
    Parameter::optional("termPath"),
    TIME_CREATED,
    CREATED_BY_ID,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_DATA_ASSETS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    EXTERNAL_KEY,
    Parameter::optional("typeKey"),
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_CONNECTIONS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    EXTERNAL_KEY,
    Parameter::optional("timeStatusUpdated"),
    Parameter::optional("isDefault"),
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_ENTITIES_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    BUSINESS_NAME,
    DISPLAY_OR_BUSINESS_NAME_CONTAINS,
    Parameter::optional("typeKey"),
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    EXTERNAL_KEY,
    Parameter::optional("patternKey"),
    Parameter::optional("timeExternal"),
    Parameter::optional("timeStatusUpdated"),
    Parameter::optional("isLogical"),
    Parameter::optional("isPartition"),
    Parameter::optional("folderKey"),
    Parameter::optional("path"),
    Parameter::optional("harvestStatus").one_of(HARVEST_STATUSES),
    Parameter::optional("lastJobKey"),
    Parameter::optional("isProcessRecommendation"),
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const BUSINESS_NAME: Parameter = Parameter::optional("businessName");
const DISPLAY_OR_BUSINESS_NAME_CONTAINS: Parameter =
    Parameter::optional("displayOrBusinessNameContains");
const LIST_ATTRIBUTES_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    BUSINESS_NAME,
    DISPLAY_OR_BUSINESS_NAME_CONTAINS,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    EXTERNAL_KEY,
    Parameter::optional("timeExternal"),
    Parameter::optional("externalTypeName"),
    Parameter::optional("isIncrementalData"),
    Parameter::optional("isNullable"),
    Parameter::optional("length"),
    Parameter::optional("position"),
    Parameter::optional("precision"),
    Parameter::optional("scale"),
    Parameter::optional("parentAttributeKey"),
    INCLUDE_RELATIONSHIPS,
    FIELDS,
    Parameter::optional("sortBy").one_of(&[
        "TIMECREATED",
        "DISPLAYNAME",
        "POSITION",
        "DISPLAYORBUSINESSNAME",
    ]),
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_FOLDERS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    BUSINESS_NAME,
    DISPLAY_OR_BUSINESS_NAME_CONTAINS,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    Parameter::optional("parentFolderKey"),
    Parameter::optional("path"),
    EXTERNAL_KEY,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    Parameter::optional("harvestStatus").one_of(HARVEST_STATUSES),
    Parameter::optional("lastJobKey"),
    FIELDS,
    Parameter::optional("typeKey"),
    INCLUDE_RELATIONSHIPS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_TERMS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    Parameter::optional("parentTermKey"),
    Parameter::optional("isAllowedToHaveChildTerms"),
    Parameter::optional("workflowStatus").one_of(&[
        "NEW",
        "APPROVED",
        "UNDER_REVIEW",
        "PUBLISHED",
        "ESCALATED",
    ]),
    Parameter::optional("path"),
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_NAMED_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_CUSTOM_PROPERTIES_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    Parameter::optional("dataTypes").multi().one_of(&[
        "TEXT", "RICH_TEXT", "BOOLEAN", "NUMBER", "DATE", "ORACLE_TYPE",
    ]),
    Parameter::optional("typeName").multi(),
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    FIELDS,
    Parameter::optional("sortBy").one_of(&["DISPLAYNAME", "USAGECOUNT"]),
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_JOBS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    Parameter::optional("lifecycleState").one_of(&["ACTIVE", "INACTIVE", "EXPIRED"]),
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    Parameter::optional("jobType").one_of(JOB_TYPES),
    Parameter::optional("jobDefinitionKey"),
    Parameter::optional("dataAssetKey"),
    Parameter::optional("glossaryKey"),
    Parameter::optional("scheduleCronExpression"),
    Parameter::optional("timeScheduleBegin"),
    Parameter::optional("timeScheduleEnd"),
    Parameter::optional("scheduleType").one_of(&["SCHEDULED", "IMMEDIATE"]),
    Parameter::optional("connectionKey"),
    FIELDS,
    Parameter::optional("executionCount"),
    Parameter::optional("timeOfLatestExecution"),
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_JOB_DEFINITIONS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    Parameter::optional("jobExecutionState").one_of(JOB_EXECUTION_STATES),
    LIFECYCLE_STATE,
    Parameter::optional("jobType").one_of(JOB_TYPES),
    Parameter::optional("isIncremental"),
    Parameter::optional("dataAssetKey"),
    Parameter::optional("glossaryKey"),
    Parameter::optional("connectionKey"),
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    Parameter::optional("sampleDataSizeInMBs"),
    FIELDS,
    Parameter::optional("sortBy").one_of(&[
        "TIMECREATED",
        "DISPLAYNAME",
        "TIMELATESTEXECUTIONSTARTED",
    ]),
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const JOB_EXECUTION_STATES: &[&str] = &[
    "CREATED",
    "IN_PROGRESS",
    "INACTIVE",
    "FAILED",
    "SUCCEEDED",
    "CANCELED",
    "SUCCEEDED_WITH_WARNINGS",
];
const LIST_JOB_EXECUTIONS_QUERY: &[Parameter] = &[
    Parameter::optional("lifecycleState").one_of(JOB_EXECUTION_STATES),
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    Parameter::optional("jobType").one_of(JOB_TYPES),
    Parameter::optional("subType"),
    Parameter::optional("parentKey"),
    Parameter::optional("timeStart"),
    Parameter::optional("timeEnd"),
    Parameter::optional("errorCode"),
    Parameter::optional("errorMessage"),
    Parameter::optional("processKey"),
    Parameter::optional("externalUrl"),
    Parameter::optional("eventKey"),
    Parameter::optional("dataEntityKey"),
    FIELDS,
    Parameter::optional("sortBy").one_of(&["TIMECREATED"]),
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_JOB_LOGS_QUERY: &[Parameter] = &[
    LIFECYCLE_STATE,
    Parameter::optional("severity"),
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    FIELDS,
    Parameter::optional("sortBy").one_of(&["TIMECREATED"]),
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_JOB_METRICS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    Parameter::optional("category"),
    Parameter::optional("subCategory"),
    Parameter::optional("unit"),
    Parameter::optional("value"),
    Parameter::optional("batchKey"),
    TIME_CREATED,
    TIME_UPDATED,
    Parameter::optional("timeInserted"),
    CREATED_BY_ID,
    UPDATED_BY_ID,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_PATTERNS_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    LIFECYCLE_STATE,
    TIME_CREATED,
    TIME_UPDATED,
    CREATED_BY_ID,
    UPDATED_BY_ID,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_RULES_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    DISPLAY_NAME_CONTAINS,
    Parameter::optional("ruleType").one_of(&["PRIMARYKEY", "FOREIGNKEY", "UNIQUEKEY"]),
    LIFECYCLE_STATE,
    Parameter::optional("originType").one_of(&["SOURCE", "USER", "PROFILING"]),
    EXTERNAL_KEY,
    TIME_CREATED,
    CREATED_BY_ID,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_TYPES_QUERY: &[Parameter] = &[
    NAME,
    LIFECYCLE_STATE,
    Parameter::optional("isInternal"),
    Parameter::optional("isTag"),
    Parameter::optional("isApproved"),
    Parameter::optional("externalTypeName"),
    Parameter::optional("typeCategory"),
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const LIST_WORK_REQUEST_DETAILS_QUERY: &[Parameter] = &[
    PAGE,
    LIMIT,
    Parameter::optional("sortBy").one_of(&["TIMEACCEPTED"]),
    SORT_ORDER,
];
const SORTED_PAGE_QUERY: &[Parameter] = &[SORT_BY, SORT_ORDER, LIMIT, PAGE];
const AGGREGATED_PHYSICAL_ENTITIES_QUERY: &[Parameter] = &[
    DISPLAY_NAME_CONTAINS,
    FIELDS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
    Parameter::optional("isIncludeProperties"),
];
const DERIVED_LOGICAL_ENTITIES_QUERY: &[Parameter] = &[
    DISPLAY_NAME_CONTAINS,
    SORT_BY,
    SORT_ORDER,
    LIMIT,
    PAGE,
];
const SEARCH_QUERY: &[Parameter] = &[
    DISPLAY_NAME,
    NAME,
    LIFECYCLE_STATE,
    TIMEOUT,
    Parameter::optional("sortBy").one_of(&["TIMECREATED", "DISPLAYNAME"]),
    SORT_ORDER,
    LIMIT,
    PAGE,
    INCLUDE_RELATIONSHIPS,
];
const SUGGEST_QUERY: &[Parameter] = &[TIMEOUT, Parameter::required("inputText"), LIMIT];
const RECOMMENDATIONS_QUERY: &[Parameter] = &[
    Parameter::required("recommendationType")
        .multi()
        .one_of(&["LINK_GLOSSARY_TERM"]),
    Parameter::required("sourceObjectKey"),
    Parameter::required("sourceObjectType").one_of(&[
        "DATA_ENTITY",
        "ATTRIBUTE",
        "TERM",
        "CATEGORY",
    ]),
    Parameter::optional("recommendationStatus").one_of(&["ACCEPTED", "REJECTED", "INFERRED"]),
];
const EXPORT_DATA_ASSET_QUERY: &[Parameter] = &[Parameter::required("exportType")
    .multi()
    .one_of(EXPORT_TYPES)];

macro_rules! operations {
    ($( $(#[$attr:meta])* $method:ident => $id:ident = $op:expr; )*) => {
        $(
            $(#[$attr])*
            pub static $id: Operation = $op;
        )*

        /// Every operation in the service.
        pub static ALL: &[&Operation] = &[$(&$id),*];

        #[cfg(test)]
        static IDENTIFIERS: &[(&str, &str, &Operation)] =
            &[$((stringify!($method), stringify!($id), &$id)),*];

        impl crate::client::DataCatalog {
            $(
                $(#[$attr])*
                ///
                #[doc = concat!(
                    "Returns a request builder for [", stringify!($id),
                    "][crate::operations::", stringify!($id), "]."
                )]
                pub fn $method(&self) -> crate::builder::RequestBuilder {
                    self.operation(&$id)
                }
            )*
        }
    };
}

/// Finds an operation by name, e.g. `GetCatalog`.
///
/// # Example
/// ```
/// # use datacatalog::operations;
/// let op = operations::find("ListCatalogs").expect("ListCatalogs is a known operation");
/// assert_eq!(op.path, "/catalogs");
/// assert!(operations::find("NoSuchOperation").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static Operation> {
    ALL.iter().copied().find(|op| op.name == name)
}

operations! {
    // Catalogs.

    /// Creates a new data catalog instance.
    create_catalog => CREATE_CATALOG =
        Operation::post("CreateCatalog", "/catalogs").with_headers(CREATE);
    /// Gets a data catalog by identifier.
    get_catalog => GET_CATALOG =
        Operation::get("GetCatalog", "/catalogs/{catalogId}").with_headers(READ);
    /// Returns a list of all the data catalogs in the specified compartment.
    list_catalogs => LIST_CATALOGS = Operation::get("ListCatalogs", "/catalogs")
        .with_query(LIST_IN_COMPARTMENT_QUERY)
        .with_headers(READ);
    /// Updates the data catalog.
    update_catalog => UPDATE_CATALOG =
        Operation::put("UpdateCatalog", "/catalogs/{catalogId}").with_headers(MODIFY);
    /// Deletes a data catalog resource by identifier.
    delete_catalog => DELETE_CATALOG =
        Operation::delete("DeleteCatalog", "/catalogs/{catalogId}").with_headers(MODIFY);
    /// Moves a resource into a different compartment.
    change_catalog_compartment => CHANGE_CATALOG_COMPARTMENT = Operation::post(
        "ChangeCatalogCompartment",
        "/catalogs/{catalogId}/actions/changeCompartment",
    )
    .with_headers(GUARDED);
    /// Attaches a private reverse connection endpoint resource to a data catalog resource.
    attach_catalog_private_endpoint => ATTACH_CATALOG_PRIVATE_ENDPOINT = Operation::post(
        "AttachCatalogPrivateEndpoint",
        "/catalogs/{catalogId}/actions/attachCatalogPrivateEndpoint",
    )
    .with_headers(GUARDED);
    /// Detaches a private reverse connection endpoint resource from a data catalog resource.
    detach_catalog_private_endpoint => DETACH_CATALOG_PRIVATE_ENDPOINT = Operation::post(
        "DetachCatalogPrivateEndpoint",
        "/catalogs/{catalogId}/actions/detachCatalogPrivateEndpoint",
    )
    .with_headers(GUARDED);
    /// Returns stats on objects by type in the repository.
    object_stats => OBJECT_STATS =
        Operation::get("ObjectStats", "/catalogs/{catalogId}/actions/objectStats")
            .with_query(SORTED_PAGE_QUERY)
            .with_headers(READ);
    /// Returns active users in the system.
    users => USERS = Operation::get("Users", "/catalogs/{catalogId}/actions/getUsers")
        .with_query(SORTED_PAGE_QUERY)
        .with_headers(READ);
    /// Returns a list of recommendations for the given object and recommendation type.
    recommendations => RECOMMENDATIONS =
        Operation::post("Recommendations", "/catalogs/{catalogId}/actions/getRecommendations")
            .with_query(RECOMMENDATIONS_QUERY)
            .with_headers(READ)
            .with_body(Body::None);
    /// Act on a recommendation.
    process_recommendation => PROCESS_RECOMMENDATION = Operation::post(
        "ProcessRecommendation",
        "/catalogs/{catalogId}/actions/processRecommendation",
    )
    .with_headers(MODIFY);
    /// Returns a list of search results within a data catalog.
    search_criteria => SEARCH_CRITERIA =
        Operation::post("SearchCriteria", "/catalogs/{catalogId}/search")
            .with_query(SEARCH_QUERY)
            .with_headers(READ)
            .with_body(Body::Optional);
    /// Returns a list of potential string matches for a given input string.
    suggest_matches => SUGGEST_MATCHES =
        Operation::get("SuggestMatches", "/catalogs/{catalogId}/actions/suggest")
            .with_query(SUGGEST_QUERY)
            .with_headers(READ);

    // Catalog private endpoints.

    /// Create a new private reverse connection endpoint.
    create_catalog_private_endpoint => CREATE_CATALOG_PRIVATE_ENDPOINT =
        Operation::post("CreateCatalogPrivateEndpoint", "/catalogPrivateEndpoints")
            .with_headers(CREATE);
    /// Gets a specific private reverse connection by identifier.
    get_catalog_private_endpoint => GET_CATALOG_PRIVATE_ENDPOINT = Operation::get(
        "GetCatalogPrivateEndpoint",
        "/catalogPrivateEndpoints/{catalogPrivateEndpointId}",
    )
    .with_headers(READ);
    /// Returns a list of all the catalog private endpoints in the specified compartment.
    list_catalog_private_endpoints => LIST_CATALOG_PRIVATE_ENDPOINTS =
        Operation::get("ListCatalogPrivateEndpoints", "/catalogPrivateEndpoints")
            .with_query(LIST_IN_COMPARTMENT_QUERY)
            .with_headers(READ);
    /// Updates the private reverse connection endpoint.
    update_catalog_private_endpoint => UPDATE_CATALOG_PRIVATE_ENDPOINT = Operation::put(
        "UpdateCatalogPrivateEndpoint",
        "/catalogPrivateEndpoints/{catalogPrivateEndpointId}",
    )
    .with_headers(MODIFY);
    /// Deletes a private reverse connection endpoint by identifier.
    delete_catalog_private_endpoint => DELETE_CATALOG_PRIVATE_ENDPOINT = Operation::delete(
        "DeleteCatalogPrivateEndpoint",
        "/catalogPrivateEndpoints/{catalogPrivateEndpointId}",
    )
    .with_headers(MODIFY);
    /// Moves a private reverse connection endpoint into a different compartment.
    change_catalog_private_endpoint_compartment => CHANGE_CATALOG_PRIVATE_ENDPOINT_COMPARTMENT =
        Operation::post(
            "ChangeCatalogPrivateEndpointCompartment",
            "/catalogPrivateEndpoints/{catalogPrivateEndpointId}/actions/changeCompartment",
        )
        .with_headers(GUARDED);

    // Metastores.

    /// Creates a new metastore.
    create_metastore => CREATE_METASTORE =
        Operation::post("CreateMetastore", "/metastores").with_headers(CREATE);
    /// Gets a metastore by identifier.
    get_metastore => GET_METASTORE =
        Operation::get("GetMetastore", "/metastores/{metastoreId}").with_headers(READ);
    /// Returns a list of all metastores in the specified compartment.
    list_metastores => LIST_METASTORES = Operation::get("ListMetastores", "/metastores")
        .with_query(LIST_IN_COMPARTMENT_QUERY)
        .with_headers(READ);
    /// Updates a metastore resource by identifier.
    update_metastore => UPDATE_METASTORE =
        Operation::put("UpdateMetastore", "/metastores/{metastoreId}").with_headers(MODIFY);
    /// Deletes a metastore resource by identifier.
    delete_metastore => DELETE_METASTORE =
        Operation::delete("DeleteMetastore", "/metastores/{metastoreId}").with_headers(MODIFY);
    /// Moves a resource into a different compartment.
    change_metastore_compartment => CHANGE_METASTORE_COMPARTMENT = Operation::post(
        "ChangeMetastoreCompartment",
        "/metastores/{metastoreId}/actions/changeCompartment",
    )
    .with_headers(GUARDED);

    // Data assets.

    /// Create a new data asset.
    create_data_asset => CREATE_DATA_ASSET =
        Operation::post("CreateDataAsset", "/catalogs/{catalogId}/dataAssets")
            .with_headers(CREATE);
    /// Gets a specific data asset for the given key.
    get_data_asset => GET_DATA_ASSET =
        Operation::get("GetDataAsset", "/catalogs/{catalogId}/dataAssets/{dataAssetKey}")
            .with_query(GET_QUERY)
            .with_headers(READ);
    /// Returns a list of data assets within a data catalog.
    list_data_assets => LIST_DATA_ASSETS =
        Operation::get("ListDataAssets", "/catalogs/{catalogId}/dataAssets")
            .with_query(LIST_DATA_ASSETS_QUERY)
            .with_headers(READ);
    /// Updates a specific data asset identified by the given key.
    update_data_asset => UPDATE_DATA_ASSET =
        Operation::put("UpdateDataAsset", "/catalogs/{catalogId}/dataAssets/{dataAssetKey}")
            .with_headers(MODIFY);
    /// Deletes a specific data asset identified by it's key.
    delete_data_asset => DELETE_DATA_ASSET = Operation::delete(
        "DeleteDataAsset",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}",
    )
    .with_headers(MODIFY);
    /// Add data selector pattern to the data asset.
    add_data_selector_patterns => ADD_DATA_SELECTOR_PATTERNS = Operation::post(
        "AddDataSelectorPatterns",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/addDataSelectorPatterns",
    )
    .with_headers(GUARDED);
    /// Remove data selector pattern from the data asset.
    remove_data_selector_patterns => REMOVE_DATA_SELECTOR_PATTERNS = Operation::post(
        "RemoveDataSelectorPatterns",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/removeDataSelectorPatterns",
    )
    .with_headers(GUARDED);
    /// Import technical objects to a data asset.
    import_data_asset => IMPORT_DATA_ASSET = Operation::post(
        "ImportDataAsset",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/import",
    )
    .with_query(&[IS_MISSING_VALUE_IGNORED])
    .with_headers(CREATE);
    /// Import lineage metadata.
    import_lineage => IMPORT_LINEAGE = Operation::post(
        "ImportLineage",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/importLineage",
    )
    .with_headers(CREATE);
    /// Export technical objects from a data asset in Excel format.
    synchronous_export_data_asset => SYNCHRONOUS_EXPORT_DATA_ASSET = Operation::post(
        "SynchronousExportDataAsset",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/synchronousExport",
    )
    .with_query(EXPORT_DATA_ASSET_QUERY)
    .with_headers(CREATE);
    /// Export technical objects from a data asset in Excel format, returns a job.
    asynchronous_export_data_asset => ASYNCHRONOUS_EXPORT_DATA_ASSET = Operation::post(
        "AsynchronousExportDataAsset",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/asynchronousExport",
    )
    .with_query(EXPORT_DATA_ASSET_QUERY)
    .with_headers(CREATE);
    /// Creates a new data asset tag.
    create_data_asset_tag => CREATE_DATA_ASSET_TAG = Operation::post(
        "CreateDataAssetTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/tags",
    )
    .with_headers(CREATE);
    /// Gets a specific data asset tag.
    get_data_asset_tag => GET_DATA_ASSET_TAG = Operation::get(
        "GetDataAssetTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/tags/{tagKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all tags for a data asset.
    list_data_asset_tags => LIST_DATA_ASSET_TAGS = Operation::get(
        "ListDataAssetTags",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/tags",
    )
    .with_query(LIST_TAGS_QUERY)
    .with_headers(READ);
    /// Deletes a specific data asset tag.
    delete_data_asset_tag => DELETE_DATA_ASSET_TAG = Operation::delete(
        "DeleteDataAssetTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/tags/{tagKey}",
    )
    .with_headers(MODIFY);

    // Connections.

    /// Creates a new connection.
    create_connection => CREATE_CONNECTION = Operation::post(
        "CreateConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections",
    )
    .with_headers(CREATE);
    /// Gets a specific data asset connection by key.
    get_connection => GET_CONNECTION = Operation::get(
        "GetConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections/{connectionKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all connections of a data asset.
    list_connections => LIST_CONNECTIONS = Operation::get(
        "ListConnections",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections",
    )
    .with_query(LIST_CONNECTIONS_QUERY)
    .with_headers(READ);
    /// Updates a specific connection of a data asset.
    update_connection => UPDATE_CONNECTION = Operation::put(
        "UpdateConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections/{connectionKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific connection of a data asset.
    delete_connection => DELETE_CONNECTION = Operation::delete(
        "DeleteConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections/{connectionKey}",
    )
    .with_headers(MODIFY);
    /// Test the connection by connecting to the data asset using credentials in the metadata.
    test_connection => TEST_CONNECTION = Operation::post(
        "TestConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections/{connectionKey}/test",
    )
    .with_headers(CREATE)
    .with_body(Body::None);
    /// Upload connection credentails and metadata for this connection.
    upload_credentials => UPLOAD_CREDENTIALS = Operation::post(
        "UploadCredentials",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/connections/{connectionKey}/actions/uploadCredentials",
    )
    .with_headers(GUARDED);
    /// Import new connection for this data asset.
    import_connection => IMPORT_CONNECTION = Operation::post(
        "ImportConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/importConnection",
    )
    .with_headers(GUARDED);
    /// Parse data asset references through connections from this data asset.
    parse_connection => PARSE_CONNECTION = Operation::post(
        "ParseConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/parseConnection",
    )
    .with_query(&[CONNECTION_KEY])
    .with_headers(GUARDED);
    /// Validate connection by connecting to the data asset using credentials in metadata.
    validate_connection => VALIDATE_CONNECTION = Operation::post(
        "ValidateConnection",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/actions/validateConnection",
    )
    .with_headers(CREATE);

    // Entities.

    /// Creates a new data entity.
    create_entity => CREATE_ENTITY = Operation::post(
        "CreateEntity",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities",
    )
    .with_headers(CREATE);
    /// Gets a specific data entity by key for a data asset.
    get_entity => GET_ENTITY = Operation::get(
        "GetEntity",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all entities of a data asset.
    list_entities => LIST_ENTITIES = Operation::get(
        "ListEntities",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities",
    )
    .with_query(LIST_ENTITIES_QUERY)
    .with_headers(READ);
    /// Updates a specific data entity.
    update_entity => UPDATE_ENTITY = Operation::put(
        "UpdateEntity",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific data entity.
    delete_entity => DELETE_ENTITY = Operation::delete(
        "DeleteEntity",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}",
    )
    .with_headers(MODIFY);
    /// Returns lineage for a given entity object.
    fetch_entity_lineage => FETCH_ENTITY_LINEAGE = Operation::post(
        "FetchEntityLineage",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/actions/fetchLineage",
    )
    .with_headers(MODIFY);
    /// List the physical entities aggregated by this logical entity.
    list_aggregated_physical_entities => LIST_AGGREGATED_PHYSICAL_ENTITIES = Operation::post(
        "ListAggregatedPhysicalEntities",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/actions/listAggregatedPhysicalEntities",
    )
    .with_query(AGGREGATED_PHYSICAL_ENTITIES_QUERY)
    .with_headers(READ)
    .with_body(Body::None);
    /// Returns a list of all rules of a data entity.
    list_rules => LIST_RULES = Operation::get(
        "ListRules",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/rules",
    )
    .with_query(LIST_RULES_QUERY)
    .with_headers(READ);
    /// Creates a new entity tag.
    create_entity_tag => CREATE_ENTITY_TAG = Operation::post(
        "CreateEntityTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/tags",
    )
    .with_headers(CREATE);
    /// Gets a specific entity tag.
    get_entity_tag => GET_ENTITY_TAG = Operation::get(
        "GetEntityTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/tags/{tagKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all tags for a data entity.
    list_entity_tags => LIST_ENTITY_TAGS = Operation::get(
        "ListEntityTags",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/tags",
    )
    .with_query(LIST_TAGS_QUERY)
    .with_headers(READ);
    /// Deletes a specific entity tag.
    delete_entity_tag => DELETE_ENTITY_TAG = Operation::delete(
        "DeleteEntityTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/tags/{tagKey}",
    )
    .with_headers(MODIFY);

    // Attributes.

    /// Creates a new entity attribute.
    create_attribute => CREATE_ATTRIBUTE = Operation::post(
        "CreateAttribute",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes",
    )
    .with_headers(CREATE);
    /// Gets a specific entity attribute by key.
    get_attribute => GET_ATTRIBUTE = Operation::get(
        "GetAttribute",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}",
    )
    .with_query(&[INCLUDE_RELATIONSHIPS, FIELDS])
    .with_headers(READ);
    /// Returns a list of all attributes of a data entity.
    list_attributes => LIST_ATTRIBUTES = Operation::get(
        "ListAttributes",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes",
    )
    .with_query(LIST_ATTRIBUTES_QUERY)
    .with_headers(READ);
    /// Updates a specific data asset attribute.
    update_attribute => UPDATE_ATTRIBUTE = Operation::put(
        "UpdateAttribute",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific entity attribute.
    delete_attribute => DELETE_ATTRIBUTE = Operation::delete(
        "DeleteAttribute",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}",
    )
    .with_headers(MODIFY);
    /// Creates a new entity attribute tag.
    create_attribute_tag => CREATE_ATTRIBUTE_TAG = Operation::post(
        "CreateAttributeTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}/tags",
    )
    .with_headers(CREATE);
    /// Gets a specific entity attribute tag by key.
    get_attribute_tag => GET_ATTRIBUTE_TAG = Operation::get(
        "GetAttributeTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}/tags/{tagKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all tags for an entity attribute.
    list_attribute_tags => LIST_ATTRIBUTE_TAGS = Operation::get(
        "ListAttributeTags",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}/tags",
    )
    .with_query(LIST_TAGS_QUERY)
    .with_headers(READ);
    /// Deletes a specific entity attribute tag.
    delete_attribute_tag => DELETE_ATTRIBUTE_TAG = Operation::delete(
        "DeleteAttributeTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes/{attributeKey}/tags/{tagKey}",
    )
    .with_headers(MODIFY);

    // Folders.

    /// Creates a new folder.
    create_folder => CREATE_FOLDER = Operation::post(
        "CreateFolder",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders",
    )
    .with_headers(CREATE);
    /// Gets a specific data asset folder by key.
    get_folder => GET_FOLDER = Operation::get(
        "GetFolder",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}",
    )
    .with_query(&[INCLUDE_RELATIONSHIPS, FIELDS])
    .with_headers(READ);
    /// Returns a list of all folders.
    list_folders => LIST_FOLDERS = Operation::get(
        "ListFolders",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders",
    )
    .with_query(LIST_FOLDERS_QUERY)
    .with_headers(READ);
    /// Updates a specific folder of a data asset.
    update_folder => UPDATE_FOLDER = Operation::put(
        "UpdateFolder",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific folder of a data asset identified by it's key.
    delete_folder => DELETE_FOLDER = Operation::delete(
        "DeleteFolder",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}",
    )
    .with_headers(MODIFY);
    /// Creates a new folder tag.
    create_folder_tag => CREATE_FOLDER_TAG = Operation::post(
        "CreateFolderTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}/tags",
    )
    .with_headers(CREATE);
    /// Gets a specific folder tag.
    get_folder_tag => GET_FOLDER_TAG = Operation::get(
        "GetFolderTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}/tags/{tagKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all tags for a folder.
    list_folder_tags => LIST_FOLDER_TAGS = Operation::get(
        "ListFolderTags",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}/tags",
    )
    .with_query(LIST_TAGS_QUERY)
    .with_headers(READ);
    /// Deletes a specific folder tag.
    delete_folder_tag => DELETE_FOLDER_TAG = Operation::delete(
        "DeleteFolderTag",
        "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}/tags/{tagKey}",
    )
    .with_headers(MODIFY);

    // Glossaries.

    /// Creates a new glossary.
    create_glossary => CREATE_GLOSSARY =
        Operation::post("CreateGlossary", "/catalogs/{catalogId}/glossaries").with_headers(CREATE);
    /// Gets a specific glossary by key within a data catalog.
    get_glossary => GET_GLOSSARY =
        Operation::get("GetGlossary", "/catalogs/{catalogId}/glossaries/{glossaryKey}")
            .with_query(GET_QUERY)
            .with_headers(READ);
    /// Returns a list of all glossaries within a data catalog.
    list_glossaries => LIST_GLOSSARIES =
        Operation::get("ListGlossaries", "/catalogs/{catalogId}/glossaries")
            .with_query(LIST_QUERY)
            .with_headers(READ);
    /// Updates a specific glossary identified by the given key.
    update_glossary => UPDATE_GLOSSARY =
        Operation::put("UpdateGlossary", "/catalogs/{catalogId}/glossaries/{glossaryKey}")
            .with_headers(MODIFY);
    /// Deletes a specific glossary identified by it's key.
    delete_glossary => DELETE_GLOSSARY =
        Operation::delete("DeleteGlossary", "/catalogs/{catalogId}/glossaries/{glossaryKey}")
            .with_headers(MODIFY);
    /// Returns the fully expanded tree hierarchy of parent and child terms in this glossary.
    expand_tree_for_glossary => EXPAND_TREE_FOR_GLOSSARY = Operation::post(
        "ExpandTreeForGlossary",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/actions/expandTree",
    )
    .with_headers(CREATE)
    .with_body(Body::None);
    /// Export the glossary and the terms and return the exported glossary as csv or json.
    export_glossary => EXPORT_GLOSSARY = Operation::post(
        "ExportGlossary",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/actions/export",
    )
    .with_query(&[IS_RELATIONSHIP_EXPORTED])
    .with_headers(CREATE)
    .with_body(Body::None);
    /// Exports the contents of a glossary in Excel format, returns a job.
    asynchronous_export_glossary => ASYNCHRONOUS_EXPORT_GLOSSARY = Operation::post(
        "AsynchronousExportGlossary",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/actions/asynchronousExport",
    )
    .with_headers(CREATE);
    /// Import the glossary and the terms from csv or json files.
    import_glossary => IMPORT_GLOSSARY = Operation::post(
        "ImportGlossary",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/actions/import",
    )
    .with_query(&[IS_RELATIONSHIP_IMPORTED])
    .with_headers(CREATE);

    // Terms.

    /// Create a new term within a glossary.
    create_term => CREATE_TERM = Operation::post(
        "CreateTerm",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms",
    )
    .with_headers(CREATE);
    /// Get a specific glossary term.
    get_term => GET_TERM = Operation::get(
        "GetTerm",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all terms within a glossary.
    list_terms => LIST_TERMS = Operation::get(
        "ListTerms",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms",
    )
    .with_query(LIST_TERMS_QUERY)
    .with_headers(READ);
    /// Updates a specific glossary term.
    update_term => UPDATE_TERM = Operation::put(
        "UpdateTerm",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific glossary term.
    delete_term => DELETE_TERM = Operation::delete(
        "DeleteTerm",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}",
    )
    .with_headers(MODIFY);
    /// Creates a new term relationship for this term within a glossary.
    create_term_relationship => CREATE_TERM_RELATIONSHIP = Operation::post(
        "CreateTermRelationship",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}/termRelationships",
    )
    .with_headers(CREATE);
    /// Gets a specific glossary term relationship.
    get_term_relationship => GET_TERM_RELATIONSHIP = Operation::get(
        "GetTermRelationship",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}/termRelationships/{termRelationshipKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of all term relationships within a glossary.
    list_term_relationships => LIST_TERM_RELATIONSHIPS = Operation::get(
        "ListTermRelationships",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}/termRelationships",
    )
    .with_query(LIST_NAMED_QUERY)
    .with_headers(READ);
    /// Updates a specific glossary term relationship.
    update_term_relationship => UPDATE_TERM_RELATIONSHIP = Operation::put(
        "UpdateTermRelationship",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}/termRelationships/{termRelationshipKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific glossary term relationship.
    delete_term_relationship => DELETE_TERM_RELATIONSHIP = Operation::delete(
        "DeleteTermRelationship",
        "/catalogs/{catalogId}/glossaries/{glossaryKey}/terms/{termKey}/termRelationships/{termRelationshipKey}",
    )
    .with_headers(MODIFY);
    /// Returns a list of all user created tags in the system.
    list_tags => LIST_TAGS = Operation::get("ListTags", "/catalogs/{catalogId}/tags")
        .with_query(LIST_NAMED_QUERY)
        .with_headers(READ);

    // Jobs.

    /// Creates a new job.
    create_job => CREATE_JOB =
        Operation::post("CreateJob", "/catalogs/{catalogId}/jobs").with_headers(CREATE);
    /// Gets a specific job by key within a data catalog.
    get_job => GET_JOB = Operation::get("GetJob", "/catalogs/{catalogId}/jobs/{jobKey}")
        .with_query(GET_QUERY)
        .with_headers(READ);
    /// Returns a list of jobs within a data catalog.
    list_jobs => LIST_JOBS = Operation::get("ListJobs", "/catalogs/{catalogId}/jobs")
        .with_query(LIST_JOBS_QUERY)
        .with_headers(READ);
    /// Updates a specific job identified by the given key.
    update_job => UPDATE_JOB =
        Operation::put("UpdateJob", "/catalogs/{catalogId}/jobs/{jobKey}").with_headers(MODIFY);
    /// Deletes a specific job identified by it's key.
    delete_job => DELETE_JOB =
        Operation::delete("DeleteJob", "/catalogs/{catalogId}/jobs/{jobKey}").with_headers(MODIFY);
    /// Creates a new job execution.
    create_job_execution => CREATE_JOB_EXECUTION = Operation::post(
        "CreateJobExecution",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions",
    )
    .with_headers(CREATE);
    /// Gets a specific job execution.
    get_job_execution => GET_JOB_EXECUTION = Operation::get(
        "GetJobExecution",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of job executions for a job.
    list_job_executions => LIST_JOB_EXECUTIONS = Operation::get(
        "ListJobExecutions",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions",
    )
    .with_query(LIST_JOB_EXECUTIONS_QUERY)
    .with_headers(READ);
    /// Get a specific job log.
    get_job_log => GET_JOB_LOG = Operation::get(
        "GetJobLog",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}/logs/{jobLogKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of job logs.
    list_job_logs => LIST_JOB_LOGS = Operation::get(
        "ListJobLogs",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}/logs",
    )
    .with_query(LIST_JOB_LOGS_QUERY)
    .with_headers(READ);
    /// Gets a specific job metric.
    get_job_metrics => GET_JOB_METRICS = Operation::get(
        "GetJobMetrics",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}/metrics/{jobMetricsKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of job metrics.
    list_job_metrics => LIST_JOB_METRICS = Operation::get(
        "ListJobMetrics",
        "/catalogs/{catalogId}/jobs/{jobKey}/executions/{jobExecutionKey}/metrics",
    )
    .with_query(LIST_JOB_METRICS_QUERY)
    .with_headers(READ);

    // Job definitions.

    /// Creates a new job definition.
    create_job_definition => CREATE_JOB_DEFINITION =
        Operation::post("CreateJobDefinition", "/catalogs/{catalogId}/jobDefinitions")
            .with_headers(CREATE);
    /// Gets a specific job definition by key within a data catalog.
    get_job_definition => GET_JOB_DEFINITION = Operation::get(
        "GetJobDefinition",
        "/catalogs/{catalogId}/jobDefinitions/{jobDefinitionKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of job definitions within a data catalog.
    list_job_definitions => LIST_JOB_DEFINITIONS =
        Operation::get("ListJobDefinitions", "/catalogs/{catalogId}/jobDefinitions")
            .with_query(LIST_JOB_DEFINITIONS_QUERY)
            .with_headers(READ);
    /// Update a specific job definition identified by the given key.
    update_job_definition => UPDATE_JOB_DEFINITION = Operation::put(
        "UpdateJobDefinition",
        "/catalogs/{catalogId}/jobDefinitions/{jobDefinitionKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific job definition identified by it's key.
    delete_job_definition => DELETE_JOB_DEFINITION = Operation::delete(
        "DeleteJobDefinition",
        "/catalogs/{catalogId}/jobDefinitions/{jobDefinitionKey}",
    )
    .with_headers(MODIFY);

    // Namespaces and custom properties.

    /// Create a new namespace to be used by custom properties.
    create_namespace => CREATE_NAMESPACE =
        Operation::post("CreateNamespace", "/catalogs/{catalogId}/namespaces").with_headers(CREATE);
    /// Gets a specific namespace for the given key within a data catalog.
    get_namespace => GET_NAMESPACE =
        Operation::get("GetNamespace", "/catalogs/{catalogId}/namespaces/{namespaceId}")
            .with_query(GET_QUERY)
            .with_headers(READ);
    /// Returns a list of namespaces within a data catalog.
    list_namespaces => LIST_NAMESPACES =
        Operation::get("ListNamespaces", "/catalogs/{catalogId}/namespaces")
            .with_query(LIST_QUERY)
            .with_headers(READ);
    /// Updates a specific namespace identified by the given key.
    update_namespace => UPDATE_NAMESPACE =
        Operation::put("UpdateNamespace", "/catalogs/{catalogId}/namespaces/{namespaceId}")
            .with_headers(MODIFY);
    /// Deletes a specific namespace identified by it's key.
    delete_namespace => DELETE_NAMESPACE =
        Operation::delete("DeleteNamespace", "/catalogs/{catalogId}/namespaces/{namespaceId}")
            .with_headers(MODIFY);
    /// Create a new custom property.
    create_custom_property => CREATE_CUSTOM_PROPERTY = Operation::post(
        "CreateCustomProperty",
        "/catalogs/{catalogId}/namespaces/{namespaceId}/customProperties",
    )
    .with_headers(CREATE);
    /// Gets a specific custom property for the given key within a data catalog.
    get_custom_property => GET_CUSTOM_PROPERTY = Operation::get(
        "GetCustomProperty",
        "/catalogs/{catalogId}/namespaces/{namespaceId}/customProperties/{customPropertyKey}",
    )
    .with_query(GET_QUERY)
    .with_headers(READ);
    /// Returns a list of custom properties within a data catalog.
    list_custom_properties => LIST_CUSTOM_PROPERTIES = Operation::get(
        "ListCustomProperties",
        "/catalogs/{catalogId}/namespaces/{namespaceId}/customProperties",
    )
    .with_query(LIST_CUSTOM_PROPERTIES_QUERY)
    .with_headers(READ);
    /// Updates a specific custom property identified by the given key.
    update_custom_property => UPDATE_CUSTOM_PROPERTY = Operation::put(
        "UpdateCustomProperty",
        "/catalogs/{catalogId}/namespaces/{namespaceId}/customProperties/{customPropertyKey}",
    )
    .with_headers(MODIFY);
    /// Deletes a specific custom property identified by it's key.
    delete_custom_property => DELETE_CUSTOM_PROPERTY = Operation::delete(
        "DeleteCustomProperty",
        "/catalogs/{catalogId}/namespaces/{namespaceId}/customProperties/{customPropertyKey}",
    )
    .with_headers(MODIFY);

    // Types.

    /// Associate the custom property for the given type.
    associate_custom_property => ASSOCIATE_CUSTOM_PROPERTY = Operation::post(
        "AssociateCustomProperty",
        "/catalogs/{catalogId}/types/{typeKey}/actions/associateCustomProperties",
    )
    .with_headers(GUARDED);
    /// Remove the custom property for the given type.
    disassociate_custom_property => DISASSOCIATE_CUSTOM_PROPERTY = Operation::post(
        "DisassociateCustomProperty",
        "/catalogs/{catalogId}/types/{typeKey}/actions/disassociateCustomProperties",
    )
    .with_headers(GUARDED);
    /// Gets a specific type by key within a data catalog.
    get_type => GET_TYPE = Operation::get("GetType", "/catalogs/{catalogId}/types/{typeKey}")
        .with_query(GET_QUERY)
        .with_headers(READ);
    /// Returns a list of all types within a data catalog.
    list_types => LIST_TYPES = Operation::get("ListTypes", "/catalogs/{catalogId}/types")
        .with_query(LIST_TYPES_QUERY)
        .with_headers(READ);

    // Patterns.

    /// Create a new pattern.
    create_pattern => CREATE_PATTERN =
        Operation::post("CreatePattern", "/catalogs/{catalogId}/patterns").with_headers(CREATE);
    /// Gets a specific pattern by key.
    get_pattern => GET_PATTERN =
        Operation::get("GetPattern", "/catalogs/{catalogId}/patterns/{patternKey}")
            .with_query(GET_QUERY)
            .with_headers(READ);
    /// Returns a list of patterns within a data catalog.
    list_patterns => LIST_PATTERNS =
        Operation::get("ListPatterns", "/catalogs/{catalogId}/patterns")
            .with_query(LIST_PATTERNS_QUERY)
            .with_headers(READ);
    /// Updates a specific pattern identified by the given key.
    update_pattern => UPDATE_PATTERN =
        Operation::put("UpdatePattern", "/catalogs/{catalogId}/patterns/{patternKey}")
            .with_headers(MODIFY);
    /// Deletes a specific pattern identified by it's key.
    delete_pattern => DELETE_PATTERN =
        Operation::delete("DeletePattern", "/catalogs/{catalogId}/patterns/{patternKey}")
            .with_headers(MODIFY);
    /// Validate pattern by deriving file groups representing logical entities using the expression.
    validate_pattern => VALIDATE_PATTERN = Operation::post(
        "ValidatePattern",
        "/catalogs/{catalogId}/patterns/{patternKey}/actions/validate",
    )
    .with_headers(CREATE);
    /// List logical entities derived from this pattern.
    list_derived_logical_entities => LIST_DERIVED_LOGICAL_ENTITIES = Operation::post(
        "ListDerivedLogicalEntities",
        "/catalogs/{catalogId}/patterns/{patternKey}/actions/listDerivedLogicalEntities",
    )
    .with_query(DERIVED_LOGICAL_ENTITIES_QUERY)
    .with_headers(READ)
    .with_body(Body::Optional);

    // Work requests.

    /// Gets the status of the work request with the given OCID.
    get_work_request => GET_WORK_REQUEST =
        Operation::get("GetWorkRequest", "/workRequests/{workRequestId}").with_headers(READ);
    /// Lists the work requests in a compartment.
    list_work_requests => LIST_WORK_REQUESTS = Operation::get("ListWorkRequests", "/workRequests")
        .with_query(&[COMPARTMENT_ID, PAGE, LIMIT])
        .with_headers(READ);
    /// Returns a (paginated) list of errors for a given work request.
    list_work_request_errors => LIST_WORK_REQUEST_ERRORS =
        Operation::get("ListWorkRequestErrors", "/workRequests/{workRequestId}/errors")
            .with_query(LIST_WORK_REQUEST_DETAILS_QUERY)
            .with_headers(READ);
    /// Returns a (paginated) list of logs for a given work request.
    list_work_request_logs => LIST_WORK_REQUEST_LOGS =
        Operation::get("ListWorkRequestLogs", "/workRequests/{workRequestId}/logs")
            .with_query(LIST_WORK_REQUEST_DETAILS_QUERY)
            .with_headers(READ);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Style, Verb};
    use std::collections::HashSet;

    fn snake_case(name: &str) -> String {
        let mut out = String::new();
        for (i, c) in name.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        }
        out
    }

    #[test]
    fn identifiers_match_names() {
        assert_eq!(IDENTIFIERS.len(), ALL.len());
        let mismatched = IDENTIFIERS
            .iter()
            .filter(|(method, id, op)| {
                let want = snake_case(op.name);
                *method != want || *id != want.to_ascii_uppercase()
            })
            .map(|(method, id, op)| format!("{} => {method}, {id}", op.name))
            .collect::<Vec<_>>();
        assert!(mismatched.is_empty(), "{mismatched:#?}");
    }

    #[test]
    fn renamed_list_operations() {
        assert_eq!(LIST_TYPES.name, "ListTypes");
        assert_eq!(LIST_PATTERNS.name, "ListPatterns");
        assert_eq!(RECOMMENDATIONS.name, "Recommendations");
        assert_eq!(LIST_DATA_ASSETS.query, LIST_DATA_ASSETS_QUERY);
    }

    #[test]
    fn find_by_name() {
        assert_eq!(find("GetCatalog"), Some(&GET_CATALOG));
        assert_eq!(find("ListWorkRequestLogs"), Some(&LIST_WORK_REQUEST_LOGS));
        assert_eq!(find("getCatalog"), None);
    }

    #[test]
    fn all_is_complete() {
        let names: HashSet<_> = ALL.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), ALL.len(), "duplicate operation names");
        assert!(ALL.len() > 140, "{}", ALL.len());
    }

    #[test]
    fn catalog_operations() {
        assert_eq!(CREATE_CATALOG.verb, Verb::Post);
        assert_eq!(CREATE_CATALOG.body, Body::Required);
        assert!(CREATE_CATALOG.accepts_retry_token());
        assert!(CREATE_CATALOG.is_idempotent());

        assert_eq!(DELETE_CATALOG.verb, Verb::Delete);
        assert_eq!(DELETE_CATALOG.body, Body::None);
        assert!(DELETE_CATALOG.header_parameter("if-match").is_some());

        let compartment = LIST_CATALOGS.query_parameter("compartmentId");
        assert!(matches!(compartment, Some(p) if p.required), "{compartment:?}");
    }

    #[test]
    fn non_idempotent_posts() {
        for op in [
            &SEARCH_CRITERIA,
            &FETCH_ENTITY_LINEAGE,
            &PROCESS_RECOMMENDATION,
            &LIST_AGGREGATED_PHYSICAL_ENTITIES,
            &LIST_DERIVED_LOGICAL_ENTITIES,
            &RECOMMENDATIONS,
        ] {
            assert_eq!(op.verb, Verb::Post, "{op:?}");
            assert!(!op.is_idempotent(), "{op:?}");
        }
    }

    #[test]
    fn multi_valued_parameters() {
        let fields = GET_DATA_ASSET.query_parameter("fields");
        assert!(matches!(fields, Some(p) if p.style == Style::Multi), "{fields:?}");
        let export = SYNCHRONOUS_EXPORT_DATA_ASSET.query_parameter("exportType");
        assert!(
            matches!(export, Some(p) if p.required && p.style == Style::Multi && p.accepts("ALL")),
            "{export:?}"
        );
    }
}
