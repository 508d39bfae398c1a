//! Bulk CRM imports.
//!
//! Import status payloads are returned as raw JSON objects; their shape
//! depends on the import's state.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;
use uuid::Uuid;

use hubspot_client::{Error, ErrorKind, HubSpotClient, Result};

/// JSON object describing an import, a page of imports, or a page of errors.
pub type ImportResponse = Map<String, Value>;

/// Paging options for listing active imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveImportOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub before: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub after: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
}

/// Paging options for an import's error list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportErrorsOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub after: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// The `importRequest` part of an import upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    pub name: String,
    pub marketable_contact_import: bool,
    /// Object type id to `CREATE`, `UPDATE` or `UPSERT`.
    pub import_operations: BTreeMap<String, String>,
    pub files: Vec<ImportFileConfig>,
}

/// One uploaded file and how its columns map to properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFileConfig {
    pub file_name: String,
    /// `CSV` or `SPREADSHEET`.
    pub file_format: String,
    /// `MONTH_DAY_YEAR`, `DAY_MONTH_YEAR` or `YEAR_MONTH_DAY`.
    pub date_format: String,
    pub file_import_page: ImportFilePageConfig,
    /// File contents, sent as its own multipart part.
    #[serde(skip)]
    pub data: Bytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFilePageConfig {
    pub has_header: bool,
    pub column_mappings: Vec<ImportColumnMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportColumnMapping {
    #[serde(rename = "columnObjectTypeID")]
    pub column_object_type_id: String,
    pub column_name: String,
    pub property_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id_column_type: String,
}

/// Client for `crm/<version>/imports`.
#[derive(Debug, Clone)]
pub struct ImportService {
    client: HubSpotClient,
    path: String,
}

impl ImportService {
    pub fn new(client: HubSpotClient) -> Self {
        let path = client.api_path("crm", "imports");
        Self { client, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn import_path(&self, import_id: i64) -> String {
        format!("{}/{}", self.path, import_id)
    }

    /// List imports that are still running.
    #[instrument(skip(self, options))]
    pub async fn active(&self, options: Option<&ActiveImportOptions>) -> Result<ImportResponse> {
        let default = ActiveImportOptions::default();
        self.client
            .get_with_options(&self.path, options.unwrap_or(&default))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, import_id: i64) -> Result<ImportResponse> {
        self.client.get(&self.import_path(import_id)).await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, import_id: i64) -> Result<ImportResponse> {
        let path = format!("{}/cancel", self.import_path(import_id));
        self.client.post_empty(&path).await
    }

    /// Rows that failed to import.
    #[instrument(skip(self, options))]
    pub async fn errors(
        &self,
        import_id: i64,
        options: Option<&ImportErrorsOptions>,
    ) -> Result<ImportResponse> {
        let path = format!("{}/errors", self.import_path(import_id));
        let default = ImportErrorsOptions::default();
        self.client
            .get_with_options(&path, options.unwrap_or(&default))
            .await
    }

    /// Upload files and start an import.
    #[instrument(skip(self, config), fields(name = %config.name, files = config.files.len()))]
    pub async fn start(&self, config: &ImportConfig) -> Result<ImportResponse> {
        let boundary = format!("hubspot-import-{}", Uuid::new_v4().simple());
        let body = encode_multipart(config, &boundary)?;
        self.client
            .post_multipart(&self.path, &boundary, body)
            .await
    }
}

/// Encode an import as `multipart/form-data`: one JSON `importRequest` part,
/// then one `files` part per file.
pub fn encode_multipart(config: &ImportConfig, boundary: &str) -> Result<Vec<u8>> {
    let request = serde_json::to_vec(config)
        .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;

    let mut body = Vec::with_capacity(
        request.len() + config.files.iter().map(|f| f.data.len() + 128).sum::<usize>() + 128,
    );
    write_part_header(&mut body, boundary, "form-data; name=\"importRequest\"");
    body.extend_from_slice(&request);
    body.extend_from_slice(b"\r\n");

    for file in &config.files {
        let disposition = format!(
            "form-data; name=\"files\"; filename=\"{}\"",
            escape_quotes(&file.file_name)
        );
        write_part_header(&mut body, boundary, &disposition);
        body.extend_from_slice(&file.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    Ok(body)
}

fn write_part_header(body: &mut Vec<u8>, boundary: &str, disposition: &str) {
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: {disposition}\r\n\r\n").as_bytes(),
    );
}

fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
