//! Data sources for the gallery, tried in order until one succeeds.
//!
//! The fetch chain is: structured query, then plain HTTP, then the static
//! demo list. Each source is wrapped in its own error boundary -- a failure
//! is logged and masked by moving on to the next source, so the grid never
//! ends up empty. The user-visible failure mode is degraded data, not an
//! error screen.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::Deserialize;

use crate::demo::demo_projects;
use crate::error::ClientError;
use crate::model::{Project, ProjectDraft};

/// A single strategy for obtaining the project list.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Source name, used in degradation logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Project>, ClientError>;
}

/// Try each source in order, returning the first successful result.
///
/// Falls back to the static demo list when every source fails, which only
/// happens if the caller leaves [`StaticSource`] out of the chain.
pub async fn fetch_with_fallback(sources: &[Box<dyn ProjectSource>]) -> Vec<Project> {
    for source in sources {
        match source.fetch().await {
            Ok(projects) => return projects,
            Err(err) => {
                tracing::warn!(source = source.name(), error = %err, "Data source failed, trying next");
            }
        }
    }
    tracing::warn!("All data sources failed, using demo records");
    demo_projects()
}

/// Items wrapper returned by the structured-query surface.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    items: Vec<Project>,
}

/// Structured-query source: `GET {base}/query/listProjects`, unwraps the
/// `{ "items": [...] }` envelope.
pub struct StructuredQuerySource {
    client: reqwest::Client,
    base_url: String,
}

impl StructuredQuerySource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProjectSource for StructuredQuerySource {
    fn name(&self) -> &'static str {
        "structured-query"
    }

    async fn fetch(&self) -> Result<Vec<Project>, ClientError> {
        let response = self
            .client
            .get(format!("{}/query/listProjects", self.base_url))
            .send()
            .await?;

        let envelope: ItemsEnvelope = ensure_success(response).await?.json().await?;
        Ok(envelope.items)
    }
}

/// Plain-HTTP source: `GET {base}/projects`, bare JSON array.
pub struct PlainHttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl PlainHttpSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProjectSource for PlainHttpSource {
    fn name(&self) -> &'static str {
        "plain-http"
    }

    async fn fetch(&self) -> Result<Vec<Project>, ClientError> {
        let response = self
            .client
            .get(format!("{}/projects", self.base_url))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}

/// Terminal source: the fixed demo list. Never fails.
pub struct StaticSource;

#[async_trait]
impl ProjectSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Project>, ClientError> {
        Ok(demo_projects())
    }
}

/// High-level client bundling the standard source chain and the submit path.
pub struct GalleryClient {
    client: reqwest::Client,
    base_url: String,
    sources: Vec<Box<dyn ProjectSource>>,
}

impl GalleryClient {
    /// Build a client with the standard chain: structured query, plain
    /// HTTP, static demo list.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let client = reqwest::Client::new();
        let sources: Vec<Box<dyn ProjectSource>> = vec![
            Box::new(StructuredQuerySource::new(client.clone(), base_url.clone())),
            Box::new(PlainHttpSource::new(client.clone(), base_url.clone())),
            Box::new(StaticSource),
        ];
        Self {
            client,
            base_url,
            sources,
        }
    }

    /// Fetch the project list through the source chain. Never fails.
    pub async fn fetch_projects(&self) -> Vec<Project> {
        fetch_with_fallback(&self.sources).await
    }

    /// Submit a new project to the write handler.
    pub async fn submit(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(format!("{}/projects", self.base_url))
            .json(&draft.to_request_body())
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Submit a draft, degrading to a locally-built record when the write
    /// handler is unreachable or rejects with a server error.
    ///
    /// Returns the record to append to the gallery and whether it was
    /// persisted. The local record gets a millisecond-timestamp identifier,
    /// so the grid stays consistent even while the backend is down.
    pub async fn submit_or_local(&self, draft: &ProjectDraft) -> (Project, bool) {
        match self.submit(draft).await {
            Ok(project) => (project, true),
            Err(err) => {
                tracing::warn!(error = %err, "Create failed, keeping project locally");
                (local_project(draft), false)
            }
        }
    }
}

/// Build an unpersisted record from a draft, mirroring what the server
/// would have assembled, placeholder image included.
fn local_project(draft: &ProjectDraft) -> Project {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let image = if draft.image.is_empty() {
        orangeslice_core::project::placeholder_image_url(&draft.name)
    } else {
        draft.image.clone()
    };

    Project {
        id: millis.to_string(),
        name: draft.name.clone(),
        description: "New project".to_string(),
        image,
        github_link: draft.github_link.clone(),
        project_link: draft.project_link.clone(),
        tags: draft.tags.clone(),
    }
}

/// Map a non-2xx response to [`ClientError::Status`], keeping the body
/// text for the degradation log.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
