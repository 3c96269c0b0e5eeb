//! REST adapters for the remote document store
//!
//! Implements the `ContactStore` and `RoleStore` ports over a
//! document-oriented HTTP backend. Calls are issued exactly once; the
//! directory decides whether a failure is terminal or swallowed.

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use rolodex_domain::{Contact, ContactPatch, Result, Role, RolodexError, StoreConfig};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// Contact persistence over the document store REST API
#[derive(Clone)]
pub struct RestContactStore {
    http: HttpClient,
    base: Url,
}

impl RestContactStore {
    /// Build an adapter from the store configuration.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self { http: HttpClient::from_config(config)?, base: parse_base(&config.base_url)? })
    }

    /// Build an adapter around an existing client, used by tests.
    pub fn with_client(http: HttpClient, base_url: &str) -> Result<Self> {
        Ok(Self { http, base: parse_base(base_url)? })
    }

    fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base.as_str().trim_end_matches('/'))
    }

    fn contact_url(&self, id: &str) -> String {
        format!("{}/{id}", self.contacts_url())
    }
}

#[async_trait]
impl rolodex_core::ContactStore for RestContactStore {
    async fn insert(&self, contact: &Contact) -> Result<String> {
        let request = self.http.request(Method::POST, self.contacts_url()).json(contact);
        let response = check_status(self.http.send(request).await?).await?;
        let created: InsertResponse = decode(response).await?;
        Ok(created.id)
    }

    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Contact>> {
        let request = self
            .http
            .request(Method::GET, self.contacts_url())
            .query(&[("owner_id", owner_id), ("order", "created_at.desc")]);
        let response = check_status(self.http.send(request).await?).await?;
        decode(response).await
    }

    async fn patch(&self, id: &str, patch: &ContactPatch) -> Result<()> {
        let request = self.http.request(Method::PATCH, self.contact_url(id)).json(patch);
        check_status(self.http.send(request).await?).await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let request = self.http.request(Method::DELETE, self.contact_url(id));
        check_status(self.http.send(request).await?).await?;
        Ok(())
    }
}

/// Role persistence over the document store REST API
#[derive(Clone)]
pub struct RestRoleStore {
    http: HttpClient,
    base: Url,
}

impl RestRoleStore {
    /// Build an adapter from the store configuration.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Ok(Self { http: HttpClient::from_config(config)?, base: parse_base(&config.base_url)? })
    }

    /// Build an adapter around an existing client, used by tests.
    pub fn with_client(http: HttpClient, base_url: &str) -> Result<Self> {
        Ok(Self { http, base: parse_base(base_url)? })
    }

    fn role_url(&self, owner_id: &str) -> String {
        format!("{}/roles/{owner_id}", self.base.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl rolodex_core::RoleStore for RestRoleStore {
    async fn get_role(&self, owner_id: &str) -> Result<Role> {
        let request = self.http.request(Method::GET, self.role_url(owner_id));
        let response = check_status(self.http.send(request).await?).await?;
        let document: RoleDocument = decode(response).await?;
        // Unknown role strings fall back to visitor rather than failing.
        Ok(Role::parse_or_visitor(&document.role))
    }

    async fn set_role(&self, owner_id: &str, role: Role) -> Result<()> {
        let request = self
            .http
            .request(Method::PUT, self.role_url(owner_id))
            .json(&RoleDocument { role: role.as_str().to_string() });
        check_status(self.http.send(request).await?).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct InsertResponse {
    id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RoleDocument {
    role: String,
}

fn parse_base(base_url: &str) -> Result<Url> {
    Url::parse(base_url)
        .map_err(|err| RolodexError::Config(format!("invalid store base url '{base_url}': {err}")))
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => Err(RolodexError::NotFound(body)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(RolodexError::Auth(format!("{status}: {body}")))
        }
        _ => Err(RolodexError::Store(format!("{status}: {body}"))),
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|err| RolodexError::Store(format!("malformed store response: {err}")))
}
