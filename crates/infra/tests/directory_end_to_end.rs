//! End-to-end test wiring the directory to the REST adapters
//!
//! Drives a `ContactDirectory` backed by `RestContactStore` and
//! `RestRoleStore` against a wiremock server, covering the full
//! sign-in, read, create, and invalidation flow over HTTP.

use std::sync::Arc;

use rolodex_core::{ContactDirectory, DirectoryContext, IdentityProvider, RoleStore};
use rolodex_domain::{CacheSettings, Contact, ContactCategory, ContactDraft};
use rolodex_infra::http::HttpClient;
use rolodex_infra::{LogNotifier, RestContactStore, RestRoleStore, SessionIdentity};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stored_contact(id: &str, created_at: i64) -> Contact {
    Contact {
        id: Some(id.to_string()),
        owner_id: "owner-1".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: format!("{id}@example.com"),
        phone: "612345678".into(),
        category: ContactCategory::Work,
        photo_url: None,
        created_at,
        updated_at: None,
    }
}

/// Tests the signed-in flow end to end: context resolution, a cached
/// read, a create, and the refetch forced by cache invalidation.
#[tokio::test]
async fn test_directory_over_rest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/roles/owner-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "role": "user" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("owner_id", "owner-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([stored_contact("contact-1", 10)])),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "contact-2" })))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::builder().build().expect("http client");
    let contacts = RestContactStore::with_client(http.clone(), &server.uri()).expect("store");
    let roles: Arc<dyn RoleStore> =
        Arc::new(RestRoleStore::with_client(http, &server.uri()).expect("store"));

    let identity = SessionIdentity::new();
    identity.sign_in("owner-1");
    let identity: Arc<dyn IdentityProvider> = Arc::new(identity);
    let ctx = DirectoryContext::resolve(&identity, &roles).await;
    assert_eq!(ctx.owner_id.as_deref(), Some("owner-1"));

    let directory = ContactDirectory::new(
        Arc::new(contacts),
        roles,
        Arc::new(LogNotifier),
        &CacheSettings { ttl_ms: 30_000 },
    );

    // First read queries the server, second is a cache hit.
    let list = directory.contacts(&ctx).await;
    assert_eq!(list.len(), 1);
    let again = directory.contacts(&ctx).await;
    assert_eq!(list, again);

    let draft = ContactDraft {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        phone: "698765432".into(),
        category: ContactCategory::Friend,
        photo_url: None,
    };
    let created = directory.create(&ctx, draft).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("contact-2"));

    // Invalidation forces the second GET /contacts.
    directory.contacts(&ctx).await;
}
