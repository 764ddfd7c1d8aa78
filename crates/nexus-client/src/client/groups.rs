use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::Result;
use crate::params::{GroupTreeParams, ListGroupsParams};
use crate::response::{NexusArrayResponse, NexusResponse};

impl super::NexusClient {
    /// Fetch a user's profile as seen by a group.
    #[instrument(skip(self))]
    pub async fn get_user_groups_profile(
        &self,
        group_id: &str,
        username: &str,
    ) -> Result<NexusResponse> {
        self.get(&format!("/groups/{}/members/{}/user", group_id, username))
            .await
    }

    /// Fetch a group.
    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: &str) -> Result<NexusResponse> {
        self.get(&format!("/groups/{}", group_id)).await
    }

    /// Create a group.
    ///
    /// `extra` holds any other group fields; `name` and `description` take
    /// precedence over entries of the same name.
    #[instrument(skip(self, extra))]
    pub async fn create_group(
        &self,
        name: &str,
        description: &str,
        extra: Option<Map<String, Value>>,
    ) -> Result<NexusResponse> {
        let mut body = extra.unwrap_or_default();
        body.insert("name".to_string(), Value::String(name.to_string()));
        body.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
        self.post("/groups", Value::Object(body)).await
    }

    /// Replace a group document.
    #[instrument(skip(self, group_doc))]
    pub async fn update_group<T: Serialize>(
        &self,
        group_id: &str,
        group_doc: &T,
    ) -> Result<NexusResponse> {
        let body = serde_json::to_value(group_doc)?;
        self.put(&format!("/groups/{}", group_id), body).await
    }

    /// Delete a group.
    #[instrument(skip(self))]
    pub async fn delete_group(&self, group_id: &str) -> Result<NexusResponse> {
        self.delete(&format!("/groups/{}", group_id)).await
    }

    /// List groups visible to the caller.
    #[instrument(skip(self))]
    pub async fn list_groups(&self, params: &ListGroupsParams) -> Result<NexusArrayResponse> {
        self.get_array("/groups", params.to_query()).await
    }

    /// Fetch the hierarchy of groups rooted at `group_id`.
    #[instrument(skip(self))]
    pub async fn get_group_tree(
        &self,
        group_id: &str,
        params: &GroupTreeParams,
    ) -> Result<NexusArrayResponse> {
        self.get_array(&format!("/groups/{}/tree", group_id), params.to_query())
            .await
    }
}

#[cfg(test)]
mod tests {
    use globus_nexus_auth::{LegacyGoauthAuthorizer, NullAuthorizer};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::tests::client_for;
    use crate::params::{GroupTreeParams, ListGroupsParams};

    #[tokio::test]
    async fn test_get_user_groups_profile() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups/g1/members/alice/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, LegacyGoauthAuthorizer::new("tok"));
        let profile = client.get_user_groups_profile("g1", "alice").await.unwrap();
        assert_eq!(profile["username"], "alice");
    }

    #[tokio::test]
    async fn test_create_group_merges_extra() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/groups"))
            .and(body_json(json!({
                "name": "Test Group",
                "description": "desc",
                "is_active": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "g2"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut extra = serde_json::Map::new();
        extra.insert("is_active".to_string(), json!(true));
        extra.insert("name".to_string(), json!("overridden"));

        let client = client_for(&mock_server, NullAuthorizer);
        let group = client
            .create_group("Test Group", "desc", Some(extra))
            .await
            .unwrap();
        assert_eq!(group.http_status(), 201);
        assert_eq!(group["id"], "g2");
    }

    #[tokio::test]
    async fn test_update_group_sends_document() {
        let mock_server = MockServer::start().await;
        let doc = json!({"name": "Renamed", "description": "new", "parent": null});

        Mock::given(method("PUT"))
            .and(path("/groups/g1"))
            .and(body_json(doc.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(doc.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, NullAuthorizer);
        let group = client.update_group("g1", &doc).await.unwrap();
        assert_eq!(group["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_list_groups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(query_param("for_all_identities", "true"))
            .and(query_param("my_roles", "admin,manager"))
            .and(query_param("fields", "id,name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "g1", "name": "one"},
                {"id": "g2", "name": "two"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, NullAuthorizer);
        let params = ListGroupsParams::new()
            .for_all_identities(true)
            .fields("id,name")
            .my_roles(["admin", "manager"]);
        let groups = client.list_groups(&params).await.unwrap();

        let ids: Vec<&str> = groups.iter().map(|g| g["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }

    #[tokio::test]
    async fn test_list_groups_omits_false_flag() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, NullAuthorizer);
        let groups = client
            .list_groups(&ListGroupsParams::new().for_all_identities(false))
            .await
            .unwrap();
        assert!(groups.is_empty());

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_group_tree() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups/root/tree"))
            .and(query_param("depth", "2"))
            .and(query_param("my_statuses", "active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "root"},
                {"id": "child", "parent_id": "root"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, NullAuthorizer);
        let tree = client
            .get_group_tree("root", &GroupTreeParams::new().depth(2).my_statuses(vec!["active"]))
            .await
            .unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.as_slice()[1]["parent_id"], "root");
    }

    #[tokio::test]
    async fn test_delete_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/groups/g1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g1", "status": "deleted"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, NullAuthorizer);
        let response = client.delete_group("g1").await.unwrap();
        assert_eq!(response["status"], "deleted");
    }
}
