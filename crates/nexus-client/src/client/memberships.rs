use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::Result;
use crate::params::StringOrList;
use crate::response::{NexusArrayResponse, NexusResponse};

impl super::NexusClient {
    /// List the memberships of a group.
    #[instrument(skip(self))]
    pub async fn get_group_memberships(&self, group_id: &str) -> Result<NexusArrayResponse> {
        self.get_array(&format!("/groups/{}/members", group_id), Vec::new())
            .await
    }

    /// Fetch one membership.
    #[instrument(skip(self))]
    pub async fn get_group_membership(
        &self,
        group_id: &str,
        username: &str,
    ) -> Result<NexusResponse> {
        self.get(&format!("/groups/{}/members/{}", group_id, username))
            .await
    }

    /// Invite users to a group, by username and optionally by email.
    ///
    /// `emails` is only sent when it holds at least one address.
    #[instrument(skip(self, usernames, emails))]
    pub async fn create_group_memberships(
        &self,
        group_id: &str,
        usernames: impl Into<StringOrList>,
        emails: Option<StringOrList>,
    ) -> Result<NexusResponse> {
        let mut body = json!({ "users": usernames.into().into_vec() });

        let emails = emails.map(StringOrList::into_vec).unwrap_or_default();
        if !emails.is_empty() {
            body["emails"] = Value::from(emails);
        }

        self.post(&format!("/groups/{}/members", group_id), body)
            .await
    }

    /// Replace a membership document (role, status and so on).
    #[instrument(skip(self, membership_doc))]
    pub async fn update_group_membership<T: Serialize>(
        &self,
        group_id: &str,
        username: &str,
        membership_doc: &T,
    ) -> Result<NexusResponse> {
        let body = serde_json::to_value(membership_doc)?;
        self.put(&format!("/groups/{}/members/{}", group_id, username), body)
            .await
    }
}
