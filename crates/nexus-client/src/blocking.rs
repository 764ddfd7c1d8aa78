//! Synchronous wrapper around [`NexusClient`].

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::runtime::{Builder, Runtime};

use globus_nexus_auth::Authorizer;
use globus_nexus_transport::ClientConfig;

use crate::client::NexusClient;
use crate::error::{Error, ErrorKind, Result};
use crate::params::{GroupTreeParams, ListGroupsParams, StringOrList};
use crate::response::{NexusArrayResponse, NexusResponse};

/// Blocking Nexus client.
///
/// Each call drives one request to completion on a private current-thread
/// runtime. Must not be used from within an async context.
#[derive(Debug)]
pub struct BlockingNexusClient {
    inner: NexusClient,
    runtime: Runtime,
}

impl BlockingNexusClient {
    /// Create a client for the Nexus service of the current environment.
    pub fn new(authorizer: impl Into<Authorizer>) -> Result<Self> {
        Self::from_async(NexusClient::new(authorizer)?)
    }

    /// Create a client for an explicit base URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        authorizer: impl Into<Authorizer>,
    ) -> Result<Self> {
        Self::from_async(NexusClient::with_base_url(base_url, authorizer)?)
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        authorizer: impl Into<Authorizer>,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::from_async(NexusClient::with_config(base_url, authorizer, config)?)
    }

    /// Create a client authorized with a legacy Nexus token.
    pub fn from_legacy_token(legacy_token: impl AsRef<str>) -> Result<Self> {
        Self::from_async(NexusClient::from_legacy_token(legacy_token)?)
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: NexusClient) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Other(e.to_string()), e))?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &NexusClient {
        &self.inner
    }

    pub fn into_inner(self) -> NexusClient {
        self.inner
    }

    pub fn active_identity(&self) -> Option<&str> {
        self.inner.active_identity()
    }

    pub fn set_active_identity(&mut self, identity_id: impl Into<String>) {
        self.inner.set_active_identity(identity_id);
    }

    pub fn clear_active_identity(&mut self) {
        self.inner.clear_active_identity();
    }

    pub fn get_goauth_token(&self) -> Result<String> {
        self.runtime.block_on(self.inner.get_goauth_token())
    }

    pub fn get_user(&self, username: &str) -> Result<NexusResponse> {
        self.runtime.block_on(self.inner.get_user(username))
    }

    pub fn get_user_groups_profile(&self, group_id: &str, username: &str) -> Result<NexusResponse> {
        self.runtime
            .block_on(self.inner.get_user_groups_profile(group_id, username))
    }

    pub fn get_group(&self, group_id: &str) -> Result<NexusResponse> {
        self.runtime.block_on(self.inner.get_group(group_id))
    }

    pub fn create_group(
        &self,
        name: &str,
        description: &str,
        extra: Option<Map<String, Value>>,
    ) -> Result<NexusResponse> {
        self.runtime
            .block_on(self.inner.create_group(name, description, extra))
    }

    pub fn update_group<T: Serialize>(&self, group_id: &str, group_doc: &T) -> Result<NexusResponse> {
        self.runtime
            .block_on(self.inner.update_group(group_id, group_doc))
    }

    pub fn delete_group(&self, group_id: &str) -> Result<NexusResponse> {
        self.runtime.block_on(self.inner.delete_group(group_id))
    }

    pub fn list_groups(&self, params: &ListGroupsParams) -> Result<NexusArrayResponse> {
        self.runtime.block_on(self.inner.list_groups(params))
    }

    pub fn get_group_tree(
        &self,
        group_id: &str,
        params: &GroupTreeParams,
    ) -> Result<NexusArrayResponse> {
        self.runtime
            .block_on(self.inner.get_group_tree(group_id, params))
    }

    pub fn get_group_memberships(&self, group_id: &str) -> Result<NexusArrayResponse> {
        self.runtime
            .block_on(self.inner.get_group_memberships(group_id))
    }

    pub fn get_group_membership(&self, group_id: &str, username: &str) -> Result<NexusResponse> {
        self.runtime
            .block_on(self.inner.get_group_membership(group_id, username))
    }

    pub fn create_group_memberships(
        &self,
        group_id: &str,
        usernames: impl Into<StringOrList>,
        emails: Option<StringOrList>,
    ) -> Result<NexusResponse> {
        self.runtime
            .block_on(self.inner.create_group_memberships(group_id, usernames, emails))
    }

    pub fn update_group_membership<T: Serialize>(
        &self,
        group_id: &str,
        username: &str,
        membership_doc: &T,
    ) -> Result<NexusResponse> {
        self.runtime.block_on(
            self.inner
                .update_group_membership(group_id, username, membership_doc),
        )
    }
}
