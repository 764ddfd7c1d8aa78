//! Query parameter normalization for Nexus list endpoints.

/// A parameter that accepts either one string or a sequence of strings.
///
/// On the wire a sequence is joined with commas, so `"admin"` and
/// `["admin"]` produce the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrList {
    Single(String),
    List(Vec<String>),
}

impl StringOrList {
    /// The comma-joined wire value. An empty list has no value.
    pub fn to_param(&self) -> Option<String> {
        match self {
            StringOrList::Single(value) => Some(value.clone()),
            StringOrList::List(values) if values.is_empty() => None,
            StringOrList::List(values) => Some(values.join(",")),
        }
    }

    /// The values as a list, wrapping a single string.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::Single(value) => vec![value],
            StringOrList::List(values) => values,
        }
    }

    /// Returns true for an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, StringOrList::List(values) if values.is_empty())
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::Single(value.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(value: String) -> Self {
        StringOrList::Single(value)
    }
}

impl From<&String> for StringOrList {
    fn from(value: &String) -> Self {
        StringOrList::Single(value.clone())
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        StringOrList::List(values)
    }
}

impl From<Vec<&str>> for StringOrList {
    fn from(values: Vec<&str>) -> Self {
        StringOrList::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for StringOrList {
    fn from(values: &[&str]) -> Self {
        StringOrList::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for StringOrList {
    fn from(values: &[String]) -> Self {
        StringOrList::List(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for StringOrList {
    fn from(values: [&str; N]) -> Self {
        StringOrList::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Set `name` to `value`, replacing any caller-supplied entry of that name.
fn merge_param(params: &mut Vec<(String, String)>, name: &str, value: Option<String>) {
    if let Some(value) = value {
        params.retain(|(k, _)| k != name);
        params.push((name.to_string(), value));
    }
}

/// Options for `NexusClient::list_groups`.
///
/// # Example
///
/// ```
/// use globus_nexus_client::ListGroupsParams;
///
/// let params = ListGroupsParams::new()
///     .for_all_identities(true)
///     .my_roles(["admin", "manager"]);
///
/// assert_eq!(
///     params.to_query(),
///     vec![
///         ("for_all_identities".to_string(), "true".to_string()),
///         ("my_roles".to_string(), "admin,manager".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsParams {
    /// Sent as `"true"` when set; never sent as `"false"`.
    pub for_all_identities: bool,
    pub fields: Option<String>,
    pub my_roles: Option<StringOrList>,
    /// Additional query parameters passed through unchanged.
    pub extra: Vec<(String, String)>,
}

impl ListGroupsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_all_identities(mut self, value: bool) -> Self {
        self.for_all_identities = value;
        self
    }

    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn my_roles(mut self, roles: impl Into<StringOrList>) -> Self {
        self.my_roles = Some(roles.into());
        self
    }

    /// Add an extra query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Build the query parameters. Named options override extras.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = self.extra.clone();
        merge_param(
            &mut params,
            "for_all_identities",
            self.for_all_identities.then(|| "true".to_string()),
        );
        merge_param(&mut params, "fields", self.fields.clone());
        merge_param(
            &mut params,
            "my_roles",
            self.my_roles.as_ref().and_then(StringOrList::to_param),
        );
        params
    }
}

/// Options for `NexusClient::get_group_tree`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTreeParams {
    pub depth: Option<u32>,
    pub my_roles: Option<StringOrList>,
    pub my_statuses: Option<StringOrList>,
    /// Additional query parameters passed through unchanged.
    pub extra: Vec<(String, String)>,
}

impl GroupTreeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn my_roles(mut self, roles: impl Into<StringOrList>) -> Self {
        self.my_roles = Some(roles.into());
        self
    }

    pub fn my_statuses(mut self, statuses: impl Into<StringOrList>) -> Self {
        self.my_statuses = Some(statuses.into());
        self
    }

    /// Add an extra query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Build the query parameters. Named options override extras.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = self.extra.clone();
        merge_param(&mut params, "depth", self.depth.map(|d| d.to_string()));
        merge_param(
            &mut params,
            "my_roles",
            self.my_roles.as_ref().and_then(StringOrList::to_param),
        );
        merge_param(
            &mut params,
            "my_statuses",
            self.my_statuses.as_ref().and_then(StringOrList::to_param),
        );
        params
    }
}
