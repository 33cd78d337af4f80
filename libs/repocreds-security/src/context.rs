use secrecy::SecretString;
use uuid::Uuid;

/// `SecurityContext` carries the authenticated caller of one request.
///
/// It is immutable once built. An anonymous context (no subject id, no
/// subject name) is a valid value: the policy engine is expected to deny it,
/// callers must not reject it up front.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    /// Subject ID of the user or service making the request.
    subject_id: Uuid,
    /// Login name as asserted by the identity provider (e.g. `admin`).
    subject_name: Option<String>,
    /// Subject type classification (e.g. "user", "service").
    subject_type: Option<String>,
    /// Group claims. Role bindings in the policy engine match on these.
    #[serde(default)]
    groups: Vec<String>,
    /// Token capability restrictions. `["*"]` means first-party.
    #[serde(default)]
    token_scopes: Vec<String>,
    /// Original bearer token for PDP forwarding. Never serialized.
    #[serde(skip)]
    bearer_token: Option<SecretString>,
}

impl SecurityContext {
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous context with no subject and no claims.
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    #[must_use]
    pub fn subject_name(&self) -> Option<&str> {
        self.subject_name.as_deref()
    }

    #[must_use]
    pub fn subject_type(&self) -> Option<&str> {
        self.subject_type.as_deref()
    }

    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    #[must_use]
    pub fn token_scopes(&self) -> &[String] {
        &self.token_scopes
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }

    /// `true` when the context carries neither a subject id nor a name.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.subject_id.is_nil() && self.subject_name.is_none()
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    subject_id: Option<Uuid>,
    subject_name: Option<String>,
    subject_type: Option<String>,
    groups: Vec<String>,
    token_scopes: Vec<String>,
    bearer_token: Option<SecretString>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn subject_name(mut self, name: &str) -> Self {
        self.subject_name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn subject_type(mut self, subject_type: &str) -> Self {
        self.subject_type = Some(subject_type.to_owned());
        self
    }

    #[must_use]
    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub fn group(mut self, group: &str) -> Self {
        self.groups.push(group.to_owned());
        self
    }

    #[must_use]
    pub fn token_scopes(mut self, scopes: Vec<String>) -> Self {
        self.token_scopes = scopes;
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            subject_id: self.subject_id.unwrap_or_default(),
            subject_name: self.subject_name,
            subject_type: self.subject_type,
            groups: self.groups,
            token_scopes: self.token_scopes,
            bearer_token: self.bearer_token,
        }
    }
}
