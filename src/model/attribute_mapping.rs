/// Semantic roles an identity provider attribute can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Login,
    Name,
    Email,
    Group,
}

impl Role {
    /// Order of entries in the mapped-attributes section of a report.
    pub const MAPPED_ORDER: [Role; 4] = [Role::Login, Role::Name, Role::Email, Role::Group];

    /// Order in which missing-mapping warnings are emitted.
    pub const WARNING_ORDER: [Role; 4] = [Role::Name, Role::Login, Role::Email, Role::Group];

    /// Label used as the key in `mappedAttributes`.
    pub fn label(self) -> &'static str {
        match self {
            Role::Login => "User login value",
            Role::Name => "User name value",
            Role::Email => "User email value",
            Role::Group => "Groups value",
        }
    }

    /// Property name used in warning messages.
    pub fn property(self) -> &'static str {
        match self {
            Role::Login => "login",
            Role::Name => "name",
            Role::Email => "email",
            Role::Group => "group",
        }
    }
}

/// Binding of roles to the attribute names a given IdP actually sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMapping {
    login: String,
    name: String,
    email: Option<String>,
    group: Option<String>,
}

impl AttributeMapping {
    pub fn new(login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: name.into(),
            email: None,
            group: None,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.is_empty());
        self
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group.filter(|g| !g.is_empty());
        self
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Configured attribute name for `role`, or `None` when unset.
    pub fn key_for(&self, role: Role) -> Option<&str> {
        let key = match role {
            Role::Login => Some(self.login()),
            Role::Name => Some(self.name()),
            Role::Email => self.email(),
            Role::Group => self.group(),
        };
        key.filter(|k| !k.is_empty())
    }
}
