//! Runner attribute schema
//!
//! The contract the declarative host consumes: for every attribute its
//! value type, who supplies it, whether it is secret, whether changing it
//! forces the runner to be destroyed and re-registered, and its static
//! default. Pure metadata; every adapter operation must honor it (e.g.
//! force-new attributes never appear in an update request).

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Bool,
    Int,
    StringSet,
    /// List of structured objects (project/group associations)
    ObjectList,
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be set in configuration
    Required,

    /// May be set in configuration; carries a default otherwise
    Optional,

    /// Determined by the remote service, only ever read back
    Computed,
}

/// Static default carried by an optional attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Str(&'static str),
}

/// Schema entry for a single runner attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    /// Attribute name as it appears in configuration
    pub name: &'static str,

    /// Value type
    pub value_type: AttributeType,

    /// Who supplies the value
    pub mode: AttributeMode,

    /// Secret; must never be printed or logged by the host
    pub sensitive: bool,

    /// Changing it destroys and re-registers the runner
    pub force_new: bool,

    /// Static default applied when the configuration leaves it unset
    pub default: Option<DefaultValue>,
}

impl AttributeSchema {
    const fn required(name: &'static str, value_type: AttributeType) -> Self {
        Self {
            name,
            value_type,
            mode: AttributeMode::Required,
            sensitive: false,
            force_new: false,
            default: None,
        }
    }

    const fn optional(name: &'static str, value_type: AttributeType) -> Self {
        Self {
            name,
            value_type,
            mode: AttributeMode::Optional,
            sensitive: false,
            force_new: false,
            default: None,
        }
    }

    const fn computed(name: &'static str, value_type: AttributeType) -> Self {
        Self {
            name,
            value_type,
            mode: AttributeMode::Computed,
            sensitive: false,
            force_new: false,
            default: None,
        }
    }

    const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Whether the attribute may appear in an update request
    pub fn is_updatable(&self) -> bool {
        self.mode != AttributeMode::Computed && !self.force_new
    }
}

/// Schema of the runner registration resource
///
/// `id` is the resource identity and intentionally not listed.
pub const RUNNER_SCHEMA: &[AttributeSchema] = &[
    AttributeSchema::required("registration_token", AttributeType::String)
        .sensitive()
        .force_new(),
    AttributeSchema::optional("description", AttributeType::String),
    // Declared but rejected at create time; see AdapterError::NameNotSupported.
    AttributeSchema::optional("name", AttributeType::String).force_new(),
    AttributeSchema::optional("active", AttributeType::Bool).with_default(DefaultValue::Bool(true)),
    AttributeSchema::optional("locked", AttributeType::Bool)
        .with_default(DefaultValue::Bool(false)),
    AttributeSchema::optional("run_untagged", AttributeType::Bool)
        .with_default(DefaultValue::Bool(true)),
    AttributeSchema::optional("tags", AttributeType::StringSet),
    AttributeSchema::optional("access_level", AttributeType::String)
        .with_default(DefaultValue::Str("not_protected")),
    AttributeSchema::optional("maximum_timeout", AttributeType::Int),
    AttributeSchema::computed("version", AttributeType::String),
    AttributeSchema::computed("revision", AttributeType::String),
    AttributeSchema::computed("platform", AttributeType::String),
    AttributeSchema::computed("architecture", AttributeType::String),
    AttributeSchema::computed("ip_address", AttributeType::String),
    AttributeSchema::computed("is_shared", AttributeType::Bool),
    AttributeSchema::computed("contacted_at", AttributeType::String),
    AttributeSchema::computed("online", AttributeType::Bool),
    AttributeSchema::computed("status", AttributeType::String),
    AttributeSchema::computed("token", AttributeType::String).sensitive(),
    AttributeSchema::computed("projects", AttributeType::ObjectList),
    AttributeSchema::computed("groups", AttributeType::ObjectList),
];

/// Look up a single attribute by name
pub fn get(name: &str) -> Option<&'static AttributeSchema> {
    RUNNER_SCHEMA.iter().find(|attr| attr.name == name)
}

/// Attributes whose change forces destroy-and-recreate
pub fn force_new() -> impl Iterator<Item = &'static AttributeSchema> {
    RUNNER_SCHEMA.iter().filter(|attr| attr.force_new)
}

/// Attributes the remote service determines
pub fn computed() -> impl Iterator<Item = &'static AttributeSchema> {
    RUNNER_SCHEMA
        .iter()
        .filter(|attr| attr.mode == AttributeMode::Computed)
}

/// Attributes eligible for a partial update
pub fn updatable() -> impl Iterator<Item = &'static AttributeSchema> {
    RUNNER_SCHEMA.iter().filter(|attr| attr.is_updatable())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_token_is_secret_and_force_new() {
        let attr = get("registration_token").unwrap();
        assert_eq!(attr.mode, AttributeMode::Required);
        assert!(attr.sensitive);
        assert!(attr.force_new);
        assert!(!attr.is_updatable());
    }

    #[test]
    fn test_boolean_defaults() {
        assert_eq!(
            get("active").unwrap().default,
            Some(DefaultValue::Bool(true))
        );
        assert_eq!(
            get("locked").unwrap().default,
            Some(DefaultValue::Bool(false))
        );
        assert_eq!(
            get("run_untagged").unwrap().default,
            Some(DefaultValue::Bool(true))
        );
    }

    #[test]
    fn test_access_level_default() {
        assert_eq!(
            get("access_level").unwrap().default,
            Some(DefaultValue::Str("not_protected"))
        );
    }

    #[test]
    fn test_token_is_computed_and_secret() {
        let attr = get("token").unwrap();
        assert_eq!(attr.mode, AttributeMode::Computed);
        assert!(attr.sensitive);
    }

    #[test]
    fn test_updatable_set_matches_patch_fields() {
        // Must stay in lockstep with RunnerPatch.
        let updatable: Vec<&str> = updatable().map(|attr| attr.name).collect();
        assert_eq!(
            updatable,
            vec![
                "description",
                "active",
                "locked",
                "run_untagged",
                "tags",
                "access_level",
                "maximum_timeout",
            ]
        );
    }

    #[test]
    fn test_force_new_attributes() {
        let force_new: Vec<&str> = force_new().map(|attr| attr.name).collect();
        assert_eq!(force_new, vec!["registration_token", "name"]);
    }

    #[test]
    fn test_association_attributes_are_computed() {
        for name in ["projects", "groups"] {
            let attr = get(name).unwrap();
            assert_eq!(attr.mode, AttributeMode::Computed);
            assert_eq!(attr.value_type, AttributeType::ObjectList);
            assert!(!attr.is_updatable());
        }
    }

    #[test]
    fn test_computed_attributes_have_no_defaults() {
        for attr in computed() {
            assert!(attr.default.is_none(), "{} has a default", attr.name);
        }
    }

    #[test]
    fn test_unknown_attribute_lookup() {
        assert!(get("does_not_exist").is_none());
    }
}
