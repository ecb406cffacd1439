use serde::Deserialize;

/// Validation directives attached to one property.
///
/// Only used as a type hint and as the requiredness signal, never executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRules")]
pub struct RuleSpec {
    tokens: Vec<String>,
}

impl RuleSpec {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `|`-delimited rule string such as `"required|integer|min:1"`
    pub fn parse(spec: &str) -> Self {
        Self::new(
            spec.split('|')
                .map(str::trim)
                .filter(|token| !token.is_empty()),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// All tokens joined with `|`
    pub fn joined(&self) -> String {
        self.tokens.join("|")
    }

    /// Substring match against the joined tokens
    pub fn mentions(&self, needle: &str) -> bool {
        self.joined().contains(needle)
    }
}

impl From<&str> for RuleSpec {
    fn from(spec: &str) -> Self {
        RuleSpec::parse(spec)
    }
}

impl From<Vec<&str>> for RuleSpec {
    fn from(tokens: Vec<&str>) -> Self {
        RuleSpec::new(tokens)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRules {
    Delimited(String),
    List(Vec<serde_json::Value>),
}

/// Non-string list entries (rule objects) are kept in their JSON form
fn rule_token(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(token) => token,
        other => other.to_string(),
    }
}

impl From<RawRules> for RuleSpec {
    fn from(raw: RawRules) -> Self {
        match raw {
            RawRules::Delimited(spec) => RuleSpec::parse(&spec),
            RawRules::List(tokens) => RuleSpec::new(tokens.into_iter().map(rule_token)),
        }
    }
}
