use serde::Deserialize;

/// The transform sentinel meaning "no transform".
pub const DEFAULT: &str = "default";

fn default_transform() -> String {
    DEFAULT.to_string()
}

/// Which columns a query projects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawFields")]
pub enum Fields {
    /// The table's standard projection.
    #[default]
    Default,

    /// Caller-chosen columns, in output order.
    List(Vec<FieldSpec>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFields {
    Sentinel(String),
    List(Vec<FieldSpec>),
}

impl TryFrom<RawFields> for Fields {
    type Error = String;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        match raw {
            RawFields::Sentinel(sentinel) if sentinel == DEFAULT => Ok(Fields::Default),
            RawFields::Sentinel(other) => Err(format!(
                "`fields` must be \"default\" or a list of fields; got {other:?}"
            )),
            RawFields::List(list) => Ok(Fields::List(list)),
        }
    }
}

/// One requested output column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default)]
    pub target: String,

    #[serde(rename = "specification", default = "default_transform")]
    pub transform: String,

    #[serde(rename = "as", default)]
    pub alias: Option<String>,
}

impl FieldSpec {
    pub fn new(target: impl Into<String>) -> FieldSpec {
        FieldSpec {
            target: target.into(),
            transform: default_transform(),
            alias: None,
        }
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// One grouping key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    #[serde(default)]
    pub target: String,

    #[serde(rename = "specification", default = "default_transform")]
    pub transform: String,
}

impl GroupSpec {
    pub fn new(target: impl Into<String>) -> GroupSpec {
        GroupSpec {
            target: target.into(),
            transform: default_transform(),
        }
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }
}

/// One ordering key. `direction` is checked by the validator, not the
/// decoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSpec {
    #[serde(default)]
    pub target: String,

    #[serde(rename = "specification", default = "default_transform")]
    pub transform: String,

    #[serde(rename = "order", default)]
    pub direction: String,
}

impl OrderSpec {
    pub fn asc(target: impl Into<String>) -> OrderSpec {
        OrderSpec::new(target, "ASC")
    }

    pub fn desc(target: impl Into<String>) -> OrderSpec {
        OrderSpec::new(target, "DESC")
    }

    pub fn new(target: impl Into<String>, direction: impl Into<String>) -> OrderSpec {
        OrderSpec {
            target: target.into(),
            transform: default_transform(),
            direction: direction.into(),
        }
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }
}
