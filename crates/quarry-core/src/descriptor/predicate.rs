use serde::{Deserialize, Deserializer};
use std::fmt;

/// A node of the filter tree.
///
/// On the wire a node is either `{"AND": [...]}`, `{"OR": [...]}` or a leaf
/// `{"target", "operator", "keyword"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum PredicateNode {
    Boolean {
        op: BooleanOp,
        children: Vec<PredicateNode>,
    },
    Leaf(LeafNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    And,
    Or,
}

/// A single comparison. Every part is optional on the wire so that a missing
/// part is reported as an invalid predicate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeafNode {
    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub keyword: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    And(RawAnd),
    Or(RawOr),
    Leaf(LeafNode),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAnd {
    #[serde(rename = "AND")]
    children: Vec<PredicateNode>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOr {
    #[serde(rename = "OR")]
    children: Vec<PredicateNode>,
}

impl From<RawNode> for PredicateNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::And(RawAnd { children }) => PredicateNode::Boolean {
                op: BooleanOp::And,
                children,
            },
            RawNode::Or(RawOr { children }) => PredicateNode::Boolean {
                op: BooleanOp::Or,
                children,
            },
            RawNode::Leaf(leaf) => PredicateNode::Leaf(leaf),
        }
    }
}

/// Keywords are strings, but numeric searches are commonly sent as bare JSON
/// numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keyword {
        String(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Keyword>::deserialize(deserializer)?.map(|keyword| match keyword {
        Keyword::String(keyword) => keyword,
        Keyword::Number(keyword) => keyword.to_string(),
    }))
}

impl PredicateNode {
    pub fn leaf(
        target: impl Into<String>,
        operator: impl Into<String>,
        keyword: impl Into<String>,
    ) -> PredicateNode {
        PredicateNode::Leaf(LeafNode {
            target: Some(target.into()),
            operator: Some(operator.into()),
            keyword: Some(keyword.into()),
        })
    }

    pub fn and(children: impl IntoIterator<Item = PredicateNode>) -> PredicateNode {
        PredicateNode::Boolean {
            op: BooleanOp::And,
            children: children.into_iter().collect(),
        }
    }

    pub fn or(children: impl IntoIterator<Item = PredicateNode>) -> PredicateNode {
        PredicateNode::Boolean {
            op: BooleanOp::Or,
            children: children.into_iter().collect(),
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BooleanOp::And => "AND",
            BooleanOp::Or => "OR",
        })
    }
}
