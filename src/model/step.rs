use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One node of a recipe's step tree.
///
/// Steps nest to arbitrary depth: a step is either a single instruction
/// (`Leaf`) or a labelled group of child steps (`Branch`). The serialized
/// shape matches the catalog data format: a leaf is a bare string, a branch
/// is a map with a `step` label and a `substeps` list.
///
/// # Examples
///
/// ```
/// use recipe_deck::StepNode;
///
/// let step: StepNode = serde_yaml::from_str("Preheat the oven.").unwrap();
/// assert_eq!(step, StepNode::leaf("Preheat the oven."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepNode {
    /// A plain instruction with no children.
    Leaf(String),
    /// A labelled group of child steps, visited in order.
    Branch {
        #[serde(rename = "step")]
        label: String,
        substeps: Vec<StepNode>,
    },
}

impl StepNode {
    /// Creates a leaf node from its instruction text.
    pub fn leaf(text: impl Into<String>) -> Self {
        StepNode::Leaf(text.into())
    }

    /// Creates a branch node from a label and its children.
    pub fn branch(label: impl Into<String>, substeps: Vec<StepNode>) -> Self {
        StepNode::Branch {
            label: label.into(),
            substeps,
        }
    }
}

/// Deserialization is total: every well-formed YAML/JSON value maps to a
/// node. Strings become leaves and `{step, substeps}` maps become branches;
/// anything else degrades per-node instead of failing the whole document:
///
/// - scalars become leaves holding their display form;
/// - a map with only a `step` label becomes a leaf of that label;
/// - a map with only `substeps` becomes a branch with an empty label;
/// - a bare list becomes a branch with an empty label, so no child text is
///   lost;
/// - `null` and unrecognized maps become empty leaves.
impl<'de> Deserialize<'de> for StepNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StepNodeVisitor)
    }
}

struct StepNodeVisitor;

impl<'de> Visitor<'de> for StepNodeVisitor {
    type Value = StepNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a step string or a map with `step` and `substeps`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v.to_string()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(v.to_string()))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(String::new()))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StepNode::Leaf(String::new()))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StepNodeVisitor)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut substeps = Vec::new();
        while let Some(node) = seq.next_element::<StepNode>()? {
            substeps.push(node);
        }
        Ok(StepNode::Branch {
            label: String::new(),
            substeps,
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut label: Option<String> = None;
        let mut substeps: Option<Vec<StepNode>> = None;

        while let Some(key) = map.next_key::<Text>()? {
            match key.0.as_str() {
                "step" => label = Some(map.next_value::<Text>()?.0),
                "substeps" => substeps = Some(map.next_value::<Substeps>()?.0),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(match (label, substeps) {
            (Some(label), Some(substeps)) => StepNode::Branch { label, substeps },
            (Some(label), None) => StepNode::Leaf(label),
            (None, Some(substeps)) => StepNode::Branch {
                label: String::new(),
                substeps,
            },
            (None, None) => StepNode::Leaf(String::new()),
        })
    }
}

/// Scalar values coerced to their display form; collections to "".
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Text;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a text value")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v.to_string()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(v.to_string()))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Text(String::new()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Text(String::new()))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Text(String::new()))
    }
}

/// A `substeps` value: normally a list of nodes, but a single scalar or map
/// is accepted as a one-child list and `null` as no children.
struct Substeps(Vec<StepNode>);

impl<'de> Deserialize<'de> for Substeps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SubstepsVisitor)
    }
}

struct SubstepsVisitor;

impl<'de> Visitor<'de> for SubstepsVisitor {
    type Value = Substeps;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of steps")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut substeps = Vec::new();
        while let Some(node) = seq.next_element::<StepNode>()? {
            substeps.push(node);
        }
        Ok(Substeps(substeps))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v.to_owned())]))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v)]))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v.to_string())]))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v.to_string())]))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v.to_string())]))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(vec![StepNode::Leaf(v.to_string())]))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Substeps(Vec::new()))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        StepNodeVisitor.visit_map(map).map(|node| Substeps(vec![node]))
    }
}
