use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml_ng::{Mapping, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A YAML node whose scalars keep their source text
///
/// `serde_yaml_ng::Value` resolves plain scalars, so `1.10` and `1.1` (or
/// `0x10` and `16`) become the same number. Content hashing needs them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlNode {
    Scalar(String),
    Sequence(Vec<YamlNode>),
    Mapping(BTreeMap<String, YamlNode>),
}

impl YamlNode {
    /// Parses a single YAML document
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        // The resolved tree tells each node's kind; the second pass reads its text
        let shape: Value = serde_yaml_ng::from_str(content)?;
        Shaped(&shape).deserialize(serde_yaml_ng::Deserializer::from_str(content))
    }

    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        match self {
            YamlNode::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn items(&self) -> &[YamlNode] {
        match self {
            YamlNode::Sequence(items) => items,
            _ => &[],
        }
    }

    /// Entries of a mapping node whose keys are not in `known`
    pub fn entries_except(&self, known: &[&str]) -> BTreeMap<String, YamlNode> {
        match self {
            YamlNode::Mapping(entries) => entries
                .iter()
                .filter(|(key, _)| !known.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

impl Serialize for YamlNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YamlNode::Scalar(text) => serializer.serialize_str(text),
            YamlNode::Sequence(items) => serializer.collect_seq(items),
            YamlNode::Mapping(entries) => serializer.collect_map(entries),
        }
    }
}

/// Reads one node as the kind recorded in the resolved tree
struct Shaped<'s>(&'s Value);

impl<'de> DeserializeSeed<'de> for Shaped<'_> {
    type Value = YamlNode;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<YamlNode, D::Error> {
        match self.0 {
            Value::Mapping(mapping) => deserializer.deserialize_map(MappingVisitor(mapping)),
            Value::Sequence(items) => deserializer.deserialize_seq(SequenceVisitor(items)),
            Value::Tagged(_) => {
                let value = Value::deserialize(deserializer)?;
                serde_yaml_ng::to_string(&value)
                    .map(|text| YamlNode::Scalar(text.trim_end().to_string()))
                    .map_err(de::Error::custom)
            }
            _ => String::deserialize(deserializer).map(YamlNode::Scalar),
        }
    }
}

struct MappingVisitor<'s>(&'s Mapping);

impl<'de> Visitor<'de> for MappingVisitor<'_> {
    type Value = YamlNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<YamlNode, A::Error> {
        let mut entries = BTreeMap::new();
        for shape in self.0.values() {
            let Some(key) = access.next_key::<String>()? else {
                break;
            };
            let value = access.next_value_seed(Shaped(shape))?;
            entries.insert(key, value);
        }
        while access.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(YamlNode::Mapping(entries))
    }
}

struct SequenceVisitor<'s>(&'s [Value]);

impl<'de> Visitor<'de> for SequenceVisitor<'_> {
    type Value = YamlNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a YAML sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<YamlNode, A::Error> {
        let mut items = Vec::with_capacity(self.0.len());
        for shape in self.0 {
            match access.next_element_seed(Shaped(shape))? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        while access.next_element::<IgnoredAny>()?.is_some() {}
        Ok(YamlNode::Sequence(items))
    }
}
