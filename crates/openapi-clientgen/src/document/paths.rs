use std::fmt;

use indexmap::IndexMap;
use serde::{
  Deserialize, Deserializer, Serialize,
  de::{IgnoredAny, MapAccess, Visitor},
};
use strum::{Display, EnumString};

use super::{RefOr, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaTypeObject {
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
  #[serde(default)]
  pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub parameters: Vec<RefOr<Parameter>>,
  pub request_body: Option<RefOr<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, RefOr<Response>>,
  #[serde(default)]
  pub deprecated: bool,
}

impl Operation {
  pub fn doc(&self) -> Option<String> {
    self
      .summary
      .as_deref()
      .or(self.description.as_deref())
      .map(str::trim)
      .filter(|text| !text.is_empty())
      .map(ToString::to_string)
  }
}

/// The operations of one path template, kept in the order the document declares them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
  pub parameters: Vec<RefOr<Parameter>>,
  pub operations: Vec<(HttpMethod, Operation)>,
}

impl PathItem {
  pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
    self
      .operations
      .iter()
      .find_map(|(candidate, operation)| (*candidate == method).then_some(operation))
  }
}

impl<'de> Deserialize<'de> for PathItem {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(PathItemVisitor)
  }
}

struct PathItemVisitor;

impl<'de> Visitor<'de> for PathItemVisitor {
  type Value = PathItem;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("an OpenAPI path item object")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
    let mut item = PathItem::default();
    while let Some(key) = map.next_key::<String>()? {
      if key == "parameters" {
        item.parameters = map.next_value()?;
      } else if let Ok(method) = key.parse::<HttpMethod>() {
        item.operations.push((method, map.next_value()?));
      } else {
        map.next_value::<IgnoredAny>()?;
      }
    }
    Ok(item)
  }
}
