use inflections::Inflect;
use itertools::Itertools;

use super::identifiers::{NameContext, sanitize};
use crate::document::HttpMethod;

/// Method name taken from an `operationId`: separators become `_` and the first
/// character is uppercased, so `cloudprofiler.projects.profiles.patch` becomes
/// `Cloudprofiler_projects_profiles_patch`.
pub(crate) fn method_name_from_operation_id(operation_id: &str) -> String {
  sanitize(operation_id.trim(), NameContext::TypeName)
}

/// Method name derived from the HTTP method and the path template.
///
/// ```text
/// GET  /pets/{petId}        => GetPetsByPetId
/// POST /store/order         => PostStoreOrder
/// GET  /                    => Get
/// ```
pub(crate) fn method_name_from_path(method: HttpMethod, path: &str) -> String {
  let segments = path_segments(path)
    .map(|segment| match template_parameter(segment) {
      Some(param) => format!("By{}", pascal_segment(param)),
      None => pascal_segment(segment),
    })
    .join("");

  sanitize(&format!("{}{segments}", pascal_segment(&method.to_string())), NameContext::TypeName)
}

/// The first path segment that is not a template parameter.
pub(crate) fn first_static_segment(path: &str) -> Option<&str> {
  path_segments(path).find(|segment| template_parameter(segment).is_none())
}

pub(crate) fn container_name_with_suffix(base: &str, suffix: &str) -> String {
  format!("{}{suffix}", sanitize(&pascal_segment(base), NameContext::TypeName))
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
  path.split('/').filter(|segment| !segment.is_empty())
}

fn template_parameter(segment: &str) -> Option<&str> {
  segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}

fn pascal_segment(segment: &str) -> String {
  segment.to_pascal_case()
}
