use strum::Display;

use crate::generator::ast::{LiteralKind, TypeNode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub classes_generated: usize,
  pub enums_generated: usize,
  pub casual_types_generated: usize,
  pub aliases_registered: usize,
  pub operations_mapped: usize,
  pub containers_created: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_type(&mut self, node: &TypeNode) {
    self.types_generated += 1;
    let is_casual = match node {
      TypeNode::Class(class) => {
        self.classes_generated += 1;
        class.is_casual
      }
      TypeNode::Enum(enum_type) => {
        self.enums_generated += 1;
        enum_type.is_casual
      }
    };
    if is_casual {
      self.casual_types_generated += 1;
    }
  }

  pub fn record_alias(&mut self) {
    self.aliases_registered += 1;
  }

  pub fn record_operation(&mut self) {
    self.operations_mapped += 1;
  }

  pub fn record_container(&mut self) {
    self.containers_created += 1;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn skipped_count(&self) -> usize {
    self.warnings.iter().filter(|w| w.is_skipped_item()).count()
  }
}

/// Non-fatal diagnostics collected during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}' has an unsupported shape: {reason}")]
  UnsupportedSchemaShape { schema_name: String, reason: String },
  #[strum(to_string = "Enum '{type_name}' has a member literal of unsupported kind '{literal_kind}'")]
  UnsupportedEnumMemberLiteral {
    type_name: String,
    literal_kind: LiteralKind,
  },
  #[strum(to_string = "[{context}] reference '{reference}' does not resolve to a declared type")]
  UnresolvedReference { context: String, reference: String },
  #[strum(to_string = "Operation '{method} {path}' skipped: {reason}")]
  UnclassifiableOperation {
    method: String,
    path: String,
    reason: String,
  },
  #[strum(to_string = "[{context}] no primitive mapping for type '{schema_type}' with format '{format}', using object")]
  UnmappedPrimitive {
    context: String,
    schema_type: String,
    format: String,
  },
  #[strum(to_string = "[{context}] type could not be determined, using any")]
  UndeterminedType { context: String },
  #[strum(to_string = "[{context}] default value dropped: {reason}")]
  UnsupportedDefault { context: String, reason: String },
  #[strum(to_string = "Schema '{schema_name}' lists {count} allOf entries, only the first two are used")]
  TruncatedAllOf { schema_name: String, count: usize },
  #[strum(to_string = "[{context}] '{original}' renamed to '{renamed}' to avoid a collision")]
  RenamedIdentifier {
    context: String,
    original: String,
    renamed: String,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::UnsupportedSchemaShape { .. } | Self::UnsupportedEnumMemberLiteral { .. } | Self::UnclassifiableOperation { .. }
    )
  }
}
