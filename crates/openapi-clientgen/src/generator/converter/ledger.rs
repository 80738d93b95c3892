use std::collections::HashMap;

use crate::generator::ast::QualifiedName;

/// How a finished schema key ended up in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
  Declared(QualifiedName),
  Aliased,
  Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum VisitState {
  Unvisited,
  /// Being resolved. Forward references resolve to the reserved name without re-entering.
  InProgress(QualifiedName),
  Done(Outcome),
}

static UNVISITED: VisitState = VisitState::Unvisited;

/// Visitation state per component key. A key moves `Unvisited -> InProgress -> Done`
/// exactly once per pass.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
  states: HashMap<String, VisitState>,
}

impl Ledger {
  pub(crate) fn state(&self, key: &str) -> &VisitState {
    self.states.get(key).unwrap_or(&UNVISITED)
  }

  pub(crate) fn begin(&mut self, key: &str, name: QualifiedName) {
    debug_assert_eq!(self.state(key), &VisitState::Unvisited, "key '{key}' visited twice");
    self.states.insert(key.to_string(), VisitState::InProgress(name));
  }

  pub(crate) fn finish(&mut self, key: &str, outcome: Outcome) {
    self.states.insert(key.to_string(), VisitState::Done(outcome));
  }

  pub(crate) fn outcomes(&self) -> impl Iterator<Item = (&str, &Outcome)> {
    self.states.iter().filter_map(|(key, state)| match state {
      VisitState::Done(outcome) => Some((key.as_str(), outcome)),
      _ => None,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_state_transitions() {
    let mut ledger = Ledger::default();
    let name = QualifiedName::root("Pet");
    assert_eq!(ledger.state("Pet"), &VisitState::Unvisited);

    ledger.begin("Pet", name.clone());
    assert_eq!(ledger.state("Pet"), &VisitState::InProgress(name.clone()));

    ledger.finish("Pet", Outcome::Declared(name.clone()));
    assert_eq!(ledger.state("Pet"), &VisitState::Done(Outcome::Declared(name)));
    assert_eq!(ledger.outcomes().count(), 1);
  }
}
