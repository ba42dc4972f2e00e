//! Kind-sets and the registry of participating kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;
use crate::items::{Assumption, Caveat, Debt, LogItem, Todo};

/// Named bundle of kinds assembled for one report type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    /// Assumptions and caveats
    AssumptionsCaveats,
    /// Todos
    TodoList,
    /// Technical debt
    TechnicalDebt,
}

impl LogType {
    /// Every built-in kind-set.
    pub const ALL: [Self; 3] = [Self::AssumptionsCaveats, Self::TodoList, Self::TechnicalDebt];

    /// Name used on the command line and in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssumptionsCaveats => "assumptions_caveats_log",
            Self::TodoList => "todo_list",
            Self::TechnicalDebt => "technical_debt_log",
        }
    }

    /// Default output file name.
    #[must_use]
    pub fn default_outfile(self) -> &'static str {
        match self {
            Self::AssumptionsCaveats => "assumptions_caveats_log.md",
            Self::TodoList => "todo_list.md",
            Self::TechnicalDebt => "technical_debt_log.md",
        }
    }

    /// Built-in template text.
    #[must_use]
    pub fn builtin_template(self) -> &'static str {
        match self {
            Self::AssumptionsCaveats => include_str!("templates/assumptions_caveats_log.md"),
            Self::TodoList => include_str!("templates/todo_list.md"),
            Self::TechnicalDebt => include_str!("templates/technical_debt_log.md"),
        }
    }

    /// Reminder shown when a run leaves the log untouched.
    #[must_use]
    pub fn nudge(self) -> &'static str {
        match self {
            Self::AssumptionsCaveats => "Nudge: Have you updated your assumptions and caveats?",
            Self::TodoList => "Nudge: Have you updated your todos?",
            Self::TechnicalDebt => "Nudge: Have you recorded your technical debt?",
        }
    }

    /// Fresh instances of the kinds in this set, in registration order.
    ///
    /// # Errors
    /// Returns `LogError::Pattern` if a grammar fails to compile.
    pub fn item_types(self) -> Result<Vec<Box<dyn LogItem>>, LogError> {
        let items: Vec<Box<dyn LogItem>> = match self {
            Self::AssumptionsCaveats => vec![Box::new(Assumption::new()?), Box::new(Caveat::new()?)],
            Self::TodoList => vec![Box::new(Todo::new()?)],
            Self::TechnicalDebt => vec![Box::new(Debt::new()?)],
        };
        Ok(items)
    }

    fn valid_names() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for LogType {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LogError::UnknownLogType {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of kinds taking part in a run.
#[derive(Default)]
pub struct LogItemRegistry {
    items: Vec<Box<dyn LogItem>>,
}

impl fmt::Debug for LogItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.items.iter().map(|item| item.name()))
            .finish()
    }
}

impl LogItemRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in kinds of `log_type`.
    ///
    /// # Errors
    /// See [`LogType::item_types`].
    pub fn for_log_type(log_type: LogType) -> Result<Self, LogError> {
        let mut registry = Self::new();
        for item in log_type.item_types()? {
            registry.register(item)?;
        }
        Ok(registry)
    }

    /// Add a kind after checking it provides every capability.
    ///
    /// # Errors
    /// Returns `LogError::InvalidLogItem` for a kind without name, marker or
    /// grammars and `LogError::DuplicateMarker` when the marker is taken.
    pub fn register(&mut self, item: Box<dyn LogItem>) -> Result<(), LogError> {
        let invalid = |reason: &str| LogError::InvalidLogItem {
            name: item.name().to_string(),
            reason: reason.to_string(),
        };
        if item.name().trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if item.template_marker().trim().is_empty() {
            return Err(invalid("template marker is empty"));
        }
        if item.grammars().is_empty() {
            return Err(invalid("no grammars"));
        }
        if self
            .items
            .iter()
            .any(|existing| existing.template_marker() == item.template_marker())
        {
            return Err(LogError::DuplicateMarker(item.template_marker().to_string()));
        }

        tracing::debug!(kind = item.name(), marker = item.template_marker(), "registered log item");
        self.items.push(item);
        Ok(())
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no kind is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LogItem> {
        self.items.iter().map(|item| &**item)
    }

    /// Kind at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn LogItem> {
        self.items.get(index).map(|item| &**item)
    }
}
