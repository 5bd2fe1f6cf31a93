//! Core data types for the quest editor
//!
//! This module contains the chapter document model the variable editor
//! works on.
//!
//! # Main Types
//!
//! - [`VariableDefinition`] - A typed state slot (flag or number) with an initial value
//! - [`Chapter`] - Variables plus the branch data that references them
//! - [`Branch`], [`Segment`], [`SegmentOption`] - Narrative structure
//! - [`Condition`], [`Operation`] - Gating logic and effects on an option
//!
//! # Variable References
//!
//! Conditions and operations refer to variables through their [`VariableId`],
//! never through their name or position, so renaming and reordering variables
//! never invalidates branch data. Deleting one does; see
//! [`crate::model::cleanup`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier of a variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableId(String);

impl VariableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariableId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Declared type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// Boolean flag
    Bool,
    /// Real number
    Number,
}

impl VariableKind {
    /// The value a freshly created variable of this kind starts with
    pub fn default_value(&self) -> VariableValue {
        match self {
            VariableKind::Bool => VariableValue::Bool(false),
            VariableKind::Number => VariableValue::Number(0.0),
        }
    }

    /// Get all kinds in picker order
    pub fn all() -> &'static [VariableKind] {
        &[VariableKind::Bool, VariableKind::Number]
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Bool => write!(f, "flag"),
            VariableKind::Number => write!(f, "number"),
        }
    }
}

/// A variable value; the variant doubles as the variable's type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Number(f64),
}

impl VariableValue {
    pub fn kind(&self) -> VariableKind {
        match self {
            VariableValue::Bool(_) => VariableKind::Bool,
            VariableValue::Number(_) => VariableKind::Number,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VariableValue::Bool(b) => Some(*b),
            VariableValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            VariableValue::Number(n) => Some(*n),
            VariableValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Bool(b) => write!(f, "{}", b),
            VariableValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Definition of one chapter variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Stable identifier, referenced by conditions and operations
    pub id: VariableId,

    /// Display name, editable by the author
    pub name: String,

    /// Value at chapter start; its variant fixes the variable type
    pub initial_value: VariableValue,
}

impl VariableDefinition {
    pub fn new(id: VariableId, name: impl Into<String>, initial_value: VariableValue) -> Self {
        Self {
            id,
            name: name.into(),
            initial_value,
        }
    }

    pub fn kind(&self) -> VariableKind {
        self.initial_value.kind()
    }
}

/// What the right-hand operand of a condition denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompareTo {
    /// A literal constant
    #[default]
    Value,
    /// The id of another variable
    Variable,
}

/// Comparison operator of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Comparison {
    #[default]
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }
}

/// Predicate gating an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Variable being tested
    pub left: VariableId,

    pub comparison: Comparison,

    #[serde(default)]
    pub compare_to: CompareTo,

    /// Literal text when comparing to a value, a variable id otherwise
    pub right: String,
}

impl Condition {
    /// Condition comparing a variable against a literal
    pub fn against_value(left: VariableId, comparison: Comparison, value: VariableValue) -> Self {
        Self {
            left,
            comparison,
            compare_to: CompareTo::Value,
            right: value.to_string(),
        }
    }

    /// Condition comparing two variables
    pub fn against_variable(left: VariableId, comparison: Comparison, right: &VariableId) -> Self {
        Self {
            left,
            comparison,
            compare_to: CompareTo::Variable,
            right: right.as_str().to_string(),
        }
    }

    /// Whether this condition mentions `id` on either side
    pub fn references(&self, id: &VariableId) -> bool {
        self.left == *id || (self.compare_to == CompareTo::Variable && self.right == id.as_str())
    }
}

/// How an operation changes its target variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationKind {
    #[default]
    Assign,
    Add,
    Subtract,
    /// Flip a flag; the operand is ignored
    Toggle,
}

impl OperationKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            OperationKind::Assign => "=",
            OperationKind::Add => "+=",
            OperationKind::Subtract => "-=",
            OperationKind::Toggle => "!=",
        }
    }
}

/// Effect applied to a variable when an option is taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Target variable
    pub variable_id: VariableId,

    #[serde(default)]
    pub kind: OperationKind,

    pub value: VariableValue,
}

impl Operation {
    pub fn new(variable_id: VariableId, kind: OperationKind, value: VariableValue) -> Self {
        Self {
            variable_id,
            kind,
            value,
        }
    }
}

/// A choice offered to the reader at the end of a segment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentOption {
    pub text: String,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// A run of narrative text followed by options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub options: Vec<SegmentOption>,
}

/// A sequence of segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Endings branches terminate the story and never reference variables
    #[serde(default)]
    pub is_endings_branch: bool,

    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// One chapter of a quest: its variables and its branch data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,

    /// Ordered variable list; the order is the authoring/display order
    #[serde(default)]
    pub variables: Vec<VariableDefinition>,

    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl Chapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Find a variable by ID
    pub fn find_variable(&self, id: &VariableId) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.id == *id)
    }

    /// Find a variable by ID (mutable)
    pub fn find_variable_mut(&mut self, id: &VariableId) -> Option<&mut VariableDefinition> {
        self.variables.iter_mut().find(|v| v.id == *id)
    }

    /// Position of a variable in the list
    pub fn variable_index(&self, id: &VariableId) -> Option<usize> {
        self.variables.iter().position(|v| v.id == *id)
    }

    /// Iterate every option in the chapter together with its branch
    pub fn options(&self) -> impl Iterator<Item = (&Branch, &SegmentOption)> {
        self.branches.iter().flat_map(|br| {
            br.segments
                .iter()
                .flat_map(move |seg| seg.options.iter().map(move |opt| (br, opt)))
        })
    }

    /// Number of conditions and operations mentioning `id`
    pub fn reference_count(&self, id: &VariableId) -> usize {
        self.options()
            .map(|(_, opt)| {
                opt.conditions.iter().filter(|c| c.references(id)).count()
                    + opt
                        .operations
                        .iter()
                        .filter(|o| o.variable_id == *id)
                        .count()
            })
            .sum()
    }
}
