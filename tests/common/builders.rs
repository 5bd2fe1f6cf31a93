//! Test data builders for creating test objects

use quest_editor::types::{
    Branch, Chapter, Condition, Operation, Segment, SegmentOption, VariableDefinition,
    VariableId, VariableValue,
};

/// Builder for creating test variables
pub struct VariableBuilder {
    id: String,
    name: String,
    value: VariableValue,
}

impl VariableBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            value: VariableValue::Bool(false),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn number(mut self, value: f64) -> Self {
        self.value = VariableValue::Number(value);
        self
    }

    pub fn flag(mut self, value: bool) -> Self {
        self.value = VariableValue::Bool(value);
        self
    }

    pub fn build(self) -> VariableDefinition {
        VariableDefinition::new(VariableId::new(self.id), self.name, self.value)
    }
}

/// Builder for creating test chapters
pub struct ChapterBuilder {
    chapter: Chapter,
}

impl ChapterBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            chapter: Chapter::new(name),
        }
    }

    pub fn variable(mut self, variable: VariableBuilder) -> Self {
        self.chapter.variables.push(variable.build());
        self
    }

    /// Add flags named after their ids
    pub fn flags(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self.chapter.variables.push(VariableBuilder::new(id).build());
        }
        self
    }

    /// Add a branch with one segment holding one option
    pub fn branch_with_option(
        mut self,
        id: &str,
        is_endings_branch: bool,
        conditions: Vec<Condition>,
        operations: Vec<Operation>,
    ) -> Self {
        self.chapter.branches.push(Branch {
            id: id.to_string(),
            name: id.to_string(),
            is_endings_branch,
            segments: vec![Segment {
                id: format!("{}_start", id),
                text: String::new(),
                options: vec![SegmentOption {
                    text: "Continue".to_string(),
                    conditions,
                    operations,
                }],
            }],
        });
        self
    }

    pub fn build(self) -> Chapter {
        self.chapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_builder() {
        let var = VariableBuilder::new("gold").name("Gold").number(12.0).build();

        assert_eq!(var.id.as_str(), "gold");
        assert_eq!(var.name, "Gold");
        assert_eq!(var.initial_value, VariableValue::Number(12.0));
    }

    #[test]
    fn test_chapter_builder() {
        let chapter = ChapterBuilder::new("c")
            .flags(&["a", "b"])
            .branch_with_option("main", false, Vec::new(), Vec::new())
            .build();

        assert_eq!(chapter.variables.len(), 2);
        assert_eq!(chapter.branches[0].segments[0].options.len(), 1);
    }
}
