use std::{fmt, str::FromStr};

use thiserror::Error;

/// One or more fields of a draft could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", DisplayProblems(.problems))]
pub struct ValidationError {
    problems: Vec<FieldProblem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: &'static str,
    pub issue: FieldIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// A required field is blank.
    Missing,
    /// The field is filled but its value is not acceptable.
    Invalid,
}

impl ValidationError {
    pub fn problems(&self) -> &[FieldProblem] {
        &self.problems
    }

    pub fn has_missing_fields(&self) -> bool {
        self.problems.iter().any(|p| p.issue == FieldIssue::Missing)
    }

    pub fn missing_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields_with(FieldIssue::Missing)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields_with(FieldIssue::Invalid)
    }

    fn fields_with(&self, issue: FieldIssue) -> impl Iterator<Item = &'static str> + '_ {
        self.problems
            .iter()
            .filter(move |p| p.issue == issue)
            .map(|p| p.field)
    }
}

struct DisplayProblems<'a>(&'a [FieldProblem]);

impl fmt::Display for DisplayProblems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let issue = match problem.issue {
                FieldIssue::Missing => "missing",
                FieldIssue::Invalid => "invalid",
            };
            write!(f, "{} is {issue}", problem.field)?;
        }
        Ok(())
    }
}

/// Collects the problems of all fields of a draft before giving up, so the
/// user learns about every empty field at once.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    problems: Vec<FieldProblem>,
}

impl Validator {
    pub(crate) fn required<T: TryFrom<String>>(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<T> {
        self.required_with(field, value, |value| T::try_from(value.into()).ok())
    }

    pub(crate) fn required_parsed<T: FromStr>(
        &mut self,
        field: &'static str,
        value: &str,
    ) -> Option<T> {
        self.required_with(field, value, |value| value.parse().ok())
    }

    fn required_with<T>(
        &mut self,
        field: &'static str,
        value: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Option<T> {
        if value.trim().is_empty() {
            self.push(field, FieldIssue::Missing);
            return None;
        }
        let parsed = parse(value);
        if parsed.is_none() {
            self.push(field, FieldIssue::Invalid);
        }
        parsed
    }

    fn push(&mut self, field: &'static str, issue: FieldIssue) {
        self.problems.push(FieldProblem { field, issue });
    }

    /// Builds the record if no problem was recorded. `build` only returns
    /// `None` when a required value is missing, which has been recorded.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        match build() {
            Some(record) if self.problems.is_empty() => Ok(record),
            _ => Err(ValidationError {
                problems: self.problems,
            }),
        }
    }
}

/// Optional free text: blank input becomes `None`.
pub(crate) fn optional<T: TryFrom<String>>(value: &str) -> Option<T> {
    T::try_from(value.into()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeadName;

    #[test]
    fn collects_all_problems() {
        let mut validator = Validator::default();
        let a = validator.required::<LeadName>("name", "");
        let b = validator.required_parsed::<u8>("count", "many");
        let c = validator.required::<LeadName>("other", "ok");

        let err = validator.finish(|| Some((a?, b?, c?))).unwrap_err();

        assert_eq!(
            err.problems(),
            [
                FieldProblem {
                    field: "name",
                    issue: FieldIssue::Missing
                },
                FieldProblem {
                    field: "count",
                    issue: FieldIssue::Invalid
                },
            ]
        );
        assert!(err.has_missing_fields());
        assert_eq!(
            err.to_string(),
            "Validation failed: name is missing, count is invalid"
        );
    }

    #[test]
    fn optional_blank_is_none() {
        assert_eq!(optional::<LeadName>("  "), None);
        assert_eq!(
            optional::<LeadName>(" ACME "),
            Some(LeadName::try_new("ACME").unwrap())
        );
    }
}
