//! CMDB query builder
//!
//! Renders to a ServiceNow encoded query. As in ServiceNow, `^OR` binds
//! tighter than `^`, so `a ^ b ^OR c` reads as `a AND (b OR c)`.

use std::fmt;

/// Comparison applied to a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    /// Substring match
    Contains,
}

/// How a condition joins the conditions before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub join: Join,
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    fn holds(&self, actual: Option<&str>) -> bool {
        let actual = actual.unwrap_or_default();
        match self.operator {
            Operator::Equals => actual == self.value,
            Operator::Contains => actual.contains(self.value.as_str()),
        }
    }
}

/// Conditions plus ordering for a CMDB table read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdbQuery {
    conditions: Vec<Condition>,
    order_by: Vec<String>,
}

impl CmdbQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, join: Join, field: &str, operator: Operator, value: &str) -> Self {
        self.conditions.push(Condition {
            join,
            field: field.to_string(),
            operator,
            value: value.to_string(),
        });
        self
    }

    pub fn equals(self, field: &str, value: &str) -> Self {
        self.push(Join::And, field, Operator::Equals, value)
    }

    pub fn contains(self, field: &str, value: &str) -> Self {
        self.push(Join::And, field, Operator::Contains, value)
    }

    pub fn or_equals(self, field: &str, value: &str) -> Self {
        self.push(Join::Or, field, Operator::Equals, value)
    }

    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.push(Join::Or, field, Operator::Contains, value)
    }

    /// `field` contains any of `values`
    pub fn contains_any<S: AsRef<str>>(self, field: &str, values: &[S]) -> Self {
        values
            .iter()
            .enumerate()
            .fold(self, |query, (i, value)| match i {
                0 => query.contains(field, value.as_ref()),
                _ => query.or_contains(field, value.as_ref()),
            })
    }

    /// Ascending order on `field`
    pub fn order_by(mut self, field: &str) -> Self {
        self.order_by.push(field.to_string());
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// ServiceNow `sysparm_query` value
    pub fn to_encoded(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (i, condition) in self.conditions.iter().enumerate() {
            let operator = match condition.operator {
                Operator::Equals => "=",
                Operator::Contains => "LIKE",
            };
            let prefix = match (i, condition.join) {
                (0, _) => "",
                (_, Join::And) => "^",
                (_, Join::Or) => "^OR",
            };
            parts.push(format!(
                "{}{}{}{}",
                prefix,
                condition.field,
                operator,
                escape(&condition.value)
            ));
        }
        for field in &self.order_by {
            let prefix = if parts.is_empty() { "" } else { "^" };
            parts.push(format!("{}ORDERBY{}", prefix, field));
        }
        parts.concat()
    }

    /// Evaluate the conditions against a row, given a column lookup
    pub fn matches_with<'r, F>(&self, column: F) -> bool
    where
        F: Fn(&str) -> Option<&'r str>,
    {
        let mut groups: Vec<bool> = Vec::new();
        for condition in &self.conditions {
            let holds = condition.holds(column(&condition.field));
            match (condition.join, groups.last_mut()) {
                (Join::Or, Some(group)) => *group = *group || holds,
                _ => groups.push(holds),
            }
        }
        groups.into_iter().all(|group| group)
    }
}

impl fmt::Display for CmdbQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded())
    }
}

// `^` separates conditions in an encoded query
fn escape(value: &str) -> String {
    value.replace('^', "^^")
}
