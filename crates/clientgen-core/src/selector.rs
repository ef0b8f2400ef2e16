//! Type and property selection policies.
//!
//! Selectors are pure predicates. A type participates when no type selector
//! is configured or any of them keeps it. A property gets the strictest vote
//! across all property selectors (`Required > Optional > Excluded`), so a
//! single "keep" vote overrides any number of exclusions.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::schema::{PropertyDescriptor, SourceType};

/// Verdict of a property selector.
///
/// Variants are declared weakest first so the derived ordering is the
/// strictness ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConversionDecision {
    /// Omit the property.
    #[default]
    Excluded,
    /// Keep the property as optional (`name?`).
    Optional,
    /// Keep the property as required.
    Required,
}

impl ConversionDecision {
    pub fn is_kept(&self) -> bool {
        !matches!(self, ConversionDecision::Excluded)
    }
}

/// Decides whether a type takes part in translation.
pub trait TypeSelector: Send + Sync {
    fn should_keep_type(&self, ty: &SourceType) -> bool;
}

impl<F> TypeSelector for F
where
    F: Fn(&SourceType) -> bool + Send + Sync,
{
    fn should_keep_type(&self, ty: &SourceType) -> bool {
        self(ty)
    }
}

/// Votes on whether, and how strictly, a property takes part in translation.
pub trait PropertySelector: Send + Sync {
    fn classify(&self, property: &PropertyDescriptor) -> ConversionDecision;
}

impl<F> PropertySelector for F
where
    F: Fn(&PropertyDescriptor) -> ConversionDecision + Send + Sync,
{
    fn classify(&self, property: &PropertyDescriptor) -> ConversionDecision {
        self(property)
    }
}

/// Keep a type when there are no selectors or any selector keeps it.
pub fn keep_type(selectors: &[Arc<dyn TypeSelector>], ty: &SourceType) -> bool {
    selectors.is_empty() || selectors.iter().any(|s| s.should_keep_type(ty))
}

/// Strictest vote across selectors; `Required` when there are none.
pub fn classify_property(
    selectors: &[Arc<dyn PropertySelector>],
    property: &PropertyDescriptor,
) -> ConversionDecision {
    if selectors.is_empty() {
        return ConversionDecision::Required;
    }

    selectors
        .iter()
        .map(|s| s.classify(property))
        .max()
        .unwrap_or_default()
}

/// Casts the same vote for every property.
#[derive(Debug, Clone, Copy)]
pub struct AllPropertySelector(pub ConversionDecision);

impl Default for AllPropertySelector {
    fn default() -> Self {
        Self(ConversionDecision::Required)
    }
}

impl PropertySelector for AllPropertySelector {
    fn classify(&self, _property: &PropertyDescriptor) -> ConversionDecision {
        self.0
    }
}

/// Votes `decision` for listed properties and `Excluded` for the rest.
///
/// Entries match either a bare property name (`total`) or a member path
/// using the declaring type's simple name (`Order.total`).
#[derive(Debug, Clone)]
pub struct NamedPropertySelector {
    names: HashSet<String>,
    decision: ConversionDecision,
}

impl NamedPropertySelector {
    pub fn new<I, S>(decision: ConversionDecision, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            decision,
        }
    }
}

impl PropertySelector for NamedPropertySelector {
    fn classify(&self, property: &PropertyDescriptor) -> ConversionDecision {
        if self.names.contains(&property.name) || self.names.contains(&property.member_path()) {
            self.decision
        } else {
            ConversionDecision::Excluded
        }
    }
}

/// Keeps types living in a namespace or any of its children.
#[derive(Debug, Clone)]
pub struct NamespaceTypeSelector {
    prefix: String,
}

impl NamespaceTypeSelector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TypeSelector for NamespaceTypeSelector {
    fn should_keep_type(&self, ty: &SourceType) -> bool {
        ty.namespace().is_some_and(|namespace| {
            namespace == self.prefix
                || namespace
                    .strip_prefix(self.prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}
