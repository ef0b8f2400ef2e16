use super::types::{ReactiveWrapper, TypeName};

/// Expression inside a synthesized constructor or factory body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// The instance under construction.
    This,
    /// Reference to a method or constructor parameter.
    Argument(String),
    /// `target.name`
    Field {
        target: Box<Expression>,
        name: String,
    },
    /// Short-circuit logical AND.
    And(Box<Expression>, Box<Expression>),
    /// `new ty(arguments)`
    New {
        ty: TypeName,
        arguments: Vec<Expression>,
    },
    /// Wrap a value in a reactive container.
    Wrap {
        wrapper: ReactiveWrapper,
        value: Box<Expression>,
    },
    /// `ty.method(arguments)`
    StaticCall {
        ty: TypeName,
        method: String,
        arguments: Vec<Expression>,
    },
    /// `target.method(arguments)`
    Call {
        target: Box<Expression>,
        method: String,
        arguments: Vec<Expression>,
    },
    /// Single-parameter arrow function.
    Lambda {
        parameter: String,
        body: Box<Expression>,
    },
}

impl Expression {
    pub fn argument(name: impl Into<String>) -> Self {
        Expression::Argument(name.into())
    }

    pub fn this_field(name: impl Into<String>) -> Self {
        Expression::This.field(name)
    }

    pub fn field(self, name: impl Into<String>) -> Self {
        Expression::Field {
            target: Box::new(self),
            name: name.into(),
        }
    }

    pub fn and(self, rhs: Expression) -> Self {
        Expression::And(Box::new(self), Box::new(rhs))
    }

    pub fn wrap(wrapper: ReactiveWrapper, value: Expression) -> Self {
        Expression::Wrap {
            wrapper,
            value: Box::new(value),
        }
    }
}

/// Statement inside a synthesized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign { target: Expression, value: Expression },
    Return(Expression),
}
