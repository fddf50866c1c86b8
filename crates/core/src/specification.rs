//! Composable specifications (named predicates) over queryable entities.
//!
//! A specification does not hold a closure: it produces an [`Expression`], a
//! small boolean expression tree over the fields of `T`. The same tree is
//! evaluated in memory ([`Expression::evaluate`]) or handed to a persistence
//! layer that translates it into its own query language.
//!
//! Specifications can opt out with [`Specification::include`] returning
//! `false` (an optional filter whose parameter was not supplied). Excluded
//! specifications are skipped when combining, they never contribute a `true`
//! term.

use core::cmp::Ordering;
use core::fmt;
use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// A constant or field value inside an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Operand {
    fn partial_cmp_same_kind(&self, other: &Operand) -> Option<Ordering> {
        match (self, other) {
            (Operand::Bool(a), Operand::Bool(b)) => Some(a.cmp(b)),
            (Operand::Int(a), Operand::Int(b)) => Some(a.cmp(b)),
            (Operand::Text(a), Operand::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(v) => write!(f, "{v}"),
            Operand::Int(v) => write!(f, "{v}"),
            Operand::Text(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

/// Binary comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "<>",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Comparison::Eq => ordering == Ordering::Equal,
            Comparison::Ne => ordering != Ordering::Equal,
            Comparison::Lt => ordering == Ordering::Less,
            Comparison::Le => ordering != Ordering::Greater,
            Comparison::Gt => ordering == Ordering::Greater,
            Comparison::Ge => ordering != Ordering::Less,
        }
    }
}

/// Something whose fields can be read by an [`Expression`].
pub trait Queryable {
    /// Addressable fields (usually a fieldless enum).
    type Field: Copy + fmt::Debug + 'static;

    fn field(&self, field: Self::Field) -> Operand;
}

/// Boolean expression tree over the fields `F` of some [`Queryable`] type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<F> {
    /// `field <comparison> operand`. Operands of different kinds never compare.
    Compare {
        field: F,
        comparison: Comparison,
        operand: Operand,
    },
    /// Text field contains `needle`, ignoring case.
    ContainsIgnoreCase { field: F, needle: String },
    And(Box<Expression<F>>, Box<Expression<F>>),
    Or(Box<Expression<F>>, Box<Expression<F>>),
    Not(Box<Expression<F>>),
}

impl<F: Copy> Expression<F> {
    pub fn compare(field: F, comparison: Comparison, operand: impl Into<Operand>) -> Self {
        Expression::Compare {
            field,
            comparison,
            operand: operand.into(),
        }
    }

    pub fn equals(field: F, operand: impl Into<Operand>) -> Self {
        Self::compare(field, Comparison::Eq, operand)
    }

    pub fn contains_ignore_case(field: F, needle: impl Into<String>) -> Self {
        Expression::ContainsIgnoreCase {
            field,
            needle: needle.into(),
        }
    }

    pub fn and(self, other: Expression<F>) -> Self {
        Expression::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expression<F>) -> Self {
        Expression::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        Expression::Not(Box::new(self))
    }

    /// Evaluate the expression against one item.
    pub fn evaluate<T>(&self, item: &T) -> bool
    where
        T: Queryable<Field = F> + ?Sized,
    {
        match self {
            Expression::Compare {
                field,
                comparison,
                operand,
            } => item
                .field(*field)
                .partial_cmp_same_kind(operand)
                .is_some_and(|ordering| comparison.holds(ordering)),
            Expression::ContainsIgnoreCase { field, needle } => match item.field(*field) {
                Operand::Text(haystack) => haystack
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                _ => false,
            },
            Expression::And(left, right) => left.evaluate(item) && right.evaluate(item),
            Expression::Or(left, right) => left.evaluate(item) || right.evaluate(item),
            Expression::Not(inner) => !inner.evaluate(item),
        }
    }
}

/// Heap-allocated specification, the result of combining specifications.
pub type BoxedSpecification<T> = Box<dyn Specification<T>>;

/// A named, composable predicate over `T`.
///
/// All filter parameters are bound at construction; a specification never
/// holds state derived from the data it filters.
pub trait Specification<T: Queryable> {
    /// Whether this specification takes part in filtering at all.
    fn include(&self) -> bool {
        true
    }

    fn to_expression(&self) -> Expression<T::Field>;

    /// In-memory check. Excluded specifications accept everything.
    fn is_satisfied_by(&self, item: &T) -> bool {
        !self.include() || self.to_expression().evaluate(item)
    }

    /// Conjunction that skips an excluded side instead of adding a `true` term.
    fn and<S>(self, other: S) -> BoxedSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
        T: 'static,
    {
        if !self.include() {
            return Box::new(other);
        }
        if !other.include() {
            return Box::new(self);
        }
        Box::new(AndSpecification {
            left: Box::new(self),
            right: Box::new(other),
        })
    }

    /// Disjunction that skips an excluded side.
    fn or<S>(self, other: S) -> BoxedSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
        T: 'static,
    {
        if !self.include() {
            return Box::new(other);
        }
        if !other.include() {
            return Box::new(self);
        }
        Box::new(OrSpecification {
            left: Box::new(self),
            right: Box::new(other),
        })
    }

    /// Negation. An excluded specification stays excluded.
    fn negate(self) -> BoxedSpecification<T>
    where
        Self: Sized + 'static,
        T: 'static,
    {
        Box::new(NotSpecification {
            inner: Box::new(self),
        })
    }
}

impl<T: Queryable> Specification<T> for Box<dyn Specification<T>> {
    fn include(&self) -> bool {
        (**self).include()
    }

    fn to_expression(&self) -> Expression<T::Field> {
        (**self).to_expression()
    }

    fn is_satisfied_by(&self, item: &T) -> bool {
        (**self).is_satisfied_by(item)
    }
}

struct AndSpecification<T: Queryable> {
    left: BoxedSpecification<T>,
    right: BoxedSpecification<T>,
}

impl<T: Queryable> Specification<T> for AndSpecification<T> {
    fn to_expression(&self) -> Expression<T::Field> {
        self.left.to_expression().and(self.right.to_expression())
    }
}

struct OrSpecification<T: Queryable> {
    left: BoxedSpecification<T>,
    right: BoxedSpecification<T>,
}

impl<T: Queryable> Specification<T> for OrSpecification<T> {
    fn to_expression(&self) -> Expression<T::Field> {
        self.left.to_expression().or(self.right.to_expression())
    }
}

struct NotSpecification<T: Queryable> {
    inner: BoxedSpecification<T>,
}

impl<T: Queryable> Specification<T> for NotSpecification<T> {
    fn include(&self) -> bool {
        self.inner.include()
    }

    fn to_expression(&self) -> Expression<T::Field> {
        self.inner.to_expression().negate()
    }
}

/// Expressions of the included specifications, in the order supplied.
pub fn included_expressions<T: Queryable>(
    specifications: &[&dyn Specification<T>],
) -> Vec<Expression<T::Field>> {
    specifications
        .iter()
        .filter(|specification| specification.include())
        .map(|specification| specification.to_expression())
        .collect()
}

/// Keep the items satisfying every included specification (AND semantics).
///
/// Excluded specifications are skipped; with none included every item passes.
pub fn filter_by<T, I>(items: I, specifications: &[&dyn Specification<T>]) -> Vec<I::Item>
where
    T: Queryable,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let expressions = included_expressions(specifications);

    items
        .into_iter()
        .filter(|item| {
            expressions
                .iter()
                .all(|expression| expression.evaluate(item.borrow()))
        })
        .collect()
}
