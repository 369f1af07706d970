//! Антецеденты правил: дерево термов с нечеткими И/ИЛИ

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use crate::error::FuzzyError;
use crate::fuzzy::evaluator::Evaluator;
use crate::fuzzy::store::{DegreeKey, FuzzyValueStore};
use crate::fuzzy::term::Term;
use crate::utils::math::{clamp_degree, safe_sqrt};

/// Лист дерева: терм конкретной переменной
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    key: DegreeKey,
    variable: &'static str,
    term: &'static str,
}

impl Atom {
    pub fn of<T: Term>(term: T) -> Self {
        Self {
            key: DegreeKey::of(term),
            variable: T::variable_name(),
            term: term.name(),
        }
    }

    pub fn variable(&self) -> &'static str {
        self.variable
    }

    pub fn term(&self) -> &'static str {
        self.term
    }
}

/// Условие правила
///
/// Строится один раз при конфигурации, вычисляется каждый такт.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Is(Atom),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
    /// Усиление: d²
    Very(Box<Expr>),
    /// Ослабление: √d
    Fairly(Box<Expr>),
}

impl Expr {
    pub fn is<T: Term>(term: T) -> Self {
        Expr::Is(Atom::of(term))
    }

    /// Конъюнкция; пустая конъюнкция истинна
    pub fn all(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(children.into_iter().collect())
    }

    /// Дизъюнкция; пустая дизъюнкция ложна
    pub fn any(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(children.into_iter().collect())
    }

    pub fn very(self) -> Self {
        Expr::Very(Box::new(self))
    }

    pub fn fairly(self) -> Self {
        Expr::Fairly(Box::new(self))
    }

    /// Сила условия с операторами Заде (минимум/максимум)
    pub fn strength(&self, store: &FuzzyValueStore) -> Result<f64, FuzzyError> {
        self.strength_with(store, Evaluator::MinMax)
    }

    /// Сила условия с заданной парой операторов
    ///
    /// Отсутствующая в хранилище степень - ошибка, а не ноль.
    pub fn strength_with(
        &self,
        store: &FuzzyValueStore,
        evaluator: Evaluator,
    ) -> Result<f64, FuzzyError> {
        let value = match self {
            Expr::Is(atom) => store.get_key(&atom.key).ok_or(FuzzyError::MissingDegree {
                variable: atom.variable,
                term: atom.term,
            })?,
            Expr::And(children) => {
                let mut acc = 1.0;
                for child in children {
                    acc = evaluator.and(acc, child.strength_with(store, evaluator)?);
                }
                acc
            }
            Expr::Or(children) => {
                let mut acc = 0.0;
                for child in children {
                    acc = evaluator.or(acc, child.strength_with(store, evaluator)?);
                }
                acc
            }
            Expr::Not(child) => 1.0 - child.strength_with(store, evaluator)?,
            Expr::Very(child) => {
                let degree = child.strength_with(store, evaluator)?;
                degree * degree
            }
            Expr::Fairly(child) => safe_sqrt(child.strength_with(store, evaluator)?),
        };

        Ok(clamp_degree(value))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::And(children) | Expr::Or(children) if children.len() > 1 => {
                write!(f, "({})", self)
            }
            _ => write!(f, "{}", self),
        }
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        match self {
            Expr::And(mut children) => {
                children.push(rhs);
                Expr::And(children)
            }
            lhs => Expr::And(alloc::vec![lhs, rhs]),
        }
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        match self {
            Expr::Or(mut children) => {
                children.push(rhs);
                Expr::Or(children)
            }
            lhs => Expr::Or(alloc::vec![lhs, rhs]),
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Is(atom) => write!(f, "{}.{}", atom.variable, atom.term),
            Expr::And(children) | Expr::Or(children) => {
                let separator = if matches!(self, Expr::And(_)) {
                    " AND "
                } else {
                    " OR "
                };
                if children.is_empty() {
                    return f.write_str(if matches!(self, Expr::And(_)) {
                        "TRUE"
                    } else {
                        "FALSE"
                    });
                }
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    child.fmt_operand(f)?;
                }
                Ok(())
            }
            Expr::Not(child) => {
                f.write_str("NOT ")?;
                child.fmt_operand(f)
            }
            Expr::Very(child) => {
                f.write_str("VERY ")?;
                child.fmt_operand(f)
            }
            Expr::Fairly(child) => {
                f.write_str("FAIRLY ")?;
                child.fmt_operand(f)
            }
        }
    }
}
