//! Нечеткие правила ЕСЛИ ... ТО ...

use core::marker::PhantomData;

use crate::config::engine::capacity::MAX_RULES;
use crate::error::FuzzyError;
use crate::fuzzy::evaluator::Evaluator;
use crate::fuzzy::expression::Expr;
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;

/// Степень, с которой утверждается терм
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyValue<T: Term> {
    pub term: T,
    pub degree: f64,
}

impl<T: Term> FuzzyValue<T> {
    pub fn new(term: T, degree: f64) -> Self {
        Self { term, degree }
    }
}

/// Выходы правил одного набора, по одному на правило
pub type RuleOutputs<O> = heapless::Vec<FuzzyValue<O>, MAX_RULES>;

/// Правило: условие -> терм выходной переменной `O`
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<O: Term> {
    antecedent: Expr,
    consequent: O,
}

/// Правило без заключения, см. [`Rule::when`]
///
/// Тип выходной переменной выводится из аргумента `then`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBuilder<O: Term> {
    antecedent: Expr,
    _consequent: PhantomData<O>,
}

impl<O: Term> RuleBuilder<O> {
    pub fn then(self, consequent: O) -> Rule<O> {
        Rule::new(self.antecedent, consequent)
    }
}

impl<O: Term> Rule<O> {
    pub fn new(antecedent: Expr, consequent: O) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }

    /// `Rule::when(условие).then(терм)`
    pub fn when(antecedent: Expr) -> RuleBuilder<O> {
        RuleBuilder {
            antecedent,
            _consequent: PhantomData,
        }
    }

    pub fn antecedent(&self) -> &Expr {
        &self.antecedent
    }

    pub fn consequent(&self) -> O {
        self.consequent
    }

    /// Сила срабатывания правила
    pub fn fire(
        &self,
        store: &FuzzyValueStore,
        evaluator: Evaluator,
    ) -> Result<FuzzyValue<O>, FuzzyError> {
        let degree = self.antecedent.strength_with(store, evaluator)?;
        Ok(FuzzyValue::new(self.consequent, degree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::fuzzy_terms! {
        enum BallPos { Negative, Zero, Positive }
    }

    crate::fuzzy_terms! {
        enum HeadRot { RotNegDir, NoRot, RotPosDir }
    }

    #[test]
    fn test_when_then_without_annotations() {
        let rules = [
            Rule::when(Expr::is(BallPos::Negative)).then(HeadRot::RotPosDir),
            Rule::when(Expr::is(BallPos::Positive) & Expr::is(BallPos::Zero))
                .then(HeadRot::RotNegDir),
        ];
        assert_eq!(rules[0].consequent(), HeadRot::RotPosDir);
        assert_eq!(rules[1].consequent(), HeadRot::RotNegDir);
        assert_eq!(
            Rule::when(Expr::is(BallPos::Zero)).then(HeadRot::NoRot),
            Rule::new(Expr::is(BallPos::Zero), HeadRot::NoRot)
        );
    }

    #[test]
    fn test_fire() {
        let mut store = FuzzyValueStore::new();
        store.set(BallPos::Zero, 0.7).unwrap();

        let rule = Rule::when(Expr::is(BallPos::Zero)).then(HeadRot::NoRot);
        let output = rule.fire(&store, Evaluator::MinMax).unwrap();
        assert_eq!(output, FuzzyValue::new(HeadRot::NoRot, 0.7));
    }

    #[test]
    fn test_evaluate_rules_keeps_order_and_zero_strength() {
        let mut store = FuzzyValueStore::new();
        store.set(BallPos::Negative, 0.0).unwrap();
        store.set(BallPos::Zero, 0.3).unwrap();
        store.set(BallPos::Positive, 0.8).unwrap();

        let rules = [
            Rule::when(Expr::is(BallPos::Negative)).then(HeadRot::RotPosDir),
            Rule::when(Expr::is(BallPos::Zero)).then(HeadRot::NoRot),
            Rule::when(Expr::is(BallPos::Positive)).then(HeadRot::RotNegDir),
        ];
        let outputs = Evaluator::MinMax.evaluate_rules(&rules, &store).unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0], FuzzyValue::new(HeadRot::RotPosDir, 0.0));
        assert_eq!(outputs[1], FuzzyValue::new(HeadRot::NoRot, 0.3));
        assert_eq!(outputs[2], FuzzyValue::new(HeadRot::RotNegDir, 0.8));
    }
}
