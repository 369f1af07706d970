//! Текстовые отчеты для отладки (любой `core::fmt::Write`, например `heapless::String`)

use core::fmt;
use core::marker::PhantomData;

use crate::fuzzy::rule::{FuzzyValue, Rule};
use crate::fuzzy::store::FuzzyValueStore;
use crate::fuzzy::term::Term;

/// Степени всех термов одной переменной: `Speed: Slow=0.000 Medium=1.000 Fast=0.000`
pub struct DegreeReport<'a, T: Term> {
    store: &'a FuzzyValueStore,
    _terms: PhantomData<T>,
}

impl<'a, T: Term> DegreeReport<'a, T> {
    pub fn new(store: &'a FuzzyValueStore) -> Self {
        Self {
            store,
            _terms: PhantomData,
        }
    }
}

impl<T: Term> fmt::Display for DegreeReport<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::variable_name())?;
        f.write_str(":")?;
        for &term in T::ALL {
            match self.store.get(term) {
                Some(degree) => write!(f, " {}={:.3}", term.name(), degree)?,
                None => write!(f, " {}=-", term.name())?,
            }
        }
        Ok(())
    }
}

/// Сила каждого правила, по строке на правило
pub struct RuleReport<'a, O: Term> {
    rules: &'a [Rule<O>],
    outputs: &'a [FuzzyValue<O>],
}

impl<'a, O: Term> RuleReport<'a, O> {
    pub fn new(rules: &'a [Rule<O>], outputs: &'a [FuzzyValue<O>]) -> Self {
        Self { rules, outputs }
    }
}

impl<O: Term> fmt::Display for RuleReport<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (rule, output)) in self.rules.iter().zip(self.outputs).enumerate() {
            writeln!(
                f,
                "{:>2}: IF {} THEN {}.{} = {:.3}",
                i,
                rule.antecedent(),
                O::variable_name(),
                rule.consequent().name(),
                output.degree
            )?;
        }
        Ok(())
    }
}
