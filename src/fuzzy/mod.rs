//! Движок нечеткого вывода по Мамдани

pub mod defuzzer;
pub mod diagnostics;
pub mod evaluator;
pub mod expression;
pub mod inference;
pub mod membership;
pub mod merger;
pub mod rule;
pub mod rule_set;
pub mod store;
pub mod term;
pub mod variable;

pub use defuzzer::Defuzzer;
pub use diagnostics::{DegreeReport, RuleReport};
pub use evaluator::Evaluator;
pub use expression::{Atom, Expr};
pub use inference::{Inference, InferenceChannel};
pub use membership::{MembershipFunction, Point};
pub use merger::Merger;
pub use rule::{FuzzyValue, Rule, RuleOutputs};
pub use rule_set::{Fallback, RuleSet};
pub use store::{DegreeKey, FuzzyValueStore};
pub use term::Term;
pub use variable::{LinguisticVariable, VariableBuilder};
