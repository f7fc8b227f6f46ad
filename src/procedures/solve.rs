/*!
Settles the query of a context, if possible.

# Overview

A solve is a (heuristic) forward-chaining search.
Rules are taken from a [worklist](crate::db::worklist), and inference rules are built from each rule.
When an inference rule fires its conclusion is [propagated](crate::procedures::propagate), and the worklist is rescored.

For each iteration, the first rule `s` of the worklist is removed, and:

- If `s` is an implication:
  + [Modus ponens](crate::inference::ModusPonens) and then [modus tollens](crate::inference::ModusTollens) are tried.
  + If neither may fire, nor could fire later, the worklist is searched for an implication whose antecedent is the consequent of `s`.
    * If found, a [hypothetical syllogism](crate::inference::HypotheticalSyllogism) is made and the chained implication propagated (and so added to the worklist).
    * Otherwise, `s` is pushed to the back of the worklist to be retried, unless the worklist is empty, in which case the solve ends.
- If `s` is a disjunction, [disjunctive syllogism](crate::inference::DisjunctiveSyllogism) is tried on each side.
  If neither side may fire, nor could fire later, `s` is pushed to the back of the worklist.

After each iteration the query is evaluated.
If the query has a value the solve ends with that value, and otherwise the solve continues until the worklist is empty or the [iteration limit](crate::config::Config::iteration_limit) is reached.

An inference rule *could fire later* when the value of its second premise is unknown.
If the second premise of each inference rule built from `s` has some value then `s` has done all it can, and is discharged from the worklist.

Roughly, the loop is as diagrammed:

```none
                +-------------+  fired    +-----------+
  worklist ---->| build rules |---------->| propagate |----+
     ⌃          +-------------+           +-----------+    |
     |                 |                                   ⌄
     |                 | unknown                     +-------------+
     +-----------------+                             | rescore and |
     |  retry, or chain                              |  query?     |---> Entailed / Contradicted
     |                                               +-------------+
     +---------------------------------------------------------+
```

Failing to settle the query is not an error.

# Example

```rust
# use infero::config::Config;
# use infero::context::Context;
# use infero::reports::Report;
# use infero::structures::sentence::Sentence;
let mut the_context = Context::from_config(Config::default());

let a = Sentence::symbol("A");
let b = Sentence::symbol("B");
let c = Sentence::symbol("C");

let _ = the_context.add_rule(Sentence::implication(a.clone(), b.clone()));
let _ = the_context.add_rule(Sentence::implication(b.clone(), c.clone()));
let _ = the_context.add_fact(a);
let _ = the_context.set_query(c);

assert_eq!(the_context.solve(), Ok(Report::Entailed));
assert_eq!(the_context.atom_db.valuation_string(), "A B C");
```
*/

use std::time::Instant;

use crate::{
    context::{Context, ContextState},
    db::worklist::{Candidate, Scoring, Worklist, NEUTRAL_SCORE},
    inference::{
        DisjunctiveSyllogism, HypotheticalSyllogism, Inference, ModusPonens, ModusTollens, Side,
        Step,
    },
    misc::log::targets::{self},
    procedures::propagate::propagate,
    reports::Report,
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Settles the query of the context, if possible.
    ///
    /// A context may be solved at most once.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveComplete.into());
        }

        let Some(query) = self.query.clone() else {
            return Err(err::SemanticError::MissingQuery.into());
        };

        let total_time = Instant::now();
        self.state = ContextState::Solving;

        let scoring = Scoring {
            query: &query,
            query_bonus: self.config.query_bonus.value,
        };
        self.worklist = Worklist::from_rules(&self.rules, scoring, &self.atom_db)?;

        'solve_loop: while self.counters.iterations < self.config.iteration_limit.value {
            let Some(Candidate { sentence, score }) = self.worklist.pop_front() else {
                break 'solve_loop;
            };
            self.counters.iterations += 1;
            log::debug!(
                target: targets::SOLVE,
                "Iteration {}: {sentence} ({score})",
                self.counters.iterations
            );

            match sentence {
                Sentence::Implication(_, ref consequent) => {
                    let modus_ponens = ModusPonens::from_rule(&sentence)?;
                    if modus_ponens.evaluate(&self.atom_db)? == Some(true) {
                        let conclusion = modus_ponens.conclusion().clone();
                        self.record_step(modus_ponens.clone().into(), conclusion, scoring)?;
                    }

                    let modus_tollens = ModusTollens::from_rule(&sentence)?;
                    if modus_tollens.evaluate(&self.atom_db)? == Some(true) {
                        let conclusion = modus_tollens.conclusion().clone();
                        self.record_step(modus_tollens.clone().into(), conclusion, scoring)?;
                    }

                    let pending = modus_ponens.evaluate(&self.atom_db)?.is_none()
                        && modus_tollens.evaluate(&self.atom_db)?.is_none();

                    if !pending {
                        log::debug!(target: targets::SOLVE, "Discharged: {sentence}");
                        self.counters.discharged += 1;
                    } else {
                        match self.worklist.chain_partner(consequent).cloned() {
                            Some(partner) => {
                                let syllogism =
                                    HypotheticalSyllogism::from_rules(&sentence, &partner)?;
                                let chained = syllogism.apply();
                                self.record_step(syllogism.into(), chained, scoring)?;
                            }

                            None if self.worklist.is_empty() => break 'solve_loop,

                            None => {
                                self.counters.retries += 1;
                                self.worklist.push_back(Candidate { sentence, score });
                            }
                        }
                    }
                }

                Sentence::Or(..) => {
                    let left = DisjunctiveSyllogism::from_rule(&sentence, Side::Left)?;
                    if left.evaluate(&self.atom_db)? == Some(true) {
                        let conclusion = left.conclusion().clone();
                        self.record_step(left.clone().into(), conclusion, scoring)?;
                    }

                    let right = DisjunctiveSyllogism::from_rule(&sentence, Side::Right)?;
                    if right.evaluate(&self.atom_db)? == Some(true) {
                        let conclusion = right.conclusion().clone();
                        self.record_step(right.clone().into(), conclusion, scoring)?;
                    }

                    let pending = left.evaluate(&self.atom_db)?.is_none()
                        && right.evaluate(&self.atom_db)?.is_none();

                    if pending {
                        self.counters.retries += 1;
                        self.worklist.push_back(Candidate { sentence, score });
                    } else {
                        log::debug!(target: targets::SOLVE, "Discharged: {sentence}");
                        self.counters.discharged += 1;
                    }
                }

                other => {
                    log::error!(
                        target: targets::SOLVE,
                        "Rules must be implications or disjunctions: {other}"
                    );
                    break 'solve_loop;
                }
            }

            match query.evaluate(&self.atom_db)? {
                Some(true) => {
                    self.state = ContextState::Entailed;
                    break 'solve_loop;
                }
                Some(false) => {
                    self.state = ContextState::Contradicted;
                    break 'solve_loop;
                }
                None => {}
            }
        }

        if self.state == ContextState::Solving {
            self.state = ContextState::Undetermined;
        }

        self.counters.time = total_time.elapsed();
        log::info!(
            target: targets::SOLVE,
            "Solve finished as {} after {} iterations",
            self.state,
            self.counters.iterations
        );

        Ok(self.report())
    }

    /// Records a step of the derivation and propagates the conclusion of the step.
    ///
    /// Any rules deferred by propagation are added to the worklist, and the worklist is rescored.
    fn record_step(
        &mut self,
        step: Step,
        conclusion: Sentence,
        scoring: Scoring,
    ) -> Result<(), ErrorKind> {
        log::info!(target: targets::INFERENCE, "{} fired: {conclusion}", step.name());
        self.path.push(step);
        self.counters.derivations += 1;

        for deferred in propagate(conclusion, &mut self.atom_db)? {
            self.worklist.push_back(Candidate {
                sentence: deferred,
                score: NEUTRAL_SCORE,
            });
        }

        self.worklist.rescore(scoring, &self.atom_db)
    }
}
