/*!
The worklist of a solve, holding rules which have yet to be resolved, each with a score.

Each [Candidate] pairs a sentence with a [Score], and lower scores are preferred.
The score of a sentence is:

```none
|symbols| - |valued symbols| - bonus · [the sentence is an implication whose consequent is the query]
```

So, rules which mention fewer atoms of unknown value are preferred, and implications which would derive the query directly are preferred a little further.

Scores are not maintained incrementally.
Instead, after any change to the valuation every score is recomputed and the worklist (stably) sorted with [rescore](Worklist::rescore).
Between rescores a rule may be [pushed](Worklist::push_back) to the back of the worklist regardless of score, in order to be retried after other rules.
*/

use std::collections::VecDeque;

use crate::{
    misc::log::targets::{self},
    structures::{sentence::Sentence, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// The score of a candidate, where lower is better.
pub type Score = f64;

/// The score given to a sentence added to the worklist before the worklist is rescored.
pub const NEUTRAL_SCORE: Score = 0.0;

/// A rule waiting on the worklist.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub sentence: Sentence,
    pub score: Score,
}

/// The inputs to scoring which are fixed through a solve.
#[derive(Clone, Copy, Debug)]
pub struct Scoring<'q> {
    /// The query of the solve.
    pub query: &'q Sentence,

    /// The reduction in score for an implication whose consequent is the query.
    pub query_bonus: Score,
}

impl Scoring<'_> {
    /// The score of a sentence relative to some valuation.
    pub fn score<V: Valuation + ?Sized>(
        &self,
        sentence: &Sentence,
        valuation: &V,
    ) -> Result<Score, ErrorKind> {
        let symbols = sentence.symbols();

        let mut valued = 0;
        for symbol in &symbols {
            match valuation.value_of(symbol) {
                Some(Some(_)) => valued += 1,
                Some(None) => {}
                None => {
                    return Err(err::ValuationError::UnboundSymbol(symbol.to_string()).into())
                }
            }
        }

        let derives_query = match sentence {
            Sentence::Implication(_, consequent) => consequent.as_ref() == self.query,
            _ => false,
        };

        let mut score = (symbols.len() - valued) as Score;
        if derives_query {
            score -= self.query_bonus;
        }
        Ok(score)
    }
}

/// The worklist.
#[derive(Clone, Debug, Default)]
pub struct Worklist {
    candidates: VecDeque<Candidate>,
}

impl Worklist {
    /// A worklist of the given rules, scored and sorted.
    pub fn from_rules<V: Valuation + ?Sized>(
        rules: &[Sentence],
        scoring: Scoring,
        valuation: &V,
    ) -> Result<Self, ErrorKind> {
        let mut worklist = Worklist {
            candidates: rules
                .iter()
                .map(|rule| Candidate {
                    sentence: rule.clone(),
                    score: NEUTRAL_SCORE,
                })
                .collect(),
        };
        worklist.rescore(scoring, valuation)?;
        Ok(worklist)
    }

    /// A count of candidates on the worklist.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// An iterator over the candidates, from first to last.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Removes and returns the first candidate.
    pub fn pop_front(&mut self) -> Option<Candidate> {
        self.candidates.pop_front()
    }

    /// Places the candidate at the back of the worklist, without sorting.
    pub fn push_back(&mut self, candidate: Candidate) {
        log::debug!(target: targets::WORKLIST, "Pushed: {}", candidate.sentence);
        self.candidates.push_back(candidate);
    }

    /// Recomputes the score of every candidate and (stably) sorts the worklist from low to high score.
    pub fn rescore<V: Valuation + ?Sized>(
        &mut self,
        scoring: Scoring,
        valuation: &V,
    ) -> Result<(), ErrorKind> {
        for candidate in self.candidates.iter_mut() {
            candidate.score = scoring.score(&candidate.sentence, valuation)?;
        }

        self.candidates
            .make_contiguous()
            .sort_by(|a, b| a.score.total_cmp(&b.score));

        Ok(())
    }

    /// The first implication on the worklist whose antecedent is the given sentence.
    ///
    /// I.e. given `q` from some `p -> q`, a partner `q -> r` which may be chained to `p -> r`.
    pub fn chain_partner(&self, consequent: &Sentence) -> Option<&Sentence> {
        self.candidates
            .iter()
            .map(|candidate| &candidate.sentence)
            .find(|sentence| match sentence {
                Sentence::Implication(antecedent, _) => antecedent.as_ref() == consequent,
                _ => false,
            })
    }
}
