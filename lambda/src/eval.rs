use std::convert::Infallible;

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    subst::substitute,
    term::Term,
};

/// Pays for every reduction step, including those spent on function positions.
trait Fuel {
    type Error;
    fn burn(&mut self) -> std::result::Result<(), Self::Error>;
    fn used(&self) -> usize;
}

type Fueled<T, F> = std::result::Result<T, <F as Fuel>::Error>;

#[derive(Default)]
struct Unlimited(usize);
impl Fuel for Unlimited {
    type Error = Infallible;
    fn burn(&mut self) -> std::result::Result<(), Infallible> {
        self.0 += 1;
        Ok(())
    }
    fn used(&self) -> usize {
        self.0
    }
}

struct Limited {
    limit: usize,
    used: usize,
}
impl Fuel for Limited {
    type Error = Error;
    fn burn(&mut self) -> Result<()> {
        if self.used == self.limit {
            return Err(Error::ReductionLimitExceeded { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }
    fn used(&self) -> usize {
        self.used
    }
}

fn reduce_with<F: Fuel>(term: &Term, fuel: &mut F) -> Fueled<Term, F> {
    fuel.burn()?;
    Ok(match term {
        Term::Variable(_) | Term::Abstraction(_, _) => term.duplicate(),
        // The function position is driven all the way to its fixpoint, not just to its head.
        Term::Application(function, argument) => match eval_with(function, fuel)? {
            Term::Abstraction(x, body) => substitute(&body, &x, argument),
            _ => term.duplicate(),
        },
    })
}

fn eval_with<F: Fuel>(term: &Term, fuel: &mut F) -> Fueled<Term, F> {
    let mut term = term.duplicate();
    loop {
        let before = term.to_string();
        term = reduce_with(&term, fuel)?;
        let after = term.to_string();
        trace!(step = fuel.used(), "{before} => {after}");
        // Termination is decided on the printed form, not on a normal-form check.
        if before == after {
            break Ok(term);
        }
    }
}

/// One outermost beta step.
pub fn reduce(term: &Term) -> Term {
    reduce_with(term, &mut Unlimited::default()).unwrap_or_else(|never| match never {})
}

/// Reduces until a step leaves the printed form unchanged. Loops forever on divergent terms.
pub fn eval(term: &Term) -> Term {
    debug!(%term, "evaluating");
    let mut fuel = Unlimited::default();
    let result = eval_with(term, &mut fuel).unwrap_or_else(|never| match never {});
    debug!(steps = fuel.used(), %result, "reached a fixpoint");
    result
}

/// Same as [`eval`], but fails once `limit` reduction steps have been spent.
pub fn eval_with_limit(term: &Term, limit: usize) -> Result<Term> {
    debug!(%term, limit, "evaluating with a step limit");
    let mut fuel = Limited { limit, used: 0 };
    let result = eval_with(term, &mut fuel)?;
    debug!(steps = fuel.used(), %result, "reached a fixpoint");
    Ok(result)
}
