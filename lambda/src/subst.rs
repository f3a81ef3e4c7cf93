use tracing::trace;

use crate::{
    free::{free, fresh},
    term::Term,
};

/// `base[target := value]`, renaming binders of `base` that would capture a free name of `value`.
pub fn substitute(base: &Term, target: &str, value: &Term) -> Term {
    match base {
        Term::Variable(name) if name == target => value.duplicate(),
        Term::Variable(_) => base.duplicate(),
        Term::Application(function, argument) => {
            substitute(function, target, value) + substitute(argument, target, value)
        }
        // `target` is shadowed below this binder.
        Term::Abstraction(x, _) if x == target => base.duplicate(),
        Term::Abstraction(x, body) if !free(value).contains(x.as_str()) => {
            Term::abs(x.as_str(), substitute(body, target, value))
        }
        Term::Abstraction(x, body) => {
            let renamed = fresh(body, x);
            trace!(from = %x, to = %renamed, "alpha-renaming to avoid capture");
            let body = substitute(body, x, &Term::var(renamed.as_str()));
            Term::abs(renamed, substitute(&body, target, value))
        }
    }
}
