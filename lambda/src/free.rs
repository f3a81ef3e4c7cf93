use std::collections::BTreeSet;

use crate::term::Term;

/// Appended to a bound variable until it no longer clashes.
pub const PRIME: char = '\'';

/// Names borrowed from a term, kept sorted so that printing is deterministic.
#[derive(PartialEq, Eq, Clone, Default, Debug, derive_more::Deref, derive_more::From)]
pub struct NameSet<'a>(BTreeSet<&'a str>);

impl std::fmt::Display for NameSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        f.write_str("}")
    }
}

pub fn free(term: &Term) -> NameSet<'_> {
    fn free_rec<'a>(term: &'a Term, table: &mut Vec<&'a str>, found: &mut BTreeSet<&'a str>) {
        match term {
            Term::Variable(name) => {
                if !table.contains(&name.as_str()) {
                    found.insert(name.as_str());
                }
            }
            Term::Abstraction(x, body) => {
                table.push(x.as_str());
                free_rec(body, table, found);
                let popped = table.pop();
                debug_assert_eq!(Some(x.as_str()), popped);
            }
            Term::Application(function, argument) => {
                free_rec(function, table, found);
                free_rec(argument, table, found);
            }
        }
    }
    let mut found = BTreeSet::new();
    free_rec(term, &mut vec![], &mut found);
    NameSet(found)
}

/// Primes `base` at least once, then as often as needed to leave `free(term)`.
pub fn fresh(term: &Term, base: &str) -> String {
    let taken = free(term);
    let mut name = base.to_string();
    loop {
        name.push(PRIME);
        if !taken.contains(name.as_str()) {
            return name;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::vars;

    fn names<'a>(set: &NameSet<'a>) -> Vec<&'a str> {
        set.iter().copied().collect()
    }

    #[test]
    fn test_free_variable() {
        assert_eq!(names(&free(&var!("x"))), ["x"]);
    }

    #[test]
    fn test_free_abstraction_drops_bound() {
        let term = lambda!("x", apply!(var!("x"), var!("y")));
        assert_eq!(names(&free(&term)), ["y"]);
        assert!(free(&lambda!("x", var!("x"))).is_empty());
    }

    #[test]
    fn test_free_application_is_union() {
        let term = apply!(lambda!("x", var!("x")), apply!(var!("x"), var!("w")));
        assert_eq!(names(&free(&term)), ["w", "x"]);
    }

    #[test]
    fn test_bound_never_free() {
        let bodies = [
            var!("b"),
            vars(&["b", "c", "b"]).unwrap(),
            lambda!("b", var!("b")),
            apply!(lambda!("c", var!("b")), var!("b")),
        ];
        for body in bodies {
            let term = lambda!("b", body);
            assert!(!free(&term).contains("b"), "{term}");
        }
    }

    #[test]
    fn test_inner_binding_does_not_leak() {
        let term = apply!(lambda!("y", var!("y")), var!("y"));
        assert_eq!(names(&free(&term)), ["y"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(NameSet::default().to_string(), "{}");
        let term = apply!(
            lambda!("x", lambda!("y", apply!(var!("b"), vars(&["x", "y"]).unwrap()))),
            apply!(var!("a"), var!("y"))
        );
        assert_eq!(free(&term).to_string(), "{a,b,y}");
    }

    #[test]
    fn test_fresh() {
        let term = vars(&["x", "x'", "x''"]).unwrap();
        assert_eq!(fresh(&term, "x"), "x'''");
        assert_eq!(fresh(&var!("z"), "x"), "x'");

        let fresh_name = fresh(&term, "y");
        assert!(!free(&term).contains(fresh_name.as_str()));
        assert!(fresh_name.len() > 1);
        assert_eq!(fresh_name.trim_end_matches(PRIME), "y");
    }

    #[test]
    fn test_fresh_ignores_bound_names() {
        let term = lambda!("x'", var!("x'"));
        assert_eq!(fresh(&term, "x"), "x'");
    }
}
