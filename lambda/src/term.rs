use crate::error::{Error, Result};

#[derive(PartialEq, Eq, Clone, Copy, derive_more::Display, Debug)]
pub enum Kind {
    #[display(fmt = "a variable")]
    Variable,
    #[display(fmt = "an abstraction")]
    Abstraction,
    #[display(fmt = "an application")]
    Application,
}

/// A named lambda term. Every node owns its children, so a term is always a tree.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Variable(String),
    /// `λx.t`
    Abstraction(String, Box<Term>),
    /// `t(t)`
    Application(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn abs(bound: impl Into<String>, body: Term) -> Self {
        Term::Abstraction(bound.into(), Box::new(body))
    }

    pub fn app(function: Term, argument: Term) -> Self {
        Term::Application(Box::new(function), Box::new(argument))
    }

    /// Deep copy sharing nothing with `self`.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn kind(&self) -> Kind {
        match self {
            Term::Variable(_) => Kind::Variable,
            Term::Abstraction(_, _) => Kind::Abstraction,
            Term::Application(_, _) => Kind::Application,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_abstraction(&self) -> bool {
        matches!(self, Term::Abstraction(_, _))
    }

    pub fn is_application(&self) -> bool {
        matches!(self, Term::Application(_, _))
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::WrongVariantAccess {
            expected,
            found: self.kind(),
        }
    }

    pub fn variable_name(&self) -> Result<&str> {
        match self {
            Term::Variable(name) => Ok(name.as_str()),
            _ => Err(self.mismatch(Kind::Variable)),
        }
    }

    pub fn function(&self) -> Result<&Term> {
        match self {
            Term::Application(function, _) => Ok(&**function),
            _ => Err(self.mismatch(Kind::Application)),
        }
    }

    pub fn argument(&self) -> Result<&Term> {
        match self {
            Term::Application(_, argument) => Ok(&**argument),
            _ => Err(self.mismatch(Kind::Application)),
        }
    }

    pub fn bound_variable(&self) -> Result<&str> {
        match self {
            Term::Abstraction(bound, _) => Ok(bound.as_str()),
            _ => Err(self.mismatch(Kind::Abstraction)),
        }
    }

    pub fn body(&self) -> Result<&Term> {
        match self {
            Term::Abstraction(_, body) => Ok(&**body),
            _ => Err(self.mismatch(Kind::Abstraction)),
        }
    }
}

/// `f + a` applies `f` to `a`.
impl std::ops::Add for Term {
    type Output = Term;

    fn add(self, argument: Term) -> Term {
        Term::app(self, argument)
    }
}

// The printed form doubles as the fixpoint test of `eval`, so it must stay injective.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(name) => f.write_str(name),
            Term::Abstraction(bound, body) => f.write_fmt(format_args!("(\u{3bb}{bound}.{body})")),
            Term::Application(function, argument) => {
                f.write_fmt(format_args!("{function}({argument})"))
            }
        }
    }
}

/// Chains single variables into right-nested applications: `[x, y, z]` becomes `x(y(z))`.
pub fn vars<S: AsRef<str>>(names: &[S]) -> Result<Term> {
    let mut names = names.iter().rev().map(AsRef::<str>::as_ref);
    let last = names.next().ok_or(Error::EmptyNameList)?;
    Ok(names.fold(Term::var(last), |rest, name| Term::var(name) + rest))
}
