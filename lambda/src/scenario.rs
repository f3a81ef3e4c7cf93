use lambda::{eval, eval_with_limit, free, vars, Result, Term};

#[derive(PartialEq, Eq, Clone, Copy, derive_more::Display, Debug)]
pub enum Scenario {
    #[display(fmt = "simple")]
    Simple,
    #[display(fmt = "complex1")]
    Complex1,
    #[display(fmt = "complex2")]
    Complex2,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Simple, Scenario::Complex1, Scenario::Complex2];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == name)
    }

    pub fn title(self) -> &'static str {
        match self {
            Scenario::Simple => "Simple term with no capture problem",
            Scenario::Complex1 => "Complex term 1 with naming conflicts",
            Scenario::Complex2 => "Complex term 2 with naming conflicts",
        }
    }

    pub fn term(self) -> Result<Term> {
        // (λx.(λy.b(x(y))))(a(y))
        let conflicting = || -> Result<Term> {
            Ok(
                Term::abs("x", Term::abs("y", Term::var("b") + vars(&["x", "y"])?))
                    + (Term::var("a") + Term::var("y")),
            )
        };
        Ok(match self {
            Scenario::Simple => Term::abs("y", vars(&["x", "y", "z"])?) + Term::var("z"),
            Scenario::Complex1 => conflicting()?,
            Scenario::Complex2 => Term::abs("y", conflicting()?) + Term::var("c"),
        })
    }

    pub fn run(self, limit: Option<usize>) -> Result<Report> {
        let term = self.term()?;
        let reduced = match limit {
            Some(limit) => eval_with_limit(&term, limit)?,
            None => eval(&term),
        };
        Ok(Report {
            title: self.title(),
            initial: term.to_string(),
            free: free(&term).to_string(),
            reduced: reduced.to_string(),
        })
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct Report {
    pub title: &'static str,
    pub initial: String,
    pub free: String,
    pub reduced: String,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.title)?;
        writeln!(f, "Initial Term:{}", self.initial)?;
        writeln!(f, "Free Variables: {}", self.free)?;
        write!(f, "Reduced Term:{}", self.reduced)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Scenario::from_name("simple"), Some(Scenario::Simple));
        assert_eq!(Scenario::from_name("complex2"), Some(Scenario::Complex2));
        assert_eq!(Scenario::from_name("complex3"), None);
    }

    #[test]
    fn test_reports() {
        let expected = [
            ("(λy.x(y(z)))(z)", "{x,z}", "x(z(z))"),
            ("(λx.(λy.b(x(y))))(a(y))", "{a,b,y}", "(λy'.b(a(y)(y')))"),
            ("(λy.(λx.(λy.b(x(y))))(a(y)))(c)", "{a,b,c}", "(λy.b(a(c)(y)))"),
        ];
        for (scenario, (initial, free, reduced)) in Scenario::ALL.into_iter().zip(expected) {
            let report = scenario.run(None).unwrap();
            assert_eq!(report.initial, initial);
            assert_eq!(report.free, free);
            assert_eq!(report.reduced, reduced);
        }
    }

    #[test]
    fn test_report_layout() {
        assert_eq!(
            Scenario::Simple.run(None).unwrap().to_string(),
            "Simple term with no capture problem:\n\
             Initial Term:(λy.x(y(z)))(z)\n\
             Free Variables: {x,z}\n\
             Reduced Term:x(z(z))"
        );
    }

    #[test]
    fn test_limit() {
        assert!(Scenario::Simple.run(Some(3)).is_err());
        assert_eq!(
            Scenario::Complex2.run(Some(100)).unwrap(),
            Scenario::Complex2.run(None).unwrap()
        );
    }
}
