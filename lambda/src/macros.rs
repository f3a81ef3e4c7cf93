macro_rules! var {
    ($x:expr) => {
        $crate::term::Term::var($x)
    };
}
macro_rules! lambda {
    ($x:expr, $body:expr) => {
        $crate::term::Term::abs($x, $body)
    };
}
macro_rules! apply {
    ($lhs:expr, $rhs:expr) => {
        $crate::term::Term::app($lhs, $rhs)
    };
}
