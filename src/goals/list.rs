//! Relations over lists.
//!
//! Lists are chains of pairs ending in `Term::Unit`.

use crate::{conj, defrel, disj, fresh};
use crate::goals::primitive::eq;

defrel! {
    /// Creates a goal that succeeds if `l` is the empty list.
    pub nullo(l) {
        eq(&l, ())
    }
}

defrel! {
    /// Creates a goal that succeeds if `p` is the pair of `a` and `d`.
    pub conso(a, d, p) {
        eq((&a, &d), &p)
    }
}

defrel! {
    /// Creates a goal that succeeds if `a` is the first element of `p`.
    pub caro(p, a) {
        fresh!((d), eq((&a, &d), &p))
    }
}

defrel! {
    /// Creates a goal that succeeds if `d` is `p` without its first element.
    pub cdro(p, d) {
        fresh!((a), eq((&a, &d), &p))
    }
}

defrel! {
    /// Creates a goal that succeeds if `p` is a pair.
    pub pairo(p) {
        fresh!((a, d), eq((&a, &d), &p))
    }
}

defrel! {
    /// Creates a goal that succeeds if `x` is an element of `l`.
    pub membero(x, l) {
        fresh!((head, tail),
            eq(&l, (&head, &tail)),
            disj!(eq(&x, &head); membero(&x, &tail)),
        )
    }
}

defrel! {
    /// Creates a goal that succeeds if `out` is `l` followed by `t`.
    pub appendo(l, t, out) {
        disj!(
            conj!(eq(&l, ()), eq(&t, &out));
            fresh!((a, d, res),
                eq(&l, (&a, &d)),
                eq(&out, (&a, &res)),
                appendo(&d, &t, &res),
            )
        )
    }
}

defrel! {
    /// Creates a goal that succeeds if `l` has `n` elements.
    pub lengtho(n, l) {
        disj!(
            conj!(eq(&l, ()), eq(&n, 0));
            fresh!((head, tail, m),
                eq(&l, (&head, &tail)),
                eq(&n, &m + 1),
                lengtho(&m, &tail),
            )
        )
    }
}
