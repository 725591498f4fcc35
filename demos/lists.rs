use micro_kanren::prelude::*;
use micro_kanren::*;

defrel! {
    /// Creates a goal that succeeds if `out` is `l` reversed.
    reverso(l, out) {
        disj!(
            conj!(eq(&l, ()), eq(&out, ()));
            fresh!((head, tail, rev),
                eq(&l, (&head, &tail)),
                reverso(&tail, &rev),
                appendo(&rev, list![&head], &out),
            )
        )
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    for row in run!(*, (front, back), appendo(&front, &back, list![1, 2, 3])) {
        println!("{} ++ {}", row[0], row[1]);
    }

    let rows = run!(*, q, reverso(list!["a", "b", "c"], &q));
    println!("reversed: {}", rows[0][0]);

    let rows = run!(*, n, lengtho(&n, list![(), (), (), ()]));
    println!("length: {}", rows[0][0]);

    let rows = run!(3, q, membero("pea", &q));
    for row in rows {
        println!("a list containing \"pea\": {}", row[0]);
    }

    let rows = run!(*, (x, y), pluso(&x, 3, 10), timeso(&x, &y, 42));
    println!("x = {}, y = {}", rows[0][0], rows[0][1]);
}
