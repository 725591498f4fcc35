use micro_kanren::database::Database;
use micro_kanren::prelude::*;
use micro_kanren::*;

// declare relations
db_rel! {
    food(f);
    drink(d);
    goes_well_with(f, d);
    is_vegetarian(f, k);
    price(f, p);
}

fn main() {
    tracing_subscriber::fmt::init();

    // Construct an empty database
    // and add some facts about the world.
    let mut db = Database::new();
    db_facts! {
        db {
            food("Beef");
            food("Fish");
            food("Hamburger");
            food("Pizza");
            food("Salad");
            food("Stone soup");
            food("Veggies");

            drink("Beer");
            drink("Red wine");
            drink("Water");
            drink("White wine");

            goes_well_with("Beef", "Beer");
            goes_well_with("Beef", "Red wine");
            goes_well_with("Fish", "White wine");
            goes_well_with("Hamburger", "Beer");
            goes_well_with("Pizza", "Red wine");
            goes_well_with("Stone soup", "Water");
            goes_well_with("Veggies", "White wine");

            is_vegetarian("Beef", false);
            is_vegetarian("Fish", "some say so");
            is_vegetarian("Hamburger", "canbe");
            is_vegetarian("Pizza", "canbe");
            is_vegetarian("Salad", true);
            is_vegetarian("Stone soup", true);
            is_vegetarian("Veggies", true);

            price("Beef", 24);
            price("Fish", 18);
            price("Hamburger", 9);
            price("Pizza", 11);
            price("Salad", 7);
            price("Stone soup", 1);
            price("Veggies", 8);
        }
    }

    // run a simple query
    let food_: Vec<_> = run!(q, food(&db, &q)).collect();
    println!("All the food we like: {}", show(&food_));

    // run another simple query
    let veggie: Vec<_> = run!(q, is_vegetarian(&db, &q, true)).collect();
    println!("Vegetarian food: {}", show(&veggie));

    // run a combined query
    let wine_and_veggie: Vec<_> = run!(
        q,
        is_vegetarian(&db, &q, true),
        goes_well_with(&db, &q, "White wine"),
    )
    .collect();
    println!(
        "Vegetarian food that goes well with white wine: {}",
        show(&wine_and_veggie)
    );

    // run a query with alternatives
    let any_wine: Vec<_> = run!(
        q,
        disj! {
            goes_well_with(&db, &q, "Red wine");
            goes_well_with(&db, &q, "White wine")
        }
    )
    .collect();
    println!("Food that goes well with wine: {}", show(&any_wine));

    // let arithmetic pick the price of a meal for two
    let for_two: Vec<_> = run!(
        (f, total),
        goes_well_with(&db, &f, "Beer"),
        fresh!((p), price(&db, &f, &p), eq(&total, &p * 2)),
    )
    .collect();
    println!("Beer food for two: {}", show(&for_two));
}

fn show(rows: &[Row]) -> String {
    let rows: Vec<String> = rows
        .iter()
        .map(|row| match row.as_slice() {
            [single] => single.to_string(),
            values => Match::List(values.to_vec()).to_string(),
        })
        .collect();
    rows.join(", ")
}
