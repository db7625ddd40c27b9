use presence_set::collections::hash::HashSet;

fn main() {
    println!("\n[Dedup]\n");

    let fruits = ["Apple", "Banana", "Apple", "Strawberry"];
    let set = HashSet::from(fruits);
    println!("{set:?}");

    let mut fruits = set.to_vec();
    fruits.sort();
    println!("{fruits:?}");

    println!("\n[Range]\n");

    let set = HashSet::from([1, 2, 3, 4, 5]);
    set.range(|n| {
        println!("{n}");
        false
    });

    println!("\n[Range, stopping at the first even number]\n");

    set.range(|n| {
        println!("{n}");
        n % 2 == 0
    });
}
