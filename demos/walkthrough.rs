//! Deck and vector walkthrough example.

use deckplane::{Deck, Vector, strength};

fn main() {
    let deck = Deck::new();

    println!("deck has {} cards", deck.len());
    println!("first card: {}", deck[0]);
    if let Ok(last) = deck.at(-1) {
        println!("last card: {last}");
    }

    print!("lowest four:");
    for card in deck.slice(..4) {
        print!(" {card}");
    }
    println!();

    match deck.choose(&mut rand::rng()) {
        Ok(card) => println!("random card: {card}"),
        Err(err) => println!("choice error: {err}"),
    }

    println!("deck in reverse:");
    for card in deck.iter_rev() {
        println!("  {card}");
    }

    println!("deck by strength:");
    for card in deck.sorted_by_key(|card| strength(*card)) {
        println!("  {} has {} strength", card, strength(card));
    }

    let v1 = Vector::new(4.0, 3.0);
    let v2 = Vector::new(3.0, 1.0);
    println!("{v1} + {v2} = {}", v1 + v2);
    println!("{v1} * 3 = {}", v1 * 3.0);
    println!("|{v1}| = {}", v1.magnitude());
    let zero = Vector::default();
    println!("{zero} is nonzero: {}", zero.is_nonzero());
}
