use mapset::Set;
use parking_lot::Mutex;
use rand::{rng, seq::SliceRandom};
use std::{process::exit, thread};

fn main() {
    let mut values = (0..1000).collect::<Vec<usize>>();
    values.shuffle(&mut rng());

    let set = Mutex::new(Set::new());

    thread::scope(|scope| {
        for &value in &values {
            let set = &set;

            scope.spawn(move || set.lock().add(value));
        }
    });

    let set = set.into_inner();

    for value in &values {
        if !set.contains(value) {
            eprintln!("set is missing element: {value}");
            exit(1);
        }
    }
}
