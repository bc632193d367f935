use mapset::{Map, Set};

fn main() {
    let mut set = Set::new();
    set.add(1);

    let mut clone = set.clone();
    clone.add(2);

    println!("{} {}", clone.is_superset(&set), clone);

    let mut map = Map::new();
    map.set("key", "value");

    println!("{:?}", map.get("key"));
}
