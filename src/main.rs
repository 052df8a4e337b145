use keytree::tree::Tree;

fn main() {
    let mut family = Tree::new();

    println!(
        "{}",
        if family.is_empty() {
            "The tree is empty"
        } else {
            "The tree is not empty"
        }
    );

    for name in ["Jose", "Ana", "Pedro", "Ana", "Rafael", "Nestor", "Pedro"] {
        if family.insert(name) {
            println!("{} inserted", name);
        } else {
            println!("{} is a duplicate, not inserted", name);
        }
    }

    for name in ["Pedro", "Ana", "Manuel"] {
        let found = match family.search(name) {
            Some(_) => "found",
            None => "not found",
        };
        println!("Search for {}: {}", name, found);
    }

    println!("\nIn-order traversal: {:?}", family.in_order_traversal());
    println!("Tree height: {}", family.height());
}
