use keytree::tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hash set.
/// This way we can ensure that after a random smattering of inserts
/// and searches both agree on which keys are present.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    ops.iter().all(|op| match op {
        Op::Insert(k) => bst.insert(k.clone()) == set.insert(k.clone()),
        Op::Search(k) => bst.contains(k) == set.contains(k),
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.len() == set.len()
            && set.iter().all(|key| tree.contains(key))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn second_insert_is_refused(xs: Vec<String>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(x.clone());
        }
        let len = tree.len();

        xs.into_iter().all(|x| !tree.insert(x)) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn traversal_matches_sorted_dedup(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        tree.in_order_traversal().into_iter().eq(expected.iter())
            && tree.into_iter().eq(expected.into_iter())
    }
}

quickcheck::quickcheck! {
    fn ascending_input_is_fully_skewed(n: u8) -> bool {
        let tree: Tree<_> = (0..n).collect();

        tree.height() == (n as usize).saturating_sub(1)
    }
}

#[test]
fn family_names() {
    let names = ["Jose", "Ana", "Pedro", "Ana", "Rafael", "Nestor", "Pedro"];
    let mut tree = Tree::new();

    let results: Vec<_> = names.iter().map(|name| tree.insert(*name)).collect();

    assert_eq!(results, [true, true, true, false, true, true, false]);
    assert_eq!(
        tree.in_order_traversal(),
        [&"Ana", &"Jose", &"Nestor", &"Pedro", &"Rafael"]
    );
    assert!(tree.search("Manuel").is_none());
    assert!(tree.search("Pedro").is_some());
    assert_eq!(tree.height(), 2);
}
