use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// an ordered key container in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Look the K up in the data structure
    Search(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Search(K::arbitrary(g))
        }
    }
}
