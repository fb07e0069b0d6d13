/// tests whether two core paths describe the same branch.
///
/// the first `min(prefix_length, len(a), len(b))` stations must agree exactly,
/// and the paths must end in a related station: the same terminal, or one
/// path passing through the other's terminal. empty paths are never similar.
/// the relation is symmetric but not transitive.
pub fn is_similar_core(a: &[String], b: &[String], prefix_length: usize) -> bool {
    let (last_a, last_b) = match (a.last(), b.last()) {
        (Some(la), Some(lb)) => (la, lb),
        _ => return false,
    };
    let m = prefix_length.min(a.len()).min(b.len());
    if a[..m] != b[..m] {
        return false;
    }
    last_a == last_b || a.contains(last_b) || b.contains(last_a)
}
