/// Removes the value at `source_idx` and inserts it at `target_idx`, where `target_idx` is an index
/// into the vec *after* the removal (the value returned by [`resolve_drop_index`](crate::resolve_drop_index)).
/// Does nothing and returns `false` if either index is outside the vec bounds.
pub fn move_item<T>(vec: &mut Vec<T>, source_idx: usize, target_idx: usize) -> bool {
    if source_idx >= vec.len() || target_idx >= vec.len() {
        return false;
    }
    if source_idx == target_idx {
        return true;
    }

    let item = vec.remove(source_idx);
    vec.insert(target_idx, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_forward_and_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, ['b', 'c', 'a', 'd']);

        assert!(move_item(&mut v, 3, 0));
        assert_eq!(v, ['d', 'b', 'c', 'a']);
    }

    #[test]
    fn last_slot_is_valid_destination() {
        let mut v = vec![1, 2, 3];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, [2, 3, 1]);
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 3, 0));
        assert!(!move_item(&mut v, 0, 3));
        assert_eq!(v, [1, 2, 3]);

        let mut empty: Vec<u8> = Vec::new();
        assert!(!move_item(&mut empty, 0, 0));
    }
}
