use arcade_shooter::pool::Pool;

#[test]
fn new_pool_is_empty() {
    let pool: Pool<u32, 4> = Pool::new();
    assert_eq!(pool.capacity(), 4);
    assert_eq!(pool.active_count(), 0);
    assert!(!pool.is_full());
}

#[test]
fn allocate_takes_first_free_slot() {
    let mut pool: Pool<u32, 4> = Pool::new();
    assert_eq!(pool.allocate(10), Some(0));
    assert_eq!(pool.allocate(11), Some(1));
    assert_eq!(pool.allocate(12), Some(2));

    // Freeing a middle slot makes it the next one handed out
    assert_eq!(pool.deactivate(1), Some(11));
    assert_eq!(pool.allocate(13), Some(1));
    assert_eq!(pool.get(1), Some(&13));
}

#[test]
fn allocate_into_full_pool_is_a_no_op() {
    let mut pool: Pool<u32, 3> = Pool::new();
    for v in 0..3 {
        pool.allocate(v);
    }
    assert!(pool.is_full());

    assert_eq!(pool.allocate(99), None);
    assert_eq!(pool.active_count(), 3);
    let values: Vec<u32> = pool.iter_active().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0, 1, 2]);
}

#[test]
fn deactivated_slot_reads_as_absent() {
    let mut pool: Pool<u32, 2> = Pool::new();
    let i = pool.allocate(7).unwrap();
    pool.deactivate(i);
    assert!(!pool.is_active(i));
    assert_eq!(pool.get(i), None);
    assert_eq!(pool.get_mut(i), None);
    assert_eq!(pool.deactivate(i), None); // second free is harmless
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut pool: Pool<u32, 2> = Pool::new();
    pool.allocate(1);
    assert_eq!(pool.get(5), None);
    assert_eq!(pool.deactivate(5), None);
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn iteration_skips_free_slots_in_slot_order() {
    let mut pool: Pool<char, 5> = Pool::new();
    for c in ['a', 'b', 'c', 'd'] {
        pool.allocate(c);
    }
    pool.deactivate(0);
    pool.deactivate(2);

    let seen: Vec<(usize, char)> = pool.iter_active().map(|(i, c)| (i, *c)).collect();
    assert_eq!(seen, vec![(1, 'b'), (3, 'd')]);

    let mut visited = Vec::new();
    pool.for_each_active(|i, _| visited.push(i));
    assert_eq!(visited, vec![1, 3]);
}

#[test]
fn iter_active_mut_updates_in_place() {
    let mut pool: Pool<i32, 3> = Pool::new();
    pool.allocate(1);
    pool.allocate(2);
    for (_, v) in pool.iter_active_mut() {
        *v *= 10;
    }
    assert_eq!(pool.get(0), Some(&10));
    assert_eq!(pool.get(1), Some(&20));
}

#[test]
fn retain_active_frees_rejected_and_counts_them() {
    let mut pool: Pool<i32, 6> = Pool::new();
    for v in [1, -2, 3, -4, 5] {
        pool.allocate(v);
    }
    let freed = pool.retain_active(|v| *v > 0);
    assert_eq!(freed, 2);
    assert_eq!(pool.active_count(), 3);
    assert!(!pool.is_active(1));
    assert!(!pool.is_active(3));
}
