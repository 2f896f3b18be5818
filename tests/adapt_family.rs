mod common;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::num::ParseIntError;
use std::thread;

use common::{assert_wraps_boom, boom, expect_raised, expect_wrapped, glitch, setup};
use common::{Boom, Glitch};
use rex::{adapt, WrappedError};

fn parse(s: &str) -> Result<u32, ParseIntError> {
    s.parse()
}

#[test]
fn test_function_plugs_into_iterator_map() {
    setup();

    let total: u32 = ["4", "5", "6"].into_iter().map(adapt::function(parse)).sum();

    assert_eq!(total, 15);
}

#[test]
fn test_function_failure_inside_map_is_wrapped() {
    setup();

    let wrapped = expect_wrapped(|| {
        ["4", "x", "6"]
            .into_iter()
            .map(adapt::function(parse))
            .sum::<u32>()
    });

    assert_eq!(wrapped.message(), "invalid digit found in string");
    assert!(wrapped.downcast_cause_ref::<ParseIntError>().is_some());
}

#[test]
fn test_unary_op_keeps_the_type() {
    setup();
    let double = adapt::unary_op(|x: u64| -> Result<u64, Boom> { Ok(x * 2) });

    let doubled: Vec<u64> = vec![1, 2, 3].into_iter().map(double).collect();

    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_binary_op_reduces() {
    setup();
    let checked_add = adapt::binary_op(|x: u8, y: u8| -> Result<u8, Boom> {
        x.checked_add(y).ok_or_else(|| Boom::new("overflow"))
    });

    assert_eq!([1u8, 2, 3].into_iter().reduce(&checked_add), Some(6));

    let wrapped = expect_wrapped(|| [200u8, 100].into_iter().reduce(&checked_add));
    assert_eq!(wrapped.message(), "overflow");
}

#[test]
fn test_bi_function_folds() {
    setup();
    let append = adapt::bi_function(|acc: String, s: &str| -> Result<String, ParseIntError> {
        let n: u32 = s.parse()?;
        Ok(format!("{acc}{n:x}"))
    });

    let hex = ["10", "11", "255"].into_iter().fold(String::new(), append);

    assert_eq!(hex, "abff");
}

#[test]
fn test_predicate_plugs_into_any_and_all() {
    setup();
    let is_even = adapt::predicate(|s: &str| -> Result<bool, ParseIntError> {
        Ok(s.parse::<u32>()? % 2 == 0)
    });

    assert!(["1", "2"].into_iter().any(&is_even));
    assert!(!["2", "3"].into_iter().all(&is_even));

    let evens: Vec<&str> = ["1", "2", "4"].into_iter().filter(|s| is_even(*s)).collect();
    assert_eq!(evens, vec!["2", "4"]);
}

#[test]
fn test_relation_compares_pairs() {
    setup();
    let not_after = adapt::relation(|a: &str, b: &str| -> Result<bool, ParseIntError> {
        Ok(a.parse::<u32>()? <= b.parse::<u32>()?)
    });

    let sorted = ["1", "5", "10"];
    assert!(sorted.windows(2).all(|pair| not_after(pair[0], pair[1])));

    let wrapped = expect_wrapped(|| not_after("1", "ten"));
    assert!(wrapped.downcast_cause_ref::<ParseIntError>().is_some());
}

#[test]
fn test_supplier_feeds_repeat_with() {
    setup();
    let next = Cell::new(0u32);
    let counter = adapt::supplier(|| -> Result<u32, Boom> {
        next.set(next.get() + 1);
        Ok(next.get())
    });

    let first: Vec<u32> = std::iter::repeat_with(&counter).take(3).collect();

    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(None.unwrap_or_else(&counter), 4);
}

#[test]
fn test_condition_is_a_plain_closure() {
    setup();
    let seen = Cell::new(0);
    let ready = adapt::condition(|| -> Result<bool, Boom> { Ok(true) });
    let broken = adapt::condition(|| -> Result<bool, Boom> { Err(boom(&seen)) });

    assert!(ready());
    let wrapped = expect_wrapped(|| broken());
    assert_wraps_boom(&wrapped, &seen);
}

#[test]
fn test_consumer_plugs_into_for_each() {
    setup();
    let seen = RefCell::new(Vec::new());
    let record = adapt::consumer(|s: &str| -> Result<(), ParseIntError> {
        seen.borrow_mut().push(s.parse::<u32>()?);
        Ok(())
    });

    ["3", "1", "2"].into_iter().for_each(&record);
    assert_eq!(*seen.borrow(), vec![3, 1, 2]);

    let wrapped = expect_wrapped(|| record("-"));
    assert_eq!(wrapped.message(), "invalid digit found in string");
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_bi_consumer_receives_both_arguments() {
    setup();
    let table = RefCell::new(BTreeMap::new());
    let insert = adapt::bi_consumer(|k: &str, v: &str| -> Result<(), ParseIntError> {
        table.borrow_mut().insert(k.to_string(), v.parse::<i32>()?);
        Ok(())
    });

    [("a", "1"), ("b", "-2")]
        .into_iter()
        .for_each(|(k, v)| insert(k, v));

    assert_eq!(table.borrow().get("b"), Some(&-2));
    assert_eq!(table.borrow().len(), 2);
}

#[test]
fn test_unchecked_failure_falls_through_adapted_closure() {
    setup();
    let seen = Cell::new(0);
    let op = adapt::function(|_x: u8| -> Result<u8, Glitch> { Err(glitch(&seen)) });

    let raised = expect_raised::<Glitch, _>(|| op(1));

    assert_eq!(raised.id(), seen.get());
}

#[test]
fn test_runnable_runs_on_another_thread() {
    setup();
    let ok = adapt::runnable(|| -> Result<(), Boom> { Ok(()) });
    thread::spawn(ok).join().expect("successful task does not panic");

    let failing = adapt::runnable(|| -> Result<(), Boom> { Err(Boom::new("worker failed")) });
    let payload = thread::spawn(failing)
        .join()
        .expect_err("failing task unwinds");

    let wrapped = payload
        .downcast::<WrappedError>()
        .expect("payload is the wrapped failure");
    assert_eq!(wrapped.message(), "worker failed");
    assert!(wrapped.downcast_cause_ref::<Boom>().is_some());
}
