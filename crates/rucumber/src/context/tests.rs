//! Tests for the shared step context.

use super::*;
use std::path::PathBuf;

#[test]
fn insert_and_get_by_type() {
    let mut ctx = StepContext::new();
    assert!(ctx.insert("dir", PathBuf::from("/tmp")).is_none());
    assert_eq!(ctx.get::<PathBuf>("dir"), Some(&PathBuf::from("/tmp")));
    assert!(ctx.get::<String>("dir").is_none(), "type mismatch yields None");
    assert!(ctx.get::<PathBuf>("missing").is_none());
}

#[test]
fn insert_returns_previous_value_of_same_type() {
    let mut ctx = StepContext::new();
    ctx.insert("count", 1_usize);
    assert_eq!(ctx.insert("count", 2_usize), Some(1));
    assert_eq!(ctx.insert("count", "two"), None, "different type is replaced silently");
    assert_eq!(ctx.get::<&str>("count"), Some(&"two"));
}

#[test]
fn get_mut_allows_in_place_updates() {
    let mut ctx = StepContext::new();
    ctx.insert("log", Vec::<String>::new());
    let Some(log) = ctx.get_mut::<Vec<String>>("log") else {
        panic!("log should be present");
    };
    log.push("first".into());
    assert_eq!(ctx.get::<Vec<String>>("log").map(Vec::len), Some(1));
}

#[test]
fn remove_only_takes_matching_type() {
    let mut ctx = StepContext::new();
    ctx.insert("value", 7_i32);
    assert_eq!(ctx.remove::<u8>("value"), None);
    assert!(ctx.contains("value"));
    assert_eq!(ctx.remove::<i32>("value"), Some(7));
    assert!(ctx.is_empty());
}

#[test]
fn names_are_sorted_and_debug_lists_them() {
    let mut ctx = StepContext::new();
    ctx.insert("b", ());
    ctx.insert("a", ());
    assert_eq!(ctx.names(), ["a", "b"]);
    assert_eq!(format!("{ctx:?}"), r#"StepContext { names: ["a", "b"] }"#);
    ctx.clear();
    assert_eq!(ctx.len(), 0);
}
