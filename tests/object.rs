use anytype::{list, object, Error, List, Object, Type, Value};
use rstest::rstest;

#[rstest]
fn set_keeps_first_insertion_position() {
    let mut obj = Object::new();
    obj.set("b", 1).unwrap().set("a", 2).unwrap().set("b", 3).unwrap();
    assert_eq!(obj.to_json_string(), r#"{"b":3,"a":2}"#);
    assert_eq!(obj.count(), 2);
}

#[rstest]
fn set_rejects_empty_key() {
    let mut obj = object! { "k" => 1 };
    assert!(matches!(obj.set("", 2), Err(Error::InvalidKey)));
    assert_eq!(obj.to_json_string(), r#"{"k":1}"#);
}

#[rstest]
#[case(vec![Value::from("a"), Value::from(1), Value::from("b")], "odd")]
#[case(vec![Value::from(1), Value::from(1)], "key")]
#[case(vec![Value::from("a"), Value::from(1), Value::from(""), Value::from(2)], "key")]
fn set_pairs_validates_before_writing(#[case] pairs: Vec<Value>, #[case] failure: &str) {
    let mut obj = object! { "keep" => true };
    let err = obj.set_pairs(pairs).unwrap_err();
    match failure {
        "odd" => assert!(matches!(err, Error::OddArgumentCount(3))),
        _ => assert!(matches!(err, Error::InvalidKey)),
    }
    assert_eq!(obj.to_json_string(), r#"{"keep":true}"#);
}

#[rstest]
fn from_pairs_last_value_wins() {
    let obj = Object::from_pairs(["x", "1", "y", "2", "x", "3"]).unwrap();
    assert_eq!(obj.get_string("x").unwrap(), "3");
    assert_eq!(obj.keys().string_vec().unwrap(), vec!["x", "y"]);
}

#[rstest]
fn unset_is_atomic() {
    let mut obj = object! { "a" => 1, "b" => 2, "c" => 3 };
    match obj.unset(&["a", "zz"]) {
        Err(Error::KeyNotFound(key)) => assert_eq!(key, "zz"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(obj.count(), 3);

    obj.unset(&["a", "c"]).unwrap();
    assert_eq!(obj.to_json_string(), r#"{"b":2}"#);
}

#[rstest]
fn typed_getters() {
    let obj = object! {
        "s" => "text",
        "i" => 7,
        "f" => 0.25,
        "b" => false,
        "l" => list![1],
        "o" => object! { "x" => Value::Null },
    };
    assert_eq!(obj.get_string("s").unwrap(), "text");
    assert_eq!(obj.get_int("i").unwrap(), 7);
    assert_eq!(obj.get_float("f").unwrap(), 0.25);
    assert!(!obj.get_bool("b").unwrap());
    assert_eq!(obj.get_list("l").unwrap().count(), 1);
    assert_eq!(obj.get_object("o").unwrap().type_of("x"), Type::Null);

    assert!(matches!(obj.get_int("f"), Err(Error::TypeMismatch { .. })));
    assert!(matches!(obj.get("missing"), Err(Error::KeyNotFound(_))));
    assert_eq!(obj.type_of("missing"), Type::Undefined);
}

#[rstest]
fn keys_values_and_search() {
    let obj = object! { "first" => 1, "second" => "two", "third" => 1 };
    assert_eq!(obj.keys().to_json_string(), r#"["first","second","third"]"#);
    assert_eq!(obj.values().to_json_string(), r#"[1,"two",1]"#);
    assert!(obj.contains(&Value::from("two")));
    assert!(obj.contains_key("third"));
    assert_eq!(obj.key_of(&Value::from(1)), Some("first"));
    assert_eq!(obj.key_of(&Value::from(2)), None);

    let map = obj.to_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map["second"], Value::from("two"));
}

#[rstest]
fn equality_ignores_order() {
    let a = object! { "x" => 1, "y" => list![1, 2] };
    let b = object! { "y" => list![1, 2], "x" => 1 };
    assert!(a.equals(&b));
    assert!(!a.equals(&object! { "x" => 1, "y" => list![2, 1] }));
    assert!(!a.equals(&object! { "x" => 1.0, "y" => list![1, 2] }));
}

#[rstest]
fn merge_and_pluck_copy() {
    let base = object! { "a" => 1, "b" => 2 };
    let patch = object! { "b" => 20, "c" => 30 };
    let merged = base.merge(&patch);
    assert_eq!(merged.to_json_string(), r#"{"a":1,"b":20,"c":30}"#);
    assert_eq!(base.get_int("b").unwrap(), 2);

    let plucked = merged.pluck(&["c", "a"]).unwrap();
    assert_eq!(plucked.to_json_string(), r#"{"c":30,"a":1}"#);
    assert!(merged.pluck(&["nope"]).is_err());
}

#[rstest]
fn iteration_family() {
    let obj = object! { "a" => 1, "b" => "x", "c" => 2, "d" => list![] };

    let mut total = 0;
    obj.for_each_int(|_, value| total += value);
    assert_eq!(total, 3);

    let doubled = obj.map_ints(|_, value| Value::from(value * 2));
    assert_eq!(doubled.to_json_string(), r#"{"a":2,"c":4}"#);

    let lists = obj.filter(|_, value| value.is_list());
    assert_eq!(lists.keys().string_vec().unwrap(), vec!["d"]);

    let keys = obj.reduce(String::new(), |acc, key, _| acc + key);
    assert_eq!(keys, "abcd");

    let labelled = obj.map(|key, value| Value::from(format!("{key}:{}", value.type_of())));
    assert_eq!(labelled.get_string("d").unwrap(), "d:list");
}

#[rstest]
fn owned_iteration_preserves_order() {
    let obj = object! { "z" => 1, "a" => 2 };
    let keys: Vec<String> = obj.into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[rstest]
fn format_string_indentation() {
    let obj = object! { "a" => list![1, object! {}], "b" => List::new() };
    assert_eq!(
        obj.format_string(4).unwrap(),
        "{\n    \"a\": [\n        1,\n        {}\n    ],\n    \"b\": []\n}"
    );
    assert!(matches!(obj.format_string(11), Err(Error::InvalidIndentation(11))));
    assert_eq!(format!("{obj}"), r#"{"a":[1,{}],"b":[]}"#);
}
