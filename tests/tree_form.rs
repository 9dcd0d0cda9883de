use anytype::{list, object, parse_object, Error, List, Object, Type, Value};
use rstest::rstest;

fn catalog() -> Object {
    parse_object(
        r#"{
            "store": {
                "books": [
                    {"title": "Dune", "tags": ["scifi", "classic"]},
                    {"title": "Emma", "price": 8.5}
                ],
                "open": true
            }
        }"#,
    )
    .unwrap()
}

#[rstest]
#[case(".store.books#0.title", Value::from("Dune"))]
#[case(".store.books#0.tags#1", Value::from("classic"))]
#[case(".store.books#1.price", Value::from(8.5))]
#[case(".store.open", Value::from(true))]
fn get_tf_reads_nested_values(#[case] path: &str, #[case] expected: Value) {
    assert_eq!(catalog().get_tf(path).unwrap(), &expected);
}

#[rstest]
#[case(".store.books#1.tags", Type::Undefined)]
#[case(".store.books#7", Type::Undefined)]
#[case(".store.open.x", Type::Undefined)]
#[case("store", Type::Undefined)]
#[case(".store.books", Type::List)]
#[case(".store.books#1.price", Type::Float)]
fn type_of_tf_probes_without_failing(#[case] path: &str, #[case] expected: Type) {
    assert_eq!(catalog().type_of_tf(path), expected);
}

#[rstest]
#[case("", "path is empty")]
#[case("#0", "an object path has to start with '.'")]
#[case(".a..b", "empty segment")]
#[case(".a#x", "list index has to be a non-negative integer")]
#[case(".a#-1", "list index has to be a non-negative integer")]
fn malformed_object_paths(#[case] path: &str, #[case] expected: &str) {
    match catalog().get_tf(path) {
        Err(Error::InvalidPath { reason, .. }) => assert_eq!(reason, expected),
        other => panic!("unexpected result for {path:?}: {other:?}"),
    }
}

#[rstest]
#[case(".a", Value::from(1))]
#[case(".a.b.c", Value::from("deep"))]
#[case(".list#0", Value::from(list![1, 2]))]
#[case(".x#0#0.y", Value::Null)]
#[case(".o", Value::from(object! { "k" => 2.5 }))]
fn set_then_get_round_trips(#[case] path: &str, #[case] value: Value) {
    let mut obj = Object::new();
    obj.set_tf(path, value.clone()).unwrap();
    assert_eq!(obj.get_tf(path).unwrap(), &value);
}

#[rstest]
fn set_tf_appends_at_count_and_replaces_below() {
    let mut obj = catalog();
    obj.set_tf(".store.books#2.title", "Ulysses").unwrap();
    obj.set_tf(".store.books#0.title", "Dune Messiah").unwrap();

    let titles = obj
        .get_tf(".store.books")
        .unwrap()
        .as_list()
        .unwrap()
        .map_objects(|book| book.get("title").cloned().unwrap_or_default());
    assert_eq!(
        titles.string_vec().unwrap(),
        vec!["Dune Messiah", "Emma", "Ulysses"]
    );

    assert!(matches!(
        obj.set_tf(".store.books#9.title", "gap"),
        Err(Error::IndexOutOfRange { index: 9, count: 3 })
    ));
}

#[rstest]
fn unset_tf_removes_leaf_only() {
    let mut obj = catalog();
    obj.unset_tf(".store.books#0.tags").unwrap();
    obj.unset_tf(".store.open").unwrap();
    assert_eq!(
        obj.get_tf(".store").unwrap().to_json_string(),
        r#"{"books":[{"title":"Dune"},{"title":"Emma","price":8.5}]}"#
    );
    assert!(matches!(
        obj.unset_tf(".store.open"),
        Err(Error::KeyNotFound(_))
    ));
}

#[rstest]
fn list_rooted_paths() {
    let mut list = List::new();
    list.set_tf("#0.name", "first").unwrap();
    list.set_tf("#1#0", 42).unwrap();
    assert_eq!(list.to_json_string(), r#"[{"name":"first"},[42]]"#);
    assert_eq!(list.type_of_tf("#1#0"), Type::Int);
    assert!(matches!(
        list.get_tf(".name"),
        Err(Error::InvalidPath { .. })
    ));

    list.unset_tf("#0").unwrap();
    assert_eq!(list.to_json_string(), "[[42]]");
}

#[rstest]
fn keys_may_contain_spaces_and_unicode() {
    let mut obj = Object::new();
    obj.set_tf(".first name.ünï", "ok").unwrap();
    assert_eq!(obj.get_object("first name").unwrap().get_string("ünï").unwrap(), "ok");
}

#[rstest]
fn failed_set_tf_keeps_existing_data() {
    let mut obj = object! { "a" => 1 };
    assert!(obj.set_tf(".a#2", 5).is_err());
    assert_eq!(obj.to_json_string(), r#"{"a":1}"#);

    let mut empty = Object::new();
    assert!(matches!(
        empty.set_tf(".x.y#3", 1),
        Err(Error::IndexOutOfRange { index: 3, count: 0 })
    ));
    assert!(empty.is_empty());
}
