use treedump_model::{Callable, Kind, Opaque, Table, Value, default_less, sort_by_less};

#[derive(Debug)]
struct Point(i32, i32);

impl Opaque for Point {
    fn type_name(&self) -> &str {
        "Point"
    }

    fn text_form(&self) -> Option<String> {
        Some(format!("({}, {})", self.0, self.1))
    }
}

#[test]
fn test_cyclic_graph_is_cheap_to_build_and_inspect() {
    let a = Table::new();
    let b = Table::new();
    a.set("b", &b);
    b.set("a", &a);

    let via_b = b.get(&Value::from("a"));
    assert!(via_b.as_table().unwrap().ptr_eq(&a));
    assert!(format!("{a:?}").contains("len: 1"));
}

#[test]
fn test_key_identity_semantics() {
    let t = Table::new();
    t.set(1, "int");
    t.set(1.0, "float");
    t.set("1", "string");
    assert_eq!(t.len(), 3);

    let k1 = Table::new();
    let k2 = Table::new();
    t.set(&k1, "first");
    t.set(&k2, "second");
    assert_eq!(t.get(&Value::from(&k1)), Value::from("first"));
    assert_eq!(t.get(&Value::from(&k2)), Value::from("second"));
}

#[test]
fn test_opaque_values() {
    let v = Value::opaque(Point(1, 2));
    assert_eq!(v.kind(), Kind::Opaque);
    assert_eq!(v.generic_text(), "opaque: Point");
    assert_eq!(v.textual_form().as_deref(), Some("(1, 2)"));
}

#[test]
fn test_mixed_keys_sort_deterministically() {
    let mut keys = vec![
        Value::from("b"),
        Value::from(Table::new()),
        Value::from(Callable::declared_at("f", "a.lua", 1)),
        Value::from(2),
        Value::from("a"),
    ];
    sort_by_less(&mut keys, default_less);

    let kinds: Vec<Kind> = keys.iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::Function,
            Kind::Number,
            Kind::String,
            Kind::String,
            Kind::Table,
        ]
    );
    assert_eq!(keys[2], Value::from("a"));
    assert_eq!(keys[3], Value::from("b"));
}
