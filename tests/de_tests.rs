use keydex::{Accessor, ErrorKind, JsonArray, JsonObject, Kind, NULL, Number, Value, from_str};
use serde::Deserialize;

#[test]
fn test_number_narrowing() {
    let array: JsonArray = "[1, -2147483648, 2147483648, -9223372036854775808, 18446744073709551615, 1.0, 2e3]"
        .parse()
        .unwrap();
    let kinds: Vec<Kind> = array.iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        [
            Kind::Integer,
            Kind::Integer,
            Kind::Long,
            Kind::Long,
            Kind::Double,
            Kind::Double,
            Kind::Double,
        ]
    );
    assert_eq!(array.get_double(6).unwrap(), 2000.0);
}

#[test]
fn test_parse_value_roots() {
    assert_eq!(from_str::<Value>("null").unwrap(), NULL);
    assert_eq!(from_str::<Value>("true").unwrap(), Value::from(true));
    assert_eq!(from_str::<Value>(r#""s""#).unwrap(), Value::from("s"));
    assert_eq!("12".parse::<Value>().unwrap(), Value::Number(Number::Int(12)));
    assert_eq!("[]".parse::<Value>().unwrap().kind(), Kind::Array);
    assert_eq!("{}".parse::<Value>().unwrap().kind(), Kind::Object);
}

#[test]
fn test_container_shape_errors() {
    assert_eq!("[]".parse::<JsonObject>().unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!("{}".parse::<JsonArray>().unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!("1".parse::<JsonArray>().unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_malformed_text() {
    for text in ["", "{", "[1,]", "{a:1}", "{\"a\":1} x", "'s'", "NaN"] {
        let err = from_str::<Value>(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "accepted {text:?}");
    }
}

#[test]
fn test_duplicate_keys_keep_last_value_in_first_position() {
    let object: JsonObject = r#"{"a":1,"b":2,"a":3}"#.parse().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object.get_int("a").unwrap(), 3);
    assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn test_escapes_are_decoded() {
    let array: JsonArray = r#"["<\/a>", "é", "\n"]"#.parse().unwrap();
    assert_eq!(array.get_string(0).unwrap(), "</a>");
    assert_eq!(array.get_string(1).unwrap(), "é");
    assert_eq!(array.get_string(2).unwrap(), "\n");
}

#[test]
fn test_deserialize_from_serde_json_value() {
    let json = serde_json::json!({"a": [1, 2.5, null], "b": {"c": "d"}});
    let object = JsonObject::deserialize(json).unwrap();
    assert_eq!(object.get_json_array("a").unwrap().get_double(1).unwrap(), 2.5);
    assert!(object.get_json_array("a").unwrap().is_null(2));
    assert_eq!(
        object.get_json_object("b").unwrap().get_string("c").unwrap(),
        "d"
    );
}

#[test]
fn test_embed_in_derived_struct() {
    #[derive(Deserialize)]
    struct Envelope {
        id: u32,
        payload: JsonObject,
        extra: Option<Value>,
    }

    let envelope: Envelope =
        from_str(r#"{"id":1,"payload":{"n":"3"},"extra":null}"#).unwrap();
    assert_eq!(envelope.id, 1);
    assert_eq!(envelope.payload.get_int("n").unwrap(), 3);
    assert!(envelope.extra.is_none());
}

#[test]
fn test_nested_round_trip() {
    let text = r#"{"a":{"b":{"c":[[],[{}],"x"]}}}"#;
    let object: JsonObject = text.parse().unwrap();
    assert_eq!(object.to_string(), text);
}
