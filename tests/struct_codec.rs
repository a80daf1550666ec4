use bencanon::{
    Encoder,
    encoding::{Error, ErrorKind, Production, ToBencode},
};

#[derive(PartialEq, Eq, Debug)]
struct Example {
    foo: Vec<i64>,
    bar: i64,
}

impl ToBencode for Example {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::build_dict()
            .pair(b"foo", &self.foo)
            .pair(b"bar", &self.bar)
            .finish())
    }
}

/// Holds a field bencode has no representation for
struct Measurement {
    label: String,
    value: f64,
}

impl ToBencode for Measurement {
    fn classify(&self) -> Result<Production<'_>, Error> {
        Ok(Production::build_dict()
            .pair(b"label", &self.label)
            .pair(b"value", &self.value)
            .finish())
    }
}

#[test]
fn should_encode_struct() {
    let example = Example {
        foo: vec![2, 3],
        bar: 1,
    };
    let encoded = example.to_bencode().expect("example encoding is broken");

    assert_eq!(encoded, b"d3:bari1e3:fooli2ei3eee".to_vec(),)
}

#[test]
fn should_encode_nested_structs() {
    let examples = vec![
        Example {
            foo: vec![],
            bar: -1,
        },
        Example {
            foo: vec![7],
            bar: 0,
        },
    ];
    let encoded = examples.to_bencode().expect("example encoding is broken");

    assert_eq!(encoded, b"ld3:bari-1e3:fooleed3:bari0e3:fooli7eeee".to_vec())
}

#[test]
fn should_reject_unsupported_field() {
    let measurement = Measurement {
        label: "temperature".to_owned(),
        value: 21.5,
    };

    let error = measurement.to_bencode().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnsupportedType);

    let mut encoder = Encoder::new(Vec::new());
    assert!(encoder.encode(&measurement).is_err());
    assert_eq!(encoder.get_ref(), b"d5:label11:temperature5:value");
}
