// Please keep the code below in sync with `README.md`.
//
// The README itself runs as a doctest through doc-comment; these copies keep the
// examples covered by a plain `cargo test --tests` as well.

mod encoding_1 {
    use bencanon::{Error, marshal};

    #[test]
    fn encode_one_shot() -> Result<(), Error> {
        assert_eq!(marshal(&42)?, b"i42e");
        assert_eq!(marshal("example")?, b"7:example");
        assert_eq!(marshal(&vec!["one", "two"])?, b"l3:one3:twoe");
        Ok(())
    }
}

mod encoding_2 {
    use std::collections::HashMap;

    use bencanon::{Error, marshal};

    #[test]
    fn encode_dictionary() -> Result<(), Error> {
        let mut dict = HashMap::new();
        dict.insert("two", "bb");
        dict.insert("one", "aa");

        assert_eq!(marshal(&dict)?, b"d3:one2:aa3:two2:bbe");
        Ok(())
    }
}

mod encoding_3 {
    use bencanon::{Encoder, Error};

    #[test]
    fn encode_stream() -> Result<(), Error> {
        let mut encoder = Encoder::new(Vec::new());
        encoder.encode("test")?;
        encoder.encode(&123)?;

        assert_eq!(encoder.into_inner(), b"4:testi123e");
        Ok(())
    }
}

mod encoding_4 {
    use bencanon::encoding::{Error, Production, ToBencode};

    struct Peer {
        ip: String,
        port: u16,
    }

    impl ToBencode for Peer {
        fn classify(&self) -> Result<Production<'_>, Error> {
            Ok(Production::build_dict()
                .pair(b"port", &self.port)
                .pair(b"ip", &self.ip)
                .finish())
        }
    }

    #[test]
    fn encode_own_type() -> Result<(), Error> {
        let peer = Peer {
            ip: "10.0.0.1".to_owned(),
            port: 6881,
        };

        assert_eq!(peer.to_bencode()?, b"d2:ip8:10.0.0.14:porti6881ee");
        Ok(())
    }
}

mod encoding_5 {
    use bencanon::encoding::{AsString, Error, Production, ToBencode};

    struct ByteStringWrapper(Vec<u8>);

    impl ToBencode for ByteStringWrapper {
        fn classify(&self) -> Result<Production<'_>, Error> {
            Ok(Production::bytes(&self.0))
        }
    }

    #[test]
    fn encode_byte_string() -> Result<(), Error> {
        let example = ByteStringWrapper(b"content".to_vec());

        let encoded = example.to_bencode()?;
        assert_eq!(b"7:content", encoded.as_slice());

        let encoded = AsString(b"content").to_bencode()?;
        assert_eq!(b"7:content", encoded.as_slice());

        Ok(())
    }
}

mod encoding_6 {
    use bencanon::{Error, Value, marshal};

    #[test]
    fn encode_dynamic_value() -> Result<(), Error> {
        let mut query = Value::dict();
        query.insert(&b"y"[..], "q").unwrap();
        query.insert(&b"q"[..], "ping").unwrap();
        query.insert(&b"t"[..], "aa").unwrap();

        assert_eq!(marshal(&query)?, b"d1:q4:ping1:t2:aa1:y1:qe");
        Ok(())
    }
}

mod encoding_7 {
    use bencanon::{
        Encoder, marshal,
        encoding::{DEFAULT_MAX_DEPTH, Error, ErrorKind},
    };

    #[test]
    fn nesting_is_limited() -> Result<(), Error> {
        let nested = vec![vec![vec![1]]];

        let error = Encoder::new(Vec::new())
            .with_max_depth(2)
            .encode(&nested)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DepthExceeded);
        assert_eq!(DEFAULT_MAX_DEPTH, 512);

        assert_eq!(marshal(&nested)?, b"llli1eeee");
        Ok(())
    }
}
