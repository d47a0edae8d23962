use record_greeter::{greet, GreetError, InMemoryDirectory, LookupError, Record, RecordSource};

struct FakeSource {
    record: Record,
    err: bool,
}

impl RecordSource for FakeSource {
    fn fetch(&self, _name: &str) -> Result<Record, LookupError> {
        if self.err {
            return Err(LookupError::new("error"));
        }
        Ok(self.record.clone())
    }
}

#[test]
fn test_greet_scenarios() {
    let failing = FakeSource {
        record: Record::new("", 0),
        err: true,
    };
    assert!(greet("John", &failing).unwrap_err().is_lookup());

    let wrong_name = FakeSource {
        record: Record::new("Bob", 20),
        err: false,
    };
    let err = greet("John", &wrong_name).unwrap_err();
    assert_eq!(err.to_string(), "server returned record for Bob, not John");

    let adult = FakeSource {
        record: Record::new("John", 20),
        err: false,
    };
    assert_eq!(greet("John", &adult).unwrap(), "Greetings John");

    let minor = FakeSource {
        record: Record::new("Mella", 12),
        err: false,
    };
    assert_eq!(greet("Mella", &minor).unwrap(), "Greetings young one");
}

#[test]
fn test_greet_through_directory() {
    let _ = record_greeter::utils::logger::init_logger(true);

    let directory = InMemoryDirectory::from_json(
        r#"[
            {"name": "John", "age": 20},
            {"name": "Mella", "age": 17}
        ]"#,
    )
    .unwrap();

    assert_eq!(greet("John", &directory).unwrap(), "Greetings John");
    assert_eq!(greet("Mella", &directory).unwrap(), "Greetings young one");

    match greet("Bob", &directory) {
        Err(GreetError::Lookup(e)) => assert_eq!(e.to_string(), "no record found for Bob"),
        other => panic!("expected lookup error, got {:?}", other),
    }
}

#[test]
fn test_greet_with_dyn_source() {
    let sources: Vec<Box<dyn RecordSource>> = vec![
        Box::new(InMemoryDirectory::from_records(vec![Record::new("John", 30)])),
        Box::new(FakeSource {
            record: Record::new("John", 30),
            err: false,
        }),
    ];

    for source in &sources {
        assert_eq!(greet("John", source.as_ref()).unwrap(), "Greetings John");
    }
}
