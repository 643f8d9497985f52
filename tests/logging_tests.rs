use std::{
    io,
    sync::{Arc, Mutex},
};

use keydex::{Accessor, JsonArray, JsonObject};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Collects formatted events so tests can inspect them.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("keydex=trace"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_opt_fallback_emits_trace_event() {
    let mut object = JsonObject::new();
    object.put("word", "abc").unwrap();

    let logs = capture(|| assert_eq!(object.opt_int_or("word", 5), 5));
    assert!(logs.contains("TRACE"), "{logs}");
    assert!(logs.contains("optional accessor falling back to default"), "{logs}");
    assert!(logs.contains("container=\"JsonObject\""), "{logs}");
    assert!(logs.contains("keydex=word"), "{logs}");
    assert!(logs.contains("requested=\"Integer\""), "{logs}");
}

#[test]
fn test_opt_fallback_on_array_names_offset() {
    let array = JsonArray::from_values([true]).unwrap();

    let logs = capture(|| assert_eq!(array.opt_long(3), 0));
    assert!(logs.contains("container=\"JsonArray\""), "{logs}");
    assert!(logs.contains("keydex=3"), "{logs}");
    assert!(logs.contains("requested=\"Long\""), "{logs}");
}

#[test]
fn test_successful_opt_is_silent() {
    let mut object = JsonObject::new();
    object.put("n", 4).unwrap();

    let logs = capture(|| {
        assert_eq!(object.opt_int("n"), 4);
        assert!(object.opt_boolean_or("missing", true));
    });
    assert!(!logs.contains("keydex=n"), "{logs}");
    assert!(logs.contains("keydex=missing"), "{logs}");
}

#[test]
fn test_increment_creation_emits_trace_event() {
    let mut object = JsonObject::new();

    let logs = capture(|| object.increment("created").unwrap());
    assert!(logs.contains("increment creating counter"), "{logs}");
    assert!(logs.contains("key=\"created\""), "{logs}");

    let logs = capture(|| object.increment("created").unwrap());
    assert!(!logs.contains("increment creating counter"), "{logs}");
    assert_eq!(object.get_int("created").unwrap(), 2);
}

#[test]
fn test_parse_rejection_emits_debug_event() {
    let logs = capture(|| assert!(keydex::from_str::<JsonObject>("{").is_err()));
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("rejected JSON text"), "{logs}");
    assert!(logs.contains("error="), "{logs}");
}
