//! Log output of deck rendering, with the `tracing` feature on.

#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use nomen::Decorator;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn rejected_line_names_the_error_field() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let decorator = Decorator::default();
        let results: Vec<_> = decorator
            .render_deck("dem Tisch;die Tische;table;-;A1")
            .collect();
        assert!(results[0].is_err());
    });

    let log = capture.contents();
    assert!(log.contains("rejected line"), "{log}");
    assert!(log.contains("error=unknown article"), "{log}");
    assert!(!log.contains("_err="), "{log}");
}
