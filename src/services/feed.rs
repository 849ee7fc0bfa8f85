//! Contact Feed
//!
//! Reads newline-delimited JSON contacts on a background thread and
//! forwards them to the UI thread. Lines that do not decode are reported
//! and skipped; they never stop the feed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::thread::JoinHandle;

use flume::Sender;

use crate::domain::config::FeedConfig;
use crate::domain::contact::Contact;
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;

/// Counts for one feed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub accepted: usize,
    pub skipped: usize,
}

/// Start the configured feed, if any
///
/// Returns `Ok(None)` when neither a file nor stdin is configured.
pub fn spawn(config: &FeedConfig, tx: Sender<AppEvent>) -> Result<Option<JoinHandle<()>>> {
    let (source, reader): (String, Box<dyn BufRead + Send>) = if let Some(path) = &config.path {
        let file = File::open(path)?;
        (path.display().to_string(), Box::new(BufReader::new(file)))
    } else if config.stdin {
        ("stdin".to_string(), Box::new(BufReader::new(std::io::stdin())))
    } else {
        tracing::info!("No contact feed configured");
        return Ok(None);
    };

    tracing::info!(%source, "Starting contact feed");
    let handle = std::thread::Builder::new()
        .name("contact-feed".to_string())
        .spawn(move || match pump_lines(reader, &tx) {
            Ok(summary) => tracing::info!(
                %source,
                accepted = summary.accepted,
                skipped = summary.skipped,
                "Contact feed finished"
            ),
            Err(err) => tracing::error!(%source, %err, "Contact feed stopped"),
        })?;

    Ok(Some(handle))
}

/// Decode every line of `reader` and send the results to `tx`
///
/// Blank lines are ignored. Ends with a `FeedFinished` event.
pub fn pump_lines(reader: impl BufRead, tx: &Sender<AppEvent>) -> Result<FeedSummary> {
    let mut summary = FeedSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event = match Contact::from_json(trimmed) {
            Ok(contact) => {
                summary.accepted += 1;
                AppEvent::ContactReceived(contact)
            }
            Err(err) => {
                summary.skipped += 1;
                tracing::warn!(line = index + 1, %err, "Skipping feed line");
                AppEvent::skipped(index + 1, err.to_string())
            }
        };
        send(tx, event)?;
    }

    send(
        tx,
        AppEvent::FeedFinished {
            accepted: summary.accepted,
            skipped: summary.skipped,
        },
    )?;
    Ok(summary)
}

fn send(tx: &Sender<AppEvent>, event: AppEvent) -> Result<()> {
    tx.send(event).map_err(|e| Error::ChannelSend {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain(rx: &flume::Receiver<AppEvent>) -> Vec<AppEvent> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn test_pump_forwards_contacts_in_order() {
        let (tx, rx) = flume::unbounded();
        let input = Cursor::new(
            "{\"name\":\"Ann\",\"phone\":\"555\",\"email\":\"a@x.com\"}\n\
             {\"name\":\"Bo\",\"phone\":\"111\",\"email\":\"b@x.com\"}\n",
        );

        let summary = pump_lines(input, &tx).expect("pump");
        assert_eq!(summary, FeedSummary { accepted: 2, skipped: 0 });
        assert_eq!(
            drain(&rx),
            vec![
                AppEvent::ContactReceived(Contact::new("Ann", "555", "a@x.com")),
                AppEvent::ContactReceived(Contact::new("Bo", "111", "b@x.com")),
                AppEvent::FeedFinished { accepted: 2, skipped: 0 },
            ]
        );
    }

    #[test]
    fn test_bad_lines_skipped() {
        let (tx, rx) = flume::unbounded();
        let input = Cursor::new("\n[1]\n{\"name\":\"Cy\"}\nnot json\n");

        let summary = pump_lines(input, &tx).expect("pump");
        assert_eq!(summary, FeedSummary { accepted: 1, skipped: 2 });

        let events = drain(&rx);
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], AppEvent::FeedSkipped { line: 2, .. }));
        assert_eq!(
            events[1],
            AppEvent::ContactReceived(Contact::new("Cy", "", ""))
        );
        assert!(matches!(events[2], AppEvent::FeedSkipped { line: 4, .. }));
    }

    #[test]
    fn test_closed_channel_stops_pump() {
        let (tx, rx) = flume::unbounded();
        drop(rx);
        let err = pump_lines(Cursor::new("{\"name\":\"Ann\"}\n"), &tx).expect_err("closed");
        assert!(matches!(err, Error::ChannelSend { .. }));
    }

    #[test]
    fn test_spawn_without_source() {
        let (tx, _rx) = flume::unbounded();
        let handle = spawn(&FeedConfig::default(), tx).expect("spawn");
        assert!(handle.is_none());
    }

    #[test]
    fn test_spawn_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("contacts.jsonl");
        std::fs::write(&path, "{\"name\":\"Ann\",\"phone\":\"555\",\"email\":\"a@x.com\"}\n")
            .expect("write feed");

        let (tx, rx) = flume::unbounded();
        let config = FeedConfig {
            path: Some(path),
            stdin: false,
        };
        let handle = spawn(&config, tx).expect("spawn").expect("feed started");
        handle.join().expect("feed thread");

        assert_eq!(
            drain(&rx),
            vec![
                AppEvent::ContactReceived(Contact::new("Ann", "555", "a@x.com")),
                AppEvent::FeedFinished { accepted: 1, skipped: 0 },
            ]
        );
    }

    #[test]
    fn test_spawn_missing_file() {
        let (tx, _rx) = flume::unbounded();
        let config = FeedConfig {
            path: Some("/nonexistent/contacts.jsonl".into()),
            stdin: false,
        };
        assert!(matches!(spawn(&config, tx), Err(Error::Io { .. })));
    }
}
