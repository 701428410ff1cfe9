//! Tests for alien-output.

#[cfg(test)]
mod helpers {
    use alien_map::City;
    use alien_sim::{Alien, Event};

    pub fn destroyed() -> Event {
        Event::CityDestroyed {
            city:   City::new("Bar"),
            aliens: vec![Alien::new("A1", "Bar"), Alien::new("A3", "Bar")],
        }
    }

    pub fn lonely() -> Event {
        Event::CityHasNoNeighbors { city: City::new("Bee") }
    }

    pub fn trapped() -> Event {
        Event::AlienTrapped { city: City::new("Yee"), alien: Alien::new("A2", "Yee") }
    }
}

// ── LinePrinter ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod printer_tests {
    use super::helpers::*;
    use crate::{EventWriter, LinePrinter};

    #[test]
    fn prefixes_each_event() {
        let mut p = LinePrinter::new(Vec::new());
        p.write_event(1, &trapped()).unwrap();
        p.write_event(2, &destroyed()).unwrap();
        p.write_event(3, &lonely()).unwrap();
        p.finish().unwrap();

        let out = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(
            out,
            "e>alien \"A2\" has trapped in city \"Yee\"\n\
             e>\"Bar\" has been destroyed by some mad aliens: \n\t[A1 A3]\n\
             e>city \"Bee\" left with no neighbors\n",
        );
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::helpers::*;
    use crate::{CsvEventWriter, EventRow, EventWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_written_even_without_events() {
        let dir = tmp();
        let path = dir.path().join("events.csv");
        let mut w = CsvEventWriter::new(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, EventRow::HEADERS);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn rows_match_events() {
        let dir = tmp();
        let path = dir.path().join("events.csv");
        let mut w = CsvEventWriter::new(&path).unwrap();
        w.write_event(1, &destroyed()).unwrap();
        w.write_event(2, &lonely()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "city_destroyed");
        assert_eq!(&rows[0][2], "Bar");
        assert_eq!(&rows[0][3], "A1 A3");
        assert_eq!(&rows[1][1], "city_has_no_neighbors");
        assert_eq!(&rows[1][3], "");
    }

    #[test]
    fn row_from_trapped_event() {
        let row = EventRow::new(7, &trapped());
        assert_eq!(row.seq, 7);
        assert_eq!(row.kind, "alien_trapped");
        assert_eq!(row.city, "Yee");
        assert_eq!(row.aliens, "A2");
    }
}

// ── Combinators ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer_tests {
    use std::io;

    use alien_sim::Event;

    use super::helpers::*;
    use crate::{EventWriter, LinePrinter, OutputError, OutputResult};

    /// Fails every write.
    pub struct Broken;

    impl EventWriter for Broken {
        fn write_event(&mut self, _seq: u64, _event: &Event) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("broken")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn none_writes_nothing() {
        let mut w: Option<LinePrinter<Vec<u8>>> = None;
        w.write_event(1, &lonely()).unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn pair_feeds_both_even_when_first_fails() {
        let mut pair = (Broken, LinePrinter::new(Vec::new()));
        assert!(pair.write_event(1, &lonely()).is_err());
        let out = String::from_utf8(pair.1.into_inner()).unwrap();
        assert_eq!(out, "e>city \"Bee\" left with no neighbors\n");
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reporter_tests {
    use alien_map::{complete_map, parse_map};
    use alien_sim::{WorldBuilder, event_channel};

    use super::helpers::*;
    use super::writer_tests::Broken;
    use crate::{LinePrinter, OutputError, Reporter};

    #[test]
    fn drains_until_sender_dropped() {
        let (tx, rx) = event_channel();
        let reporter = Reporter::spawn(rx, LinePrinter::new(Vec::new()));
        tx.send(trapped());
        tx.send(lonely());
        drop(tx);

        let out = String::from_utf8(reporter.join().unwrap().into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("e>alien \"A2\""));
    }

    #[test]
    fn failing_writer_still_drains() {
        let (tx, rx) = event_channel();
        let reporter = Reporter::spawn(rx, Broken);
        // Each send blocks until taken, so these only return if the
        // reporter keeps receiving after the first failure.
        tx.send(destroyed());
        tx.send(lonely());
        drop(tx);
        assert!(matches!(reporter.join(), Err(OutputError::Io(_))));
    }

    #[test]
    fn reports_a_whole_run() {
        let mut map = parse_map("A east=B\nB east=C\n").unwrap();
        complete_map(&mut map).unwrap();

        let (tx, rx) = event_channel();
        let reporter = Reporter::spawn(rx, LinePrinter::new(Vec::new()));
        let world = WorldBuilder::new(map).events(tx).seed(9).build().unwrap();
        world.spawn(2);
        world.run_to_end();
        assert!(world.is_terminated());

        // The world dropped its sender on termination, so join returns.
        let out = String::from_utf8(reporter.join().unwrap().into_inner()).unwrap();
        for line in out.lines() {
            assert!(line.starts_with("e>") || line.starts_with('\t'), "stray line {line:?}");
        }
    }
}
