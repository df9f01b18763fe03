use std::io::BufRead;

use super::SdfRecord;

/// Streaming iterator over the records of an SDF source.
///
/// Yields one [`SdfRecord`] per `$$$$`-delimited block; a trailing block
/// without a terminator is still yielded. Blank blocks (for instance after
/// a final delimiter) are dropped.
pub struct SdfRecords<R: BufRead> {
    reader: R,
    done: bool,
}

impl<R: BufRead> SdfRecords<R> {
    pub fn new(reader: R) -> Self {
        SdfRecords { reader, done: false }
    }

    fn next_record(&mut self) -> std::io::Result<Option<SdfRecord>> {
        while !self.done {
            let mut lines = Vec::new();
            let mut saw_terminator = false;

            loop {
                let mut line = String::new();
                let n = self.reader.read_line(&mut line)?;
                if n == 0 {
                    self.done = true;
                    break;
                }
                // Record bytes stay as-is apart from the line terminator
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                if line.trim() == "$$$$" {
                    saw_terminator = true;
                    break;
                }
                lines.push(line);
            }

            if lines.iter().any(|l| !l.trim().is_empty()) {
                return Ok(Some(SdfRecord { lines }));
            }
            if !saw_terminator {
                break;
            }
        }
        Ok(None)
    }
}

impl<R: BufRead> Iterator for SdfRecords<R> {
    type Item = std::io::Result<SdfRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_RECORDS: &str = "\
first
  0  0  0  0  0  0  0  0  0  0999 V2000
M  END
>  <SMILES>
CCO
$$$$
second
M  END
$$$$
";

    #[test]
    fn splits_on_delimiter() {
        let records: Vec<_> = SdfRecords::new(Cursor::new(TWO_RECORDS))
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lines[0], "first");
        assert_eq!(records[0].property("SMILES"), Some("CCO"));
        assert_eq!(records[1].lines[0], "second");
    }

    #[test]
    fn trailing_record_without_terminator() {
        let records: Vec<_> = SdfRecords::new(Cursor::new("only\nM  END\n"))
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines, vec!["only", "M  END"]);
    }

    #[test]
    fn blank_trailing_block_is_dropped() {
        let records: Vec<_> = SdfRecords::new(Cursor::new("a\n$$$$\n\n\n"))
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let mut it = SdfRecords::new(Cursor::new(""));
        assert!(it.next().is_none());
    }

    #[test]
    fn crlf_input_is_tolerated() {
        let records: Vec<_> = SdfRecords::new(Cursor::new("a\r\nM  END\r\n$$$$\r\n"))
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(records[0].lines, vec!["a", "M  END"]);
    }
}
