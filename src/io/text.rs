//! Plain-text candidate files: accepted lines are echoed verbatim.

use std::io::Write;

/// Write accepted lines in order, one per line.
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_order_and_content() {
        let lines = vec!["id1,CCO,active".to_string(), "id2,CCN,inactive".to_string()];
        let mut out = Vec::new();
        write_lines(&mut out, &lines).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id1,CCO,active\nid2,CCN,inactive\n"
        );
    }
}
