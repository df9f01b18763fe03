use std::io::Write;

use super::SdfRecord;

/// Write records back out with their original lines, each terminated by the
/// standard `$$$$` delimiter.
pub fn write_records<W: Write>(mut writer: W, records: &[SdfRecord]) -> std::io::Result<()> {
    for record in records {
        for line in &record.lines {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer, "$$$$")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::sdf::SdfRecords;
    use std::io::Cursor;

    #[test]
    fn roundtrip_preserves_record_lines() {
        let input = "\
mol-1
     generator
comment line
  0  0  0  0  0  0  0  0  0  0999 V2000
M  END
>  <SMILES>
c1ccccc1
$$$$
";
        let records: Vec<_> = SdfRecords::new(Cursor::new(input))
            .collect::<std::io::Result<_>>()
            .unwrap();

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    #[test]
    fn empty_set_writes_nothing() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
