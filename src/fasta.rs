/*!
Minimal FASTA reading and writing for fragment collections and contigs.
Headers start with `>`, every other non-empty line is sequence data, and sequences are lowercased on the way in.
*/

use log::debug;
use simple_error::bail;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::sequence_collection::SequenceCollection;

/// Parses raw FASTA records from a reader, returning the non-empty sequences in file order.
/// # Arguments
/// * `reader` - any buffered source of FASTA text
/// # Errors
/// * if reading fails
/// * if sequence data appears before the first header
/// * if there are no non-empty records at all
pub fn read_fasta_records<R: BufRead>(reader: R) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut records: Vec<String> = vec![];
    let mut current: Option<String> = None;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            // headers without sequence lines are dropped
            if let Some(sequence) = current.take().filter(|s| !s.is_empty()) {
                records.push(sequence);
            }
            current = Some(String::new());
        } else {
            match current.as_mut() {
                Some(sequence) => sequence.push_str(&line.to_lowercase()),
                None => {
                    bail!("Sequence data found before the first header on line {}", line_index + 1);
                }
            }
        }
    }
    if let Some(sequence) = current.filter(|s| !s.is_empty()) {
        records.push(sequence);
    }

    if records.is_empty() {
        bail!("No FASTA records found");
    }
    Ok(records)
}

/// Loads a FASTA file into an encoded collection
/// # Arguments
/// * `filename` - the FASTA file to load
/// # Errors
/// * if the file cannot be read or parsed
/// * if any record contains a symbol outside of {a, c, g, t}
pub fn load_collection(filename: &Path) -> Result<SequenceCollection, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(filename)?;
    let records = read_fasta_records(std::io::BufReader::new(file))?;
    debug!("Loaded {} records from {filename:?}", records.len());
    Ok(SequenceCollection::from_strings(&records)?)
}

/// Writes one sequence as a FASTA record with header `>{label} length={len}`.
/// # Arguments
/// * `writer` - the destination
/// * `label` - the header label
/// * `sequence` - the sequence to write
/// * `line_width` - symbols per line, must be > 0
/// # Errors
/// * if writing fails
pub fn write_fasta_record<W: Write>(writer: &mut W, label: &str, sequence: &str, line_width: usize) -> Result<(), Box<dyn std::error::Error>> {
    if line_width == 0 {
        bail!("FASTA line width must be greater than 0");
    }
    writeln!(writer, ">{label} length={}", sequence.len())?;
    for chunk in sequence.as_bytes().chunks(line_width) {
        writer.write_all(chunk)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Saves a single sequence to a new FASTA file, overwriting anything already there
/// # Arguments
/// * `filename` - the output path
/// * `label` - the header label
/// * `sequence` - the sequence to write
/// * `line_width` - symbols per line
/// # Errors
/// * if the file cannot be created or written
pub fn save_fasta(filename: &Path, label: &str, sequence: &str, line_width: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(filename)?);
    write_fasta_record(&mut writer, label, sequence, line_width)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records() {
        let text = ">frag 1\nACGT\nacg\n\n>frag 2\nttt\n>empty\n";
        let records = read_fasta_records(text.as_bytes()).unwrap();
        assert_eq!(records, vec!["acgtacg".to_string(), "ttt".to_string()]);
    }

    #[test]
    fn test_empty_records_dropped() {
        let text = ">r0\n>r1\nacgtacgt\n>r2\n>r3\ngtacgtac\n";
        let records = read_fasta_records(text.as_bytes()).unwrap();
        assert_eq!(records, vec!["acgtacgt".to_string(), "gtacgtac".to_string()]);

        // only the real reads reach the layout
        let collection = SequenceCollection::from_strings(&records).unwrap();
        let contig = crate::assembler::ContigAssembler::default().assemble(&collection).unwrap();
        assert_eq!(contig.path(), &[0, 1]);
        assert_eq!(contig.sequence(), "acgtacgtac");

        let err = read_fasta_records(">r0\n>r1\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "No FASTA records found");
    }

    #[test]
    fn test_read_errors() {
        let err = read_fasta_records("acgt\n>frag\nacgt\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Sequence data found before the first header on line 1");

        let err = read_fasta_records("\n\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "No FASTA records found");
    }

    #[test]
    fn test_write_wrapped() {
        let mut buffer: Vec<u8> = vec![];
        write_fasta_record(&mut buffer, "contig", "acgtacgtac", 4).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), ">contig length=10\nacgt\nacgt\nac\n");

        let mut buffer: Vec<u8> = vec![];
        assert!(write_fasta_record(&mut buffer, "contig", "acgt", 0).is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let filename = std::env::temp_dir().join(format!("overlap_con_fasta_{}.fa", std::process::id()));
        save_fasta(&filename, "test", "acgtacgt", 80).unwrap();
        let collection = load_collection(&filename).unwrap();
        std::fs::remove_file(&filename).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().to_string(), "acgtacgt");
    }
}
