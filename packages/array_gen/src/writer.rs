// Serialization of input files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::{Error, InputShape, Numbering, Result};

/// Writes an input file of the given shape to `out`.
///
/// The first line is the `K M` header, followed by one line per array with its elements
/// separated by single spaces. Every line, including the last, ends with `\n`.
///
/// # Errors
///
/// Returns any error reported by `out`.
pub fn write_input(
    out: &mut impl Write,
    shape: InputShape,
    numbering: Numbering,
) -> io::Result<()> {
    writeln!(out, "{shape}")?;

    let elements = shape.elements().get();

    match numbering {
        Numbering::Continuous => {
            let mut counter = 1_u64..;

            for _ in 0..shape.arrays().get() {
                let row = (0..elements).map_while(|_| counter.next());
                writeln!(out, "{}", row.format(" "))?;
            }
        }
        Numbering::PerArray => {
            for _ in 0..shape.arrays().get() {
                writeln!(out, "{}", (1..=elements).format(" "))?;
            }
        }
    }

    Ok(())
}

/// Writes an input file of the given shape to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be created or written. The parent directory must
/// already exist.
pub fn generate_file(path: &Path, shape: InputShape, numbering: Numbering) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);

    write_input(&mut out, shape, numbering)
        .and_then(|()| out.flush())
        .map_err(write_error)?;

    debug!(path = %path.display(), %shape, %numbering, "input file written");

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fs;

    use super::*;

    fn render(arrays: u64, elements: u64, numbering: Numbering) -> String {
        let shape = InputShape::try_new(arrays, elements).unwrap();

        let mut buffer = Vec::new();
        write_input(&mut buffer, shape, numbering).unwrap();

        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn five_by_five_per_array() {
        let contents = render(5, 5, Numbering::PerArray);
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines.first(), Some(&"5 5"));
        assert_eq!(lines.get(1), Some(&"1 2 3 4 5"));
        assert!(lines.iter().skip(1).all(|line| *line == "1 2 3 4 5"));
    }

    #[test]
    fn five_by_five_continuous() {
        let contents = render(5, 5, Numbering::Continuous);
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines.get(1), Some(&"1 2 3 4 5"));
        assert_eq!(lines.get(2), Some(&"6 7 8 9 10"));
        assert_eq!(lines.get(5), Some(&"21 22 23 24 25"));
    }

    #[test]
    fn line_and_token_counts_hold_for_assorted_shapes() {
        for (arrays, elements) in [(1, 1), (1, 17), (13, 1), (10, 100), (3, 1000)] {
            for numbering in [Numbering::Continuous, Numbering::PerArray] {
                let contents = render(arrays, elements, numbering);
                let lines: Vec<&str> = contents.lines().collect();

                let header = format!("{arrays} {elements}");

                assert_eq!(lines.len() as u64, arrays + 1, "{header} {numbering}");
                assert_eq!(lines.first().copied(), Some(header.as_str()));

                for line in lines.iter().skip(1) {
                    assert_eq!(line.split_whitespace().count() as u64, elements);
                }
            }
        }
    }

    #[test]
    fn continuous_counter_is_not_reset_between_arrays() {
        let contents = render(3, 4, Numbering::Continuous);

        let numbers: Vec<u64> = contents
            .lines()
            .skip(1)
            .flat_map(str::split_whitespace)
            .map(|token| token.parse().unwrap())
            .collect();

        assert_eq!(numbers, (1..=12).collect::<Vec<u64>>());
    }

    #[test]
    fn output_ends_with_newline_and_has_no_trailing_spaces() {
        let contents = render(2, 3, Numbering::PerArray);

        assert_eq!(contents, "2 3\n1 2 3\n1 2 3\n");
    }

    #[test]
    fn generate_file_overwrites_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.txt");

        fs::write(&path, "stale contents, longer than the new file\n").unwrap();

        generate_file(
            &path,
            InputShape::try_new(1, 2).unwrap(),
            Numbering::Continuous,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1 2\n1 2\n");
    }

    #[test]
    fn generate_file_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("data.txt");

        let error = generate_file(
            &path,
            InputShape::try_new(1, 1).unwrap(),
            Numbering::PerArray,
        )
        .unwrap_err();

        assert!(matches!(error, Error::Write { path: p, .. } if p == path));
    }
}
